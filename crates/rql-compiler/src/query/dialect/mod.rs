//! Defines the `Dialect` trait for database-specific SQL syntax.
//!
//! A dialect only carries the handful of points where engines disagree. The
//! translation rules themselves live in the renderer and are shared by all
//! dialects.

use crate::{error::RqlError, query::literal};
use rql_model::Limit;

pub mod firebird;
pub mod interbase;
pub mod mysql;
pub mod postgres;
pub mod sqlite;

pub use firebird::Firebird;
pub use interbase::Interbase;
pub use mysql::MySql;
pub use postgres::Postgres;
pub use sqlite::Sqlite;

pub trait Dialect: Send + Sync {
    /// Returns the registry name of the dialect (e.g., "postgresql").
    fn name(&self) -> &'static str;

    /// Opening and closing delimiters for identifiers that need quoting.
    ///
    /// - PostgreSQL, Firebird, SQLite use double quotes: `"my column"`
    /// - MySQL uses backticks: `` `my column` ``
    fn identifier_quotes(&self) -> (char, char) {
        ('"', '"')
    }

    /// Wraps an identifier in the dialect's quotation marks unless it is a
    /// plain name.
    fn quote_identifier(&self, ident: &str) -> Result<String, RqlError> {
        let (open, close) = self.identifier_quotes();
        literal::quote_identifier(ident, open, close)
    }

    /// Renders a string literal. The SQL-92 rule doubles embedded single quotes.
    fn quote_string(&self, value: &str) -> Result<String, RqlError> {
        literal::quote_string(value, '\'', false)
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }

    /// How `contains`/`starts` express a case-insensitive `LIKE`.
    fn case_insensitive_match(&self) -> CaseInsensitiveMatch {
        CaseInsensitiveMatch::FoldLower
    }

    /// Renders the pagination clause. Offset is omitted when `start` is zero.
    /// Both values must fit a signed 64-bit integer.
    fn render_limit(&self, limit: &Limit) -> Result<String, RqlError> {
        let count = literal::bigint_literal(limit.count.get())?;
        let start = literal::bigint_literal(limit.start)?;
        Ok(if limit.start == 0 {
            format!(" /*limit*/ LIMIT {count}")
        } else {
            format!(" /*limit*/ LIMIT {count} OFFSET {start}")
        })
    }
}

/// Spelling of a case-insensitive pattern match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseInsensitiveMatch {
    /// `col ILIKE pattern`
    ILike,
    /// `LOWER(col) LIKE LOWER(pattern)`
    FoldLower,
    /// `UPPER(col) LIKE UPPER(pattern)`
    FoldUpper,
}

impl CaseInsensitiveMatch {
    /// `column` is an already-quoted identifier; `pattern` and `escape` are
    /// already-quoted string literals.
    pub fn render(&self, column: &str, pattern: &str, escape: &str) -> String {
        match self {
            CaseInsensitiveMatch::ILike => {
                format!("({column} ILIKE {pattern} ESCAPE {escape})")
            }
            CaseInsensitiveMatch::FoldLower => {
                format!("(LOWER({column}) LIKE LOWER({pattern}) ESCAPE {escape})")
            }
            CaseInsensitiveMatch::FoldUpper => {
                format!("(UPPER({column}) LIKE UPPER({pattern}) ESCAPE {escape})")
            }
        }
    }
}
