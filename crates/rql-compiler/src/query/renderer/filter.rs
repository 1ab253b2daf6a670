use crate::{
    error::RqlError,
    query::{
        literal::{self, LIKE_ESCAPE},
        renderer::{Render, Renderer},
    },
};
use rql_model::{Filter, Operator, ValueType};

const SCALAR: &str = "string or plain value";
const ARRAY: &str = "integer array or string array";

impl Render for Filter {
    fn render(&self, r: &mut Renderer) -> Result<(), RqlError> {
        let column = r.column(&self.left_field)?;

        let sql = match self.token {
            Operator::Eq if self.right_value == ValueType::Null => {
                format!("({column} IS NULL)")
            }
            Operator::Ne if self.right_value == ValueType::Null => {
                format!("({column} IS NOT NULL)")
            }
            Operator::Eq => comparison(self, r, &column, "=")?,
            Operator::Ne => comparison(self, r, &column, "!=")?,
            Operator::Lt => comparison(self, r, &column, "<")?,
            Operator::Le => comparison(self, r, &column, "<=")?,
            Operator::Gt => comparison(self, r, &column, ">")?,
            Operator::Ge => comparison(self, r, &column, ">=")?,
            Operator::Contains | Operator::Starts => pattern_match(self, r, &column)?,
            Operator::In | Operator::Out => membership(self, r, &column)?,
            Operator::And | Operator::Or => {
                return Err(RqlError::UnexpectedToken {
                    token: self.token,
                    node: "filter",
                });
            }
        };

        r.sql.push_str(&sql);
        Ok(())
    }
}

fn operand_mismatch(filter: &Filter) -> RqlError {
    RqlError::InvalidOperandType {
        token: filter.token,
        got: filter.right_value,
        expected: if filter.token.is_membership() {
            ARRAY
        } else {
            SCALAR
        },
    }
}

fn comparison(
    filter: &Filter,
    r: &Renderer,
    column: &str,
    comparator: &str,
) -> Result<String, RqlError> {
    let value = scalar_literal(filter, r)?;
    Ok(format!("({column} {comparator} {value})"))
}

/// Renders the right-hand side of a scalar comparison.
fn scalar_literal(filter: &Filter, r: &Renderer) -> Result<String, RqlError> {
    match filter.right_value {
        ValueType::String => r.dialect.quote_string(&filter.right_raw),
        ValueType::Plain => {
            let raw = filter.right_raw.trim();
            if let Some(value) = literal::parse_boolean(raw) {
                Ok(r.dialect.boolean_literal(value).to_string())
            } else if literal::is_numeric_literal(raw) {
                Ok(raw.to_string())
            } else {
                Err(RqlError::invalid_literal(
                    &filter.right_raw,
                    "plain value is neither a number nor a boolean",
                ))
            }
        }
        ValueType::Null | ValueType::IntegerArray | ValueType::StringArray => {
            Err(operand_mismatch(filter))
        }
    }
}

/// `contains` and `starts`: escaped, quoted, case-insensitive `LIKE`.
fn pattern_match(filter: &Filter, r: &Renderer, column: &str) -> Result<String, RqlError> {
    if filter.right_value.is_array() || filter.right_value == ValueType::Null {
        return Err(operand_mismatch(filter));
    }

    let escaped = literal::escape_like(&filter.right_raw);
    let pattern = if filter.token == Operator::Contains {
        format!("%{escaped}%")
    } else {
        format!("{escaped}%")
    };

    let pattern = r.dialect.quote_string(&pattern)?;
    let escape = r.dialect.quote_string(&LIKE_ESCAPE.to_string())?;
    let matcher = r.dialect.case_insensitive_match();
    Ok(matcher.render(column, &pattern, &escape))
}

/// `in` / `out` over an integer or string list.
fn membership(filter: &Filter, r: &Renderer, column: &str) -> Result<String, RqlError> {
    if !filter.right_value.is_array() {
        return Err(operand_mismatch(filter));
    }

    let items = filter
        .right_array
        .iter()
        .map(|item| match filter.right_value {
            ValueType::IntegerArray => literal::integer_literal(item),
            _ => r.dialect.quote_string(item),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if items.is_empty() {
        return Err(RqlError::EmptyNode("value list"));
    }

    let keyword = if filter.token == Operator::Out {
        "NOT IN"
    } else {
        "IN"
    };
    Ok(format!("({column} {keyword} ({}))", items.join(",")))
}
