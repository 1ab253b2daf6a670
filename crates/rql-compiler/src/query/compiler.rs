use crate::{
    error::RqlError,
    query::{
        dialect::Dialect,
        renderer::{Render, Renderer},
        resolver::FieldResolver,
    },
};
use rql_model::{Limit, RqlNode, SyntaxTree};
use std::{num::NonZeroU64, sync::Arc};
use tracing::debug;

/// Per-call settings for [`RqlCompiler::compile_tree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Upper bound on the page size. A tree without a `Limit` gets
    /// `LIMIT max`; larger limits are clamped.
    pub max_record_count: Option<NonZeroU64>,
}

impl CompileOptions {
    pub fn with_max_record_count(max: NonZeroU64) -> Self {
        Self {
            max_record_count: Some(max),
        }
    }
}

/// Translates RQL nodes into SQL fragments for one dialect.
///
/// Holds no per-query state, so a single instance can be shared between
/// threads and reused for any number of queries.
#[derive(Clone)]
pub struct RqlCompiler {
    dialect: Arc<dyn Dialect>,
}

impl RqlCompiler {
    pub fn new<D: Dialect + 'static>(dialect: D) -> Self {
        Self {
            dialect: Arc::new(dialect),
        }
    }

    pub fn from_boxed(dialect: Box<dyn Dialect>) -> Self {
        Self {
            dialect: Arc::from(dialect),
        }
    }

    pub fn name(&self) -> &'static str {
        self.dialect.name()
    }

    /// Compiles one node (and its children) into a SQL fragment.
    pub fn compile(
        &self,
        node: &RqlNode,
        resolver: &dyn FieldResolver,
    ) -> Result<String, RqlError> {
        let mut renderer = Renderer::new(self.dialect.as_ref(), resolver);
        node.render(&mut renderer)?;
        let sql = renderer.finish();

        debug!(
            "Compiled {} node for {} ({} bytes)",
            node.kind(),
            self.name(),
            sql.len()
        );
        Ok(sql)
    }

    /// Compiles every top-level node of a query, in order, applying the
    /// record cap from `options`.
    pub fn compile_tree(
        &self,
        tree: &SyntaxTree,
        resolver: &dyn FieldResolver,
        options: &CompileOptions,
    ) -> Result<String, RqlError> {
        let mut renderer = Renderer::new(self.dialect.as_ref(), resolver);

        for node in tree {
            match (node, options.max_record_count) {
                (RqlNode::Limit(limit), Some(max)) if limit.count > max => {
                    debug!("Clamping limit {} to max record count {}", limit.count, max);
                    Limit {
                        start: limit.start,
                        count: max,
                    }
                    .render(&mut renderer)?;
                }
                _ => node.render(&mut renderer)?,
            }
        }

        if let Some(max) = options.max_record_count
            && tree.limit().is_none()
        {
            Limit {
                start: 0,
                count: max,
            }
            .render(&mut renderer)?;
        }

        let sql = renderer.finish();
        debug!(
            "Compiled {} top-level nodes for {} ({} bytes)",
            tree.len(),
            self.name(),
            sql.len()
        );
        Ok(sql)
    }
}

impl std::fmt::Debug for RqlCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RqlCompiler")
            .field("dialect", &self.name())
            .finish()
    }
}
