use crate::{
    error::RqlError,
    query::renderer::{Render, Renderer},
};
use rql_model::RqlNode;

impl Render for RqlNode {
    fn render(&self, r: &mut Renderer) -> Result<(), RqlError> {
        match self {
            RqlNode::Filter(filter) => filter.render(r),
            RqlNode::LogicOperator(op) => op.render(r),
            RqlNode::Sort(sort) => sort.render(r),
            RqlNode::Limit(limit) => limit.render(r),
            RqlNode::Where => {
                r.sql.push_str(" WHERE ");
                Ok(())
            }
        }
    }
}
