use crate::{
    error::RqlError,
    query::renderer::{Render, Renderer},
};
use rql_model::{LogicOperator, Operator};

impl Render for LogicOperator {
    fn render(&self, r: &mut Renderer) -> Result<(), RqlError> {
        if !self.token.is_logical() {
            return Err(RqlError::UnexpectedToken {
                token: self.token,
                node: "logic operator",
            });
        }
        let joiner = if self.token == Operator::And {
            " and "
        } else {
            " or "
        };

        if self.children.is_empty() {
            return Err(RqlError::EmptyNode("logic operator"));
        }

        // Every child is rendered; nothing here depends on evaluation order.
        r.sql.push('(');
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(joiner);
            }
            child.render(r)?;
        }
        r.sql.push(')');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RqlError,
        query::{
            dialect::Postgres,
            renderer::{Render, Renderer},
            resolver::IdentityResolver,
        },
    };
    use rql_model::{Filter, LogicOperator, Operator, RqlNode};

    fn render(op: &LogicOperator) -> Result<String, RqlError> {
        let mut renderer = Renderer::new(&Postgres, &IdentityResolver);
        op.render(&mut renderer)?;
        Ok(renderer.finish())
    }

    fn eq(field: &str, value: &str) -> RqlNode {
        Filter::plain(field, Operator::Eq, value).into()
    }

    #[test]
    fn test_and_joins_children() {
        let op = LogicOperator::and(vec![eq("a", "1"), eq("b", "2")]);
        assert_eq!(render(&op).unwrap(), "((a = 1) and (b = 2))");
    }

    #[test]
    fn test_single_child_is_still_grouped() {
        let op = LogicOperator::or(vec![eq("a", "1")]);
        assert_eq!(render(&op).unwrap(), "((a = 1))");
    }

    #[test]
    fn test_nested_groups_keep_their_parentheses() {
        let op = LogicOperator::and(vec![
            eq("a", "1"),
            LogicOperator::or(vec![
                eq("b", "2"),
                LogicOperator::and(vec![eq("c", "3"), eq("d", "4")]).into(),
            ])
            .into(),
        ]);

        assert_eq!(
            render(&op).unwrap(),
            "((a = 1) and ((b = 2) or ((c = 3) and (d = 4))))"
        );
    }

    #[test]
    fn test_nesting_depth_matches_open_parentheses() {
        let mut op = LogicOperator::and(vec![eq("x", "0")]);
        for i in 1..6 {
            op = if i % 2 == 0 {
                LogicOperator::and(vec![eq("x", "0"), op.into()])
            } else {
                LogicOperator::or(vec![op.into(), eq("x", "0")])
            };
        }

        let sql = render(&op).unwrap();
        let opens = sql.matches('(').count();
        let closes = sql.matches(')').count();
        assert_eq!(opens, closes);

        // Every group adds one pair; every filter adds one pair.
        let filters = sql.matches("x = 0").count();
        assert_eq!(opens, op.depth() + filters);
        assert_eq!(op.depth(), 6);
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let op = LogicOperator::and(vec![]);
        assert_eq!(
            render(&op).unwrap_err(),
            RqlError::EmptyNode("logic operator")
        );
    }

    #[test]
    fn test_comparison_token_is_rejected() {
        let op = LogicOperator::new(Operator::Eq, vec![eq("a", "1")]);
        assert!(matches!(
            render(&op).unwrap_err(),
            RqlError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_child_error_aborts_the_group() {
        let op = LogicOperator::and(vec![
            eq("a", "1"),
            Filter::string("id", Operator::In, "1").into(),
        ]);
        assert!(matches!(
            render(&op).unwrap_err(),
            RqlError::InvalidOperandType { .. }
        ));
    }
}
