use crate::{
    error::RqlError,
    query::renderer::{Render, Renderer},
};
use rql_model::Limit;

impl Render for Limit {
    fn render(&self, r: &mut Renderer) -> Result<(), RqlError> {
        let clause = r.dialect.render_limit(self)?;
        r.sql.push_str(&clause);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        dialect::{Interbase, Postgres},
        renderer::{Render, Renderer},
        resolver::IdentityResolver,
    };
    use rql_model::Limit;

    #[test]
    fn test_render_limit_without_offset() {
        let mut renderer = Renderer::new(&Postgres, &IdentityResolver);
        Limit::new(0, 10).unwrap().render(&mut renderer).unwrap();
        assert_eq!(renderer.finish(), " /*limit*/ LIMIT 10");
    }

    #[test]
    fn test_render_limit_with_offset() {
        let mut renderer = Renderer::new(&Postgres, &IdentityResolver);
        Limit::new(5, 10).unwrap().render(&mut renderer).unwrap();
        assert_eq!(renderer.finish(), " /*limit*/ LIMIT 10 OFFSET 5");
    }

    #[test]
    fn test_render_limit_interbase() {
        let mut renderer = Renderer::new(&Interbase, &IdentityResolver);
        Limit::new(5, 10).unwrap().render(&mut renderer).unwrap();
        assert_eq!(renderer.finish(), " /*limit*/ ROWS 6 TO 15");
    }
}
