use crate::{
    error::RqlError,
    query::renderer::{Render, Renderer},
};
use rql_model::{Sort, SortSign};

impl Render for Sort {
    fn render(&self, r: &mut Renderer) -> Result<(), RqlError> {
        if self.fields.is_empty() {
            return Err(RqlError::EmptyNode("sort"));
        }

        r.sql.push_str(" /*sort*/ ORDER BY");
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                r.sql.push(',');
            }
            let column = r.column(&field.field)?;
            r.sql.push(' ');
            r.sql.push_str(&column);
            r.sql.push_str(match field.sign {
                SortSign::Asc => " ASC",
                SortSign::Desc => " DESC",
            });
        }
        Ok(())
    }
}
