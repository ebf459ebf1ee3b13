use crate::{
    ast::predicate::Predicate,
    renderer::{Render, Renderer},
};

impl Render for Predicate {
    fn render(&self, r: &mut Renderer) {
        match self {
            Predicate::Raw(condition) => r.sql.push_str(condition),
            Predicate::And(parts) => render_composite(parts, " AND ", r),
            Predicate::Or(parts) => render_composite(parts, " OR ", r),
        }
    }
}

// A lone part renders bare; several parts are each parenthesized.
fn render_composite(parts: &[Predicate], separator: &str, r: &mut Renderer) {
    let parts: Vec<&Predicate> = parts.iter().filter(|p| !p.is_empty()).collect();
    if let [single] = parts.as_slice() {
        single.render(r);
        return;
    }

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(separator);
        }
        r.sql.push('(');
        part.render(r);
        r.sql.push(')');
    }
}
