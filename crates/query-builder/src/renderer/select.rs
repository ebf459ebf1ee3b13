use crate::{
    ast::{
        common::JoinKind,
        select::{FromClause, JoinClause, OrderByExpr, Select},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        r.sql.push_str(&self.columns.join(", "));

        // 2. FROM
        if !self.from.is_empty() {
            r.sql.push_str(" FROM ");
            for (i, from) in self.from.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                from.render(r);
            }
        }

        // 3. JOIN
        for join in &self.joins {
            r.sql.push(' ');
            join.render(r);
        }

        // 4. WHERE
        if let Some(where_clause) = self.where_clause.as_ref().filter(|w| !w.is_empty()) {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }

        // 5. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.render(r);
            }
        }
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.entity);
        r.sql.push(' ');
        r.sql.push_str(&self.alias);
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        let join_str = match self.kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
        };
        r.sql.push_str(&format!("{join_str} {} {}", self.join, self.alias));
        if let Some(condition) = &self.condition {
            r.sql.push_str(" WITH ");
            r.sql.push_str(condition);
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.expr);
        if let Some(dir) = &self.direction {
            r.sql.push(' ');
            r.sql.push_str(dir.as_str());
        }
    }
}
