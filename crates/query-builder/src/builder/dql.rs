//! In-memory query builder that renders DQL text.

use crate::{
    ast::{
        common::{JoinKind, OrderDir},
        predicate::Predicate,
        select::{JoinClause, OrderByExpr, Select},
    },
    builder::{QueryBuilder, select::SelectBuilder},
    params::Parameters,
    renderer::{Render, Renderer},
};
use model::core::value::Value;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct DqlQueryBuilder {
    ast: Select,
    parameters: Parameters,
    first_result: Option<usize>,
    max_results: Option<usize>,
}

impl DqlQueryBuilder {
    /// `SELECT <alias> FROM <entity> <alias>`.
    pub fn new(entity: &str, alias: &str) -> Self {
        let ast = SelectBuilder::new().select([alias]).from(entity, alias).build();
        Self::from_select(ast)
    }

    pub fn from_select(ast: Select) -> Self {
        Self {
            ast,
            ..Default::default()
        }
    }

    pub fn ast(&self) -> &Select {
        &self.ast
    }

    fn add_join(&mut self, kind: JoinKind, join: &str, alias: &str) {
        trace!(?kind, join, alias, "Adding join");
        self.ast.joins.push(JoinClause {
            kind,
            join: join.to_string(),
            alias: alias.to_string(),
            condition: None,
        });
    }
}

impl QueryBuilder for DqlQueryBuilder {
    fn root_aliases(&self) -> Vec<String> {
        self.ast.from.iter().map(|f| f.alias.clone()).collect()
    }

    fn and_where(&mut self, condition: &str) {
        let current = self.ast.where_clause.take();
        self.ast.where_clause = Some(Predicate::and(current, Predicate::raw(condition)));
    }

    fn or_where(&mut self, condition: &str) {
        let current = self.ast.where_clause.take();
        self.ast.where_clause = Some(Predicate::or(current, Predicate::raw(condition)));
    }

    fn where_clause(&self) -> Option<&Predicate> {
        self.ast.where_clause.as_ref()
    }

    fn set_parameter(&mut self, name: &str, value: Value) {
        self.parameters.set(name, value);
    }

    fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn left_join(&mut self, join: &str, alias: &str) {
        self.add_join(JoinKind::Left, join, alias);
    }

    fn inner_join(&mut self, join: &str, alias: &str) {
        self.add_join(JoinKind::Inner, join, alias);
    }

    fn joins(&self) -> &[JoinClause] {
        &self.ast.joins
    }

    fn add_order_by(&mut self, sort: &str, direction: Option<OrderDir>) {
        self.ast.order_by.push(OrderByExpr {
            expr: sort.to_string(),
            direction,
        });
    }

    fn set_first_result(&mut self, first_result: Option<usize>) {
        self.first_result = first_result;
    }

    fn first_result(&self) -> Option<usize> {
        self.first_result
    }

    fn set_max_results(&mut self, max_results: Option<usize>) {
        self.max_results = max_results;
    }

    fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    fn dql_parts(&self) -> Vec<String> {
        let mut parts: Vec<String> = self
            .ast
            .joins
            .iter()
            .map(|join| Renderer::render_to_string(join))
            .collect();

        if let Some(where_clause) = self.ast.where_clause.as_ref().filter(|w| !w.is_empty()) {
            parts.push(format!("WHERE {}", Renderer::render_to_string(where_clause)));
        }

        if !self.ast.order_by.is_empty() {
            let order = self
                .ast
                .order_by
                .iter()
                .map(|o| Renderer::render_to_string(o))
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("ORDER BY {order}"));
        }

        parts
    }

    fn dql(&self) -> String {
        let mut renderer = Renderer::new();
        self.ast.render(&mut renderer);
        renderer.finish()
    }
}
