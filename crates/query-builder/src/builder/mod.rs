use crate::{
    ast::{common::OrderDir, predicate::Predicate, select::JoinClause},
    params::Parameters,
};
use model::core::value::Value;

pub mod dql;
pub mod select;

/// The query-builder capabilities a datagrid filter relies on.
///
/// Kept object safe so a proxy query can own any implementation behind a
/// `Box<dyn QueryBuilder>`.
pub trait QueryBuilder: Send {
    /// Aliases of the root entities, in declaration order.
    fn root_aliases(&self) -> Vec<String>;

    /// Appends `condition` to the `WHERE` clause with `AND`.
    fn and_where(&mut self, condition: &str);

    /// Appends `condition` to the `WHERE` clause with `OR`.
    fn or_where(&mut self, condition: &str);

    fn where_clause(&self) -> Option<&Predicate>;

    /// Binds a named parameter, replacing a previous binding of that name.
    fn set_parameter(&mut self, name: &str, value: Value);

    fn parameter(&self, name: &str) -> Option<&Value>;

    fn parameters(&self) -> &Parameters;

    /// Adds `LEFT JOIN <join> <alias>`, e.g. `left_join("o.author", "a")`.
    fn left_join(&mut self, join: &str, alias: &str);

    fn inner_join(&mut self, join: &str, alias: &str);

    fn joins(&self) -> &[JoinClause];

    fn add_order_by(&mut self, sort: &str, direction: Option<OrderDir>);

    fn set_first_result(&mut self, first_result: Option<usize>);

    fn first_result(&self) -> Option<usize>;

    fn set_max_results(&mut self, max_results: Option<usize>);

    fn max_results(&self) -> Option<usize>;

    /// The rendered join, where and order clauses, one entry per clause,
    /// e.g. `["LEFT JOIN o.author s_author", "WHERE s_author.name = :name"]`.
    fn dql_parts(&self) -> Vec<String>;

    /// The complete DQL statement.
    fn dql(&self) -> String;
}
