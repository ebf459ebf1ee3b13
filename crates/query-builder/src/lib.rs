//! Object-query builder consumed by datagrid filters.
//!
//! The [`QueryBuilder`](builder::QueryBuilder) trait is the capability set a
//! filter relies on; [`DqlQueryBuilder`](builder::dql::DqlQueryBuilder) is the
//! in-memory implementation that renders DQL text.

pub mod ast;
pub mod builder;
pub mod macros;
pub mod params;
pub mod renderer;

pub use builder::{QueryBuilder, dql::DqlQueryBuilder};
pub use params::{Parameter, Parameters};
