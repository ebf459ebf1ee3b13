//! Defines the Abstract Syntax Tree (AST) for a DQL SELECT query.

use crate::ast::{
    common::{JoinKind, OrderDir},
    predicate::Predicate,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The selected entity aliases or expressions.
    /// e.g., `o`, `COUNT(o.id)`
    pub columns: Vec<String>,

    /// The root entities of the query.
    /// e.g., `FROM App\Entity\Post o`
    pub from: Vec<FromClause>,

    /// Association joins, in the order they were added.
    pub joins: Vec<JoinClause>,

    /// The WHERE clause condition.
    pub where_clause: Option<Predicate>,

    /// The ORDER BY clause.
    pub order_by: Vec<OrderByExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub entity: String,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    /// The association path, e.g., `o.author`.
    pub join: String,
    pub alias: String,
    /// Optional `WITH` condition narrowing the join.
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: String,
    pub direction: Option<OrderDir>,
}
