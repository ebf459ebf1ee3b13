//! Provides a type-safe, fluent builder for constructing `Select` ASTs.

// --- Typestate Marker Structs ---
// These zero-sized structs represent the state of the builder.
// They ensure that methods are called in the correct DQL order at compile time.

use crate::ast::{
    common::{JoinKind, OrderDir},
    predicate::Predicate,
    select::{FromClause, JoinClause, OrderByExpr, Select},
};
use std::marker::PhantomData;

/// The initial state of the builder before any clauses have been added.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state after the `SELECT` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after the `FROM` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct FromState;

// --- The Main Builder ---

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    state: PhantomData<State>,
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

/// Implementation for the initial state of the builder.
impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            state: PhantomData,
        }
    }

    /// Adds a `SELECT` clause with a list of aliases or expressions.
    /// This is the entry point for building a select query.
    pub fn select<I, S>(mut self, columns: I) -> SelectBuilder<SelectState>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ast.columns = columns.into_iter().map(Into::into).collect();
        SelectBuilder {
            ast: self.ast,
            state: PhantomData,
        }
    }
}

/// Implementation for the state after `SELECT` has been called.
/// The only valid next step is to specify a root entity.
impl SelectBuilder<SelectState> {
    /// Adds the root entity and its alias.
    pub fn from(mut self, entity: &str, alias: &str) -> SelectBuilder<FromState> {
        self.ast.from.push(FromClause {
            entity: entity.to_string(),
            alias: alias.to_string(),
        });
        SelectBuilder {
            ast: self.ast,
            state: PhantomData,
        }
    }
}

/// Implementation for the state after `FROM` has been called.
/// From here, we can add optional clauses like `JOIN`, `WHERE`, etc.
impl SelectBuilder<FromState> {
    /// Adds another root entity.
    pub fn from(mut self, entity: &str, alias: &str) -> Self {
        self.ast.from.push(FromClause {
            entity: entity.to_string(),
            alias: alias.to_string(),
        });
        self
    }

    /// Adds a `JOIN` clause to the query.
    pub fn join(mut self, kind: JoinKind, join: &str, alias: &str, condition: Option<&str>) -> Self {
        self.ast.joins.push(JoinClause {
            kind,
            join: join.to_string(),
            alias: alias.to_string(),
            condition: condition.map(String::from),
        });
        self
    }

    /// Replaces the `WHERE` clause of the query.
    pub fn where_clause(mut self, condition: Predicate) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    /// Adds an `ORDER BY` clause to the query.
    pub fn order_by(mut self, expr: &str, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr {
            expr: expr.to_string(),
            direction,
        });
        self
    }

    /// Finalizes and returns the constructed `Select` AST.
    pub fn build(self) -> Select {
        self.ast
    }
}
