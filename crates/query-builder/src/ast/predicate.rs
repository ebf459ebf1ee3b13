//! Boolean composition of raw DQL conditions.

/// A `WHERE` condition tree.
///
/// Leaves are raw condition strings written by filters; composites join
/// their parts with `AND` / `OR`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Raw(String),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn raw(condition: impl Into<String>) -> Self {
        Predicate::Raw(condition.into())
    }

    /// Number of direct parts; a leaf counts as one.
    pub fn count(&self) -> usize {
        match self {
            Predicate::Raw(_) => 1,
            Predicate::And(parts) | Predicate::Or(parts) => parts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Predicate::Raw(condition) => condition.trim().is_empty(),
            Predicate::And(parts) | Predicate::Or(parts) => parts.iter().all(Predicate::is_empty),
        }
    }

    /// Combines `current` with `condition` under `AND`, extending an
    /// existing `AND` composite instead of nesting it.
    pub fn and(current: Option<Predicate>, condition: Predicate) -> Predicate {
        match current {
            None => Predicate::And(vec![condition]),
            Some(Predicate::And(mut parts)) => {
                parts.push(condition);
                Predicate::And(parts)
            }
            Some(other) if other.is_empty() => Predicate::And(vec![condition]),
            Some(other) => Predicate::And(vec![other, condition]),
        }
    }

    /// Combines `current` with `condition` under `OR`, extending an
    /// existing `OR` composite instead of nesting it.
    pub fn or(current: Option<Predicate>, condition: Predicate) -> Predicate {
        match current {
            None => Predicate::Or(vec![condition]),
            Some(Predicate::Or(mut parts)) => {
                parts.push(condition);
                Predicate::Or(parts)
            }
            Some(other) if other.is_empty() => Predicate::Or(vec![condition]),
            Some(other) => Predicate::Or(vec![other, condition]),
        }
    }
}
