pub mod common;
pub mod predicate;
pub mod select;
