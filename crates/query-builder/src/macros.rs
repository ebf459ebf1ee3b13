/// Builds an `AND` composite from raw condition strings.
#[macro_export]
macro_rules! and_x {
    ($($cond:expr),+ $(,)?) => {
        $crate::ast::predicate::Predicate::And(vec![
            $($crate::ast::predicate::Predicate::raw($cond)),+
        ])
    };
}

/// Builds an `OR` composite from raw condition strings.
#[macro_export]
macro_rules! or_x {
    ($($cond:expr),+ $(,)?) => {
        $crate::ast::predicate::Predicate::Or(vec![
            $($crate::ast::predicate::Predicate::raw($cond)),+
        ])
    };
}
