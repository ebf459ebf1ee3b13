//! Deprecation notices, emitted as `warn` events on the `deprecation` target.

use tracing::warn;

pub const TARGET: &str = "deprecation";

pub const PACKAGE: &str = env!("CARGO_PKG_NAME");

/// Version the currently deprecated behaviors were deprecated in.
pub const SINCE: &str = env!("CARGO_PKG_VERSION");

pub const NON_BOOLEAN_CALLBACK_RETURN: &str = concat!(
    "Using another return type than boolean for the callback option is deprecated since ",
    env!("CARGO_PKG_NAME"),
    " ",
    env!("CARGO_PKG_VERSION"),
    " and will be rejected in version 1.0."
);

pub fn trigger(since: &str, message: &str) {
    warn!(target: TARGET, package = PACKAGE, since, "{message}");
}
