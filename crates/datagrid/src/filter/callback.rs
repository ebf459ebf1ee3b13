//! Filter delegating its conditions to application code.

use crate::{
    deprecation,
    error::{CallbackError, FilterError},
    filter::{
        Filter, FilterData,
        options::{FilterOptions, WidgetKind},
        render::{RenderOptions, RenderSettings},
    },
    proxy_query::ProxyQuery,
};
use model::core::value::Value;
use serde_json::Map;
use std::{fmt, sync::Arc};
use tracing::debug;

pub type CallbackResult = Result<CallbackReturn, CallbackError>;

type CallbackFn =
    dyn Fn(&mut ProxyQuery, &str, &str, &FilterData) -> CallbackResult + Send + Sync;

/// Object form of a callback, for handlers that carry their own state.
pub trait FilterCallback: Send + Sync {
    fn call(
        &self,
        query: &mut ProxyQuery,
        alias: &str,
        field: &str,
        data: &FilterData,
    ) -> CallbackResult;
}

/// What a callback returned.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackReturn {
    Bool(bool),
    /// Any non-boolean value. Accepted for now: every such return emits a
    /// deprecation notice and the filter is active iff the value is truthy.
    Legacy(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    Active,
    /// `false`, or a falsy non-boolean return.
    Inactive,
    /// A truthy non-boolean return: the filter is active.
    LegacyTruthy,
}

impl CallbackOutcome {
    pub fn is_active(self) -> bool {
        matches!(self, CallbackOutcome::Active | CallbackOutcome::LegacyTruthy)
    }
}

impl CallbackReturn {
    pub fn outcome(&self) -> CallbackOutcome {
        match self {
            CallbackReturn::Bool(true) => CallbackOutcome::Active,
            CallbackReturn::Bool(false) => CallbackOutcome::Inactive,
            CallbackReturn::Legacy(value) if value.is_truthy() => CallbackOutcome::LegacyTruthy,
            CallbackReturn::Legacy(_) => CallbackOutcome::Inactive,
        }
    }
}

impl From<bool> for CallbackReturn {
    fn from(v: bool) -> Self {
        CallbackReturn::Bool(v)
    }
}

impl From<Value> for CallbackReturn {
    fn from(v: Value) -> Self {
        match v {
            Value::Boolean(b) => CallbackReturn::Bool(b),
            other => CallbackReturn::Legacy(other),
        }
    }
}

impl From<()> for CallbackReturn {
    fn from(_: ()) -> Self {
        CallbackReturn::Legacy(Value::Null)
    }
}

macro_rules! legacy_return_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CallbackReturn {
                fn from(v: $ty) -> Self {
                    CallbackReturn::from(Value::from(v))
                }
            }
        )*
    };
}

legacy_return_from!(i32, i64, u32, u64, f32, f64, &str, String, Vec<String>);

impl<T: Into<Value>> From<Option<T>> for CallbackReturn {
    fn from(v: Option<T>) -> Self {
        CallbackReturn::from(Value::from(v))
    }
}

/// The `callback` option: a closure or a handler object.
#[derive(Clone)]
pub enum Callback {
    Closure(Arc<CallbackFn>),
    Handler(Arc<dyn FilterCallback>),
}

impl Callback {
    pub fn closure<F, R>(f: F) -> Self
    where
        F: Fn(&mut ProxyQuery, &str, &str, &FilterData) -> Result<R, CallbackError>
            + Send
            + Sync
            + 'static,
        R: Into<CallbackReturn>,
    {
        Callback::Closure(Arc::new(
            move |query: &mut ProxyQuery,
                  alias: &str,
                  field: &str,
                  data: &FilterData|
                  -> CallbackResult { f(query, alias, field, data).map(Into::into) },
        ))
    }

    pub fn handler<H: FilterCallback + 'static>(handler: H) -> Self {
        Callback::Handler(Arc::new(handler))
    }

    pub fn shared(handler: Arc<dyn FilterCallback>) -> Self {
        Callback::Handler(handler)
    }

    pub fn invoke(
        &self,
        query: &mut ProxyQuery,
        alias: &str,
        field: &str,
        data: &FilterData,
    ) -> CallbackResult {
        match self {
            Callback::Closure(f) => f(query, alias, field, data),
            Callback::Handler(h) => h.call(query, alias, field, data),
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Closure(_) => f.write_str("Callback::Closure"),
            Callback::Handler(_) => f.write_str("Callback::Handler"),
        }
    }
}

/// Filter whose condition is written by the configured `callback` option.
#[derive(Debug, Default)]
pub struct CallbackFilter {
    name: String,
    options: FilterOptions,
    active: bool,
}

impl CallbackFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filter for CallbackFilter {
    fn initialize(&mut self, name: &str, options: FilterOptions) {
        self.name = name.to_string();
        self.options = options;
        self.active = false;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> &FilterOptions {
        &self.options
    }

    fn filter(
        &mut self,
        query: &mut ProxyQuery,
        alias: &str,
        field: &str,
        data: &FilterData,
    ) -> Result<(), FilterError> {
        let callback = self
            .options
            .callback
            .as_ref()
            .ok_or_else(|| FilterError::MissingCallback {
                filter: self.name.clone(),
            })?;

        self.active = false;
        let returned = callback
            .invoke(query, alias, field, data)
            .map_err(|source| FilterError::Callback {
                filter: self.name.clone(),
                source,
            })?;

        if let CallbackReturn::Legacy(value) = &returned {
            debug!(filter = %self.name, returned = value.type_name(), "Non-boolean callback return");
            deprecation::trigger(deprecation::SINCE, deprecation::NON_BOOLEAN_CALLBACK_RETURN);
        }

        self.active = returned.outcome().is_active();
        debug!(filter = %self.name, alias, field, active = self.active, "Callback filter applied");

        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active
    }

    /// The operator control is always hidden: the callback decides the
    /// comparison, so there is nothing to choose.
    fn render_settings(&self) -> RenderSettings {
        (
            WidgetKind::Default,
            RenderOptions {
                field_type: self.options.field_type,
                field_options: self.options.field_options.clone(),
                operator_type: WidgetKind::Hidden,
                operator_options: Map::new(),
                label: self.options.label.clone(),
            },
        )
    }
}
