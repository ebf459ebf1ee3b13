//! Datagrid filters that contribute conditions to a [`ProxyQuery`].

pub mod deprecation;
pub mod error;
pub mod filter;
pub mod proxy_query;

pub use error::FilterError;
pub use filter::{
    Filter, FilterData,
    callback::{Callback, CallbackFilter, CallbackOutcome, CallbackReturn, FilterCallback},
    options::{AssociationMapping, FilterOptions, WidgetKind},
    render::{RenderOptions, RenderSettings},
};
pub use proxy_query::ProxyQuery;
