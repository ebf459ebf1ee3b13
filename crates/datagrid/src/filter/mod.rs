use crate::{
    error::FilterError,
    filter::{options::FilterOptions, render::RenderSettings},
    proxy_query::ProxyQuery,
};
use model::core::value::Value;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

pub mod callback;
pub mod options;
pub mod render;

/// Values submitted for one filter, e.g. `{"type": 1, "value": "foo"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterData(BTreeMap<String, Value>);

impl FilterData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data holding only a `value` entry.
    pub fn with_value(value: impl Into<Value>) -> Self {
        let mut data = Self::new();
        data.insert("value", value);
        data
    }

    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        serde_json::from_str(json).map_err(FilterError::InvalidData)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn value(&self) -> Option<&Value> {
        self.get("value")
    }

    /// The operator choice submitted with the value, if any.
    pub fn operator(&self) -> Option<i64> {
        match self.get("type")? {
            Value::Int(v) => Some(*v),
            Value::Uint(v) => i64::try_from(*v).ok(),
            Value::String(v) => v.parse().ok(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FilterData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A datagrid filter: contributes conditions to a query from submitted data.
pub trait Filter {
    /// Stores the filter name and options, resetting any previous state.
    fn initialize(&mut self, name: &str, options: FilterOptions);

    fn name(&self) -> &str;

    fn options(&self) -> &FilterOptions;

    /// Adds the filter's conditions for `alias.field` to `query`.
    fn filter(
        &mut self,
        query: &mut ProxyQuery,
        alias: &str,
        field: &str,
        data: &FilterData,
    ) -> Result<(), FilterError>;

    fn is_active(&self) -> bool;

    fn render_settings(&self) -> RenderSettings;

    /// The entity field the filter targets: the `field_name` option, then
    /// `field_options.field_name`, then the filter name.
    fn field_name(&self) -> &str {
        let options = self.options();
        options
            .field_name
            .as_deref()
            .or_else(|| options.field_options.get("field_name").and_then(JsonValue::as_str))
            .unwrap_or_else(|| self.name())
    }

    fn field_options(&self) -> &Map<String, JsonValue> {
        &self.options().field_options
    }

    fn label(&self) -> Option<&str> {
        self.options().label.as_deref()
    }

    /// Joins through the parent associations and returns the alias and
    /// field to filter on.
    fn association(&self, query: &mut ProxyQuery) -> Result<(String, String), FilterError> {
        let alias = query.entity_join(&self.options().parent_association_mappings)?;
        Ok((alias, self.field_name().to_string()))
    }

    /// Resolves alias and field on `query`, then runs [`Filter::filter`].
    fn apply(&mut self, query: &mut ProxyQuery, data: &FilterData) -> Result<(), FilterError> {
        let (alias, field) = self.association(query)?;
        self.filter(query, &alias, &field, data)
    }
}
