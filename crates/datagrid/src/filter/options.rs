//! Filter configuration.

use crate::{error::FilterError, filter::callback::Callback};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// Form widget a filter control is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Composite operator + value control.
    Default,
    Hidden,
    #[default]
    Text,
    Number,
    Choice,
    Checkbox,
    Date,
    DateTime,
    Entity,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Default => "default",
            WidgetKind::Hidden => "hidden",
            WidgetKind::Text => "text",
            WidgetKind::Number => "number",
            WidgetKind::Choice => "choice",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::Date => "date",
            WidgetKind::DateTime => "date_time",
            WidgetKind::Entity => "entity",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hop from the root entity towards the filtered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationMapping {
    pub field_name: String,
}

impl From<&str> for AssociationMapping {
    fn from(field_name: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
        }
    }
}

/// Options a filter is initialized with.
///
/// Everything except the callback can be loaded from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    #[serde(skip)]
    pub callback: Option<Callback>,
    pub field_name: Option<String>,
    pub field_type: WidgetKind,
    pub field_options: Map<String, JsonValue>,
    pub operator_type: Option<WidgetKind>,
    pub operator_options: Map<String, JsonValue>,
    pub label: Option<String>,
    pub parent_association_mappings: Vec<AssociationMapping>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        serde_json::from_str(json).map_err(FilterError::InvalidOptions)
    }

    pub fn from_value(value: JsonValue) -> Result<Self, FilterError> {
        serde_json::from_value(value).map_err(FilterError::InvalidOptions)
    }

    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    pub fn with_field_type(mut self, field_type: WidgetKind) -> Self {
        self.field_type = field_type;
        self
    }

    pub fn with_field_option(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.field_options.insert(key.into(), value);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_parent_association(mut self, mapping: impl Into<AssociationMapping>) -> Self {
        self.parent_association_mappings.push(mapping.into());
        self
    }
}
