use crate::filter::options::WidgetKind;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// The form type of a filter row paired with its rendering options.
pub type RenderSettings = (WidgetKind, RenderOptions);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    pub field_type: WidgetKind,
    pub field_options: Map<String, JsonValue>,
    pub operator_type: WidgetKind,
    pub operator_options: Map<String, JsonValue>,
    pub label: Option<String>,
}

impl RenderOptions {
    /// The `(widget_kind, options)` pair of the operator control.
    pub fn operator(&self) -> (WidgetKind, &Map<String, JsonValue>) {
        (self.operator_type, &self.operator_options)
    }
}
