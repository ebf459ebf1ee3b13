use datagrid::{
    Callback, CallbackFilter, Filter, FilterCallback, FilterData, FilterError, FilterOptions,
    ProxyQuery, WidgetKind, deprecation, filter::callback::CallbackResult,
};
use model::core::value::Value;
use query_builder::DqlQueryBuilder;
use serde_json::json;
use tracing_test::traced_test;

fn proxy_query() -> ProxyQuery {
    ProxyQuery::new(DqlQueryBuilder::new("App\\Entity\\Post", "o"))
}

fn assert_same_query(expected: &[&str], query: &ProxyQuery) {
    assert_eq!(query.query_builder().dql_parts(), expected);
}

fn assert_same_query_parameters(expected: &[(&str, Value)], query: &ProxyQuery) {
    let actual: Vec<(String, Value)> = query
        .query_builder()
        .parameters()
        .iter()
        .map(|p| (p.name.clone(), p.value.clone()))
        .collect();
    let expected: Vec<(String, Value)> = expected
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    assert_eq!(actual, expected);
}

fn custom_query(
    query: &mut ProxyQuery,
    alias: &str,
    field: &str,
    data: &FilterData,
) -> Result<bool, datagrid::error::CallbackError> {
    let qb = query.query_builder_mut();
    qb.and_where(&format!("CUSTOM QUERY {alias}.{field}"));
    qb.set_parameter("value", data.value().cloned().unwrap_or(Value::Null));
    Ok(true)
}

struct CustomCallback;

impl FilterCallback for CustomCallback {
    fn call(
        &self,
        query: &mut ProxyQuery,
        alias: &str,
        field: &str,
        data: &FilterData,
    ) -> CallbackResult {
        custom_query(query, alias, field, data).map(Into::into)
    }
}

#[test]
fn test_render_settings() {
    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_field_option("class", json!("FooBar")),
    );

    let (form_type, options) = filter.render_settings();

    assert_eq!(form_type, WidgetKind::Default);
    assert_eq!(options.operator_type, WidgetKind::Hidden);
    assert!(options.operator_options.is_empty());
    assert_eq!(options.field_options["class"], json!("FooBar"));
}

#[test]
fn test_render_settings_ignore_operator_options() {
    let mut filter = CallbackFilter::new();
    let options = FilterOptions::from_value(json!({
        "operator_type": "choice",
        "operator_options": {"choices": [1, 2]},
        "label": "Title",
    }))
    .unwrap();
    filter.initialize("field_name", options);

    let (_, options) = filter.render_settings();
    let (operator_type, operator_options) = options.operator();

    assert_eq!(operator_type, WidgetKind::Hidden);
    assert!(operator_options.is_empty());
    assert_eq!(options.label.as_deref(), Some("Title"));
}

#[test]
fn test_filter_closure() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::closure(|query, alias, field, data| {
            let qb = query.query_builder_mut();
            qb.and_where(&format!("CUSTOM QUERY {alias}.{field}"));
            qb.set_parameter("value", data.value().cloned().unwrap_or(Value::Null));
            Ok(true)
        })),
    );

    filter
        .filter(&mut query, "alias", "field", &FilterData::with_value("myValue"))
        .unwrap();

    assert_same_query(&["WHERE CUSTOM QUERY alias.field"], &query);
    assert_same_query_parameters(&[("value", Value::from("myValue"))], &query);
    assert!(filter.is_active());
}

#[test]
fn test_filter_function() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::closure(custom_query)),
    );

    filter
        .filter(&mut query, "alias", "field", &FilterData::with_value("myValue"))
        .unwrap();

    assert_same_query(&["WHERE CUSTOM QUERY alias.field"], &query);
    assert_same_query_parameters(&[("value", Value::from("myValue"))], &query);
    assert!(filter.is_active());
}

#[test]
fn test_filter_handler() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::handler(CustomCallback)),
    );

    filter
        .filter(&mut query, "alias", "field", &FilterData::with_value("myValue"))
        .unwrap();

    assert_same_query(&["WHERE CUSTOM QUERY alias.field"], &query);
    assert_same_query_parameters(&[("value", Value::from("myValue"))], &query);
    assert!(filter.is_active());
}

#[test]
fn test_filter_without_callback() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize("field_name", FilterOptions::new());

    let err = filter
        .filter(&mut query, "alias", "field", &FilterData::with_value("myValue"))
        .unwrap_err();

    assert!(matches!(err, FilterError::MissingCallback { ref filter } if filter == "field_name"));
    assert!(!filter.is_active());
    assert_same_query(&[], &query);
}

#[test]
fn test_apply_method() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name_test",
        FilterOptions::new()
            .with_callback(Callback::closure(custom_query))
            .with_field_name("field_name_test"),
    );

    filter
        .apply(&mut query, &FilterData::with_value("myValue"))
        .unwrap();

    assert_same_query(&["WHERE CUSTOM QUERY o.field_name_test"], &query);
    assert_same_query_parameters(&[("value", Value::from("myValue"))], &query);
    assert!(filter.is_active());
}

#[test]
fn test_apply_matches_direct_filter() {
    let options = FilterOptions::new()
        .with_callback(Callback::closure(custom_query))
        .with_field_name("title");
    let data = FilterData::with_value("myValue");

    let mut applied = proxy_query();
    let mut filter = CallbackFilter::new();
    filter.initialize("name", options.clone());
    filter.apply(&mut applied, &data).unwrap();

    let mut direct = proxy_query();
    let mut filter = CallbackFilter::new();
    filter.initialize("name", options);
    filter.filter(&mut direct, "o", "title", &data).unwrap();

    assert_eq!(applied.query_builder().dql(), direct.query_builder().dql());
    assert_eq!(
        applied.query_builder().parameters(),
        direct.query_builder().parameters()
    );
}

#[test]
fn test_apply_through_parent_associations() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "name",
        FilterOptions::new()
            .with_callback(Callback::closure(custom_query))
            .with_parent_association("author"),
    );

    filter
        .apply(&mut query, &FilterData::with_value("myValue"))
        .unwrap();

    assert_same_query(
        &[
            "LEFT JOIN o.author s_author",
            "WHERE CUSTOM QUERY s_author.name",
        ],
        &query,
    );
    assert_eq!(
        query.build_dql(),
        "SELECT o FROM App\\Entity\\Post o LEFT JOIN o.author s_author WHERE CUSTOM QUERY s_author.name"
    );
}

#[test]
#[traced_test]
fn test_wrong_callback_return_type() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::closure(|query, alias, field, data| {
            let qb = query.query_builder_mut();
            qb.and_where(&format!("CUSTOM QUERY {alias}.{field}"));
            qb.set_parameter("value", data.value().cloned().unwrap_or(Value::Null));
            Ok(1_i32)
        })),
    );

    filter
        .filter(&mut query, "alias", "field", &FilterData::with_value("myValue"))
        .unwrap();

    assert_same_query(&["WHERE CUSTOM QUERY alias.field"], &query);
    assert_same_query_parameters(&[("value", Value::from("myValue"))], &query);
    assert!(filter.is_active());

    logs_assert(|lines: &[&str]| {
        let notices = lines
            .iter()
            .filter(|line| line.contains(deprecation::NON_BOOLEAN_CALLBACK_RETURN))
            .count();
        match notices {
            1 => Ok(()),
            n => Err(format!("expected exactly one deprecation notice, got {n}")),
        }
    });
}

#[test]
#[traced_test]
fn test_deprecation_emitted_per_invocation() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::closure(|_, _, _, _| Ok("yes"))),
    );

    let data = FilterData::new();
    filter.filter(&mut query, "o", "a", &data).unwrap();
    filter.filter(&mut query, "o", "b", &data).unwrap();

    logs_assert(|lines: &[&str]| {
        let notices = lines
            .iter()
            .filter(|line| line.contains(deprecation::NON_BOOLEAN_CALLBACK_RETURN))
            .count();
        match notices {
            2 => Ok(()),
            n => Err(format!("expected two deprecation notices, got {n}")),
        }
    });
}

#[test]
#[traced_test]
fn test_boolean_return_emits_no_deprecation() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::closure(custom_query)),
    );

    filter
        .filter(&mut query, "alias", "field", &FilterData::with_value("myValue"))
        .unwrap();

    assert!(!logs_contain(deprecation::NON_BOOLEAN_CALLBACK_RETURN));
}

fn deprecation_notices(lines: &[&str]) -> usize {
    lines
        .iter()
        .filter(|line| line.contains(deprecation::NON_BOOLEAN_CALLBACK_RETURN))
        .count()
}

#[test]
#[traced_test]
fn test_falsy_legacy_return_is_inactive() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::closure(|_, _, _, _| Ok(0_i32))),
    );

    filter
        .filter(&mut query, "alias", "field", &FilterData::new())
        .unwrap();

    assert!(!filter.is_active());
    logs_assert(|lines: &[&str]| match deprecation_notices(lines) {
        1 => Ok(()),
        n => Err(format!("expected exactly one deprecation notice, got {n}")),
    });
}

#[test]
#[traced_test]
fn test_unit_return_is_inactive_and_deprecated() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::closure(|query, alias, field, _| {
            query
                .query_builder_mut()
                .and_where(&format!("CUSTOM QUERY {alias}.{field}"));
            Ok(())
        })),
    );

    filter
        .filter(&mut query, "alias", "field", &FilterData::new())
        .unwrap();

    assert!(!filter.is_active());
    assert_same_query(&["WHERE CUSTOM QUERY alias.field"], &query);
    logs_assert(|lines: &[&str]| match deprecation_notices(lines) {
        1 => Ok(()),
        n => Err(format!("expected exactly one deprecation notice, got {n}")),
    });
}

#[test]
#[traced_test]
fn test_float_return_is_accepted_as_legacy() {
    let mut query = proxy_query();

    let mut filter = CallbackFilter::new();
    filter.initialize(
        "field_name",
        FilterOptions::new().with_callback(Callback::closure(|_, _, _, _| Ok(2.5_f64))),
    );

    filter
        .filter(&mut query, "alias", "field", &FilterData::new())
        .unwrap();

    assert!(filter.is_active());
    logs_assert(|lines: &[&str]| match deprecation_notices(lines) {
        1 => Ok(()),
        n => Err(format!("expected exactly one deprecation notice, got {n}")),
    });
}
