use qdeck_model::{
    AttributeBinding, AttributeTransformer, AttributeType, DataContext, DataKind, DbValue,
    DefaultValueHandler, DisplayFormat, ModelError, TransformOptions, ValueHandler,
};
use qdeck_radix::{PRESENTATION_COLUMN, RadixAttributeTransformer, RadixDisplaySettings,
    RadixValueHandler};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn numeric_attribute() -> AttributeType {
    AttributeType::new("flags", DataKind::Numeric)
}

fn options(entries: &[(&str, serde_json::Value)]) -> TransformOptions {
    entries.iter().map(|(key, value)| ((*key).to_owned(), value.clone())).collect()
}

fn install(entries: &[(&str, serde_json::Value)]) -> AttributeBinding {
    let mut binding =
        AttributeBinding::new(numeric_attribute(), Arc::new(DefaultValueHandler));
    RadixAttributeTransformer
        .transform_attribute(&mut binding, &options(entries))
        .expect("install failed");
    binding
}

/// Delegate that records which operations reached it.
#[derive(Debug, Default)]
struct RecordingHandler {
    kind_calls: AtomicUsize,
    parse_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl ValueHandler for RecordingHandler {
    fn value_kind(&self, _attribute_type: &AttributeType) -> DataKind {
        self.kind_calls.fetch_add(1, Ordering::Relaxed);
        DataKind::Numeric
    }

    fn value_display_string(
        &self,
        _attribute_type: &AttributeType,
        _value: &DbValue,
        _format: DisplayFormat,
    ) -> String {
        "delegate".to_owned()
    }

    fn value_from_object(
        &self,
        _ctx: &DataContext,
        _attribute_type: &AttributeType,
        _object: &DbValue,
        _copy: bool,
        _validate: bool,
    ) -> Result<DbValue, ModelError> {
        self.parse_calls.fetch_add(1, Ordering::Relaxed);
        Ok(DbValue::Int(-7))
    }

    fn create_new_value(&self, _ctx: &DataContext, _attribute_type: &AttributeType) -> DbValue {
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        DbValue::Int(99)
    }
}

#[test]
fn install_replaces_handler_and_registers_presentation_column() {
    let binding = install(&[("radix", json!(16))]);

    assert!(!Arc::ptr_eq(binding.value_handler(), binding.base_value_handler()));

    let presentation = binding.presentation_attribute().expect("presentation column missing");
    assert_eq!(presentation.name(), PRESENTATION_COLUMN);
    assert_eq!(presentation.ordinal(), -1);
    assert_eq!(presentation.data_kind(), DataKind::String);
    assert!(presentation.is_read_only());
}

#[test]
fn installed_handler_renders_the_configured_radix() {
    let binding = install(&[("radix", json!(16)), ("prefix", json!(true))]);
    let text = binding.value_handler().value_display_string(
        binding.attribute_type(),
        &DbValue::Int(255),
        DisplayFormat::Ui,
    );
    assert_eq!(text, "0xFF");
}

#[test]
fn non_numeric_cells_use_the_generic_formatter() {
    let binding = install(&[("radix", json!(16))]);
    let handler = binding.value_handler();

    let null_text = handler.value_display_string(
        binding.attribute_type(),
        &DbValue::Null,
        DisplayFormat::Ui,
    );
    assert_eq!(null_text, "[NULL]");

    let text = handler.value_display_string(
        binding.attribute_type(),
        &DbValue::Text("abc".to_owned()),
        DisplayFormat::Ui,
    );
    assert_eq!(text, "abc");
}

#[test]
fn float_cells_render_their_truncated_magnitude() {
    let binding = install(&[("radix", json!(16))]);
    let text = binding.value_handler().value_display_string(
        binding.attribute_type(),
        &DbValue::Float(255.9),
        DisplayFormat::Ui,
    );
    assert_eq!(text, "FF");
}

#[test]
fn radix_text_parses_without_touching_the_delegate() {
    let delegate = Arc::new(RecordingHandler::default());
    let handler = RadixValueHandler::new(
        Arc::clone(&delegate) as Arc<dyn ValueHandler>,
        RadixDisplaySettings::default(),
    );
    let ctx = DataContext::new("edit");

    let value = handler
        .value_from_object(&ctx, &numeric_attribute(), &DbValue::Text("FF".to_owned()), false, true)
        .expect("parse failed");

    assert_eq!(value, DbValue::Int(255));
    assert_eq!(delegate.parse_calls.load(Ordering::Relaxed), 0);
}

#[test]
fn malformed_text_falls_back_to_the_delegate() {
    let delegate = Arc::new(RecordingHandler::default());
    let handler = RadixValueHandler::new(
        Arc::clone(&delegate) as Arc<dyn ValueHandler>,
        RadixDisplaySettings::default(),
    );
    let ctx = DataContext::new("edit");

    let value = handler
        .value_from_object(&ctx, &numeric_attribute(), &DbValue::Text("zz".to_owned()), false, true)
        .expect("fallback failed");

    assert_eq!(value, DbValue::Int(-7));
    assert_eq!(delegate.parse_calls.load(Ordering::Relaxed), 1);
}

#[test]
fn fallback_parses_the_original_text_generically() {
    // "42" is not valid binary, so the delegate sees the untouched text and
    // parses it as decimal.
    let binding = install(&[("radix", json!(2))]);
    let ctx = DataContext::new("edit");

    let value = binding
        .value_handler()
        .value_from_object(
            &ctx,
            binding.attribute_type(),
            &DbValue::Text("42".to_owned()),
            false,
            true,
        )
        .expect("fallback failed");

    assert_eq!(value, DbValue::Int(42));
}

#[test]
fn delegate_parse_failure_propagates() {
    let binding = install(&[("radix", json!(16))]);
    let ctx = DataContext::new("edit");

    let error = binding
        .value_handler()
        .value_from_object(
            &ctx,
            binding.attribute_type(),
            &DbValue::Text("zz".to_owned()),
            false,
            true,
        )
        .unwrap_err();

    assert!(matches!(error, ModelError::ValueConversion { .. }));
}

#[test]
fn empty_text_parses_to_zero() {
    let binding = install(&[("radix", json!(16))]);
    let ctx = DataContext::new("edit");

    let value = binding
        .value_handler()
        .value_from_object(&ctx, binding.attribute_type(), &DbValue::Text(String::new()), false, true)
        .expect("parse failed");

    assert_eq!(value, DbValue::Int(0));
}

#[test]
fn lone_zero_under_octal_prefix_falls_back_to_zero() {
    let binding = install(&[("radix", json!(8)), ("prefix", json!(true))]);
    let ctx = DataContext::new("edit");

    let value = binding
        .value_handler()
        .value_from_object(
            &ctx,
            binding.attribute_type(),
            &DbValue::Text("0".to_owned()),
            false,
            true,
        )
        .expect("fallback failed");

    assert_eq!(value, DbValue::Int(0));
}

#[test]
fn non_text_objects_forward_unchanged() {
    let delegate = Arc::new(RecordingHandler::default());
    let handler = RadixValueHandler::new(
        Arc::clone(&delegate) as Arc<dyn ValueHandler>,
        RadixDisplaySettings::default(),
    );
    let ctx = DataContext::new("edit");

    let value = handler
        .value_from_object(&ctx, &numeric_attribute(), &DbValue::Int(5), false, true)
        .expect("forward failed");

    assert_eq!(value, DbValue::Int(-7));
    assert_eq!(delegate.parse_calls.load(Ordering::Relaxed), 1);
}

#[test]
fn unintercepted_operations_reach_the_delegate() {
    let delegate = Arc::new(RecordingHandler::default());
    let handler = RadixValueHandler::new(
        Arc::clone(&delegate) as Arc<dyn ValueHandler>,
        RadixDisplaySettings::default(),
    );
    let ctx = DataContext::new("setup");
    let attribute_type = numeric_attribute();

    assert_eq!(handler.value_kind(&attribute_type), DataKind::Numeric);
    assert_eq!(handler.create_new_value(&ctx, &attribute_type), DbValue::Int(99));
    assert_eq!(delegate.kind_calls.load(Ordering::Relaxed), 1);
    assert_eq!(delegate.create_calls.load(Ordering::Relaxed), 1);
}

#[test]
fn unsigned_mode_renders_the_full_bit_pattern_via_the_handler() {
    let binding = install(&[("radix", json!(16)), ("unsigned", json!(true)), ("bits", json!(64))]);
    let text = binding.value_handler().value_display_string(
        binding.attribute_type(),
        &DbValue::Int(-1),
        DisplayFormat::Edit,
    );
    assert_eq!(text, "FFFFFFFFFFFFFFFF");
}
