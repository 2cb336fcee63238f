use std::collections::BTreeMap;
use proptest::prelude::*;
use serde_json::Value;
use gemini_proxy::structs::generation_request::GenerationRequest;
use crate::common::{interpreter_with, StaticGenerator};

fn small_object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{1,8}", any::<i32>(), 0..6)
        .prop_map(|map: BTreeMap<String, i32>| serde_json::to_value(map).unwrap())
}

proptest! {
    #[test]
    fn plain_mode_never_has_json_data(raw in ".*") {
        let interpreter = interpreter_with(StaticGenerator::text(&raw));
        let result = tokio_test::block_on(interpreter.generate(&GenerationRequest::new("p"))).unwrap();
        prop_assert!(result.json_data.is_none());
        prop_assert_eq!(result.text, raw);
    }

    #[test]
    fn fenced_object_is_recovered(object in small_object(), before in "[a-zA-Z ,.]{0,20}", after in "[a-zA-Z ,.]{0,20}") {
        let raw = format!("{}```json\n{}\n```{}", before, object, after);
        let interpreter = interpreter_with(StaticGenerator::text(&raw));
        let request = GenerationRequest::new("p").with_json_mode(None);
        let result = tokio_test::block_on(interpreter.generate(&request)).unwrap();
        prop_assert_eq!(result.json_data, Some(object));
        prop_assert_eq!(result.text, raw);
    }

    #[test]
    fn unfenced_json_is_parsed_after_trimming(object in small_object(), pad in "[ \t\n]{0,4}") {
        let raw = format!("{}{}{}", pad, serde_json::to_string_pretty(&object).unwrap(), pad);
        let interpreter = interpreter_with(StaticGenerator::text(&raw));
        let request = GenerationRequest::new("p").with_json_mode(None);
        let result = tokio_test::block_on(interpreter.generate(&request)).unwrap();
        prop_assert_eq!(result.json_data, Some(object));
    }

    #[test]
    fn json_mode_never_fails_on_arbitrary_text(raw in ".*") {
        let interpreter = interpreter_with(StaticGenerator::text(&raw));
        let request = GenerationRequest::new("p").with_json_mode(None);
        let result = tokio_test::block_on(interpreter.generate(&request));
        prop_assert!(result.is_ok());
    }
}
