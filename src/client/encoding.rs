//! Request payload wrapping and URL encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{json, Value};

use super::JsonObject;

/// Bytes left unescaped by ECMAScript `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Name of the query-string parameter carrying query input.
pub const INPUT_PARAM: &str = "input";

/// Wrap call input in the `{"json": ...}` request envelope.
pub fn wrap_input(input: &JsonObject) -> Value {
    json!({ "json": input })
}

/// Percent-encode a single URI component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Build the `?input=...` suffix for a query call.
pub fn query_suffix(input: &JsonObject) -> String {
    let envelope = wrap_input(input).to_string();
    format!("?{INPUT_PARAM}={}", encode_component(&envelope))
}

/// Serialize the body of a mutation call.
pub fn mutation_body(input: &JsonObject) -> Vec<u8> {
    wrap_input(input).to_string().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component(r#"{"json":{}}"#), "%7B%22json%22%3A%7B%7D%7D");
    }

    #[test]
    fn query_suffix_decodes_back_to_envelope() {
        let mut input = JsonObject::new();
        input.insert("projectName".into(), Value::String("my app+1".into()));
        let suffix = query_suffix(&input);

        let encoded = suffix.strip_prefix("?input=").expect("input parameter");
        let decoded = percent_decode_str(encoded).decode_utf8().expect("utf8");
        let parsed: Value = serde_json::from_str(&decoded).expect("json");
        assert_eq!(parsed, json!({"json": {"projectName": "my app+1"}}));
    }

    #[test]
    fn mutation_body_wraps_input() {
        let body = mutation_body(&JsonObject::new());
        assert_eq!(body, br#"{"json":{}}"#.to_vec());
    }
}
