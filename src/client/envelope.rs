//! Response envelope interpretation.
//!
//! The panel wraps every answer in either `{"result":{"data":{"json": X}}}`
//! or `{"error": ...}`. [`classify`] applies the precedence below, in order:
//!
//! | step | condition                          | outcome                         |
//! |------|------------------------------------|---------------------------------|
//! | 1    | body is not JSON (or is `null`)    | protocol error with excerpt     |
//! | 2    | `error` member is truthy           | remote error with best message  |
//! | 3    | `result.data.json` is present      | that value, even `null`/`false` |
//! | 4    | anything else                      | the whole document              |

use serde_json::Value;

use crate::error::{PanelError, Result};

/// JSON pointer to the unwrapped success value.
const SUCCESS_PATH: &str = "/result/data/json";

/// Places a human-readable message is looked up in an `error` member, in order.
const MESSAGE_PATHS: [&str; 2] = ["/json/message", "/message"];

/// Outcome of classifying a decoded response document.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The panel reported an error; carries the extracted message.
    Failure(String),
    /// The expected `result.data.json` payload.
    Success(Value),
    /// Neither shape matched; the document is passed through untouched.
    Passthrough(Value),
}

impl Envelope {
    pub fn into_result(self) -> Result<Value> {
        match self {
            Self::Failure(message) => Err(PanelError::rpc(message)),
            Self::Success(value) | Self::Passthrough(value) => Ok(value),
        }
    }
}

/// Parse a raw response body and unwrap its envelope.
pub fn interpret(body: &str) -> Result<Value> {
    let document: Value = match serde_json::from_str(body) {
        Ok(document) => document,
        Err(_) => return Err(PanelError::protocol(body)),
    };
    // A bare `null` document has no members to inspect.
    if document.is_null() {
        return Err(PanelError::protocol(body));
    }
    classify(document).into_result()
}

/// Classify an already decoded document (steps 2 to 4).
pub fn classify(mut document: Value) -> Envelope {
    if let Some(error) = document.get("error") {
        if is_truthy(error) {
            return Envelope::Failure(error_message(error));
        }
    }

    if let Some(payload) = document.pointer_mut(SUCCESS_PATH) {
        return Envelope::Success(payload.take());
    }

    Envelope::Passthrough(document)
}

/// Extract the best available message from an `error` member.
///
/// The first non-null candidate wins. Strings are used verbatim, other values
/// are serialized. Without any candidate the whole member is serialized.
pub fn error_message(error: &Value) -> String {
    for path in MESSAGE_PATHS {
        match error.pointer(path) {
            None | Some(Value::Null) => continue,
            Some(Value::String(message)) => return message.clone(),
            Some(other) => return other.to_string(),
        }
    }
    error.to_string()
}

/// JavaScript-style truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
