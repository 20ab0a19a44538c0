//! A single tool call as seen by the middleware and the handlers.

use std::fmt;

use mafcoder_common::ToolError;
use serde_json::{Map, Value};

use crate::ToolCall;

/// Function name plus ordered arguments, built from a model `ToolCall`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub call_id: String,
    pub name: String,
    /// Arguments in the order the model emitted them.
    pub arguments: Map<String, Value>,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            call_id: String::new(),
            name: name.into(),
            arguments,
        }
    }

    /// Build from a model call. `null` arguments count as none at all.
    pub fn from_call(call: &ToolCall) -> Result<Self, ToolError> {
        let arguments =
            decode_arguments(&call.arguments).map_err(|reason| ToolError::InvalidArguments {
                tool: call.name.clone(),
                reason,
            })?;

        Ok(Self {
            call_id: call.id.clone(),
            name: call.name.clone(),
            arguments,
        })
    }

    fn arg(&self, key: &str) -> Result<&Value, ToolError> {
        self.arguments
            .get(key)
            .ok_or_else(|| self.invalid(format!("missing '{key}'")))
    }

    /// Integer argument. Integral strings such as `"42"` are accepted too.
    pub fn i64_arg(&self, key: &str) -> Result<i64, ToolError> {
        let value = self.arg(key)?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
            .ok_or_else(|| self.invalid(format!("'{key}' must be an integer, got {value}")))
    }

    pub fn str_arg(&self, key: &str) -> Result<&str, ToolError> {
        let value = self.arg(key)?;
        value
            .as_str()
            .ok_or_else(|| self.invalid(format!("'{key}' must be a string, got {value}")))
    }

    fn invalid(&self, reason: String) -> ToolError {
        ToolError::InvalidArguments {
            tool: self.name.clone(),
            reason,
        }
    }
}

/// The argument object of a model call, or why it is not one.
pub(crate) fn decode_arguments(value: &Value) -> Result<Map<String, Value>, String> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::Null => Ok(Map::new()),
        other => Err(format!("expected a JSON object, got {other}")),
    }
}

/// What a tool hands back to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutput {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolOutput::Integer(n) => write!(f, "{n}"),
            ToolOutput::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ToolOutput {
    fn from(n: i64) -> Self {
        ToolOutput::Integer(n)
    }
}

impl From<String> for ToolOutput {
    fn from(s: String) -> Self {
        ToolOutput::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(arguments: Value) -> ToolCall {
        ToolCall {
            id: "call_1".into(),
            name: "add".into(),
            arguments,
        }
    }

    #[test]
    fn from_call_keeps_argument_order() {
        let args: Value = serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap();
        let inv = ToolInvocation::from_call(&call(args)).unwrap();
        let keys: Vec<&str> = inv.arguments.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(inv.call_id, "call_1");
    }

    #[test]
    fn null_arguments_become_empty() {
        let inv = ToolInvocation::from_call(&call(Value::Null)).unwrap();
        assert!(inv.arguments.is_empty());
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let err = ToolInvocation::from_call(&call(json!([1, 2]))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }

    #[test]
    fn i64_arg_accepts_numbers_and_numeric_strings() {
        let inv = ToolInvocation::from_call(&call(json!({"a": 7, "b": " 12 "}))).unwrap();
        assert_eq!(inv.i64_arg("a").unwrap(), 7);
        assert_eq!(inv.i64_arg("b").unwrap(), 12);
    }

    #[test]
    fn typed_accessors_report_problems() {
        let inv = ToolInvocation::from_call(&call(json!({"a": "seven", "p": 3}))).unwrap();
        assert!(inv.i64_arg("a").unwrap_err().to_string().contains("'a' must be an integer"));
        assert!(inv.i64_arg("z").unwrap_err().to_string().contains("missing 'z'"));
        assert!(inv.str_arg("p").unwrap_err().to_string().contains("'p' must be a string"));
    }

    #[test]
    fn output_display() {
        assert_eq!(ToolOutput::Integer(-4).to_string(), "-4");
        assert_eq!(ToolOutput::Text("done".into()).to_string(), "done");
    }
}
