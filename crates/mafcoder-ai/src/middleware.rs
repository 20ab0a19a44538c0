//! Function-call middleware.
//!
//! Every tool invocation passes through the registry's middleware chain
//! before it reaches the tool. A middleware gets the invocation and an
//! explicit `next` continuation; it may observe, short-circuit, or wrap
//! the result.

use std::sync::Arc;

use mafcoder_common::ToolError;
use serde_json::Value;
use tracing::debug;

use crate::tools::{ToolInvocation, ToolOutput};

/// Continuation into the rest of the chain (and finally the tool).
pub type Next<'a> = &'a dyn Fn(&ToolInvocation) -> Result<ToolOutput, ToolError>;

pub trait FunctionMiddleware: Send + Sync {
    fn handle(
        &self,
        invocation: &ToolInvocation,
        next: Next<'_>,
    ) -> Result<ToolOutput, ToolError>;
}

/// Reports each call and its result to the console.
///
/// Emits `Function Call: name(k: v, ...)` before the tool runs and
/// `Function Call Result: X` after it succeeds. A failing tool produces
/// only the first line and the error propagates unchanged.
pub struct CallLogger {
    sink: Arc<dyn Fn(&str) + Send + Sync>,
}

impl CallLogger {
    pub fn new(sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }
}

impl FunctionMiddleware for CallLogger {
    fn handle(
        &self,
        invocation: &ToolInvocation,
        next: Next<'_>,
    ) -> Result<ToolOutput, ToolError> {
        let call = format_call(invocation);
        debug!(call = %call, "Function call");
        (self.sink)(&format!("Function Call: {call}"));

        let result = next(invocation)?;

        debug!(tool = %invocation.name, result = %result, "Function call result");
        (self.sink)(&format!("Function Call Result: {result}"));
        Ok(result)
    }
}

/// `name(key: value, key: value)` with arguments in their original order.
/// Strings are shown raw, everything else as compact JSON.
pub fn format_call(invocation: &ToolInvocation) -> String {
    let args = invocation
        .arguments
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}: {s}"),
            other => format!("{key}: {other}"),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({args})", invocation.name)
}
