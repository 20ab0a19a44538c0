//! Static table of tools: name → schema + handler, plus the middleware chain.

use std::collections::HashMap;
use std::sync::Arc;

use mafcoder_common::ToolError;
use serde_json::Map;
use tracing::debug;

use super::definitions::{self, builtin_tools};
use super::invocation::decode_arguments;
use super::{calculator, files, shell, ToolInvocation, ToolOutput, Workspace};
use crate::middleware::{FunctionMiddleware, Next};
use crate::{ToolCall, ToolDefinition};

/// A bound tool implementation.
pub type ToolHandler =
    Box<dyn Fn(&ToolInvocation) -> Result<ToolOutput, ToolError> + Send + Sync>;

struct RegisteredTool {
    definition: ToolDefinition,
    handler: ToolHandler,
}

/// The immutable set of tools a session may call.
///
/// Every invocation runs through the middleware chain, outermost first,
/// before reaching the handler.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
    middleware: Vec<Arc<dyn FunctionMiddleware>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in tools bound to `workspace`.
    pub fn builtin(workspace: Workspace) -> Self {
        let workspace = Arc::new(workspace);
        let mut registry = Self::new();
        for definition in builtin_tools() {
            if let Some(handler) = bind_builtin(&definition.name, Arc::clone(&workspace)) {
                registry.register(definition, handler);
            }
        }
        registry
    }

    /// Add a tool. A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, definition: ToolDefinition, handler: ToolHandler) {
        if let Some(&i) = self.index.get(&definition.name) {
            self.tools[i] = RegisteredTool {
                definition,
                handler,
            };
            return;
        }
        self.index.insert(definition.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            definition,
            handler,
        });
    }

    /// Append a middleware. The first one added is the outermost.
    pub fn with_middleware(mut self, middleware: Arc<dyn FunctionMiddleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Descriptors in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a model tool call through the middleware chain.
    ///
    /// Every call enters the chain, including ones naming an unknown tool or
    /// carrying undecodable arguments; those fail at the innermost step.
    pub fn invoke(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let (arguments, bad_arguments) = match decode_arguments(&call.arguments) {
            Ok(arguments) => (arguments, None),
            Err(reason) => (Map::new(), Some(reason)),
        };
        let invocation = ToolInvocation {
            call_id: call.id.clone(),
            name: call.name.clone(),
            arguments,
        };
        debug!(tool = %invocation.name, call_id = %invocation.call_id, "Dispatching tool call");

        let dispatch = |inv: &ToolInvocation| -> Result<ToolOutput, ToolError> {
            if let Some(reason) = &bad_arguments {
                return Err(ToolError::InvalidArguments {
                    tool: inv.name.clone(),
                    reason: reason.clone(),
                });
            }
            let tool = self
                .index
                .get(&inv.name)
                .map(|&i| &self.tools[i])
                .ok_or_else(|| ToolError::UnknownTool(inv.name.clone()))?;
            (tool.handler)(inv)
        };
        self.run_chain(0, &invocation, &dispatch)
    }

    fn run_chain(
        &self,
        depth: usize,
        invocation: &ToolInvocation,
        dispatch: Next<'_>,
    ) -> Result<ToolOutput, ToolError> {
        match self.middleware.get(depth) {
            Some(middleware) => middleware.handle(invocation, &|inv: &ToolInvocation| {
                self.run_chain(depth + 1, inv, dispatch)
            }),
            None => dispatch(invocation),
        }
    }
}

fn handler<F>(f: F) -> ToolHandler
where
    F: Fn(&ToolInvocation) -> Result<ToolOutput, ToolError> + Send + Sync + 'static,
{
    Box::new(f)
}

fn bind_builtin(name: &str, ws: Arc<Workspace>) -> Option<ToolHandler> {
    let bound = match name {
        definitions::ADD => handler(|inv| {
            let sum = calculator::add(inv.i64_arg("a")?, inv.i64_arg("b")?);
            Ok(ToolOutput::Integer(sum))
        }),
        definitions::SUBTRACT => handler(|inv| {
            let difference = calculator::subtract(inv.i64_arg("a")?, inv.i64_arg("b")?);
            Ok(ToolOutput::Integer(difference))
        }),
        definitions::RANDOM_IN_RANGE => handler(|inv| {
            calculator::random_in_range(inv.i64_arg("min")?, inv.i64_arg("max")?)
                .map(ToolOutput::Integer)
        }),
        definitions::READ_FILE => handler(move |inv| {
            files::read_file(&ws, inv.str_arg("path")?).map(ToolOutput::Text)
        }),
        definitions::WRITE_FILE => handler(move |inv| {
            files::write_file(&ws, inv.str_arg("path")?, inv.str_arg("content")?)
                .map(ToolOutput::Text)
        }),
        definitions::CREATE_FOLDER => handler(move |inv| {
            files::create_folder(&ws, inv.str_arg("path")?).map(ToolOutput::Text)
        }),
        definitions::LIST_FILES_AND_DIRECTORIES => handler(move |inv| {
            files::list_files_and_directories(&ws, inv.str_arg("directory")?)
                .map(ToolOutput::Text)
        }),
        definitions::INVOKE_COMMAND_LINE => handler(move |inv| {
            shell::invoke_command_line(&ws, inv.str_arg("command")?).map(ToolOutput::Text)
        }),
        _ => return None,
    };
    Some(bound)
}
