//! Shell command execution tool.

use std::process::{Command, Stdio};

use mafcoder_common::ToolError;
use tracing::{debug, info};

use super::Workspace;

/// Run `command` through the host shell inside the workspace root.
///
/// Stdin is closed, so interactive programs see end-of-input. Blocks until
/// the child exits; there is no timeout. Non-blank stderr wins over stdout
/// and comes back as `Error: <stderr>`. A process that cannot be started
/// is reported the same way rather than as a failure.
pub fn invoke_command_line(ws: &Workspace, command: &str) -> Result<String, ToolError> {
    ws.validate_command(command)?;

    let (shell, shell_arg) = if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };

    info!(command, "Executing command");

    let output = match Command::new(shell)
        .arg(shell_arg)
        .arg(command)
        .current_dir(ws.root())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
    {
        Ok(output) => output,
        Err(e) => return Ok(format!("Error: Unable to start process: {e}")),
    };

    debug!(status = ?output.status, "Command finished");

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return Ok(format!("Error: {}", stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
