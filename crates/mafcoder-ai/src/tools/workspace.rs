//! The working directory every file-system and shell tool operates in.

use std::path::{Path, PathBuf};

use mafcoder_common::ToolError;

/// Characters that let one shell command line run further commands.
const SHELL_CONTROL: &[char] = &[';', '&', '|', '$', '`', '<', '>', '(', ')', '\n', '\r'];

/// Root directory for tool operations, plus the optional guards.
///
/// Relative paths are joined onto the root. Without `confine_paths`, `..`
/// segments and absolute paths are honored as given, so a call can reach
/// outside the root. With it, any path resolving outside the root is
/// rejected.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    confine_paths: bool,
    command_allowlist: Vec<String>,
}

impl Workspace {
    /// Create a workspace rooted at `root` (expected to be absolute).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            confine_paths: false,
            command_allowlist: Vec::new(),
        }
    }

    pub fn with_confined_paths(mut self, confine: bool) -> Self {
        self.confine_paths = confine;
        self
    }

    pub fn with_command_allowlist(mut self, allowlist: Vec<String>) -> Self {
        self.command_allowlist = allowlist;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Combine `relative` with the root.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, ToolError> {
        let joined = self.root.join(relative);
        if self.confine_paths {
            self.validate_path(&joined)
        } else {
            Ok(joined)
        }
    }

    /// Validate that `path` resolves to a location inside the root.
    ///
    /// If the path does not exist yet, the nearest existing ancestor is
    /// canonicalized instead and the remaining components re-attached, so
    /// paths about to be created can be checked too.
    fn validate_path(&self, path: &Path) -> Result<PathBuf, ToolError> {
        let root = std::fs::canonicalize(&self.root).map_err(|e| {
            ToolError::AccessDenied(format!(
                "cannot resolve working directory '{}': {e}",
                self.root.display()
            ))
        })?;

        let canonical = canonicalize_lenient(path)?;

        if !canonical.starts_with(&root) {
            return Err(ToolError::AccessDenied(format!(
                "path '{}' is outside working directory '{}'",
                canonical.display(),
                root.display(),
            )));
        }

        Ok(canonical)
    }

    /// Validate the first word of `cmd` against the allowlist, if one is set.
    pub fn validate_command(&self, cmd: &str) -> Result<(), ToolError> {
        if self.command_allowlist.is_empty() {
            return Ok(());
        }

        // The shell would run anything chained after the first word.
        if let Some(c) = cmd.chars().find(|c| SHELL_CONTROL.contains(c)) {
            return Err(ToolError::AccessDenied(format!(
                "shell control character {c:?} is not allowed when a command allowlist is set"
            )));
        }

        let first_word = cmd.split_whitespace().next().unwrap_or("");

        // Strip any leading path prefix so `/usr/bin/ls` is treated as `ls`.
        let binary_name = first_word
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(first_word);

        if self.command_allowlist.iter().any(|c| c == binary_name) {
            Ok(())
        } else {
            Err(ToolError::AccessDenied(format!(
                "command not allowed: {binary_name}"
            )))
        }
    }
}

/// Symbolic links followed while resolving one path before giving up.
const MAX_LINK_DEPTH: usize = 40;

/// Canonicalize `path`, tolerating a missing tail.
///
/// A dangling symlink on the way is followed to its target, since writing
/// through it would create the target.
fn canonicalize_lenient(path: &Path) -> Result<PathBuf, ToolError> {
    resolve_lenient(path, 0)
}

fn resolve_lenient(path: &Path, depth: usize) -> Result<PathBuf, ToolError> {
    let unresolved =
        || ToolError::AccessDenied(format!("cannot resolve path '{}'", path.display()));
    let mut existing = path;
    let mut tail: Vec<&std::ffi::OsStr> = Vec::new();

    loop {
        match std::fs::canonicalize(existing) {
            Ok(mut canonical) => {
                for component in tail.iter().rev() {
                    if *component == ".." {
                        canonical.pop();
                    } else if *component != "." {
                        canonical.push(component);
                    }
                }
                return Ok(canonical);
            }
            Err(_) => {
                let is_link = std::fs::symlink_metadata(existing)
                    .map(|meta| meta.file_type().is_symlink())
                    .unwrap_or(false);
                if is_link {
                    if depth >= MAX_LINK_DEPTH {
                        return Err(ToolError::AccessDenied(format!(
                            "too many levels of symbolic links in '{}'",
                            path.display()
                        )));
                    }
                    let target = std::fs::read_link(existing).map_err(|_| unresolved())?;
                    let mut next = match existing.parent() {
                        Some(parent) => parent.join(target),
                        None => target,
                    };
                    for component in tail.iter().rev() {
                        next.push(component);
                    }
                    return resolve_lenient(&next, depth + 1);
                }

                let last = existing.components().next_back().ok_or_else(unresolved)?;
                tail.push(last.as_os_str());
                existing = existing.parent().ok_or_else(unresolved)?;
            }
        }
    }
}
