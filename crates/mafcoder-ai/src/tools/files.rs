//! File-system tools. Every path is relative to the workspace root.

use std::fs;

use mafcoder_common::ToolError;

use super::Workspace;

/// Read the full text content of a file.
pub fn read_file(ws: &Workspace, path: &str) -> Result<String, ToolError> {
    let full = ws.resolve(path)?;
    fs::read_to_string(&full).map_err(|e| ToolError::from_io(full, e))
}

/// Create or overwrite a file with `content`.
pub fn write_file(ws: &Workspace, path: &str, content: &str) -> Result<String, ToolError> {
    let full = ws.resolve(path)?;
    fs::write(&full, content).map_err(|e| ToolError::from_io(full, e))?;
    Ok("File written successfully.".to_string())
}

/// Create a directory and any missing parents. Succeeds if it already exists.
pub fn create_folder(ws: &Workspace, path: &str) -> Result<String, ToolError> {
    let full = ws.resolve(path)?;
    fs::create_dir_all(&full).map_err(|e| ToolError::from_io(full, e))?;
    Ok("Directory created successfully.".to_string())
}

/// One line per immediate child: `name [File] 1,024 bytes` or
/// `name [Directory] <DIR>`, in the order the OS enumerates them.
pub fn list_files_and_directories(ws: &Workspace, directory: &str) -> Result<String, ToolError> {
    let full = ws.resolve(directory)?;
    let entries = fs::read_dir(&full).map_err(|e| ToolError::from_io(&full, e))?;

    let mut lines = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ToolError::from_io(&full, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        // Follow symlinks so a link to a directory lists as one.
        let metadata = fs::metadata(entry.path())
            .or_else(|_| entry.metadata())
            .map_err(|e| ToolError::from_io(entry.path(), e))?;

        if metadata.is_dir() {
            lines.push(format!("{name} [Directory] <DIR>"));
        } else {
            lines.push(format!(
                "{name} [File] {} bytes",
                group_thousands(metadata.len())
            ));
        }
    }

    Ok(lines.join("\n"))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> (Workspace, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (Workspace::new(dir.path()), dir)
    }

    #[test]
    fn write_then_read_round_trips() {
        let (ws, _dir) = workspace();
        let content = "line one\nline two\n\u{1F980} unicode\n";
        assert_eq!(
            write_file(&ws, "notes.txt", content).unwrap(),
            "File written successfully."
        );
        assert_eq!(read_file(&ws, "notes.txt").unwrap(), content);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let (ws, _dir) = workspace();
        write_file(&ws, "a.txt", "first version, longer").unwrap();
        write_file(&ws, "a.txt", "second").unwrap();
        assert_eq!(read_file(&ws, "a.txt").unwrap(), "second");
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let (ws, _dir) = workspace();
        let err = read_file(&ws, "nope.txt").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let (ws, _dir) = workspace();
        assert!(write_file(&ws, "missing/dir/a.txt", "x").is_err());
    }

    #[test]
    fn create_folder_is_idempotent() {
        let (ws, dir) = workspace();
        assert_eq!(
            create_folder(&ws, "a/b/c").unwrap(),
            "Directory created successfully."
        );
        assert!(create_folder(&ws, "a/b/c").is_ok());
        assert!(dir.path().join("a/b/c").is_dir());
    }

    #[test]
    fn list_tags_files_and_directories() {
        let (ws, dir) = workspace();
        fs::write(dir.path().join("data.bin"), vec![0u8; 1234]).unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let listing = list_files_and_directories(&ws, ".").unwrap();
        let mut lines: Vec<&str> = listing.lines().collect();
        lines.sort();
        assert_eq!(lines, vec!["data.bin [File] 1,234 bytes", "src [Directory] <DIR>"]);
    }

    #[test]
    fn list_empty_directory_is_empty() {
        let (ws, _dir) = workspace();
        create_folder(&ws, "empty").unwrap();
        assert_eq!(list_files_and_directories(&ws, "empty").unwrap(), "");
    }

    #[test]
    fn list_missing_directory_is_not_found() {
        let (ws, _dir) = workspace();
        let err = list_files_and_directories(&ws, "ghost").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[test]
    fn confined_workspace_blocks_escape() {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        let ws = Workspace::new(root.join("inner")).with_confined_paths(true);
        fs::create_dir(root.join("inner")).unwrap();
        fs::write(root.join("secret.txt"), "top secret").unwrap();

        let err = read_file(&ws, "../secret.txt").unwrap_err();
        assert!(matches!(err, ToolError::AccessDenied(_)));
    }

    #[cfg(unix)]
    #[test]
    fn confined_write_through_dangling_symlink_is_denied() {
        let base = tempfile::tempdir().unwrap();
        let base_path = fs::canonicalize(base.path()).unwrap();
        let root = base_path.join("root");
        fs::create_dir(&root).unwrap();
        let outside = base_path.join("outside.txt");
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        let ws = Workspace::new(&root).with_confined_paths(true);
        let err = write_file(&ws, "link", "escaped").unwrap_err();

        assert!(matches!(err, ToolError::AccessDenied(_)), "got {err:?}");
        assert!(!outside.exists());
    }

    #[cfg(unix)]
    #[test]
    fn confined_write_through_dangling_symlink_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        std::os::unix::fs::symlink("target.txt", root.join("link")).unwrap();

        let ws = Workspace::new(&root).with_confined_paths(true);
        write_file(&ws, "link", "kept inside").unwrap();

        assert_eq!(fs::read_to_string(root.join("target.txt")).unwrap(), "kept inside");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
