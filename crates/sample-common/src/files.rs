/// Filesystem helpers used when reading sample folders and emitting standalone projects.
///
/// Every failure is reported as a `CommonError` carrying the offending path; nothing here
/// retries or swallows errors. Callers that want best-effort behaviour log and skip.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::CommonError;

/// Counts reported by [`rewrite_tree_in_place`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Files whose contents changed and were rewritten.
    pub rewritten: usize,
    /// Files whose names changed and were renamed.
    pub renamed: usize,
}

pub fn read_contents(path: &Path) -> Result<String, CommonError> {
    fs::read_to_string(path).map_err(|e| CommonError::io(path, e))
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_contents(path: &Path, contents: &str) -> Result<(), CommonError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CommonError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| CommonError::io(path, e))
}

/// Serialize `value` as JSON indented with four spaces.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), CommonError> {
    let json = to_json_pretty(value).map_err(|e| CommonError::json(path, e))?;
    write_contents(path, &json)
}

/// Recursively copy the contents of `src` into `dst`, overwriting files that already exist.
///
/// Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, CommonError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| CommonError::io(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| CommonError::io(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| CommonError::io(entry.path(), e))?;
            copied += 1;
        }
    }
    debug!(src = %src.display(), dst = %dst.display(), copied, "copied tree");
    Ok(copied)
}

/// Apply each `(token, value)` pair in order.
pub fn apply_replacements(text: &str, replacements: &[(String, String)]) -> String {
    replacements
        .iter()
        .fold(text.to_string(), |acc, (token, value)| acc.replace(token, value))
}

/// Substitute placeholder tokens throughout a directory tree.
///
/// Files whose extension is in `content_extensions` (without the leading dot) have their
/// contents rewritten when a substitution changes them. Every file whose name contains a
/// token is renamed. Directories are never renamed.
pub fn rewrite_tree_in_place(
    root: &Path,
    replacements: &[(String, String)],
    content_extensions: &[&str],
) -> Result<RewriteSummary, CommonError> {
    // Collect first; renaming while walking would invalidate the iterator.
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let mut summary = RewriteSummary::default();
    for path in files {
        let has_content_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| content_extensions.contains(&ext));

        if has_content_extension {
            let original = read_contents(&path)?;
            let updated = apply_replacements(&original, replacements);
            if updated != original {
                fs::remove_file(&path).map_err(|e| CommonError::io(&path, e))?;
                write_contents(&path, &updated)?;
                summary.rewritten += 1;
            }
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let new_name = apply_replacements(file_name, replacements);
        if new_name != file_name {
            let new_path = path.with_file_name(&new_name);
            fs::rename(&path, &new_path).map_err(|e| CommonError::io(&path, e))?;
            debug!(from = %path.display(), to = %new_path.display(), "renamed file");
            summary.renamed += 1;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn replacements() -> Vec<(String, String)> {
        vec![
            ("$$project$$".to_string(), "DisplayMap".to_string()),
            (".slntemplate".to_string(), ".sln".to_string()),
        ]
    }

    #[test]
    fn apply_replacements_in_order() {
        let out = apply_replacements("$$project$$.slntemplate", &replacements());
        assert_eq!(out, "DisplayMap.sln");
    }

    #[test]
    fn json_uses_four_space_indent() {
        let value = serde_json::json!({ "a": [1] });
        let text = to_json_pretty(&value).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn copy_tree_copies_nested_files() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("Properties")).unwrap();
        fs::write(src.join("App.xaml"), "<Application/>").unwrap();
        fs::write(src.join("Properties").join("AssemblyInfo.cs"), "// info").unwrap();

        let dst = tmp.path().join("dst");
        let copied = copy_tree(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dst.join("App.xaml")).unwrap(), "<Application/>");
        assert!(dst.join("Properties").join("AssemblyInfo.cs").exists());
    }

    #[test]
    fn rewrite_tree_substitutes_contents_and_names() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("$$project$$.slntemplate"), "Project = $$project$$").unwrap();
        fs::write(root.join("nested").join("Main.cs"), "namespace $$project$$;").unwrap();
        fs::write(root.join("nested").join("logo.png"), "$$project$$").unwrap();
        fs::write(root.join("notes.md"), "nothing to replace").unwrap();

        let summary =
            rewrite_tree_in_place(root, &replacements(), &["cs", "slntemplate", "md"]).unwrap();

        assert_eq!(summary.rewritten, 2);
        assert_eq!(summary.renamed, 1);
        assert_eq!(
            fs::read_to_string(root.join("DisplayMap.sln")).unwrap(),
            "Project = DisplayMap"
        );
        assert!(!root.join("$$project$$.slntemplate").exists());
        assert_eq!(
            fs::read_to_string(root.join("nested").join("Main.cs")).unwrap(),
            "namespace DisplayMap;"
        );
        // binary-ish files keep their contents
        assert_eq!(
            fs::read_to_string(root.join("nested").join("logo.png")).unwrap(),
            "$$project$$"
        );
    }

    #[test]
    fn read_missing_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("readme.md");
        let err = read_contents(&missing).unwrap_err();
        assert!(err.to_string().contains("readme.md"));
    }
}
