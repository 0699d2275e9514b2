//! Lexical path helpers. Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};
use thiserror::Error as ThisError;

///
/// PathsError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum PathsError {
    #[error("extension '{extension}' contains a path separator")]
    SeparatorInExtension { extension: String },
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` pops a preceding normal component; leading `..` segments that have
/// nothing to pop are kept, as is any root/prefix.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else {
                    out.push(Component::ParentDir);
                }
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
            Component::RootDir | Component::Prefix(_) => out.push(component),
        }
    }

    out
}

/// Join path fragments left to right.
#[must_use]
pub fn join_all<I, P>(parts: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut out = PathBuf::new();
    for part in parts {
        out.push(part);
    }

    out
}

/// Add `extension` unless the path already carries exactly that extension.
pub fn ensure_extension(path: &Path, extension: &str) -> Result<PathBuf, PathsError> {
    if extension.contains(['/', '\\']) {
        return Err(PathsError::SeparatorInExtension {
            extension: extension.to_string(),
        });
    }

    if path.extension().is_some_and(|ext| ext == extension) {
        return Ok(path.to_path_buf());
    }

    Ok(path.with_extension(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dot_and_dotdot() {
        assert_eq!(normalize(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("/a/b/../../d")), PathBuf::from("/d"));
    }

    #[test]
    fn normalize_keeps_unmatched_parent_segments() {
        assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize(Path::new("a/../../x")), PathBuf::from("../x"));
    }

    #[test]
    fn join_all_concatenates_in_order() {
        assert_eq!(join_all(["a", "b", "c"]), PathBuf::from("a/b/c"));
    }

    #[test]
    fn ensure_extension_is_idempotent() {
        let path = Path::new("report.json");
        assert_eq!(
            ensure_extension(path, "json").unwrap(),
            PathBuf::from("report.json")
        );
        assert_eq!(
            ensure_extension(Path::new("report"), "json").unwrap(),
            PathBuf::from("report.json")
        );
    }

    #[test]
    fn ensure_extension_rejects_separators() {
        let err = ensure_extension(Path::new("report"), "a/b").unwrap_err();
        assert_eq!(
            err,
            PathsError::SeparatorInExtension {
                extension: "a/b".to_string()
            }
        );
    }
}
