//! Lexical Path Normalization
//!
//! Pure path algebra used before any existence check:
//! - Redundant separators collapse
//! - `.` segments are dropped
//! - `..` segments pop the previous segment without touching the disk

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically.
///
/// `..` directly under the root stays at the root. Leading `..` segments of a
/// relative path are kept. An empty result becomes `.`.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut normalized = PathBuf::new();
    // Number of `Normal` segments currently on the stack (poppable by `..`)
    let mut depth = 0usize;

    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                normalized.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(segment) => {
                normalized.push(segment);
                depth += 1;
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }

    normalized
}

/// Append `path` under `root` as if joined with a single separator.
///
/// Unlike [`Path::join`], an absolute `path` does not replace `root`:
/// `join_under("/assets", "/js/app.js")` is `/assets/js/app.js`.
pub fn join_under<R: AsRef<Path>, P: AsRef<Path>>(root: R, path: P) -> PathBuf {
    let mut joined = root.as_ref().to_path_buf();
    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => continue,
            other => joined.push(other.as_os_str()),
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collapses_redundant_separators() {
        assert_eq!(normalize("/a//b///c.js"), PathBuf::from("/a/b/c.js"));
    }

    #[test]
    fn drops_current_dir_segments() {
        assert_eq!(normalize("/a/./b/./c.js"), PathBuf::from("/a/b/c.js"));
        assert_eq!(normalize("./a.js"), PathBuf::from("a.js"));
    }

    #[test]
    fn resolves_parent_segments_lexically() {
        assert_eq!(
            normalize("/assets/js/../css/site.css"),
            PathBuf::from("/assets/css/site.css")
        );
        // Intermediate segments need not exist
        assert_eq!(
            normalize("/does/not/exist/../../file"),
            PathBuf::from("/does/file")
        );
    }

    #[test]
    fn parent_at_root_stays_at_root() {
        assert_eq!(normalize("/../../etc/hosts"), PathBuf::from("/etc/hosts"));
        assert_eq!(normalize("/.."), PathBuf::from("/"));
    }

    #[test]
    fn leading_parent_kept_for_relative_paths() {
        assert_eq!(normalize("../x/y"), PathBuf::from("../x/y"));
        assert_eq!(normalize("a/../../b"), PathBuf::from("../b"));
    }

    #[test]
    fn empty_result_is_current_dir() {
        assert_eq!(normalize(""), PathBuf::from("."));
        assert_eq!(normalize("a/.."), PathBuf::from("."));
    }

    #[test]
    fn join_under_relative() {
        assert_eq!(
            join_under("/assets", "js/app.js"),
            PathBuf::from("/assets/js/app.js")
        );
    }

    #[test]
    fn join_under_keeps_root_for_absolute_input() {
        #[cfg(not(windows))]
        assert_eq!(
            join_under("/assets", "/js/app.js"),
            PathBuf::from("/assets/js/app.js")
        );
    }

    #[test]
    fn join_under_then_normalize() {
        assert_eq!(
            normalize(join_under("/assets/", "../shared//lib.js")),
            PathBuf::from("/shared/lib.js")
        );
    }

    fn segment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            "[a-z]{1,6}",
        ]
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(segments in prop::collection::vec(segment(), 0..12)) {
            let raw = format!("/{}", segments.join("/"));
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn absolute_result_has_no_relative_segments(segments in prop::collection::vec(segment(), 0..12)) {
            let raw = format!("/{}", segments.join("/"));
            let normalized = normalize(&raw);
            prop_assert!(normalized.is_absolute());
            prop_assert!(normalized
                .components()
                .all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
        }
    }
}
