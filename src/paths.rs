//! Target path resolution.
//!
//! Pure string/path computation: no existence checks happen here. The
//! dialog flows resolve whatever the user typed against a base directory
//! and work with the normalized result.

use std::path::{Component, Path, PathBuf};

/// Resolve a user-entered path against a base directory.
///
/// An absolute entry overrides the base; a relative entry (including
/// nested segments) is joined onto it. The result is lexically normalized.
pub fn resolve_target(base_dir: &Path, input: &str) -> PathBuf {
    let entered = Path::new(input);
    if entered.is_absolute() {
        normalize(entered)
    } else {
        normalize(&base_dir.join(entered))
    }
}

/// Collapse `.` and `..` segments without touching the filesystem.
///
/// `..` at the root stays at the root; `..` at the start of a relative
/// path collapses away.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::RootDir | Component::Prefix(_) | Component::Normal(_) => {
                normalized.push(component.as_os_str());
            }
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn joins_relative_input_onto_base() {
        let resolved = resolve_target(Path::new("/work/src"), "notes.md");
        assert_eq!(resolved, PathBuf::from("/work/src/notes.md"));
    }

    #[test]
    fn keeps_nested_segments() {
        let resolved = resolve_target(Path::new("/work"), "a/b/c.txt");
        assert_eq!(resolved, PathBuf::from("/work/a/b/c.txt"));
    }

    #[test]
    fn absolute_input_overrides_base() {
        let resolved = resolve_target(Path::new("/work/src"), "/etc/hosts");
        assert_eq!(resolved, PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn collapses_dot_and_dotdot() {
        let resolved = resolve_target(Path::new("/work/src"), "../docs/./readme.md");
        assert_eq!(resolved, PathBuf::from("/work/docs/readme.md"));
    }

    #[test]
    fn dotdot_stops_at_root() {
        assert_eq!(
            normalize(Path::new("/../../etc")),
            PathBuf::from("/etc")
        );
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(
            parts in proptest::collection::vec(
                prop_oneof![Just(".".to_string()), Just("..".to_string()), "[a-z]{1,8}"],
                0..8,
            )
        ) {
            let mut path = PathBuf::from("/work");
            for part in &parts {
                path.push(part);
            }
            let once = normalize(&path);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn resolved_target_is_absolute(input in "[a-z/.]{0,24}") {
            prop_assert!(resolve_target(Path::new("/work"), &input).is_absolute());
        }
    }
}
