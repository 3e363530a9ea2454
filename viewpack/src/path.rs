use std::path::{Path, PathBuf};

/// Replaces every backslash with a forward slash. No other rewriting is
/// done: `.` and `..` segments are kept as they are.
pub fn canonical_name(name: &str) -> String {
    name.replace('\\', "/")
}

/// Joins a canonical parent path and a child segment.
pub fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}/{child}")
    }
}

/// Location of `name` under `dir`, one path component per segment.
pub fn file_path(dir: &Path, name: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for segment in canonical_name(name).split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_become_slashes() {
        assert_eq!(canonical_name("a\\b\\c"), "a/b/c");
        assert_eq!(canonical_name("a/b\\c"), "a/b/c");
        assert_eq!(canonical_name("./a/../b"), "./a/../b");
    }

    #[test]
    fn join_at_root() {
        assert_eq!(join("", "login.tpl"), "login.tpl");
        assert_eq!(join("mail", "recover.email"), "mail/recover.email");
    }

    #[test]
    fn file_path_splits_segments() {
        let path = file_path(Path::new("/srv/views"), "mail\\html\\recover.email");
        assert_eq!(
            path,
            Path::new("/srv/views").join("mail").join("html").join("recover.email")
        );
        assert_eq!(file_path(Path::new("out"), ""), Path::new("out"));
    }
}
