use std::path::{Path, PathBuf};

use log::warn;
use walkdir::{DirEntry, WalkDir};

pub const TLST_EXTENSION: &str = "tlst";
pub const JSON_EXTENSION: &str = "json";

fn is_hidden(entry: &DirEntry) -> bool {
    // the root is always walked, even if it's something like "."
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// recursively collect all files with the given extension, sorted by path
pub fn gather_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut paths: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_extension(entry.path(), extension))
        .map(DirEntry::into_path)
        .collect();
    paths.sort();
    paths
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::{gather_files, has_extension};

    #[test]
    fn extensions() {
        assert!(has_extension("a/b.tlst".as_ref(), "tlst"));
        assert!(!has_extension("a/b.tlst.json.bak".as_ref(), "json"));
        assert!(!has_extension("a/tlst".as_ref(), "tlst"));
    }

    #[test]
    fn gather_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        for name in [
            "a.tlst",
            "b.json",
            "sub/c.tlst",
            "sub/deeper/d.tlst",
            ".hidden/e.tlst",
            ".f.tlst",
        ] {
            fs::write(root.join(name), b"").unwrap();
        }
        let found = gather_files(root, "tlst");
        assert_eq!(
            found,
            vec![
                root.join("a.tlst"),
                root.join("sub/c.tlst"),
                root.join("sub/deeper/d.tlst"),
            ]
        );
        assert_eq!(gather_files(root, "json"), vec![root.join("b.json")]);
    }
}
