// src/store.rs
// =============================================================================
// This module saves and loads the crawled link tree.
//
// The file is plain nested JSON (four-space indent), one object per article:
//   {
//       "Graph theory": {
//           "Vertex": {}
//       }
//   }
//
// Loading distinguishes a missing file (the user has not crawled yet) from
// a file that exists but is not a link tree.
//
// A crawl can nest as deep as --depth asks, so loading lifts serde_json's
// nesting limit and grows the stack on demand (serde_stacker) instead.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::crawl::LinkTree;

/// Default location of the crawled tree
pub const DEFAULT_DATABASE: &str = "wiki.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed database {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub fn save_tree(path: &Path, tree: &LinkTree) -> Result<(), StoreError> {
    let mut writer = BufWriter::new(File::create(path)?);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    tree.serialize(&mut serializer).map_err(io::Error::from)?;

    writer.flush()?;
    Ok(())
}

pub fn load_tree(path: &Path) -> Result<LinkTree, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(StoreError::Io(e)),
    };

    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));
    deserializer.disable_recursion_limit();

    LinkTree::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .and_then(|tree| deserializer.end().map(|()| tree))
        .map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_tree() -> LinkTree {
        let mut a = LinkTree::new();
        a.insert("B", LinkTree::new());
        let mut tree = LinkTree::new();
        tree.insert("A", a);
        tree.insert("C", LinkTree::new());
        tree
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wiki.json");

        save_tree(&path, &sample_tree()).unwrap();
        let loaded = load_tree(&path).unwrap();

        assert_eq!(loaded, sample_tree());
    }

    #[test]
    fn test_saved_format_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wiki.json");

        save_tree(&path, &sample_tree()).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert!(text.starts_with("{\n    \"A\": {\n        \"B\": {}\n    },"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_tree(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wiki.json");
        fs::write(&path, "{\"A\": [1, 2]}").unwrap();

        let err = load_tree(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_load_handwritten_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wiki.json");
        fs::write(&path, r#"{"Erdős number": {"Paul Erdős": {}, "Graph": {"Vertex": {}}}}"#).unwrap();

        let tree = load_tree(&path).unwrap();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_load_trailing_garbage_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wiki.json");
        fs::write(&path, "{\"A\": {}} {}").unwrap();

        let err = load_tree(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_save_and_load_very_deep_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wiki.json");

        // A 300-level chain: Page0 -> Page1 -> ... -> Page299
        let mut tree = LinkTree::new();
        for level in (0..300).rev() {
            let mut parent = LinkTree::new();
            parent.insert(format!("Page{}", level), tree);
            tree = parent;
        }

        save_tree(&path, &tree).unwrap();
        let loaded = load_tree(&path).unwrap();

        assert_eq!(loaded.depth(), 300);
        assert_eq!(loaded, tree);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wiki.json");
        fs::write(&path, "stale contents that are much longer than the new tree").unwrap();

        save_tree(&path, &LinkTree::new()).unwrap();

        assert_eq!(load_tree(&path).unwrap(), LinkTree::new());
    }
}
