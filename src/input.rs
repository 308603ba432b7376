//! Input file collection for `--xml` / `--dir`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

const XML_SUFFIX: &str = ".xml";

/// Build the ordered list of files to measure.
///
/// The single file comes first and is taken as given. The directory is walked
/// recursively, keeping every entry whose name ends in `.xml`, in file-name order.
pub fn collect_inputs(single: Option<&Path>, dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if let Some(path) = single {
        files.push(path.to_path_buf());
    }

    if let Some(root) = dir {
        files.extend(collect_dir(root)?);
    }

    Ok(files)
}

fn collect_dir(root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| Error::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_name().to_string_lossy().ends_with(XML_SUFFIX) {
            out.push(entry.into_path());
        }
    }
    tracing::debug!(root = %root.display(), files = out.len(), "scanned input directory");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn no_flags_yield_nothing() {
        assert!(collect_inputs(None, None).unwrap().is_empty());
    }

    #[test]
    fn single_file_is_taken_verbatim() {
        let files = collect_inputs(Some(Path::new("vm.txt")), None).unwrap();
        assert_eq!(files, vec![PathBuf::from("vm.txt")]);
    }

    #[test]
    fn directory_walk_is_recursive_and_filters_suffix() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("cluster").join("node1");
        fs::create_dir_all(&nested).unwrap();

        fs::write(dir.path().join("b.xml"), "<domain/>").unwrap();
        fs::write(dir.path().join("a.xml"), "<domain/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();
        fs::write(dir.path().join("a.xml.bak"), "skip").unwrap();
        fs::write(nested.join("c.xml"), "<domain/>").unwrap();

        let files = collect_inputs(None, Some(dir.path())).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("a.xml"),
                PathBuf::from("b.xml"),
                Path::new("cluster").join("node1").join("c.xml"),
            ]
        );
    }

    #[test]
    fn single_file_precedes_directory_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.xml"), "<domain/>").unwrap();

        let files = collect_inputs(Some(Path::new("first.xml")), Some(dir.path())).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0], PathBuf::from("first.xml"));
    }

    #[test]
    fn missing_directory_is_a_walk_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = collect_inputs(None, Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::Walk { .. }));
    }
}
