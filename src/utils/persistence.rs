use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

const TMP_SUFFIX: &str = "tmp";

/// Sibling path used to stage a write, e.g. `expenses.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a temporary sibling and renames it over `path`.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    ensure_parent(path)?;
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)
}

/// Reads a file, returning `None` when it does not exist.
pub fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(data) => Ok(Some(data)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_appends_suffix_to_extension() {
        assert_eq!(
            tmp_path(Path::new("data/expenses.json")),
            PathBuf::from("data/expenses.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("expenses")), PathBuf::from("expenses.tmp"));
    }

    #[test]
    fn write_atomic_creates_parents_and_leaves_no_tmp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("expenses.json");
        write_atomic(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn write_failure_preserves_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        write_atomic(&path, "{\"a\":1}").unwrap();
        fs::create_dir_all(tmp_path(&path)).unwrap();
        assert!(write_atomic(&path, "{}").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn read_if_exists_handles_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_if_exists(&dir.path().join("absent.json"))
            .unwrap()
            .is_none());
    }
}
