//! File I/O helpers for the append-only store

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::error::ExpenseError;

/// Create the parent directory of `path` if it is missing
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Open a file for reading, treating a missing file as `None`
pub fn open_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<File>, ExpenseError> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ExpenseError::Io(format!(
            "Failed to open {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Bytes to write before appending so the next record starts on its own line.
///
/// An unfinished last line gets a newline. If the file ends inside a quoted
/// field (an odd number of `"` overall), the quote is closed first, so the
/// broken row stays a single malformed record instead of swallowing the
/// next one.
pub fn append_prefix<P: AsRef<Path>>(path: P) -> Result<&'static [u8], ExpenseError> {
    let Some(file) = open_if_exists(path)? else {
        return Ok(b"");
    };

    let mut reader = BufReader::new(file);
    let mut buf = [0u8; 8192];
    let mut open_quote = false;
    let mut last = None;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        let quotes = buf[..n].iter().filter(|b| **b == b'"').count();
        open_quote ^= quotes % 2 == 1;
        last = Some(buf[n - 1]);
    }

    Ok(match (open_quote, last) {
        (true, _) => b"\"\n",
        (false, Some(byte)) if byte != b'\n' => b"\n",
        _ => b"",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert!(open_if_exists(&path).unwrap().is_none());
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("expenses.csv");

        ensure_parent_dir(&path).unwrap();
        assert!(temp_dir.path().join("nested").join("dir").exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_append_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        assert_eq!(append_prefix(&path).unwrap(), b"");

        fs::write(&path, "").unwrap();
        assert_eq!(append_prefix(&path).unwrap(), b"");

        fs::write(&path, "2024-01-01,Food,10.0\n").unwrap();
        assert_eq!(append_prefix(&path).unwrap(), b"");

        fs::write(&path, "2024-01-01,Food,10.0").unwrap();
        assert_eq!(append_prefix(&path).unwrap(), b"\n");
    }

    #[test]
    fn test_append_prefix_closes_open_quote() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        fs::write(&path, "2024-01-01,\"Fo").unwrap();
        assert_eq!(append_prefix(&path).unwrap(), b"\"\n");

        // Cut right after an embedded newline inside quotes
        fs::write(&path, "2024-01-01,\"two\n").unwrap();
        assert_eq!(append_prefix(&path).unwrap(), b"\"\n");

        // Escaped quotes come in pairs
        fs::write(&path, "2024-01-01,\"say \"\"hi\"\"\",1.0\n").unwrap();
        assert_eq!(append_prefix(&path).unwrap(), b"");
    }
}
