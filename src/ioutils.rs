use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ensures the output directory is safe to write to.
///
/// An existing directory is only accepted with `force`; the generator itself
/// never checks and would merge into existing content silently.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn accepts_missing_output_dir() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("new_project");
        assert_eq!(get_output_dir(&target, false).unwrap(), target);
    }

    #[test]
    fn rejects_existing_output_dir_without_force() {
        let temp = TempDir::new().unwrap();
        let result = get_output_dir(temp.path(), false);
        assert!(matches!(result, Err(Error::OutputDirectoryExistsError { .. })));
    }

    #[test]
    fn accepts_existing_output_dir_with_force() {
        let temp = TempDir::new().unwrap();
        assert!(get_output_dir(temp.path(), true).is_ok());
    }

    #[test]
    fn read_from_reads_all_content() {
        let content = read_from(std::io::Cursor::new("answer data")).unwrap();
        assert_eq!(content, "answer data");
    }
}
