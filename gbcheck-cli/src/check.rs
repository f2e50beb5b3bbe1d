use gbcheck_core::HeaderReport;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("error reading ROM file {file_path}: {source}")]
    FileRead {
        file_path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    // Missing files never reach the validator
    Missing,
    Checked(HeaderReport),
}

/// Read the given file and validate its header.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn check_file(file_path: &str) -> Result<CheckOutcome, CheckError> {
    let rom = match fs::read(Path::new(file_path)) {
        Ok(rom) => rom,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
        Err(err) => {
            return Err(CheckError::FileRead {
                file_path: file_path.into(),
                source: err,
            })
        }
    };

    log::debug!("Read {} bytes from {file_path}", rom.len());

    Ok(CheckOutcome::Checked(gbcheck_core::validate(&rom)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbcheck_core::HeaderStatus;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gbcheck-check-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file() {
        let path = temp_path("does-not-exist.gb");

        let outcome = check_file(path.to_str().unwrap()).unwrap();
        assert_eq!(CheckOutcome::Missing, outcome);
    }

    #[test]
    fn small_file() {
        let path = temp_path("small.gb");
        fs::write(&path, [0_u8; 0x40]).unwrap();

        let outcome = check_file(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        assert_eq!(
            CheckOutcome::Checked(HeaderReport::TooSmall { file_size: 0x40 }),
            outcome.unwrap()
        );
    }

    #[test]
    fn header_sized_file() {
        let path = temp_path("zeros.gb");
        fs::write(&path, vec![0_u8; 0x150]).unwrap();

        let outcome = check_file(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        let CheckOutcome::Checked(report) = outcome.unwrap()
        else {
            panic!("expected file to be checked");
        };
        assert_eq!(HeaderStatus::Valid, report.status());
        assert_eq!(0x150, report.file_size());
    }

    #[test]
    fn directory_is_read_error() {
        let path = temp_path("dir.gb");
        fs::create_dir_all(&path).unwrap();

        let result = check_file(path.to_str().unwrap());
        fs::remove_dir(&path).unwrap();

        assert!(matches!(result, Err(CheckError::FileRead { .. })));
    }
}
