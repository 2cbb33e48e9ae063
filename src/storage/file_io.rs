//! File I/O utilities for the key file and the password file
//!
//! Every write is synced to disk before returning. Handles are scoped to the
//! call so they close on every exit path.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Split, Write};
use std::path::Path;

use crate::error::{VaultError, VaultResult};

fn ensure_parent(path: &Path) -> VaultResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            VaultError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Write key bytes to `path`, replacing any existing file
///
/// On Unix the file is created with mode 0600.
pub fn write_key_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> VaultResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .map_err(|e| VaultError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    file.write_all(bytes)
        .map_err(|e| VaultError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    file.sync_all()
        .map_err(|e| VaultError::Io(format!("Failed to sync {}: {}", path.display(), e)))?;

    Ok(())
}

/// Read the raw bytes of a key file, failing if it doesn't exist
pub fn read_key_file<P: AsRef<Path>>(path: P) -> VaultResult<Vec<u8>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VaultError::key_file_not_found(path.display().to_string()));
    }

    fs::read(path).map_err(|e| VaultError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Append one line to a text file, creating it if absent
///
/// The newline is added here. The file is flushed and synced before the
/// handle is dropped, so a successful return means the line is on disk.
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> VaultResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| VaultError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .map_err(|e| VaultError::Io(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| VaultError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    file.sync_all()
        .map_err(|e| VaultError::Io(format!("Failed to sync {}: {}", path.display(), e)))?;

    Ok(())
}

/// Open a file for reading as raw newline-separated byte lines
///
/// Lines are yielded as bytes so that a line that is not valid UTF-8 is the
/// caller's to judge, while a failed read still surfaces as an `io::Error`.
pub fn read_byte_lines<P: AsRef<Path>>(path: P) -> VaultResult<Split<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| VaultError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file).split(b'\n'))
}
