//! Path utilities: expand ~, read attachments.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Read a file to attach to a multipart request; returns (file name, bytes).
pub fn read_attachment(path: &str) -> io::Result<(String, Vec<u8>)> {
    let p = expand_tilde(path);
    let bytes = fs::read(&p)?;
    let name = Path::new(&p)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "attachment".to_string());
    Ok((name, bytes))
}
