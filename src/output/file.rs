//! Plain text result files.

use std::error::Error;
use std::fmt::Display;
use std::path::Path;

/// Write one item per line to `path`, replacing any existing file.
pub fn write_lines<T: Display>(path: &Path, items: &[T]) -> Result<(), Box<dyn Error>> {
    let text: String = items.iter().map(|item| format!("{item}\n")).collect();
    std::fs::write(path, text)
        .map_err(|e| format!("Error writing file {}: {e}", path.display()))?;
    log::info!("Wrote {} lines to {}", items.len(), path.display());
    Ok(())
}
