//! Results file writing
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{
    errors::{MoverError, MoverErrorKind},
    utils::MigrationOutcome,
};

/// Write the original URL of every migrated repository to `path`, one per line
///
/// The file is created, or truncated if it exists.
/// # Errors
/// Error if the file can't be created or written to
pub fn write_results(path: &Path, results: &[MigrationOutcome]) -> Result<(), MoverError> {
    let report_error = |what: &str, e: std::io::Error| {
        MoverError::new(MoverErrorKind::Report)
            .with_text(&format!("{what} file {} failed: {e}", path.display()))
    };
    let file = File::create(path).map_err(|e| report_error("creating", e))?;
    let mut writer = BufWriter::new(file);
    for result in results {
        writeln!(writer, "{}", result.original_url).map_err(|e| report_error("writing to", e))?;
    }
    writer.flush().map_err(|e| report_error("writing to", e))?;
    info!(
        "Wrote {} migrated repositories to {}",
        results.len(),
        path.display()
    );
    Ok(())
}
