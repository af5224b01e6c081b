use kalkyl_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), kalkyl_core::error::KalkylError> {
    if !PdftotextExtractor::is_available() {
        return Err(kalkyl_core::error::KalkylError::PdftotextNotFound);
    }

    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();

    let tables = kalkyl_core::extract_tables(&pdf_bytes, &extractor)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&tables)?;
            std::fs::write(&path, json)?;
            eprintln!("{} table(s) written to {}", tables.len(), path.display());
        }
        None => match output_format {
            "json" => output::json::print(&tables)?,
            _ => output::table::print(&tables),
        },
    }

    Ok(())
}
