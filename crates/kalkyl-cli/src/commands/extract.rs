use kalkyl_core::extraction::ocr::{OcrOptions, TesseractOcr};
use kalkyl_core::extraction::pdftotext::PdftotextExtractor;
use kalkyl_core::workbook::{write_workbook, DEFAULT_OUTPUT_NAME};
use std::path::PathBuf;

pub fn run(
    pdf_file: PathBuf,
    output_file: Option<PathBuf>,
    ocr_options: OcrOptions,
) -> Result<(), kalkyl_core::error::KalkylError> {
    if !PdftotextExtractor::is_available() {
        return Err(kalkyl_core::error::KalkylError::PdftotextNotFound);
    }

    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let ocr = TesseractOcr::new();

    let doc = kalkyl_core::extract_document(&pdf_bytes, &extractor, &ocr, &ocr_options)?;

    let buf = write_workbook(&doc.text, &doc.tables)?;
    let out_path = output_file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME));
    std::fs::write(&out_path, buf)?;

    eprintln!(
        "Extracted {} text line(s) and {} table(s), workbook written to {}",
        doc.text.lines().count(),
        doc.tables.len(),
        out_path.display()
    );

    Ok(())
}
