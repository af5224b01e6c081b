use kalkyl_core::extraction::ocr::{OcrOptions, TesseractOcr};
use kalkyl_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

pub fn run(
    pdf_file: PathBuf,
    ocr_options: OcrOptions,
) -> Result<(), kalkyl_core::error::KalkylError> {
    if !PdftotextExtractor::is_available() {
        return Err(kalkyl_core::error::KalkylError::PdftotextNotFound);
    }

    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let ocr = TesseractOcr::new();

    let text = kalkyl_core::extract_text(&pdf_bytes, &extractor, &ocr, &ocr_options)?;
    println!("{text}");

    Ok(())
}
