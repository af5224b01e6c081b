use crate::error::KalkylError;
use std::io::Write;
use std::process::Command;

/// Options for the OCR fallback pass.
#[derive(Debug, Clone)]
pub struct OcrOptions {
    /// Rasterization resolution in DPI. Higher is slower but more
    /// accurate on small print. 300 is a reasonable default for
    /// office-quality scans.
    pub dpi: u32,
    /// Tesseract language code, e.g. "eng" or "swe".
    pub lang: String,
    /// Tesseract page segmentation mode (`--psm`). 3 is tesseract's
    /// fully automatic segmentation; 6 assumes a single uniform block
    /// of text, which can work better on simple scanned forms.
    pub page_segmentation_mode: u8,
}

impl Default for OcrOptions {
    fn default() -> Self {
        OcrOptions {
            dpi: 300,
            lang: "eng".to_string(),
            page_segmentation_mode: 3,
        }
    }
}

/// Trait for OCR backends used when a PDF has no embedded text layer.
pub trait OcrEngine: Send + Sync {
    /// Rasterize each page of the PDF and recognize its text,
    /// returning one string per page in document order.
    fn recognize_pages(
        &self,
        pdf_bytes: &[u8],
        options: &OcrOptions,
    ) -> Result<Vec<String>, KalkylError>;

    /// Name of this OCR backend (for diagnostics).
    fn engine_name(&self) -> &str;
}

/// OCR backend shelling out to pdftoppm (poppler-utils) for page
/// rasterization and tesseract for recognition.
pub struct TesseractOcr;

impl TesseractOcr {
    pub fn new() -> Self {
        TesseractOcr
    }

    /// Check if both pdftoppm and tesseract are available on the system.
    pub fn is_available() -> bool {
        let pdftoppm = Command::new("pdftoppm").arg("-v").output().is_ok();
        let tesseract = Command::new("tesseract").arg("--version").output().is_ok();

        if !pdftoppm {
            log::debug!("pdftoppm not found - install poppler-utils for OCR support");
        }
        if !tesseract {
            log::debug!("tesseract not found - install tesseract-ocr for OCR support");
        }

        pdftoppm && tesseract
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize_pages(
        &self,
        pdf_bytes: &[u8],
        options: &OcrOptions,
    ) -> Result<Vec<String>, KalkylError> {
        if !Self::is_available() {
            return Err(KalkylError::Ocr(
                "OCR requires pdftoppm (poppler-utils) and tesseract-ocr to be installed"
                    .to_string(),
            ));
        }

        let temp_dir = tempfile::tempdir()?;

        let mut pdf_file = tempfile::NamedTempFile::new_in(temp_dir.path())
            .map_err(|e| KalkylError::Ocr(e.to_string()))?;
        pdf_file
            .write_all(pdf_bytes)
            .map_err(|e| KalkylError::Ocr(e.to_string()))?;

        let output_prefix = temp_dir.path().join("page");

        log::info!(
            "starting OCR pass (dpi={}, lang={}, psm={})",
            options.dpi,
            options.lang,
            options.page_segmentation_mode
        );

        let pdftoppm_output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(options.dpi.to_string())
            .arg(pdf_file.path())
            .arg(&output_prefix)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    KalkylError::PdftoppmNotFound
                } else {
                    KalkylError::Ocr(format!("failed to run pdftoppm: {}", e))
                }
            })?;

        if !pdftoppm_output.status.success() {
            let code = pdftoppm_output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&pdftoppm_output.stderr).to_string();
            return Err(KalkylError::PdftoppmFailed { code, stderr });
        }

        // Collect the rendered page images; pdftoppm numbers them with
        // zero-padded suffixes so a lexicographic sort is page order.
        let mut image_paths: Vec<_> = std::fs::read_dir(temp_dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
            .collect();
        image_paths.sort();

        if image_paths.is_empty() {
            return Err(KalkylError::Ocr("pdftoppm produced no images".to_string()));
        }

        let mut pages = Vec::with_capacity(image_paths.len());

        for (i, image_path) in image_paths.iter().enumerate() {
            let tesseract_output = Command::new("tesseract")
                .arg(image_path)
                .arg("stdout")
                .arg("-l")
                .arg(&options.lang)
                .arg("--psm")
                .arg(options.page_segmentation_mode.to_string())
                .output()
                .map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        KalkylError::TesseractNotFound
                    } else {
                        KalkylError::Ocr(format!(
                            "failed to run tesseract on page {}: {}",
                            i + 1,
                            e
                        ))
                    }
                })?;

            pages.push(recognized_text(tesseract_output, i + 1));
        }

        log::info!("OCR pass complete: {} page(s)", pages.len());

        Ok(pages)
    }

    fn engine_name(&self) -> &str {
        "tesseract"
    }
}

/// Turn one page's tesseract output into text. A non-zero exit keeps
/// whatever tesseract managed to emit and logs a warning; only a failed
/// spawn (handled by the caller) is fatal.
fn recognized_text(output: std::process::Output, page_number: usize) -> String {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::warn!(
            "tesseract warning on page {}: {}",
            page_number,
            stderr.trim()
        );
    }

    String::from_utf8_lossy(&output.stdout).to_string()
}
