pub mod ocr;
pub mod pdftotext;

use crate::error::KalkylError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// The page's text with trailing blank lines removed.
    pub fn text(&self) -> String {
        self.lines.join("\n").trim_end().to_string()
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, KalkylError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
