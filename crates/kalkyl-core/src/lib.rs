pub mod error;
pub mod extraction;
pub mod model;
pub mod table;
pub mod workbook;

use error::KalkylError;
use extraction::ocr::{OcrEngine, OcrOptions};
use extraction::PdfExtractor;
use model::{ExtractedDocument, Table};

/// Extract the full text of a PDF, preferring the embedded text layer.
///
/// Pages are joined with one blank line in document order and the
/// result is trimmed. If the primary pass yields nothing (a scanned,
/// image-only document), the OCR fallback runs exactly once over all
/// pages; OCR never runs when the text layer produced anything.
/// Primary-pass errors propagate; there is no retry.
pub fn extract_text(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    ocr: &dyn OcrEngine,
    ocr_options: &OcrOptions,
) -> Result<String, KalkylError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let text = join_pages(pages.iter().map(|p| p.text()));
    if !text.is_empty() {
        return Ok(text);
    }

    log::info!(
        "no embedded text layer found by {}, falling back to {}",
        extractor.backend_name(),
        ocr.engine_name()
    );

    let ocr_pages = ocr.recognize_pages(pdf_bytes, ocr_options)?;
    Ok(join_pages(ocr_pages.iter().map(|p| p.trim().to_string())))
}

/// Extract cleaned tables from a PDF in (page order, within-page
/// detection order). The byte slice is read independently of the text
/// pass; the two passes share nothing.
pub fn extract_tables(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<Table>, KalkylError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(table::extract_tables_from_pages(&pages))
}

/// Run both extraction passes and return the combined result.
pub fn extract_document(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    ocr: &dyn OcrEngine,
    ocr_options: &OcrOptions,
) -> Result<ExtractedDocument, KalkylError> {
    let text = extract_text(pdf_bytes, extractor, ocr, ocr_options)?;
    let tables = extract_tables(pdf_bytes, extractor)?;
    Ok(ExtractedDocument { text, tables })
}

/// Join per-page text with one blank line between pages, trimmed.
/// Pages that contributed nothing are skipped so two pages are always
/// separated by exactly one blank line.
fn join_pages<I: Iterator<Item = String>>(pages: I) -> String {
    pages
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_pages_uses_single_blank_line() {
        let joined = join_pages(
            vec!["page one\n\n".to_string(), "\npage two".to_string()].into_iter(),
        );
        assert_eq!(joined, "page one\n\npage two");
    }

    #[test]
    fn join_pages_skips_blank_pages() {
        let joined = join_pages(
            vec!["a".to_string(), "   ".to_string(), "b".to_string()].into_iter(),
        );
        assert_eq!(joined, "a\n\nb");
    }
}
