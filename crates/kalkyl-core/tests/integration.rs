//! Integration tests for the extract_document() end-to-end pipeline.
//!
//! Uses mock extraction/OCR backends that return pre-built content
//! without invoking poppler or tesseract, so these tests run without
//! either installed.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use calamine::Reader;
use kalkyl_core::error::KalkylError;
use kalkyl_core::extraction::ocr::{OcrEngine, OcrOptions};
use kalkyl_core::extraction::{PageContent, PdfExtractor};
use kalkyl_core::workbook::{write_workbook, TEXT_SHEET_NAME};
use kalkyl_core::{extract_document, extract_text};

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, KalkylError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct MockOcr {
    pages: Vec<String>,
    calls: AtomicUsize,
}

impl MockOcr {
    fn new(pages: &[&str]) -> Self {
        MockOcr {
            pages: pages.iter().map(|s| s.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OcrEngine for MockOcr {
    fn recognize_pages(
        &self,
        _pdf_bytes: &[u8],
        _options: &OcrOptions,
    ) -> Result<Vec<String>, KalkylError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pages.clone())
    }

    fn engine_name(&self) -> &str {
        "mock-ocr"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Test 1: embedded text layer present - OCR must never run
// ---------------------------------------------------------------------------
#[test]
fn embedded_text_skips_ocr() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, &["First page of prose."]),
            page(2, &["Second page of prose."]),
        ],
    };
    let ocr = MockOcr::new(&["SHOULD NOT APPEAR"]);

    let text = extract_text(&[], &extractor, &ocr, &OcrOptions::default()).unwrap();

    assert_eq!(text, "First page of prose.\n\nSecond page of prose.");
    assert_eq!(ocr.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Test 2: no embedded text - OCR runs exactly once
// ---------------------------------------------------------------------------
#[test]
fn scanned_pdf_falls_back_to_ocr_once() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["", "   "])],
    };
    let ocr = MockOcr::new(&["INVOICE 2024\nTotal: 99.00"]);

    let text = extract_text(&[], &extractor, &ocr, &OcrOptions::default()).unwrap();

    assert!(text.contains("INVOICE 2024"));
    assert_eq!(ocr.call_count(), 1);
}

// ---------------------------------------------------------------------------
// Test 3: primary extraction errors propagate, OCR untouched
// ---------------------------------------------------------------------------
struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, KalkylError> {
        Err(KalkylError::Extraction("corrupt xref".into()))
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

#[test]
fn primary_failure_is_fatal() {
    let ocr = MockOcr::new(&["unused"]);
    let result = extract_text(&[], &FailingExtractor, &ocr, &OcrOptions::default());

    assert!(matches!(result, Err(KalkylError::Extraction(_))));
    assert_eq!(ocr.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Test 4: full pipeline - two-page text PDF with no tables
// ---------------------------------------------------------------------------
#[test]
fn two_page_text_pdf_no_tables() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, &["Dear reader,", "this is page one."]),
            page(2, &["And this is page two."]),
        ],
    };
    let ocr = MockOcr::new(&[]);

    let doc = extract_document(&[], &extractor, &ocr, &OcrOptions::default()).unwrap();
    assert_eq!(
        doc.text,
        "Dear reader,\nthis is page one.\n\nAnd this is page two."
    );
    assert!(doc.tables.is_empty());

    let buf = write_workbook(&doc.text, &doc.tables).unwrap();
    let mut wb: calamine::Xlsx<_> = calamine::open_workbook_from_rs(Cursor::new(buf)).unwrap();

    assert_eq!(wb.sheet_names(), vec![TEXT_SHEET_NAME.to_string()]);
    let range = wb.worksheet_range(TEXT_SHEET_NAME).unwrap();
    assert_eq!(
        range.get_value((1, 0)),
        Some(&calamine::Data::String("Dear reader,".into()))
    );
    assert_eq!(
        range.get_value((2, 0)),
        Some(&calamine::Data::String("this is page one.".into()))
    );
}

// ---------------------------------------------------------------------------
// Test 5: full pipeline - tables across pages, workbook round-trip
// ---------------------------------------------------------------------------
#[test]
fn workbook_has_one_sheet_per_surviving_table() {
    let extractor = MockExtractor {
        pages: vec![
            page(
                1,
                &[
                    "Invoice summary",
                    "",
                    "Item          Unit price    Qty",
                    "Blue widget   9.50          2",
                    "Gadget        12.00         1",
                ],
            ),
            page(
                2,
                &[
                    "Totals",
                    "Category      Amount",
                    "Hardware      21.50",
                    "Shipping      4.00",
                ],
            ),
        ],
    };
    let ocr = MockOcr::new(&[]);

    let doc = extract_document(&[], &extractor, &ocr, &OcrOptions::default()).unwrap();
    assert_eq!(doc.tables.len(), 2);
    assert_eq!(doc.tables[0].headers, vec!["Item", "Unit price", "Qty"]);
    assert_eq!(doc.tables[1].headers, vec!["Category", "Amount"]);

    let buf = write_workbook(&doc.text, &doc.tables).unwrap();
    let mut wb: calamine::Xlsx<_> = calamine::open_workbook_from_rs(Cursor::new(buf)).unwrap();

    assert_eq!(
        wb.sheet_names(),
        vec![
            TEXT_SHEET_NAME.to_string(),
            "Table_1".to_string(),
            "Table_2".to_string(),
        ]
    );

    let t1 = wb.worksheet_range("Table_1").unwrap();
    assert_eq!(
        t1.get_value((0, 0)),
        Some(&calamine::Data::String("Item".into()))
    );
    assert_eq!(
        t1.get_value((1, 0)),
        Some(&calamine::Data::String("Blue widget".into()))
    );
    assert_eq!(t1.get_value((1, 1)), Some(&calamine::Data::Float(9.5)));

    let t2 = wb.worksheet_range("Table_2").unwrap();
    assert_eq!(t2.get_value((2, 1)), Some(&calamine::Data::Float(4.0)));
}

// ---------------------------------------------------------------------------
// Test 6: a candidate pruned below 2 columns disappears silently
// ---------------------------------------------------------------------------
#[test]
fn narrow_table_candidate_is_discarded() {
    // The first candidate's gaps never line up across its two lines,
    // so boundary inference yields a single column and cleaning drops
    // the grid. Only the aligned table below survives.
    let extractor = MockExtractor {
        pages: vec![page(
            1,
            &[
                "aaaa  bbbb",
                "cc  dddddd",
                "",
                "Item          Unit price",
                "Blue widget   9.50",
            ],
        )],
    };
    let ocr = MockOcr::new(&[]);

    let doc = extract_document(&[], &extractor, &ocr, &OcrOptions::default()).unwrap();
    assert_eq!(doc.tables.len(), 1);
    assert_eq!(doc.tables[0].headers, vec!["Item", "Unit price"]);
}
