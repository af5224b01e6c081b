mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kalkyl",
    version,
    about = "Extract text and tables from PDFs into a spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Knobs for the OCR fallback (only used when the PDF has no embedded
/// text layer).
#[derive(clap::Args)]
struct OcrArgs {
    /// Rasterization resolution for OCR, in DPI
    #[arg(long, default_value_t = 300)]
    dpi: u32,

    /// Tesseract language code (e.g. eng, swe)
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Tesseract page segmentation mode (--psm); 3 = fully automatic
    #[arg(long, default_value_t = 3)]
    psm: u8,
}

impl OcrArgs {
    fn to_options(&self) -> kalkyl_core::extraction::ocr::OcrOptions {
        kalkyl_core::extraction::ocr::OcrOptions {
            dpi: self.dpi,
            lang: self.lang.clone(),
            page_segmentation_mode: self.psm,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run both extraction passes and write an xlsx workbook
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output xlsx path (default: extracted_data.xlsx)
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        ocr: OcrArgs,
    },
    /// Print the extracted text to stdout
    Text {
        /// Path to the PDF file
        input_file: PathBuf,

        #[command(flatten)]
        ocr: OcrArgs,
    },
    /// Print the detected tables
    Tables {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the tables to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            out,
            ocr,
        } => commands::extract::run(input_file, out, ocr.to_options()),
        Commands::Text { input_file, ocr } => commands::text::run(input_file, ocr.to_options()),
        Commands::Tables {
            input_file,
            output,
            out,
        } => commands::tables::run(input_file, &output, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
