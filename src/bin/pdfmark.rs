//! CLI binary for pdfmark.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, drives the conversion, and prints a summary.

use anyhow::{Context, Result};
use clap::Parser;
use pdfmark::{
    convert_to_file, derive_output_path, ConversionConfig, ConversionProgressCallback,
    ProgressCallback,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: a single progress bar whose length is set by
/// `on_conversion_start` once the document has been opened.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_conversion_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }
}

impl ConversionProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, total_pages: usize) {
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} pages  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        self.bar.set_length(total_pages as u64);
        self.bar.set_style(style);
        self.bar.set_prefix("Converting");
    }

    fn on_page_start(&self, page_num: usize, _total: usize) {
        self.bar.set_message(format!("page {page_num}"));
    }

    fn on_page_complete(&self, page_num: usize, total: usize, text_len: usize, used_ocr: bool) {
        if used_ocr {
            self.bar.println(format!(
                "  {} Page {:>3}/{:<3}  {}  {}",
                green("✓"),
                page_num,
                total,
                dim(&format!("{text_len:>5} chars")),
                yellow("ocr"),
            ));
        }
        self.bar.inc(1);
    }

    fn on_conversion_complete(&self, total_pages: usize, pages_with_text: usize) {
        self.bar.finish_and_clear();
        if pages_with_text == total_pages {
            eprintln!(
                "{} {} pages extracted",
                green("✔"),
                bold(&total_pages.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} pages with text",
                yellow("⚠"),
                bold(&pages_with_text.to_string()),
                total_pages,
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (writes document.md in the current directory)
  pdfmark document.pdf

  # Explicit output path
  pdfmark document.pdf notes/document.md

  # Force OCR on every page
  pdfmark --ocr scanned.pdf

  # Encrypted document
  pdfmark --password hunter2 statement.pdf

REQUIREMENTS:
  pdfium     Shared library in the current directory or installed system-wide.
             Prebuilt binaries: https://github.com/bblanchon/pdfium-binaries
  tesseract  Optional, on PATH. Needed only for scanned (image-based) pages;
             without it those pages get a placeholder section.

ENVIRONMENT VARIABLES:
  RUST_LOG   Tracing filter override (e.g. RUST_LOG=pdfmark=debug)
"#;

/// Convert PDF files to Markdown with OCR fallback for scanned pages.
#[derive(Parser, Debug)]
#[command(
    name = "pdfmark",
    version,
    about = "Convert PDF files to Markdown with OCR fallback for scanned pages",
    long_about = "Convert a PDF document to Markdown. Text is pulled from the PDF text layer \
through a cascade of extraction methods; pages with no text layer are rasterised and read \
with tesseract OCR when available.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the input PDF file.
    input: PathBuf,

    /// Output Markdown file. Default: the input file stem with a .md
    /// extension, in the current directory.
    output: Option<PathBuf>,

    /// Run OCR on every page, not just pages without a text layer.
    #[arg(long)]
    ocr: bool,

    /// OCR languages passed to tesseract (-l).
    #[arg(long, default_value = "kor+eng")]
    ocr_languages: String,

    /// PDF user password for encrypted documents.
    #[arg(long)]
    password: Option<String>,

    /// Disable the progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    // clap exits with 2 on usage errors; the documented contract is exit
    // code 1 for every failure, so parse errors are remapped here.
    // --help and --version keep exit code 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // ── Logging setup ────────────────────────────────────────────────────
    // With the progress bar active, INFO-level library logs would fight the
    // bar for the terminal; the bar carries that feedback instead.
    let show_progress = !cli.quiet && !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        let cb = CliProgressCallback::new_dynamic();
        Some(cb as Arc<dyn ConversionProgressCallback>)
    } else {
        None
    };

    let mut builder = ConversionConfig::builder()
        .force_ocr(cli.ocr)
        .ocr_languages(&cli.ocr_languages);
    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd);
    }
    if let Some(cb) = progress_cb {
        builder = builder.progress_callback(cb);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&cli.input));

    let output = convert_to_file(&cli.input, &output_path, &config)?;

    // ── Summary ──────────────────────────────────────────────────────────
    if !cli.quiet {
        let stats = &output.stats;
        eprintln!(
            "{}  {}/{} pages with text  {}ms  →  {}",
            if stats.pages_with_text == stats.total_pages {
                green("✔")
            } else {
                yellow("⚠")
            },
            stats.pages_with_text,
            stats.total_pages,
            stats.total_duration_ms,
            bold(&output_path.display().to_string()),
        );
        if stats.ocr_pages > 0 {
            eprintln!("   {} page(s) read via OCR", dim(&stats.ocr_pages.to_string()));
        }
        if stats.pages_with_text == 0 && !stats.ocr_available {
            eprintln!(
                "   {}",
                dim("no text found and tesseract is not installed; \
                     install it (e.g. `apt install tesseract-ocr`) to OCR scanned pages")
            );
        }
    }

    Ok(())
}
