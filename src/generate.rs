//! HTML page generation.
//!
//! Takes the resolved run configuration and produces the final static site:
//! one HTML page per source document plus an `index.html` linking them all.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # "Generated Pages" link list
//! ├── my_document.html    # One page per source, name per naming rules
//! └── readme.html
//! ```
//!
//! The output directory is deleted and recreated at the start of every run —
//! a full reset, never an incremental update. Re-running replaces prior
//! contents entirely; stale files do not survive. Concurrent runs against
//! the same output directory are not safe and must be serialized by the
//! caller.
//!
//! ## HTML Generation
//!
//! Document shells (doctype, head, stylesheet link) are built with
//! [maud](https://maud.lambda.xyz/). The body fragments coming out of
//! [`transform`](crate::transform) are already HTML and are spliced in with
//! `PreEscaped`; everything else goes through maud's default escaping.
//!
//! ## Collisions
//!
//! Output names are derived from source file names, and two sources can
//! derive the same name (`Doc.txt` and `doc.md` both become `doc.html`).
//! The later page overwrites the earlier one; the run surfaces a warning in
//! its report instead of failing.

use crate::config::RunConfig;
use crate::naming;
use crate::scan::{self, ScanError};
use crate::transform::{self, CENTERED_STYLE, SourceKind, TransformResult};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input error: {0}")]
    Scan(#[from] ScanError),
}

/// What one run produced, for display by the `output` module.
#[derive(Debug)]
pub struct RunReport {
    /// One entry per generated page, in processing order.
    pub pages: Vec<PageEntry>,
    /// Non-fatal conditions surfaced to the user (output name collisions).
    pub warnings: Vec<String>,
}

/// One generated page as recorded in the run report.
#[derive(Debug)]
pub struct PageEntry {
    pub display_name: String,
    pub output_file: String,
    /// Number of source blocks the page was built from.
    pub block_count: usize,
}

/// Run the full pipeline: resolve inputs, reset the output directory,
/// transform and write every page, then write the index.
pub fn generate(config: &RunConfig) -> Result<RunReport, GenerateError> {
    let inputs = scan::resolve_inputs(&config.input)?;
    let stylesheet = config.stylesheet.as_deref().unwrap_or("");

    reset_output_dir(&config.output)?;

    let mut pages: Vec<PageEntry> = Vec::new();
    let mut warnings = Vec::new();

    for path in &inputs {
        // Directory listings are pre-filtered by extension, so this only
        // skips pathological names like a bare ".txt".
        let Some(kind) = SourceKind::from_path(path) else {
            continue;
        };

        let raw = fs::read_to_string(path)?;
        let result = transform::transform(&raw, kind);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let name = naming::page_name(&file_name);

        if pages.iter().any(|p| p.output_file == name.output_file) {
            warnings.push(format!(
                "output collision: {} overwrites an earlier page with the same name",
                name.output_file
            ));
        }

        let html = render_page(&result, stylesheet);
        fs::write(config.output.join(&name.output_file), html)?;

        pages.push(PageEntry {
            display_name: name.display_name,
            output_file: name.output_file,
            block_count: result.fragment_count,
        });
    }

    let index = render_index(stylesheet, &pages);
    fs::write(config.output.join("index.html"), index)?;

    Ok(RunReport { pages, warnings })
}

/// Delete and recreate the output directory.
///
/// Explicit full-reset policy: a run owns the whole directory and starts
/// from nothing.
pub fn reset_output_dir(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)
}

// ============================================================================
// HTML Renderers
// ============================================================================

/// The fixed document shell shared by pages and the index.
fn base_document(title: &str, stylesheet: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                link rel="stylesheet" href=(stylesheet);
                meta name="viewport" content="width=device-width, initial-scale=1";
            }
            body {
                (body)
            }
        }
    }
}

/// Render one complete page document from a transform result.
///
/// Fragments are concatenated in order with no separator; they are already
/// HTML and bypass escaping.
pub fn render_page(result: &TransformResult, stylesheet: &str) -> String {
    let body = html! {
        @for fragment in &result.fragments {
            (PreEscaped(fragment))
        }
    };
    base_document(&result.title, stylesheet, body).into_string()
}

/// Render the index document linking every generated page, in processing
/// order, one anchor per page separated by line breaks.
pub fn render_index(stylesheet: &str, pages: &[PageEntry]) -> String {
    let body = html! {
        h1 style=(CENTERED_STYLE) { "Generated Pages" }
        @for (i, page) in pages.iter().enumerate() {
            @if i > 0 { br; }
            a href=(page.output_file) { (page.display_name) }
        }
    };
    base_document("Static Site Generator", stylesheet, body).into_string()
}

// ============================================================================
// Tests
// ============================================================================
