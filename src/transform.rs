//! Text-to-HTML transformation.
//!
//! The core of plainpress: a pure function from one source document's raw
//! text to an ordered sequence of HTML fragments plus a title. Two dialects:
//!
//! - **Plain text** (`.txt`): blank-line-separated blocks. The first block is
//!   the title and becomes a centered `<h1>`; every other block is wrapped in
//!   `<p>` verbatim.
//! - **Restricted markdown** (`.md`): blank-line-separated blocks, each run
//!   through an ordered pipeline of regex substitutions. Supported syntax:
//!   `#`/`##`/`###` headers, `**bold**`, `*italic*`, `` `code` ``,
//!   `[text](url)` links, `---` horizontal rules, and newline → `<br>`.
//!
//! ## Pipeline Order Matters
//!
//! The markdown substitutions run in a fixed order (newlines, rules,
//! emphasis, code, paragraph wrap, headers, links) because later rules
//! operate on the output of earlier ones. A block containing `#` anywhere is
//! never paragraph-wrapped, which is what lets the header rules fire on the
//! raw marker afterwards. Reordering the passes changes the output.
//!
//! ## Known Edge Cases
//!
//! This is a substitution pipeline, not a parser, and it inherits the usual
//! fragility around overlapping constructs:
//!
//! - Emphasis markers recognize at most one non-asterisk boundary character.
//!   Triple markers (`***both***`) happen to resolve through the two passes,
//!   but longer asterisk runs leave stray markers or nest unexpectedly.
//! - Code spans are greedy: `` `a` and `b` `` becomes one `<code>` element
//!   spanning both backtick pairs.
//! - Unbalanced markers never fail — unmatched syntax passes through as
//!   literal text. The transform has no error path.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Inline style applied to every generated heading.
pub const CENTERED_STYLE: &str = "text-align: center; margin-bottom: 15px";

/// Which dialect a source document is written in, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    PlainText,
    Markdown,
}

impl SourceKind {
    /// Classify a source path by extension (`.txt` / `.md`, case-sensitive).
    /// Returns `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "txt" => Some(Self::PlainText),
            "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Result of transforming one source document.
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Document title: first block for plain text, first level-1 header for
    /// markdown (empty string when markdown has no level-1 header).
    pub title: String,
    /// HTML fragments in source order, concatenated by the page assembler.
    pub fragments: Vec<String>,
    /// Number of blank-line-separated blocks in the source. Not guaranteed
    /// to equal `fragments.len()` — check lengths independently.
    pub fragment_count: usize,
}

/// Transform one document's raw text into a title and HTML fragments.
///
/// Pure and infallible: worst-case input produces degraded HTML, never an
/// error.
pub fn transform(raw: &str, kind: SourceKind) -> TransformResult {
    match kind {
        SourceKind::PlainText => plain_text(raw),
        SourceKind::Markdown => markdown(raw),
    }
}

/// Plain-text dialect: first block is the title, the rest are paragraphs.
fn plain_text(raw: &str) -> TransformResult {
    let blocks: Vec<&str> = raw.split("\n\n").collect();
    let title = blocks[0].to_string();

    let mut fragments = Vec::with_capacity(blocks.len());
    fragments.push(h1_fragment(&title));
    for block in &blocks[1..] {
        fragments.push(format!("<p>{block}</p>"));
    }

    TransformResult {
        title,
        fragment_count: blocks.len(),
        fragments,
    }
}

// Emphasis patterns capture the optional boundary character so the
// replacement can restore it. At most one non-asterisk neighbor is
// recognized.
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^*])?\*\*([^*]+)\*\*([^*])?").unwrap());
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^*])?\*([^*]+)\*([^*])?").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*)`").unwrap());
static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"### ([^#]*)(.*)$").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"## ([^#]*)(.*)$").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+)\]\((.+)\)").unwrap());
// Level-1 header check, applied to the block *after* the pipeline. Anchored:
// a single `#` followed by a space, optionally preceded by non-# text.
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^#]*# (.*)$").unwrap());

const BOLD_REP: &str = "${1}<b>${2}</b>${3}";
const ITALIC_REP: &str = "${1}<i>${2}</i>${3}";
const H3_REP: &str = r#"<h3 style="text-align: center; margin-bottom: 15px">${1}</h3>${2}"#;
const H2_REP: &str = r#"<h2 style="text-align: center; margin-bottom: 15px">${1}</h2>${2}"#;

/// Markdown dialect: per-block substitution pipeline plus title detection.
fn markdown(raw: &str) -> TransformResult {
    let blocks: Vec<&str> = raw.split("\n\n").collect();
    let mut fragments = Vec::with_capacity(blocks.len());
    let mut title: Option<String> = None;

    for block in &blocks {
        let processed = process_block(block);

        // A level-1 header block becomes the centered <h1> fragment instead
        // of its generic rendering. The first such block sets the title.
        if let Some(caps) = H1_RE.captures(&processed) {
            let heading = caps[1].to_string();
            fragments.push(h1_fragment(&heading));
            if title.is_none() {
                title = Some(heading);
            }
        } else {
            fragments.push(processed);
        }
    }

    TransformResult {
        title: title.unwrap_or_default(),
        fragment_count: blocks.len(),
        fragments,
    }
}

/// Run one block through the substitution pipeline.
fn process_block(block: &str) -> String {
    let content = block.replace('\n', "<br>");

    // A block that is exactly the rule marker renders as <hr> and nothing
    // else — skipping the rest of the pipeline keeps it out of the
    // paragraph wrap.
    if content == "---" {
        return "<hr>".to_string();
    }

    // Both orders, so bold-inside-italic and italic-inside-bold resolve
    // regardless of which marker wraps which.
    let content = BOLD_RE.replace_all(&content, BOLD_REP);
    let content = ITALIC_RE.replace_all(&content, ITALIC_REP);
    let content = ITALIC_RE.replace_all(&content, ITALIC_REP);
    let content = BOLD_RE.replace_all(&content, BOLD_REP);

    let content = CODE_RE.replace_all(&content, "<code>${1}</code>");

    // Paragraph wrap is the catch-all for blocks with no header marker
    // anywhere. It runs before header substitution so marker blocks reach
    // the header rules unwrapped.
    let content = if content.contains('#') {
        content.into_owned()
    } else {
        format!("<p>{content}</p>")
    };

    let content = H3_RE.replace(&content, H3_REP);
    let content = H2_RE.replace(&content, H2_REP);
    let content = LINK_RE.replace_all(&content, r#"<a href="${2}">${1}</a>"#);

    content.into_owned()
}

/// The centered `<h1>` used for titles in both dialects (and the index).
fn h1_fragment(title: &str) -> String {
    format!(r#"<h1 style="{CENTERED_STYLE}">{title}</h1>"#)
}
