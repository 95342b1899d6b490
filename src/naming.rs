//! Output file and display name derivation.
//!
//! Every generated page gets two names derived from its source file name:
//!
//! - **Output file**: the on-disk name and index link target. Lower-cased,
//!   spaces become underscores, extension replaced with `.html`.
//! - **Display name**: the human-readable label shown in the index. Case and
//!   spaces preserved, extension stripped.
//!
//! Both use the portion of the file name before the *first* dot, so
//! `Notes.v2.txt` derives from `Notes`:
//! - `My Document.txt` → `my_document.html` / "My Document"
//! - `readme.md` → `readme.html` / "readme"

/// The two derived names for one generated page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageName {
    /// Normalized file name used for the page's on-disk path and index href.
    pub output_file: String,
    /// Human-readable label shown in the index.
    pub display_name: String,
}

/// Derive output file and display name from a source file name.
///
/// Takes the bare file name, not a path.
pub fn page_name(file_name: &str) -> PageName {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    PageName {
        output_file: format!("{}.html", stem.to_lowercase().replace(' ', "_")),
        display_name: stem.to_string(),
    }
}
