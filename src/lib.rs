//! # plainpress
//!
//! A minimal static site generator for plain text and markdown notes.
//! Point it at a file or a directory of `.txt`/`.md` files and it produces
//! one HTML page per source plus an `index.html` linking them all.
//!
//! # Architecture
//!
//! A run is a straight, synchronous pipeline. Each source document is
//! independent — transformed, assembled, and written before the next one is
//! touched — and the index is written last from the accumulated page list:
//!
//! ```text
//! resolve config → resolve inputs → reset dist/
//!     → per source: transform → assemble → write
//!     → write index.html
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`transform`] | Core — raw text to title + HTML fragments (plain text split, markdown regex pipeline) |
//! | [`naming`] | Output file and display name derivation from source file names |
//! | [`generate`] | Page and index assembly (maud), output directory reset, run orchestration |
//! | [`scan`] | Input resolution: single file vs. directory listing of `.txt`/`.md` |
//! | [`config`] | Option resolution: CLI flags merged with a JSON config file |
//! | [`output`] | CLI output formatting — pure `format_*` functions with `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Substitution Pipeline Over a Parser
//!
//! The markdown dialect is deliberately restricted (no lists, blockquotes,
//! tables, or nested emphasis), and at that size an ordered sequence of
//! regex substitutions per block is simpler than a tokenizer and easier to
//! audit rule by rule. The cost is the usual substitution fragility around
//! overlapping constructs; [`transform`] documents the known edge cases.
//! The transform never fails — malformed markup degrades to literal text.
//!
//! ## Maud for the Document Shell
//!
//! Only the fixed document shell (doctype, head, stylesheet link, body) goes
//! through [maud](https://maud.lambda.xyz/): the template is checked at
//! compile time and interpolated values like display names are escaped by
//! default. Body fragments are produced as HTML strings by the transform and
//! spliced in pre-escaped.
//!
//! ## Full Output Reset
//!
//! The output directory is deleted and recreated on every run. No
//! incremental state means re-runs can never leave stale pages behind, at
//! the cost of regenerating everything — acceptable because the transform is
//! a cheap string computation.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_helpers;
