//! Extraction engines over raw VCS text
//!
//! Everything in this module works on captured command output: the scanner
//! walks it in overlapping two-line candidates, the patterns classify each
//! candidate, and the bug/translator passes fold the classified lines into
//! normalized records. No state survives a pass; each call starts with a
//! fresh committer cell and name cache.

pub mod bugs;
pub mod patterns;
pub mod po;
pub mod scanner;
pub mod translators;

pub use bugs::{BugList, extract_bugs};
pub use translators::{TranslatorUpdates, extract_translators};

/// Where a contributor attribution came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
  /// Parenthesized name on the bug/language line itself
  Patch,
  /// Fell back to the nearest preceding committer-identity line
  CommitIdentity,
}
