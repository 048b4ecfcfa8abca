//! NEWS file updates
//!
//! Prepends a `NEW in VERSION:` section built from the bug summary and the
//! translator credits. The write only happens on request; the default path
//! returns the updated content for the caller to preview.

use crate::core::error::{RelError, RelResult, ResultExt};
use std::fs;
use std::path::Path;

/// Format the section prepended to NEWS for one release
pub fn news_entry(version: &str, summary: &str, po_translators: &str, help_translators: &str) -> String {
  format!(
    "\nNEW in {}:\n==============\n{}\n\nTranslations:\n{}\n\nHelp Manual Translations:\n{}\n",
    version, summary, po_translators, help_translators
  )
}

/// Prepend an entry to the NEWS file
///
/// Returns the full updated content. Nothing is written unless `apply` is
/// set; a missing NEWS file is an error either way, an empty release entry
/// should never silently create one.
pub fn prepend_news(news_path: &Path, entry: &str, apply: bool) -> RelResult<String> {
  if !news_path.exists() {
    return Err(RelError::with_help(
      format!("No NEWS file found at {}", news_path.display()),
      "Create an empty NEWS file first if this is the project's first release.",
    ));
  }

  let existing = fs::read_to_string(news_path)
    .with_context(|| format!("Failed to read NEWS from {}", news_path.display()))?;
  let updated = format!("{}{}", entry, existing);

  if apply {
    fs::write(news_path, &updated)
      .with_context(|| format!("Failed to write NEWS to {}", news_path.display()))?;
  }

  Ok(updated)
}
