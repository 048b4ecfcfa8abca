//! Update the NEWS file with the release section

use crate::commands::Project;
use crate::core::error::{RelError, RelResult};
use crate::extract::extract_translators;
use crate::note::fixed_section;
use crate::note::news::{news_entry, prepend_news};
use crate::tracker::HttpFetch;

/// Run the news command
///
/// Dry-run by default; `--apply` writes the updated NEWS file.
pub fn run_news(revision: &str, apply: bool) -> RelResult<()> {
  let project = Project::open()?;

  let summary = fixed_section(&project.adapter, &project.config, &HttpFetch, revision)?;
  if summary == "  None" {
    return Err(RelError::message("No bugs were found to update the NEWS file with"));
  }

  let po_translators = extract_translators(&project.adapter, revision, &project.config.po_dir)?.render(
    &project.config.translator_template,
    &project.config.bullet,
    false,
  );
  let help_translators = extract_translators(&project.adapter, revision, &project.config.help_dir)?.render(
    &project.config.translator_template,
    &project.config.bullet,
    false,
  );

  let entry = news_entry(&project.package.version, &summary, &po_translators, &help_translators);
  prepend_news(&project.adapter.root().join("NEWS"), &entry, apply)?;

  if apply {
    println!("📰 NEWS updated for {} {}", project.package.name, project.package.version);
  } else {
    println!("🔍 Dry-run mode, NEWS not modified. New entry:");
    println!("{}", entry);
    println!("👉 Run again with --apply to write the file");
  }

  Ok(())
}
