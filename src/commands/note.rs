//! Produce the release announcement

use crate::commands::Project;
use crate::core::error::{RelResult, ResultExt};
use crate::note::build_note;
use crate::tracker::HttpFetch;
use std::fs;
use std::path::PathBuf;

/// Run the note command
pub fn run_note(revision: &str, template: Option<PathBuf>, html: bool) -> RelResult<()> {
  let project = Project::open()?;

  let override_text = match template {
    Some(path) => {
      Some(fs::read_to_string(&path).with_context(|| format!("Failed to read template from {}", path.display()))?)
    }
    None => None,
  };

  let note = build_note(
    &project.adapter,
    &project.config,
    &project.package,
    &HttpFetch,
    revision,
    html,
    override_text.as_deref(),
  )?;

  println!("{}", note);
  Ok(())
}
