//! List translator credits since a reference

use crate::commands::Project;
use crate::core::error::RelResult;
use crate::extract::extract_translators;

/// Run the translators command
///
/// `--manual` switches from the UI catalogs to the help-manual ones.
pub fn run_translators(revision: &str, manual: bool, json: bool) -> RelResult<()> {
  let project = Project::open()?;
  let dir = if manual {
    &project.config.help_dir
  } else {
    &project.config.po_dir
  };

  let updates = extract_translators(&project.adapter, revision, dir)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&updates.joined())?);
    return Ok(());
  }

  println!(
    "{}",
    updates.render(&project.config.translator_template, &project.config.bullet, false)
  );

  Ok(())
}
