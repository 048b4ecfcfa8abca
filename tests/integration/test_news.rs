//! NEWS update behavior

use crate::helpers::TestWorkspace;
use anyhow::Result;
use relnotes::note::news::{news_entry, prepend_news};
use relnotes::note::news_section;

#[test]
fn dry_run_previews_without_writing() -> Result<()> {
  let workspace = TestWorkspace::new()?;
  let news_path = workspace.path.join("NEWS");
  let before = std::fs::read_to_string(&news_path)?;

  let entry = news_entry("0.8.1", "  * Fixes: GB#1, crash", "  * Updated de: Petra", "None");
  let updated = prepend_news(&news_path, &entry, false)?;

  assert!(updated.starts_with("\nNEW in 0.8.1:"));
  assert!(updated.ends_with(&before));
  assert_eq!(std::fs::read_to_string(&news_path)?, before);
  Ok(())
}

#[test]
fn apply_prepends_the_entry() -> Result<()> {
  let workspace = TestWorkspace::new()?;
  let news_path = workspace.path.join("NEWS");

  let entry = news_entry("0.8.1", "  * Fixes: GB#1, crash", "None", "None");
  prepend_news(&news_path, &entry, true)?;

  let content = std::fs::read_to_string(&news_path)?;
  assert!(content.starts_with("\nNEW in 0.8.1:"));
  assert!(content.contains("NEW in 0.8.0:"));
  Ok(())
}

#[test]
fn written_entry_round_trips_through_section_extraction() -> Result<()> {
  let workspace = TestWorkspace::new()?;
  let news_path = workspace.path.join("NEWS");

  let entry = news_entry("0.8.1", "  * Fixes: GB#1, crash", "  * Updated de: Petra", "None");
  prepend_news(&news_path, &entry, true)?;

  let content = std::fs::read_to_string(&news_path)?;
  let section = news_section(&content, "0.8.1").unwrap();
  assert!(section.contains("  * Fixes: GB#1, crash"));
  assert!(section.contains("  * Updated de: Petra"));
  assert!(!section.contains("Initial release"));
  Ok(())
}
