//! Translator extraction over real git history

use crate::helpers::{DE_PO, TestWorkspace};
use anyhow::Result;
use relnotes::core::vcs::system::VcsAdapter;
use relnotes::extract::extract_translators;
use relnotes::extract::translators::NO_TRANSLATIONS;

const TEMPLATE: &str = "Updated {lang}: {translator}";

#[test]
fn credits_header_and_committer_for_changed_catalog() -> Result<()> {
  let workspace = TestWorkspace::new()?;

  workspace.write_file("po/de.po", &format!("{}msgid \"hello\"\nmsgstr \"hallo\"\n", DE_PO))?;
  workspace.commit("Update German translation")?;

  let adapter = VcsAdapter::open(&workspace.path)?;
  let updates = extract_translators(&adapter, "base", "po")?;

  // Whoever committed the change first, then the header name.
  assert_eq!(
    updates.joined().get("de").map(String::as_str),
    Some("Test User, Petra Schmidt")
  );
  Ok(())
}

#[test]
fn untouched_catalogs_are_absent() -> Result<()> {
  let workspace = TestWorkspace::new()?;

  workspace.write_file("src/main.c", "int main() { return 0; }\n")?;
  workspace.commit("Unrelated change")?;

  let adapter = VcsAdapter::open(&workspace.path)?;
  let updates = extract_translators(&adapter, "base", "po")?;

  assert!(updates.is_empty());
  assert_eq!(updates.render(TEMPLATE, "*", false), "None");
  Ok(())
}

#[test]
fn missing_directory_renders_sentinel() -> Result<()> {
  let workspace = TestWorkspace::new()?;

  let adapter = VcsAdapter::open(&workspace.path)?;
  let updates = extract_translators(&adapter, "base", "help")?;

  assert_eq!(updates.render(TEMPLATE, "*", false), NO_TRANSLATIONS);
  Ok(())
}

#[test]
fn catalog_without_header_credits_committer_only() -> Result<()> {
  let workspace = TestWorkspace::new()?;

  workspace.write_file("po/sv.po", "msgid \"\"\nmsgstr \"\"\n")?;
  workspace.commit("Add Swedish translation")?;

  let adapter = VcsAdapter::open(&workspace.path)?;
  let updates = extract_translators(&adapter, "base", "po")?;

  assert_eq!(updates.joined().get("sv").map(String::as_str), Some("Test User"));
  assert_eq!(
    updates.render(TEMPLATE, "*", false),
    "  * Updated sv: Test User"
  );
  Ok(())
}
