//! Bug extraction over real git history

use crate::helpers::TestWorkspace;
use anyhow::Result;
use relnotes::core::vcs::VcsKind;
use relnotes::core::vcs::system::VcsAdapter;
use relnotes::extract::extract_bugs;

#[test]
fn extracts_bugs_from_commit_log() -> Result<()> {
  let workspace = TestWorkspace::new()?;

  workspace.write_file("src/indexer.c", "fix\n")?;
  workspace.commit("Fixed GB#588224, crash on startup (John Smith)")?;
  workspace.write_file("src/extractor.c", "fix\n")?;
  workspace.commit("Fixes bug 130748, memory leak in extractor")?;

  let adapter = VcsAdapter::open(&workspace.path)?;
  assert_eq!(adapter.kind(), VcsKind::Git);

  let text = adapter.changelog_changes("base", None)?;
  let list = extract_bugs(VcsKind::Git, &text, None, "GB");

  // git log is newest-first, so the bare "bug N" reference comes first and
  // normalizes to the default tracker tag.
  assert_eq!(list.tokens, vec!["GB#130748", "GB#588224"]);
  assert_eq!(list.names.get("588224").map(String::as_str), Some("John Smith"));
  assert_eq!(list.names.get("130748").map(String::as_str), Some("Test User"));
  Ok(())
}

#[test]
fn duplicate_references_collapse_to_one_token() -> Result<()> {
  let workspace = TestWorkspace::new()?;

  workspace.write_file("a.c", "fix\n")?;
  workspace.commit("Fixed GB#1000, first attempt")?;
  workspace.write_file("b.c", "fix\n")?;
  workspace.commit("Fixed GB#1000, second attempt")?;

  let adapter = VcsAdapter::open(&workspace.path)?;
  let text = adapter.changelog_changes("base", None)?;
  let list = extract_bugs(VcsKind::Git, &text, None, "GB");

  assert_eq!(list.tokens, vec!["GB#1000"]);
  Ok(())
}

#[test]
fn tracker_filter_splits_by_tag() -> Result<()> {
  let workspace = TestWorkspace::new()?;

  workspace.write_file("a.c", "fix\n")?;
  workspace.commit("Fixed NB#42, maemo crash")?;
  workspace.write_file("b.c", "fix\n")?;
  workspace.commit("Fixed GB#43, desktop crash")?;

  let adapter = VcsAdapter::open(&workspace.path)?;
  let text = adapter.changelog_changes("base", None)?;

  let nb = extract_bugs(VcsKind::Git, &text, Some("NB"), "GB");
  assert_eq!(nb.tokens, vec!["NB#42"]);

  let gb = extract_bugs(VcsKind::Git, &text, Some("GB"), "GB");
  assert_eq!(gb.tokens, vec!["GB#43"]);
  Ok(())
}

#[test]
fn commits_without_references_yield_nothing() -> Result<()> {
  let workspace = TestWorkspace::new()?;

  workspace.write_file("a.c", "fix\n")?;
  workspace.commit("Refactor the indexer loop")?;

  let adapter = VcsAdapter::open(&workspace.path)?;
  let text = adapter.changelog_changes("base", None)?;
  let list = extract_bugs(VcsKind::Git, &text, None, "GB");

  assert!(list.is_empty());
  Ok(())
}
