//! Release note assembly end to end, with a canned tracker

use crate::helpers::{DE_PO, TestWorkspace};
use anyhow::Result;
use relnotes::core::config::ReleaseConfig;
use relnotes::core::error::RelResult;
use relnotes::core::package::PackageInfo;
use relnotes::core::vcs::system::VcsAdapter;
use relnotes::note::build_note;
use relnotes::tracker::Fetch;

struct CannedFetch(&'static str);

impl Fetch for CannedFetch {
  fn fetch(&self, _url: &str) -> RelResult<String> {
    Ok(self.0.to_string())
  }
}

const BUGZILLA_RESPONSE: &str = "<bugzilla version=\"3.4\">\
<bug><bug_id>588224</bug_id><short_desc>Crash when indexing</short_desc>\
<bug_status>RESOLVED</bug_status><resolution>FIXED</resolution></bug>\
</bugzilla>";

fn release_workspace() -> Result<TestWorkspace> {
  let workspace = TestWorkspace::new()?;

  workspace.write_file("src/indexer.c", "fix\n")?;
  workspace.commit("Fixed GB#588224, crash on startup (John Smith)")?;
  workspace.write_file("po/de.po", &format!("{}msgid \"hello\"\nmsgstr \"hallo\"\n", DE_PO))?;
  workspace.commit("Update German translation")?;

  Ok(workspace)
}

#[test]
fn plain_text_note_carries_every_section() -> Result<()> {
  let workspace = release_workspace()?;

  let config = ReleaseConfig::load(&workspace.path)?;
  let package = PackageInfo::detect(&workspace.path)?;
  let adapter = VcsAdapter::open(&workspace.path)?;

  let note = build_note(
    &adapter,
    &config,
    &package,
    &CannedFetch(BUGZILLA_RESPONSE),
    "base",
    false,
    None,
  )?;

  assert!(note.contains("Download Tracker 0.8.1 from:"));
  assert!(note.contains("https://download.gnome.org/sources/tracker/0.8.1/"));
  assert!(note.contains("  * Fixes: GB#588224, Crash when indexing"));
  assert!(note.contains("  * Updated de: Test User, Petra Schmidt"));
  assert!(note.contains("No translations exist in this project"));
  assert!(note.contains("Tracker team"));
  assert!(note.contains("Tracker indexes and searches your data."));
  Ok(())
}

#[test]
fn html_note_uses_markup_lists() -> Result<()> {
  let workspace = release_workspace()?;

  let config = ReleaseConfig::load(&workspace.path)?;
  let package = PackageInfo::detect(&workspace.path)?;
  let adapter = VcsAdapter::open(&workspace.path)?;

  let note = build_note(
    &adapter,
    &config,
    &package,
    &CannedFetch(BUGZILLA_RESPONSE),
    "base",
    true,
    None,
  )?;

  assert!(note.contains("<li><a href=\"https://download.gnome.org/sources/tracker/0.8.1/\">"));
  assert!(note.contains("<li>Updated de: Test User, Petra Schmidt</li>"));
  assert!(note.contains("<p>"));
  Ok(())
}

#[test]
fn custom_template_must_carry_placeholders() -> Result<()> {
  let workspace = release_workspace()?;

  let config = ReleaseConfig::load(&workspace.path)?;
  let package = PackageInfo::detect(&workspace.path)?;
  let adapter = VcsAdapter::open(&workspace.path)?;

  let err = build_note(
    &adapter,
    &config,
    &package,
    &CannedFetch(BUGZILLA_RESPONSE),
    "base",
    false,
    Some("Just the bugs: $fixed\n"),
  )
  .unwrap_err();

  assert!(err.to_string().contains("$download"));
  Ok(())
}

#[test]
fn tarball_checksum_appears_when_present() -> Result<()> {
  let workspace = release_workspace()?;
  workspace.write_file("tracker-0.8.1.tar.gz", "not a real tarball")?;

  let config = ReleaseConfig::load(&workspace.path)?;
  let package = PackageInfo::detect(&workspace.path)?;
  let adapter = VcsAdapter::open(&workspace.path)?;

  let note = build_note(
    &adapter,
    &config,
    &package,
    &CannedFetch(BUGZILLA_RESPONSE),
    "base",
    false,
    None,
  )?;

  assert!(note.contains("  tracker-0.8.1.tar.gz"));
  Ok(())
}
