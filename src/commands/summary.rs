//! Full bug summaries across every configured tracker

use crate::commands::Project;
use crate::core::error::RelResult;
use crate::extract::extract_bugs;
use crate::tracker::{self, HttpFetch};
use std::collections::BTreeMap;

/// Run the summary command
///
/// One section per tracker that has bugs in the range. A tracker that does
/// not answer properly degrades to a notice line; the others still print.
pub fn run_summary(revision: &str, json: bool) -> RelResult<()> {
  let project = Project::open()?;
  let text = project.adapter.changelog_changes(revision, None)?;

  if json {
    let mut all = BTreeMap::new();
    for (code, tracker_config) in &project.config.trackers {
      let list = extract_bugs(project.adapter.kind(), &text, Some(code), &project.config.default_tracker);
      if list.is_empty() {
        continue;
      }
      let bugs = tracker::fetch_summaries(&HttpFetch, tracker_config, &list.ids(code))?;
      all.insert(code.clone(), bugs);
    }
    println!("{}", serde_json::to_string_pretty(&all)?);
    return Ok(());
  }

  let mut printed = false;
  for (code, tracker_config) in &project.config.trackers {
    let list = extract_bugs(project.adapter.kind(), &text, Some(code), &project.config.default_tracker);
    if list.is_empty() {
      continue;
    }

    printed = true;
    println!("📋 {} bugs fixed since {}:\n", tracker_config.description, revision);

    match tracker::fetch_summaries(&HttpFetch, tracker_config, &list.ids(code)) {
      Ok(bugs) => println!("{}", tracker::render_full(tracker_config, &bugs)),
      Err(err) => println!("  Response from {} was not good: {}\n", tracker_config.description, err),
    }
  }

  if !printed {
    println!("No bugs found since {}", revision);
  }

  Ok(())
}
