//! Bugzilla XML envelope parsing
//!
//! `show_bug.cgi?ctype=xml` returns a `<bugzilla>` document with one
//! `<bug>` element per requested id. We read the handful of fields the
//! summaries need; anything the instance omits degrades to "NONE" the way
//! the announcement format expects.

use crate::core::error::{RelError, RelResult};
use serde::{Deserialize, Serialize};

/// One bug as the summaries render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugSummary {
  pub id: String,
  pub title: String,
  pub status: String,
  pub resolution: String,
  pub reporter: String,
  pub assignee: String,
}

#[derive(Debug, Deserialize)]
struct BugzillaDoc {
  #[serde(rename = "bug", default)]
  bugs: Vec<BugXml>,
}

#[derive(Debug, Deserialize)]
struct BugXml {
  bug_id: String,
  #[serde(default)]
  short_desc: Option<String>,
  #[serde(default)]
  bug_status: Option<String>,
  #[serde(default)]
  resolution: Option<String>,
  #[serde(default)]
  reporter: Option<Person>,
  #[serde(default)]
  assigned_to: Option<Person>,
}

#[derive(Debug, Deserialize)]
struct Person {
  #[serde(rename = "@name", default)]
  name: Option<String>,
  #[serde(rename = "$text", default)]
  _address: Option<String>,
}

/// Parse a Bugzilla XML response into bug summaries
///
/// A response whose root is not `<bugzilla>` is a tracker error (login
/// pages, outage notices); the caller turns that into a notice string.
pub fn parse_bugs(tracker: &str, xml: &str) -> RelResult<Vec<BugSummary>> {
  if !has_bugzilla_root(xml) {
    return Err(RelError::Tracker {
      tracker: tracker.to_string(),
      reason: "response root element was not <bugzilla>".to_string(),
    });
  }

  let doc: BugzillaDoc = quick_xml::de::from_str(xml).map_err(|e| RelError::Tracker {
    tracker: tracker.to_string(),
    reason: format!("could not parse XML response: {}", e),
  })?;

  Ok(
    doc
      .bugs
      .into_iter()
      .map(|bug| BugSummary {
        id: bug.bug_id,
        title: bug.short_desc.unwrap_or_default(),
        status: bug.bug_status.unwrap_or_default(),
        resolution: bug.resolution.unwrap_or_else(|| "NONE".to_string()),
        reporter: bug.reporter.and_then(|p| p.name).unwrap_or_else(|| "NONE".to_string()),
        assignee: bug.assigned_to.and_then(|p| p.name).unwrap_or_else(|| "NONE".to_string()),
      })
      .collect(),
  )
}

fn has_bugzilla_root(xml: &str) -> bool {
  xml
    .trim_start()
    .split('<')
    .filter(|chunk| !chunk.is_empty())
    .find(|chunk| !chunk.starts_with('?') && !chunk.starts_with('!'))
    .map(|chunk| chunk.starts_with("bugzilla"))
    .unwrap_or(false)
}
