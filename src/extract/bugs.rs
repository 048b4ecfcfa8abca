//! Bug extraction engine
//!
//! Walks a changelog diff or commit log and produces the ordered, unique
//! list of bug tokens (`GB#588224`, `NB#130748`, ...) together with the
//! id-to-reporter cache the summary output consults later.
//!
//! The processing order per candidate line mirrors the ChangeLog convention:
//! a committer-identity line only updates the running committer and is never
//! also a bug line; a bug line takes its attribution from the parenthesized
//! name when present, otherwise from the last committer seen.

use crate::core::vcs::VcsKind;
use crate::extract::Provenance;
use crate::extract::patterns;
use crate::extract::scanner::LinePairs;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Ordered bug tokens plus the id-to-reporter cache from one pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct BugList {
  /// `TAG#id` tokens, unique by id, in discovery order
  pub tokens: Vec<String>,
  /// Reporter attribution per bug id; first occurrence wins within a pass
  pub names: HashMap<String, String>,
}

impl BugList {
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  /// Comma-joined token list, e.g. "GB#588224,NB#130748"
  pub fn joined(&self) -> String {
    self.tokens.join(",")
  }

  /// Bare ids of the tokens carrying the given `TAG#` prefix, in order;
  /// tokens for other trackers are dropped
  pub fn ids(&self, tag: &str) -> Vec<String> {
    let prefix = format!("{}#", tag);
    self
      .tokens
      .iter()
      .filter_map(|token| token.strip_prefix(&prefix))
      .map(str::to_string)
      .collect()
  }

  /// Merge another pass into this one; the other pass overwrites cached names
  pub fn merge(&mut self, other: BugList) {
    let mut seen: HashSet<String> = self.tokens.iter().cloned().collect();
    for token in other.tokens {
      if seen.insert(token.clone()) {
        self.tokens.push(token);
      }
    }
    self.names.extend(other.names);
  }
}

/// Extract bug records from raw VCS text
///
/// `tracker_filter` keeps only bugs whose normalized tag (without the
/// trailing `#`) equals the given code; `default_tracker` is the code
/// assumed for tag-less references.
pub fn extract_bugs(kind: VcsKind, text: &str, tracker_filter: Option<&str>, default_tracker: &str) -> BugList {
  let mut list = BugList::default();
  let mut last_committer = String::new();
  let mut seen_ids: HashSet<String> = HashSet::new();

  for line in LinePairs::new(text) {
    if kind.requires_plus_prefix() && !line.starts_with('+') {
      continue;
    }

    if let Some(name) = patterns::classify_committer(kind, line) {
      last_committer = name;
      continue;
    }

    let Some(bug) = patterns::classify_bug(kind, line) else {
      continue;
    };

    let tag = patterns::normalize_tag(bug.tag.as_deref(), default_tracker);
    if let Some(filter) = tracker_filter
      && filter != tag.trim_end_matches('#')
    {
      continue;
    }

    if bug.id.is_empty() {
      continue;
    }

    let (name, _provenance) = match bug.inline_name.as_deref() {
      Some(inline) => (patterns::sanitize_name(inline), Provenance::Patch),
      None => (last_committer.trim().to_string(), Provenance::CommitIdentity),
    };

    list.names.entry(bug.id.clone()).or_insert(name);

    if seen_ids.insert(bug.id.clone()) {
      list.tokens.push(format!("{}{}", tag, bug.id));
    }
  }

  list
}
