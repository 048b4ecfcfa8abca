//! Per-dialect line classification patterns
//!
//! Each VCS dialect has its own shape for the two line classes the
//! extraction passes care about: committer-identity lines and subject lines
//! (a bug reference or a touched language file). Matches come back as typed
//! values; an unmatched line is simply `None`, never a sentinel string.
//!
//! Candidate lines may span two physical lines (see the scanner), so the
//! subject patterns run in dot-matches-newline mode: a contributor name
//! wrapped onto the continuation line is still captured, and the name
//! sanitizer strips the leftover terminators and diff markers.

use crate::core::vcs::VcsKind;
use regex::Regex;
use std::sync::LazyLock;

/// ChangeLog entry header: "+2009-04-01  Jane Doe  <jane@x.org>"
static COMMITTER_CHANGELOG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\+(\d{4}-\d{2}-\d{2})\s+(?P<name>[^<\n]+)").expect("valid pattern"));

/// Git log header: "Author: Jane Doe <jane@x.org>"
static COMMITTER_GIT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^Author:\s+(?P<name>[^<\n]+)").expect("valid pattern"));

/// Bug reference without a tracker tag: "... fixes #12345 (John Smith)"
static BUG_CHANGELOG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?s)^.*#(?P<bug>[0-9]+)(?:.*\((?P<name>.*)\))?").expect("valid pattern"));

/// Bug reference with a tracker keyword: "Fixes NB#50123 (John Smith)"
static BUG_GIT: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?si)^.*(?P<repo>bug |[A-Za-z]{2}#)(?P<bug>[0-9]+)(?:.*\((?P<name>.*)\))?").expect("valid pattern")
});

/// Touched language file: "* po/de.po: Updated by Hans Mueller."
static LANG_CHANGELOG: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?s)^.*\*\s(?:.*/)?(?P<lang>[^\s/.]+)\.po:(?:.*?\bby\s+(?P<name>[^.]*))?").expect("valid pattern")
});

/// First heading of `git shortlog` output: "Jane Doe (3):"
static SHORTLOG_AUTHOR: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?P<name>[^\n(]*?)\s*\(([0-9]+)\):").expect("valid pattern"));

/// A bug-reference line, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugLine {
  /// Raw tracker keyword as written ("bug ", "NB#", ...), if the dialect
  /// carries one
  pub tag: Option<String>,
  pub id: String,
  /// Parenthesized attribution, unsanitized
  pub inline_name: Option<String>,
}

/// A touched-language line, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangLine {
  pub lang: String,
  /// "... by NAME." attribution, unsanitized
  pub inline_name: Option<String>,
}

/// Match a committer-identity line, returning the trimmed name
pub fn classify_committer(kind: VcsKind, line: &str) -> Option<String> {
  let pattern = match kind {
    VcsKind::Cvs | VcsKind::Svn => &COMMITTER_CHANGELOG,
    VcsKind::Git => &COMMITTER_GIT,
  };

  pattern
    .captures(line)
    .and_then(|caps| caps.name("name"))
    .map(|name| name.as_str().trim().to_string())
}

/// Match a bug-reference line
pub fn classify_bug(kind: VcsKind, line: &str) -> Option<BugLine> {
  let pattern = match kind {
    VcsKind::Cvs | VcsKind::Svn => &BUG_CHANGELOG,
    VcsKind::Git => &BUG_GIT,
  };

  let caps = pattern.captures(line)?;
  Some(BugLine {
    tag: caps.name("repo").map(|m| m.as_str().to_string()),
    id: caps.name("bug").map(|m| m.as_str().to_string()).unwrap_or_default(),
    inline_name: caps.name("name").map(|m| m.as_str().to_string()),
  })
}

/// Match a touched-language line (ChangeLog dialects only)
pub fn classify_lang(line: &str) -> Option<LangLine> {
  let caps = LANG_CHANGELOG.captures(line)?;
  Some(LangLine {
    lang: caps.name("lang").map(|m| m.as_str().to_string()).unwrap_or_default(),
    inline_name: caps.name("name").map(|m| m.as_str().to_string()),
  })
}

/// First contributor named in `git shortlog` output
pub fn shortlog_author(text: &str) -> Option<String> {
  SHORTLOG_AUTHOR
    .captures(text)
    .and_then(|caps| caps.name("name"))
    .map(|name| name.as_str().trim().to_string())
    .filter(|name| !name.is_empty())
}

/// Language code of a changed .po file listing line, e.g. "po/de.po" -> "de"
pub fn po_file_lang<'a>(dir: &str, line: &'a str) -> Option<&'a str> {
  line
    .strip_prefix(dir)?
    .strip_prefix('/')?
    .strip_suffix(".po")
    .filter(|lang| !lang.is_empty() && !lang.contains('/'))
}

/// Normalize a raw tracker keyword to its canonical `TAG#` form
///
/// The bare `bug ` keyword (and a dialect with no tag group at all) means
/// the project's default tracker; anything else is a tracker code that
/// uppercases.
pub fn normalize_tag(tag: Option<&str>, default_tracker: &str) -> String {
  match tag {
    Some(raw) if !raw.eq_ignore_ascii_case("bug ") => raw.to_uppercase(),
    _ => format!("{}#", default_tracker),
  }
}

/// Clean up an in-line attribution captured across wrapped diff lines:
/// line terminators and tab indentation go away, the '+' diff marker left
/// between the joined halves becomes a space.
pub fn sanitize_name(raw: &str) -> String {
  raw.replace('\n', "").replace('\t', "").replace('+', " ").trim().to_string()
}
