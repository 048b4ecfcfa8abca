//! Translator extraction engine
//!
//! Builds the language-to-contributors mapping for a release. Two
//! independent attributions are merged per language: whoever the VCS says
//! touched the catalog (ChangeLog entry or commit author) and whoever the
//! catalog's own Last-Translator header names. Contributors keep discovery
//! order, the VCS-derived name before the header name; languages sort
//! lexicographically on render.

use crate::core::error::RelResult;
use crate::core::vcs::VcsKind;
use crate::core::vcs::system::VcsAdapter;
use crate::extract::patterns;
use crate::extract::po::read_last_translator;
use crate::extract::scanner::LinePairs;
use std::collections::BTreeMap;
use std::path::Path;

/// Sentinel returned when the translation directory is absent
pub const NO_TRANSLATIONS: &str = "No translations exist in this project";

/// Language-to-contributors mapping from one extraction pass
#[derive(Debug, Clone, Default)]
pub struct TranslatorUpdates {
  langs: BTreeMap<String, Vec<String>>,
  missing_dir: bool,
}

impl TranslatorUpdates {
  /// Marker result for a project without the translation directory
  pub fn missing_dir() -> Self {
    Self {
      langs: BTreeMap::new(),
      missing_dir: true,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.langs.is_empty()
  }

  /// Languages in sorted order
  pub fn langs(&self) -> impl Iterator<Item = &str> {
    self.langs.keys().map(String::as_str)
  }

  /// Comma-joined contributor strings keyed by language, sorted
  pub fn joined(&self) -> BTreeMap<String, String> {
    self
      .langs
      .iter()
      .map(|(lang, contributors)| (lang.clone(), contributors.join(", ")))
      .collect()
  }

  /// Credit a language update: the VCS-derived name first, then the
  /// catalog's own header name, each added once. A line yielding neither
  /// leaves the language out of the mapping entirely.
  fn credit(&mut self, lang: &str, header_name: Option<&str>, vcs_name: &str) {
    let mut additions: Vec<&str> = Vec::new();
    if !vcs_name.is_empty() {
      additions.push(vcs_name);
    }
    if let Some(header) = header_name.filter(|name| !name.is_empty()) {
      additions.push(header);
    }
    if additions.is_empty() {
      return;
    }

    let entry = self.langs.entry(lang.to_string()).or_default();
    for name in additions {
      if !entry.iter().any(|existing| existing == name) {
        entry.push(name.to_string());
      }
    }
  }

  /// Render the mapping for the announcement
  ///
  /// A missing directory renders as the sentinel, an empty mapping as
  /// "None". `template` carries `{lang}` and `{translator}` placeholders.
  pub fn render(&self, template: &str, bullet: &str, html: bool) -> String {
    if self.missing_dir {
      return NO_TRANSLATIONS.to_string();
    }
    if self.langs.is_empty() {
      return "None".to_string();
    }

    let lines: Vec<String> = self
      .langs
      .iter()
      .map(|(lang, contributors)| {
        let text = template
          .replace("{lang}", lang)
          .replace("{translator}", &contributors.join(", "));
        if html {
          format!("<li>{}</li>", text)
        } else {
          format!("  {} {}", bullet, text)
        }
      })
      .collect();

    if html {
      format!("<ul>\n{}\n</ul>", lines.join("\n"))
    } else {
      lines.join("\n")
    }
  }
}

/// Extract translator updates since `reference` for one translation dir
pub fn extract_translators(adapter: &VcsAdapter, reference: &str, dir_name: &str) -> RelResult<TranslatorUpdates> {
  let dir = adapter.root().join(dir_name);
  if !dir.exists() {
    return Ok(TranslatorUpdates::missing_dir());
  }

  match adapter.kind() {
    VcsKind::Cvs | VcsKind::Svn => {
      let text = adapter.changelog_changes(reference, Some(dir_name))?;
      Ok(scan_changelog(adapter.kind(), &text, &dir))
    }
    VcsKind::Git => {
      let listing = adapter.changed_po_files(reference, dir_name)?;
      scan_git_listing(&listing, dir_name, &dir, |path| adapter.shortlog(reference, path))
    }
  }
}

/// Translator pass over a ChangeLog diff (CVS/SVN dialects)
pub fn scan_changelog(kind: VcsKind, text: &str, dir: &Path) -> TranslatorUpdates {
  let mut updates = TranslatorUpdates::default();
  let mut last_committer = String::new();

  for line in LinePairs::new(text) {
    if kind.requires_plus_prefix() && !line.starts_with('+') {
      continue;
    }

    if let Some(name) = patterns::classify_committer(kind, line) {
      last_committer = name;
      continue;
    }

    let Some(lang_line) = patterns::classify_lang(line) else {
      continue;
    };
    if lang_line.lang.is_empty() {
      continue;
    }

    let name = match lang_line.inline_name.as_deref() {
      Some(inline) => patterns::sanitize_name(inline),
      None => last_committer.trim().to_string(),
    };

    let header = read_last_translator(&lang_line.lang, dir);
    updates.credit(&lang_line.lang, header.as_deref(), &name);
  }

  updates
}

/// Translator pass over a changed-file listing (Git dialect)
///
/// For each changed catalog, `shortlog` produces the per-file contributor
/// listing scoped to the reference range; its first entry is the credited
/// committer.
pub fn scan_git_listing<F>(listing: &str, dir_name: &str, dir: &Path, mut shortlog: F) -> RelResult<TranslatorUpdates>
where
  F: FnMut(&str) -> RelResult<String>,
{
  let mut updates = TranslatorUpdates::default();

  for line in listing.lines() {
    let Some(lang) = patterns::po_file_lang(dir_name, line) else {
      continue;
    };

    let catalog = format!("{}/{}.po", dir_name, lang);
    let who = shortlog(&catalog)?;
    let Some(name) = patterns::shortlog_author(&who) else {
      continue;
    };

    let header = read_last_translator(lang, dir);
    updates.credit(lang, header.as_deref(), &name);
  }

  Ok(updates)
}
