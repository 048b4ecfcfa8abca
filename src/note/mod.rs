//! Release note assembly
//!
//! A release note is a template with `$placeholder` variables filled from
//! the extraction results: the bug summaries, the translator credits for
//! the UI and help catalogs, the download location and tarball checksum,
//! and a dated footer. Built-in plain-text and HTML templates cover the
//! common case; `--template` substitutes a project-specific one.

pub mod news;

use crate::core::config::ReleaseConfig;
use crate::core::error::{ConfigError, RelError, RelResult};
use crate::core::package::PackageInfo;
use crate::core::vcs::system::VcsAdapter;
use crate::extract::{extract_bugs, extract_translators};
use crate::tracker::{self, Fetch};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

pub const TEMPLATE_TEXT: &str = "\
What is it?
===========

$about

Where can I get it?
===================

Download $name $version from:

  $download

  $checksums

What's new?
===========

The changes are:
$fixed

Translations:
$translations

Manual Translations:
$help_translations

--
$footer
";

pub const TEMPLATE_HTML: &str = "\
<p>$name $version is now available for download from:</p>
<ul>
  <li><a href=\"$download\">$download</a></li>
</ul>
<p>$checksums</p>

<h3>What is it?</h3>
<p>$about</p>

<h3>What's New</h3>
$news

<h3>Bugs Fixed</h3>
$fixed

<h3>Translations</h3>
$translations

<h3>Help Manual Translations</h3>
$help_translations

--
$footer
";

const REQUIRED_PLACEHOLDERS: [&str; 4] = ["$download", "$fixed", "$translations", "$help_translations"];

/// Check a template carries every placeholder the assembly fills
pub fn validate_template(template: &str) -> RelResult<()> {
  for placeholder in REQUIRED_PLACEHOLDERS {
    if !template.contains(placeholder) {
      return Err(RelError::Config(ConfigError::MissingPlaceholder {
        placeholder: placeholder.to_string(),
      }));
    }
  }
  Ok(())
}

/// Fill `$placeholder` variables in a template
///
/// Longer names substitute first so `$news` never clips `$name` values and
/// friends; pairs are (name without `$`, value).
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
  let mut pairs: Vec<(&str, &str)> = values.to_vec();
  pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

  let mut out = template.to_string();
  for (name, value) in pairs {
    out = out.replace(&format!("${}", name), value);
  }
  out
}

/// Extract this version's section from the NEWS file text
///
/// The section starts two lines below the `NEW in VERSION` marker (past the
/// underline) and runs until the next `NEW in` marker or end of text.
pub fn news_section(news: &str, version: &str) -> Option<String> {
  let marker = format!("NEW in {}", version);
  let start = news.find(&marker)?;

  let mut pos = start;
  for _ in 0..2 {
    pos = news[pos..].find('\n').map(|i| pos + i + 1)?;
  }

  let end = news[pos..].find("NEW in").map(|i| pos + i).unwrap_or(news.len());
  Some(news[pos..end].trim_end().to_string())
}

/// SHA-256 line for the release tarball, empty when the tarball is absent
pub fn checksum_line(dir: &Path, tarball: &str) -> RelResult<String> {
  let path = dir.join(tarball);
  if !path.exists() {
    return Ok(String::new());
  }

  let bytes = fs::read(&path)?;
  let digest = Sha256::digest(&bytes);
  let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
  Ok(format!("{}  {}", hex, tarball))
}

/// Project blurb for `$about`, the first paragraph of the README
fn read_about(dir: &Path) -> String {
  for name in ["README.md", "README"] {
    if let Ok(text) = fs::read_to_string(dir.join(name)) {
      if let Some(paragraph) = text.split("\n\n").map(str::trim).find(|p| !p.is_empty()) {
        return paragraph.to_string();
      }
    }
  }
  String::new()
}

/// Bug summary section across every configured tracker, titles mode
///
/// A tracker that fails to answer degrades to a notice line instead of
/// aborting the whole note.
pub fn fixed_section(
  adapter: &VcsAdapter,
  config: &ReleaseConfig,
  fetcher: &dyn Fetch,
  reference: &str,
) -> RelResult<String> {
  let text = adapter.changelog_changes(reference, None)?;
  let mut sections: Vec<String> = Vec::new();

  for (code, tracker_config) in &config.trackers {
    let list = extract_bugs(adapter.kind(), &text, Some(code), &config.default_tracker);
    if list.is_empty() {
      continue;
    }

    match tracker::fetch_summaries(fetcher, tracker_config, &list.ids(code)) {
      Ok(bugs) => sections.push(tracker::render_titles(code, &bugs, &config.bullet)),
      Err(err) => sections.push(format!("  Response from {} was not good: {}", tracker_config.description, err)),
    }
  }

  if sections.is_empty() {
    Ok("  None".to_string())
  } else {
    Ok(sections.join("\n"))
  }
}

/// Assemble the release note
pub fn build_note(
  adapter: &VcsAdapter,
  config: &ReleaseConfig,
  package: &PackageInfo,
  fetcher: &dyn Fetch,
  reference: &str,
  html: bool,
  template_override: Option<&str>,
) -> RelResult<String> {
  let template = match template_override {
    Some(text) => text,
    None if html => TEMPLATE_HTML,
    None => TEMPLATE_TEXT,
  };
  validate_template(template)?;

  let download = config.download_url_for(&package.name, &package.version);

  let mut checksums = checksum_line(adapter.root(), &package.tarball())?;
  if html {
    checksums = checksums.replace('\n', "<br>\n");
  }

  let about = read_about(adapter.root());

  let news = if template.contains("$news") {
    let text = fs::read_to_string(adapter.root().join("NEWS")).unwrap_or_default();
    news_section(&text, &package.version).unwrap_or_default()
  } else {
    String::new()
  };

  let fixed = fixed_section(adapter, config, fetcher, reference)?;
  let translations =
    extract_translators(adapter, reference, &config.po_dir)?.render(&config.translator_template, &config.bullet, html);
  let help_translations =
    extract_translators(adapter, reference, &config.help_dir)?.render(&config.translator_template, &config.bullet, html);

  let date = chrono::Local::now().format(&config.date_format).to_string();
  let mut footer = format!("{}\n{} team", date, package.name);
  if html {
    footer = format!("<p>{}</p>", footer.replace('\n', "<br>\n"));
  }

  Ok(substitute(
    template,
    &[
      ("name", &package.name),
      ("version", &package.version),
      ("download", &download),
      ("checksums", &checksums),
      ("about", &about),
      ("news", &news),
      ("fixed", &fixed),
      ("translations", &translations),
      ("help_translations", &help_translations),
      ("footer", &footer),
    ],
  ))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_templates_validate() {
    validate_template(TEMPLATE_TEXT).unwrap();
    validate_template(TEMPLATE_HTML).unwrap();
  }

  #[test]
  fn missing_placeholder_is_a_config_error() {
    let err = validate_template("Download $download\n$fixed\n$translations\n").unwrap_err();
    assert!(err.to_string().contains("$help_translations"));
  }

  #[test]
  fn substitute_fills_overlapping_names() {
    let out = substitute(
      "$name $news $help_translations $translations",
      &[
        ("name", "tracker"),
        ("news", "nothing"),
        ("translations", "de"),
        ("help_translations", "fr"),
      ],
    );
    assert_eq!(out, "tracker nothing fr de");
  }

  const NEWS: &str = "\
NEW in 0.8.1:
==============
  * Fixed crash on startup

Translations:
  * Updated de

NEW in 0.8.0:
==============
  * Initial release
";

  #[test]
  fn news_section_stops_at_previous_release() {
    let section = news_section(NEWS, "0.8.1").unwrap();
    assert!(section.starts_with("  * Fixed crash on startup"));
    assert!(section.ends_with("  * Updated de"));
    assert!(!section.contains("0.8.0"));
  }

  #[test]
  fn news_section_for_last_release_runs_to_end() {
    let section = news_section(NEWS, "0.8.0").unwrap();
    assert_eq!(section, "  * Initial release");
  }

  #[test]
  fn news_section_missing_version_is_none() {
    assert_eq!(news_section(NEWS, "0.9.0"), None);
  }

  #[test]
  fn checksum_line_hashes_the_tarball() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tracker-0.8.1.tar.gz"), b"hello").unwrap();

    let line = checksum_line(dir.path(), "tracker-0.8.1.tar.gz").unwrap();
    assert_eq!(
      line,
      "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824  tracker-0.8.1.tar.gz"
    );
  }

  #[test]
  fn checksum_line_is_empty_without_tarball() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(checksum_line(dir.path(), "missing.tar.gz").unwrap(), "");
  }

  #[test]
  fn about_takes_first_readme_paragraph() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("README.md"), "Tracker indexes your data.\n\nMore detail.\n").unwrap();
    assert_eq!(read_about(dir.path()), "Tracker indexes your data.");
  }
}
