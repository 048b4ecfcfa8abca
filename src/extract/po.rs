//! Last-Translator header reader
//!
//! Translation catalogs carry a `"Last-Translator: NAME <EMAIL>\n"` header
//! line; we read only that. Help-manual catalogs nest one directory deeper
//! per language, so `dir/lang.po` falls back to `dir/lang/lang.po`.

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

static LAST_TRANSLATOR: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"Last-Translator:\s*(?P<name>[^<"\\]*)"#).expect("valid pattern"));

/// Read the last translator recorded in a language's catalog
///
/// Returns `None` when neither catalog path opens or no header line names a
/// translator; unreadable files are treated the same as missing ones.
pub fn read_last_translator(lang: &str, dir: &Path) -> Option<String> {
  let file = File::open(dir.join(format!("{}.po", lang)))
    .or_else(|_| File::open(dir.join(lang).join(format!("{}.po", lang))))
    .ok()?;

  for line in BufReader::new(file).lines() {
    let line = line.ok()?;
    if let Some(caps) = LAST_TRANSLATOR.captures(&line) {
      let name = caps["name"].trim().to_string();
      if !name.is_empty() {
        return Some(name);
      }
    }
  }

  None
}
