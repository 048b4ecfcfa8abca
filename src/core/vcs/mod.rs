//! Version control dialect detection and metadata
//!
//! relnotes supports exactly three systems: CVS, SVN and Git. The kind is
//! detected from the working-copy markers in the project directory and
//! selects the raw-text commands plus the line-classification patterns used
//! by the extraction passes.

pub mod system;

use crate::core::error::{RelError, RelResult, VcsError};
use std::path::Path;

/// The version control dialects we can mine for release metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
  Cvs,
  Svn,
  Git,
}

impl VcsKind {
  /// Detect the dialect from working-copy markers
  pub fn detect(dir: &Path) -> RelResult<Self> {
    if dir.join("CVS").exists() {
      Ok(VcsKind::Cvs)
    } else if dir.join(".svn").exists() {
      Ok(VcsKind::Svn)
    } else if dir.join(".git").exists() {
      Ok(VcsKind::Git)
    } else {
      Err(RelError::Vcs(VcsError::Unrecognized { dir: dir.to_path_buf() }))
    }
  }

  /// Command binary for this dialect
  pub fn command(self) -> &'static str {
    match self {
      VcsKind::Cvs => "cvs",
      VcsKind::Svn => "svn",
      VcsKind::Git => "git",
    }
  }

  /// Diff-style dialects prefix changed lines with '+'; their scanners skip
  /// anything else. Git log output carries no such marker.
  pub fn requires_plus_prefix(self) -> bool {
    !matches!(self, VcsKind::Git)
  }
}

/// Repository URL and root from `svn info --xml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvnInfo {
  pub url: String,
  pub root: String,
}

impl SvnInfo {
  /// Pull `<url>` and `<root>` out of `svn info --xml` output
  pub fn parse(info: &str) -> RelResult<Self> {
    let url = element_text(info, "url").ok_or(RelError::Vcs(VcsError::SvnInfoIncomplete {
      element: "URL".to_string(),
    }))?;
    let root = element_text(info, "root").ok_or(RelError::Vcs(VcsError::SvnInfoIncomplete {
      element: "Root".to_string(),
    }))?;

    Ok(Self { url, root })
  }

  /// URL of the ChangeLog copy under the given tag
  pub fn tagged_path(&self, tag: &str, path: &str) -> String {
    format!("{}/tags/{}/{}", self.root, tag, path)
  }
}

fn element_text(xml: &str, name: &str) -> Option<String> {
  let open = format!("<{}>", name);
  let close = format!("</{}>", name);
  let start = xml.find(&open)? + open.len();
  let end = xml[start..].find(&close)? + start;
  Some(xml[start..end].to_string())
}
