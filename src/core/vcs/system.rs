//! Raw-text production via the system VCS binaries
//!
//! The extraction engines work on captured standard output; this adapter is
//! the only place that runs `cvs`, `svn` or `git`. Commands block until the
//! child exits, matching the tool's synchronous model.

use super::{SvnInfo, VcsKind};
use crate::core::error::{RelError, RelResult, ResultExt, VcsError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Produces the raw text streams the extraction passes consume
pub struct VcsAdapter {
  kind: VcsKind,
  root: PathBuf,
}

impl VcsAdapter {
  /// Detect the dialect in `root` and build an adapter for it
  pub fn open(root: &Path) -> RelResult<Self> {
    let kind = VcsKind::detect(root)?;
    Ok(Self {
      kind,
      root: root.to_path_buf(),
    })
  }

  #[cfg(test)]
  pub fn with_kind(root: &Path, kind: VcsKind) -> Self {
    Self {
      kind,
      root: root.to_path_buf(),
    }
  }

  pub fn kind(&self) -> VcsKind {
    self.kind
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Changes to the changelog-like file since `reference`
  ///
  /// For CVS and SVN this is a unified diff of the ChangeLog (optionally the
  /// one inside `subdir`); for Git it is the commit log `reference..HEAD`.
  pub fn changelog_changes(&self, reference: &str, subdir: Option<&str>) -> RelResult<String> {
    let changelog = match subdir {
      Some(dir) => format!("{}/ChangeLog", dir),
      None => "ChangeLog".to_string(),
    };

    match self.kind {
      VcsKind::Cvs => self.run(&["diff", "-u", "-r", reference, &changelog]),
      VcsKind::Svn => {
        let info = self.svn_info()?;
        let tagged = info.tagged_path(reference, &changelog);
        let current = format!("{}/{}", info.url, changelog);
        self.run(&["diff", &tagged, &current])
      }
      VcsKind::Git => {
        let range = format!("{}..HEAD", reference);
        self.run(&["log", &range])
      }
    }
  }

  /// Names of .po files under `dir` changed since `reference` (Git only)
  pub fn changed_po_files(&self, reference: &str, dir: &str) -> RelResult<String> {
    let range = format!("{}..", reference);
    let pathspec = format!("{}/*.po", dir);
    self.run(&["diff-tree", "--name-only", "-r", &range, "--", &pathspec])
  }

  /// Per-file contributor listing since `reference` (Git only)
  ///
  /// Output is `git shortlog` text: one `Name (count):` heading per author.
  pub fn shortlog(&self, reference: &str, path: &str) -> RelResult<String> {
    let range = format!("{}..", reference);
    self.run(&["shortlog", &range, "--", path])
  }

  /// Query `svn info --xml` for the repository URL and root
  pub fn svn_info(&self) -> RelResult<SvnInfo> {
    let output = self.run(&["info", "--xml"])?;
    SvnInfo::parse(&output)
  }

  fn run(&self, args: &[&str]) -> RelResult<String> {
    let bin = self.kind.command();
    let output = Command::new(bin)
      .current_dir(&self.root)
      .args(args)
      .output()
      .with_context(|| format!("Failed to execute {}", bin))?;

    // cvs diff exits 1 when the files differ; only treat a non-zero exit as
    // failure when the command produced nothing to parse.
    if !output.status.success() && output.stdout.is_empty() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(RelError::Vcs(VcsError::CommandFailed {
        command: format!("{} {}", bin, args.join(" ")),
        stderr: stderr.to_string(),
      }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
  }
}
