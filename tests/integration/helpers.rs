//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const CONFIG_H: &str = r#"/* config.h.  Generated from config.h.in by configure.  */
#define PACKAGE_BUGREPORT "http://bugzilla.gnome.org/enter_bug.cgi?product=tracker"
#define PACKAGE_NAME "Tracker"
#define PACKAGE_VERSION "0.8.1"
"#;

pub const DE_PO: &str = r#"# German translation.
msgid ""
msgstr ""
"Project-Id-Version: tracker\n"
"Last-Translator: Petra Schmidt <petra@x.org>\n"
"Language-Team: German <gnome-de@gnome.org>\n"
"#;

/// A project checkout with git history, tagged at `base`
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create a project with config.h, README, NEWS and a UI catalog,
  /// committed and tagged as the previous release.
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    std::fs::write(path.join("config.h"), CONFIG_H)?;
    std::fs::write(path.join("README.md"), "Tracker indexes and searches your data.\n\nMore detail here.\n")?;
    std::fs::write(path.join("NEWS"), "NEW in 0.8.0:\n==============\n  * Initial release\n")?;
    std::fs::create_dir(path.join("po"))?;
    std::fs::write(path.join("po/de.po"), DE_PO)?;

    git(&path, &["add", "."])?;
    git(&path, &["commit", "-m", "Initial project setup"])?;
    git(&path, &["tag", "base"])?;

    Ok(Self { _root: root, path })
  }

  /// Write a file relative to the workspace root
  pub fn write_file(&self, rel: &str, content: &str) -> Result<()> {
    let file_path = self.path.join(rel);
    if let Some(parent) = file_path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
  }

  /// Stage everything and commit with the given message
  pub fn commit(&self, message: &str) -> Result<()> {
    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "-m", message])?;
    Ok(())
  }
}

/// Run a git command in the given directory
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
  let output = Command::new("git")
    .current_dir(dir)
    .args(args)
    .output()
    .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

  if !output.status.success() {
    anyhow::bail!(
      "git {} failed: {}",
      args.join(" "),
      String::from_utf8_lossy(&output.stderr)
    );
  }

  Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
