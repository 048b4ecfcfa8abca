//! Error types for relnotes with contextual messages and exit codes
//!
//! Extraction itself never fails on malformed input; the errors here cover
//! the process-level failures: unreadable configuration, version control
//! commands that exit non-zero, and tracker requests that go wrong.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for relnotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (VCS command, network, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relnotes
#[derive(Debug)]
pub enum RelError {
  /// Configuration and project-layout errors
  Config(ConfigError),

  /// Version control command errors
  Vcs(VcsError),

  /// Bug tracker request/response errors
  Tracker { tracker: String, reason: String },

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl RelError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    RelError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    RelError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      RelError::Message { message, context, help } => RelError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      RelError::Config(_) => ExitCode::User,
      RelError::Vcs(_) => ExitCode::System,
      RelError::Tracker { .. } => ExitCode::System,
      RelError::Io(_) => ExitCode::System,
      RelError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      RelError::Config(e) => e.help_message(),
      RelError::Vcs(e) => e.help_message(),
      RelError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for RelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RelError::Config(e) => write!(f, "{}", e),
      RelError::Vcs(e) => write!(f, "{}", e),
      RelError::Tracker { tracker, reason } => {
        write!(f, "Tracker request for {} failed: {}", tracker, reason)
      }
      RelError::Io(e) => write!(f, "I/O error: {}", e),
      RelError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for RelError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RelError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for RelError {
  fn from(err: io::Error) -> Self {
    RelError::Io(err)
  }
}

impl From<String> for RelError {
  fn from(msg: String) -> Self {
    RelError::message(msg)
  }
}

impl From<&str> for RelError {
  fn from(msg: &str) -> Self {
    RelError::message(msg)
  }
}

impl From<toml_edit::TomlError> for RelError {
  fn from(err: toml_edit::TomlError) -> Self {
    RelError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for RelError {
  fn from(err: toml_edit::de::Error) -> Self {
    RelError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for RelError {
  fn from(err: serde_json::Error) -> Self {
    RelError::message(format!("JSON error: {}", err))
  }
}

impl From<regex::Error> for RelError {
  fn from(err: regex::Error) -> Self {
    RelError::message(format!("Pattern error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for RelError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    RelError::message(format!("UTF-8 conversion error: {}", err))
  }
}

impl From<anyhow::Error> for RelError {
  fn from(err: anyhow::Error) -> Self {
    RelError::message(err.to_string())
  }
}

/// Configuration and project-layout errors
#[derive(Debug)]
pub enum ConfigError {
  /// config.h not found, so the package cannot be identified
  PackageUnknown { dir: PathBuf },

  /// A config.h define we need was missing or empty
  MissingDefine { define: String },

  /// Tracker code not present in the tracker registry
  TrackerNotFound { code: String },

  /// Template file missing a required placeholder
  MissingPlaceholder { placeholder: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::PackageUnknown { .. } => {
        Some("Run relnotes from the top-level directory of the project you maintain.".to_string())
      }
      ConfigError::TrackerNotFound { .. } => {
        Some("Add the tracker to the [trackers] table in .relnotes.toml.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::PackageUnknown { dir } => {
        write!(
          f,
          "Could not find config.h in {}, we need this to identify the package details",
          dir.display()
        )
      }
      ConfigError::MissingDefine { define } => {
        write!(f, "Could not obtain {} from config.h", define)
      }
      ConfigError::TrackerNotFound { code } => {
        write!(f, "Tracker '{}' not found in configuration", code)
      }
      ConfigError::MissingPlaceholder { placeholder } => {
        write!(f, "Could not find \"{}\" in template", placeholder)
      }
    }
  }
}

/// Version control command errors
#[derive(Debug)]
pub enum VcsError {
  /// No recognised VCS marker in the working directory
  Unrecognized { dir: PathBuf },

  /// VCS command exited non-zero
  CommandFailed { command: String, stderr: String },

  /// svn info output did not contain the element we need
  SvnInfoIncomplete { element: String },
}

impl VcsError {
  fn help_message(&self) -> Option<String> {
    match self {
      VcsError::Unrecognized { .. } => {
        Some("Supported systems are CVS, SVN and Git; run from a checkout of one of those.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for VcsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VcsError::Unrecognized { dir } => {
        write!(f, "Version control system unrecognised in {}, not cvs, svn or git", dir.display())
      }
      VcsError::CommandFailed { command, stderr } => {
        write!(f, "VCS command failed: {}\n{}", command, stderr)
      }
      VcsError::SvnInfoIncomplete { element } => {
        write!(f, "Could not get {} from subversion details", element)
      }
    }
  }
}

/// Result type alias for relnotes
pub type RelResult<T> = Result<T, RelError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> RelResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> RelResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<RelError>,
{
  fn context(self, ctx: impl Into<String>) -> RelResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> RelResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &RelError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
