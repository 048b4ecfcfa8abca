//! Package identity detection
//!
//! Autotools projects carry their identity in config.h; we read the
//! PACKAGE_NAME, PACKAGE_VERSION and PACKAGE_BUGREPORT defines from there.

use crate::core::error::{ConfigError, RelError, RelResult};
use std::fs;
use std::path::Path;

/// Identity of the package being released
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
  pub name: String,
  pub version: String,
  /// Tracker product name, taken from the bug-report URL query
  pub module: String,
}

impl PackageInfo {
  /// Read package details from `config.h` in the given directory
  pub fn detect(dir: &Path) -> RelResult<Self> {
    let config_h = dir.join("config.h");
    if !config_h.exists() {
      return Err(RelError::Config(ConfigError::PackageUnknown { dir: dir.to_path_buf() }));
    }

    let content = fs::read_to_string(&config_h)?;

    let mut name = String::new();
    let mut version = String::new();
    let mut module = String::new();

    for line in content.lines() {
      if let Some(value) = define_value(line, "PACKAGE_NAME") {
        name = value.to_string();
      } else if let Some(value) = define_value(line, "PACKAGE_VERSION") {
        version = value.to_string();
      } else if let Some(value) = define_value(line, "PACKAGE_BUGREPORT") {
        // The bug-report value is usually an enter_bug URL; the product
        // module is whatever follows the last '='.
        module = match value.rfind('=') {
          Some(pos) => value[pos + 1..].to_string(),
          None => value.to_string(),
        };
      }
    }

    if name.is_empty() {
      return Err(RelError::Config(ConfigError::MissingDefine {
        define: "PACKAGE_NAME".to_string(),
      }));
    }

    if version.is_empty() {
      return Err(RelError::Config(ConfigError::MissingDefine {
        define: "PACKAGE_VERSION".to_string(),
      }));
    }

    Ok(Self { name, version, module })
  }

  /// Tarball file name for this release
  pub fn tarball(&self) -> String {
    format!("{}-{}.tar.gz", self.name.to_lowercase(), self.version)
  }
}

/// Extract the quoted value of `#define <key> "..."`, if this is that line
fn define_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
  let prefix = format!("#define {} \"", key);
  let rest = line.strip_prefix(prefix.as_str())?;
  let end = rest.rfind('"')?;
  Some(&rest[..end])
}
