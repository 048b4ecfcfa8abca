//! Command handlers for the relnotes CLI

pub mod bugs;
pub mod news;
pub mod note;
pub mod summary;
pub mod translators;

pub use bugs::run_bugs;
pub use news::run_news;
pub use note::run_note;
pub use summary::run_summary;
pub use translators::run_translators;

use crate::core::config::ReleaseConfig;
use crate::core::error::RelResult;
use crate::core::package::PackageInfo;
use crate::core::vcs::system::VcsAdapter;
use std::env;

/// Everything a command needs about the checkout it runs in
pub struct Project {
  pub config: ReleaseConfig,
  pub package: PackageInfo,
  pub adapter: VcsAdapter,
}

impl Project {
  /// Open the project in the current directory
  pub fn open() -> RelResult<Self> {
    let dir = env::current_dir()?;
    let config = ReleaseConfig::load(&dir)?;
    let package = PackageInfo::detect(&dir)?;
    let adapter = VcsAdapter::open(&dir)?;

    Ok(Self {
      config,
      package,
      adapter,
    })
  }
}
