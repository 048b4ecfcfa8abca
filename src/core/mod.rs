pub mod config;
pub mod error;
pub mod package;
pub mod vcs;
