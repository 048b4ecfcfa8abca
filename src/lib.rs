//! relnotes aggregates release metadata for a project checkout: the bugs
//! fixed since the last tag, the translators who updated catalogs, and the
//! release announcement built from both.
//!
//! The extraction layer is pure text processing over captured VCS output;
//! everything that touches a binary or the network lives behind the
//! [`core::vcs::system::VcsAdapter`] and [`tracker::Fetch`] seams.

pub mod commands;
pub mod core;
pub mod extract;
pub mod note;
pub mod tracker;
