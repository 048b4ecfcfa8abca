//! Integration tests for relnotes
//!
//! These drive the extraction layer against real git repositories built in
//! temporary directories, the same raw text the binary sees.

mod helpers;
mod test_bugs;
mod test_news;
mod test_note;
mod test_translators;
