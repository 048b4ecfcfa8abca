//! List the bugs fixed since a reference

use crate::commands::Project;
use crate::core::error::{ConfigError, RelError, RelResult};
use crate::extract::extract_bugs;
use crate::tracker::{self, HttpFetch};

/// Run the bugs command
///
/// Default output is the extracted token list with the cached reporter
/// attribution; `--titles` asks the tracker for each bug's title instead.
pub fn run_bugs(revision: &str, tracker_code: Option<String>, titles: bool, json: bool) -> RelResult<()> {
  let project = Project::open()?;
  let code = tracker_code.unwrap_or_else(|| project.config.default_tracker.clone());

  let text = project.adapter.changelog_changes(revision, None)?;
  let list = extract_bugs(project.adapter.kind(), &text, Some(&code), &project.config.default_tracker);

  if json {
    println!("{}", serde_json::to_string_pretty(&list)?);
    return Ok(());
  }

  if list.is_empty() {
    println!("No {} bugs found since {}", code, revision);
    return Ok(());
  }

  if titles {
    let tracker_config = project
      .config
      .tracker(&code)
      .ok_or_else(|| RelError::Config(ConfigError::TrackerNotFound { code: code.clone() }))?;

    let bugs = tracker::fetch_summaries(&HttpFetch, tracker_config, &list.ids(&code))?;
    println!("{}", tracker::render_titles(&code, &bugs, &project.config.bullet));
    return Ok(());
  }

  println!("🐛 Bugs fixed since {}:", revision);
  for token in &list.tokens {
    let id = token.rsplit('#').next().unwrap_or(token);
    match list.names.get(id).filter(|name| !name.is_empty()) {
      Some(name) => println!("  {} {} ({})", project.config.bullet, token, name),
      None => println!("  {} {}", project.config.bullet, token),
    }
  }

  Ok(())
}
