use clap::{Parser, Subcommand};
use relnotes::commands;
use relnotes::core::error::print_error;
use std::path::PathBuf;

/// Aggregate release metadata: bugs fixed, translation credits and notes
#[derive(Parser)]
#[command(name = "relnotes")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List bugs fixed since a tag or revision
  Bugs {
    /// Tag or revision to compare against
    #[arg(short, long)]
    revision: String,
    /// Tracker code to extract for (defaults to the configured tracker)
    #[arg(short, long)]
    tracker: Option<String>,
    /// Fetch bug titles from the tracker instead of listing tokens
    #[arg(long)]
    titles: bool,
    /// Output in JSON format (useful for CI/automation)
    #[arg(long)]
    json: bool,
  },
  /// Show full bug summaries from every configured tracker
  Summary {
    /// Tag or revision to compare against
    #[arg(short, long)]
    revision: String,
    /// Output in JSON format (useful for CI/automation)
    #[arg(long)]
    json: bool,
  },
  /// List translators who updated catalogs since a tag or revision
  Translators {
    /// Tag or revision to compare against
    #[arg(short, long)]
    revision: String,
    /// Use the help-manual catalogs instead of the UI ones
    #[arg(short, long)]
    manual: bool,
    /// Output in JSON format (useful for CI/automation)
    #[arg(long)]
    json: bool,
  },
  /// Build the release announcement
  Note {
    /// Tag or revision to compare against
    #[arg(short, long)]
    revision: String,
    /// Template file to use instead of the built-in one
    #[arg(short, long)]
    template: Option<PathBuf>,
    /// Produce HTML instead of plain text
    #[arg(long)]
    html: bool,
  },
  /// Prepend the release section to the NEWS file
  News {
    /// Tag or revision to compare against
    #[arg(short, long)]
    revision: String,
    /// Actually write NEWS (default: dry-run mode showing the entry)
    #[arg(long)]
    apply: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Bugs {
      revision,
      tracker,
      titles,
      json,
    } => commands::run_bugs(&revision, tracker, titles, json),
    Commands::Summary { revision, json } => commands::run_summary(&revision, json),
    Commands::Translators { revision, manual, json } => commands::run_translators(&revision, manual, json),
    Commands::Note {
      revision,
      template,
      html,
    } => commands::run_note(&revision, template, html),
    Commands::News { revision, apply } => commands::run_news(&revision, apply),
  };

  if let Err(error) = result {
    print_error(&error);
    std::process::exit(error.exit_code().as_i32());
  }
}
