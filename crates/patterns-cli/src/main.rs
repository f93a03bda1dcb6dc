//! `patterns` binary. Drives the pet entity, the notification channel, and the
//! MVC and proxy demos from the command line.
//!
//! # Usage
//!
//! ```text
//! patterns pet --name Rex --born 2020-01-15 --rename Fido
//! patterns watch 255 0 -1
//! patterns watch --radix hex --radix binary 16
//! patterns student --name John
//! patterns image test_image.jpg --times 2
//! ```

mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use patterns_mvc::{ConsoleView, Student, StudentController};
use patterns_observer::{DispatchPolicy, Radix, RadixObserver, Subject};
use patterns_pets::Pet;
use patterns_proxy::{Image, ProxyImage};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::CliConfig;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "patterns", version, about = "Pet records, observers, and friends")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "patterns.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Build a pet record and print it.
  Pet {
    #[arg(long)]
    name: String,

    /// Date of birth as YYYY-MM-DD.
    #[arg(long)]
    born: String,

    /// Rename the pet after it is built.
    #[arg(long)]
    rename: Option<String>,

    /// Print JSON instead of the one-line description.
    #[arg(long)]
    json: bool,
  },

  /// Push each value through a subject and let its observers print it.
  Watch {
    /// Observer to attach; repeat for several. Defaults to the configured set.
    #[arg(short, long)]
    radix: Vec<Radix>,

    /// Keep notifying after an observer fails and report failures at the end.
    #[arg(long)]
    isolate: bool,

    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<i64>,
  },

  /// Show the configured student, then apply any changes and show it again.
  Student {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    roll_no: Option<String>,
  },

  /// Display an image through a lazily-loading proxy.
  Image {
    file: String,

    #[arg(long, default_value_t = 2)]
    times: usize,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so stdout carries only command output.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let config = CliConfig::load(&cli.config)?;
  tracing::debug!(?config, "configuration loaded");

  match cli.command {
    Command::Pet { name, born, rename, json } => {
      run_pet(&name, &born, rename.as_deref(), json)
    }
    Command::Watch { radix, isolate, values } => {
      let radixes = watch_radixes(radix, config.radixes);
      run_watch(&radixes, isolate, &values)
    }
    Command::Student { name, roll_no } => run_student(&config, name, roll_no),
    Command::Image { file, times } => run_image(file, times),
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

fn run_pet(name: &str, born: &str, rename: Option<&str>, json: bool) -> Result<()> {
  let mut pet = Pet::try_new(name, born).context("invalid pet")?;
  if let Some(new_name) = rename {
    pet.try_set_name(new_name).context("invalid new name")?;
  }

  if json {
    let out = serde_json::to_string_pretty(&pet).context("serialising pet")?;
    println!("{out}");
  } else {
    println!("{}", pet.describe());
  }
  Ok(())
}

/// `--radix` flags replace the configured observers rather than adding to
/// them.
fn watch_radixes(flags: Vec<Radix>, configured: Vec<Radix>) -> Vec<Radix> {
  if flags.is_empty() { configured } else { flags }
}

fn run_watch(radixes: &[Radix], isolate: bool, values: &[i64]) -> Result<()> {
  let policy = if isolate { DispatchPolicy::Isolate } else { DispatchPolicy::FailFast };
  let mut subject = Subject::with_policy(policy);
  for &radix in radixes {
    RadixObserver::attach_to(&mut subject, radix, io::stdout());
  }

  for &value in values {
    subject
      .set_state(value)
      .with_context(|| format!("notifying observers of {value}"))?;
  }
  Ok(())
}

fn run_student(
  config: &CliConfig,
  name: Option<String>,
  roll_no: Option<String>,
) -> Result<()> {
  let model = Student::new(&config.student_roll_no, &config.student_name);
  let mut controller = StudentController::new(model, ConsoleView::stdout());
  controller.update_view().context("rendering student")?;

  if name.is_none() && roll_no.is_none() {
    return Ok(());
  }
  if let Some(name) = name {
    controller.set_student_name(name);
  }
  if let Some(roll_no) = roll_no {
    controller.set_student_roll_no(roll_no);
  }
  controller.update_view().context("rendering updated student")?;
  Ok(())
}

fn run_image(file: String, times: usize) -> Result<()> {
  let mut image = ProxyImage::new(file);
  let mut out = io::stdout().lock();
  for _ in 0..times {
    image.display(&mut out).context("displaying image")?;
  }
  Ok(())
}
