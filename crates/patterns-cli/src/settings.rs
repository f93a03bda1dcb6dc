//! Layered configuration for the `patterns` binary.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, then
//! `PATTERNS_*` environment variables. Command-line flags win over all three.

use std::path::Path;

use anyhow::Context as _;
use patterns_observer::Radix;
use serde::Deserialize;

/// Shape of the configuration after all sources are merged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
  /// Observers attached by `watch` when no `--radix` is given.
  pub radixes:         Vec<Radix>,
  /// Initial record for the `student` command.
  pub student_name:    String,
  pub student_roll_no: String,
}

impl Default for CliConfig {
  fn default() -> Self {
    Self {
      radixes:         vec![Radix::Hex],
      student_name:    "Robert".to_string(),
      student_roll_no: "10".to_string(),
    }
  }
}

impl CliConfig {
  /// Merge defaults, the file at `path`, and the process environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> { Self::load_with_env(path, None) }

  /// Like [`load`](Self::load), but reads `PATTERNS_*` variables from `env`
  /// instead of the process environment when it is `Some`.
  pub fn load_with_env(
    path: &Path,
    env: Option<config::Map<String, String>>,
  ) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("PATTERNS")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("radixes")
          .source(env),
      )
      .build()
      .with_context(|| format!("failed to read config from {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")
  }
}
