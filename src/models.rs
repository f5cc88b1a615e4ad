//! Core data models for Otto
//!
//! Defines the values that flow from the resolver to the commands:
//! - `Directive`: a normalized deployment request
//! - `DeployDefaults`: the per-invocation defaults the resolver consults
//! - Supporting enums: `Target`, `Mode`

use serde::{Deserialize, Serialize};

/// Non-default deploy destination, distinct from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Deploy to the local checkout
    Local,
    /// Deploy with debug instrumentation
    Debug,
}

impl Target {
    /// Short-form token the legacy deploy scripts expect for this target
    pub fn short_flag(&self) -> &'static str {
        match self {
            Target::Local => "-l",
            Target::Debug => "-d",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Local => "local",
            Target::Debug => "debug",
        }
    }
}

/// Invocation behavior of the downstream run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fire and forget
    #[default]
    Async,
    /// Wait for the run to finish
    Blocking,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Async => "async",
            Mode::Blocking => "blocking",
        }
    }

    /// Lenient name lookup for env overrides; anything unrecognized reads
    /// as async.
    pub fn parse_lenient(name: &str) -> Self {
        match name {
            "blocking" | "b" => Mode::Blocking,
            _ => Mode::Async,
        }
    }
}

/// A normalized deployment directive.
///
/// Built once per invocation by [`resolve`](crate::resolver::resolve) and
/// immutable afterwards. `target` and `environment` are independent:
/// setting one never resets the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    /// Non-default destination, if any
    pub target: Option<Target>,

    /// Deployment tier; arbitrary names pass through unvalidated
    pub environment: String,

    /// Short-form token mirroring the legacy invocation flags.
    ///
    /// One slot shared by target flags (`-l`, `-d`) and skip flags
    /// (`-p`, `-y`); the last writer wins.
    pub flag: String,

    /// Async or blocking invocation
    pub mode: Mode,
}

/// Defaults the resolver starts from, constructed once per call.
///
/// Doubles as the `[deploy]` section of `otto.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployDefaults {
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default)]
    pub mode: Mode,
}

impl Default for DeployDefaults {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            mode: Mode::default(),
        }
    }
}

fn default_environment() -> String {
    "development".to_string()
}
