//! Deploy token resolution
//!
//! Turns a flat token sequence into a [`Directive`]. The resolver is
//! total: every input, including contradictory or nonsensical
//! combinations, yields a directive. Unknown flags are ignored so newer
//! wrappers can pass forward-compatible options through older binaries.

use crate::models::{DeployDefaults, Directive, Mode, Target};

/// Receives resolver diagnostics that are not part of the returned value.
pub trait DiagnosticSink {
    fn warn(&mut self, message: String);

    fn warn_deprecated(&mut self, flag: &str, replacement: &str) {
        self.warn(format!("`{flag}` is deprecated; use `{replacement}` instead"));
    }
}

/// Sink that prints warnings to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&mut self, message: String) {
        eprintln!("warning: {message}");
    }
}

/// Sink that records warnings instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub warnings: Vec<String>,
}

impl DiagnosticSink for RecordingSink {
    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }
}

/// Resolve tokens against the built-in defaults, reporting deprecations
/// to stderr.
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Directive {
    resolve_with(tokens, &DeployDefaults::default(), &mut StderrSink)
}

/// Resolve tokens against explicit defaults and a caller-supplied sink.
///
/// Single pass, left to right:
/// 1. `-b`/`--blocking` set the mode; last occurrence wins
/// 2. legacy `-l`/`-d` set target and flag directly and warn
/// 3. skip flags collapse into the shared one-letter `flag` slot
/// 4. the first token not starting with `-` sets the target or the
///    environment; later positionals are ignored
/// 5. after the scan, an empty `flag` is derived from the target
///
/// Never fails; contradictory input resolves field by field (target and
/// environment are independent).
pub fn resolve_with<S: AsRef<str>>(
    tokens: &[S],
    defaults: &DeployDefaults,
    sink: &mut dyn DiagnosticSink,
) -> Directive {
    let mut directive = Directive {
        target: None,
        environment: defaults.environment.clone(),
        flag: String::new(),
        mode: defaults.mode,
    };
    let mut positional_seen = false;

    for token in tokens {
        let token = token.as_ref();
        match token {
            "-b" | "--blocking" => directive.mode = Mode::Blocking,
            "-l" => {
                directive.target = Some(Target::Local);
                directive.flag = "-l".to_string();
                sink.warn_deprecated("-l", "deploy local");
            }
            "-d" => {
                directive.target = Some(Target::Debug);
                directive.flag = "-d".to_string();
                sink.warn_deprecated("-d", "deploy debug");
            }
            "-p" | "-y" | "--skip-build" | "--skip-push" => {
                directive.flag = skip_flag(token);
            }
            _ if !token.starts_with('-') && !positional_seen => {
                positional_seen = true;
                apply_positional(&mut directive, token);
            }
            _ => {}
        }
    }

    if directive.flag.is_empty() {
        if let Some(target) = directive.target {
            directive.flag = target.short_flag().to_string();
        }
    }

    directive
}

fn apply_positional(directive: &mut Directive, token: &str) {
    match token {
        "local" => {
            directive.target = Some(Target::Local);
            directive.flag = "-l".to_string();
        }
        "debug" => {
            directive.target = Some(Target::Debug);
            directive.flag = "-d".to_string();
        }
        "dev" | "development" => directive.environment = "development".to_string(),
        "prod" | "production" => directive.environment = "production".to_string(),
        other => directive.environment = other.to_string(),
    }
}

/// Collapse a skip flag onto the shared one-letter namespace: long forms
/// reduce to their third character, and `s` remaps to `p`.
fn skip_flag(token: &str) -> String {
    let index = if token.starts_with("--") { 2 } else { 1 };
    match token.chars().nth(index) {
        Some('s') | None => "-p".to_string(),
        Some(code) => format!("-{code}"),
    }
}
