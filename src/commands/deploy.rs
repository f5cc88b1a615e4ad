//! Deploy and test-run commands
//!
//! Both resolve the free-form token list into a Directive and hand the
//! result to the dispatch boundary. `test` is the legacy test wrapper:
//! same resolution, blocking by default.

use anyhow::Result;

use otto::config::Config;
use otto::dispatch::{Dispatcher, PlanDispatcher};
use otto::models::{DeployDefaults, Directive, Mode};
use otto::output::{print_event, Icons};
use otto::resolver::{resolve_with, StderrSink};

pub fn cmd_deploy(tokens: &[String], json: bool, verbose: u8) -> Result<()> {
    run("deploy", "Deploy", tokens, load_defaults(verbose), json, verbose)
}

pub fn cmd_test(tokens: &[String], json: bool, verbose: u8) -> Result<()> {
    let mut defaults = load_defaults(verbose);
    // a test invocation waits for its result
    defaults.mode = Mode::Blocking;
    run("test", "Test", tokens, defaults, json, verbose)
}

fn run(
    program: &str,
    title: &str,
    tokens: &[String],
    defaults: DeployDefaults,
    json: bool,
    verbose: u8,
) -> Result<()> {
    // deprecation notices go to stderr in both output modes
    let directive = resolve_with(tokens, &defaults, &mut StderrSink);

    let plan = PlanDispatcher::new(program).dispatch(&directive)?;

    if json {
        print_event(&serde_json::json!({
            "event": "dispatch",
            "command": program,
            "directive": directive,
            "plan": plan,
        }));
        return Ok(());
    }

    let icons = Icons::for_stdout();
    println!("{} Otto {}", icons.launch, title);
    println!();
    render_directive(&directive);
    if verbose > 0 && !tokens.is_empty() {
        println!("  Tokens: {tokens:?}");
    }
    println!();
    println!("  {} {}", icons.arrow, plan.display_line());

    Ok(())
}

fn render_directive(directive: &Directive) {
    println!("  Environment: {}", directive.environment);
    if let Some(target) = directive.target {
        println!("  Target: {}", target.as_str());
    }
    if !directive.flag.is_empty() {
        println!("  Flag: {}", directive.flag);
    }
    println!("  Mode: {}", directive.mode.as_str());
}

fn load_defaults(verbose: u8) -> DeployDefaults {
    let cwd = std::env::current_dir().ok();
    let (config, warnings) = Config::load_or_default_with_warnings(cwd.as_deref());
    if verbose > 0 {
        for warning in &warnings {
            eprintln!(
                "warning: unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            );
        }
    }
    config.deploy
}
