//! Downstream handoff for resolved directives
//!
//! The resolver produces a value; acting on it belongs to a collaborator
//! behind the [`Dispatcher`] trait. Otto ships a planning dispatcher that
//! reconstructs the legacy invocation without spawning anything.

use serde::Serialize;

use crate::error::OttoResult;
use crate::models::{Directive, Mode};

/// A reconstructed legacy invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandPlan {
    /// Rebuild the legacy invocation for `program` from a directive.
    ///
    /// The overloaded `flag` slot is consumed here and nowhere else:
    /// flag token if present, then the environment, then `-b` when the
    /// run blocks.
    pub fn new(program: impl Into<String>, directive: &Directive) -> Self {
        let mut args = Vec::new();
        if !directive.flag.is_empty() {
            args.push(directive.flag.clone());
        }
        args.push(directive.environment.clone());
        if directive.mode == Mode::Blocking {
            args.push("-b".to_string());
        }
        Self {
            program: program.into(),
            args,
        }
    }

    /// Shell-style rendering for display.
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Consumes resolved directives.
///
/// Exit-code semantics live behind this trait, not in the resolver;
/// resolution itself never fails.
pub trait Dispatcher {
    /// Hand over a directive; returns the plan that was dispatched.
    fn dispatch(&mut self, directive: &Directive) -> OttoResult<CommandPlan>;
}

/// Dispatcher that plans the invocation without running it.
#[derive(Debug)]
pub struct PlanDispatcher {
    program: String,
}

impl PlanDispatcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Dispatcher for PlanDispatcher {
    fn dispatch(&mut self, directive: &Directive) -> OttoResult<CommandPlan> {
        Ok(CommandPlan::new(&self.program, directive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Target;

    fn directive(target: Option<Target>, environment: &str, flag: &str, mode: Mode) -> Directive {
        Directive {
            target,
            environment: environment.to_string(),
            flag: flag.to_string(),
            mode,
        }
    }

    #[test]
    fn test_plan_default_directive() {
        let plan = CommandPlan::new("deploy", &directive(None, "development", "", Mode::Async));
        assert_eq!(plan.program, "deploy");
        assert_eq!(plan.args, vec!["development"]);
        assert_eq!(plan.display_line(), "deploy development");
    }

    #[test]
    fn test_plan_carries_flag_and_mode() {
        let plan = CommandPlan::new(
            "deploy",
            &directive(Some(Target::Local), "production", "-l", Mode::Blocking),
        );
        assert_eq!(plan.args, vec!["-l", "production", "-b"]);
        assert_eq!(plan.display_line(), "deploy -l production -b");
    }

    #[test]
    fn test_plan_skip_flag_shares_the_slot() {
        let plan = CommandPlan::new("deploy", &directive(None, "development", "-p", Mode::Async));
        assert_eq!(plan.args, vec!["-p", "development"]);
    }

    #[test]
    fn test_plan_dispatcher_round_trip() {
        let mut dispatcher = PlanDispatcher::new("test");
        let plan = dispatcher
            .dispatch(&directive(Some(Target::Debug), "development", "-d", Mode::Blocking))
            .unwrap();
        assert_eq!(plan.program, "test");
        assert_eq!(plan.args, vec!["-d", "development", "-b"]);
    }
}
