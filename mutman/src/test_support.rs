//! Test-only helpers for exercising the tool surface without subprocesses.

use std::cell::RefCell;

use crate::io::process::{CommandResult, CommandRunner};

/// Command runner that returns a scripted result and records every argv.
pub struct ScriptedRunner {
    result: CommandResult,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(result: CommandResult) -> Self {
        Self {
            result,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Runner whose every invocation succeeds with `output` as stdout.
    pub fn succeeding(output: &str) -> Self {
        Self::new(CommandResult {
            succeeded: true,
            output: output.to_string(),
        })
    }

    /// Runner whose every invocation fails with `output` as the error text.
    pub fn failing(output: &str) -> Self {
        Self::new(CommandResult {
            succeeded: false,
            output: output.to_string(),
        })
    }

    /// Every argv this runner was asked to execute, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn execute(&self, argv: &[String]) -> CommandResult {
        self.calls.borrow_mut().push(argv.to_vec());
        self.result.clone()
    }
}
