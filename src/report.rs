//! Dry-run reporting of a finished plan.

use crate::error::Result;
use crate::plan::{Plan, PlanEntry};
use serde::Serialize;
use std::fmt::Write;

/// Summary of a plan for display without touching the file system.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub count: usize,
    pub entries: Vec<PlanEntry>,
}

impl PlanReport {
    pub fn new(plan: &Plan) -> Self {
        Self {
            count: plan.len(),
            entries: plan.entries(),
        }
    }

    /// Renders the count line, plus one `old -> new` line per entry when verbose.
    pub fn render(&self, verbose: bool) -> String {
        let mut output = String::new();
        writeln!(&mut output, "Found {} file(s) to rename!", self.count).unwrap();
        if verbose {
            for entry in &self.entries {
                writeln!(
                    &mut output,
                    "{} -> {}",
                    entry.from.display(),
                    entry.to.display()
                )
                .unwrap();
            }
        }
        output
    }

    /// Renders the report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for PlanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} file(s) planned", self.count)
    }
}
