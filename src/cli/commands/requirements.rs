//! Requirements command implementation.
//!
//! The `car-diagnostics requirements` command prints the required-parts
//! table the diagnose command checks against.

use crate::cli::args::RequirementsArgs;
use crate::error::{DiagnosticsError, Result};
use crate::record::RequiredParts;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The requirements command implementation.
pub struct RequirementsCommand {
    args: RequirementsArgs,
    requirements: RequiredParts,
}

impl RequirementsCommand {
    /// Create a new requirements command.
    pub fn new(args: RequirementsArgs, requirements: RequiredParts) -> Self {
        Self { args, requirements }
    }
}

impl Command for RequirementsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(&self.requirements)
                .map_err(|e| DiagnosticsError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let width = self
            .requirements
            .iter()
            .map(|(part_type, _)| part_type.to_string().len())
            .max()
            .unwrap_or(0);

        for (part_type, count) in self.requirements.iter() {
            ui.message(&format!(
                "{:<width$}  {}",
                part_type.to_string(),
                count,
                width = width
            ));
        }

        Ok(CommandResult::success())
    }
}
