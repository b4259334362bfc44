//! Diagnose command implementation.
//!
//! The `car-diagnostics diagnose` command loads one vehicle record and runs
//! the diagnostic engine on it.

use tracing::debug;

use crate::cli::args::DiagnoseArgs;
use crate::diagnostics::{DiagnosticEngine, JsonFormatter, OutputFormat};
use crate::error::Result;
use crate::record::{load_record, RecordSource, RequiredParts};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The diagnose command implementation.
pub struct DiagnoseCommand {
    args: DiagnoseArgs,
    requirements: RequiredParts,
}

impl DiagnoseCommand {
    /// Create a new diagnose command.
    pub fn new(args: DiagnoseArgs, requirements: RequiredParts) -> Self {
        Self { args, requirements }
    }
}

impl Command for DiagnoseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = RecordSource::from_path(self.args.record.clone());
        debug!("Loading record from {}", source.name());

        let record = match load_record(&source) {
            Ok(record) => record,
            Err(e) => {
                ui.error(&format!(
                    "An error occurred attempting to load {}: {}",
                    source.name(),
                    e
                ));
                return Ok(CommandResult::failure(1));
            }
        };

        let engine = DiagnosticEngine::new(self.requirements.clone());

        match self.args.format {
            OutputFormat::Human => {
                engine.execute(&record, ui)?;
            }
            OutputFormat::Json => {
                let report = engine.run(&record)?;
                ui.message(&JsonFormatter::default().format(&report)?);
            }
        }

        // A failed verdict is a reported result, not a command failure.
        Ok(CommandResult::success())
    }
}
