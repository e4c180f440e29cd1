//! Calculator configuration.
//!
//! Priority: explicit overrides (CLI flags) > environment > defaults.
//!
//! - `BAZI_CALENDAR_CMD`: command line of an external calendar converter
//!   (see [`CommandConverter`]).
//! - `BAZI_APPROXIMATE`: `1`/`true`/`yes` forces the approximate arithmetic
//!   even when a converter is configured.

use tracing::info;

use crate::calculator::PillarCalculator;
use crate::external::CommandConverter;

/// Environment variable naming the external converter command.
pub const CALENDAR_CMD_ENV: &str = "BAZI_CALENDAR_CMD";

/// Environment variable forcing approximate arithmetic.
pub const APPROXIMATE_ENV: &str = "BAZI_APPROXIMATE";

/// How to build a [`PillarCalculator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// External converter command line, if any.
    pub calendar_command: Option<String>,
    /// Skip the converter even if one is configured.
    pub approximate_only: bool,
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl CalculatorConfig {
    /// Configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            calendar_command: lookup(CALENDAR_CMD_ENV).filter(|c| !c.trim().is_empty()),
            approximate_only: lookup(APPROXIMATE_ENV).is_some_and(|v| is_truthy(&v)),
        }
    }

    /// Apply explicit overrides on top of this configuration.
    ///
    /// A `Some` command replaces the configured one; `approximate` can only
    /// switch approximation on.
    pub fn with_overrides(mut self, calendar_command: Option<String>, approximate: bool) -> Self {
        if let Some(cmd) = calendar_command {
            info!(command = %cmd, "override: calendar command");
            self.calendar_command = Some(cmd);
        }
        if approximate {
            self.approximate_only = true;
        }
        self
    }

    /// The converter this configuration selects, if any.
    pub fn converter(&self) -> Option<CommandConverter> {
        if self.approximate_only {
            return None;
        }
        self.calendar_command
            .as_deref()
            .and_then(CommandConverter::from_command_line)
    }

    /// Build the calculator.
    pub fn build(&self) -> PillarCalculator {
        if self.approximate_only {
            return PillarCalculator::approximate_requested();
        }
        match self.converter() {
            Some(converter) => {
                info!(program = converter.program(), "using external calendar converter");
                PillarCalculator::with_converter(converter)
            }
            None => PillarCalculator::approximate(),
        }
    }
}
