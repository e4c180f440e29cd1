//! Pillars from an external calendar-conversion capability.
//!
//! The converter is a black box: given a civil date-time it answers with the
//! four stem-branch strings of the traditional calendar. It is assumed to be
//! more accurate than the closed-form approximation (solar-term month
//! boundaries, Lichun year boundary, late-Zi day rollover).

use std::process::Command;

use tracing::debug;

use crate::civil::CivilDateTime;
use crate::error::{ConvertError, PillarError};
use crate::source::{FourPillars, PillarSource};

/// Solar → traditional calendar conversion.
pub trait CalendarConverter: Send + Sync {
    /// Year, month, day and hour pillar strings (e.g. `["甲辰", "丙寅", ...]`)
    /// for a civil date-time.
    fn convert(&self, at: &CivilDateTime) -> Result<[String; 4], ConvertError>;
}

/// [`PillarSource`] backed by a [`CalendarConverter`].
///
/// Converter answers that do not parse as pillars are reported as errors.
#[derive(Debug, Clone)]
pub struct ExternalCalendarSource<C> {
    converter: C,
}

impl<C: CalendarConverter> ExternalCalendarSource<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }
}

impl<C: CalendarConverter> PillarSource for ExternalCalendarSource<C> {
    fn name(&self) -> &'static str {
        "external"
    }

    fn four_pillars(&self, at: &CivilDateTime) -> Result<FourPillars, PillarError> {
        let [year, month, day, hour] = self.converter.convert(at)?;
        Ok(FourPillars {
            year: year.parse()?,
            month: month.parse()?,
            day: day.parse()?,
            hour: hour.parse()?,
        })
    }
}

/// Converter that runs an external program.
///
/// The program is invoked as `PROGRAM [ARGS..] YEAR MONTH DAY HOUR` and must
/// print four whitespace-separated pillars on stdout, in year, month, day,
/// hour order.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed leading argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Split a command line on whitespace into program and arguments.
    ///
    /// Returns `None` for a blank command line. No shell quoting is applied.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let program = words.next()?;
        Some(Self {
            program: program.to_string(),
            args: words.map(str::to_string).collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl CalendarConverter for CommandConverter {
    fn convert(&self, at: &CivilDateTime) -> Result<[String; 4], ConvertError> {
        debug!(program = %self.program, %at, "invoking calendar converter");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(at.year().to_string())
            .arg(at.month().to_string())
            .arg(at.day().to_string())
            .arg(at.hour().to_string())
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| ConvertError::Failed(format!("non-UTF-8 output: {e}")))?;
        parse_pillar_line(&stdout)
    }
}

/// Split converter output into exactly four fields.
fn parse_pillar_line(text: &str) -> Result<[String; 4], ConvertError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    match fields.as_slice() {
        [y, m, d, h] => Ok([y.to_string(), m.to_string(), d.to_string(), h.to_string()]),
        _ => Err(ConvertError::Failed(format!(
            "expected 4 pillars, got {}: {:?}",
            fields.len(),
            text.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::BaseError;

    struct Fixed([&'static str; 4]);

    impl CalendarConverter for Fixed {
        fn convert(&self, _at: &CivilDateTime) -> Result<[String; 4], ConvertError> {
            Ok(self.0.map(String::from))
        }
    }

    fn at() -> CivilDateTime {
        CivilDateTime::new(2000, 1, 1, 0).unwrap()
    }

    #[test]
    fn parses_converter_answer() {
        let source = ExternalCalendarSource::new(Fixed(["己卯", "丙子", "戊午", "壬子"]));
        let p = source.four_pillars(&at()).unwrap();
        assert_eq!(p.to_string(), "己卯 丙子 戊午 壬子");
    }

    #[test]
    fn rejects_unparseable_answer() {
        let source = ExternalCalendarSource::new(Fixed(["己卯", "丙子", "XX", "壬子"]));
        assert_eq!(
            source.four_pillars(&at()),
            Err(PillarError::Base(BaseError::UnknownStem('X')))
        );
    }

    #[test]
    fn pillar_line_needs_four_fields() {
        assert_eq!(
            parse_pillar_line("己卯 丙子 戊午 壬子\n").unwrap(),
            ["己卯", "丙子", "戊午", "壬子"].map(String::from)
        );
        assert!(parse_pillar_line("己卯 丙子").is_err());
        assert!(parse_pillar_line("").is_err());
    }

    #[test]
    fn command_line_split() {
        let c = CommandConverter::from_command_line("  lunar-cli --ganzhi  ").unwrap();
        assert_eq!(c.program(), "lunar-cli");
        assert_eq!(c.args(), ["--ganzhi".to_string()]);
        assert_eq!(CommandConverter::from_command_line("   "), None);
    }

    #[test]
    fn missing_program_is_unavailable() {
        let c = CommandConverter::new("bazi-no-such-calendar-program");
        assert!(matches!(c.convert(&at()), Err(ConvertError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[test]
    fn runs_program_and_reads_stdout() {
        // sh -c SCRIPT NAME YEAR MONTH DAY HOUR: the date fields land in $1..$4.
        let c = CommandConverter::new("sh")
            .arg("-c")
            .arg("test \"$1-$2-$3-$4\" = 2000-1-1-0 && echo 己卯 丙子 戊午 壬子")
            .arg("converter");
        assert_eq!(
            c.convert(&at()).unwrap(),
            ["己卯", "丙子", "戊午", "壬子"].map(String::from)
        );
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failure() {
        let c = CommandConverter::new("sh").arg("-c").arg("exit 3");
        assert!(matches!(c.convert(&at()), Err(ConvertError::Failed(_))));
    }
}
