//! Four-pillar (bazi) computation and five-element analysis.
//!
//! This crate provides:
//! - A [`PillarSource`] seam with an external-converter implementation and a
//!   closed-form approximation
//! - [`PillarCalculator`], which falls back to the approximation per call
//! - Five-element aggregation ([`analyze`]) and nayin lookup ([`Reading`])
//! - A text report and JSON output for readings
//!
//! ```
//! use bazi_pillars::{PillarCalculator, Reading};
//!
//! let calc = PillarCalculator::approximate();
//! let pillars = calc.compute(2000, 1, 1, 0).unwrap();
//! assert_eq!(pillars.day.to_string(), "庚辰");
//!
//! let reading = Reading::from_pillars(pillars);
//! assert_eq!(reading.wuxing.count.total(), 10.0);
//! ```

pub mod analysis;
pub mod approximate;
pub mod calculator;
pub mod civil;
pub mod config;
pub mod error;
pub mod external;
pub mod reading;
pub mod report;
pub mod source;

pub use analysis::{ElementCounts, ElementProfile, analyze};
pub use approximate::{
    ApproximatePillarSource, day_pillar, hour_pillar, month_pillar, year_pillar,
};
pub use calculator::PillarCalculator;
pub use civil::CivilDateTime;
pub use config::CalculatorConfig;
pub use error::{ConvertError, PillarError};
pub use external::{CalendarConverter, CommandConverter, ExternalCalendarSource};
pub use reading::{NayinInfo, Reading};
pub use report::render_text;
pub use source::{FourPillars, PillarSource};
