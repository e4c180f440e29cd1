//! Four-pillar calculator with per-call fallback.
//!
//! A calculator is built with an optional primary [`PillarSource`]. Every
//! calculation tries the primary first; if it errors, that one calculation
//! is answered by the [`ApproximatePillarSource`] and the primary stays in
//! place for the next call. A primary that reports its converter as
//! unavailable is disabled for the life of the calculator. Without a usable
//! primary, all calculations use the approximation and a warning is logged
//! once per process.

use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::approximate::ApproximatePillarSource;
use crate::civil::CivilDateTime;
use crate::error::{ConvertError, PillarError};
use crate::external::{CalendarConverter, ExternalCalendarSource};
use crate::source::{FourPillars, PillarSource};

static UNAVAILABLE_WARNING: Once = Once::new();

fn warn_unavailable(reason: &str) {
    UNAVAILABLE_WARNING.call_once(|| {
        warn!(reason, "calendar converter unavailable; using approximate pillar arithmetic");
    });
}

/// Computes four pillars from a civil date and hour.
pub struct PillarCalculator {
    primary: Option<Box<dyn PillarSource>>,
    primary_disabled: AtomicBool,
    fallback: ApproximatePillarSource,
}

impl PillarCalculator {
    fn new(primary: Option<Box<dyn PillarSource>>) -> Self {
        Self {
            primary,
            primary_disabled: AtomicBool::new(false),
            fallback: ApproximatePillarSource,
        }
    }

    /// Calculator with no calendar converter.
    pub fn approximate() -> Self {
        warn_unavailable("no calendar converter configured");
        Self::new(None)
    }

    /// Calculator that uses the approximation because it was asked to.
    pub fn approximate_requested() -> Self {
        info!("approximate pillar arithmetic requested; calendar converter skipped");
        Self::new(None)
    }

    /// Calculator that tries `source` first.
    pub fn with_source(source: impl PillarSource + 'static) -> Self {
        Self::new(Some(Box::new(source)))
    }

    /// Calculator that tries an external calendar converter first.
    pub fn with_converter<C: CalendarConverter + 'static>(converter: C) -> Self {
        Self::with_source(ExternalCalendarSource::new(converter))
    }

    /// Whether a primary source is configured and still in use.
    pub fn has_primary(&self) -> bool {
        self.active_primary().is_some()
    }

    fn active_primary(&self) -> Option<&dyn PillarSource> {
        if self.primary_disabled.load(Ordering::Relaxed) {
            return None;
        }
        self.primary.as_deref()
    }

    /// Four pillars for a civil date and hour (0-23).
    ///
    /// The only error is an invalid date or hour; converter failures are
    /// absorbed by the fallback.
    pub fn compute(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    ) -> Result<FourPillars, PillarError> {
        let at = CivilDateTime::new(year, month, day, hour)?;
        Ok(self.compute_at(&at))
    }

    /// Four pillars for an already-validated civil date-time.
    pub fn compute_at(&self, at: &CivilDateTime) -> FourPillars {
        if let Some(primary) = self.active_primary() {
            match primary.four_pillars(at) {
                Ok(pillars) => {
                    debug!(source = primary.name(), %at, %pillars, "pillars computed");
                    return pillars;
                }
                Err(PillarError::Conversion(ConvertError::Unavailable(reason))) => {
                    self.primary_disabled.store(true, Ordering::Relaxed);
                    debug!(source = primary.name(), %reason, "pillar source disabled");
                    warn_unavailable(&reason);
                }
                Err(e) => {
                    warn!(
                        source = primary.name(),
                        %at,
                        error = %e,
                        "pillar source failed; using approximation"
                    );
                }
            }
        }
        let pillars = self.fallback.pillars(at);
        debug!(source = self.fallback.name(), %at, %pillars, "pillars computed");
        pillars
    }
}

impl std::fmt::Debug for PillarCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PillarCalculator")
            .field("primary", &self.primary.as_ref().map(|p| p.name()))
            .field("primary_disabled", &self.primary_disabled.load(Ordering::Relaxed))
            .finish()
    }
}
