//! End-to-end crescent report for a month and a place.
//!
//! Pipeline: first day of the month -> moon age -> nearest new moon ->
//! synthesized parameters at the new moon -> visibility criterion. The
//! crescent is looked for on the evening after the new moon, and the sunset
//! estimate is given for that evening.

use std::fmt::{Display, Formatter};

use hilal_time::{CalendarDate, CalendarMonth};

use crate::error::HilalError;
use crate::jitter::{FixedJitter, JitterSource, RngJitter};
use crate::location::GeoLocation;
use crate::lunar_params::{LunarParameters, synthesize_lunar_parameters};
use crate::moon_age::moon_age;
use crate::new_moon::nearest_new_moon;
use crate::sunset::{SunsetTime, estimate_sunset};
use crate::visibility::{VisibilityResult, evaluate_parameters, evaluate_parameters_checked};

/// Options for a crescent report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// Seed for the parameter jitter. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Use the jitter-free central estimate instead of random jitter.
    pub central_estimate: bool,
    /// Route evaluation through the validating criterion, turning
    /// undefined geometry into an error instead of a "not visible" verdict.
    pub checked: bool,
}

/// Everything a caller needs to present a crescent estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct CrescentReport {
    pub month: CalendarMonth,
    pub location: GeoLocation,
    /// Moon age at 00:00 on the first of the month.
    pub moon_age_days: f64,
    pub new_moon: CalendarDate,
    /// Evening on which the crescent is sought (day after the new moon).
    pub observation_date: CalendarDate,
    pub parameters: LunarParameters,
    pub visibility: VisibilityResult,
    pub sunset: SunsetTime,
}

/// Verdict for a criterion result computed directly from user parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvancedReport {
    pub parameters: LunarParameters,
    pub visibility: VisibilityResult,
}

fn verdict(is_visible: bool) -> &'static str {
    if is_visible {
        "Moon Will Be Visible!"
    } else {
        "Moon Not Visible"
    }
}

/// Build a crescent report, drawing jitter as `config` specifies.
pub fn crescent_report(
    month: &CalendarMonth,
    location: &GeoLocation,
    config: &ReportConfig,
) -> Result<CrescentReport, HilalError> {
    if config.central_estimate {
        crescent_report_with(month, location, &mut FixedJitter::center(), config.checked)
    } else {
        let mut jitter = RngJitter::seeded(config.seed);
        crescent_report_with(month, location, &mut jitter, config.checked)
    }
}

/// Build a crescent report with an explicit jitter source.
pub fn crescent_report_with<J: JitterSource + ?Sized>(
    month: &CalendarMonth,
    location: &GeoLocation,
    jitter: &mut J,
    checked: bool,
) -> Result<CrescentReport, HilalError> {
    let first_day = month.first_day();
    let moon_age_days = moon_age(&first_day);
    let new_moon = nearest_new_moon(&first_day);
    tracing::debug!(%month, moon_age_days, %new_moon, "located new moon");

    let parameters = synthesize_lunar_parameters(&new_moon, location, jitter);
    let visibility = if checked {
        evaluate_parameters_checked(&parameters)?
    } else {
        evaluate_parameters(&parameters)
    };

    let observation_date = new_moon.add_days(1);
    let sunset = estimate_sunset(location.latitude_deg, &observation_date)?;
    tracing::debug!(
        location = %location.display_name(),
        separation_deg = visibility.angular_separation_deg,
        is_visible = visibility.is_visible,
        %sunset,
        "crescent report ready"
    );

    Ok(CrescentReport {
        month: *month,
        location: location.clone(),
        moon_age_days,
        new_moon,
        observation_date,
        parameters,
        visibility,
        sunset,
    })
}

/// Evaluate user-supplied parameters ("advanced mode").
pub fn advanced_report(
    parameters: &LunarParameters,
    checked: bool,
) -> Result<AdvancedReport, HilalError> {
    let visibility = if checked {
        evaluate_parameters_checked(parameters)?
    } else {
        evaluate_parameters(parameters)
    };
    Ok(AdvancedReport {
        parameters: *parameters,
        visibility,
    })
}

impl Display for CrescentReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", verdict(self.visibility.is_visible))?;
        writeln!(f, "  Date:               {}", self.observation_date.format_long())?;
        writeln!(
            f,
            "  Angular separation: {:.2} deg",
            self.visibility.angular_separation_deg
        )?;
        writeln!(f, "  Moon age:           {:.1} days", self.moon_age_days)?;
        writeln!(f, "  New moon:           {}", self.new_moon)?;
        writeln!(f, "  Location:           {}", self.location.display_name())?;
        write!(f, "  Sunset:             {}", self.sunset)
    }
}

impl Display for AdvancedReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let p = &self.parameters;
        let t = &self.visibility.terms;
        writeln!(f, "{}", verdict(self.visibility.is_visible))?;
        writeln!(
            f,
            "  Angular separation: {:.2} deg",
            self.visibility.angular_separation_deg
        )?;
        writeln!(
            f,
            "  Inputs: beta={:.4} maxBeta={:.4} phi={:.4} sinPhi={:.6}",
            p.beta_deg, p.max_beta_deg, p.phi_deg, p.sin_phi
        )?;
        writeln!(
            f,
            "  cos(beta)={:.6} sin(beta)={:.6} ratio={:.6}",
            t.cos_beta, t.sin_beta, t.ratio
        )?;
        write!(
            f,
            "  term1={:.6} term2={:.6} cos(sep)={:.6}",
            t.term1, t.term2, t.cos_result
        )
    }
}
