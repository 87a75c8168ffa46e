//! Approximate new-crescent visibility for a month and a place.
//!
//! This crate provides:
//! - Moon age from a mean-motion lunation model
//! - The nearest new moon to a calendar date
//! - Synthesized lunar parameters (β, βmax, φ, sin φ) with pluggable jitter
//! - The arcus visionis criterion, quiet and validated variants
//! - A rough sunset estimate for annotating results
//! - A month report combining all of the above
//!
//! The parameters are a deliberately simple model, not an ephemeris. Results
//! are indicative only.

pub mod error;
pub mod jitter;
pub mod location;
pub mod lunar_params;
pub mod moon_age;
pub mod new_moon;
pub mod report;
pub mod sunset;
pub mod util;
pub mod visibility;

pub use error::HilalError;
pub use jitter::{FixedJitter, JitterSource, RngJitter};
pub use location::GeoLocation;
pub use lunar_params::{LunarParameters, MAX_BETA_DEG, synthesize_lunar_parameters};
pub use moon_age::{REFERENCE_NEW_MOON_JD, SYNODIC_MONTH_DAYS, moon_age, moon_age_at_jd};
pub use new_moon::{
    NEW_MOON_AGE_SPLIT_DAYS, NEW_MOON_STEP_DAYS, nearest_new_moon, new_moon_offset_days,
};
pub use report::{
    AdvancedReport, CrescentReport, ReportConfig, advanced_report, crescent_report,
    crescent_report_with,
};
pub use sunset::{SunsetTime, estimate_sunset, sunset_hours};
pub use visibility::{
    VISIBILITY_THRESHOLD_DEG, VisibilityResult, VisibilityTerms, evaluate_parameters,
    evaluate_parameters_checked, evaluate_visibility, evaluate_visibility_checked,
    meets_threshold,
};

// Re-export calendar types so callers don't need to depend on hilal_time directly.
pub use hilal_time::{CalendarDate, CalendarMonth};
