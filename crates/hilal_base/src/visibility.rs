//! Arcus visionis crescent criterion.
//!
//! The elongation λ_T − λ_S between moon and sun follows from
//!
//! ```text
//! cos(λ_T − λ_S) = cos β · [ √(1 − (sin β / sin βmax)²) · cos φ
//!                          + (sin β / sin βmax) · (sin φ / cos φ) ]
//! ```
//!
//! and the crescent is taken as visible when the elongation reaches 10°.
//!
//! [`evaluate_visibility`] is the bare formula: out-of-domain inputs
//! propagate as NaN and read as "not visible". [`evaluate_visibility_checked`]
//! validates the same computation and reports why it is undefined.

use crate::error::HilalError;
use crate::lunar_params::LunarParameters;

/// Minimum moon-sun elongation in degrees for a visible crescent (inclusive).
pub const VISIBILITY_THRESHOLD_DEG: f64 = 10.0;

/// Divisors smaller than this in magnitude count as zero in the checked path.
///
/// cos(90°) evaluates to about 6e-17 in radians arithmetic, never exactly 0.
const ZERO_DIVISOR_EPS: f64 = 1e-12;

/// Intermediate terms of the criterion, kept for display and debugging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTerms {
    pub cos_beta: f64,
    pub sin_beta: f64,
    /// sin β / sin βmax
    pub ratio: f64,
    /// √(1 − ratio²)
    pub term1: f64,
    /// ratio · sin φ / cos φ
    pub term2: f64,
    /// cos(λ_T − λ_S)
    pub cos_result: f64,
}

/// Outcome of the criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityResult {
    /// Moon-sun elongation in degrees; NaN when undefined.
    pub angular_separation_deg: f64,
    pub is_visible: bool,
    pub terms: VisibilityTerms,
}

/// Whether an elongation clears the visibility threshold. NaN never does.
pub fn meets_threshold(angular_separation_deg: f64) -> bool {
    angular_separation_deg >= VISIBILITY_THRESHOLD_DEG
}

/// Evaluate the criterion. Never fails; undefined results are NaN.
///
/// All angles in degrees; `sin_phi` is used as given.
pub fn evaluate_visibility(
    beta_deg: f64,
    max_beta_deg: f64,
    phi_deg: f64,
    sin_phi: f64,
) -> VisibilityResult {
    let beta = beta_deg.to_radians();
    let max_beta = max_beta_deg.to_radians();
    let phi = phi_deg.to_radians();

    let cos_beta = beta.cos();
    let sin_beta = beta.sin();
    let sin_max_beta = max_beta.sin();
    let cos_phi = phi.cos();

    let ratio = sin_beta / sin_max_beta;
    let term1 = (1.0 - ratio * ratio).sqrt();
    let term2 = ratio * (sin_phi / cos_phi);
    let cos_result = cos_beta * (term1 * cos_phi + term2);

    let angular_separation_deg = cos_result.acos().to_degrees();
    let is_visible = meets_threshold(angular_separation_deg);

    let terms = VisibilityTerms {
        cos_beta,
        sin_beta,
        ratio,
        term1,
        term2,
        cos_result,
    };
    tracing::trace!(?terms, angular_separation_deg, is_visible, "visibility terms");
    if angular_separation_deg.is_nan() {
        tracing::warn!(
            beta_deg,
            max_beta_deg,
            phi_deg,
            sin_phi,
            "angular separation undefined for these parameters"
        );
    }

    VisibilityResult {
        angular_separation_deg,
        is_visible,
        terms,
    }
}

/// Evaluate the criterion for a parameter set.
pub fn evaluate_parameters(params: &LunarParameters) -> VisibilityResult {
    evaluate_visibility(
        params.beta_deg,
        params.max_beta_deg,
        params.phi_deg,
        params.sin_phi,
    )
}

/// Evaluate the criterion, rejecting inputs for which it is undefined.
///
/// Checks, in order: finite inputs, non-zero sin βmax and cos φ,
/// |ratio| ≤ 1, and |cos(λ_T − λ_S)| ≤ 1. On success the result is
/// identical to [`evaluate_visibility`].
pub fn evaluate_visibility_checked(
    beta_deg: f64,
    max_beta_deg: f64,
    phi_deg: f64,
    sin_phi: f64,
) -> Result<VisibilityResult, HilalError> {
    for (name, value) in [
        ("beta", beta_deg),
        ("maxBeta", max_beta_deg),
        ("phi", phi_deg),
        ("sinPhi", sin_phi),
    ] {
        if !value.is_finite() {
            return Err(HilalError::NonFiniteInput(name));
        }
    }
    if max_beta_deg.to_radians().sin().abs() < ZERO_DIVISOR_EPS {
        return Err(HilalError::DivisionByZero("sin(maxBeta)"));
    }
    if phi_deg.to_radians().cos().abs() < ZERO_DIVISOR_EPS {
        return Err(HilalError::DivisionByZero("cos(phi)"));
    }

    let result = evaluate_visibility(beta_deg, max_beta_deg, phi_deg, sin_phi);
    let terms = &result.terms;
    if terms.ratio.is_nan() || terms.ratio.abs() > 1.0 {
        return Err(HilalError::InvalidAngleRange {
            quantity: "sin(beta)/sin(maxBeta)",
            value: terms.ratio,
        });
    }
    if terms.cos_result.is_nan() || terms.cos_result.abs() > 1.0 {
        return Err(HilalError::InvalidAngleRange {
            quantity: "cos(separation)",
            value: terms.cos_result,
        });
    }
    Ok(result)
}

/// Checked evaluation for a parameter set.
pub fn evaluate_parameters_checked(
    params: &LunarParameters,
) -> Result<VisibilityResult, HilalError> {
    evaluate_visibility_checked(
        params.beta_deg,
        params.max_beta_deg,
        params.phi_deg,
        params.sin_phi,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sin_deg(x: f64) -> f64 {
        x.to_radians().sin()
    }

    #[test]
    fn mean_parameters_regression() {
        let r = evaluate_visibility(-4.48, 5.148, 1.22, sin_deg(1.22));
        assert!(
            (r.angular_separation_deg - 61.834_062_694_294_86).abs() < 1e-9,
            "separation = {}",
            r.angular_separation_deg
        );
        assert!(r.is_visible);
        let t = r.terms;
        assert!((t.cos_beta - 0.996_944_660_387_867).abs() < 1e-12);
        assert!((t.sin_beta - (-0.078_111_101_158_033_53)).abs() < 1e-12);
        assert!((t.ratio - (-0.870_525_206_279_937_5)).abs() < 1e-12);
        assert!((t.term1 - 0.492_123_831_196_247_2).abs() < 1e-12);
        assert!((t.term2 - (-0.018_538_909_792_844_3)).abs() < 1e-12);
        assert!((t.cos_result - 0.472_026_741_053_587_8).abs() < 1e-12);
    }

    #[test]
    fn zero_beta_reduces_to_phi() {
        // ratio = 0, so cos(sep) = cos(phi)
        let r = evaluate_visibility(0.0, 5.148, 1.22, sin_deg(1.22));
        let sep = r.angular_separation_deg;
        assert!((sep - 1.22).abs() < 1e-9, "sep = {sep}");
        assert!(!r.is_visible);
    }

    #[test]
    fn beta_at_maximum_gives_quadrature() {
        let r = evaluate_visibility(-5.148, 5.148, 0.0, 0.0);
        assert!((r.angular_separation_deg - 90.0).abs() < 1e-9);
        assert_eq!(r.terms.term1, 0.0);
    }

    #[test]
    fn deterministic_bitwise() {
        let a = evaluate_visibility(-4.3, 5.148, 1.4, sin_deg(1.4));
        let b = evaluate_visibility(-4.3, 5.148, 1.4, sin_deg(1.4));
        assert_eq!(
            a.angular_separation_deg.to_bits(),
            b.angular_separation_deg.to_bits()
        );
        assert_eq!(a.is_visible, b.is_visible);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(meets_threshold(10.0));
        assert!(!meets_threshold(9.999_999_999));
        assert!(meets_threshold(10.000_000_001));
    }

    #[test]
    fn nan_separation_is_not_visible() {
        assert!(!meets_threshold(f64::NAN));
        // |ratio| > 1: sqrt of a negative number
        let r = evaluate_visibility(6.0, 5.148, 1.22, sin_deg(1.22));
        assert!(r.terms.ratio > 1.0);
        assert!(r.terms.term1.is_nan());
        assert!(r.angular_separation_deg.is_nan());
        assert!(!r.is_visible);
    }

    #[test]
    fn zero_max_beta_propagates_quietly() {
        let r = evaluate_visibility(-4.48, 0.0, 1.22, sin_deg(1.22));
        assert!(r.terms.ratio.is_infinite());
        assert!(r.angular_separation_deg.is_nan());
        assert!(!r.is_visible);
    }

    #[test]
    fn checked_matches_quiet_on_valid_input() {
        let quiet = evaluate_visibility(-4.48, 5.148, 1.22, sin_deg(1.22));
        let checked = evaluate_visibility_checked(-4.48, 5.148, 1.22, sin_deg(1.22));
        assert_eq!(checked, Ok(quiet));
    }

    #[test]
    fn checked_rejects_ratio_out_of_range() {
        match evaluate_visibility_checked(6.0, 5.148, 1.22, sin_deg(1.22)) {
            Err(HilalError::InvalidAngleRange { quantity, value }) => {
                assert_eq!(quantity, "sin(beta)/sin(maxBeta)");
                assert!(value > 1.0);
            }
            other => panic!("expected InvalidAngleRange, got {other:?}"),
        }
    }

    #[test]
    fn checked_rejects_zero_divisors() {
        assert_eq!(
            evaluate_visibility_checked(-4.48, 0.0, 1.22, 0.02),
            Err(HilalError::DivisionByZero("sin(maxBeta)"))
        );
        assert_eq!(
            evaluate_visibility_checked(-4.48, 5.148, 90.0, 1.0),
            Err(HilalError::DivisionByZero("cos(phi)"))
        );
    }

    #[test]
    fn checked_rejects_non_finite() {
        assert_eq!(
            evaluate_visibility_checked(f64::NAN, 5.148, 1.22, 0.02),
            Err(HilalError::NonFiniteInput("beta"))
        );
        assert_eq!(
            evaluate_visibility_checked(-4.48, 5.148, 1.22, f64::INFINITY),
            Err(HilalError::NonFiniteInput("sinPhi"))
        );
    }

    #[test]
    fn checked_rejects_inconsistent_sine() {
        // A large sinPhi pushes cos(sep) below -1.
        let err = evaluate_visibility_checked(-4.48, 5.148, 1.22, 40.0).unwrap_err();
        assert!(
            matches!(err, HilalError::InvalidAngleRange { quantity: "cos(separation)", .. }),
            "err = {err:?}"
        );
    }

    #[test]
    fn parameters_wrapper_agrees() {
        let p = LunarParameters::new(-4.48, 5.148, 1.22);
        let direct = evaluate_visibility(-4.48, 5.148, 1.22, sin_deg(1.22));
        assert_eq!(evaluate_parameters(&p), direct);
        assert!(evaluate_parameters_checked(&p).is_ok());
    }
}
