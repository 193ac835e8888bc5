// ─────────────────────────────────────────────────────────────────────
// SCPN Halo Models — Brent
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Brent's method for one-dimensional root finding.
//!
//! Combines bisection, secant and inverse quadratic interpolation.
//! Behaviour matches `scipy.optimize.brentq`: the caller supplies a
//! bracket [a, b] with a sign change; convergence is guaranteed within
//! the iteration budget for continuous functions.

use halo_types::error::{HaloError, HaloResult};

/// Tolerances and iteration budget for [`brentq`].
#[derive(Debug, Clone)]
pub struct BrentConfig {
    pub max_iterations: usize,
    /// Absolute tolerance on the root location.
    pub xtol: f64,
    /// Relative tolerance on the root location.
    pub rtol: f64,
}

impl Default for BrentConfig {
    fn default() -> Self {
        BrentConfig {
            max_iterations: 100,
            xtol: 1.0e-12,
            rtol: 4.0 * f64::EPSILON,
        }
    }
}

/// Find a root of `f` in the bracket [a, b].
///
/// Errors with `ConvergenceFailed` when the bracket carries no sign
/// change, when `f` is non-finite at an endpoint, or when the
/// iteration budget is exhausted.
pub fn brentq<F>(f: F, a: f64, b: f64, config: &BrentConfig) -> HaloResult<f64>
where
    F: Fn(f64) -> f64,
{
    let mut xa = a;
    let mut xb = b;
    let mut fa = f(xa);
    let mut fb = f(xb);

    if !fa.is_finite() || !fb.is_finite() {
        return Err(HaloError::ConvergenceFailed {
            iteration: 0,
            message: format!("function not finite at bracket endpoints [{a}, {b}]"),
        });
    }
    if fa == 0.0 {
        return Ok(xa);
    }
    if fb == 0.0 {
        return Ok(xb);
    }
    if fa.signum() == fb.signum() {
        return Err(HaloError::ConvergenceFailed {
            iteration: 0,
            message: format!("no sign change in bracket [{a}, {b}]"),
        });
    }

    let mut xc = xa;
    let mut fc = fa;
    let mut d = xb - xa;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if (fb > 0.0) == (fc > 0.0) {
            xc = xa;
            fc = fa;
            d = xb - xa;
            e = d;
        }
        if fc.abs() < fb.abs() {
            xa = xb;
            xb = xc;
            xc = xa;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * config.rtol * xb.abs() + 0.5 * config.xtol;
        let xm = 0.5 * (xc - xb);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(xb);
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Interpolation step: secant when only two points are
            // distinct, inverse quadratic otherwise.
            let s = fb / fa;
            let mut p: f64;
            let mut q: f64;
            if xa == xc {
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                let qq = fa / fc;
                let r = fb / fc;
                p = s * (2.0 * xm * qq * (qq - r) - (xb - xa) * (r - 1.0));
                q = (qq - 1.0) * (r - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        xa = xb;
        fa = fb;
        if d.abs() > tol1 {
            xb += d;
        } else {
            xb += tol1.copysign(xm);
        }
        fb = f(xb);
        if !fb.is_finite() {
            return Err(HaloError::ConvergenceFailed {
                iteration,
                message: format!("function not finite at x = {xb}"),
            });
        }
    }

    Err(HaloError::ConvergenceFailed {
        iteration: config.max_iterations,
        message: format!("no convergence within {} iterations", config.max_iterations),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_root() {
        let root = brentq(|x| x * x * x - 2.0, 0.0, 2.0, &BrentConfig::default()).unwrap();
        assert!((root - 2.0_f64.cbrt()).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_root() {
        let root = brentq(|x| x.cos(), 0.0, 3.0, &BrentConfig::default()).unwrap();
        assert!((root - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn test_root_at_endpoint() {
        let root = brentq(|x| x, 0.0, 1.0, &BrentConfig::default()).unwrap();
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_no_sign_change() {
        let err = brentq(|x| x * x + 1.0, -1.0, 1.0, &BrentConfig::default()).unwrap_err();
        match err {
            HaloError::ConvergenceFailed { iteration, .. } => assert_eq!(iteration, 0),
            other => panic!("expected ConvergenceFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_steep_function() {
        // Mean-density style residual: steep near the origin.
        let root = brentq(
            |x| 1.0 / (x * x) - 25.0,
            1e-6,
            10.0,
            &BrentConfig::default(),
        )
        .unwrap();
        assert!((root - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_iteration_budget_respected() {
        let config = BrentConfig {
            max_iterations: 2,
            xtol: 1e-300,
            rtol: f64::EPSILON,
        };
        // Two iterations cannot localize the root of a transcendental
        // function to 1e-300.
        let result = brentq(|x| x.exp() - 10.0, 0.0, 5.0, &config);
        assert!(matches!(
            result,
            Err(HaloError::ConvergenceFailed { .. })
        ));
    }
}
