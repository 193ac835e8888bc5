// ─────────────────────────────────────────────────────────────────────
// SCPN Halo Models — Lensing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Projected (line-of-sight) quantities of the NFW profile.
//!
//! Closed forms from Wright & Brainerd (2000). The inverse secant is
//! evaluated over the complex plane so a single expression covers both
//! x < 1 and x > 1; the real part is the physical value. At x = 1 the
//! expressions are 0/0 with finite limits, handled explicitly.

use num_complex::Complex64;
use std::f64::consts::FRAC_PI_2;

use halo_types::error::HaloResult;
use halo_types::units::{Quantity, Unit};

use crate::nfw::{shape, HaloProfile};

/// Half-width of the window around x = 1 where the analytic limit
/// replaces the closed form.
const X_UNITY_EPS: f64 = 1.0e-6;

/// Inverse secant of a complex number:
/// arcsec(z) = π/2 + i ln(√(1 − 1/z²) + i/z).
fn arcsec(z: Complex64) -> Complex64 {
    let val1 = Complex64::i() / z;
    let val2 = (Complex64::new(1.0, 0.0) - 1.0 / (z * z)).sqrt();
    Complex64::new(FRAC_PI_2, 0.0) + Complex64::i() * (val2 + val1).ln()
}

/// arcsec(x) / √(x² − 1), real part; continuous through x = 1 where
/// it equals 1.
fn arcsec_ratio(x: f64) -> f64 {
    let z = Complex64::new(x, 0.0);
    let root = Complex64::new(x * x - 1.0, 0.0).sqrt();
    (arcsec(z) / root).re
}

impl HaloProfile {
    /// Mass inside a cylinder of projected radius r.
    pub fn projected_mass(&self, r: Quantity) -> HaloResult<Quantity> {
        let x = self.radius_arg(r)? / self.characteristic_radius().value();
        let fc = shape(self.concentration());
        let f = if (x - 1.0).abs() < X_UNITY_EPS {
            1.0
        } else {
            arcsec_ratio(x)
        };
        let m_proj = self.mass().value() / fc * ((x / 2.0).ln() + f);
        Ok(Quantity::solar_masses(m_proj))
    }

    /// Surface mass density Σ(r), projected along the line of sight.
    pub fn surface_density(&self, r: Quantity) -> HaloResult<Quantity> {
        let r_s = self.characteristic_radius().value();
        let x = self.radius_arg(r)? / r_s;
        let rho_s = self.characteristic_density().value();
        let sigma = if (x - 1.0).abs() < X_UNITY_EPS {
            2.0 * r_s * rho_s / 3.0
        } else {
            let z = Complex64::new(x, 0.0);
            let root = Complex64::new(x * x - 1.0, 0.0).sqrt();
            let val1 = 1.0 / (x * x - 1.0);
            let val2 = (arcsec(z) / (root * root * root)).re;
            2.0 * r_s * rho_s * (val1 - val2)
        };
        Ok(Quantity::new(sigma, Unit::SolarMassPerMpc2))
    }

    /// Excess surface density ΔΣ(r) = Σ̄(<r) − Σ(r), the weak-lensing
    /// shear observable.
    pub fn excess_surface_density(&self, r: Quantity) -> HaloResult<Quantity> {
        let r_s = self.characteristic_radius().value();
        let x = self.radius_arg(r)? / r_s;
        let rho_s = self.characteristic_density().value();
        let delta_sigma = if (x - 1.0).abs() < X_UNITY_EPS {
            r_s * rho_s * (10.0 / 3.0 + 4.0 * (0.5_f64).ln())
        } else {
            let z = Complex64::new(x, 0.0);
            let root = Complex64::new(x * x - 1.0, 0.0).sqrt();
            let val1 = 1.0 / (1.0 - x * x);
            let num = arcsec(z) * (3.0 * x * x - 2.0);
            let div = root * root * root * (x * x);
            let val2 = (num / div).re;
            let val3 = 2.0 * (x / 2.0).ln() / (x * x);
            2.0 * r_s * rho_s * (val1 + val2 + val3)
        };
        Ok(Quantity::new(delta_sigma, Unit::SolarMassPerMpc2))
    }
}
