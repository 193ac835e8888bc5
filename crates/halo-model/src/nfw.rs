// ─────────────────────────────────────────────────────────────────────
// SCPN Halo Models — NFW Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Navarro-Frenk-White density profile.
//!
//! ρ(r) = ρ_s / [(r/r_s)(1 + r/r_s)²]
//!
//! A halo is defined by its mass and concentration at one overdensity
//! threshold Δ relative to the critical or mean density at its
//! redshift. The scale radius r_s is fixed by that definition; every
//! other quantity, including the effective concentration under a
//! different threshold, follows from it.

use std::f64::consts::PI;
use std::fmt;

use ndarray::Array1;

use halo_math::brent::{brentq, BrentConfig};
use halo_types::error::{HaloError, HaloResult};
use halo_types::units::{Quantity, Unit};

use crate::cosmology::Cosmology;

/// Which background density the overdensity threshold refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverdensityReference {
    Critical,
    Mean,
}

/// Root bracket for the mean-density inversion, in x = r/r_s.
/// Wide enough for thresholds from Δ ≲ 1 up to well past 10^6.
const X_BRACKET_MIN: f64 = 1.0e-7;
const X_BRACKET_MAX: f64 = 1.0e4;

/// NFW mass shape function m(x) = ln(1+x) − x/(1+x).
pub(crate) fn shape(x: f64) -> f64 {
    (1.0 + x).ln() - x / (1.0 + x)
}

/// An NFW halo, immutable after construction.
///
/// Internally everything is held in the canonical working units
/// (M☉, Mpc, M☉/Mpc³); both reference densities at the halo redshift
/// are captured from the cosmology at construction, so instances are
/// independent of the collaborator's lifetime and freely shared
/// across threads.
#[derive(Debug, Clone)]
pub struct HaloProfile {
    mass: f64,
    concentration: f64,
    redshift: f64,
    overdensity: f64,
    reference: OverdensityReference,
    rho_crit: f64,
    rho_mean: f64,
    delta_c: f64,
    r_delta: f64,
    r_s: f64,
}

impl HaloProfile {
    /// Define a halo by its mass within the radius where the mean
    /// enclosed density is `overdensity` times the reference density.
    pub fn new(
        mass: Quantity,
        concentration: f64,
        redshift: f64,
        overdensity: f64,
        reference: OverdensityReference,
        cosmology: &impl Cosmology,
    ) -> HaloResult<Self> {
        let mass = mass.value_in(Unit::SolarMass)?;
        if !mass.is_finite() || mass <= 0.0 {
            return Err(HaloError::InvalidParameter(format!(
                "mass must be finite and > 0, got {mass} M_sun"
            )));
        }
        let (rho_crit, rho_mean) = Self::reference_densities(redshift, cosmology)?;
        let rho_def = match reference {
            OverdensityReference::Critical => rho_crit,
            OverdensityReference::Mean => rho_mean,
        };
        Self::validate_shape(concentration, redshift, overdensity)?;

        let r_delta = (3.0 * mass / (4.0 * PI * overdensity * rho_def)).cbrt();
        Ok(Self::from_parts(
            mass,
            concentration,
            redshift,
            overdensity,
            reference,
            rho_crit,
            rho_mean,
            r_delta,
        ))
    }

    /// Define a halo by its outer radius instead of its mass.
    pub fn from_radius(
        radius: Quantity,
        concentration: f64,
        redshift: f64,
        overdensity: f64,
        reference: OverdensityReference,
        cosmology: &impl Cosmology,
    ) -> HaloResult<Self> {
        let r_delta = radius.value_in(Unit::Megaparsec)?;
        if !r_delta.is_finite() || r_delta <= 0.0 {
            return Err(HaloError::InvalidParameter(format!(
                "radius must be finite and > 0, got {r_delta} Mpc"
            )));
        }
        let (rho_crit, rho_mean) = Self::reference_densities(redshift, cosmology)?;
        let rho_def = match reference {
            OverdensityReference::Critical => rho_crit,
            OverdensityReference::Mean => rho_mean,
        };
        Self::validate_shape(concentration, redshift, overdensity)?;

        let mass = 4.0 / 3.0 * PI * r_delta.powi(3) * overdensity * rho_def;
        Ok(Self::from_parts(
            mass,
            concentration,
            redshift,
            overdensity,
            reference,
            rho_crit,
            rho_mean,
            r_delta,
        ))
    }

    fn validate_shape(concentration: f64, redshift: f64, overdensity: f64) -> HaloResult<()> {
        if !concentration.is_finite() || concentration <= 0.0 {
            return Err(HaloError::InvalidParameter(format!(
                "concentration must be finite and > 0, got {concentration}"
            )));
        }
        if !redshift.is_finite() || redshift < 0.0 {
            return Err(HaloError::InvalidParameter(format!(
                "redshift must be finite and >= 0, got {redshift}"
            )));
        }
        if !overdensity.is_finite() || overdensity <= 0.0 {
            return Err(HaloError::InvalidParameter(format!(
                "overdensity must be finite and > 0, got {overdensity}"
            )));
        }
        Ok(())
    }

    fn reference_densities(
        redshift: f64,
        cosmology: &impl Cosmology,
    ) -> HaloResult<(f64, f64)> {
        let rho_crit = cosmology
            .critical_density(redshift)
            .value_in(Unit::SolarMassPerMpc3)?;
        let rho_mean = cosmology
            .mean_density(redshift)
            .value_in(Unit::SolarMassPerMpc3)?;
        if !rho_crit.is_finite() || rho_crit <= 0.0 || !rho_mean.is_finite() || rho_mean <= 0.0 {
            return Err(HaloError::InvalidParameter(format!(
                "cosmology returned non-positive density: rho_crit = {rho_crit}, \
                 rho_mean = {rho_mean} M_sun/Mpc^3"
            )));
        }
        Ok((rho_crit, rho_mean))
    }

    #[allow(clippy::too_many_arguments)]
    fn from_parts(
        mass: f64,
        concentration: f64,
        redshift: f64,
        overdensity: f64,
        reference: OverdensityReference,
        rho_crit: f64,
        rho_mean: f64,
        r_delta: f64,
    ) -> Self {
        let c = concentration;
        let delta_c = overdensity / 3.0 * c.powi(3) / shape(c);
        HaloProfile {
            mass,
            concentration,
            redshift,
            overdensity,
            reference,
            rho_crit,
            rho_mean,
            delta_c,
            r_delta,
            r_s: r_delta / c,
        }
    }

    /// Reference density (M☉/Mpc³) for a given convention at the halo
    /// redshift.
    pub(crate) fn reference_density(&self, reference: OverdensityReference) -> f64 {
        match reference {
            OverdensityReference::Critical => self.rho_crit,
            OverdensityReference::Mean => self.rho_mean,
        }
    }

    /// Characteristic density ρ_s = δ_c ρ_ref(z), in M☉/Mpc³.
    pub(crate) fn rho_s(&self) -> f64 {
        self.delta_c * self.reference_density(self.reference)
    }

    /// Validate and convert a radius argument to Mpc.
    pub(crate) fn radius_arg(&self, r: Quantity) -> HaloResult<f64> {
        let r = r.value_in(Unit::Megaparsec)?;
        if !r.is_finite() || r <= 0.0 {
            return Err(HaloError::InvalidParameter(format!(
                "radius must be finite and > 0, got {r} Mpc"
            )));
        }
        Ok(r)
    }

    // ── Defining parameters ──────────────────────────────────────────

    /// Halo mass at the defining overdensity.
    pub fn mass(&self) -> Quantity {
        Quantity::solar_masses(self.mass)
    }

    /// Outer radius r_Δ at the defining overdensity.
    pub fn radius(&self) -> Quantity {
        Quantity::megaparsecs(self.r_delta)
    }

    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    pub fn redshift(&self) -> f64 {
        self.redshift
    }

    pub fn overdensity(&self) -> f64 {
        self.overdensity
    }

    pub fn reference(&self) -> OverdensityReference {
        self.reference
    }

    // ── Characteristic quantities ────────────────────────────────────

    /// Characteristic overdensity δ_c = (Δ/3) c³ / m(c).
    pub fn delta_c(&self) -> f64 {
        self.delta_c
    }

    /// Scale radius r_s = r_Δ / c.
    pub fn characteristic_radius(&self) -> Quantity {
        Quantity::megaparsecs(self.r_s)
    }

    /// Characteristic density ρ_s = δ_c ρ_ref(z).
    pub fn characteristic_density(&self) -> Quantity {
        Quantity::solar_masses_per_mpc3(self.rho_s())
    }

    // ── Profile evaluation ───────────────────────────────────────────

    /// Local density ρ(r) = ρ_s / [x(1+x)²] with x = r/r_s.
    pub fn density(&self, r: Quantity) -> HaloResult<Quantity> {
        let x = self.radius_arg(r)? / self.r_s;
        Ok(Quantity::solar_masses_per_mpc3(
            self.rho_s() / (x * (1.0 + x) * (1.0 + x)),
        ))
    }

    /// Mean density inside radius r: 3 ρ_s m(x) / x³.
    pub fn mean_enclosed_density(&self, r: Quantity) -> HaloResult<Quantity> {
        let x = self.radius_arg(r)? / self.r_s;
        Ok(Quantity::solar_masses_per_mpc3(
            3.0 * self.rho_s() * shape(x) / x.powi(3),
        ))
    }

    /// Mass inside radius r: 4π ρ_s r_s³ m(x). Monotone increasing;
    /// equals the defining mass at r = r_Δ.
    pub fn enclosed_mass(&self, r: Quantity) -> HaloResult<Quantity> {
        let x = self.radius_arg(r)? / self.r_s;
        Ok(Quantity::solar_masses(
            4.0 * PI * self.rho_s() * self.r_s.powi(3) * shape(x),
        ))
    }

    // ── Overdensity conversions ──────────────────────────────────────

    /// Radius at which the mean enclosed density equals
    /// `delta` · ρ_ref(z) under the requested convention.
    ///
    /// The mean enclosed density is strictly decreasing in r, so the
    /// root is unique. Solved in x = r/r_s with Brent's method over a
    /// fixed bracket; a threshold extreme enough to push the root
    /// outside the bracket yields `ConvergenceFailed`.
    pub fn radius_at_overdensity(
        &self,
        delta: f64,
        reference: OverdensityReference,
    ) -> HaloResult<Quantity> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(HaloError::InvalidParameter(format!(
                "overdensity must be finite and > 0, got {delta}"
            )));
        }
        let rho_target = delta * self.reference_density(reference);
        let rho_s = self.rho_s();
        let x = brentq(
            |x| 3.0 * rho_s * shape(x) / x.powi(3) - rho_target,
            X_BRACKET_MIN,
            X_BRACKET_MAX,
            &BrentConfig::default(),
        )?;
        Ok(Quantity::megaparsecs(x * self.r_s))
    }

    /// Mass inside [`Self::radius_at_overdensity`].
    pub fn mass_at_overdensity(
        &self,
        delta: f64,
        reference: OverdensityReference,
    ) -> HaloResult<Quantity> {
        let r = self.radius_at_overdensity(delta, reference)?;
        self.enclosed_mass(r)
    }

    /// Effective concentration under a different overdensity
    /// convention: r_s is fixed by construction, so only the outer
    /// radius moves.
    pub fn concentration_at_overdensity(
        &self,
        delta: f64,
        reference: OverdensityReference,
    ) -> HaloResult<f64> {
        let r = self.radius_at_overdensity(delta, reference)?;
        Ok(r.value_in(Unit::Megaparsec)? / self.r_s)
    }

    // ── Tabulation ───────────────────────────────────────────────────

    /// Log-spaced radial sampling of the density profile.
    ///
    /// Returns `n` radii (Mpc) between `r_min` and `r_max` and the
    /// densities (M☉/Mpc³) at each.
    pub fn density_profile(
        &self,
        r_min: Quantity,
        r_max: Quantity,
        n: usize,
    ) -> HaloResult<(Array1<f64>, Array1<f64>)> {
        let lo = self.radius_arg(r_min)?;
        let hi = self.radius_arg(r_max)?;
        if hi <= lo {
            return Err(HaloError::InvalidParameter(format!(
                "r_max must exceed r_min, got [{lo}, {hi}] Mpc"
            )));
        }
        if n < 2 {
            return Err(HaloError::InvalidParameter(format!(
                "at least 2 sample points required, got {n}"
            )));
        }
        let radii = Array1::logspace(10.0, lo.log10(), hi.log10(), n);
        let rho_s = self.rho_s();
        let r_s = self.r_s;
        let densities = radii.mapv(|r| {
            let x = r / r_s;
            rho_s / (x * (1.0 + x) * (1.0 + x))
        });
        Ok((radii, densities))
    }
}

impl fmt::Display for HaloProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "NFW halo with concentration {:.2} at redshift {:.2}:",
            self.concentration, self.redshift
        )?;
        writeln!(f)?;
        for delta in [200.0, 500.0, 2500.0] {
            if let (Ok(m), Ok(r)) = (
                self.mass_at_overdensity(delta, self.reference),
                self.radius_at_overdensity(delta, self.reference),
            ) {
                writeln!(
                    f,
                    "M_{delta:.0} = {:.2e} M_sun\tr_{delta:.0} = {:.2} Mpc",
                    m.value(),
                    r.value()
                )?;
            }
        }
        Ok(())
    }
}
