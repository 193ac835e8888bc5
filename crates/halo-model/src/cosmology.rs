// ─────────────────────────────────────────────────────────────────────
// SCPN Halo Models — Cosmology
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reference densities of the background universe.
//!
//! The halo profile consumes exactly two operations from its
//! cosmology collaborator: critical density and mean matter density
//! at a redshift. [`FlatLambdaCdm`] is the provided implementation;
//! any other type satisfying [`Cosmology`] works as well.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use halo_types::constants::G_ASTRO;
use halo_types::error::{HaloError, HaloResult};
use halo_types::units::{Quantity, Unit};

/// Capability contract for the background universe.
///
/// Both densities must carry density dimension; the profile converts
/// them to its working units and fails with `UnitMismatch` otherwise.
pub trait Cosmology {
    /// Critical density at redshift `z`.
    fn critical_density(&self, z: f64) -> Quantity;

    /// Mean matter density at redshift `z`.
    fn mean_density(&self, z: f64) -> Quantity;
}

/// Flat ΛCDM background, Ω_Λ = 1 − Ω_m.
/// Maps 1:1 to the JSON schema in configs/planck18.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatLambdaCdm {
    pub name: String,
    /// Hubble constant at z = 0 (km/s/Mpc).
    pub h0: f64,
    /// Matter density fraction at z = 0.
    pub omega_m: f64,
}

impl FlatLambdaCdm {
    pub fn new(name: &str, h0: f64, omega_m: f64) -> HaloResult<Self> {
        if !h0.is_finite() || h0 <= 0.0 {
            return Err(HaloError::ConfigError(
                "h0 must be finite and > 0".to_string(),
            ));
        }
        if !omega_m.is_finite() || omega_m <= 0.0 || omega_m > 1.0 {
            return Err(HaloError::ConfigError(
                "omega_m must be finite and in (0, 1]".to_string(),
            ));
        }
        Ok(FlatLambdaCdm {
            name: name.to_string(),
            h0,
            omega_m,
        })
    }

    /// Load from JSON file.
    pub fn from_file(path: &str) -> HaloResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        FlatLambdaCdm::new(&params.name, params.h0, params.omega_m)
    }

    pub fn omega_lambda(&self) -> f64 {
        1.0 - self.omega_m
    }

    /// Dimensionless Hubble rate squared, E²(z) = Ω_m(1+z)³ + Ω_Λ.
    fn e_squared(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        self.omega_m * zp1 * zp1 * zp1 + self.omega_lambda()
    }

    /// Matter density fraction at redshift `z`.
    pub fn omega_m_at(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        self.omega_m * zp1 * zp1 * zp1 / self.e_squared(z)
    }

    /// Hubble parameter at redshift `z` (km/s/Mpc).
    pub fn hubble(&self, z: f64) -> f64 {
        self.h0 * self.e_squared(z).sqrt()
    }
}

impl Cosmology for FlatLambdaCdm {
    fn critical_density(&self, z: f64) -> Quantity {
        let h = self.hubble(z);
        Quantity::new(3.0 * h * h / (8.0 * PI * G_ASTRO), Unit::SolarMassPerMpc3)
    }

    fn mean_density(&self, z: f64) -> Quantity {
        let rho_c = self.critical_density(z).value();
        Quantity::new(rho_c * self.omega_m_at(z), Unit::SolarMassPerMpc3)
    }
}
