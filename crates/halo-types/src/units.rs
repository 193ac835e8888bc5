// ─────────────────────────────────────────────────────────────────────
// SCPN Halo Models — Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical quantities with explicit unit metadata.
//!
//! Every quantity crossing the public API carries a unit; conversions
//! happen only through [`Quantity::to`], which fails with
//! `HaloError::UnitMismatch` across dimensions. No implicit coercion.
//!
//! Canonical working units: M☉ (mass), Mpc (length), M☉/Mpc³ (density),
//! M☉/Mpc² (surface density).

use std::fmt;

use crate::constants::{MPC_M, M_SUN_KG};
use crate::error::{HaloError, HaloResult};

/// Physical dimension of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Mass,
    Length,
    Density,
    SurfaceDensity,
    Dimensionless,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Mass => "mass",
            Dimension::Length => "length",
            Dimension::Density => "density",
            Dimension::SurfaceDensity => "surface density",
            Dimension::Dimensionless => "dimensionless",
        };
        f.write_str(name)
    }
}

/// Supported units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    SolarMass,
    Kilogram,
    Megaparsec,
    Kiloparsec,
    Meter,
    SolarMassPerMpc3,
    KilogramPerM3,
    SolarMassPerMpc2,
    Dimensionless,
}

impl Unit {
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::SolarMass | Unit::Kilogram => Dimension::Mass,
            Unit::Megaparsec | Unit::Kiloparsec | Unit::Meter => Dimension::Length,
            Unit::SolarMassPerMpc3 | Unit::KilogramPerM3 => Dimension::Density,
            Unit::SolarMassPerMpc2 => Dimension::SurfaceDensity,
            Unit::Dimensionless => Dimension::Dimensionless,
        }
    }

    /// Factor converting one of this unit into the canonical unit of
    /// its dimension.
    fn canonical_factor(self) -> f64 {
        match self {
            Unit::SolarMass => 1.0,
            Unit::Kilogram => 1.0 / M_SUN_KG,
            Unit::Megaparsec => 1.0,
            Unit::Kiloparsec => 1.0e-3,
            Unit::Meter => 1.0 / MPC_M,
            Unit::SolarMassPerMpc3 => 1.0,
            Unit::KilogramPerM3 => MPC_M * MPC_M * MPC_M / M_SUN_KG,
            Unit::SolarMassPerMpc2 => 1.0,
            Unit::Dimensionless => 1.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::SolarMass => "M_sun",
            Unit::Kilogram => "kg",
            Unit::Megaparsec => "Mpc",
            Unit::Kiloparsec => "kpc",
            Unit::Meter => "m",
            Unit::SolarMassPerMpc3 => "M_sun/Mpc^3",
            Unit::KilogramPerM3 => "kg/m^3",
            Unit::SolarMassPerMpc2 => "M_sun/Mpc^2",
            Unit::Dimensionless => "",
        }
    }
}

/// Magnitude plus unit. Copy value type; arithmetic goes through
/// explicit conversion so dimension errors surface at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn solar_masses(value: f64) -> Self {
        Quantity::new(value, Unit::SolarMass)
    }

    pub fn megaparsecs(value: f64) -> Self {
        Quantity::new(value, Unit::Megaparsec)
    }

    pub fn kiloparsecs(value: f64) -> Self {
        Quantity::new(value, Unit::Kiloparsec)
    }

    pub fn solar_masses_per_mpc3(value: f64) -> Self {
        Quantity::new(value, Unit::SolarMassPerMpc3)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Convert to `target` within the same dimension.
    pub fn to(self, target: Unit) -> HaloResult<Quantity> {
        if self.unit.dimension() != target.dimension() {
            return Err(HaloError::UnitMismatch {
                expected: target.dimension().to_string(),
                found: self.unit.dimension().to_string(),
            });
        }
        let value = self.value * self.unit.canonical_factor() / target.canonical_factor();
        Ok(Quantity::new(value, target))
    }

    /// Magnitude after conversion to `target`.
    pub fn value_in(self, target: Unit) -> HaloResult<f64> {
        Ok(self.to(target)?.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == Unit::Dimensionless {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol())
        }
    }
}
