// ─────────────────────────────────────────────────────────────────────
// SCPN Halo Models — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Astrophysical constants in the library's working units
//! (solar mass, megaparsec, km/s).

/// Gravitational constant, Mpc M☉⁻¹ (km/s)² (CODATA G converted).
pub const G_ASTRO: f64 = 4.300_917_270_036_28e-9;

/// Solar mass (kg), IAU 2015 nominal value.
pub const M_SUN_KG: f64 = 1.988_409_870_698_051e30;

/// Megaparsec (m).
pub const MPC_M: f64 = 3.085_677_581_491_367e22;

/// Speed of light (km/s).
pub const C_KM_S: f64 = 299_792.458;
