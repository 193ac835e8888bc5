// ─────────────────────────────────────────────────────────────────────
// SCPN Halo Models — Property-Based Tests (proptest) for halo-model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for halo-model using proptest.
//!
//! Covers: mass/radius round-trips through the root finder,
//! monotonicity of the profile, concentration conversions.

use halo_model::{Cosmology, FlatLambdaCdm, HaloProfile, OverdensityReference};
use halo_types::units::Quantity;
use proptest::prelude::*;
use std::f64::consts::PI;

fn cosmo() -> FlatLambdaCdm {
    FlatLambdaCdm::new("prop", 70.0, 0.3).unwrap()
}

fn halo(mass: f64, c: f64, z: f64, reference: OverdensityReference) -> HaloProfile {
    HaloProfile::new(
        Quantity::solar_masses(mass),
        c,
        z,
        200.0,
        reference,
        &cosmo(),
    )
    .unwrap()
}

proptest! {
    /// enclosed_mass(radius_at_overdensity(Delta)) recovers the
    /// defining mass through the root finder.
    #[test]
    fn roundtrip_mass_at_defining_overdensity(
        log_mass in 12.0f64..16.0,
        c in 2.0f64..15.0,
        z in 0.0f64..2.0,
    ) {
        let mass = 10.0f64.powf(log_mass);
        let h = halo(mass, c, z, OverdensityReference::Critical);
        let r = h.radius_at_overdensity(200.0, OverdensityReference::Critical).unwrap();
        let m = h.enclosed_mass(r).unwrap().value();
        prop_assert!((m - mass).abs() / mass < 1e-6,
            "roundtrip mass = {m}, expected {mass}");
    }

    /// Converting to the instance's own overdensity returns the
    /// original concentration.
    #[test]
    fn concentration_identity(
        log_mass in 12.0f64..16.0,
        c in 2.0f64..15.0,
        z in 0.0f64..2.0,
    ) {
        let h = halo(10.0f64.powf(log_mass), c, z, OverdensityReference::Mean);
        let c_back = h.concentration_at_overdensity(200.0, OverdensityReference::Mean).unwrap();
        prop_assert!((c_back - c).abs() / c < 1e-6,
            "c = {c_back}, expected {c}");
    }

    /// r_Delta matches the defining relation
    /// mass = (4/3) pi r^3 Delta rho_ref(z).
    #[test]
    fn outer_radius_matches_defining_relation(
        log_mass in 12.0f64..16.0,
        c in 2.0f64..15.0,
        z in 0.0f64..2.0,
        delta in 100.0f64..1000.0,
    ) {
        let mass = 10.0f64.powf(log_mass);
        let h = HaloProfile::new(
            Quantity::solar_masses(mass),
            c,
            z,
            delta,
            OverdensityReference::Critical,
            &cosmo(),
        ).unwrap();
        let rho_c = cosmo().critical_density(z).value();
        let expected = (3.0 * mass / (4.0 * PI * delta * rho_c)).cbrt();
        let r = h.radius().value();
        prop_assert!((r - expected).abs() / expected < 1e-12);
    }

    /// Density decreases and enclosed mass increases with radius.
    #[test]
    fn profile_monotonicity(
        c in 2.0f64..15.0,
        r_lo in 0.01f64..1.0,
        step in 1.01f64..10.0,
    ) {
        let h = halo(1.0e14, c, 0.0, OverdensityReference::Critical);
        let r_hi = r_lo * step;
        let rho_lo = h.density(Quantity::megaparsecs(r_lo)).unwrap().value();
        let rho_hi = h.density(Quantity::megaparsecs(r_hi)).unwrap().value();
        prop_assert!(rho_hi < rho_lo);
        let m_lo = h.enclosed_mass(Quantity::megaparsecs(r_lo)).unwrap().value();
        let m_hi = h.enclosed_mass(Quantity::megaparsecs(r_hi)).unwrap().value();
        prop_assert!(m_hi > m_lo);
    }

    /// A denser threshold always yields a smaller halo.
    #[test]
    fn radius_decreases_with_threshold(
        c in 2.0f64..15.0,
        delta_lo in 100.0f64..400.0,
        factor in 1.5f64..10.0,
    ) {
        let h = halo(1.0e14, c, 0.0, OverdensityReference::Critical);
        let delta_hi = delta_lo * factor;
        let r_lo = h.radius_at_overdensity(delta_lo, OverdensityReference::Critical)
            .unwrap().value();
        let r_hi = h.radius_at_overdensity(delta_hi, OverdensityReference::Critical)
            .unwrap().value();
        prop_assert!(r_hi < r_lo);
    }

    /// Construction from the derived radius reproduces the mass.
    #[test]
    fn from_radius_inverts_from_mass(
        log_mass in 12.0f64..16.0,
        c in 2.0f64..15.0,
        z in 0.0f64..2.0,
    ) {
        let mass = 10.0f64.powf(log_mass);
        let a = halo(mass, c, z, OverdensityReference::Critical);
        let b = HaloProfile::from_radius(
            a.radius(),
            c,
            z,
            200.0,
            OverdensityReference::Critical,
            &cosmo(),
        ).unwrap();
        prop_assert!((b.mass().value() - mass).abs() / mass < 1e-12);
    }
}
