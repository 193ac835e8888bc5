//! Navarro-Frenk-White halo profile.
//!
//! Closed-form density and enclosed mass, plus numerically-inverted
//! conversions between mass definitions at different overdensity
//! thresholds (critical or mean reference).

pub mod cosmology;
pub mod lensing;
pub mod nfw;

pub use cosmology::{Cosmology, FlatLambdaCdm};
pub use nfw::{HaloProfile, OverdensityReference};
