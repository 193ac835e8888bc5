//! Numerical primitives for SCPN Halo Models.

pub mod brent;
