// ─────────────────────────────────────────────────────────────────────
// SCPN Halo Models — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HaloError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unit mismatch: expected {expected}, got {found}")]
    UnitMismatch { expected: String, found: String },

    #[error("Root finder failed at iteration {iteration}: {message}")]
    ConvergenceFailed { iteration: usize, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HaloResult<T> = Result<T, HaloError>;
