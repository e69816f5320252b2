use thiserror::Error;

use crate::Num;

/// Load-time registry failures.
///
/// Everything that can go wrong happens while loading; once a registry
/// validates, nothing in the per-frame update path can fail.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed registry source: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("registry contains no bodies")]
    Empty,

    #[error("duplicate body name {name:?}")]
    DuplicateName { name: String },

    #[error("body {body:?} orbits unknown center {center:?}")]
    UnknownCenter { body: String, center: String },

    #[error(
        "body {body:?} orbits {center:?}, which is itself a satellite; \
         only star -> planet -> moon chains are supported"
    )]
    NestedSatellite { body: String, center: String },

    #[error("body {body:?} has eccentricity {value}, outside [0, 1)")]
    Eccentricity { body: String, value: Num },

    #[error("body {body:?} has invalid {field}: {value}")]
    InvalidValue {
        body: String,
        field: &'static str,
        value: Num,
    },
}
