//! Error type shared by extraction, mapping and generation.

use std::fmt;

/// Input-validation failures. None of these are transient; callers either
/// check their input up front or handle the error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeoError {
    /// The `type` tag has no defined coordinate nesting (e.g. `GeometryCollection`).
    UnsupportedGeometryType { kind: String },
    /// No coordinate structure could be located in the input.
    MalformedGeometryInput { reason: String },
    /// The generator has no builder for the requested type.
    UnsupportedFeatureType { kind: String },
    /// Generator parameters the sampler cannot draw from.
    InvalidParams { reason: String },
}

impl GeoError {
    pub(crate) fn unsupported_geometry(kind: impl Into<String>) -> Self {
        Self::UnsupportedGeometryType { kind: kind.into() }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedGeometryInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported_feature(kind: impl Into<String>) -> Self {
        Self::UnsupportedFeatureType { kind: kind.into() }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedGeometryType { kind } => {
                write!(f, "unsupported geometry type: {kind}")
            }
            Self::MalformedGeometryInput { reason } => {
                write!(f, "malformed geometry input: {reason}")
            }
            Self::UnsupportedFeatureType { kind } => {
                write!(f, "cannot generate features of type: {kind}")
            }
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeoError {}

pub type GeoResult<T> = Result<T, GeoError>;
