use std::path::PathBuf;
use thiserror::Error;

/// Faction loading error type.
///
/// The caller receives either a fully valid [`Faction`](armyforge_domain::faction::Faction)
/// or one of these; no partial results are produced.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The slug contains characters outside the allowed set. Rejected before
    /// any path is built.
    #[error("Invalid faction slug `{slug}`: only lowercase letters, digits and hyphens are allowed")]
    InvalidSlug { slug: String },

    /// The slug is well-formed but not in the registered faction list.
    #[error("Unknown faction slug `{slug}`: not in the registered faction list")]
    UnknownSlug { slug: String },

    /// A registered slug whose data file does not exist.
    #[error("No faction data for `{slug}` at {}", .path.display())]
    NotFound { slug: String, path: PathBuf },

    /// The data file exists but could not be read.
    #[error("Failed to read faction data at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not well-formed JSON conforming to the faction shape.
    #[error("Malformed faction data at {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that fails the load-time semantic checks.
    #[error("Invalid faction data at {}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },
}
