//! Faction roster loading slice.
//!
//! A [`Roster`] is a handle rooted at the fixture directory. Loading a
//! faction is a single pass: validate the slug against the fixed registry,
//! resolve the file path, read, parse, and run the load-time schema checks.
//! There is no caching and no retry; the source is a static local file read
//! once per page build.

mod error;
pub mod registry;

pub use error::RosterError;
pub use registry::{REGISTERED_SLUGS, is_registered};

use armyforge_domain::faction::Faction;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A handle to the faction fixture directory.
///
/// Cheap to clone; owns no open resources. Path resolution never escapes the
/// root because slugs are restricted to `[a-z0-9-]` before any path is built.
#[derive(Debug, Clone)]
pub struct Roster {
    root: PathBuf,
    system: String,
}

impl Roster {
    /// Creates a roster reading `<root>/<slug>_<system>.json` fixtures with
    /// the default game-system tag.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), system: "aof".to_owned() }
    }

    /// Overrides the game-system tag used as the fixture file suffix.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// The fixture directory this roster reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a registered slug to its fixture path without touching the
    /// filesystem.
    ///
    /// # Errors
    /// Returns [`RosterError::InvalidSlug`] or [`RosterError::UnknownSlug`]
    /// when the slug does not validate; unregistered slugs fail closed here,
    /// before any path exists to probe.
    pub fn resolve(&self, slug: &str) -> Result<PathBuf, RosterError> {
        registry::validate(slug)?;
        Ok(self.root.join(format!("{slug}_{}.json", self.system)))
    }

    /// Loads and validates one faction.
    ///
    /// # Errors
    /// Returns [`RosterError::NotFound`] when the registered slug has no
    /// fixture file, [`RosterError::Parse`] when the file does not conform to
    /// the faction shape, and [`RosterError::Invalid`] when the shape is
    /// right but the load-time checks fail. See [`RosterError`] for the full
    /// taxonomy.
    pub fn load(&self, slug: &str) -> Result<Faction, RosterError> {
        let path = self.resolve(slug)?;
        debug!(%slug, path = %path.display(), "Loading faction data");

        let raw = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RosterError::NotFound { slug: slug.to_owned(), path: path.clone() }
            } else {
                RosterError::Io { path: path.clone(), source }
            }
        })?;

        let faction: Faction = serde_json::from_str(&raw)
            .map_err(|source| RosterError::Parse { path: path.clone(), source })?;

        validate_faction(&faction, &path)?;

        info!(%slug, name = %faction.name, units = faction.units.len(), "Faction loaded");
        Ok(faction)
    }
}

/// Semantic checks serde cannot express: unit ids must be non-empty and
/// unique within the faction (they key the rendered fragments).
fn validate_faction(faction: &Faction, path: &Path) -> Result<(), RosterError> {
    let mut seen = HashSet::new();
    for unit in &faction.units {
        if unit.id.is_empty() {
            return Err(RosterError::Invalid {
                path: path.to_path_buf(),
                message: format!("unit `{}` has an empty id", unit.name),
            });
        }
        if !seen.insert(unit.id.as_str()) {
            return Err(RosterError::Invalid {
                path: path.to_path_buf(),
                message: format!("duplicate unit id `{}`", unit.id),
            });
        }
    }
    Ok(())
}
