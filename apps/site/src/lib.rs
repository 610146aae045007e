//! # ArmyForge Site Generator
//!
//! Build-time orchestration: load each registered faction roster, render its
//! unit-card page through the component stack, and write the static HTML
//! tree. One synchronous pass; each page build owns its loaded faction
//! exclusively for the duration of rendering.
//!
//! ## Example
//! ```no_run
//! use armyforge_site::Site;
//!
//! fn main() -> anyhow::Result<()> {
//!     let report = Site::builder().build()?.generate()?;
//!     println!("{} pages written", report.pages.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;

use anyhow::{Context, Result};
use armyforge_cards::{IndexEntry, render_faction_document, render_index_document};
use armyforge_domain::config::SiteConfig;
use armyforge_roster::{REGISTERED_SLUGS, Roster, registry};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// A fluent builder for configuring and initializing the [`Site`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct SiteBuilder {
    cfg: SiteConfig,
    only: Option<String>,
}

impl SiteBuilder {
    /// Set up the generator's configuration.
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Overrides the faction data directory.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.data_dir = dir.into();
        self
    }

    /// Overrides the output directory.
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.out_dir = dir.into();
        self
    }

    /// Restricts the build to a single registered faction slug.
    pub fn faction(mut self, slug: impl Into<String>) -> Self {
        self.only = Some(slug.into());
        self
    }

    /// Consumes the builder and initializes the site generator.
    ///
    /// # Process
    /// 1. Validates a `faction` restriction against the registry (fails
    ///    closed before any path is resolved)
    /// 2. Checks that the data directory exists
    /// 3. Constructs the roster handle
    ///
    /// # Errors
    /// Returns an error for an unregistered faction slug or a missing data
    /// directory.
    pub fn build(self) -> Result<Site> {
        let slugs: Vec<String> = match self.only {
            Some(slug) => {
                registry::validate(&slug)?;
                vec![slug]
            },
            None => REGISTERED_SLUGS.iter().map(|s| (*s).to_owned()).collect(),
        };

        if !self.cfg.data_dir.is_dir() {
            anyhow::bail!("Data directory not found at: {}", self.cfg.data_dir.display());
        }

        info!(
            data_dir = %self.cfg.data_dir.display(),
            out_dir = %self.cfg.out_dir.display(),
            pages = slugs.len(),
            "Initializing site generator"
        );

        let roster = Roster::new(&self.cfg.data_dir).with_system(&self.cfg.system);
        Ok(Site { cfg: self.cfg, roster, slugs })
    }
}

/// A fully initialized generator ready to write pages.
#[must_use = "call .generate() to write the site"]
#[derive(Debug)]
pub struct Site {
    cfg: SiteConfig,
    roster: Roster,
    slugs: Vec<String>,
}

impl Site {
    /// Returns a new [`SiteBuilder`] to configure the generator.
    pub fn builder() -> SiteBuilder {
        SiteBuilder::default()
    }

    /// Renders every selected faction page plus the site index.
    ///
    /// Pages are written under `<out_dir>/factions/<slug>.html`, the index at
    /// `<out_dir>/index.html`, in registry order. The first failing page
    /// aborts the build; nothing is written for a faction that fails to load.
    ///
    /// # Errors
    /// Returns an error when a faction fails to load (see
    /// [`armyforge_roster::RosterError`]) or when an output file cannot be
    /// written.
    pub fn generate(&self) -> Result<BuildReport> {
        let factions_dir = self.cfg.out_dir.join("factions");
        fs::create_dir_all(&factions_dir)
            .with_context(|| format!("Failed to create {}", factions_dir.display()))?;

        let mut pages = Vec::new();
        let mut entries = Vec::new();

        for slug in &self.slugs {
            let faction = self
                .roster
                .load(slug)
                .with_context(|| format!("Failed to build page for faction `{slug}`"))?;

            let path = factions_dir.join(format!("{slug}.html"));
            fs::write(&path, render_faction_document(&faction))
                .with_context(|| format!("Failed to write {}", path.display()))?;

            info!(%slug, path = %path.display(), units = faction.units.len(), "Rendered faction page");

            entries.push(IndexEntry { slug: slug.clone(), name: faction.name });
            pages.push(path);
        }

        let index_path = self.cfg.out_dir.join("index.html");
        fs::write(&index_path, render_index_document(&entries))
            .with_context(|| format!("Failed to write {}", index_path.display()))?;
        info!(path = %index_path.display(), factions = entries.len(), "Rendered faction index");
        pages.push(index_path);

        Ok(BuildReport { pages })
    }
}

/// Paths written by a completed build, in write order.
#[derive(Debug)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
}
