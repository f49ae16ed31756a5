//! Layered generator settings.
//!
//! Values resolve from built-in defaults, then a TOML file, then
//! `NIFGEN_*` environment variables, then command-line overrides. Later
//! layers win. Nested keys use `__` in environment names, for example
//! `NIFGEN_MARKERS__NIF=MY_NIF`.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{NifgenError, Result};
use crate::extract::{CommandMarker, NifMarker};
use crate::io;
use crate::render::{DEFAULT_COLUMN, MAX_COLUMN, RenderConfig};

/// File picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "nifgen.toml";

/// Prefix shared by every environment variable the loader reads.
pub const ENV_PREFIX: &str = "NIFGEN_";

/// Marker tokens searched for in sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSettings {
    /// Declaration macro of the two-line NIF rule.
    pub nif: String,
    /// Call-like macro of the single-line command rule.
    pub command: String,
    /// Variable compared against the arity in NIF bodies.
    pub arity_var: String,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            nif: "DECL_NIF".to_owned(),
            command: "CIMG_CMD".to_owned(),
            arity_var: "ality".to_owned(),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix for exported names.
    pub prefix: String,
    /// Namespace for entry-point symbols.
    pub ns: String,
    /// Column budget for table alignment.
    pub column: usize,
    /// Marker tokens.
    pub markers: MarkerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            ns: String::new(),
            column: DEFAULT_COLUMN,
            markers: MarkerSettings::default(),
        }
    }
}

impl Settings {
    /// Naming and layout options for the renderers.
    #[must_use]
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            prefix: self.prefix.clone(),
            namespace: self.ns.clone(),
            column: self.column,
        }
    }

    /// Builds the two-line NIF rule from the configured tokens.
    ///
    /// # Errors
    ///
    /// Fails when a token does not compile into a pattern.
    pub fn nif_marker(&self) -> Result<NifMarker> {
        NifMarker::new(&self.markers.nif, &self.markers.arity_var)
    }

    /// Builds the single-line command rule from the configured token.
    ///
    /// # Errors
    ///
    /// Fails when the token does not compile into a pattern.
    pub fn command_marker(&self) -> Result<CommandMarker> {
        CommandMarker::new(&self.markers.command)
    }
}

/// Values given on the command line; `None` leaves lower layers in charge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    /// `--prefix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// `--ns`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ns: Option<String>,
    /// `--column`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

/// Resolves settings from every layer.
///
/// An explicit `config_path` must exist; the implicit [`CONFIG_FILE`] is
/// optional.
///
/// # Errors
///
/// Returns an I/O error for an unreadable explicit file, a configuration
/// error when the merged layers do not deserialize, and
/// [`NifgenError::ColumnOutOfRange`] when `column` exceeds [`MAX_COLUMN`].
pub fn load(config_path: Option<&Utf8Path>, overrides: &Overrides) -> Result<Settings> {
    let base = Figment::from(Serialized::defaults(Settings::default()));
    let with_file = match config_path {
        Some(path) => {
            let source = io::read_source(path)?;
            tracing::debug!(path = %path, "loading configuration file");
            base.merge(Toml::string(&source.text))
        }
        None => base.merge(Toml::file(CONFIG_FILE)),
    };
    let settings = with_file
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(overrides))
        .extract::<Settings>()?;
    if settings.column > MAX_COLUMN {
        return Err(NifgenError::ColumnOutOfRange {
            column: settings.column,
            max: MAX_COLUMN,
        });
    }
    Ok(settings)
}
