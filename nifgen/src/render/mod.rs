//! Text synthesis for dispatch tables and stub modules.
//!
//! Renderers are pure: the same declarations and configuration always yield
//! byte-identical text.

mod layout;
pub mod stub;
pub mod table;

pub use stub::{ModuleName, render_stub_module};
pub use table::{render_command_table, render_nif_table};

/// Column budget used when none is configured.
pub const DEFAULT_COLUMN: usize = 40;

/// Largest column budget accepted from settings; renderers clamp to it.
pub const MAX_COLUMN: usize = 1024;

/// Naming and layout options shared by every renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prepended to external-facing names (table keys, stub functions).
    pub prefix: String,
    /// Prepended to internal-facing symbols in tables.
    pub namespace: String,
    /// Column budget that table fields are padded against.
    pub column: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            namespace: String::new(),
            column: DEFAULT_COLUMN,
        }
    }
}

impl RenderConfig {
    /// Column budget in effect, never above [`MAX_COLUMN`].
    #[must_use]
    pub fn column(&self) -> usize {
        self.column.min(MAX_COLUMN)
    }

    pub(crate) fn external_name(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }

    pub(crate) fn internal_name(&self, name: &str) -> String {
        format!("{}{name}", self.namespace)
    }
}
