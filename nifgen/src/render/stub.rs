//! Elixir fallback module rendering.
//!
//! The generated module loads the native library from the application's
//! `priv` directory on load and defines one raising stub per declaration,
//! so calls fail loudly until the native implementation replaces them.

use super::RenderConfig;
use super::layout::{LF, push_line};
use crate::declaration::{Declaration, Declarations};
use crate::error::{NifgenError, Result};

/// Elixir module name the stubs are generated for, such as `CImg.NIF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validates and wraps a module name.
    ///
    /// # Errors
    ///
    /// Returns [`NifgenError::InvalidModuleName`] when the name is blank or
    /// its first dot-separated segment is empty.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let name: String = value.into();
        if name.split('.').next().is_none_or(|head| head.trim().is_empty()) {
            return Err(NifgenError::InvalidModuleName(name));
        }
        Ok(Self(name))
    }

    /// Returns the module name as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Application the module belongs to: its first segment, lowercased.
    #[must_use]
    pub fn app_name(&self) -> String {
        self.0
            .split('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Basename of the native library: the whole name lowercased with dots
    /// replaced by underscores.
    #[must_use]
    pub fn library_name(&self) -> String {
        self.0.to_lowercase().replace('.', "_")
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Renders a complete Elixir module with one raising stub per declaration.
///
/// Duplicate names produce duplicate definitions; nothing is merged.
#[must_use]
pub fn render_stub_module(
    declarations: &Declarations,
    module: &ModuleName,
    config: &RenderConfig,
) -> String {
    let mut output = String::new();
    push_preamble(&mut output, module);
    for declaration in declarations {
        push_stub(&mut output, declaration, config);
    }
    push_line(&mut output, "end");
    tracing::info!(module = module.as_str(), stubs = declarations.len(), "rendered stub module");
    output
}

fn push_preamble(output: &mut String, module: &ModuleName) {
    push_line(output, &format!("defmodule {} do", module.as_str()));
    push_line(output, "  @moduledoc false");
    output.push_str(LF);
    push_line(output, "  #loading NIF library");
    push_line(output, "  @on_load :load_nif");
    push_line(output, "  def load_nif do");
    push_line(
        output,
        &format!(
            "    nif_file = Application.app_dir(:{}, \"priv/{}\")",
            module.app_name(),
            module.library_name()
        ),
    );
    push_line(output, "    :erlang.load_nif(nif_file, 0)");
    push_line(output, "  end");
    output.push_str(LF);
    push_line(output, "  # stub implementations for NIFs (fallback)");
}

fn push_stub(output: &mut String, declaration: &Declaration, config: &RenderConfig) {
    let name = config.external_name(&declaration.name);
    let arity = declaration.arity_or_zero();
    let params = (1..=arity)
        .map(|index| format!("_{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    push_line(output, &format!("  def {name}({params}),"));
    push_line(
        output,
        &format!("    do: raise(\"NIF {name}/{arity} not implemented\")"),
    );
}
