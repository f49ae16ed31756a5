//! End-to-end generation: extract from every source, then render once.

use crate::config::Settings;
use crate::declaration::Declarations;
use crate::error::Result;
use crate::extract::{MarkerRule, TableRowMarker, extract};
use crate::io::SourceText;
use crate::render::{
    ModuleName, RenderConfig, render_command_table, render_nif_table,
    render_stub_module,
};

/// Where the stub generator reads its declarations from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StubInput {
    /// Annotated native sources, via the two-line NIF rule.
    #[default]
    Source,
    /// A previously generated NIF table, via the table-row rule.
    Table,
}

/// The artefact to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    /// NIF function table with arities.
    NifTable,
    /// Name-only command table.
    CommandTable,
    /// Elixir fallback module.
    Stub {
        /// Module to generate.
        module: ModuleName,
        /// Declaration source.
        input: StubInput,
        /// Prefix given explicitly for this run.
        ///
        /// Sources fall back to the configured prefix when this is `None`.
        /// Table rows already carry their export prefix, so a table input
        /// only ever uses this value.
        prefix: Option<String>,
    },
}

fn stub_prefix(input: StubInput, explicit: Option<&str>, settings: &Settings) -> String {
    match (explicit, input) {
        (Some(prefix), _) => prefix.to_owned(),
        (None, StubInput::Source) => settings.prefix.clone(),
        (None, StubInput::Table) => String::new(),
    }
}

/// Scans every source in order with `rule`, threading one accumulator.
#[must_use]
pub fn collect<R: MarkerRule>(rule: &R, sources: &[SourceText]) -> Declarations {
    sources.iter().fold(Declarations::new(), |acc, source| {
        let before = acc.len();
        let grown = extract(rule, acc, &source.text);
        tracing::debug!(
            path = %source.path,
            found = grown.len() - before,
            "scanned source"
        );
        grown
    })
}

/// Runs `generator` over `sources` and returns the rendered text.
///
/// # Errors
///
/// Fails only when a configured marker token cannot be compiled.
pub fn generate(
    generator: &Generator,
    sources: &[SourceText],
    settings: &Settings,
) -> Result<String> {
    let render_config = settings.render_config();
    let text = match generator {
        Generator::NifTable => {
            let declarations = collect(&settings.nif_marker()?, sources);
            render_nif_table(&declarations, &render_config)
        }
        Generator::CommandTable => {
            let declarations = collect(&settings.command_marker()?, sources);
            render_command_table(&declarations, &render_config)
        }
        Generator::Stub {
            module,
            input,
            prefix,
        } => {
            let declarations = match input {
                StubInput::Source => collect(&settings.nif_marker()?, sources),
                StubInput::Table => collect(&TableRowMarker::new()?, sources),
            };
            let stub_config = RenderConfig {
                prefix: stub_prefix(*input, prefix.as_deref(), settings),
                ..render_config
            };
            render_stub_module(&declarations, module, &stub_config)
        }
    };
    Ok(text)
}
