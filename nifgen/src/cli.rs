//! Command-line interface definitions for `nifgen`.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use nifgen::config::Overrides;
use nifgen::pipeline::{Generator, StubInput};
use nifgen::render::ModuleName;

/// Parsed CLI arguments for `nifgen`.
#[derive(Debug, Parser)]
#[command(name = "nifgen")]
#[command(about = "Generate NIF tables and fallback stubs from annotated sources")]
#[command(version)]
pub struct Args {
    /// TOML settings file (defaults to `nifgen.toml` when present).
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Generator to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Generators exposed as subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Emit `{"name", arity, entry, 0},` records from `DECL_NIF` markers.
    NifTable(TableArgs),
    /// Emit `{"name", entry},` records from `CIMG_CMD` markers.
    CmdTable(TableArgs),
    /// Emit an Elixir module of stubs that raise until the NIF loads.
    Stub(StubArgs),
}

/// Where declarations for the stub module come from.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SourceKind {
    /// Annotated native sources.
    #[default]
    Source,
    /// A generated NIF table.
    Table,
}

impl From<SourceKind> for StubInput {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Source => Self::Source,
            SourceKind::Table => Self::Table,
        }
    }
}

/// Arguments shared by the table generators.
#[derive(Debug, ClapArgs)]
pub struct TableArgs {
    /// Source files to scan, in order.
    #[arg(required = true, value_name = "src")]
    pub srcs: Vec<Utf8PathBuf>,
    /// Prefix for export names.
    #[arg(long)]
    pub prefix: Option<String>,
    /// Namespace for entry functions.
    #[arg(long)]
    pub ns: Option<String>,
    /// Column budget for record alignment.
    #[arg(long, value_name = "width")]
    pub column: Option<usize>,
    /// Output file (`-` for standard output).
    #[arg(short, long, value_name = "path")]
    pub output: Option<Utf8PathBuf>,
}

/// Arguments for the stub generator.
#[derive(Debug, ClapArgs)]
pub struct StubArgs {
    /// Elixir module name, for example `CImg.NIF`.
    pub module: String,
    /// Source files to scan, in order.
    #[arg(required = true, value_name = "src")]
    pub srcs: Vec<Utf8PathBuf>,
    /// Prefix for stub function names.
    #[arg(long)]
    pub prefix: Option<String>,
    /// Read declarations from sources or from a generated NIF table.
    #[arg(long = "from", value_enum, default_value_t = SourceKind::Source)]
    pub source_kind: SourceKind,
    /// Output file (`-` for standard output).
    #[arg(short, long, value_name = "path")]
    pub output: Option<Utf8PathBuf>,
}

impl Command {
    /// Builds the generator, validating the module name for stubs.
    pub fn generator(&self) -> nifgen::Result<Generator> {
        match self {
            Self::NifTable(_) => Ok(Generator::NifTable),
            Self::CmdTable(_) => Ok(Generator::CommandTable),
            Self::Stub(args) => Ok(Generator::Stub {
                module: ModuleName::new(args.module.clone())?,
                input: args.source_kind.into(),
                prefix: args.prefix.clone(),
            }),
        }
    }

    /// Command-line layer of the settings.
    ///
    /// The stub `--prefix` travels with the generator instead, so it never
    /// mixes with a table prefix from the settings file.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        match self {
            Self::NifTable(args) | Self::CmdTable(args) => Overrides {
                prefix: args.prefix.clone(),
                ns: args.ns.clone(),
                column: args.column,
            },
            Self::Stub(_) => Overrides::default(),
        }
    }

    /// Source paths in scan order.
    #[must_use]
    pub fn sources(&self) -> &[Utf8PathBuf] {
        match self {
            Self::NifTable(args) | Self::CmdTable(args) => &args.srcs,
            Self::Stub(args) => &args.srcs,
        }
    }

    /// Requested output path, if any.
    #[must_use]
    pub fn output(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::NifTable(args) | Self::CmdTable(args) => args.output.as_ref(),
            Self::Stub(args) => args.output.as_ref(),
        }
    }
}
