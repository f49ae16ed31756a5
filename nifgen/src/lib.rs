//! Library interface for `nifgen`.
//!
//! `nifgen` scans annotated C/C++ sources for NIF and command markers and
//! renders either a dispatch table fragment for inclusion in the native
//! library or an Elixir module of fallback stubs for the same functions.

pub mod config;
pub mod declaration;
pub mod error;
pub mod extract;
pub mod io;
pub mod pipeline;
pub mod render;

pub use declaration::{Declaration, Declarations};
pub use error::{NifgenError, Result};
