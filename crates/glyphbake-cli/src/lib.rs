//! glyphbake CLI library.
//!
//! Command implementations for the `glyphbake` binary, which generates the
//! kernel console's packed font atlases.

pub mod commands;
