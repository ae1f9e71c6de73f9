//! Asset-authoring tools for the Sabake_osakana prototype.
//!
//! Shared drawing and recoloring logic for the generator binaries under
//! `src/bin/`.

pub mod config;
pub mod kirimi;
pub mod palette;
pub mod panel;
pub mod raster;
pub mod spec_doc;

#[cfg(test)]
mod tests;
