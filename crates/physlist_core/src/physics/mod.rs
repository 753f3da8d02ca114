//! Physics groups attached by the process builder.
//!
//! Each group walks the catalog once from the start and attaches its
//! processes to the species it covers. Groups never call each other; the
//! builder owns the order in which they run.

pub mod decay;
pub mod em;
pub mod extra;
pub mod optical;
pub mod transport;
pub mod tritium;
