//! Core surface-area kernel: pure array transforms, no I/O.
//!
//! Pipeline: [`edges::build_edge_array`] -> [`triangles::select_edge`]
//! (invoked per triangle side by the aggregator) -> [`area::aggregate_area`].

pub mod area;
pub mod edges;
pub mod triangles;

// Re-export main entry points
pub use area::{aggregate_area, surface_area};
pub use edges::{build_edge_array, DIRECTIONS};
pub use triangles::{select_edge, EdgeRef, TRIANGLES};
