//! surface-area: pixel-by-pixel surface area rasters from digital elevation models
//!
//! Computes, for each cell of a DEM, the true 3-D surface area represented by
//! that cell, accounting for slope between neighboring cells. The method
//! follows Jenness, J. S. (2004), "Calculating landscape surface area from
//! digital elevation models", Wildlife Society Bulletin 32(3), 829-839: each
//! cell is decomposed into 8 triangles fanned from its corners to its center,
//! per-triangle area comes from Heron's formula over 3-D inter-cell edge
//! lengths, and grid boundaries are inflation-corrected.
//!
//! The kernel in [`core`] is pure in-memory array processing; [`io`] holds
//! the GDAL adapter, batch mode and everything that knows about files.

pub mod core;
pub mod io;
pub mod types;

// Re-export main types and functions for easier access
pub use types::{
    AreaArray, DemArray, EdgeArray, GeoTransform, RasterProfile, SurfaceError, SurfaceResult,
};

pub use crate::core::{aggregate_area, build_edge_array, select_edge, surface_area};
pub use io::{process_directory, process_file, GdalAdapter, RasterAdapter};
