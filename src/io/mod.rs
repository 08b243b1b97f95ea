//! Raster I/O boundary layer.
//!
//! The kernel in [`crate::core`] never touches files; adapters implementing
//! [`RasterAdapter`] translate between on-disk rasters and in-memory arrays,
//! one adapter per raster backend, chosen at startup.

use crate::types::{AreaArray, DemArray, RasterProfile, SurfaceResult};
use std::path::Path;

pub mod batch;
pub mod raster;

pub use batch::{default_output_name, process_directory, process_file, BatchSummary};
pub use raster::GdalAdapter;

/// Backend-agnostic raster access.
pub trait RasterAdapter {
    /// Read band 1 of a raster as an elevation grid, mapping its declared
    /// no-data value to NaN, along with the georeferencing profile.
    fn read_dem(&self, path: &Path) -> SurfaceResult<(DemArray, RasterProfile)>;

    /// Write an area grid with the profile's georeferencing, re-stamping
    /// no-data wherever the source DEM was undefined.
    fn write_area(
        &self,
        path: &Path,
        areas: &AreaArray,
        dem: &DemArray,
        profile: &RasterProfile,
    ) -> SurfaceResult<()>;
}
