use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

/// 2D elevation grid (rows x cols). No-data cells are NaN.
pub type DemArray = Array2<f64>;

/// 2D per-cell surface area grid, same shape as the DEM it was derived from.
pub type AreaArray = Array2<f64>;

/// 3D inter-cell edge-length array (rows x cols x 4 directions).
pub type EdgeArray = Array3<f64>;

/// Geospatial transformation parameters (GDAL geotransform order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoTransform {
    pub top_left_x: f64,
    pub pixel_width: f64,
    pub rotation_x: f64,
    pub top_left_y: f64,
    pub rotation_y: f64,
    pub pixel_height: f64,
}

impl GeoTransform {
    pub fn from_gdal(gt: &[f64; 6]) -> Self {
        Self {
            top_left_x: gt[0],
            pixel_width: gt[1],
            rotation_x: gt[2],
            top_left_y: gt[3],
            rotation_y: gt[4],
            pixel_height: gt[5],
        }
    }

    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.top_left_x,
            self.pixel_width,
            self.rotation_x,
            self.top_left_y,
            self.rotation_y,
            self.pixel_height,
        ]
    }

    /// North-south cell spacing (always positive; rasters usually store a
    /// negative pixel height).
    pub fn cell_y(&self) -> f64 {
        self.pixel_height.abs()
    }

    /// East-west cell spacing.
    pub fn cell_x(&self) -> f64 {
        self.pixel_width
    }
}

/// Everything needed to write an output raster with the same georeferencing
/// and no-data convention as its source.
#[derive(Debug, Clone)]
pub struct RasterProfile {
    pub geo_transform: GeoTransform,
    /// Projection as WKT; empty string when the source declares none.
    pub projection: String,
    /// Declared no-data value of the source band, if any.
    pub no_data: Option<f64>,
}

/// Error types for surface-area processing
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not a readable raster: {0}")]
    NotRaster(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),
}

/// Result type for surface-area operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;
