//! GDAL-backed raster adapter.
//!
//! The core kernel only ever sees in-memory arrays; this module owns all
//! format knowledge. Reading translates the band's declared no-data value
//! into NaN, writing re-stamps it from the original DEM so output rasters
//! keep the source's georeferencing and no-data convention.

use crate::io::RasterAdapter;
use crate::types::{
    AreaArray, DemArray, GeoTransform, RasterProfile, SurfaceError, SurfaceResult,
};
use gdal::{Dataset, DriverManager};
use ndarray::Array2;
use std::path::Path;

/// Raster adapter backed by GDAL (GTiff output).
pub struct GdalAdapter;

impl RasterAdapter for GdalAdapter {
    fn read_dem(&self, path: &Path) -> SurfaceResult<(DemArray, RasterProfile)> {
        log::info!("Reading DEM from: {}", path.display());

        // Anything GDAL cannot open is "not a raster"; batch mode skips these.
        let dataset = Dataset::open(path)
            .map_err(|e| SurfaceError::NotRaster(format!("{}: {}", path.display(), e)))?;

        let geo_transform = dataset.geo_transform()?;
        let (width, height) = dataset.raster_size();
        log::debug!("DEM size: {}x{}", width, height);
        log::debug!("DEM geotransform: {:?}", geo_transform);

        let rasterband = dataset.rasterband(1)?;
        let no_data = rasterband.no_data_value();
        let band_data =
            rasterband.read_as::<f64>((0, 0), (width, height), (width, height), None)?;

        let mut dem = Array2::from_shape_vec((height, width), band_data.data)
            .map_err(|e| SurfaceError::Processing(format!("Failed to reshape DEM data: {}", e)))?;

        // Map the declared no-data value onto NaN so it propagates through
        // the kernel as undefined, never as a real elevation.
        if let Some(nd) = no_data {
            dem.mapv_inplace(|v| if v == nd { f64::NAN } else { v });
        }

        let profile = RasterProfile {
            geo_transform: GeoTransform::from_gdal(&geo_transform),
            projection: dataset.projection(),
            no_data,
        };

        Ok((dem, profile))
    }

    fn write_area(
        &self,
        path: &Path,
        areas: &AreaArray,
        dem: &DemArray,
        profile: &RasterProfile,
    ) -> SurfaceResult<()> {
        if areas.dim() != dem.dim() {
            return Err(SurfaceError::InvalidInput(format!(
                "area array {:?} does not match DEM {:?}",
                areas.dim(),
                dem.dim()
            )));
        }

        log::info!("Writing surface-area raster to: {}", path.display());
        let (height, width) = areas.dim();

        let driver = DriverManager::get_driver_by_name("GTiff")?;
        let mut dataset = driver.create_with_band_type::<f64, _>(
            path,
            width as isize,
            height as isize,
            1,
        )?;

        dataset.set_geo_transform(&profile.geo_transform.to_gdal())?;
        if !profile.projection.is_empty() {
            dataset.set_projection(&profile.projection)?;
        }

        // Positions that were no-data in the DEM stay no-data in the output.
        // A source with no declared no-data value and no undefined cells
        // gets none declared on the output either.
        let dem_has_undefined = dem.iter().any(|z| z.is_nan());
        let no_data = if profile.no_data.is_some() || dem_has_undefined {
            Some(profile.no_data.unwrap_or(f64::NAN))
        } else {
            None
        };

        let flat_data: Vec<f64> = match no_data {
            Some(nd) => areas
                .iter()
                .zip(dem.iter())
                .map(|(&a, &z)| if z.is_nan() { nd } else { a })
                .collect(),
            None => areas.iter().copied().collect(),
        };

        let mut rasterband = dataset.rasterband(1)?;
        let buffer = gdal::raster::Buffer::new((width, height), flat_data);
        rasterband.write((0, 0), (width, height), &buffer)?;
        if let Some(nd) = no_data {
            rasterband.set_no_data_value(Some(nd))?;
        }

        Ok(())
    }
}
