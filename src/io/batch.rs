//! Single-file and directory-batch processing.

use crate::core::surface_area;
use crate::io::RasterAdapter;
use crate::types::{SurfaceError, SurfaceResult};
use std::path::Path;

/// Name of the output subdirectory created inside a batch directory.
pub const BATCH_OUTPUT_DIR: &str = "surface_area";

/// Outcome counts of a directory batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rasters successfully processed.
    pub processed: usize,
    /// Files GDAL could not open as rasters.
    pub skipped: usize,
    /// Rasters that failed for another reason.
    pub failed: usize,
}

/// Derive the default output name for an input raster: `<stem>_sa.<ext>`.
pub fn default_output_name(input: &Path) -> SurfaceResult<String> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            SurfaceError::InvalidInput(format!("input path has no file name: {}", input.display()))
        })?;
    Ok(match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_sa.{}", stem, ext),
        None => format!("{}_sa", stem),
    })
}

/// Make a surface-area raster for one input file.
pub fn process_file(
    adapter: &dyn RasterAdapter,
    input: &Path,
    output: &Path,
) -> SurfaceResult<()> {
    let (dem, profile) = adapter.read_dem(input)?;
    let cell_y = profile.geo_transform.cell_y();
    let cell_x = profile.geo_transform.cell_x();
    log::debug!("Cell dimensions: {} x {}", cell_y, cell_x);

    let areas = surface_area(&dem, cell_y, cell_x)?;
    adapter.write_area(output, &areas, &dem, &profile)
}

/// Make surface-area rasters for every raster in a directory.
///
/// Outputs land in a `surface_area/` subdirectory. Files GDAL cannot open
/// are skipped; any other per-file failure is logged and the batch
/// continues. One bad file never aborts the run.
pub fn process_directory(adapter: &dyn RasterAdapter, dir: &Path) -> SurfaceResult<BatchSummary> {
    if !dir.is_dir() {
        return Err(SurfaceError::InvalidInput(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let out_dir = dir.join(BATCH_OUTPUT_DIR);
    std::fs::create_dir_all(&out_dir)?;

    let mut summary = BatchSummary::default();
    let mut entries: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    log::info!(
        "Batch processing {} candidate files in {}",
        entries.len(),
        dir.display()
    );

    for path in entries {
        let out_name = match default_output_name(&path) {
            Ok(name) => name,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                summary.skipped += 1;
                continue;
            }
        };
        let out_path = out_dir.join(out_name);

        match process_file(adapter, &path, &out_path) {
            Ok(()) => {
                log::info!("Processed {}", path.display());
                summary.processed += 1;
            }
            Err(SurfaceError::NotRaster(msg)) => {
                log::debug!("Skipping non-raster file: {}", msg);
                summary.skipped += 1;
            }
            Err(e) => {
                log::warn!(
                    "Could not make a surface-area raster for {}: {}",
                    path.display(),
                    e
                );
                summary.failed += 1;
            }
        }
    }

    log::info!(
        "Batch finished: {} processed, {} skipped, {} failed",
        summary.processed,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}
