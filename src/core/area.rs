//! Per-cell surface area aggregation.
//!
//! Sums Heron's-formula areas of the 8 sub-cell triangles, doubles boundary
//! cells to compensate for triangles that reach outside the grid, and clamps
//! every cell to at least its planar area.

use crate::core::edges::{build_edge_array, validate_inputs};
use crate::core::triangles::{select_edge, EdgeRef, TRIANGLES};
use crate::types::{AreaArray, DemArray, EdgeArray, SurfaceError, SurfaceResult};
use ndarray::{Array2, Zip};
use rayon::prelude::*;

/// Compute the per-cell surface area of a DEM.
///
/// Pipeline entry point: builds the edge-length array, then aggregates the
/// 8 triangle contributions per cell. Output has the same shape as `dem`;
/// every value is at least `cell_y * cell_x`.
pub fn surface_area(dem: &DemArray, cell_y: f64, cell_x: f64) -> SurfaceResult<AreaArray> {
    let edges = build_edge_array(dem, cell_y, cell_x)?;
    aggregate_area(dem, &edges, cell_y, cell_x)
}

/// Aggregate triangle areas from a prebuilt edge-length array.
///
/// The 8 triangles are independent, so their area grids are computed in
/// parallel and reduced by elementwise summation.
pub fn aggregate_area(
    dem: &DemArray,
    edges: &EdgeArray,
    cell_y: f64,
    cell_x: f64,
) -> SurfaceResult<AreaArray> {
    validate_inputs(dem, cell_y, cell_x)?;
    let (rows, cols) = dem.dim();
    let (erows, ecols, edirs) = edges.dim();
    if (erows, ecols) != (rows, cols) || edirs != 4 {
        return Err(SurfaceError::InvalidInput(format!(
            "edge array shape {}x{}x{} does not match {}x{} grid",
            erows, ecols, edirs, rows, cols
        )));
    }

    log::debug!("Aggregating triangle areas for {}x{} grid", rows, cols);

    // The 8 grids are computed in parallel but summed in table order, so
    // repeated runs on the same input are bit-identical.
    let grids: Vec<Array2<f64>> = TRIANGLES
        .par_iter()
        .map(|tri| triangle_area_grid(edges, tri))
        .collect();
    let mut areas = Array2::<f64>::zeros((rows, cols));
    for grid in &grids {
        areas += grid;
    }

    // Boundary cells only have 4 of their 8 triangles inside the grid, so
    // their sums are doubled. Corner cells sit on both a boundary row and
    // column and pick up both doublings.
    for x in 0..cols {
        areas[[0, x]] *= 2.0;
        areas[[rows - 1, x]] *= 2.0;
    }
    for y in 0..rows {
        areas[[y, 0]] *= 2.0;
        areas[[y, cols - 1]] *= 2.0;
    }

    // Surface area can never be below the flat planar area; residual rounding
    // in near-flat terrain must not produce physically impossible values.
    let min_area = cell_y * cell_x;
    areas.mapv_inplace(|a| if a < min_area { min_area } else { a });

    Ok(areas)
}

/// Heron's-formula areas for one triangle of the decomposition, evaluated for
/// every cell at once.
fn triangle_area_grid(edges: &EdgeArray, tri: &[EdgeRef; 3]) -> Array2<f64> {
    let a = select_edge(edges, tri[0]);
    let b = select_edge(edges, tri[1]);
    let c = select_edge(edges, tri[2]);

    let mut out = Array2::<f64>::zeros(a.dim());
    Zip::from(&mut out)
        .and(&a)
        .and(&b)
        .and(&c)
        .for_each(|o, &a, &b, &c| *o = heron(a, b, c));
    out
}

/// Triangle area from its three side lengths.
///
/// Undefined sides (triangle outside the grid, no-data elevation) and a
/// negative radicand from floating-point cancellation in near-degenerate
/// triangles both contribute zero, never NaN, so a missing triangle is simply
/// absent from the cell's total.
fn heron(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    let radicand = s * (s - a) * (s - b) * (s - c);
    if radicand > 0.0 {
        radicand.sqrt()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::{array, Array2};

    fn paper_grid() -> DemArray {
        array![[190.0, 170.0, 155.0], [183.0, 165.0, 145.0], [175.0, 160.0, 122.0]]
    }

    #[test]
    fn test_paper_center_cell() {
        let areas = surface_area(&paper_grid(), 100.0, 100.0).unwrap();
        // Published value for the center cell; the paper itself carries some
        // rounding error, so match to the nearest unit.
        assert_abs_diff_eq!(areas[[1, 1]], 10280.48, epsilon = 0.5);
    }

    #[test]
    fn test_flat_grid_is_planar() {
        let dem = DemArray::from_elem((10, 10), 7.0);
        let areas = surface_area(&dem, 100.0, 100.0).unwrap();
        for &a in areas.iter() {
            assert!(a >= 10_000.0);
            assert_relative_eq!(a, 10_000.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_45_degree_slope() {
        // Elevation rises 1 unit per row with unit cells: every cell's
        // surface is inclined 45 degrees, so its area is sqrt(2).
        let dem = Array2::from_shape_fn((10, 10), |(y, _)| y as f64);
        let areas = surface_area(&dem, 1.0, 1.0).unwrap();
        for &a in areas.iter() {
            assert_abs_diff_eq!(a, 2.0_f64.sqrt(), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_clamp_invariant() {
        let areas = surface_area(&paper_grid(), 100.0, 100.0).unwrap();
        for &a in areas.iter() {
            assert!(a >= 10_000.0);
        }
    }

    #[test]
    fn test_boundary_matches_interior_under_uniform_slope() {
        // Under a constant slope, the doubling rule makes edge and corner
        // cells report the same area density as interior cells.
        let dem = Array2::from_shape_fn((8, 8), |(y, _)| 3.0 * y as f64);
        let areas = surface_area(&dem, 1.0, 1.0).unwrap();
        let interior = areas[[4, 4]];
        assert_abs_diff_eq!(areas[[0, 0]], interior, epsilon = 1e-9);
        assert_abs_diff_eq!(areas[[0, 4]], interior, epsilon = 1e-9);
        assert_abs_diff_eq!(areas[[4, 0]], interior, epsilon = 1e-9);
        assert_abs_diff_eq!(areas[[7, 7]], interior, epsilon = 1e-9);
    }

    #[test]
    fn test_nodata_cell_clamps_to_planar() {
        let mut dem = paper_grid();
        dem[[1, 1]] = f64::NAN;
        let areas = surface_area(&dem, 100.0, 100.0).unwrap();

        // Every triangle touching the NaN cell contributes zero; the cell
        // itself falls back to the planar floor and the output stays finite.
        assert_eq!(areas[[1, 1]], 10_000.0);
        for &a in areas.iter() {
            assert!(a.is_finite());
            assert!(a >= 10_000.0);
        }
    }

    #[test]
    fn test_output_shape_matches_input() {
        let dem = DemArray::from_elem((5, 17), 3.0);
        let areas = surface_area(&dem, 2.0, 3.0).unwrap();
        assert_eq!(areas.dim(), dem.dim());
    }

    #[test]
    fn test_idempotent() {
        let dem = paper_grid();
        let first = surface_area(&dem, 100.0, 100.0).unwrap();
        let second = surface_area(&dem, 100.0, 100.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let dem = paper_grid();
        let edges = build_edge_array(&DemArray::zeros((4, 4)), 1.0, 1.0).unwrap();
        assert!(aggregate_area(&dem, &edges, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_empty_grid_is_an_error() {
        // A zero-row grid with a matching edge array must fail fast, not
        // panic in the boundary-doubling loop.
        for shape in [(0, 5), (5, 0), (0, 0)] {
            let dem = DemArray::zeros(shape);
            let edges = EdgeArray::zeros((shape.0, shape.1, 4));
            match aggregate_area(&dem, &edges, 1.0, 1.0) {
                Err(SurfaceError::InvalidInput(_)) => {}
                other => panic!("expected InvalidInput for {:?}, got {:?}", shape, other),
            }
        }
    }

    #[test]
    fn test_heron_degenerate_sides() {
        // Right triangle sanity check.
        assert_abs_diff_eq!(heron(3.0, 4.0, 5.0), 6.0, epsilon = 1e-12);
        // Zero or undefined sides never yield a positive area.
        assert_eq!(heron(0.0, 4.0, 5.0), 0.0);
        assert_eq!(heron(f64::NAN, 4.0, 5.0), 0.0);
        // Collinear sides cancel to zero, not NaN.
        assert_eq!(heron(1.0, 2.0, 3.0), 0.0);
    }
}
