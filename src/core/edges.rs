//! Edge-length construction between neighboring DEM cells.
//!
//! Every cell is connected to its neighbors by edges whose 3-D length follows
//! from the elevation difference and the fixed horizontal spacing (Jenness,
//! J. S. (2004). Calculating landscape surface area from digital elevation
//! models. Wildlife Society Bulletin 32(3), 829-839). For a 10 m cell spacing
//! and a neighbor 3 m lower, the connecting edge is sqrt(10^2 + 3^2) ~ 10.44 m.
//! Only half of each edge lies inside the cell being measured, so stored
//! lengths are halved.

use crate::types::{DemArray, EdgeArray, SurfaceError, SurfaceResult};
use ndarray::Array3;

/// Canonical neighbor offsets (row, col) for the 4 edge directions:
/// {0: east, 1: south-east diagonal, 2: south, 3: north-east diagonal}.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 1), (1, 0), (-1, 1)];

/// Build the (rows x cols x 4) edge-length array for a DEM.
///
/// `edges[[y, x, d]]` is half the 3-D distance from cell (y, x) to its
/// neighbor in direction `d`. Positions whose neighbor falls outside the grid
/// keep the 0.0 fill value; a zero side can never yield a positive triangle
/// area downstream, so boundary cells are handled structurally rather than as
/// errors. NaN elevation propagates to NaN edge lengths.
pub fn build_edge_array(dem: &DemArray, cell_y: f64, cell_x: f64) -> SurfaceResult<EdgeArray> {
    validate_inputs(dem, cell_y, cell_x)?;

    let (rows, cols) = dem.dim();
    log::debug!("Building edge array for {}x{} grid", rows, cols);

    let diagonal = (cell_y * cell_y + cell_x * cell_x).sqrt();
    // Horizontal runs per direction; diagonals share the same run.
    let runs = [cell_y, diagonal, cell_x, diagonal];

    let mut edges = Array3::<f64>::zeros((rows, cols, 4));

    for (d, (&(dy, dx), &run)) in DIRECTIONS.iter().zip(runs.iter()).enumerate() {
        for y in 0..rows {
            let ny = y as isize + dy;
            if ny < 0 || ny >= rows as isize {
                continue;
            }
            for x in 0..cols {
                let nx = x as isize + dx;
                if nx < 0 || nx >= cols as isize {
                    continue;
                }
                let dz = dem[[ny as usize, nx as usize]] - dem[[y, x]];
                edges[[y, x, d]] = 0.5 * (dz * dz + run * run).sqrt();
            }
        }
    }

    Ok(edges)
}

/// Shared precondition checks for the builder and the aggregator.
pub(crate) fn validate_inputs(dem: &DemArray, cell_y: f64, cell_x: f64) -> SurfaceResult<()> {
    let (rows, cols) = dem.dim();
    if rows == 0 || cols == 0 {
        return Err(SurfaceError::InvalidInput(format!(
            "elevation grid must be non-empty, got {}x{}",
            rows, cols
        )));
    }
    if !(cell_y > 0.0) || !(cell_x > 0.0) {
        return Err(SurfaceError::InvalidInput(format!(
            "cell dimensions must be positive, got cell_y={}, cell_x={}",
            cell_y, cell_x
        )));
    }
    Ok(())
}
