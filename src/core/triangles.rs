//! Decomposition of a cell into 8 triangles and edge selection.
//!
//! Each cell is split into 8 triangles fanned around its center: one per
//! neighboring cell pair. A triangle's vertices are the cell center and the
//! midpoints of the two edges running to adjacent neighbors, so its sides are
//! half-edges from the edge-length array. Which half-edge forms which side is
//! a fixed property of the grid geometry, captured in [`TRIANGLES`].

use crate::types::EdgeArray;
use ndarray::Array2;

/// One side of a sub-cell triangle: the edge-array entry at
/// `(y + dy, x + dx, direction)` relative to the cell being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef {
    pub dy: isize,
    pub dx: isize,
    pub direction: usize,
}

const fn eref(dy: isize, dx: isize, direction: usize) -> EdgeRef {
    EdgeRef { dy, dx, direction }
}

/// The 8 triangles partially making up a cell, counter-clockwise from the
/// north-west. Directions are those of [`super::edges::DIRECTIONS`].
pub const TRIANGLES: [[EdgeRef; 3]; 8] = [
    // north-west quadrant
    [eref(-1, -1, 1), eref(-1, -1, 0), eref(-1, 0, 2)],
    // north-east quadrant
    [eref(-1, 0, 2), eref(-1, 0, 0), eref(0, 0, 3)],
    [eref(-1, -1, 2), eref(0, -1, 0), eref(-1, -1, 1)],
    [eref(0, 0, 3), eref(-1, 1, 2), eref(0, 0, 0)],
    // west / south-west
    [eref(0, -1, 0), eref(0, -1, 2), eref(1, -1, 3)],
    // east / south-east
    [eref(0, 0, 0), eref(0, 1, 2), eref(0, 0, 1)],
    [eref(1, -1, 3), eref(0, 0, 2), eref(1, -1, 0)],
    [eref(0, 0, 2), eref(0, 0, 1), eref(1, 0, 0)],
];

/// Align one direction slice of the edge array to cell coordinates.
///
/// Output cell (y, x) holds `edges[[y + dy, x + dx, direction]]` when that
/// index is in bounds, NaN otherwise. Out-of-range reads never wrap or clamp;
/// a boundary cell whose triangle reaches outside the grid sees NaN and the
/// aggregator drops that triangle.
pub fn select_edge(edges: &EdgeArray, edge_ref: EdgeRef) -> Array2<f64> {
    let (rows, cols, _) = edges.dim();
    Array2::from_shape_fn((rows, cols), |(y, x)| {
        let sy = y as isize + edge_ref.dy;
        let sx = x as isize + edge_ref.dx;
        if sy >= 0 && sy < rows as isize && sx >= 0 && sx < cols as isize {
            edges[[sy as usize, sx as usize, edge_ref.direction]]
        } else {
            f64::NAN
        }
    })
}
