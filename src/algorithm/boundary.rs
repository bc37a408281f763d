//! Boundary classification around hole regions
//!
//! The boundary is the set of known pixels adjacent to at least one hole
//! pixel under the configured connectivity. Hole indices are partitioned
//! into chunks so workers can build partial sets independently before a
//! final union merge.

use rayon::prelude::*;

use crate::algorithm::pixelset::PixelSet;
use crate::io::configuration::PARALLEL_CHUNK_SIZE;
use crate::math::weighting::BoundarySample;
use crate::spatial::PixelGrid;
use crate::spatial::neighbors::{Connectivity, step};

/// Collect the flat indices of known pixels bordering any hole
///
/// Neighbor offsets that land outside the grid are clipped, so holes on the
/// image border contribute only their in-grid neighbors.
pub fn classify_boundary(
    grid: &PixelGrid,
    holes: &PixelSet,
    connectivity: Connectivity,
) -> PixelSet {
    let cells = grid.cells();
    let width = grid.width();
    let height = grid.height();
    let hole_indices = holes.to_vec();

    hole_indices
        .par_chunks(PARALLEL_CHUNK_SIZE)
        .map(|chunk| {
            let mut local = PixelSet::new(cells);
            for &index in chunk {
                let position = grid.coords_of(index);
                for offset in connectivity.offsets() {
                    if let Some([x, y]) = step(position, offset, width, height) {
                        let neighbor = grid.flat_index(x, y);
                        if !holes.contains(neighbor) {
                            local.insert(neighbor);
                        }
                    }
                }
            }
            local
        })
        .reduce(
            || PixelSet::new(cells),
            |mut merged, local| {
                merged.union_with(&local);
                merged
            },
        )
}

/// Resolve boundary indices to positioned intensity samples
///
/// Membership in the boundary set guarantees an in-grid known pixel, so
/// indices that fail to resolve are simply skipped.
pub fn boundary_samples(grid: &PixelGrid, boundary: &PixelSet) -> Vec<BoundarySample> {
    boundary
        .to_vec()
        .into_iter()
        .filter_map(|index| {
            let [x, y] = grid.coords_of(index);
            let intensity = grid.get(x, y).ok()?.intensity()?;
            Some(BoundarySample {
                position: [x, y],
                intensity,
            })
        })
        .collect()
}
