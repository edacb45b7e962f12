//! Square integer height grid and its smoothing pass.

/// Immutable square grid of column heights.
///
/// Stored row-major in a single allocation; `height(x, z)` addresses
/// column `(x, z)` with both coordinates in `[0, size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heightmap {
    size: usize,
    heights: Vec<u32>,
}

impl Heightmap {
    /// Wrap a row-major height buffer.
    ///
    /// `heights.len()` must equal `size * size`.
    pub(crate) fn from_raw(size: usize, heights: Vec<u32>) -> Self {
        debug_assert_eq!(heights.len(), size * size);
        Self { size, heights }
    }

    /// Grid side length in columns.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Height of the column at `(x, z)` in blocks.
    #[must_use]
    pub fn height(&self, x: usize, z: usize) -> u32 {
        self.heights[x * self.size + z]
    }

    /// All heights in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.heights
    }

    /// One box-average smoothing pass, producing a replacement grid.
    ///
    /// Each output cell is the truncating integer mean of the 3x3
    /// neighborhood clipped to the grid: corners average 4 cells, edges 6,
    /// interior cells 9. Neighbors outside the grid are left out of both
    /// the sum and the divisor - no wrapping, no edge clamping.
    #[must_use]
    pub fn smoothed(&self) -> Self {
        let size = self.size;
        let mut smoothed = vec![0u32; size * size];

        for x in 0..size {
            for z in 0..size {
                let mut sum = 0u32;
                let mut count = 0u32;

                for dx in -1i64..=1 {
                    for dz in -1i64..=1 {
                        let nx = x as i64 + dx;
                        let nz = z as i64 + dz;
                        if (0..size as i64).contains(&nx) && (0..size as i64).contains(&nz) {
                            sum += self.heights[nx as usize * size + nz as usize];
                            count += 1;
                        }
                    }
                }

                smoothed[x * size + z] = sum / count;
            }
        }

        Self {
            size,
            heights: smoothed,
        }
    }
}
