//! # Surface Filling
//!
//! Triangulates a convex polygon given as an ordered ring of vertex indices.
//!
//! ## Algorithm
//!
//! Recursive pairwise fan reduction: every even-indexed vertex survives into
//! the next round, and each odd-indexed vertex is cut off as an ear together
//! with its two even neighbours. The surviving ring is filled the same way
//! until three or fewer vertices remain.
//!
//! ```text
//!   ring: 0 1 2 3 4 5        ears: (0 1 2) (2 3 4) (4 5 0)
//!   next: 0 2 4              ears: (0 2 4)
//! ```
//!
//! A ring of `n >= 3` indices always yields `n - 2` triangles. The routine
//! knows nothing about positions; callers guarantee the ring is convex.

#[cfg(test)]
mod tests;

/// Triangulates the polygon whose boundary visits `ring` in order.
///
/// With `clockwise == false` each triangle keeps the ring's own order; with
/// `clockwise == true` the last two indices of every triangle are swapped.
/// Rings of two or fewer indices produce no triangles.
///
/// # Example
///
/// ```rust
/// use prism_mesh::ops::fill_surface;
///
/// let tris = fill_surface(&[10, 11, 12, 13], false);
/// assert_eq!(tris, vec![[10, 11, 12], [12, 13, 10]]);
///
/// let tris = fill_surface(&[10, 11, 12], true);
/// assert_eq!(tris, vec![[10, 12, 11]]);
/// ```
pub fn fill_surface(ring: &[u32], clockwise: bool) -> Vec<[u32; 3]> {
    let mut triangles = Vec::with_capacity(ring.len().saturating_sub(2));
    fill_surface_into(ring, clockwise, &mut triangles);
    triangles
}

/// Same as [`fill_surface`], appending into an existing triangle buffer.
///
/// Outer-ring triangles are appended first, inner rings after them.
pub fn fill_surface_into(ring: &[u32], clockwise: bool, out: &mut Vec<[u32; 3]>) {
    let n = ring.len();

    // A two-vertex remainder is what's left after halving a square
    if n <= 2 {
        return;
    }

    if n == 3 {
        out.push(oriented(ring[0], ring[1], ring[2], clockwise));
        return;
    }

    let mut unfinished = Vec::with_capacity(n.div_ceil(2));

    for i in (0..n).step_by(2) {
        unfinished.push(ring[i]);

        if i + 1 < n {
            out.push(oriented(ring[i], ring[i + 1], ring[(i + 2) % n], clockwise));
        }
    }

    fill_surface_into(&unfinished, clockwise, out);
}

#[inline]
fn oriented(a: u32, b: u32, c: u32, clockwise: bool) -> [u32; 3] {
    if clockwise {
        [a, c, b]
    } else {
        [a, b, c]
    }
}
