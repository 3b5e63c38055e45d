//! Gauss–Jordan inversion with full pivoting.
//!
//! The primary matrix is reduced in place and ends up holding its own
//! inverse once the column interchanges are undone; the auxiliary matrix
//! receives the same row operations and ends up as `A⁻¹ · B`.

use super::Mat4;
use crate::error::{MathError, Result};

const N: usize = 4;

impl Mat4 {
    /// Return the inverse, or [`MathError::Singular`] if elimination hits a zero pivot.
    pub fn try_inverse(&self) -> Result<Mat4> {
        let mut inv = *self;
        let mut aux = Mat4::IDENTITY;
        Mat4::gauss_jordan(&mut inv, &mut aux)?;
        Ok(inv)
    }

    /// Invert in place. On error `self` is left untouched.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.try_inverse()?;
        Ok(())
    }

    /// Reduce `a` and `b` simultaneously.
    ///
    /// On success `a` holds `a⁻¹` and `b` holds `a⁻¹ · b`. On failure neither
    /// argument is written.
    pub fn gauss_jordan(a: &mut Mat4, b: &mut Mat4) -> Result<()> {
        let mut m = *a;
        let mut aux = *b;

        let mut pivot_used = [0u8; N];
        let mut row_of_step = [0usize; N];
        let mut col_of_step = [0usize; N];

        for step in 0..N {
            let (prow, pcol) = find_pivot(&m, &pivot_used).ok_or(MathError::Singular)?;
            pivot_used[pcol] += 1;

            // Move the pivot onto the diagonal with a row interchange.
            if prow != pcol {
                for l in 0..N {
                    m.swap(prow, l, pcol, l);
                    aux.swap(prow, l, pcol, l);
                }
            }
            row_of_step[step] = prow;
            col_of_step[step] = pcol;

            // Exact test: rank deficiency that leaves roundoff residue is not caught here.
            let pivot = m.get(pcol, pcol);
            if pivot == 0.0 {
                tracing::debug!(step, row = prow, col = pcol, "zero pivot, matrix is singular");
                return Err(MathError::Singular);
            }

            let pivot_inv = 1.0 / pivot;
            m.set(pcol, pcol, 1.0);
            for l in 0..N {
                m.set(pcol, l, m.get(pcol, l) * pivot_inv);
                aux.set(pcol, l, aux.get(pcol, l) * pivot_inv);
            }

            for ll in (0..N).filter(|&ll| ll != pcol) {
                let factor = m.get(ll, pcol);
                m.set(ll, pcol, 0.0);
                for l in 0..N {
                    m.set(ll, l, m.get(ll, l) - m.get(pcol, l) * factor);
                    aux.set(ll, l, aux.get(ll, l) - aux.get(pcol, l) * factor);
                }
            }
        }

        // Undo the column interchanges in reverse order of how they were made.
        for step in (0..N).rev() {
            let (r, c) = (row_of_step[step], col_of_step[step]);
            if r != c {
                for k in 0..N {
                    m.swap(k, r, k, c);
                }
            }
        }

        *a = m;
        *b = aux;
        Ok(())
    }
}

/// Largest-magnitude entry among rows and columns not yet pivoted on.
///
/// Rows are scanned outer, columns inner; the first maximal entry wins.
fn find_pivot(m: &Mat4, pivot_used: &[u8; N]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, f32)> = None;
    for j in (0..N).filter(|&j| pivot_used[j] != 1) {
        for k in (0..N).filter(|&k| pivot_used[k] == 0) {
            let mag = m.get(j, k).abs();
            match best {
                Some((_, _, big)) if mag <= big => {}
                _ => best = Some((j, k, mag)),
            }
        }
    }
    best.map(|(j, k, _)| (j, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_search_takes_first_of_ties() {
        let mut m = Mat4::ZERO;
        m.set(1, 2, -3.0);
        m.set(2, 1, 3.0);
        assert_eq!(find_pivot(&m, &[0; N]), Some((1, 2)));
    }

    #[test]
    fn pivot_search_skips_used_rows_and_columns() {
        let mut m = Mat4::IDENTITY;
        m.scalar_multiply(2.0);
        m.set(0, 0, 10.0);
        assert_eq!(find_pivot(&m, &[1, 0, 0, 0]), Some((1, 1)));
    }

    #[test]
    fn all_zero_still_yields_a_candidate() {
        assert_eq!(find_pivot(&Mat4::ZERO, &[0; N]), Some((0, 0)));
    }

    #[test]
    fn auxiliary_matches_primary_for_identity_input() {
        let mut a = Mat4::from_cols_array([
            0., 2., 0., 0.,
            1., 0., 0., 0.,
            0., 0., 0., 4.,
            0., 0., 8., 0.,
        ]);
        let mut b = Mat4::IDENTITY;
        Mat4::gauss_jordan(&mut a, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn failure_leaves_both_arguments_untouched() {
        let mut a = Mat4::ZERO;
        a.set(0, 0, 1.0);
        let mut b = Mat4::IDENTITY;
        assert_eq!(Mat4::gauss_jordan(&mut a, &mut b), Err(MathError::Singular));
        assert_eq!(b, Mat4::IDENTITY);
        assert_eq!(a.get(0, 0), 1.0);
        assert_eq!(a.0.iter().filter(|&&v| v != 0.0).count(), 1);
    }
}
