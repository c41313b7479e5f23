//! Dense linear system solver.

use selection_spi::{Result, SelectionError};

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// `a` must be square and match `b` in height. A pivot that collapses to
/// (near) zero means the system is singular and fails with a numerical error
/// instead of producing garbage weights.
pub(crate) fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(SelectionError::Shape(format!(
            "system matrix is not {n}x{n}"
        )));
    }

    for pivot in 0..n {
        let mut best = pivot;
        for row in pivot + 1..n {
            if a[row][pivot].abs() > a[best][pivot].abs() {
                best = row;
            }
        }
        if a[best][pivot].abs() < 1e-12 {
            return Err(SelectionError::Numerical(
                "singular system in linear solve".to_string(),
            ));
        }
        a.swap(pivot, best);
        b.swap(pivot, best);

        for row in pivot + 1..n {
            let factor = a[row][pivot] / a[pivot][pivot];
            for col in pivot..n {
                a[row][col] -= factor * a[pivot][col];
            }
            b[row] -= factor * b[pivot];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for col in row + 1..n {
            sum -= a[row][col] * x[col];
        }
        x[row] = sum / a[row][row];
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solves_identity() {
        let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let x = solve(a, vec![3.0, -2.0]).unwrap();
        assert_eq!(x, vec![3.0, -2.0]);
    }

    #[test]
    fn test_solves_general_system() {
        // 2x + y = 5, x + 3y = 10 -> x = 1, y = 3
        let a = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
        let x = solve(a, vec![5.0, 10.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-9);
        assert!((x[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_pivoting_handles_zero_leading_entry() {
        let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let x = solve(a, vec![2.0, 7.0]).unwrap();
        assert!((x[0] - 7.0).abs() < 1e-9);
        assert!((x[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_singular_system_fails() {
        let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        let result = solve(a, vec![1.0, 2.0]);
        assert!(matches!(result, Err(SelectionError::Numerical(_))));
    }

    #[test]
    fn test_shape_mismatch_fails() {
        let a = vec![vec![1.0, 2.0]];
        let result = solve(a, vec![1.0, 2.0]);
        assert!(matches!(result, Err(SelectionError::Shape(_))));
    }
}
