//! Ordinary least squares with an intercept term.
//!
//! The fit centres both the features and the target, then solves the normal
//! equations through the pseudo-inverse of the centred Gram matrix. For a
//! well-conditioned design this is the usual OLS solution; for a rank
//! deficient one (a single row, a constant column, collinear columns) it
//! yields the minimum-norm coefficients instead of failing.

use crate::error::ScoringError;

/// Eigenvalues below `largest * RELATIVE_CUTOFF` are treated as zero.
const RELATIVE_CUTOFF: f64 = 1e-10;

/// Upper bound on Jacobi sweeps; small matrices converge in a handful.
const MAX_SWEEPS: usize = 64;

/// A fitted linear model `y = intercept + coefficients · x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRegression<const N: usize> {
    pub coefficients: [f64; N],
    pub intercept: f64,
}

impl<const N: usize> LinearRegression<N> {
    /// Fit the model to `features` and `targets`.
    pub fn fit(features: &[[f64; N]], targets: &[f64]) -> Result<Self, ScoringError> {
        if features.len() != targets.len() {
            return Err(ScoringError::LengthMismatch {
                features: features.len(),
                targets: targets.len(),
            });
        }
        if features.is_empty() {
            return Err(ScoringError::InsufficientData {
                records: 0,
                train: 0,
                test: 0,
            });
        }

        let n = features.len() as f64;

        let mut x_mean = [0.0; N];
        for row in features {
            for (mean, value) in x_mean.iter_mut().zip(row) {
                *mean += value;
            }
        }
        for mean in &mut x_mean {
            *mean /= n;
        }
        let y_mean = targets.iter().sum::<f64>() / n;

        let mut gram = [[0.0; N]; N];
        let mut moment = [0.0; N];
        for (row, &y) in features.iter().zip(targets) {
            let centred: [f64; N] = std::array::from_fn(|i| row[i] - x_mean[i]);
            let dy = y - y_mean;
            for i in 0..N {
                moment[i] += centred[i] * dy;
                for j in 0..N {
                    gram[i][j] += centred[i] * centred[j];
                }
            }
        }

        let coefficients = pseudo_solve(gram, moment);
        let intercept = y_mean - dot(&coefficients, &x_mean);

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    pub fn predict(&self, features: &[f64; N]) -> f64 {
        self.intercept + dot(&self.coefficients, features)
    }
}

/// Coefficient of determination of `predicted` against `actual`.
///
/// Returns `None` when fewer than two samples are given, since the statistic
/// is undefined there. When `actual` has no variance the result is `1.0` for
/// a perfect prediction and `0.0` otherwise.
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    if actual.len() < 2 || actual.len() != predicted.len() {
        return None;
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Some(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Some(1.0 - ss_res / ss_tot)
}

fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Solve `matrix · x = rhs` for symmetric positive semi-definite `matrix`
/// using its pseudo-inverse.
fn pseudo_solve<const N: usize>(matrix: [[f64; N]; N], rhs: [f64; N]) -> [f64; N] {
    let (eigenvalues, eigenvectors) = symmetric_eigen(matrix);

    let largest = eigenvalues.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let cutoff = largest * RELATIVE_CUTOFF;

    let mut solution = [0.0; N];
    if largest == 0.0 {
        return solution;
    }

    for k in 0..N {
        let lambda = eigenvalues[k];
        if lambda <= cutoff {
            continue;
        }
        let projection: f64 = (0..N).map(|i| eigenvectors[i][k] * rhs[i]).sum();
        let weight = projection / lambda;
        for (i, value) in solution.iter_mut().enumerate() {
            *value += weight * eigenvectors[i][k];
        }
    }

    solution
}

/// Cyclic Jacobi eigen decomposition of a symmetric matrix.
///
/// Returns the eigenvalues and a matrix whose columns are the matching
/// eigenvectors.
fn symmetric_eigen<const N: usize>(mut a: [[f64; N]; N]) -> ([f64; N], [[f64; N]; N]) {
    let mut v = [[0.0; N]; N];
    for (i, row) in v.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    let scale: f64 = a.iter().flatten().map(|x| x * x).sum();

    for _ in 0..MAX_SWEEPS {
        let mut off_diagonal = 0.0;
        for p in 0..N {
            for q in (p + 1)..N {
                off_diagonal += a[p][q] * a[p][q];
            }
        }
        if off_diagonal <= scale * f64::EPSILON * f64::EPSILON {
            break;
        }

        for p in 0..N {
            for q in (p + 1)..N {
                if a[p][q] == 0.0 {
                    continue;
                }

                let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (kp, kq) = (row[p], row[q]);
                    row[p] = c * kp - s * kq;
                    row[q] = s * kp + c * kq;
                }
                for k in 0..N {
                    let (pk, qk) = (a[p][k], a[q][k]);
                    a[p][k] = c * pk - s * qk;
                    a[q][k] = s * pk + c * qk;
                }
                for row in v.iter_mut() {
                    let (kp, kq) = (row[p], row[q]);
                    row[p] = c * kp - s * kq;
                    row[q] = s * kp + c * kq;
                }
            }
        }
    }

    (std::array::from_fn(|i| a[i][i]), v)
}
