// ABOUTME: Ordinary least squares with intercept over a fixed number of features
// ABOUTME: Centered normal equations solved by Gaussian elimination with partial pivoting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smartweight_core::errors::{AppError, AppResult};

/// Result of a least-squares fit with `N` features
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<const N: usize> {
    /// Constant term
    pub intercept: f64,
    /// One coefficient per feature, in feature order
    pub coefficients: [f64; N],
    /// Coefficient of determination on the fitted sample
    pub r_squared: f64,
}

impl<const N: usize> LinearFit<N> {
    /// Evaluate the fitted function
    #[must_use]
    pub fn predict(&self, features: &[f64; N]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (coefficient, x)| {
                coefficient.mul_add(*x, acc)
            })
    }
}

/// Fit `y = intercept + Σ coefficient_j * x_j` by ordinary least squares
///
/// Features and targets are centered first so the intercept drops out of the
/// normal equations; the remaining `N x N` system is solved directly.
///
/// # Errors
///
/// Returns `INVALID_INPUT` when the slices differ in length or hold no more
/// rows than unknowns, and `INTERNAL_ERROR` when the design matrix is
/// singular (a constant or collinear feature).
pub fn fit<const N: usize>(features: &[[f64; N]], targets: &[f64]) -> AppResult<LinearFit<N>> {
    if features.len() != targets.len() {
        return Err(AppError::invalid_input(format!(
            "Feature rows ({}) and targets ({}) differ in length",
            features.len(),
            targets.len()
        )));
    }
    if features.len() <= N {
        return Err(AppError::invalid_input(format!(
            "Insufficient data points for regression: need more than {N}, got {}",
            features.len()
        )));
    }

    let n = features.len() as f64;
    let mut feature_means = [0.0_f64; N];
    for row in features {
        for (mean, x) in feature_means.iter_mut().zip(row) {
            *mean += x;
        }
    }
    for mean in &mut feature_means {
        *mean /= n;
    }
    let target_mean = targets.iter().sum::<f64>() / n;

    let mut gram = [[0.0_f64; N]; N];
    let mut moment = [0.0_f64; N];
    for (row, y) in features.iter().zip(targets) {
        let centered: [f64; N] = std::array::from_fn(|j| row[j] - feature_means[j]);
        let dy = y - target_mean;
        for ((gram_row, moment_entry), ci) in gram.iter_mut().zip(&mut moment).zip(&centered) {
            *moment_entry = ci.mul_add(dy, *moment_entry);
            for (cell, cj) in gram_row.iter_mut().zip(&centered) {
                *cell = ci.mul_add(*cj, *cell);
            }
        }
    }

    let coefficients = solve(gram, moment)?;
    let intercept = coefficients
        .iter()
        .zip(&feature_means)
        .fold(target_mean, |acc, (coefficient, mean)| {
            (-coefficient).mul_add(*mean, acc)
        });

    let mut fitted = LinearFit {
        intercept,
        coefficients,
        r_squared: 0.0,
    };
    fitted.r_squared = r_squared(&fitted, features, targets, target_mean);
    Ok(fitted)
}

fn r_squared<const N: usize>(
    fitted: &LinearFit<N>,
    features: &[[f64; N]],
    targets: &[f64],
    target_mean: f64,
) -> f64 {
    let (residual, total) =
        features
            .iter()
            .zip(targets)
            .fold((0.0_f64, 0.0_f64), |(residual, total), (row, y)| {
                let error = y - fitted.predict(row);
                let spread = y - target_mean;
                (error.mul_add(error, residual), spread.mul_add(spread, total))
            });
    if total.abs() < f64::EPSILON {
        // constant targets: a perfect fit by definition
        1.0
    } else {
        1.0 - residual / total
    }
}

/// Solve `a x = b` for a small dense system
fn solve<const N: usize>(mut a: [[f64; N]; N], mut b: [f64; N]) -> AppResult<[f64; N]> {
    for col in 0..N {
        let pivot = (col..N)
            .max_by(|&lhs, &rhs| a[lhs][col].abs().total_cmp(&a[rhs][col].abs()))
            .unwrap_or(col);
        let pivot_value = a[pivot][col];
        if !pivot_value.is_finite() || pivot_value.abs() < f64::EPSILON {
            return Err(AppError::internal(
                "Cannot calculate regression: singular design matrix",
            ));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        let pivot_row = a[col];
        let pivot_rhs = b[col];
        for row in (col + 1)..N {
            let factor = a[row][col] / pivot_row[col];
            for (cell, pivot_cell) in a[row].iter_mut().zip(&pivot_row).skip(col) {
                *cell = (-factor).mul_add(*pivot_cell, *cell);
            }
            b[row] = (-factor).mul_add(pivot_rhs, b[row]);
        }
    }

    let mut solution = [0.0_f64; N];
    for row in (0..N).rev() {
        let tail: f64 = ((row + 1)..N).map(|k| a[row][k] * solution[k]).sum();
        solution[row] = (b[row] - tail) / a[row][row];
    }
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_exact_plane() {
        let features: Vec<[f64; 2]> = (0..20)
            .map(|i| {
                let x = f64::from(i);
                [x, (x * 0.7).sin() * 10.0]
            })
            .collect();
        let targets: Vec<f64> = features
            .iter()
            .map(|[a, b]| 3.0 + 2.0 * a - 0.5 * b)
            .collect();

        let fitted = fit(&features, &targets).unwrap();
        assert!((fitted.intercept - 3.0).abs() < 1e-9);
        assert!((fitted.coefficients[0] - 2.0).abs() < 1e-9);
        assert!((fitted.coefficients[1] + 0.5).abs() < 1e-9);
        assert!((fitted.r_squared - 1.0).abs() < 1e-9);
        assert!((fitted.predict(&[1.0, 2.0]) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_collinear_features() {
        let features: Vec<[f64; 2]> = (0..10).map(|i| [f64::from(i), f64::from(i) * 2.0]).collect();
        let targets: Vec<f64> = (0..10).map(f64::from).collect();
        assert!(fit(&features, &targets).is_err());
    }

    #[test]
    fn test_rejects_too_few_rows() {
        let features = [[1.0, 2.0], [2.0, 1.0]];
        assert!(fit(&features, &[1.0, 2.0]).is_err());
        assert!(fit(&features, &[1.0]).is_err());
    }
}
