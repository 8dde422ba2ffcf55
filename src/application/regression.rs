//! Ordinary least squares with two explanatory variables and an intercept.
//!
//! The fit works on centred data:
//!
//! ```text
//! Xc = X - mean(X)      yc = y - mean(y)
//! S  = Xcᵀ Xc (2x2)     r  = Xcᵀ yc
//! β  = S⁺ r             intercept = mean(y) - β · mean(X)
//! ```
//!
//! `S⁺` is the Moore-Penrose pseudo-inverse from the closed-form eigen
//! decomposition of the symmetric 2x2 matrix. Eigenvalues at or below
//! `λmax * RANK_TOLERANCE` count as zero, so collinear histories (for instance
//! one sale per year, always five months apart) get the minimum-norm solution.

use crate::domain::errors::ForecastError;
use crate::domain::forecast::FeatureRow;
use ndarray::{Array1, Array2, Axis};

/// Relative eigenvalue cutoff for the pseudo-inverse
pub const RANK_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearTrendModel {
    /// (year, month) coefficients
    coefficients: [f64; 2],
    intercept: f64,
    n_observations: usize,
    r_squared: f64,
}

impl LinearTrendModel {
    /// Fits on an `n x 2` design matrix against `n` targets.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<Self, ForecastError> {
        if x.nrows() != y.len() || x.ncols() != 2 {
            return Err(ForecastError::LengthMismatch {
                features: x.nrows(),
                targets: y.len(),
            });
        }
        let (Some(x_mean), Some(y_mean)) = (x.mean_axis(Axis(0)), y.mean()) else {
            return Err(ForecastError::InsufficientData { actual: 0 });
        };

        let xc = x - &x_mean;
        let yc = y - y_mean;
        let s = xc.t().dot(&xc);
        let r = xc.t().dot(&yc);

        let pinv = pseudo_inverse_sym2(s[[0, 0]], s[[0, 1]], s[[1, 1]]);
        let coefficients = [
            pinv[0][0] * r[0] + pinv[0][1] * r[1],
            pinv[1][0] * r[0] + pinv[1][1] * r[1],
        ];
        let intercept = y_mean - coefficients[0] * x_mean[0] - coefficients[1] * x_mean[1];

        let mut model = Self {
            coefficients,
            intercept,
            n_observations: y.len(),
            r_squared: 0.0,
        };
        model.r_squared = model.score(x, y);
        Ok(model)
    }

    pub fn coefficients(&self) -> [f64; 2] {
        self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Coefficient of determination on the training sample
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        x.dot(&Array1::from(self.coefficients.to_vec())) + self.intercept
    }

    fn score(&self, x: &Array2<f64>, y: &Array1<f64>) -> f64 {
        let Some(y_mean) = y.mean() else {
            return 0.0;
        };
        let residuals = y - &self.predict(x);
        let ss_res = residuals.mapv(|e| e * e).sum();
        let ss_tot = y.mapv(|v| (v - y_mean).powi(2)).sum();
        if ss_tot == 0.0 {
            if ss_res == 0.0 { 1.0 } else { 0.0 }
        } else {
            1.0 - ss_res / ss_tot
        }
    }
}

/// `n x 2` design matrix with columns (year, month)
pub fn design_matrix(rows: &[FeatureRow]) -> Array2<f64> {
    let mut x = Array2::zeros((rows.len(), 2));
    for (mut row, feature) in x.rows_mut().into_iter().zip(rows) {
        let [year, month] = feature.as_f64();
        row[0] = year;
        row[1] = month;
    }
    x
}

/// Pseudo-inverse of the symmetric matrix [[a, b], [b, c]]
fn pseudo_inverse_sym2(a: f64, b: f64, c: f64) -> [[f64; 2]; 2] {
    let half_trace = (a + c) / 2.0;
    let spread = (((a - c) / 2.0).powi(2) + b * b).sqrt();
    let lambda_max = half_trace + spread;
    if !lambda_max.is_finite() || lambda_max <= 0.0 {
        return [[0.0; 2]; 2];
    }
    let lambda_min = ((a * c - b * b) / lambda_max).max(0.0);

    // Of the two textbook eigenvector forms, the longer one is better conditioned
    let v1 = if b != 0.0 {
        let p = (lambda_max - c, b);
        let q = (b, lambda_max - a);
        if p.0.hypot(p.1) >= q.0.hypot(q.1) { p } else { q }
    } else if a >= c {
        (1.0, 0.0)
    } else {
        (0.0, 1.0)
    };
    let norm = v1.0.hypot(v1.1);
    let v1 = (v1.0 / norm, v1.1 / norm);
    let v2 = (-v1.1, v1.0);

    let cutoff = lambda_max * RANK_TOLERANCE;
    let mut pinv = [[0.0; 2]; 2];
    for (lambda, v) in [(lambda_max, v1), (lambda_min, v2)] {
        if lambda > cutoff {
            pinv[0][0] += v.0 * v.0 / lambda;
            pinv[0][1] += v.0 * v.1 / lambda;
            pinv[1][0] += v.1 * v.0 / lambda;
            pinv[1][1] += v.1 * v.1 / lambda;
        }
    }
    pinv
}
