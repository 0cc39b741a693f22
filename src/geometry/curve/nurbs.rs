use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::scene::{Spline, SplineType};

use super::{Curve, CurveDomain};

/// A non-uniform rational B-spline curve.
///
/// Built from `n` weighted control points, a degree `p < n`, and a
/// non-decreasing knot vector of length `n + p + 1`. The valid parameter
/// range is `[knots[p], knots[n]]`.
#[derive(Debug, Clone)]
pub struct Nurbs {
    control_points: Vec<Point3>,
    weights: Vec<f64>,
    degree: usize,
    knots: Vec<f64>,
}

impl Nurbs {
    /// Creates a NURBS curve from explicit data.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if there are no control points,
    /// the weight or knot counts are wrong, a weight is not positive, the
    /// degree is too high, or the knots decrease or span an empty range.
    pub fn new(
        control_points: Vec<Point3>,
        weights: Vec<f64>,
        degree: usize,
        knots: Vec<f64>,
    ) -> Result<Self> {
        let n = control_points.len();
        if n == 0 {
            return Err(GeometryError::Degenerate("NURBS needs at least one control point".into()).into());
        }
        if weights.len() != n {
            return Err(GeometryError::Degenerate(format!(
                "{} weights for {n} control points",
                weights.len()
            ))
            .into());
        }
        if weights.iter().any(|&w| w.is_nan() || w <= 0.0) {
            return Err(GeometryError::Degenerate("weights must be positive".into()).into());
        }
        if degree >= n {
            return Err(GeometryError::Degenerate(format!(
                "degree {degree} needs more than {n} control points"
            ))
            .into());
        }
        if knots.len() != n + degree + 1 {
            return Err(GeometryError::Degenerate(format!(
                "expected {} knots, found {}",
                n + degree + 1,
                knots.len()
            ))
            .into());
        }
        if knots.windows(2).any(|k| k[1] < k[0]) {
            return Err(GeometryError::Degenerate("knot vector must be non-decreasing".into()).into());
        }
        if knots[n] - knots[degree] < TOLERANCE {
            return Err(GeometryError::Degenerate("empty parameter range".into()).into());
        }

        Ok(Self {
            control_points,
            weights,
            degree,
            knots,
        })
    }

    /// Creates a NURBS curve with a uniform knot vector.
    ///
    /// With `endpoint` set the knots are clamped (`p + 1` repeated knots at
    /// each end) and the curve starts and ends on its first and last control
    /// points. Otherwise the knots are evenly spaced over `[0, 1]` and the
    /// curve only approaches the end points.
    ///
    /// # Errors
    ///
    /// See [`Nurbs::new`].
    pub fn uniform(
        control_points: Vec<Point3>,
        weights: Vec<f64>,
        degree: usize,
        endpoint: bool,
    ) -> Result<Self> {
        let n = control_points.len();
        let knots = if endpoint {
            clamped_uniform_knots(n, degree)
        } else {
            open_uniform_knots(n, degree)
        };
        Self::new(control_points, weights, degree, knots)
    }

    /// Builds the curve described by a scene spline.
    ///
    /// Poly splines become degree-1 clamped curves, i.e. the polyline through
    /// their control points.
    ///
    /// # Errors
    ///
    /// See [`Nurbs::new`].
    pub fn from_spline(spline: &Spline) -> Result<Self> {
        let points: Vec<Point3> = spline.positions().collect();
        let weights: Vec<f64> = spline.weights().collect();
        let order = spline.order.clamp(1, points.len().max(1));
        match spline.kind {
            SplineType::Nurbs => Self::uniform(points, weights, order - 1, spline.use_endpoint),
            SplineType::Poly => Self::uniform(points, weights, order.min(2) - 1, true),
        }
    }

    /// Returns the degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// Returns the knot vector.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the number of non-empty knot spans inside the domain.
    #[must_use]
    pub fn span_count(&self) -> usize {
        let n = self.control_points.len();
        (self.degree..n)
            .filter(|&i| self.knots[i + 1] - self.knots[i] > TOLERANCE)
            .count()
    }

    fn check_parameter(&self, t: f64) -> Result<f64> {
        let domain = self.domain();
        if t.is_nan() || t < domain.t_min - TOLERANCE || t > domain.t_max + TOLERANCE {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into());
        }
        Ok(t.clamp(domain.t_min, domain.t_max))
    }

    /// Finds the knot span index `i` with `knots[i] <= t < knots[i + 1]`.
    fn find_span(&self, t: f64) -> usize {
        let n = self.control_points.len();
        let p = self.degree;
        if t >= self.knots[n] {
            // Last non-empty span.
            return (p..n)
                .rev()
                .find(|&i| self.knots[i + 1] > self.knots[i])
                .unwrap_or(n - 1);
        }
        let (mut low, mut high) = (p, n);
        let mut mid = (low + high) / 2;
        while t < self.knots[mid] || t >= self.knots[mid + 1] {
            if t < self.knots[mid] {
                high = mid;
            } else {
                low = mid;
            }
            mid = (low + high) / 2;
        }
        mid
    }

    /// Weighted sum of control points and weights against basis values
    /// `basis[j]` for control point `span - p + j`.
    fn weighted_sum(&self, span: usize, basis: &[f64]) -> (Vector3, f64) {
        let first = span - self.degree;
        basis
            .iter()
            .enumerate()
            .fold((Vector3::zeros(), 0.0), |(acc, w_acc), (j, &b)| {
                let w = self.weights[first + j] * b;
                (acc + self.control_points[first + j].coords * w, w_acc + w)
            })
    }
}

impl Curve for Nurbs {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let t = self.check_parameter(t)?;
        let span = self.find_span(t);
        let basis = basis_functions(&self.knots, span, t, self.degree);
        let (a, w) = self.weighted_sum(span, &basis);
        Ok(Point3::from(a / w))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let t = self.check_parameter(t)?;
        let span = self.find_span(t);
        let basis = basis_functions(&self.knots, span, t, self.degree);
        let d_basis = basis_derivatives(&self.knots, span, t, self.degree);

        let (a, w) = self.weighted_sum(span, &basis);
        let (da, dw) = self.weighted_sum(span, &d_basis);

        // Quotient rule on C = A / W.
        let point = a / w;
        let derivative = (da - point * dw) / w;
        let len = derivative.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(derivative / len)
    }

    fn domain(&self) -> CurveDomain {
        let n = self.control_points.len();
        CurveDomain::new(self.knots[self.degree], self.knots[n])
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[allow(clippy::cast_precision_loss)]
fn clamped_uniform_knots(n: usize, degree: usize) -> Vec<f64> {
    let interior = n.saturating_sub(degree + 1);
    let segments = (interior + 1) as f64;
    let mut knots = Vec::with_capacity(n + degree + 1);
    knots.extend(std::iter::repeat_n(0.0, degree + 1));
    knots.extend((1..=interior).map(|i| i as f64 / segments));
    knots.extend(std::iter::repeat_n(1.0, degree + 1));
    knots
}

#[allow(clippy::cast_precision_loss)]
fn open_uniform_knots(n: usize, degree: usize) -> Vec<f64> {
    let last = (n + degree) as f64;
    (0..=n + degree).map(|i| i as f64 / last).collect()
}

/// Non-zero B-spline basis functions `N[span - p ..= span]` at `t`.
fn basis_functions(knots: &[f64], span: usize, t: f64, degree: usize) -> Vec<f64> {
    let mut n = vec![0.0; degree + 1];
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];
    n[0] = 1.0;
    for j in 1..=degree {
        left[j] = t - knots[span + 1 - j];
        right[j] = knots[span + j] - t;
        let mut saved = 0.0;
        for r in 0..j {
            let denom = right[r + 1] + left[j - r];
            let temp = if denom.abs() < TOLERANCE {
                0.0
            } else {
                n[r] / denom
            };
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        n[j] = saved;
    }
    n
}

/// First derivatives of the basis functions returned by [`basis_functions`].
#[allow(clippy::cast_precision_loss)]
fn basis_derivatives(knots: &[f64], span: usize, t: f64, degree: usize) -> Vec<f64> {
    let p = degree;
    let mut d = vec![0.0; p + 1];
    if p == 0 {
        return d;
    }
    // lower[k] = N[span - (p - 1) + k, p - 1]
    let lower = basis_functions(knots, span, t, p - 1);
    let ratio = |num: f64, denom: f64| {
        if denom.abs() < TOLERANCE {
            0.0
        } else {
            num / denom
        }
    };
    for (j, dj) in d.iter_mut().enumerate() {
        let i = span - p + j;
        let left = if j >= 1 {
            ratio(lower[j - 1], knots[i + p] - knots[i])
        } else {
            0.0
        };
        let right = if j < p {
            ratio(lower[j], knots[i + p + 1] - knots[i + 1])
        } else {
            0.0
        };
        *dj = p as f64 * (left - right);
    }
    d
}
