//! Shape-preserving monotone piecewise-cubic interpolation.
//!
//! Implements the Fritsch-Carlson (PCHIP) scheme: a cubic Hermite spline
//! whose node derivatives are chosen so the interpolant never overshoots
//! the data within a segment. On monotone data the interpolant is monotone;
//! at a local extremum the node derivative is forced to zero. Grid points
//! are reproduced exactly, and queries outside the grid clamp flat to the
//! boundary value.

/// Interpolate a single value from `(xs, ys)` at `x`.
///
/// `xs` must be strictly increasing and at least two points long. Values of
/// `x` outside `[xs[0], xs[n-1]]` return the boundary `ys` value.
pub(crate) fn pchip(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert!(xs.len() >= 2 && xs.len() == ys.len());

    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }

    // Binary search for the bracketing segment
    let hi = xs.partition_point(|&v| v < x);
    if hi == 0 {
        return ys[0];
    }
    if xs[hi] == x {
        return ys[hi];
    }
    let lo = hi - 1;

    let h = xs[hi] - xs[lo];
    let t = (x - xs[lo]) / h;
    let d_lo = node_derivative(lo, xs, ys);
    let d_hi = node_derivative(hi, xs, ys);

    // Cubic Hermite basis
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * ys[lo] + h10 * h * d_lo + h01 * ys[hi] + h11 * h * d_hi
}

/// Secant slope of the segment starting at index `i`.
fn slope(i: usize, xs: &[f64], ys: &[f64]) -> f64 {
    (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
}

/// Fritsch-Carlson derivative at node `i`.
///
/// Interior nodes use the weighted harmonic mean of the adjacent secant
/// slopes, which is zero whenever the slopes differ in sign (local
/// extremum). End nodes use a one-sided three-point estimate clamped to
/// preserve monotonicity.
fn node_derivative(i: usize, xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n == 2 {
        // Degenerate two-point grid: linear segment.
        return slope(0, xs, ys);
    }
    if i == 0 {
        let h0 = xs[1] - xs[0];
        let h1 = xs[2] - xs[1];
        edge_derivative(h0, h1, slope(0, xs, ys), slope(1, xs, ys))
    } else if i == n - 1 {
        let h0 = xs[n - 1] - xs[n - 2];
        let h1 = xs[n - 2] - xs[n - 3];
        edge_derivative(h0, h1, slope(n - 2, xs, ys), slope(n - 3, xs, ys))
    } else {
        let s_prev = slope(i - 1, xs, ys);
        let s_next = slope(i, xs, ys);
        if s_prev * s_next <= 0.0 {
            0.0
        } else {
            let h_prev = xs[i] - xs[i - 1];
            let h_next = xs[i + 1] - xs[i];
            let w1 = 2.0 * h_next + h_prev;
            let w2 = h_next + 2.0 * h_prev;
            (w1 + w2) / (w1 / s_prev + w2 / s_next)
        }
    }
}

/// One-sided three-point end derivative, clamped for shape preservation.
///
/// `h0`/`s0` belong to the end segment, `h1`/`s1` to its neighbor.
fn edge_derivative(h0: f64, h1: f64, s0: f64, s1: f64) -> f64 {
    if s0 == 0.0 {
        // Flat end segment stays flat.
        return 0.0;
    }
    let d = ((2.0 * h0 + h1) * s0 - h0 * s1) / (h0 + h1);
    if d * s0 <= 0.0 {
        0.0
    } else if s0 * s1 < 0.0 && d.abs() > 3.0 * s0.abs() {
        3.0 * s0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_at_nodes() {
        let xs = [0.0, 1.0, 2.5, 4.0, 6.0];
        let ys = [1.0, -2.0, 0.5, 0.5, 3.0];
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(pchip(x, &xs, &ys), y);
        }
    }

    #[test]
    fn test_linear_data_reproduced() {
        // On collinear data every derivative equals the common slope, so
        // the cubic collapses to the line.
        let xs = [0.0, 1.0, 3.0, 4.5, 7.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x - 1.0).collect();
        for &x in &[0.25, 1.7, 3.1, 5.9] {
            assert_relative_eq!(pchip(x, &xs, &ys), 2.0 * x - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_monotone_no_overshoot() {
        // Step-like monotone data: the interpolant must stay within each
        // segment's value range (a plain cubic spline would overshoot).
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 0.0, 1.0, 1.0, 1.0];
        let mut x = 0.0;
        while x <= 4.0 {
            let y = pchip(x, &xs, &ys);
            assert!((-1e-12..=1.0 + 1e-12).contains(&y), "overshoot at {x}: {y}");
            x += 0.01;
        }
    }

    #[test]
    fn test_monotone_between_nodes() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [10.0, 5.0, 2.0, 1.5];
        let mut prev = pchip(0.0, &xs, &ys);
        let mut x = 0.05;
        while x <= 3.0 {
            let y = pchip(x, &xs, &ys);
            assert!(y <= prev + 1e-12, "not decreasing at {x}");
            prev = y;
            x += 0.05;
        }
    }

    #[test]
    fn test_flat_at_local_extremum() {
        // The node at the peak gets a zero derivative, so the interpolant
        // stays below the peak value on both sides.
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 0.0];
        assert!(pchip(0.5, &xs, &ys) < 1.0);
        assert!(pchip(1.5, &xs, &ys) < 1.0);
        assert_eq!(pchip(1.0, &xs, &ys), 1.0);
    }

    #[test]
    fn test_clamping_outside_range() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [10.0, 20.0, 30.0];
        assert_eq!(pchip(-5.0, &xs, &ys), 10.0);
        assert_eq!(pchip(0.999, &xs, &ys), 10.0);
        assert_eq!(pchip(3.001, &xs, &ys), 30.0);
        assert_eq!(pchip(100.0, &xs, &ys), 30.0);
    }
}
