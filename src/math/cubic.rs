//! Cubic interpolation and numerical differentiation over tabulated samples.

/// The cubic polynomial through four points, in Newton form.
///
/// Evaluating the nested (Horner) form keeps round-off small even when the
/// abscissae are large and closely spaced, as path distances in a dense table are.
#[derive(Clone, Copy, Debug)]
pub struct NewtonCubic {
    nodes: [f64; 3],
    coeffs: [f64; 4],
}

impl NewtonCubic {
    /// Fits the cubic passing through the points `(xs[i], ys[i])`.
    ///
    /// The abscissae must be distinct.
    pub fn fit(xs: [f64; 4], ys: [f64; 4]) -> Self {
        // Divided differences, built up column by column
        let d1 = [
            (ys[1] - ys[0]) / (xs[1] - xs[0]),
            (ys[2] - ys[1]) / (xs[2] - xs[1]),
            (ys[3] - ys[2]) / (xs[3] - xs[2]),
        ];
        let d2 = [
            (d1[1] - d1[0]) / (xs[2] - xs[0]),
            (d1[2] - d1[1]) / (xs[3] - xs[1]),
        ];
        let d3 = (d2[1] - d2[0]) / (xs[3] - xs[0]);
        Self {
            nodes: [xs[0], xs[1], xs[2]],
            coeffs: [ys[0], d1[0], d2[0], d3],
        }
    }

    pub fn y(&self, x: f64) -> f64 {
        let [x0, x1, x2] = self.nodes;
        let c = &self.coeffs;
        c[0] + (x - x0) * (c[1] + (x - x1) * (c[2] + (x - x2) * c[3]))
    }
}

/// Interpolates `ys` as a function of `xs` at `x`, using the cubic through
/// the four samples starting at index `k`.
///
/// `k` is clamped so the four samples always lie within the arrays, which
/// means values of `x` outside the samples are extrapolated from the nearest
/// end of the table.
///
/// # Panics
/// If the arrays are shorter than four elements or differ in length.
pub fn interpolate4(xs: &[f64], ys: &[f64], x: f64, k: isize) -> f64 {
    let n = xs.len();
    assert!(n >= 4 && ys.len() == n, "need two parallel arrays of at least 4 samples");
    let k = k.clamp(0, n as isize - 4) as usize;
    let window = |vals: &[f64]| [vals[k], vals[k + 1], vals[k + 2], vals[k + 3]];
    NewtonCubic::fit(window(xs), window(ys)).y(x)
}

/// Estimates the derivative of `y` with respect to `x` at one of three
/// unevenly spaced samples, using the three-point Lagrange formula.
///
/// # Parameters
/// * `xs` - The sample abscissae, which must be distinct
/// * `ys` - The sample values
/// * `at` - Which sample to differentiate at: 0, 1 or 2
pub fn derivative3(xs: [f64; 3], ys: [f64; 3], at: usize) -> f64 {
    debug_assert!(at < 3);
    let [x0, x1, x2] = xs;
    let x = xs[at];
    let l0 = (2.0 * x - x1 - x2) / ((x0 - x1) * (x0 - x2));
    let l1 = (2.0 * x - x0 - x2) / ((x1 - x0) * (x1 - x2));
    let l2 = (2.0 * x - x0 - x1) / ((x2 - x0) * (x2 - x1));
    ys[0] * l0 + ys[1] * l1 + ys[2] * l2
}
