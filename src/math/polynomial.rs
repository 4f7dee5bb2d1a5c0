//! Small dense-polynomial helpers.
//!
//! Coefficients are stored in ascending order: `c[0] + c[1]*t + c[2]*t² + ...`.

/// Number of bisection steps used to refine a bracketed root.
const BISECTION_STEPS: usize = 64;

/// Evaluates the polynomial at `t` (Horner's scheme).
#[must_use]
pub fn eval(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Multiplies two polynomials.
#[must_use]
pub fn mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}

/// Adds two polynomials.
#[must_use]
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len().max(b.len())];
    for (i, &c) in a.iter().enumerate() {
        out[i] += c;
    }
    for (i, &c) in b.iter().enumerate() {
        out[i] += c;
    }
    out
}

/// Finds the real roots of the polynomial inside `[0, 1]`.
///
/// The interval is split into `subdivisions` equal pieces; every piece whose
/// endpoints change sign is refined by bisection. Sample points that are exact
/// zeros are reported directly. Roots of even multiplicity (no sign change)
/// and pairs of roots closer than one piece are not reported.
#[must_use]
pub fn roots_in_unit_interval(coeffs: &[f64], subdivisions: u32) -> Vec<f64> {
    let n = subdivisions.max(1);
    let mut roots = Vec::new();

    let mut lo = 0.0;
    let mut f_lo = eval(coeffs, lo);
    if f_lo == 0.0 {
        roots.push(lo);
    }

    for i in 1..=n {
        let hi = f64::from(i) / f64::from(n);
        let f_hi = eval(coeffs, hi);

        if f_hi == 0.0 {
            roots.push(hi);
        } else if f_lo * f_hi < 0.0 {
            roots.push(bisect(coeffs, lo, hi, f_lo));
        }

        lo = hi;
        f_lo = f_hi;
    }

    roots
}

/// Refines a sign-changing bracket `[lo, hi]` where `f(lo) = f_lo`.
fn bisect(coeffs: &[f64], mut lo: f64, mut hi: f64, mut f_lo: f64) -> f64 {
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        let f_mid = eval(coeffs, mid);
        if f_mid == 0.0 {
            return mid;
        }
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    0.5 * (lo + hi)
}
