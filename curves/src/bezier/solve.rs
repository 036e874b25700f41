use super::basis::*;
use super::super::consts::*;

use roots::{find_roots_cubic, Roots};

///
/// Solves for t in a single dimension for a bezier curve (finds the point(s) where the basis
/// function evaluates to p)
///
/// Only the t values in the range 0-1 are returned.
///
pub fn solve_basis_for_t(w1: f64, w2: f64, w3: f64, w4: f64, p: f64) -> Vec<f64> {
    // Compute the coefficients for the cubic bezier function
    let (a, b, c, d) = cubic_coefficients(w1, w2, w3, w4);
    let d            = d-p;

    // Solve for p
    let roots = find_roots_cubic(a, b, c, d);
    let mut roots = match roots {
        Roots::No(_)    => vec![],
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    };

    // Clip to 0/1 for small ranges outside
    for root in roots.iter_mut() {
        if *root < 0.0 && *root > -SMALL_DISTANCE { *root = 0.0 }
        if *root > 1.0 && *root < 1.0+SMALL_DISTANCE { *root = 1.0 }
    }

    // Remove any roots outside the range of the function
    roots.retain(|r| r >= &0.0 && r <= &1.0);

    roots
}
