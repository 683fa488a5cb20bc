/// Rectified linear unit. Anything that isn't strictly positive, NaN included, maps to zero.
pub fn relu(x: f64) -> f64 {
    if x > 0. {
        return x;
    }
    0.
}

/// Logistic function, `1 / (1 + e^-x)`. Saturates to exactly 0 or 1 for large `|x|`.
pub fn sigmoid(x: f64) -> f64 {
    1. / (1. + (-x).exp())
}

/// Hyperbolic tangent, straight from `f64::tanh`.
pub fn hyperbolic_tangent(x: f64) -> f64 {
    x.tanh()
}

/// Leaky ReLU with a caller supplied slope `a` for the non-positive side.
/// The slope is taken as-is, negative or greater than one included. A positive
/// `x` ignores the slope entirely, so `x = +inf` stays `+inf`.
pub fn leaky_relu(x: f64, a: f64) -> f64 {
    if x > 0. {
        return x;
    }
    a * x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relu_clips_non_positive() {
        assert_eq!(relu(3.5), 3.5);
        assert_eq!(relu(-3.5), 0.);
        assert_eq!(relu(0.), 0.);
    }

    #[test]
    fn relu_nan_is_zero() {
        assert_eq!(relu(f64::NAN), 0.);
    }

    #[test]
    fn relu_negative_zero_is_positive_zero() {
        assert!(relu(-0.).is_sign_positive());
    }

    #[test]
    fn relu_infinities() {
        assert_eq!(relu(f64::INFINITY), f64::INFINITY);
        assert_eq!(relu(f64::NEG_INFINITY), 0.);
    }

    #[test]
    fn sigmoid_midpoint() {
        assert_eq!(sigmoid(0.), 0.5);
    }

    #[test]
    fn sigmoid_saturates() {
        assert_eq!(sigmoid(-1000.), 0.);
        assert_eq!(sigmoid(1000.), 1.);
    }

    #[test]
    fn tanh_zero() {
        assert_eq!(hyperbolic_tangent(0.), 0.);
    }

    #[test]
    fn leaky_relu_slope_zero_and_one() {
        for x in [-4., -0.5, 0., 0.5, 4.] {
            assert_eq!(leaky_relu(x, 0.), relu(x));
            assert_eq!(leaky_relu(x, 1.), x);
        }
    }

    #[test]
    fn leaky_relu_accepts_any_slope() {
        assert_eq!(leaky_relu(-2., -1.5), 3.);
        assert_eq!(leaky_relu(-2., 3.), -6.);
    }

    #[test]
    fn leaky_relu_non_finite() {
        assert_eq!(leaky_relu(f64::INFINITY, 0.1), f64::INFINITY);
        assert_eq!(leaky_relu(f64::NEG_INFINITY, 0.1), f64::NEG_INFINITY);
        assert_eq!(leaky_relu(2., f64::INFINITY), 2.);
        assert_eq!(leaky_relu(-2., f64::INFINITY), f64::NEG_INFINITY);
        assert!(leaky_relu(f64::NEG_INFINITY, 0.).is_nan());
    }

    #[test]
    fn leaky_relu_nan_propagates() {
        assert!(leaky_relu(f64::NAN, 0.1).is_nan());
    }
}
