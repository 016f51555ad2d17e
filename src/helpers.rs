use num_traits::{Float, FromPrimitive};

/// GLSL-style `clamp`; NaN collapses to `min`.
pub fn clamp_range<T: Float>(x: T, min: T, max: T) -> T {
    if x.is_nan() {
        return min;
    }
    x.max(min).min(max)
}

pub fn mix<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

pub fn fract<T: Float>(x: T) -> T {
    x - x.floor()
}

pub fn smoothstep<T>(edge0: T, edge1: T, x: T) -> T
where
    T: Float + FromPrimitive,
{
    let two = T::from_f64(2.0).unwrap_or_else(T::one);
    let three = T::from_f64(3.0).unwrap_or_else(T::one);
    let t = clamp_range((x - edge0) / (edge1 - edge0), T::zero(), T::one());
    t * t * (three - two * t)
}

/// `Some(v)` only for finite, strictly positive values.
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Formats a number the way the catalog UI shows it: integral values
/// without a trailing `.0`, no negative zero.
pub fn number_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(100.0, 600.0, 50.0), 0.0);
        assert_eq!(smoothstep(100.0, 600.0, 700.0), 1.0);
        assert!((smoothstep(100.0, 600.0, 350.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_range_nan() {
        assert_eq!(clamp_range(f64::NAN, 1.0, 2.0), 1.0);
        assert_eq!(clamp_range(5.0_f32, 1.0, 2.0), 2.0);
    }

    #[test]
    fn test_number_label() {
        assert_eq!(number_label(5.0), "5");
        assert_eq!(number_label(3.5), "3.5");
        assert_eq!(number_label(-0.0), "0");
        assert_eq!(number_label(0.77), "0.77");
    }

    #[test]
    fn test_positive_filters() {
        assert_eq!(positive(Some(2.0)), Some(2.0));
        assert_eq!(positive(Some(0.0)), None);
        assert_eq!(positive(Some(f64::INFINITY)), None);
        assert_eq!(positive(None), None);
    }
}
