//! Property-based tests for color-space conversions and gradient ramps.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p texsynth-backend-texture --test proptest_color
//! ```

use proptest::prelude::*;

use texsynth_backend_texture::color_space::{hsv_to_rgb, lerp_hsv, rgb_to_hsv, Hsv};
use texsynth_backend_texture::generate::generate_gradient;
use texsynth_backend_texture::Color;
use texsynth_spec::{ColorSpace, GradientSpec};

/// Distance between two hues on the unit circle.
fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(1.0);
    d.min(1.0 - d)
}

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn hsv() -> impl Strategy<Value = Hsv> {
    (0.0f64..1.0, unit(), unit()).prop_map(|(h, s, v)| Hsv { h, s, v })
}

fn rgba() -> impl Strategy<Value = [f64; 4]> {
    [unit(), unit(), unit(), unit()]
}

proptest! {
    /// RGB survives a trip through HSV.
    #[test]
    fn rgb_hsv_rgb_round_trip(r in unit(), g in unit(), b in unit()) {
        let c = Color::rgb(r, g, b);
        let back = hsv_to_rgb(&rgb_to_hsv(&c));
        prop_assert!(back.approx_eq(&c, 1e-9), "{:?} -> {:?}", c, back);
    }

    /// HSV survives a trip through RGB away from the achromatic axis.
    #[test]
    fn hsv_rgb_hsv_round_trip(h in 0.0f64..1.0, s in 0.01f64..=1.0, v in 0.01f64..=1.0) {
        let hsv = Hsv { h, s, v };
        let back = rgb_to_hsv(&hsv_to_rgb(&hsv));
        prop_assert!(hue_distance(back.h, h) < 1e-6, "hue {} -> {}", h, back.h);
        prop_assert!((back.s - s).abs() < 1e-9);
        prop_assert!((back.v - v).abs() < 1e-9);
    }

    /// Hue always lands in [0, 1).
    #[test]
    fn rgb_to_hsv_hue_in_range(r in unit(), g in unit(), b in unit()) {
        let hsv = rgb_to_hsv(&Color::rgb(r, g, b));
        prop_assert!((0.0..1.0).contains(&hsv.h), "hue {}", hsv.h);
    }

    /// `lerp_hsv(a, b, 0) == a` and `lerp_hsv(a, b, 1) == b`.
    #[test]
    fn lerp_hsv_endpoints(a in hsv(), b in hsv()) {
        let start = lerp_hsv(&a, &b, 0.0);
        let end = lerp_hsv(&a, &b, 1.0);

        prop_assert!(hue_distance(start.h, a.h) < 1e-9);
        prop_assert!((start.s - a.s).abs() < 1e-12);
        prop_assert!((start.v - a.v).abs() < 1e-12);

        prop_assert!(hue_distance(end.h, b.h) < 1e-9);
        prop_assert!((end.s - b.s).abs() < 1e-12);
        prop_assert!((end.v - b.v).abs() < 1e-12);
    }

    /// The interpolated hue never strays further than half a turn.
    #[test]
    fn lerp_hsv_takes_short_arc(a in hsv(), b in hsv(), t in unit()) {
        let mid = lerp_hsv(&a, &b, t);
        let total = hue_distance(a.h, b.h);
        prop_assert!(total <= 0.5 + 1e-12);
        prop_assert!(hue_distance(a.h, mid.h) <= total + 1e-9);
        prop_assert!(hue_distance(mid.h, b.h) <= total + 1e-9);
    }

    /// Two-anchor RGB ramps hit both endpoints and the mean at the center.
    #[test]
    fn rgb_ramp_endpoints_and_midpoint(a in rgba(), b in rgba(), half in 1u32..64) {
        let width = half * 2 + 1;
        let spec = GradientSpec::new(width, 1)
            .with_color_space(ColorSpace::Rgb)
            .with_anchor(0.0, a)
            .with_anchor(1.0, b);
        let buffer = generate_gradient(&spec).unwrap();

        prop_assert_eq!(buffer.get(0, 0), Color::from_array(a));
        prop_assert_eq!(buffer.get(width - 1, 0), Color::from_array(b));

        let mean = Color::from_array(a).lerp(&Color::from_array(b), 0.5);
        prop_assert!(buffer.get(half, 0).approx_eq(&mean, 1e-12));
    }
}
