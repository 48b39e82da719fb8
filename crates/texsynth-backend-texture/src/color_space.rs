//! Color space conversions and interpolation.
//!
//! Hue is stored as a fraction of a full turn in [0, 1). The "HCL" triplet is
//! the sRGB → XYZ transform of gamma-decoded channels scaled by 100; it keeps
//! the historical name but is not a polar space. The matrix coefficients and
//! gamma breakpoints are fixed so output matches existing reference ramps.

use texsynth_spec::ColorSpace;

use crate::color::Color;

/// Hue, saturation, value. All components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// XYZ-style triplet produced by [`rgb_to_hcl`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hcl {
    pub h: f64,
    pub c: f64,
    pub l: f64,
}

const DECODE_BREAKPOINT: f64 = 0.04045;
const ENCODE_BREAKPOINT: f64 = 0.0031308;
const GAMMA: f64 = 2.4;

const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[inline]
fn gamma_decode(c: f64) -> f64 {
    if c > DECODE_BREAKPOINT {
        ((c + 0.055) / 1.055).powf(GAMMA)
    } else {
        c / 12.92
    }
}

#[inline]
fn gamma_encode(c: f64) -> f64 {
    if c > ENCODE_BREAKPOINT {
        1.055 * c.powf(1.0 / GAMMA) - 0.055
    } else {
        12.92 * c
    }
}

/// Convert RGB to HSV. Achromatic input yields hue 0 and saturation 0.
pub fn rgb_to_hsv(c: &Color) -> Hsv {
    let (r, g, b) = (c.r, c.g, c.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return Hsv { h: 0.0, s: 0.0, v: max };
    }

    let s = delta / max;

    let over3 = 1.0 / 3.0;
    let over6 = 1.0 / 6.0;
    let delta_r = ((max - r) * over6 + delta * 0.5) / delta;
    let delta_g = ((max - g) * over6 + delta * 0.5) / delta;
    let delta_b = ((max - b) * over6 + delta * 0.5) / delta;

    let mut h = if r == max {
        delta_b - delta_g
    } else if g == max {
        over3 + delta_r - delta_b
    } else {
        2.0 * over3 + delta_g - delta_r
    };

    if h < 0.0 {
        h += 1.0;
    }
    if h >= 1.0 {
        h -= 1.0;
    }

    Hsv { h, s, v: max }
}

/// Convert HSV to RGB with alpha = 1.0.
pub fn hsv_to_rgb(hsv: &Hsv) -> Color {
    let Hsv { h, s, v } = *hsv;
    if s == 0.0 {
        return Color::rgb(v, v, v);
    }

    let mut sector = h * 6.0;
    if sector >= 6.0 {
        sector = 0.0;
    }
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i as i32 {
        0 => Color::rgb(v, t, p),
        1 => Color::rgb(q, v, p),
        2 => Color::rgb(p, v, t),
        3 => Color::rgb(p, q, v),
        4 => Color::rgb(t, p, v),
        _ => Color::rgb(v, p, q),
    }
}

/// Convert RGB to the HCL triplet.
pub fn rgb_to_hcl(c: &Color) -> Hcl {
    let linear = [
        gamma_decode(c.r) * 100.0,
        gamma_decode(c.g) * 100.0,
        gamma_decode(c.b) * 100.0,
    ];
    let [h, c, l] = mul3(&RGB_TO_XYZ, linear);
    Hcl { h, c, l }
}

/// Convert the HCL triplet back to RGB with alpha = 1.0.
pub fn hcl_to_rgb(hcl: &Hcl) -> Color {
    let [r, g, b] = mul3(&XYZ_TO_RGB, [hcl.h / 100.0, hcl.c / 100.0, hcl.l / 100.0]);
    Color::rgb(gamma_encode(r), gamma_encode(g), gamma_encode(b))
}

/// Interpolate HSV taking the shorter arc around the hue circle.
///
/// Saturation and value interpolate linearly with `t`; only the hue path is
/// evaluated in the (possibly swapped) direction of increasing hue.
pub fn lerp_hsv(a: &Hsv, b: &Hsv, t: f64) -> Hsv {
    let (mut h0, h1, ht) = if a.h > b.h {
        (b.h, a.h, 1.0 - t)
    } else {
        (a.h, b.h, t)
    };

    let d = h1 - h0;
    let h = if d > 0.5 {
        h0 += 1.0;
        (h0 + ht * (h1 - h0)).rem_euclid(1.0)
    } else {
        h0 + ht * d
    };

    Hsv {
        h,
        s: lerp(a.s, b.s, t),
        v: lerp(a.v, b.v, t),
    }
}

/// Per-component linear interpolation of HCL triplets.
pub fn lerp_hcl(a: &Hcl, b: &Hcl, t: f64) -> Hcl {
    Hcl {
        h: lerp(a.h, b.h, t),
        c: lerp(a.c, b.c, t),
        l: lerp(a.l, b.l, t),
    }
}

/// Interpolate two RGBA colors in the given color space.
///
/// Alpha always interpolates linearly.
pub fn interpolate(space: ColorSpace, a: &Color, b: &Color, t: f64) -> Color {
    let alpha = lerp(a.a, b.a, t);
    let rgb = match space {
        ColorSpace::Rgb => return a.lerp(b, t),
        ColorSpace::Hsv => hsv_to_rgb(&lerp_hsv(&rgb_to_hsv(a), &rgb_to_hsv(b), t)),
        ColorSpace::Hcl => hcl_to_rgb(&lerp_hcl(&rgb_to_hcl(a), &rgb_to_hcl(b), t)),
    };
    Color { a: alpha, ..rgb }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_rgb_close(a: &Color, b: &Color, eps: f64) {
        assert!(
            (a.r - b.r).abs() < eps && (a.g - b.g).abs() < eps && (a.b - b.b).abs() < eps,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_primary_hues() {
        assert!((rgb_to_hsv(&Color::rgb(1.0, 0.0, 0.0)).h - 0.0).abs() < EPS);
        assert!((rgb_to_hsv(&Color::rgb(0.0, 1.0, 0.0)).h - 1.0 / 3.0).abs() < EPS);
        assert!((rgb_to_hsv(&Color::rgb(0.0, 0.0, 1.0)).h - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        let hsv = rgb_to_hsv(&Color::gray(0.4));
        assert_eq!(hsv, Hsv { h: 0.0, s: 0.0, v: 0.4 });
        assert_eq!(hsv_to_rgb(&hsv), Color::gray(0.4));
    }

    #[test]
    fn test_hsv_roundtrip() {
        let original = Color::rgb(0.8, 0.3, 0.5);
        let restored = hsv_to_rgb(&rgb_to_hsv(&original));
        assert_rgb_close(&original, &restored, 1e-9);
    }

    #[test]
    fn test_hue_of_one_wraps_to_red() {
        let red = hsv_to_rgb(&Hsv { h: 1.0, s: 1.0, v: 1.0 });
        assert_rgb_close(&red, &Color::rgb(1.0, 0.0, 0.0), EPS);
    }

    #[test]
    fn test_hcl_of_white() {
        let hcl = rgb_to_hcl(&Color::white());
        assert!((hcl.h - 95.05).abs() < 1e-9);
        assert!((hcl.c - 100.0).abs() < 1e-9);
        assert!((hcl.l - 108.9).abs() < 1e-9);
    }

    #[test]
    fn test_hcl_roundtrip() {
        for c in [
            Color::rgb(0.8, 0.3, 0.5),
            Color::rgb(0.01, 0.02, 0.03),
            Color::white(),
            Color::black(),
        ] {
            let restored = hcl_to_rgb(&rgb_to_hcl(&c));
            assert_rgb_close(&c, &restored, 1e-3);
        }
    }

    #[test]
    fn test_lerp_hsv_takes_short_arc() {
        let a = Hsv { h: 0.9, s: 1.0, v: 1.0 };
        let b = Hsv { h: 0.1, s: 1.0, v: 1.0 };

        let mid = lerp_hsv(&a, &b, 0.5);
        assert!(mid.h.abs() < EPS || (mid.h - 1.0).abs() < EPS, "hue {}", mid.h);

        let quarter = lerp_hsv(&a, &b, 0.25);
        assert!((quarter.h - 0.95).abs() < EPS, "hue {}", quarter.h);
    }

    #[test]
    fn test_lerp_hsv_endpoints_with_swapped_hues() {
        let a = Hsv { h: 0.8, s: 0.2, v: 0.9 };
        let b = Hsv { h: 0.1, s: 0.7, v: 0.3 };

        let start = lerp_hsv(&a, &b, 0.0);
        assert!((start.h - a.h).abs() < EPS);
        assert!((start.s - a.s).abs() < EPS);
        assert!((start.v - a.v).abs() < EPS);

        let end = lerp_hsv(&a, &b, 1.0);
        assert!((end.h - b.h).abs() < EPS);
        assert!((end.s - b.s).abs() < EPS);
        assert!((end.v - b.v).abs() < EPS);
    }

    #[test]
    fn test_lerp_hsv_direct_path() {
        let a = Hsv { h: 0.2, s: 1.0, v: 1.0 };
        let b = Hsv { h: 0.4, s: 1.0, v: 1.0 };
        assert!((lerp_hsv(&a, &b, 0.5).h - 0.3).abs() < EPS);
        assert!((lerp_hsv(&b, &a, 0.25).h - 0.35).abs() < EPS);
    }

    #[test]
    fn test_interpolate_alpha_is_linear_in_every_space() {
        let a = Color::rgba(1.0, 0.0, 0.0, 0.0);
        let b = Color::rgba(0.0, 0.0, 1.0, 1.0);
        for space in [ColorSpace::Rgb, ColorSpace::Hsv, ColorSpace::Hcl] {
            let c = interpolate(space, &a, &b, 0.25);
            assert!((c.a - 0.25).abs() < EPS, "{:?}: alpha {}", space, c.a);
        }
    }

    #[test]
    fn test_interpolate_hsv_red_to_blue_passes_magenta() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        // Hue 0 → 2/3 is shorter through 1.0 (magenta) than through green.
        let mid = interpolate(ColorSpace::Hsv, &red, &blue, 0.5);
        assert_rgb_close(&mid, &Color::rgb(1.0, 0.0, 1.0), 1e-9);
    }

    #[test]
    fn test_interpolate_hcl_endpoints() {
        let a = Color::rgb(0.9, 0.4, 0.1);
        let b = Color::rgb(0.1, 0.5, 0.8);
        assert_rgb_close(&interpolate(ColorSpace::Hcl, &a, &b, 0.0), &a, 1e-3);
        assert_rgb_close(&interpolate(ColorSpace::Hcl, &a, &b, 1.0), &b, 1e-3);
    }
}
