//! 4×4 matrix math for the frame transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`.

use framequad_common::Rect;

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Orthographic projection from pixel space to clip space.
///
/// Pixel origin is the top-left corner with y growing downwards:
/// `(0, 0)` maps to `(-1, 1)` and `(width, height)` to `(1, -1)`.
pub fn orthographic(width: u32, height: u32) -> Mat4 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    #[rustfmt::skip]
    let m = [
        2.0 / w, 0.0,      0.0,  0.0,
        0.0,     -2.0 / h, 0.0,  0.0,
        0.0,     0.0,      -1.0, 0.0,
        -1.0,    1.0,      0.0,  1.0,
    ];
    m
}

/// Matrix that stretches the unit quad over `rect` and flattens z.
pub fn bounds(rect: Rect) -> Mat4 {
    #[rustfmt::skip]
    let m = [
        rect.width, 0.0,         0.0, 0.0,
        0.0,        rect.height, 0.0, 0.0,
        0.0,        0.0,         0.0, 0.0,
        rect.x,     rect.y,      0.0, 1.0,
    ];
    m
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Matrix × column vector.
pub fn transform(m: &Mat4, v: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = (0..4).map(|k| m[k * 4 + row] * v[k]).sum();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f32], b: &[f32], eps: f32) -> bool {
        a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn transform_by_identity_is_noop() {
        let v = [0.25, 0.75, 0.0, 1.0];
        assert_eq!(transform(&IDENTITY, v), v);
    }

    #[test]
    fn orthographic_maps_corners() {
        let m = orthographic(800, 600);
        let top_left = transform(&m, [0.0, 0.0, 0.0, 1.0]);
        let bottom_right = transform(&m, [800.0, 600.0, 0.0, 1.0]);
        let center = transform(&m, [400.0, 300.0, 0.0, 1.0]);
        assert!(approx_eq(&top_left, &[-1.0, 1.0, 0.0, 1.0], 1e-6));
        assert!(approx_eq(&bottom_right, &[1.0, -1.0, 0.0, 1.0], 1e-6));
        assert!(approx_eq(&center, &[0.0, 0.0, 0.0, 1.0], 1e-6));
    }

    #[test]
    fn orthographic_zero_size_does_not_divide_by_zero() {
        let m = orthographic(0, 0);
        assert!(m.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn bounds_maps_unit_quad_onto_rect() {
        let m = bounds(Rect::new(10.0, 20.0, 300.0, 200.0));
        let origin = transform(&m, [0.0, 0.0, 0.0, 1.0]);
        let far = transform(&m, [1.0, 1.0, 0.0, 1.0]);
        assert!(approx_eq(&origin, &[10.0, 20.0, 0.0, 1.0], 1e-6));
        assert!(approx_eq(&far, &[310.0, 220.0, 0.0, 1.0], 1e-6));
    }

    #[test]
    fn bounds_flattens_z() {
        let m = bounds(Rect::new(0.0, 0.0, 1.0, 1.0));
        let p = transform(&m, [0.5, 0.5, 7.0, 1.0]);
        assert_eq!(p[2], 0.0);
    }

    #[test]
    fn mul_applies_right_operand_first() {
        let ortho = orthographic(100, 100);
        let b = bounds(Rect::new(50.0, 50.0, 50.0, 50.0));
        let combined = mul(&ortho, &b);
        let p = transform(&combined, [1.0, 1.0, 0.0, 1.0]);
        assert!(approx_eq(&p, &[1.0, -1.0, 0.0, 1.0], 1e-6));
    }
}
