//! 2x2 rotation matrices in the fixed precision style producers encode.

use std::fmt;

use super::angle::NO_ROTATION;

/// Decimal places kept in each matrix component
const PRECISION: f64 = 1e5;

/// Row-major `[[a, b], [c, d]] = [[cos θ, sin θ], [-sin θ, cos θ]]`.
///
/// The zero matrix (not the identity) stands for "no rotation".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationMatrix(pub [f32; 4]);

impl RotationMatrix {
    pub const ZERO: Self = Self([NO_ROTATION; 4]);

    /// Build the matrix for a canonical angle in degrees.
    ///
    /// Each component is rounded half-up to five decimals while still in
    /// `f64`, then narrowed to `f32`. Narrowing first would leave values such
    /// as `6.1e-17` for `cos 90°` instead of a clean zero.
    pub fn for_angle(angle: f32) -> Self {
        if angle == NO_ROTATION {
            return Self::ZERO;
        }

        let radians = (angle as f64).to_radians();
        let (sin, cos) = radians.sin_cos();

        Self([
            round_fixed(cos),
            round_fixed(sin),
            round_fixed(-sin),
            round_fixed(cos),
        ])
    }

    /// `[cos θ, sin θ, -sin θ, cos θ]`
    pub fn components(&self) -> [f32; 4] {
        self.0
    }

    /// True for the "no rotation" matrix
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == 0.0)
    }
}

fn round_fixed(value: f64) -> f32 {
    ((value * PRECISION + 0.5).floor() / PRECISION) as f32
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{}, {}, {}, {}]", a, b, c, d)
    }
}

/// Matrix for a canonical angle; see [`RotationMatrix::for_angle`]
pub fn rotation_matrix(angle: f32) -> RotationMatrix {
    RotationMatrix::for_angle(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: RotationMatrix, expected: [f32; 4]) {
        for (a, e) in actual.0.iter().zip(expected) {
            assert!((a - e).abs() < 1e-6, "{} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_no_rotation_is_zero_matrix() {
        assert_eq!(rotation_matrix(0.0), RotationMatrix::ZERO);
        assert!(rotation_matrix(0.0).is_zero());
    }

    #[test]
    fn test_quarter_turns_round_to_exact_components() {
        assert_eq!(rotation_matrix(90.0).components(), [0.0, 1.0, -1.0, 0.0]);
        assert_eq!(rotation_matrix(-90.0).components(), [0.0, -1.0, 1.0, 0.0]);
        assert_eq!(rotation_matrix(180.0).components(), [-1.0, 0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_oblique_angles_keep_five_decimals() {
        assert_close(rotation_matrix(45.0), [0.70711, 0.70711, -0.70711, 0.70711]);
        assert_close(rotation_matrix(30.0), [0.86603, 0.5, -0.5, 0.86603]);
    }

    #[test]
    fn test_round_fixed_both_signs() {
        assert!((round_fixed(0.123456) - 0.12346).abs() < 1e-6);
        assert!((round_fixed(-0.123456) + 0.12346).abs() < 1e-6);
        assert_eq!(round_fixed(1e-12), 0.0);
    }
}
