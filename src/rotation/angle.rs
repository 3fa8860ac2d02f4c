//! Parsing and classification of canonical rotation angles.
//!
//! A canonical angle is an `f32` number of degrees in `(-360, 360)`. The value
//! [`NO_ROTATION`] doubles as the "nothing to rotate" sentinel: an explicit
//! `"0"` and an unparseable specification are indistinguishable once parsed.

use std::fmt;

use super::lexer::{lex_single, Token};

/// Angle meaning "no rotation", in degrees
pub const NO_ROTATION: f32 = 0.0;

/// One full turn, in degrees
pub const FULL_ROTATION: f32 = 360.0;

/// Keyword for a quarter turn counter-clockwise (90°)
pub const ROTATE_LEFT: &str = "left";

/// Keyword for a quarter turn clockwise (-90°)
pub const ROTATE_RIGHT: &str = "right";

/// Keyword for an explicitly absent rotation
pub const ROTATE_NONE: &str = "none";

/// Keyword produced when a missing attribute was stringified upstream
pub const ROTATE_NULL: &str = "null";

/// Parse a rotation specification into a canonical angle.
///
/// Keywords are matched case-insensitively; numeric specifications are
/// reduced modulo 360 keeping the sign of the input (`"-450"` becomes `-90`).
/// Anything unrecognised, or a number too large for `f32`, yields
/// [`NO_ROTATION`].
///
/// ```rust
/// use report_rotation::rotation::parse_rotation;
///
/// assert_eq!(parse_rotation(Some("left")), 90.0);
/// assert_eq!(parse_rotation(Some("450")), 90.0);
/// assert_eq!(parse_rotation(Some("sideways")), 0.0);
/// assert_eq!(parse_rotation(None), 0.0);
/// ```
pub fn parse_rotation(spec: Option<&str>) -> f32 {
    let Some(spec) = spec else {
        return NO_ROTATION;
    };

    match lex_single(spec) {
        Some(Token::Left) => 90.0,
        Some(Token::Right) => -90.0,
        Some(Token::Number) => spec
            .parse::<f32>()
            .ok()
            .filter(|degrees| degrees.is_finite())
            .map(|degrees| degrees % FULL_ROTATION)
            .unwrap_or(NO_ROTATION),
        Some(Token::Unset) | None => NO_ROTATION,
    }
}

/// Check whether `value` is a plain signed integer or decimal number.
pub fn is_valid_number(value: &str) -> bool {
    lex_single(value) == Some(Token::Number)
}

/// Check whether an angle rotates anything at all
pub fn has_rotation(angle: f32) -> bool {
    angle != NO_ROTATION
}

/// Check whether the angle turns text onto the other axis.
///
/// Uses exact comparison: `89.9999` is not a quarter turn.
pub fn is_rotation_over_x_axis(angle: f32) -> bool {
    angle == 90.0 || angle == -90.0 || angle == 270.0 || angle == -270.0
}

/// Check whether the angle leaves text running vertically
pub fn is_vertical_orientation(angle: f32) -> bool {
    let magnitude = angle.abs();
    magnitude == 90.0 || magnitude == 270.0
}

/// Check whether the angle leaves text running horizontally
pub fn is_horizontal_orientation(angle: f32) -> bool {
    let magnitude = angle.abs();
    magnitude == NO_ROTATION || magnitude == 180.0
}

/// Render an angle the way style producers expect it, always with a
/// fractional part (`90.0`, `-12.5`).
pub fn rotation_as_string(angle: f32) -> String {
    if angle.is_finite() && angle.fract() == 0.0 {
        format!("{:.1}", angle)
    } else {
        format!("{}", angle)
    }
}

/// Axis classification of a canonical angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// 0° or 180°
    Horizontal,
    /// 90° or 270°, either direction
    Vertical,
    /// Anything off the cardinal axes
    Oblique,
}

impl Orientation {
    /// Classify a canonical angle
    pub fn of(angle: f32) -> Self {
        if is_horizontal_orientation(angle) {
            Orientation::Horizontal
        } else if is_vertical_orientation(angle) {
            Orientation::Vertical
        } else {
            Orientation::Oblique
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Oblique => "oblique",
        };
        f.write_str(name)
    }
}
