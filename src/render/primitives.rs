use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(input: &str) -> ViewerResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ViewerError::InvalidData(format!(
                "color `{input}` must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> ViewerResult<f64> {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ViewerError::InvalidData(format!("color `{input}` is not hex")))
        };

        let alpha = if digits.len() == 8 { channel(6..8)? } else { 1.0 };
        Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ViewerResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ViewerError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ViewerResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ViewerError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ViewerError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle with optional border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ViewerResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ViewerError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ViewerError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ViewerError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ViewerError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Filled circle, used for spatial event dots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> ViewerResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ViewerError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ViewerError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Closed filled polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: Vec<(f64, f64)>,
    pub fill_color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, fill_color: Color) -> Self {
        Self { points, fill_color }
    }

    pub fn validate(&self) -> ViewerResult<()> {
        if self.points.len() < 3 {
            return Err(ViewerError::InvalidData(
                "polygon needs at least three vertices".to_owned(),
            ));
        }
        validate_points(&self.points, "polygon")?;
        self.fill_color.validate()
    }
}

/// Open stroked path through consecutive vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ViewerResult<()> {
        if self.points.len() < 2 {
            return Err(ViewerError::InvalidData(
                "polyline needs at least two vertices".to_owned(),
            ));
        }
        validate_points(&self.points, "polyline")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ViewerError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub bold: bool,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            bold: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn validate(&self) -> ViewerResult<()> {
        if self.text.is_empty() {
            return Err(ViewerError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ViewerError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ViewerError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// External raster placed into the scene, such as a map backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePrimitive {
    pub source: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ImagePrimitive {
    pub fn validate(&self) -> ViewerResult<()> {
        if self.source.is_empty() {
            return Err(ViewerError::InvalidData(
                "image source must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ViewerError::InvalidData(
                "image origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(ViewerError::InvalidData(
                "image size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn validate_points(points: &[(f64, f64)], kind: &str) -> ViewerResult<()> {
    if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(ViewerError::InvalidData(format!(
            "{kind} vertices must be finite"
        )));
    }
    Ok(())
}
