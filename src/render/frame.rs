use crate::core::Viewport;
use crate::error::{ViewerError, ViewerResult};
use crate::render::{
    CirclePrimitive, ImagePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive,
    RectPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one viewer draw pass.
///
/// Backends paint in field order: rects, images, polygons, polylines,
/// circles, overlays, lines, texts. `overlays` holds translucent rects that
/// must sit above the plotted data, such as the brush selection.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub images: Vec<ImagePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub overlays: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            images: Vec::new(),
            polygons: Vec::new(),
            polylines: Vec::new(),
            circles: Vec::new(),
            overlays: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    /// Appends every primitive of `other`, keeping this frame's viewport.
    pub fn extend(&mut self, other: RenderFrame) {
        self.rects.extend(other.rects);
        self.images.extend(other.images);
        self.polygons.extend(other.polygons);
        self.polylines.extend(other.polylines);
        self.circles.extend(other.circles);
        self.overlays.extend(other.overlays);
        self.lines.extend(other.lines);
        self.texts.extend(other.texts);
    }

    pub fn validate(&self) -> ViewerResult<()> {
        if !self.viewport.is_valid() {
            return Err(ViewerError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for image in &self.images {
            image.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for overlay in &self.overlays {
            overlay.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.images.is_empty()
            && self.polygons.is_empty()
            && self.polylines.is_empty()
            && self.circles.is_empty()
            && self.overlays.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }
}
