mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{CategoryPalette, default_palette};
pub use primitives::{
    CirclePrimitive, Color, ImagePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ViewerResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from match data and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewerResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
