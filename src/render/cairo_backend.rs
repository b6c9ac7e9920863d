use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;

use tracing::warn;

use crate::error::{ViewerError, ViewerResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub images_drawn: usize,
    pub polygons_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub overlays_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ViewerResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external Cairo context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ViewerResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ViewerError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ViewerResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the last rendered surface as PNG.
    pub fn write_png(&self, path: &std::path::Path) -> ViewerResult<()> {
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ViewerError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ViewerResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for image in &frame.images {
            // Unreadable backdrops are skipped, the rest of the scene still draws.
            let Ok(mut file) = File::open(&image.source) else {
                warn!(source = %image.source, "skipping unreadable image");
                continue;
            };
            let Ok(picture) = ImageSurface::create_from_png(&mut file) else {
                warn!(source = %image.source, "skipping non-png image");
                continue;
            };
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            context.translate(image.x, image.y);
            context.scale(
                image.width / f64::from(picture.width().max(1)),
                image.height / f64::from(picture.height().max(1)),
            );
            context
                .set_source_surface(&picture, 0.0, 0.0)
                .map_err(|err| map_backend_error("failed to set image source", err))?;
            context
                .paint()
                .map_err(|err| map_backend_error("failed to paint image", err))?;
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            stats.images_drawn += 1;
        }

        for polygon in &frame.polygons {
            append_path(context, &polygon.points);
            context.close_path();
            apply_color(context, polygon.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            stats.polygons_drawn += 1;
        }

        for polyline in &frame.polylines {
            append_path(context, &polyline.points);
            apply_color(context, polyline.color);
            context.set_line_width(polyline.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, 2.0 * PI);
            apply_color(context, circle.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            stats.circles_drawn += 1;
        }

        for overlay in &frame.overlays {
            draw_rect(context, *overlay)?;
            stats.overlays_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let weight = if text.bold { "Bold " } else { "" };
            let font_description =
                FontDescription::from_string(&format!("Sans {weight}{}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewerResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ViewerResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_path(context: &Context, points: &[(f64, f64)]) {
    context.new_path();
    for (index, (x, y)) in points.iter().enumerate() {
        if index == 0 {
            context.move_to(*x, *y);
        } else {
            context.line_to(*x, *y);
        }
    }
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ViewerResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ViewerError {
    ViewerError::InvalidData(format!("{prefix}: {err}"))
}
