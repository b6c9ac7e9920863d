use tracing::debug;

use crate::charts::{AggregateScales, Scales, ViewLayout};
use crate::core::{MatchRecord, TimeWindow, Viewport};
use crate::error::{ViewerError, ViewerResult};
use crate::extensions::CursorSubscriber;
use crate::interaction::{CursorSnapshot, CursorState, HoverFrame};
use crate::render::Renderer;

use super::ViewerConfig;

/// Main orchestration facade consumed by host applications.
///
/// Owns the read-only match dataset, the shared scales and the cursor state.
/// Pointer and brush handlers are the only code paths that write the cursor;
/// charts and subscribers receive snapshots.
pub struct ViewerEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) data: MatchRecord,
    pub(super) config: ViewerConfig,
    pub(super) layout: ViewLayout,
    pub(super) scales: Scales,
    pub(super) aggregate: AggregateScales,
    pub(super) cursor: CursorState,
    pub(super) last_hover: Option<HoverFrame>,
    pub(super) screen: Viewport,
    pub(super) subscribers: Vec<Box<dyn CursorSubscriber>>,
}

impl<R: Renderer> ViewerEngine<R> {
    /// Validates config, resolves the layout and builds every shared scale.
    pub fn new(renderer: R, data: MatchRecord, config: ViewerConfig) -> ViewerResult<Self> {
        Self::try_new(renderer, data, config).map_err(|(_, err)| err)
    }

    /// Like [`ViewerEngine::new`], but hands the renderer back on failure.
    pub(super) fn try_new(
        renderer: R,
        data: MatchRecord,
        config: ViewerConfig,
    ) -> Result<Self, (R, ViewerError)> {
        match EngineParts::build(&data, config) {
            Ok(parts) => {
                debug!(
                    width = parts.layout.viewport.width,
                    height = parts.layout.viewport.height,
                    rows = parts.layout.rows.len(),
                    "viewer engine initialized"
                );
                Ok(Self {
                    renderer,
                    screen: parts.layout.viewport,
                    data,
                    config: parts.config,
                    layout: parts.layout,
                    scales: parts.scales,
                    aggregate: parts.aggregate,
                    cursor: CursorState::default(),
                    last_hover: None,
                    subscribers: Vec::new(),
                })
            }
            Err(err) => Err((renderer, err)),
        }
    }

    #[must_use]
    pub fn data(&self) -> &MatchRecord {
        &self.data
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &ViewLayout {
        &self.layout
    }

    /// Canvas size needed to show every chart.
    #[must_use]
    pub fn content_viewport(&self) -> Viewport {
        self.layout.viewport
    }

    #[must_use]
    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    #[must_use]
    pub fn aggregate_scales(&self) -> AggregateScales {
        self.aggregate
    }

    #[must_use]
    pub fn cursor(&self) -> CursorSnapshot {
        self.cursor.snapshot()
    }

    #[must_use]
    pub fn active_time_index(&self) -> Option<usize> {
        self.cursor.active_time_index()
    }

    /// Window currently shown by the detail rows and spatial maps.
    #[must_use]
    pub fn detail_window(&self) -> TimeWindow {
        self.scales.time_scale().visible_range()
    }

    /// Latest hover pass result; `None` while idle.
    #[must_use]
    pub fn hover_frame(&self) -> Option<&HoverFrame> {
        self.last_hover.as_ref()
    }

    #[must_use]
    pub fn screen_size(&self) -> Viewport {
        self.screen
    }

    /// Sets the host window size the tooltip must stay inside.
    pub fn set_screen_size(&mut self, screen: Viewport) -> ViewerResult<()> {
        if !screen.is_valid() {
            return Err(ViewerError::InvalidViewport {
                width: screen.width,
                height: screen.height,
            });
        }
        self.screen = screen;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

struct EngineParts {
    config: ViewerConfig,
    layout: ViewLayout,
    scales: Scales,
    aggregate: AggregateScales,
}

impl EngineParts {
    fn build(data: &MatchRecord, config: ViewerConfig) -> ViewerResult<Self> {
        let config = config.validate()?;
        let layout = ViewLayout::compute(config.layout, config.map.image_height, data)?;
        let scales = Scales::with_palette(
            data,
            layout.column_width,
            layout.row_plot_height(),
            config.palette.clone(),
        )?;
        let aggregate =
            AggregateScales::new(data, layout.column_width, layout.aggregate_plot_height)?;
        Ok(Self {
            config,
            layout,
            scales,
            aggregate,
        })
    }
}
