use crate::core::{MagnitudeScale, MatchRecord, PlayerSlot, TimeScale, TimeWindow};
use crate::error::ViewerResult;
use crate::render::{CategoryPalette, Color, default_palette};

/// Pixel mappings shared by every chart so coordinates stay consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    time: TimeScale,
    magnitude: MagnitudeScale,
    palette: CategoryPalette,
}

/// Builds the shared scales with the default palette.
///
/// `pixel_width` is the width of one player column, `plot_height` the height
/// of one category row's plot area.
pub fn build_scales(data: &MatchRecord, pixel_width: f64, plot_height: f64) -> ViewerResult<Scales> {
    Scales::with_palette(data, pixel_width, plot_height, default_palette())
}

impl Scales {
    pub fn with_palette(
        data: &MatchRecord,
        pixel_width: f64,
        plot_height: f64,
        colors: Vec<Color>,
    ) -> ViewerResult<Self> {
        Ok(Self {
            time: TimeScale::new(data.duration(), pixel_width)?,
            magnitude: MagnitudeScale::new(data.max_rate(), plot_height)?,
            palette: CategoryPalette::new(data.categories(), colors)?,
        })
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time
    }

    #[must_use]
    pub fn magnitude_scale(&self) -> MagnitudeScale {
        self.magnitude
    }

    #[must_use]
    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    pub fn time2x(&self, time: f64) -> ViewerResult<f64> {
        self.time.time_to_pixel(time)
    }

    /// Nearest whole second for a column-local pixel offset, clamped.
    #[must_use]
    pub fn x2time(&self, pixel: f64) -> usize {
        self.time.pixel_to_time_index(pixel)
    }

    pub fn magnitude2y(&self, value: f64) -> ViewerResult<f64> {
        self.magnitude.value_to_pixel(value)
    }

    #[must_use]
    pub fn category2color(&self, category_id: &str) -> Option<Color> {
        self.palette.color_for(category_id)
    }

    pub(crate) fn set_time_window(&mut self, window: TimeWindow) {
        self.time.set_visible_range(window);
    }
}

/// Scales of the aggregate stacked view, which never follows the brush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateScales {
    pub time: TimeScale,
    pub magnitude: MagnitudeScale,
}

impl AggregateScales {
    /// Magnitude domain is the largest per-second total of either player.
    pub fn new(data: &MatchRecord, pixel_width: f64, plot_height: f64) -> ViewerResult<Self> {
        let max_total = PlayerSlot::BOTH
            .iter()
            .flat_map(|slot| data.stacked_totals(*slot))
            .fold(0.0_f64, f64::max);
        Ok(Self {
            time: TimeScale::new(data.duration(), pixel_width)?,
            magnitude: MagnitudeScale::new(max_total, plot_height)?,
        })
    }
}
