use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{MatchRecord, Viewport};
use crate::error::{ViewerError, ViewerResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{ViewerConfig, ViewerEngine};

const STATUS_FONT_SIZE: f64 = 16.0;
const STATUS_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
pub const FAILED_TO_LOAD_LABEL: &str = "failed to load";
pub const LOADING_LABEL: &str = "loading";

/// Lifecycle of the dataset behind one viewer page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed { message: String },
}

/// Frame shown instead of the charts while no dataset is usable.
///
/// Returns `None` for [`LoadStatus::Ready`].
#[must_use]
pub fn status_frame(status: &LoadStatus, viewport: Viewport) -> Option<RenderFrame> {
    let label = match status {
        LoadStatus::Loading => LOADING_LABEL,
        LoadStatus::Failed { .. } => FAILED_TO_LOAD_LABEL,
        LoadStatus::Ready => return None,
    };
    Some(RenderFrame::new(viewport).with_text(TextPrimitive::new(
        label,
        f64::from(viewport.width) / 2.0,
        f64::from(viewport.height) / 2.0,
        STATUS_FONT_SIZE,
        STATUS_COLOR,
        TextHAlign::Center,
    )))
}

/// A viewer page after its load attempt: either charts or the failure label.
pub enum ViewerSession<R: Renderer> {
    Ready(ViewerEngine<R>),
    Failed { renderer: R, error: ViewerError },
}

impl<R: Renderer> ViewerSession<R> {
    /// Builds the engine from a load result. Load and layout failures both end
    /// in [`ViewerSession::Failed`]; no partial chart is ever built.
    pub fn open(renderer: R, loaded: ViewerResult<MatchRecord>, config: ViewerConfig) -> Self {
        let data = match loaded {
            Ok(data) => data,
            Err(error) => {
                warn!(error = %error, "dataset failed to load");
                return Self::Failed { renderer, error };
            }
        };
        match ViewerEngine::try_new(renderer, data, config) {
            Ok(engine) => Self::Ready(engine),
            Err((renderer, error)) => {
                warn!(error = %error, "viewer could not be built");
                Self::Failed { renderer, error }
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        match self {
            Self::Ready(_) => LoadStatus::Ready,
            Self::Failed { error, .. } => LoadStatus::Failed {
                message: error.to_string(),
            },
        }
    }

    #[must_use]
    pub fn engine(&self) -> Option<&ViewerEngine<R>> {
        match self {
            Self::Ready(engine) => Some(engine),
            Self::Failed { .. } => None,
        }
    }

    pub fn engine_mut(&mut self) -> Option<&mut ViewerEngine<R>> {
        match self {
            Self::Ready(engine) => Some(engine),
            Self::Failed { .. } => None,
        }
    }

    pub fn render(&mut self, viewport: Viewport) -> ViewerResult<()> {
        match self {
            Self::Ready(engine) => engine.render(),
            Self::Failed { renderer, error } => {
                let status = LoadStatus::Failed {
                    message: error.to_string(),
                };
                match status_frame(&status, viewport) {
                    Some(frame) => renderer.render(&frame),
                    None => Ok(()),
                }
            }
        }
    }
}
