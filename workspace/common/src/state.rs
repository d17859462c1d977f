use crate::{AnalyticsData, AnalyticsError};

/// Fallback shown when an error carries no message of its own.
pub const FAILED_TO_LOAD: &str = "Failed to load analytics data";

/// Shown when there is neither an error nor any data.
pub const NO_DATA_AVAILABLE: &str = "No data available";

/// Which branch of the panel to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelState<'a> {
    /// Skeleton placeholders.
    Loading,
    /// A single error banner with this message.
    Unavailable(&'a str),
    /// The live layout.
    Ready(&'a AnalyticsData),
}

impl PanelState<'_> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Picks the branch from the three input flags.
///
/// Loading wins over everything, then an error wins over data.
pub fn panel_state<'a>(
    data: Option<&'a AnalyticsData>,
    is_loading: bool,
    error: Option<&'a AnalyticsError>,
) -> PanelState<'a> {
    if is_loading {
        return PanelState::Loading;
    }

    match (error, data) {
        (Some(error), _) => PanelState::Unavailable(error.message().unwrap_or(FAILED_TO_LOAD)),
        (None, None) => PanelState::Unavailable(NO_DATA_AVAILABLE),
        (None, Some(data)) => PanelState::Ready(data),
    }
}
