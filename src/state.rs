use crate::model::{EnrichedVideo, TooltipState};

/// Snapshot of everything the rendering layer draws. Mutated only through
/// the transition methods below; each transition replaces the affected
/// piece of state wholesale, never partially.
pub struct ViewState {
    /// Enriched catalog; empty until the startup fan-out settles
    pub videos: Vec<EnrichedVideo>,
    /// Currently playing video; never cleared once set
    pub selected: Option<EnrichedVideo>,
    /// Hover tooltip over a video title
    pub tooltip: TooltipState,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            videos: Vec::new(),
            selected: None,
            tooltip: TooltipState::default(),
        }
    }

    /// Publish the fully enriched catalog in one step
    pub fn publish_videos(&mut self, videos: Vec<EnrichedVideo>) {
        self.videos = videos;
    }

    /// Mark a video as playing
    pub fn select(&mut self, video: EnrichedVideo) {
        self.selected = Some(video);
    }

    /// Show the tooltip for a hovered title at the pointer position
    pub fn show_tooltip(&mut self, text: &str, x: f32, y: f32) {
        self.tooltip = TooltipState {
            visible: true,
            text: text.to_owned(),
            x,
            y,
        };
    }

    /// Reset the tooltip when the pointer leaves a title
    pub fn hide_tooltip(&mut self) {
        self.tooltip = TooltipState::default();
    }
}
