/// How pause/play reach the player. Chosen once per trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No native controls; clicking the video pauses it.
    #[default]
    ClickToPause,
    /// Native scrub/play controls are exposed and clicks are not intercepted.
    NativeControls,
}

impl InteractionMode {
    pub fn from_native_controls(show_native_controls: bool) -> Self {
        if show_native_controls {
            InteractionMode::NativeControls
        } else {
            InteractionMode::ClickToPause
        }
    }

    pub fn intercepts_clicks(&self) -> bool {
        matches!(self, InteractionMode::ClickToPause)
    }

    pub fn shows_native_controls(&self) -> bool {
        matches!(self, InteractionMode::NativeControls)
    }
}
