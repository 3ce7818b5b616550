use egui::Pos2;

use crate::target::{InteractionTarget, TargetId};

/// Current mode of the gesture engine. Dragging and editing never overlap.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    /// A target is captured and follows the cursor until the pinch ends
    Dragging(InteractionTarget),
    /// The label editor is open for this target; pinch input is ignored
    EditorOpen(TargetId),
}

impl EngineState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging(_) => "Dragging",
            Self::EditorOpen(_) => "EditorOpen",
        }
    }
}

/// Time and place of the last pinch-start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchMark {
    pub time_ms: f64,
    pub position: Pos2,
}

/// Pinch-start history used to detect a double-pinch. A cleared history
/// never matches anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickHistory {
    last: Option<PinchMark>,
}

impl ClickHistory {
    pub fn last(&self) -> Option<PinchMark> {
        self.last
    }

    pub fn record(&mut self, time_ms: f64, position: Pos2) {
        self.last = Some(PinchMark { time_ms, position });
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Whether a pinch-start at `time_ms`/`position` follows the recorded one
    /// closely enough in both time and space.
    pub fn is_repeat(&self, time_ms: f64, position: Pos2, window_ms: f64, max_distance: f32) -> bool {
        match self.last {
            Some(mark) => {
                let elapsed = time_ms - mark.time_ms;
                elapsed < window_ms && mark.position.distance(position) < max_distance
            }
            None => false,
        }
    }
}
