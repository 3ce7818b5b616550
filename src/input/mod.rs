//! Per-frame glue between hand detections and the gesture engine.

pub mod mouse;

use egui::{Pos2, Rect};
use log::{debug, trace, warn};

use crate::engine::{EngineConfig, FrameInput, GestureEngine};
use crate::event::{EditorOutcome, InteractionEvent};
use crate::landmark::{HandSample, Landmark};
use crate::target::HitTester;

/// Keep the well-formed hands from raw detector output, logging the rest
pub fn accept_hands(raw: Vec<Vec<Landmark>>) -> Vec<HandSample> {
    raw.into_iter()
        .filter_map(|points| match HandSample::try_from(points) {
            Ok(hand) => Some(hand),
            Err(err) => {
                warn!("Skipping malformed hand sample: {}", err);
                None
            }
        })
        .collect()
}

/// Feeds the first detected hand of every frame into a [`GestureEngine`]
#[derive(Debug, Default)]
pub struct HandDriver {
    engine: GestureEngine,
    cursor: Option<Pos2>,
    pinching: bool,
}

impl HandDriver {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: GestureEngine::new(config),
            cursor: None,
            pinching: false,
        }
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.engine.set_config(config);
    }

    /// Last known cursor position in viewport coordinates
    pub fn cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    /// Whether the hand seen in the last frame was pinching
    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    /// Process one video frame. Only the first hand is used.
    pub fn on_frame(
        &mut self,
        hands: &[HandSample],
        video_rect: Rect,
        now_ms: f64,
        scene: &impl HitTester,
    ) -> Vec<InteractionEvent> {
        let Some(hand) = hands.first() else {
            return self.on_hand_lost(now_ms, scene);
        };
        if hands.len() > 1 {
            trace!("Ignoring {} extra hands", hands.len() - 1);
        }

        let cursor = hand.index_tip_in(video_rect);
        let pinching = hand.is_pinching(self.engine.config().pinch_threshold);
        self.cursor = Some(cursor);
        self.pinching = pinching;

        self.engine
            .process_frame(FrameInput::new(cursor, pinching, now_ms), scene)
    }

    pub fn close_editor(&mut self, outcome: EditorOutcome) -> Option<InteractionEvent> {
        self.engine.close_editor(outcome)
    }

    /// Forget the cursor and any in-flight interaction, e.g. when capture stops
    pub fn reset(&mut self) {
        self.engine.reset();
        self.cursor = None;
        self.pinching = false;
    }

    fn on_hand_lost(&mut self, now_ms: f64, scene: &impl HitTester) -> Vec<InteractionEvent> {
        self.pinching = false;
        match self.cursor {
            Some(cursor)
                if self.engine.config().release_on_hand_lost && self.engine.is_dragging() =>
            {
                debug!("Hand lost mid-drag, releasing at {:?}", cursor);
                self.engine
                    .process_frame(FrameInput::new(cursor, false, now_ms), scene)
            }
            _ => Vec::new(),
        }
    }
}
