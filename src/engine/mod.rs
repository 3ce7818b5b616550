//! Gesture interaction engine.
//!
//! Turns a per-frame stream of cursor positions and pinch flags into
//! discrete interaction events. The engine owns no UI: hit-testing is
//! delegated to a [`HitTester`] and every visual effect is left to whoever
//! consumes the returned events.

mod config;
mod state;

pub use config::EngineConfig;
pub use state::{ClickHistory, EngineState, PinchMark};

use egui::Pos2;
use log::debug;

use crate::event::{EditorOutcome, InteractionEvent};
use crate::geometry::{centered_on, snap_to_zone};
use crate::target::{HitTester, InteractionTarget};

/// Input for one frame, already mapped to viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub cursor: Pos2,
    pub pinching: bool,
    /// Monotonic timestamp in milliseconds
    pub now_ms: f64,
}

impl FrameInput {
    pub fn new(cursor: Pos2, pinching: bool, now_ms: f64) -> Self {
        Self {
            cursor,
            pinching,
            now_ms,
        }
    }
}

#[derive(Debug, Default)]
pub struct GestureEngine {
    config: EngineConfig,
    state: EngineState,
    history: ClickHistory,
    was_pinching: bool,
}

impl GestureEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn history(&self) -> &ClickHistory {
        &self.history
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, EngineState::Dragging(_))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EngineState::EditorOpen(_))
    }

    /// Advance the state machine by one frame.
    ///
    /// Targets are only acquired on the frame where the pinch starts. Once
    /// captured, a target follows the cursor until the pinch ends, whatever
    /// lies under the cursor in between.
    pub fn process_frame(&mut self, frame: FrameInput, scene: &impl HitTester) -> Vec<InteractionEvent> {
        let pinch_started = frame.pinching && !self.was_pinching;
        self.was_pinching = frame.pinching;

        let mut events = Vec::new();
        match std::mem::take(&mut self.state) {
            EngineState::Idle => {
                if pinch_started {
                    self.on_pinch_start(frame, scene, &mut events);
                }
            }
            EngineState::Dragging(mut target) => {
                if frame.pinching {
                    let position = centered_on(target.size(), frame.cursor);
                    target.move_to(position);
                    events.push(InteractionEvent::Move {
                        target: target.id,
                        position,
                    });
                    self.state = EngineState::Dragging(target);
                } else {
                    self.release(target, scene, &mut events);
                }
            }
            // Input is suppressed until the editor is closed explicitly
            editing @ EngineState::EditorOpen(_) => self.state = editing,
        }
        events
    }

    /// Close the editor opened by a double-pinch. Returns `None` when no
    /// editor is open.
    pub fn close_editor(&mut self, outcome: EditorOutcome) -> Option<InteractionEvent> {
        match self.state {
            EngineState::EditorOpen(target) => {
                debug!("EditorOpen -> Idle ({:?})", outcome);
                self.state = EngineState::Idle;
                Some(InteractionEvent::CloseEditor { target, outcome })
            }
            _ => None,
        }
    }

    /// Drop any capture, editor and pinch history.
    pub fn reset(&mut self) {
        self.state = EngineState::Idle;
        self.history.clear();
        self.was_pinching = false;
    }

    fn on_pinch_start(
        &mut self,
        frame: FrameInput,
        scene: &impl HitTester,
        events: &mut Vec<InteractionEvent>,
    ) {
        let hit = scene.target_at(frame.cursor);
        let repeat = self.history.is_repeat(
            frame.now_ms,
            frame.cursor,
            self.config.double_pinch_window_ms,
            self.config.double_pinch_max_distance,
        );

        match hit {
            Some(target) if repeat => {
                // Consume the double-pinch so a third pinch can't reuse it
                self.history.clear();
                debug!("Idle -> EditorOpen ({:?})", target.id);
                self.state = EngineState::EditorOpen(target.id);
                events.push(InteractionEvent::OpenEditor { target });
            }
            hit => {
                self.history.record(frame.now_ms, frame.cursor);
                if let Some(target) = hit {
                    debug!("Idle -> Dragging ({:?})", target.id);
                    self.state = EngineState::Dragging(target.clone());
                    events.push(InteractionEvent::PickUp { target });
                }
            }
        }
    }

    fn release(
        &mut self,
        target: InteractionTarget,
        scene: &impl HitTester,
        events: &mut Vec<InteractionEvent>,
    ) {
        if let Some(zone) = scene.drop_zone_at(target.center()) {
            let position = snap_to_zone(&target, &zone);
            events.push(InteractionEvent::Drop {
                target: target.id,
                zone,
                position,
            });
        }
        debug!("Dragging -> Idle ({:?})", target.id);
        events.push(InteractionEvent::Release { target: target.id });
        self.state = EngineState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{DropZone, TargetId, ZoneId};

    struct Scene {
        targets: Vec<InteractionTarget>,
        zones: Vec<DropZone>,
    }

    impl HitTester for Scene {
        fn target_at(&self, pos: Pos2) -> Option<InteractionTarget> {
            self.targets.iter().rev().find(|t| t.rect.contains(pos)).cloned()
        }

        fn drop_zone_at(&self, pos: Pos2) -> Option<DropZone> {
            self.zones.iter().rev().find(|z| z.rect.contains(pos)).cloned()
        }
    }

    fn scene() -> (Scene, TargetId) {
        let id = TargetId::new();
        let scene = Scene {
            targets: vec![InteractionTarget::new(id, 0.0, 0.0, 80.0, 80.0)],
            zones: vec![DropZone::new(ZoneId::new(), 300.0, 300.0, 150.0, 100.0)],
        };
        (scene, id)
    }

    fn frame(x: f32, y: f32, pinching: bool, now_ms: f64) -> FrameInput {
        FrameInput::new(Pos2::new(x, y), pinching, now_ms)
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = GestureEngine::default();
        assert_eq!(engine.state(), &EngineState::Idle);
        assert!(engine.history().last().is_none());
    }

    #[test]
    fn test_held_pinch_does_not_reacquire() {
        let (scene, _) = scene();
        let mut engine = GestureEngine::default();

        // Pinch starts over empty space, then drifts onto the target
        assert!(engine.process_frame(frame(200.0, 200.0, true, 0.0), &scene).is_empty());
        assert!(engine.process_frame(frame(40.0, 40.0, true, 16.0), &scene).is_empty());
        assert_eq!(engine.state(), &EngineState::Idle);
    }

    #[test]
    fn test_empty_pinch_records_history() {
        let (scene, _) = scene();
        let mut engine = GestureEngine::default();
        engine.process_frame(frame(200.0, 200.0, true, 10.0), &scene);
        assert_eq!(
            engine.history().last(),
            Some(PinchMark {
                time_ms: 10.0,
                position: Pos2::new(200.0, 200.0)
            })
        );
    }

    #[test]
    fn test_close_editor_only_when_open() {
        let (scene, id) = scene();
        let mut engine = GestureEngine::default();
        assert!(engine.close_editor(EditorOutcome::Cancelled).is_none());

        engine.process_frame(frame(40.0, 40.0, true, 0.0), &scene);
        engine.process_frame(frame(40.0, 40.0, false, 50.0), &scene);
        engine.process_frame(frame(41.0, 40.0, true, 100.0), &scene);
        assert!(engine.is_editing());

        let event = engine.close_editor(EditorOutcome::Cancelled);
        assert_eq!(
            event,
            Some(InteractionEvent::CloseEditor {
                target: id,
                outcome: EditorOutcome::Cancelled
            })
        );
        assert_eq!(engine.state(), &EngineState::Idle);
    }

    #[test]
    fn test_pinch_held_through_editor_is_not_a_new_start() {
        let (scene, _) = scene();
        let mut engine = GestureEngine::default();
        engine.process_frame(frame(40.0, 40.0, true, 0.0), &scene);
        engine.process_frame(frame(40.0, 40.0, false, 50.0), &scene);
        engine.process_frame(frame(40.0, 40.0, true, 100.0), &scene);
        engine.close_editor(EditorOutcome::Cancelled);

        // Still pinching from before the editor closed
        assert!(engine.process_frame(frame(40.0, 40.0, true, 2000.0), &scene).is_empty());
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_reset_drops_capture() {
        let (scene, _) = scene();
        let mut engine = GestureEngine::default();
        engine.process_frame(frame(40.0, 40.0, true, 0.0), &scene);
        assert!(engine.is_dragging());

        engine.reset();
        assert_eq!(engine.state(), &EngineState::Idle);
        assert!(engine.history().last().is_none());
        assert!(engine.process_frame(frame(40.0, 40.0, false, 16.0), &scene).is_empty());
    }
}
