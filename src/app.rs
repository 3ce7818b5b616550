use log::{info, warn};

use crate::board::Board;
use crate::engine::EngineConfig;
use crate::event::{EditorOutcome, EventBus, InteractionEvent, LoggingHandler};
use crate::input::HandDriver;
use crate::panels::{editor_modal, settings_panel, stage_panel};
use crate::target::TargetId;

/// Label editor opened by a double-pinch
#[derive(Debug, Clone)]
pub struct EditorDraft {
    pub target: TargetId,
    pub text: String,
    /// egui time (seconds) of the frame the editor opened in
    pub opened_at: f64,
}

/// Short-lived notification shown after a drop
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub text: String,
    /// egui time (seconds) the toast was raised at
    pub shown_at: f64,
}

pub struct HandDragApp {
    pub(crate) config: EngineConfig,
    pub(crate) driver: HandDriver,
    /// Built on the first frame, once the stage size is known
    pub(crate) board: Option<Board>,
    pub(crate) bus: EventBus,
    pub(crate) editor: Option<EditorDraft>,
    pub(crate) event_count: usize,
    pub(crate) toast: Option<Toast>,
}

impl Default for HandDragApp {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl HandDragApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EngineConfig>(storage, eframe::APP_KEY))
            .and_then(|config| match config.validate() {
                Ok(()) => Some(config),
                Err(err) => {
                    warn!("Discarding stored settings: {}", err);
                    None
                }
            })
            .unwrap_or_default();
        info!("Starting with {:?}", config);
        Self::with_config(config)
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let bus = EventBus::new();
        bus.subscribe(Box::new(LoggingHandler::new()));
        Self {
            driver: HandDriver::new(config.clone()),
            config,
            board: None,
            bus,
            editor: None,
            event_count: 0,
            toast: None,
        }
    }

    /// Push new settings to the engine
    pub fn apply_config(&mut self, config: EngineConfig) {
        self.driver.set_config(config.clone());
        self.config = config;
    }

    /// Forget the board layout and any interaction in progress
    pub fn reset_board(&mut self) {
        self.driver.reset();
        self.board = None;
        self.editor = None;
        self.toast = None;
    }

    /// Text of the current drop toast, if it was raised less than
    /// `duration` seconds before `now`
    pub(crate) fn toast_text(&self, now: f64, duration: f64) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|toast| now - toast.shown_at < duration)
            .map(|toast| toast.text.as_str())
    }

    /// Route a frame's events to the board, the bus and the editor
    pub(crate) fn dispatch(&mut self, events: Vec<InteractionEvent>, now: f64) {
        for event in events {
            if let Some(board) = &mut self.board {
                board.apply(&event);
            }
            if let InteractionEvent::Drop { target, zone, .. } = &event {
                if let Some(board) = &self.board {
                    let item = board.item(*target).map(|item| item.label.as_str());
                    let zone = board.zone(zone.id).map(|zone| zone.label.as_str());
                    self.toast = Some(Toast {
                        text: format!(
                            "\"{}\" dropped into \"{}\"",
                            item.unwrap_or("Item"),
                            zone.unwrap_or("zone")
                        ),
                        shown_at: now,
                    });
                }
            }
            if let InteractionEvent::OpenEditor { target } = &event {
                let text = self
                    .board
                    .as_ref()
                    .and_then(|board| board.item(target.id))
                    .map(|item| item.label.clone())
                    .unwrap_or_default();
                self.editor = Some(EditorDraft {
                    target: target.id,
                    text,
                    opened_at: now,
                });
            }
            self.bus.emit(&event);
            self.event_count += 1;
        }
    }

    pub(crate) fn close_editor(&mut self, outcome: EditorOutcome, now: f64) {
        self.editor = None;
        if let Some(event) = self.driver.close_editor(outcome) {
            self.dispatch(vec![event], now);
        }
    }
}

impl eframe::App for HandDragApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting; doubles as the detection loop.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        settings_panel(self, ctx);
        stage_panel(self, ctx);
        editor_modal(self, ctx);

        // Keep sampling the hand even when nothing else changes
        ctx.request_repaint();
    }
}
