use log::{debug, info, trace};

use crate::event::{EditorOutcome, EventHandler, InteractionEvent};

/// Writes every interaction event to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &InteractionEvent) {
        match event {
            InteractionEvent::PickUp { target } => {
                debug!("Picked up {:?} at {:?}", target.id, target.position());
            }
            InteractionEvent::Move { target, position } => {
                trace!("Moved {:?} to {:?}", target, position);
            }
            InteractionEvent::Drop {
                target,
                zone,
                position,
            } => {
                info!("Dropped {:?} into zone {:?} at {:?}", target, zone.id, position);
            }
            InteractionEvent::Release { target } => {
                debug!("Released {:?}", target);
            }
            InteractionEvent::OpenEditor { target } => {
                info!("Opening editor for {:?}", target.id);
            }
            InteractionEvent::CloseEditor { target, outcome } => match outcome {
                EditorOutcome::Saved(text) => info!("Editor for {:?} saved: {:?}", target, text),
                EditorOutcome::Cancelled => info!("Editor for {:?} cancelled", target),
            },
        }
    }
}
