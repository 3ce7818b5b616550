use egui::Pos2;

use crate::target::{DropZone, InteractionTarget, TargetId};

/// How the label editor was dismissed
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOutcome {
    /// Save button or enter, carrying the new label text
    Saved(String),
    /// Cancel button, escape, or a click on the overlay
    Cancelled,
}

/// Discrete interaction events produced by the gesture engine
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// A pinch started over a target and captured it
    PickUp { target: InteractionTarget },
    /// The captured target follows the cursor; `position` is its new top-left
    Move { target: TargetId, position: Pos2 },
    /// The target was released over a zone and snapped to its center
    Drop {
        target: TargetId,
        zone: DropZone,
        position: Pos2,
    },
    /// The pinch ended and the target is no longer captured
    Release { target: TargetId },
    /// A double-pinch landed on a target
    OpenEditor { target: InteractionTarget },
    /// The editor opened by `OpenEditor` was dismissed
    CloseEditor {
        target: TargetId,
        outcome: EditorOutcome,
    },
}

impl InteractionEvent {
    /// The target this event refers to
    pub fn target_id(&self) -> TargetId {
        match self {
            Self::PickUp { target } | Self::OpenEditor { target } => target.id,
            Self::Move { target, .. }
            | Self::Drop { target, .. }
            | Self::Release { target }
            | Self::CloseEditor { target, .. } => *target,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PickUp { .. } => "pick-up",
            Self::Move { .. } => "move",
            Self::Drop { .. } => "drop",
            Self::Release { .. } => "release",
            Self::OpenEditor { .. } => "open-editor",
            Self::CloseEditor { .. } => "close-editor",
        }
    }
}
