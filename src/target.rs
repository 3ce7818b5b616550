use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a draggable element across frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub Uuid);

impl TargetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TargetId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies a drop zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub Uuid);

impl ZoneId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ZoneId {
    fn default() -> Self {
        Self::new()
    }
}

/// Interaction class of a target. A dropped target can still be dragged and
/// edited, the UI just renders it differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetClass {
    #[default]
    Draggable,
    Dropped,
}

/// Snapshot of a draggable element as reported by the hit-test collaborator.
///
/// The engine keeps its own copy while a drag is in progress and updates the
/// rect as the cursor moves, so it never needs to hit-test again mid-drag.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionTarget {
    pub id: TargetId,
    pub rect: Rect,
    pub class: TargetClass,
}

impl InteractionTarget {
    pub fn new(id: TargetId, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            rect: Rect::from_min_size(Pos2::new(left, top), Vec2::new(width, height)),
            class: TargetClass::Draggable,
        }
    }

    /// Top-left corner
    pub fn position(&self) -> Pos2 {
        self.rect.min
    }

    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    pub fn center(&self) -> Pos2 {
        self.rect.center()
    }

    pub fn move_to(&mut self, position: Pos2) {
        self.rect = Rect::from_min_size(position, self.rect.size());
    }
}

/// A region that accepts dropped targets
#[derive(Debug, Clone, PartialEq)]
pub struct DropZone {
    pub id: ZoneId,
    pub rect: Rect,
}

impl DropZone {
    pub fn new(id: ZoneId, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            rect: Rect::from_min_size(Pos2::new(left, top), Vec2::new(width, height)),
        }
    }

    pub fn center(&self) -> Pos2 {
        self.rect.center()
    }
}

/// Hit-test collaborator queried by the engine. Both queries return at most
/// the topmost match under the point.
pub trait HitTester {
    /// Draggable or dropped element under `pos`
    fn target_at(&self, pos: Pos2) -> Option<InteractionTarget>;

    /// Drop zone under `pos`
    fn drop_zone_at(&self, pos: Pos2) -> Option<DropZone>;
}
