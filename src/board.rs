use egui::{Color32, Pos2, Rect, Vec2};
use log::{debug, warn};

use crate::event::{EditorOutcome, InteractionEvent};
use crate::geometry::topmost_at;
use crate::target::{DropZone, HitTester, InteractionTarget, TargetClass, TargetId, ZoneId};

pub const ITEM_SIZE: Vec2 = Vec2::new(80.0, 80.0);
pub const ZONE_SIZE: Vec2 = Vec2::new(150.0, 100.0);
/// Distance of the drop zones from the stage's bottom edge
pub const ZONE_BOTTOM_MARGIN: f32 = 20.0;
/// Distance of the drop zones from the stage's side edges
pub const ZONE_SIDE_MARGIN: f32 = 50.0;

/// A draggable element on the board
#[derive(Debug, Clone)]
pub struct BoardItem {
    pub id: TargetId,
    pub label: String,
    pub rect: Rect,
    pub class: TargetClass,
    pub fill: Color32,
}

impl BoardItem {
    pub fn target(&self) -> InteractionTarget {
        InteractionTarget {
            id: self.id,
            rect: self.rect,
            class: self.class,
        }
    }
}

/// Stage corner a zone is pinned to; anchored zones follow stage resizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneAnchor {
    BottomLeft,
    BottomRight,
}

impl ZoneAnchor {
    /// Top-left of a zone pinned to this corner of `stage`
    pub fn position(self, stage: Rect) -> Pos2 {
        let top = stage.max.y - ZONE_BOTTOM_MARGIN - ZONE_SIZE.y;
        match self {
            Self::BottomLeft => Pos2::new(stage.min.x + ZONE_SIDE_MARGIN, top),
            Self::BottomRight => Pos2::new(stage.max.x - ZONE_SIDE_MARGIN - ZONE_SIZE.x, top),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoardZone {
    pub id: ZoneId,
    pub label: String,
    pub rect: Rect,
    pub fill: Color32,
    pub anchor: Option<ZoneAnchor>,
}

impl BoardZone {
    pub fn zone(&self) -> DropZone {
        DropZone {
            id: self.id,
            rect: self.rect,
        }
    }
}

/// UI-side model of everything that can be dragged or dropped onto.
///
/// Items are kept in paint order: the last item is drawn on top and wins
/// hit-tests.
#[derive(Debug, Clone)]
pub struct Board {
    items: Vec<BoardItem>,
    zones: Vec<BoardZone>,
    /// Stage rect anchored zones were last laid out for
    stage: Rect,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            zones: Vec::new(),
            stage: Rect::NOTHING,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo layout: two draggables in the upper-left part of the stage
    /// and two drop zones along the bottom edge.
    pub fn demo(stage: Rect) -> Self {
        let mut board = Self {
            stage,
            ..Self::default()
        };
        let at = |fx: f32, fy: f32| {
            Pos2::new(
                stage.min.x + fx * stage.width(),
                stage.min.y + fy * stage.height(),
            )
        };
        board.add_item("Drag Me", at(0.10, 0.15), Color32::from_rgb(135, 206, 235));
        board.add_item("Drag Me Too", at(0.25, 0.35), Color32::from_rgb(250, 128, 114));

        board.add_anchored_zone(
            "Drop Zone 1",
            ZoneAnchor::BottomLeft,
            Color32::from_rgb(144, 238, 144),
        );
        board.add_anchored_zone(
            "Drop Zone 2",
            ZoneAnchor::BottomRight,
            Color32::from_rgb(240, 128, 128),
        );
        board
    }

    pub fn stage(&self) -> Rect {
        self.stage
    }

    /// Re-anchor pinned zones to a resized stage. Items and free zones keep
    /// their absolute positions.
    pub fn relayout(&mut self, stage: Rect) {
        if stage == self.stage {
            return;
        }
        debug!("Stage resized {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
        for zone in &mut self.zones {
            if let Some(anchor) = zone.anchor {
                zone.rect = Rect::from_min_size(anchor.position(stage), zone.rect.size());
            }
        }
    }

    pub fn add_item(&mut self, label: &str, position: Pos2, fill: Color32) -> TargetId {
        let id = TargetId::new();
        self.items.push(BoardItem {
            id,
            label: label.to_string(),
            rect: Rect::from_min_size(position, ITEM_SIZE),
            class: TargetClass::Draggable,
            fill,
        });
        id
    }

    pub fn add_zone(&mut self, label: &str, position: Pos2, fill: Color32) -> ZoneId {
        self.push_zone(label, position, fill, None)
    }

    /// Add a zone pinned to a corner of the current stage
    pub fn add_anchored_zone(&mut self, label: &str, anchor: ZoneAnchor, fill: Color32) -> ZoneId {
        self.push_zone(label, anchor.position(self.stage), fill, Some(anchor))
    }

    fn push_zone(
        &mut self,
        label: &str,
        position: Pos2,
        fill: Color32,
        anchor: Option<ZoneAnchor>,
    ) -> ZoneId {
        let id = ZoneId::new();
        self.zones.push(BoardZone {
            id,
            label: label.to_string(),
            rect: Rect::from_min_size(position, ZONE_SIZE),
            fill,
            anchor,
        });
        id
    }

    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    pub fn zones(&self) -> &[BoardZone] {
        &self.zones
    }

    pub fn item(&self, id: TargetId) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn zone(&self, id: ZoneId) -> Option<&BoardZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    fn item_mut(&mut self, id: TargetId) -> Option<&mut BoardItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Move an item to the end of the paint order
    fn raise(&mut self, id: TargetId) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            let item = self.items.remove(index);
            self.items.push(item);
        }
    }

    fn set_position(&mut self, id: TargetId, position: Pos2) {
        if let Some(item) = self.item_mut(id) {
            item.rect = Rect::from_min_size(position, item.rect.size());
        }
    }

    /// Apply the visual effect of an interaction event
    pub fn apply(&mut self, event: &InteractionEvent) {
        if self.item(event.target_id()).is_none() {
            warn!("Ignoring {} for unknown target {:?}", event.name(), event.target_id());
            return;
        }

        match event {
            InteractionEvent::PickUp { target } => self.raise(target.id),
            InteractionEvent::Move { target, position } => self.set_position(*target, *position),
            InteractionEvent::Drop {
                target, position, ..
            } => {
                self.set_position(*target, *position);
                if let Some(item) = self.item_mut(*target) {
                    item.class = TargetClass::Dropped;
                }
            }
            InteractionEvent::CloseEditor {
                target,
                outcome: EditorOutcome::Saved(text),
            } => {
                if let Some(item) = self.item_mut(*target) {
                    item.label = text.trim().to_string();
                }
            }
            InteractionEvent::Release { .. }
            | InteractionEvent::OpenEditor { .. }
            | InteractionEvent::CloseEditor { .. } => {}
        }
    }
}

impl HitTester for Board {
    fn target_at(&self, pos: Pos2) -> Option<InteractionTarget> {
        topmost_at(self.items.iter().map(|item| item.rect), pos).map(|index| self.items[index].target())
    }

    fn drop_zone_at(&self, pos: Pos2) -> Option<DropZone> {
        topmost_at(self.zones.iter().map(|zone| zone.rect), pos).map(|index| self.zones[index].zone())
    }
}
