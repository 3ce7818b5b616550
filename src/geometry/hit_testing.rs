use egui::{Pos2, Rect, Vec2};

use crate::target::{DropZone, InteractionTarget};

/// Top-left position that centers a box of `size` on `point`
pub fn centered_on(size: Vec2, point: Pos2) -> Pos2 {
    point - size / 2.0
}

/// Top-left position that centers `target` inside `zone`
pub fn snap_to_zone(target: &InteractionTarget, zone: &DropZone) -> Pos2 {
    centered_on(target.size(), zone.center())
}

/// Index of the last rect containing `pos`. Later entries are drawn on top,
/// so the last match is the topmost one.
pub fn topmost_at<I>(rects: I, pos: Pos2) -> Option<usize>
where
    I: IntoIterator<Item = Rect>,
{
    rects
        .into_iter()
        .enumerate()
        .filter(|(_, rect)| rect.contains(pos))
        .map(|(index, _)| index)
        .last()
}
