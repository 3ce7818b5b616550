//! Mouse stand-in for the hand landmark detector.
//!
//! Builds a plausible hand skeleton whose index fingertip sits under the
//! pointer. Holding the primary button closes the thumb onto the index tip,
//! which the driver then sees as a pinch.

use egui::{Context, Pos2, Rect};

use crate::landmark::{HandSample, LANDMARK_COUNT, Landmark};

/// Thumb tip offset from the index tip while "pinching"
const PINCHED_THUMB: (f32, f32) = (-0.015, 0.01);
/// Thumb tip offset from the index tip with the hand open
const OPEN_THUMB: (f32, f32) = (-0.12, 0.10);

/// Offsets of every landmark from the index tip, wrist first. Thumb tip is
/// overwritten depending on the pinch state.
const SKELETON: [(f32, f32); LANDMARK_COUNT] = [
    (0.02, 0.30),
    (-0.05, 0.26),
    (-0.09, 0.21),
    (-0.11, 0.15),
    (-0.12, 0.10),
    (-0.02, 0.16),
    (-0.01, 0.10),
    (0.0, 0.05),
    (0.0, 0.0),
    (0.03, 0.16),
    (0.04, 0.09),
    (0.045, 0.04),
    (0.05, 0.0),
    (0.07, 0.17),
    (0.08, 0.11),
    (0.085, 0.07),
    (0.09, 0.04),
    (0.10, 0.19),
    (0.11, 0.15),
    (0.115, 0.12),
    (0.12, 0.10),
];

/// Synthesize a hand sample with the index tip at `pointer`
pub fn synthesize_hand(pointer: Pos2, pressed: bool, video_rect: Rect) -> HandSample {
    let nx = (pointer.x - video_rect.min.x) / video_rect.width();
    let ny = (pointer.y - video_rect.min.y) / video_rect.height();

    let mut landmarks = SKELETON.map(|(dx, dy)| Landmark::new(nx + dx, ny + dy));
    let (tx, ty) = if pressed { PINCHED_THUMB } else { OPEN_THUMB };
    landmarks[crate::landmark::index::THUMB_TIP] = Landmark::new(nx + tx, ny + ty);
    HandSample::new(landmarks)
}

/// Read the pointer from egui and turn it into a hand sample. A pointer
/// outside the video area counts as no hand in frame.
pub fn pointer_hand(ctx: &Context, video_rect: Rect) -> Option<HandSample> {
    let (pointer, pressed) = ctx.input(|i| (i.pointer.hover_pos(), i.pointer.primary_down()));
    pointer
        .filter(|pos| video_rect.contains(*pos))
        .map(|pos| synthesize_hand(pos, pressed, video_rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(640.0, 480.0))
    }

    #[test]
    fn test_index_tip_under_pointer() {
        let pointer = Pos2::new(330.0, 260.0);
        let hand = synthesize_hand(pointer, false, video());
        let mapped = hand.index_tip_in(video());
        assert!((mapped.x - pointer.x).abs() < 0.01);
        assert!((mapped.y - pointer.y).abs() < 0.01);
    }

    #[test]
    fn test_pressed_means_pinching() {
        let pointer = Pos2::new(330.0, 260.0);
        assert!(synthesize_hand(pointer, true, video()).is_pinching(0.05));
        assert!(!synthesize_hand(pointer, false, video()).is_pinching(0.05));
    }
}
