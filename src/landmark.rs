use egui::{Pos2, Rect};

use crate::error::SampleError;

/// Number of keypoints the hand landmark model produces per hand
pub const LANDMARK_COUNT: usize = 21;

/// Landmark indices, following the MediaPipe hand model layout
pub mod index {
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_TIP: usize = 8;
}

/// A single keypoint, normalized to the video frame (0.0 to 1.0 on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Position of this landmark inside the on-screen video rectangle
    pub fn in_rect(&self, video_rect: Rect) -> Pos2 {
        Pos2::new(
            video_rect.min.x + self.x * video_rect.width(),
            video_rect.min.y + self.y * video_rect.height(),
        )
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// All keypoints of one detected hand for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HandSample {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandSample {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn thumb_tip(&self) -> Landmark {
        self.landmarks[index::THUMB_TIP]
    }

    pub fn index_tip(&self) -> Landmark {
        self.landmarks[index::INDEX_TIP]
    }

    /// Normalized distance between the thumb tip and the index tip
    pub fn pinch_distance(&self) -> f32 {
        self.thumb_tip().distance(&self.index_tip())
    }

    pub fn is_pinching(&self, threshold: f32) -> bool {
        self.pinch_distance() < threshold
    }

    /// Maps the index fingertip into viewport coordinates using the on-screen
    /// rectangle of the video element.
    pub fn index_tip_in(&self, video_rect: Rect) -> Pos2 {
        self.index_tip().in_rect(video_rect)
    }

    /// Every landmark mapped into the video rectangle, for drawing the skeleton
    pub fn points_in(&self, video_rect: Rect) -> impl Iterator<Item = Pos2> + '_ {
        self.landmarks.iter().map(move |lm| lm.in_rect(video_rect))
    }
}

impl TryFrom<Vec<Landmark>> for HandSample {
    type Error = SampleError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        if let Some(index) = points.iter().position(|lm| !lm.is_finite()) {
            return Err(SampleError::NonFinite { index });
        }
        let found = points.len();
        let landmarks: [Landmark; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| SampleError::WrongLandmarkCount {
                expected: LANDMARK_COUNT,
                found,
            })?;
        Ok(Self { landmarks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_hand() -> HandSample {
        let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        points[index::THUMB_TIP] = Landmark::new(0.40, 0.50);
        points[index::INDEX_TIP] = Landmark::new(0.50, 0.25);
        HandSample::new(points)
    }

    #[test]
    fn test_pinch_threshold() {
        let hand = open_hand();
        assert!(!hand.is_pinching(0.05));

        let mut points = *hand.landmarks();
        points[index::THUMB_TIP] = Landmark::new(0.51, 0.26);
        let pinched = HandSample::new(points);
        assert!(pinched.pinch_distance() < 0.02);
        assert!(pinched.is_pinching(0.05));
    }

    #[test]
    fn test_index_tip_mapping() {
        let hand = open_hand();
        let video = Rect::from_min_size(Pos2::new(20.0, 10.0), egui::vec2(640.0, 480.0));
        let cursor = hand.index_tip_in(video);
        assert_eq!(cursor, Pos2::new(20.0 + 320.0, 10.0 + 120.0));
    }

    #[test]
    fn test_points_follow_video_rect() {
        let hand = open_hand();
        let video = Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(200.0, 400.0));
        let points: Vec<Pos2> = hand.points_in(video).collect();
        assert_eq!(points.len(), LANDMARK_COUNT);
        assert_eq!(points[0], Pos2::new(200.0, 250.0));
        assert_eq!(points[index::THUMB_TIP], Pos2::new(180.0, 250.0));
        assert_eq!(points[index::INDEX_TIP], hand.index_tip_in(video));
    }

    #[test]
    fn test_rejects_short_sample() {
        let points = vec![Landmark::default(); 5];
        assert_eq!(
            HandSample::try_from(points),
            Err(SampleError::WrongLandmarkCount { expected: 21, found: 5 })
        );
    }

    #[test]
    fn test_rejects_nan() {
        let mut points = vec![Landmark::default(); LANDMARK_COUNT];
        points[7] = Landmark::new(f32::NAN, 0.1);
        assert_eq!(
            HandSample::try_from(points),
            Err(SampleError::NonFinite { index: 7 })
        );
    }

    #[test]
    fn test_accepts_full_sample() {
        let points = vec![Landmark::new(0.2, 0.3); LANDMARK_COUNT];
        let hand = HandSample::try_from(points).unwrap();
        assert_eq!(hand.index_tip(), Landmark::new(0.2, 0.3));
    }
}
