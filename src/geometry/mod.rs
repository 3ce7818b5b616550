pub mod hit_testing;

pub use hit_testing::{centered_on, snap_to_zone, topmost_at};
