#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod board;
pub mod engine;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod landmark;
pub mod panels;
pub mod target;

pub use app::HandDragApp;
pub use board::Board;
pub use engine::{EngineConfig, EngineState, FrameInput, GestureEngine};
pub use error::{ConfigError, SampleError};
pub use event::{EditorOutcome, EventBus, InteractionEvent};
pub use input::HandDriver;
pub use landmark::{HandSample, Landmark};
pub use target::{DropZone, HitTester, InteractionTarget, TargetClass, TargetId, ZoneId};
