mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{EditorOutcome, InteractionEvent};
pub use handlers::LoggingHandler;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &InteractionEvent);
}
