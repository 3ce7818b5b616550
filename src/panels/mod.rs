mod editor_modal;
mod settings_panel;
mod stage_panel;

pub use editor_modal::editor_modal;
pub use settings_panel::settings_panel;
pub use stage_panel::stage_panel;
