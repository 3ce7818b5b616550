use crate::HandDragApp;
use crate::engine::EngineConfig;

pub fn settings_panel(app: &mut HandDragApp, ctx: &egui::Context) {
    egui::SidePanel::left("settings_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Settings");

            let mut config = app.config.clone();
            ui.add(
                egui::Slider::new(&mut config.pinch_threshold, 0.01..=0.2)
                    .text("Pinch threshold"),
            );
            ui.add(
                egui::Slider::new(&mut config.double_pinch_window_ms, 100.0..=1500.0)
                    .text("Double-pinch window (ms)"),
            );
            ui.add(
                egui::Slider::new(&mut config.double_pinch_max_distance, 5.0..=100.0)
                    .text("Double-pinch distance"),
            );
            ui.checkbox(&mut config.release_on_hand_lost, "Release when hand is lost");

            if ui.button("Restore defaults").clicked() {
                config = EngineConfig::default();
            }
            if config != app.config {
                log::info!("Settings changed: {:?}", config);
                app.apply_config(config);
            }

            ui.separator();

            ui.label(format!("State: {}", app.driver.engine().state().name()));
            ui.label(format!("Events: {}", app.event_count));
            if ui.button("Reset board").clicked() {
                log::info!("Board reset from UI");
                app.reset_board();
            }

            ui.separator();
            ui.label("Move the pointer over the stage to move the hand. Hold the primary button to pinch, pinch twice quickly on an element to rename it.");
        });
}
