use egui::{Align2, Color32, Id, Key, LayerId, Order};

use crate::HandDragApp;
use crate::event::EditorOutcome;

pub fn editor_modal(app: &mut HandDragApp, ctx: &egui::Context) {
    let Some(draft) = &mut app.editor else {
        return;
    };

    ctx.layer_painter(LayerId::new(Order::Middle, Id::new("editor_overlay")))
        .rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(140));

    let now = ctx.input(|i| i.time);
    let just_opened = draft.opened_at >= now;
    let mut outcome = None;

    let window = egui::Window::new("Edit label")
        .collapsible(false)
        .resizable(false)
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let response = ui.text_edit_singleline(&mut draft.text);
            if just_opened {
                response.request_focus();
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                outcome = Some(EditorOutcome::Saved(draft.text.clone()));
            }
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    outcome = Some(EditorOutcome::Saved(draft.text.clone()));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(EditorOutcome::Cancelled);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        outcome = Some(EditorOutcome::Cancelled);
    }

    // A press on the dimmed overlay dismisses the editor, except for the
    // press that opened it.
    if !just_opened {
        let pressed_at = ctx.input(|i| {
            i.pointer
                .primary_pressed()
                .then(|| i.pointer.interact_pos())
                .flatten()
        });
        if let (Some(pos), Some(window)) = (pressed_at, &window) {
            if !window.response.rect.contains(pos) {
                outcome = Some(EditorOutcome::Cancelled);
            }
        }
    }

    if let Some(outcome) = outcome {
        app.close_editor(outcome, now);
    }
}
