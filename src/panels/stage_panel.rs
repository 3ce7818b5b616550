use egui::{Align2, Color32, FontId, Pos2, Sense, Stroke, vec2};

use crate::HandDragApp;
use crate::board::Board;
use crate::input::mouse;
use crate::target::TargetClass;

const CURSOR_RADIUS: f32 = 10.0;
const LANDMARK_RADIUS: f32 = 3.0;
const LANDMARK_COLOR: Color32 = Color32::from_rgb(50, 205, 50);
const ROUNDING: f32 = 10.0;
/// How long a drop notification stays on screen, in seconds
const TOAST_SECONDS: f64 = 2.0;

pub fn stage_panel(app: &mut HandDragApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Hand Tracking: Drag & Drop + Drop Zones");
        });

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let stage = response.rect;

        let board = app.board.get_or_insert_with(|| Board::demo(stage));
        // Zones stay pinned to the bottom corners when the window is resized
        board.relayout(stage);

        let now = ctx.input(|i| i.time);
        let hands: Vec<_> = mouse::pointer_hand(ctx, stage).into_iter().collect();
        let events = app.driver.on_frame(&hands, stage, now * 1000.0, &*board);
        app.dispatch(events, now);

        painter.rect_filled(stage, ROUNDING, Color32::from_gray(32));

        let Some(board) = &app.board else {
            return;
        };
        for zone in board.zones() {
            painter.rect_filled(zone.rect, ROUNDING, zone.fill);
            painter.text(
                zone.rect.center(),
                Align2::CENTER_CENTER,
                &zone.label,
                FontId::proportional(16.0),
                Color32::BLACK,
            );
        }

        let dragged = match app.driver.engine().state() {
            crate::engine::EngineState::Dragging(target) => Some(target.id),
            _ => None,
        };
        for item in board.items() {
            painter.rect_filled(item.rect, ROUNDING, item.fill);
            if dragged == Some(item.id) {
                painter.rect_stroke(item.rect, ROUNDING, Stroke::new(3.0, Color32::GOLD));
            } else if item.class == TargetClass::Dropped {
                painter.rect_stroke(item.rect, ROUNDING, Stroke::new(2.0, Color32::WHITE));
            }
            painter.text(
                item.rect.center(),
                Align2::CENTER_CENTER,
                &item.label,
                FontId::proportional(14.0),
                Color32::BLACK,
            );
        }

        for hand in &hands {
            for point in hand.points_in(stage) {
                painter.circle_filled(point, LANDMARK_RADIUS, LANDMARK_COLOR);
            }
        }

        if let Some(cursor) = app.driver.cursor() {
            let color = if app.driver.is_pinching() {
                Color32::YELLOW
            } else {
                Color32::RED
            };
            painter.circle_filled(cursor, CURSOR_RADIUS, color);
        }

        if let Some(text) = app.toast_text(now, TOAST_SECONDS) {
            let anchor = Pos2::new(stage.center().x, stage.min.y + 30.0);
            let galley = painter.layout_no_wrap(
                text.to_string(),
                FontId::proportional(16.0),
                Color32::WHITE,
            );
            let rect = Align2::CENTER_CENTER
                .anchor_size(anchor, galley.size())
                .expand2(vec2(12.0, 6.0));
            painter.rect_filled(rect, ROUNDING, Color32::from_black_alpha(200));
            painter.galley(rect.min + vec2(12.0, 6.0), galley, Color32::WHITE);
        }
    });
}
