use egui::{Pos2, Rect, Vec2};
use hand_drag::board::ITEM_SIZE;
use hand_drag::event::EventHandler;
use hand_drag::input::mouse::synthesize_hand;
use hand_drag::{
    Board, EditorOutcome, EventBus, HandDriver, HitTester, InteractionEvent, TargetClass,
};
use parking_lot::Mutex;
use std::sync::Arc;

fn stage() -> Rect {
    Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 600.0))
}

struct Recorder(Arc<Mutex<Vec<InteractionEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &InteractionEvent) {
        self.0.lock().push(event.clone());
    }
}

// Drives board + driver + bus the way the app does each frame
struct Harness {
    board: Board,
    driver: HandDriver,
    bus: EventBus,
    seen: Arc<Mutex<Vec<InteractionEvent>>>,
    now_ms: f64,
}

impl Harness {
    fn new() -> Self {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe(Box::new(Recorder(seen.clone())));
        Self {
            board: Board::demo(stage()),
            driver: HandDriver::default(),
            bus,
            seen,
            now_ms: 0.0,
        }
    }

    fn step(&mut self, pointer: Pos2, pressed: bool, dt_ms: f64) -> Vec<InteractionEvent> {
        self.now_ms += dt_ms;
        let hand = synthesize_hand(pointer, pressed, stage());
        let events = self.driver.on_frame(&[hand], stage(), self.now_ms, &self.board);
        for event in &events {
            self.board.apply(event);
        }
        self.bus.emit_all(&events);
        events
    }

    fn close_editor(&mut self, outcome: EditorOutcome) {
        if let Some(event) = self.driver.close_editor(outcome) {
            self.board.apply(&event);
            self.bus.emit(&event);
        }
    }
}

fn close(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < 0.01
}

#[test]
fn test_drag_item_into_zone() {
    let mut h = Harness::new();
    let item = h.board.items()[0].clone();
    let zone = h.board.zones()[1].clone();

    h.step(item.rect.center(), true, 16.0);
    h.step(Pos2::new(500.0, 400.0), true, 16.0);
    h.step(zone.rect.center(), true, 16.0);
    let events = h.step(zone.rect.center(), false, 16.0);

    assert!(matches!(events.as_slice(), [InteractionEvent::Drop { .. }, InteractionEvent::Release { .. }]));
    let dropped = h.board.item(item.id).unwrap();
    assert_eq!(dropped.class, TargetClass::Dropped);
    assert!(close(dropped.rect.center(), zone.rect.center()));
    assert_eq!(dropped.rect.size(), ITEM_SIZE);

    let names: Vec<_> = h.seen.lock().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["pick-up", "move", "move", "drop", "release"]);
}

#[test]
fn test_dropped_item_can_be_dragged_again() {
    let mut h = Harness::new();
    let item = h.board.items()[0].clone();
    let zone = h.board.zones()[0].clone();

    h.step(item.rect.center(), true, 16.0);
    h.step(zone.rect.center(), true, 16.0);
    h.step(zone.rect.center(), false, 16.0);

    let hit = h.board.target_at(zone.rect.center()).unwrap();
    assert_eq!(hit.id, item.id);
    assert_eq!(hit.class, TargetClass::Dropped);

    h.step(zone.rect.center(), true, 1000.0);
    h.step(Pos2::new(500.0, 200.0), true, 16.0);
    let events = h.step(Pos2::new(500.0, 200.0), false, 16.0);
    assert!(matches!(events.as_slice(), [InteractionEvent::Release { .. }]));
    assert!(close(h.board.item(item.id).unwrap().rect.center(), Pos2::new(500.0, 200.0)));
}

#[test]
fn test_double_pinch_renames_item() {
    let mut h = Harness::new();
    let item = h.board.items()[1].clone();
    let at = item.rect.center();

    h.step(at, true, 16.0);
    h.step(at, false, 100.0);
    let events = h.step(at + Vec2::new(2.0, 1.0), true, 100.0);
    assert!(matches!(events.as_slice(), [InteractionEvent::OpenEditor { .. }]));
    assert!(h.driver.engine().is_editing());

    // Pointer wanders while the editor is open; nothing moves
    h.step(Pos2::new(700.0, 100.0), true, 16.0);
    h.step(Pos2::new(700.0, 100.0), false, 16.0);
    assert!(close(h.board.item(item.id).unwrap().rect.center(), at));

    h.close_editor(EditorOutcome::Saved("Renamed".to_string()));
    assert_eq!(h.board.item(item.id).unwrap().label, "Renamed");
    assert!(!h.driver.engine().is_editing());
}

#[test]
fn test_topmost_item_wins_after_pickup() {
    let mut h = Harness::new();
    let first = h.board.items()[0].clone();
    let second = h.board.items()[1].clone();

    // Stack the first item on top of the second
    h.step(first.rect.center(), true, 16.0);
    h.step(second.rect.center(), true, 16.0);
    h.step(second.rect.center(), false, 16.0);

    let hit = h.board.target_at(second.rect.center()).unwrap();
    assert_eq!(hit.id, first.id);
}
