#![forbid(unsafe_code)]

//! End-to-end panel behavior driven purely by a virtual clock.

use std::time::Duration;

use grimoire_core::buffer::Buffer;
use grimoire_core::geometry::Rect;
use grimoire_widgets::catalog::STATUS_MESSAGES;
use grimoire_widgets::grimoire::GrimoirePanel;
use grimoire_widgets::parasocial::ParasocialPanel;
use grimoire_widgets::theme::PanelTheme;

fn render(panel: &GrimoirePanel, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    panel.render(Rect::new(0, 0, width, height), &mut buf);
    buf
}

#[test]
fn full_cycle_returns_to_first_phase() {
    let mut panel = GrimoirePanel::new(PanelTheme::midnight(), 42);
    for _ in 0..24 {
        panel.advance(Duration::from_secs(1));
    }
    assert_eq!(panel.phase_index(), 0);
}

#[test]
fn each_phase_title_appears_during_its_window() {
    let mut panel = GrimoirePanel::new(PanelTheme::midnight(), 42);
    for i in 0..4 {
        assert_eq!(panel.phase_index(), i);
        // Let the swap transition settle before sampling the card.
        panel.advance(Duration::from_millis(1500));
        let buf = render(&panel, 80, 24);
        let title = panel.theme().phases[i].title;
        assert!(
            buf.contains_text(title),
            "phase {i} title {title:?} missing from frame"
        );
        panel.advance(Duration::from_millis(4500));
    }
}

#[test]
fn jump_takes_effect_immediately_and_cadence_continues() {
    let mut panel = GrimoirePanel::new(PanelTheme::dreamcast(), 9);
    panel.advance(Duration::from_secs(2));
    panel.jump_phase(3);
    assert_eq!(panel.phase_index(), 3);
    // 4 more seconds completes the original 6 s window.
    panel.advance(Duration::from_secs(4));
    assert_eq!(panel.phase_index(), 0);
}

#[test]
fn reveal_survives_automatic_phase_changes() {
    let mut panel = GrimoirePanel::new(PanelTheme::midnight(), 7);
    panel.toggle_reveal();
    panel.advance(Duration::from_secs(13));
    assert_eq!(panel.phase_index(), 2);
    assert!(panel.is_revealed());
    let buf = render(&panel, 80, 24);
    let lead: Vec<&str> = panel.theme().phases[2]
        .detail
        .split_whitespace()
        .take(2)
        .collect();
    assert!(buf.contains_text(&lead.join(" ")));
}

#[test]
fn sealed_panel_hides_detail_text() {
    let mut panel = GrimoirePanel::new(PanelTheme::midnight(), 7);
    panel.advance(Duration::from_secs(2));
    let buf = render(&panel, 80, 24);
    let lead: Vec<&str> = panel.theme().phases[0]
        .detail
        .split_whitespace()
        .take(2)
        .collect();
    assert!(!buf.contains_text(&lead.join(" ")));
}

#[test]
fn same_seed_renders_identical_frames() {
    let mut a = GrimoirePanel::new(PanelTheme::dreamcast(), 1234);
    let mut b = GrimoirePanel::new(PanelTheme::dreamcast(), 1234);
    for _ in 0..30 {
        a.advance(Duration::from_millis(100));
        b.advance(Duration::from_millis(100));
    }
    let fa = render(&a, 60, 20);
    let fb = render(&b, 60, 20);
    for y in 0..20 {
        assert_eq!(fa.row_text(y), fb.row_text(y), "row {y} diverged");
    }
}

#[test]
fn tiny_areas_render_nothing_without_panicking() {
    let panel = GrimoirePanel::new(PanelTheme::midnight(), 5);
    for (w, h) in [(0, 0), (1, 1), (7, 7), (80, 2)] {
        let mut buf = Buffer::new(w, h);
        panel.render(Rect::new(0, 0, w, h), &mut buf);
    }
}

#[test]
fn status_ticker_walks_all_messages() {
    let mut panel = ParasocialPanel::new(77);
    for expected in STATUS_MESSAGES {
        assert_eq!(panel.status(), *expected);
        panel.advance(Duration::from_secs(3));
    }
    assert_eq!(panel.status(), STATUS_MESSAGES[0]);
}

#[test]
fn parasocial_frame_shows_title_and_status() {
    let mut panel = ParasocialPanel::new(3);
    panel.advance(Duration::from_millis(500));
    let mut buf = Buffer::new(80, 24);
    panel.render(Rect::new(0, 0, 80, 24), &mut buf);
    assert!(buf.contains_text("PARASOCIAL.SYS"));
    assert!(buf.contains_text(STATUS_MESSAGES[0]));
}

#[test]
fn narrow_viewport_still_renders_status() {
    let mut panel = ParasocialPanel::new(3);
    panel.set_viewport(48, 14);
    panel.advance(Duration::from_secs(4));
    let mut buf = Buffer::new(48, 14);
    panel.render(Rect::new(0, 0, 48, 14), &mut buf);
    assert!(buf.contains_text(STATUS_MESSAGES[1]));
}
