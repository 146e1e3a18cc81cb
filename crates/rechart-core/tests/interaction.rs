// File: crates/rechart-core/tests/interaction.rs
// Purpose: Hover, touch-hold, click and orientation handling through the chart facade.

mod common;

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use common::{chart, chart_on};
use rechart_core::{OptionOverrides, PointerPhase, SeriesValue, StaticHost};

#[test]
fn hover_shows_tooltip_guideline_and_enlarged_circle() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    let now = Instant::now();
    c.pointer_enter(110.0, now);
    assert_eq!(c.phase(), PointerPhase::Hovering);
    assert_eq!(c.layout().and_then(|l| l.hovered_index), Some(5));

    let doc = c.document();
    assert_eq!(doc.find_by_class("xaxis-guideline").len(), 1);
    let circle = c.elements().circles[0][5].expect("circle at 5");
    assert_eq!(doc.attr(circle, "r"), Some("8"));

    let html = c.tooltip_html().expect("tooltip");
    assert!(html.contains("September 6"));
    assert!(html.contains("data-color bg-navy"));
    assert!(html.contains("Internet Explorer"));
}

#[test]
fn same_index_moves_do_not_recreate_nodes() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    let now = Instant::now();
    c.pointer_enter(110.0, now);
    let created = c.document().created_count();
    let tooltip_id = c.tooltip().map(|t| t.id);

    c.pointer_move(112.0, now);
    c.pointer_move(115.0, now);
    assert_eq!(c.document().created_count(), created);
    assert_eq!(c.tooltip().map(|t| t.id), tooltip_id);

    // a new index mutates the same guideline and tooltip
    c.pointer_move(170.0, now);
    assert_eq!(c.layout().and_then(|l| l.hovered_index), Some(8));
    assert_eq!(c.document().created_count(), created);
    assert_eq!(c.tooltip().map(|t| t.id), tooltip_id);
    let line = c.elements().guideline.as_ref().map(|g| g.lines[0]).expect("guideline");
    assert_eq!(c.document().attr(line, "x1"), Some("170"));
    // previous circle shrinks back
    let old = c.elements().circles[0][5].expect("circle at 5");
    assert_eq!(c.document().attr(old, "r"), Some("4"));
}

#[test]
fn pointer_past_right_edge_maps_to_last_position() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    let now = Instant::now();
    c.pointer_enter(10_000.0, now);
    assert_eq!(c.layout().and_then(|l| l.hovered_index), Some(29));
    // flips to the left of the last point
    let t = c.tooltip().expect("tooltip");
    assert!(t.left < 590.0 - t.width + 1.0);
}

#[test]
fn leave_clears_hover_state() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    let now = Instant::now();
    c.pointer_enter(110.0, now);
    c.pointer_leave(now);
    assert_eq!(c.phase(), PointerPhase::Idle);
    assert!(c.tooltip().is_none());
    assert!(c.document().find_by_class("xaxis-guideline").is_empty());
    let circle = c.elements().circles[0][5].expect("circle at 5");
    assert_eq!(c.document().attr(circle, "r"), Some("4"));
}

#[test]
fn touch_hold_then_release() {
    let mut c = chart_on(StaticHost::new(600.0, 300.0).touch(true), 30, OptionOverrides::default());
    let t0 = Instant::now();
    c.pointer_enter(110.0, t0);
    assert_eq!(c.phase(), PointerPhase::Pressing);
    assert!(!c.locks_scroll());

    // moves before the hold elapses are ignored
    c.pointer_move(170.0, t0 + Duration::from_millis(100));
    assert!(c.tooltip().is_none());

    c.advance(t0 + Duration::from_millis(300));
    assert_eq!(c.phase(), PointerPhase::Hovering);
    assert_eq!(c.layout().and_then(|l| l.hovered_index), Some(5));
    assert!(c.locks_scroll());

    c.pointer_move(170.0, t0 + Duration::from_millis(350));
    assert_eq!(c.layout().and_then(|l| l.hovered_index), Some(8));

    let up = t0 + Duration::from_millis(400);
    c.pointer_leave(up);
    assert!(c.tooltip().is_some());
    assert_eq!(c.next_deadline(), Some(up + Duration::from_millis(10)));
    c.advance(up + Duration::from_millis(10));
    assert!(c.tooltip().is_none());
    assert_eq!(c.phase(), PointerPhase::Idle);
}

#[test]
fn quick_tap_never_hovers() {
    let mut c = chart_on(StaticHost::new(600.0, 300.0).touch(true), 30, OptionOverrides::default());
    let t0 = Instant::now();
    c.pointer_enter(110.0, t0);
    c.pointer_leave(t0 + Duration::from_millis(80));
    c.advance(t0 + Duration::from_secs(2));
    assert_eq!(c.phase(), PointerPhase::Idle);
    assert!(c.tooltip().is_none());
    assert!(c.layout().and_then(|l| l.hovered_index).is_none());
}

#[test]
fn scroll_lock_can_be_disabled() {
    let ov = OptionOverrides { lock_scroll_on_touch_press: Some(false), touch_delay: Some(0), ..Default::default() };
    let mut c = chart_on(StaticHost::new(600.0, 300.0).touch(true), 30, ov);
    c.pointer_enter(110.0, Instant::now());
    assert_eq!(c.phase(), PointerPhase::Hovering);
    assert!(!c.locks_scroll());
}

#[test]
fn click_reports_label_values_and_index() {
    let seen: Arc<Mutex<Option<(String, Vec<SeriesValue>, usize)>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let ov = OptionOverrides::default().with_click(move |label, values, index| {
        *sink.lock().unwrap() = Some((label.tooltip_text().to_string(), values.to_vec(), index));
    });
    let mut c = chart(600.0, 300.0, 30, ov);
    assert!(c.click(130.0));

    let (label, values, index) = seen.lock().unwrap().clone().expect("callback ran");
    assert_eq!(index, 6);
    assert_eq!(label, "September 7");
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].color.as_deref(), Some("navy"));
    assert_eq!(values[1].label.as_deref(), Some("Internet Explorer"));
    assert_eq!(values[0].value, c.dataset()[0].value(6));
}

#[test]
fn click_without_callback_is_ignored() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    assert!(!c.click(130.0));
}

#[test]
fn element_offset_is_subtracted() {
    let mut c = chart_on(StaticHost::new(600.0, 300.0).with_left(200.0), 30, OptionOverrides::default());
    c.pointer_enter(310.0, Instant::now());
    assert_eq!(c.layout().and_then(|l| l.hovered_index), Some(5));
}

#[test]
fn orientation_change_drops_tooltip_only() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    c.pointer_enter(110.0, Instant::now());
    c.orientation_change();
    assert!(c.tooltip().is_none());
    assert_eq!(c.document().find_by_class("xaxis-guideline").len(), 1);
}

#[test]
fn redraw_resets_hover() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    c.pointer_enter(110.0, Instant::now());
    c.host_mut().set_container_width(500.0);
    assert!(c.resize());
    assert!(c.tooltip().is_none());
    assert!(c.layout().and_then(|l| l.hovered_index).is_none());
    assert!(c.document().find_by_class("xaxis-guideline").is_empty());
}

#[test]
fn bar_guideline_brackets_the_cell() {
    let ov = OptionOverrides { show_bar: Some(true), ..Default::default() };
    let mut c = chart(600.0, 300.0, 12, ov);
    let l = c.layout().expect("laid out").clone();
    c.pointer_enter(l.x_at(3) + 1.0, Instant::now());
    assert_eq!(c.layout().and_then(|l| l.hovered_index), Some(3));
    let lines = c.document().find_by_class("xaxis-guideline");
    assert_eq!(lines.len(), 2);
    let x0: f64 = c.document().attr(lines[0], "x1").and_then(|v| v.parse().ok()).expect("x1");
    let x1: f64 = c.document().attr(lines[1], "x1").and_then(|v| v.parse().ok()).expect("x1");
    assert_eq!(x1 - x0, l.x_padding.trunc());
}
