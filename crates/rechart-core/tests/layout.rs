// File: crates/rechart-core/tests/layout.rs
// Purpose: Layout scenarios: visible window, step width, relayout gating and index mapping.

mod common;

use common::chart;
use rechart_core::OptionOverrides;

#[test]
fn everything_fits_at_600px() {
    let c = chart(600.0, 300.0, 30, OptionOverrides::default());
    let l = c.layout().expect("laid out");
    assert_eq!(l.element_width, 600.0);
    assert_eq!(l.element_height, 300.0);
    assert_eq!(l.chart_width, 580.0);
    assert_eq!(l.visible_count, 30);
    assert_eq!(l.visible_start, 0);
    assert!((l.x_padding - 20.0).abs() < 1e-9);
    assert!(l.label_mod >= 1 && l.grid_mod >= 1);
}

#[test]
fn narrow_container_keeps_most_recent_positions() {
    let c = chart(300.0, 150.0, 30, OptionOverrides::default());
    let l = c.layout().expect("laid out");
    // 280px / 17px minimum spacing
    assert_eq!(l.visible_count, 16);
    assert_eq!(l.visible_start, 14);
    // one circle per visible position per series
    assert_eq!(c.document().find_by_class("circle").len(), 32);
    assert!(c.elements().circles[0][13].is_none());
    assert!(c.elements().circles[0][14].is_some());
}

#[test]
fn no_reduction_when_disabled() {
    let ov = OptionOverrides { reduce_data: Some(false), ..Default::default() };
    let c = chart(300.0, 150.0, 30, ov);
    assert_eq!(c.layout().map(|l| l.visible_count), Some(30));
}

#[test]
fn visible_window_never_exceeds_axis_count() {
    for width in [20.0, 90.0, 250.0, 512.0, 1400.0] {
        let c = chart(width, 200.0, 40, OptionOverrides::default());
        let l = c.layout().expect("laid out");
        assert!(l.visible_count <= 40, "width {width}");
        assert_eq!(l.visible_start + l.visible_count, 40);
    }
}

#[test]
fn relayout_is_skipped_at_unchanged_width() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    let before = c.to_svg();
    assert!(!c.resize());
    assert_eq!(c.to_svg(), before);

    c.host_mut().set_container_width(400.0);
    assert!(c.resize());
    assert_eq!(c.layout().map(|l| l.element_width), Some(400.0));
    // ratio derived from the first measurement is kept
    assert_eq!(c.layout().map(|l| l.element_height), Some(200.0));

    assert!(c.draw(true));
}

#[test]
fn zero_width_container_is_not_laid_out() {
    let mut c = chart(0.0, 300.0, 10, OptionOverrides::default());
    assert!(c.layout().is_none());
    assert!(c.document().is_empty());

    c.host_mut().set_container_width(f64::NAN);
    assert!(!c.resize());
}

#[test]
fn non_responsive_ignores_resize() {
    let ov = OptionOverrides { responsive: Some(false), ..Default::default() };
    let mut c = chart(500.0, 250.0, 12, ov);
    c.host_mut().set_container_width(800.0);
    assert!(!c.resize());
    assert_eq!(c.layout().map(|l| l.element_width), Some(500.0));
}

#[test]
fn height_bounds_apply_to_ratio() {
    let ov = OptionOverrides { ratio: Some(0.3), min_height: Some(200.0), ..Default::default() };
    let c = chart(600.0, 300.0, 30, ov);
    assert_eq!(c.layout().map(|l| l.element_height), Some(200.0));
    assert_eq!(c.document().size(), Some((600.0, 200.0)));
}

#[test]
fn index_mapping_is_monotonic_and_clamped() {
    for show_bar in [false, true] {
        let ov = OptionOverrides { show_bar: Some(show_bar), ..Default::default() };
        let c = chart(320.0, 200.0, 30, ov);
        let l = c.layout().expect("laid out").clone();
        let mut last = l.visible_start;
        let mut x = -50.0;
        while x < 500.0 {
            let i = l.index_at(x, show_bar);
            assert!(i >= last, "index went backwards at x={x}");
            assert!(i >= l.visible_start && i < l.axis_count);
            last = i;
            x += 3.5;
        }
        assert_eq!(last, l.axis_count - 1);
    }
}

#[test]
fn resizing_back_restores_identical_layout() {
    let mut c = chart(600.0, 300.0, 30, OptionOverrides::default());
    let first = c.layout().expect("laid out").clone();
    let first_svg = c.to_svg();

    c.host_mut().set_container_width(400.0);
    assert!(c.resize());
    assert_ne!(c.layout(), Some(&first));

    c.host_mut().set_container_width(600.0);
    assert!(c.resize());
    assert_eq!(c.layout(), Some(&first));
    assert_eq!(c.to_svg(), first_svg);
}

#[test]
fn zero_min_distance_draws_every_position() {
    let ov = OptionOverrides { x_axis_min_distance: Some(0.0), ..Default::default() };
    let c = chart(600.0, 300.0, 10, ov);
    let l = c.layout().expect("laid out");
    assert_eq!(l.visible_count, 10);
    assert_eq!(l.visible_start, 0);
    assert_eq!(c.document().find_by_class("circle").len(), 20);
}
