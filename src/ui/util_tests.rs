#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(Decimal::ZERO), "Rs. 0.00");
}

#[test]
fn test_format_amount_plain() {
    assert_eq!(format_amount(dec!(42.5)), "Rs. 42.50");
}

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234567.89)), "Rs. 1,234,567.89");
    assert_eq!(format_amount(dec!(1000)), "Rs. 1,000.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-1500.25)), "-Rs. 1,500.25");
}

#[test]
fn test_format_amount_rounds_to_cents() {
    assert_eq!(format_amount(dec!(9.999)), "Rs. 10.00");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 6), "hello…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    let s = "café électrique";
    let result = truncate(s, 5);
    assert_eq!(result.chars().count(), 5);
    assert!(result.ends_with('…'));
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_and_scrolls() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (9, 7);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_bottom() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!(index, 9);
    assert_eq!(scroll, 6);
}

#[test]
fn test_scroll_to_top() {
    let (mut index, mut scroll) = (7, 5);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}
