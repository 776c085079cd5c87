// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! Unit tests for the GPIO interrupt event mask.

use cascade_common::EdgeEvents;

#[test]
fn test_bits_match_rp2040_layout() {
    assert_eq!(EdgeEvents::LEVEL_LOW.bits(), 0x1);
    assert_eq!(EdgeEvents::LEVEL_HIGH.bits(), 0x2);
    assert_eq!(EdgeEvents::EDGE_FALL.bits(), 0x4);
    assert_eq!(EdgeEvents::EDGE_RISE.bits(), 0x8);
}

#[test]
fn test_contains() {
    let events = EdgeEvents::EDGE_FALL | EdgeEvents::LEVEL_LOW;

    assert!(events.contains(EdgeEvents::EDGE_FALL));
    assert!(events.contains(EdgeEvents::LEVEL_LOW));
    assert!(!events.contains(EdgeEvents::EDGE_RISE));
    assert!(!events.contains(EdgeEvents::empty()));
}

#[test]
fn test_from_bits_keeps_one_pin() {
    let events = EdgeEvents::from_bits(0xF4);

    assert_eq!(events, EdgeEvents::EDGE_FALL);
    assert!(EdgeEvents::from_bits(0x30).is_empty());
}

#[test]
fn test_or_assign_accumulates() {
    let mut events = EdgeEvents::empty();
    assert!(events.is_empty());

    events |= EdgeEvents::EDGE_RISE;
    events |= EdgeEvents::EDGE_FALL;

    assert_eq!(events.bits(), 0xC);
}
