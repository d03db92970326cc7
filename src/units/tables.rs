//! Scale-factor tables for linear unit families
//!
//! Each table maps a unit symbol to its factor relative to the family's base
//! unit: 1 unit = factor × base. All factors are strictly positive. The
//! tables are immutable process-wide configuration.

use hashbrown::HashMap;
use once_cell::sync::Lazy;

static LENGTH: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("m", 1.0),
        ("cm", 0.01),
        ("mm", 0.001),
        ("km", 1000.0),
        ("in", 0.0254),
        ("ft", 0.3048),
        ("yd", 0.9144),
        ("mi", 1609.344),
    ])
});

static WEIGHT: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("kg", 1.0),
        ("g", 0.001),
        ("mg", 0.000001),
        ("lb", 0.45359237),
        ("oz", 0.0283495231),
    ])
});

static VOLUME: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("l", 1.0),
        ("ml", 0.001),
        ("cup", 0.24),
        ("floz", 0.0295735),
        ("m3", 1000.0),
    ])
});

static SPEED: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("m/s", 1.0),
        ("km/h", 1.0 / 3.6),
        ("mph", 0.44704),
        ("knot", 0.514444),
    ])
});

pub(crate) fn length() -> &'static HashMap<&'static str, f64> {
    &LENGTH
}

pub(crate) fn weight() -> &'static HashMap<&'static str, f64> {
    &WEIGHT
}

pub(crate) fn volume() -> &'static HashMap<&'static str, f64> {
    &VOLUME
}

pub(crate) fn speed() -> &'static HashMap<&'static str, f64> {
    &SPEED
}
