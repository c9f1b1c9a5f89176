//! Color rendering.
//!
//! Strings are assumed to already be valid CSS colors. Color-space objects
//! (`{ colorSpace, components, alpha }`) are written as:
//!
//! - sRGB, opaque: `#rrggbb`
//! - sRGB, translucent: `rgba(r, g, b, alpha)`
//! - any other space: `color(<space> c1 c2 c3)` or `color(<space> c1 c2 c3 / alpha)`
//!
//! A missing `colorSpace` is treated as sRGB.

use serde_json::{Map, Value};

use super::stringify;

const SRGB: &str = "srgb";

pub(super) fn convert_color(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("components").and_then(Value::as_array) {
            Some(components) => convert_color_space(map, components),
            None => stringify(value),
        },
        _ => stringify(value),
    }
}

fn convert_color_space(map: &Map<String, Value>, components: &[Value]) -> String {
    let space = map
        .get("colorSpace")
        .and_then(Value::as_str)
        .unwrap_or(SRGB);
    let alpha = map.get("alpha").filter(|a| a.is_number());
    let translucent = alpha
        .and_then(Value::as_f64)
        .is_some_and(|a| a < 1.0);

    if space == SRGB {
        let [r, g, b] = srgb_channels(components);
        match alpha {
            Some(alpha) if translucent => {
                format!("rgba({}, {}, {}, {})", r, g, b, stringify(alpha))
            }
            _ => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    } else {
        let parts: Vec<String> = components.iter().map(stringify).collect();
        match alpha {
            Some(alpha) if translucent => {
                format!("color({} {} / {})", space, parts.join(" "), stringify(alpha))
            }
            _ => format!("color({} {})", space, parts.join(" ")),
        }
    }
}

/// Scales the first three unit-interval components to bytes.
///
/// Missing or non-numeric components (such as `"none"`) count as zero.
fn srgb_channels(components: &[Value]) -> [u8; 3] {
    let mut channels = [0u8; 3];
    for (channel, component) in channels.iter_mut().zip(components) {
        *channel = unit_to_byte(component.as_f64().unwrap_or(0.0));
    }
    channels
}

fn unit_to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
