//! Color helpers for applying theme opacities on backends without a separate alpha.

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six digit `#RRGGBB` color; the `#` is optional.
    pub fn parse(color: &str) -> Option<Self> {
        let digits = color.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let [_, r, g, b] = u32::from_str_radix(digits, 16).ok()?.to_be_bytes();
        Some(Self { r, g, b })
    }
}

/// Fold an opacity into a CSS color.
///
/// Hex colors become `rgba(...)` when `opacity < 1`; anything else (named
/// colors, `transparent`, existing `rgba`) is passed through unchanged.
pub fn with_opacity(color: &str, opacity: f32) -> String {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return color.to_string();
    }
    match Rgb::parse(color) {
        Some(Rgb { r, g, b }) => format!("rgba({r}, {g}, {b}, {opacity:.2})"),
        None => color.to_string(),
    }
}
