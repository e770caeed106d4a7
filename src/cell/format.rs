//! Header label formatting and truncation.

use std::borrow::Cow;

use serde::Serialize;

use crate::render::Scene;
use crate::types::TextTheme;

/// Formats a raw header label for display, per field.
pub trait FieldFormatter {
    fn format(&self, field: &str, value: &str) -> String;
}

impl<F> FieldFormatter for F
where
    F: Fn(&str, &str) -> String,
{
    fn format(&self, field: &str, value: &str) -> String {
        self(field, value)
    }
}

/// Shows labels unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFormatter;

impl FieldFormatter for IdentityFormatter {
    fn format(&self, _field: &str, value: &str) -> String {
        value.to_string()
    }
}

/// Raw and formatted label of a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResult {
    pub formatted_value: String,
    pub value: String,
}

/// Truncate text with ellipsis if it exceeds max width
pub fn truncate_text<'a>(
    scene: &dyn Scene,
    text: &'a str,
    max_width: f32,
    style: &TextTheme,
) -> Cow<'a, str> {
    if scene.measure_text(text, style) <= max_width {
        return Cow::Borrowed(text);
    }

    let ellipsis = "\u{2026}";
    let available = max_width - scene.measure_text(ellipsis, style);
    if available <= 0.0 {
        return Cow::Borrowed(ellipsis);
    }

    // Binary search for the longest prefix that fits
    let chars: Vec<char> = text.chars().collect();
    let mut low = 0;
    let mut high = chars.len();
    while low < high {
        let mid = (low + high).div_ceil(2);
        let prefix: String = chars.iter().take(mid).collect();
        if scene.measure_text(&prefix, style) <= available {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut truncated: String = chars.iter().take(low).collect();
    truncated.push_str(ellipsis);
    Cow::Owned(truncated)
}
