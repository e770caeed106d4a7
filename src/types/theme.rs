use serde::{Deserialize, Serialize};

use super::Padding;

/// Horizontal text alignment (matches Canvas 2D `textAlign`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    #[default]
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical text baseline (matches Canvas 2D `textBaseline`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Text styling for header labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextTheme {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: u16,
    pub fill: String,
    pub opacity: f32,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for TextTheme {
    fn default() -> Self {
        Self {
            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                .to_string(),
            font_size: 12.0,
            font_weight: 400,
            fill: "#000000".to_string(),
            opacity: 1.0,
            text_align: TextAlign::Right,
            text_baseline: TextBaseline::Middle,
        }
    }
}

impl TextTheme {
    /// Bold variant used for group and totals headers.
    pub fn bolder() -> Self {
        Self {
            font_weight: 700,
            ..Self::default()
        }
    }

    /// CSS font shorthand for Canvas 2D.
    pub fn css_font(&self) -> String {
        format!("{} {}px {}", self.font_weight, self.font_size, self.font_family)
    }
}

/// Action icon sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconTheme {
    pub size: f32,
    pub margin: Padding,
    pub fill: String,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            size: 10.0,
            margin: Padding::new(0.0, 4.0, 0.0, 4.0),
            fill: "#000000".to_string(),
        }
    }
}

/// Background, padding and borders of a header cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellStyle {
    pub background_color: String,
    pub background_color_opacity: f32,
    pub padding: Padding,
    pub horizontal_border_color: String,
    pub horizontal_border_color_opacity: f32,
    pub horizontal_border_width: f32,
    pub vertical_border_color: String,
    pub vertical_border_color_opacity: f32,
    pub vertical_border_width: f32,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            background_color: "#F5F8FE".to_string(),
            background_color_opacity: 1.0,
            padding: Padding::new(4.0, 8.0, 4.0, 8.0),
            horizontal_border_color: "#E1EAFE".to_string(),
            horizontal_border_color_opacity: 1.0,
            horizontal_border_width: 1.0,
            vertical_border_color: "#E1EAFE".to_string(),
            vertical_border_color_opacity: 1.0,
            vertical_border_width: 1.0,
        }
    }
}

/// Theme of the column header cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellTheme {
    pub cell: CellStyle,
    pub text: TextTheme,
    pub bolder_text: TextTheme,
    pub icon: IconTheme,
}

impl Default for CellTheme {
    fn default() -> Self {
        Self {
            cell: CellStyle::default(),
            text: TextTheme::default(),
            bolder_text: TextTheme::bolder(),
            icon: IconTheme::default(),
        }
    }
}

/// Resize hot zone appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResizeAreaTheme {
    /// Hot zone thickness
    pub size: f32,
    pub background: String,
    pub background_opacity: f32,
    pub guide_line_color: String,
    pub guide_line_dash: Vec<f32>,
}

impl Default for ResizeAreaTheme {
    fn default() -> Self {
        Self {
            size: 3.0,
            background: "#326EF4".to_string(),
            background_opacity: 0.0,
            guide_line_color: "#326EF4".to_string(),
            guide_line_dash: vec![3.0, 3.0],
        }
    }
}

/// Everything the column header reads from the theme resolver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderTheme {
    pub col_cell: CellTheme,
    /// Data cell text theme; leaf headers copy its alignment so columns line up.
    pub data_cell_text: TextTheme,
    pub resize_area: ResizeAreaTheme,
}
