use serde::{Deserialize, Serialize};

/// Fill and stroke of a rectangle in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectStyle {
    pub fill: String,
    pub fill_opacity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

impl RectStyle {
    pub fn filled(fill: &str, fill_opacity: f32) -> Self {
        Self {
            fill: fill.to_string(),
            fill_opacity,
            stroke: None,
        }
    }

    /// Invisible rect used as the interactive (hover/select) background.
    pub fn transparent() -> Self {
        Self {
            fill: "transparent".to_string(),
            fill_opacity: 0.0,
            stroke: Some("transparent".to_string()),
        }
    }
}

/// Stroke of a line in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub stroke: String,
    pub line_width: f32,
    pub opacity: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_dash: Vec<f32>,
}
