//! Action icon configuration.

use serde::{Deserialize, Serialize};

use crate::layout::HeaderNode;

/// Yields the ordered action icons of a header cell (possibly none).
pub trait ActionIconResolver {
    fn icon_names(&self, node: &HeaderNode) -> Vec<String>;
}

/// Icons shown on column header cells matching the filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionIconConfig {
    pub icon_names: Vec<String>,
    /// Only cells of these fields; `None` matches every field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_keys: Option<Vec<String>>,
    /// Only leaf cells
    pub leaf_only: bool,
}

impl ActionIconConfig {
    pub fn matches(&self, node: &HeaderNode) -> bool {
        if self.leaf_only && !node.is_leaf {
            return false;
        }
        self.field_keys
            .as_ref()
            .is_none_or(|keys| keys.iter().any(|key| *key == node.key))
    }
}

/// The first matching config wins.
impl ActionIconResolver for [ActionIconConfig] {
    fn icon_names(&self, node: &HeaderNode) -> Vec<String> {
        self.iter()
            .find(|config| config.matches(node))
            .map(|config| config.icon_names.clone())
            .unwrap_or_default()
    }
}

impl ActionIconResolver for Vec<ActionIconConfig> {
    fn icon_names(&self, node: &HeaderNode) -> Vec<String> {
        self.as_slice().icon_names(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ColumnSpec, HeaderTree, NodeId};

    #[test]
    fn test_first_matching_config_wins() {
        let tree = HeaderTree::build(
            &[ColumnSpec::group(
                "region",
                "East",
                vec![ColumnSpec::leaf("city", "Boston", 100.0)],
            )],
            30.0,
        );
        let configs = vec![
            ActionIconConfig {
                icon_names: vec!["SortDown".into()],
                field_keys: Some(vec!["city".into()]),
                leaf_only: true,
            },
            ActionIconConfig {
                icon_names: vec!["Filter".into()],
                ..ActionIconConfig::default()
            },
        ];

        let east = tree.get(NodeId(0)).map(|n| configs.icon_names(n));
        let boston = tree.get(NodeId(1)).map(|n| configs.icon_names(n));
        assert_eq!(east, Some(vec!["Filter".to_string()]));
        assert_eq!(boston, Some(vec!["SortDown".to_string()]));
    }

    #[test]
    fn test_no_configs_means_no_icons() {
        let tree = HeaderTree::build(&[ColumnSpec::leaf("city", "Boston", 100.0)], 30.0);
        let configs: Vec<ActionIconConfig> = Vec::new();
        assert_eq!(
            tree.get(NodeId(0)).map(|n| configs.icon_names(n)),
            Some(Vec::new())
        );
    }
}
