//! Sidebar navigation tree.
//!
//! The sidebar is an ordered list of [`NavGroup`]s, each holding an ordered
//! list of [`NavItem`]s. Order is display order and is preserved by every
//! parse, serialize and export path.
//!
//! A [`NavItem`] either points at an internal page by slug or at an external
//! URL. On the wire both shapes are a flat record (`{label, slug}` or
//! `{label, link}`); a record with both or neither target is rejected while
//! parsing.
//!
//! [`diff`] compares two navigation trees and reports how the sidebar
//! taxonomy changed between them.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavItem", into = "RawNavItem")]
pub enum NavItem {
    /// Internal documentation page.
    Slug {
        /// Display label.
        label: String,
        /// Page slug without leading slash (e.g., "guides/introduction").
        slug: String,
    },
    /// External or absolute link.
    Link {
        /// Display label.
        label: String,
        /// Target URL.
        link: String,
    },
}

impl NavItem {
    /// Create an item pointing at an internal page.
    pub fn slug(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::Slug {
            label: label.into(),
            slug: slug.into(),
        }
    }

    /// Create an item pointing at an external URL.
    pub fn link(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            link: link.into(),
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Slug { label, .. } | Self::Link { label, .. } => label,
        }
    }

    /// Navigation target: the slug for pages, the URL for links.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Slug { slug, .. } => slug,
            Self::Link { link, .. } => link,
        }
    }

    /// Page slug, if this item points at an internal page.
    #[must_use]
    pub fn as_slug(&self) -> Option<&str> {
        match self {
            Self::Slug { slug, .. } => Some(slug),
            Self::Link { .. } => None,
        }
    }

    /// External URL, if this item is a link.
    #[must_use]
    pub fn as_link(&self) -> Option<&str> {
        match self {
            Self::Slug { .. } => None,
            Self::Link { link, .. } => Some(link),
        }
    }
}

/// Flat wire shape of a [`NavItem`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavItem {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl TryFrom<RawNavItem> for NavItem {
    type Error = String;

    fn try_from(raw: RawNavItem) -> Result<Self, Self::Error> {
        match (raw.slug, raw.link) {
            (Some(slug), None) => Ok(Self::Slug {
                label: raw.label,
                slug,
            }),
            (None, Some(link)) => Ok(Self::Link {
                label: raw.label,
                link,
            }),
            (Some(_), Some(_)) => Err(format!(
                "navigation item \"{}\" sets both `slug` and `link`, expected exactly one",
                raw.label
            )),
            (None, None) => Err(format!(
                "navigation item \"{}\" sets neither `slug` nor `link`, expected exactly one",
                raw.label
            )),
        }
    }
}

impl From<NavItem> for RawNavItem {
    fn from(item: NavItem) -> Self {
        match item {
            NavItem::Slug { label, slug } => Self {
                label,
                slug: Some(slug),
                link: None,
            },
            NavItem::Link { label, link } => Self {
                label,
                slug: None,
                link: Some(link),
            },
        }
    }
}

/// Labeled sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavGroup {
    /// Group heading.
    pub label: String,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavGroup {
    /// Create a group from a label and its items.
    pub fn new(label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// A single difference between two navigation trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavChange {
    /// Group present only in the newer tree.
    GroupAdded { label: String },
    /// Group present only in the older tree.
    GroupRemoved { label: String },
    /// Group at the same position carries a different label.
    GroupRenamed { from: String, to: String },
    /// Same group, different position relative to the groups both trees share.
    GroupMoved { label: String, from: usize, to: usize },
    /// Item target present only in the newer group.
    ItemAdded {
        group: String,
        label: String,
        target: String,
    },
    /// Item target present only in the older group.
    ItemRemoved {
        group: String,
        label: String,
        target: String,
    },
    /// Same target, different label.
    ItemRelabelled {
        group: String,
        target: String,
        from: String,
        to: String,
    },
    /// Same target, different position relative to the items both groups share.
    ItemMoved {
        group: String,
        target: String,
        from: usize,
        to: usize,
    },
}

impl fmt::Display for NavChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroupAdded { label } => write!(f, "+ group \"{label}\""),
            Self::GroupRemoved { label } => write!(f, "- group \"{label}\""),
            Self::GroupRenamed { from, to } => write!(f, "~ group \"{from}\" -> \"{to}\""),
            Self::GroupMoved { label, from, to } => {
                write!(f, "~ group \"{label}\" moved {from} -> {to}")
            }
            Self::ItemAdded {
                group,
                label,
                target,
            } => write!(f, "+ {group}: \"{label}\" ({target})"),
            Self::ItemRemoved {
                group,
                label,
                target,
            } => write!(f, "- {group}: \"{label}\" ({target})"),
            Self::ItemRelabelled {
                group,
                target,
                from,
                to,
            } => write!(f, "~ {group}: {target} relabelled \"{from}\" -> \"{to}\""),
            Self::ItemMoved {
                group,
                target,
                from,
                to,
            } => write!(f, "~ {group}: {target} moved {from} -> {to}"),
        }
    }
}

/// Compare two navigation trees.
///
/// Groups are paired by label first. Groups left unpaired at the same index
/// in both trees are reported as a rename and their items are still compared.
/// Items are paired by target within each group pair.
#[must_use]
pub fn diff(old: &[NavGroup], new: &[NavGroup]) -> Vec<NavChange> {
    let mut changes = Vec::new();

    let new_by_label: HashMap<&str, usize> = new
        .iter()
        .enumerate()
        .map(|(i, g)| (g.label.as_str(), i))
        .collect();

    let mut pairs: Vec<(usize, usize)> = Vec::new();
    let mut new_paired = vec![false; new.len()];
    let mut old_unpaired = Vec::new();

    for (i, group) in old.iter().enumerate() {
        match new_by_label.get(group.label.as_str()) {
            Some(&j) if !new_paired[j] => {
                new_paired[j] = true;
                pairs.push((i, j));
            }
            _ => old_unpaired.push(i),
        }
    }

    for i in old_unpaired {
        if i < new.len() && !new_paired[i] {
            new_paired[i] = true;
            changes.push(NavChange::GroupRenamed {
                from: old[i].label.clone(),
                to: new[i].label.clone(),
            });
            pairs.push((i, i));
        } else {
            changes.push(NavChange::GroupRemoved {
                label: old[i].label.clone(),
            });
        }
    }

    for (j, paired) in new_paired.iter().enumerate() {
        if !paired {
            changes.push(NavChange::GroupAdded {
                label: new[j].label.clone(),
            });
        }
    }

    pairs.sort_unstable();

    // Positions among paired groups only, so added or removed groups don't count
    let mut new_order: Vec<usize> = pairs.iter().map(|&(_, j)| j).collect();
    new_order.sort_unstable();
    for (from, &(_, j)) in pairs.iter().enumerate() {
        if let Some(to) = new_order.iter().position(|&k| k == j)
            && from != to
        {
            changes.push(NavChange::GroupMoved {
                label: new[j].label.clone(),
                from,
                to,
            });
        }
    }

    for (i, j) in pairs {
        diff_items(&old[i], &new[j], &mut changes);
    }

    changes
}

fn diff_items(old: &NavGroup, new: &NavGroup, changes: &mut Vec<NavChange>) {
    let group = &new.label;
    let old_by_target: HashMap<&str, &NavItem> =
        old.items.iter().map(|item| (item.target(), item)).collect();
    let new_by_target: HashMap<&str, &NavItem> =
        new.items.iter().map(|item| (item.target(), item)).collect();

    for item in &old.items {
        if !new_by_target.contains_key(item.target()) {
            changes.push(NavChange::ItemRemoved {
                group: group.clone(),
                label: item.label().to_owned(),
                target: item.target().to_owned(),
            });
        }
    }

    for item in &new.items {
        match old_by_target.get(item.target()) {
            None => changes.push(NavChange::ItemAdded {
                group: group.clone(),
                label: item.label().to_owned(),
                target: item.target().to_owned(),
            }),
            Some(previous) if previous.label() != item.label() => {
                changes.push(NavChange::ItemRelabelled {
                    group: group.clone(),
                    target: item.target().to_owned(),
                    from: previous.label().to_owned(),
                    to: item.label().to_owned(),
                });
            }
            Some(_) => {}
        }
    }

    // Positions among shared targets only, so insertions don't count as moves
    let shared_old: Vec<&str> = old
        .items
        .iter()
        .map(NavItem::target)
        .filter(|t| new_by_target.contains_key(t))
        .collect();
    let shared_new: Vec<&str> = new
        .items
        .iter()
        .map(NavItem::target)
        .filter(|t| old_by_target.contains_key(t))
        .collect();

    for (to, target) in shared_new.iter().enumerate() {
        if let Some(from) = shared_old.iter().position(|t| t == target)
            && from != to
        {
            changes.push(NavChange::ItemMoved {
                group: group.clone(),
                target: (*target).to_owned(),
                from,
                to,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        items: Vec<NavItem>,
    }

    fn group(label: &str, items: &[(&str, &str)]) -> NavGroup {
        NavGroup::new(
            label,
            items
                .iter()
                .map(|(label, slug)| NavItem::slug(*label, *slug))
                .collect(),
        )
    }

    #[test]
    fn test_parse_slug_item() {
        let json = r#"{"items": [{"label": "Agent", "slug": "reference/agent"}]}"#;
        let parsed: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items, vec![NavItem::slug("Agent", "reference/agent")]);
    }

    #[test]
    fn test_parse_link_item() {
        let json = r#"{"items": [{"label": "llms.txt", "link": "/docs/llms.txt"}]}"#;
        let parsed: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items[0].as_link(), Some("/docs/llms.txt"));
        assert_eq!(parsed.items[0].as_slug(), None);
    }

    #[test]
    fn test_parse_item_with_both_targets_fails() {
        let json = r#"{"items": [{"label": "Both", "slug": "a", "link": "https://b"}]}"#;
        let err = serde_json::from_str::<Wrapper>(json).unwrap_err();
        assert!(err.to_string().contains("both"), "got: {err}");
    }

    #[test]
    fn test_parse_item_with_no_target_fails() {
        let toml = r#"
[[items]]
label = "Orphan"
"#;
        let err = toml::from_str::<Wrapper>(toml).unwrap_err();
        assert!(err.to_string().contains("neither"), "got: {err}");
    }

    #[test]
    fn test_parse_item_with_unknown_field_fails() {
        let json = r#"{"items": [{"label": "A", "slug": "a", "badge": "new"}]}"#;
        assert!(serde_json::from_str::<Wrapper>(json).is_err());
    }

    #[test]
    fn test_parse_group_with_unknown_field_fails() {
        let toml = r#"
label = "Guides"
iterms = [{ label = "Introduction", slug = "guides/introduction" }]
"#;
        let err = toml::from_str::<NavGroup>(toml).unwrap_err();
        assert!(err.to_string().contains("iterms"), "got: {err}");
    }

    #[test]
    fn test_parse_group_without_items() {
        let group: NavGroup = toml::from_str(r#"label = "Guides""#).unwrap();
        assert!(group.items.is_empty());
    }

    #[test]
    fn test_serialize_omits_absent_target() {
        let wrapper = Wrapper {
            items: vec![
                NavItem::slug("Loom", "reference/loom"),
                NavItem::link("llms.txt", "/docs/llms.txt"),
            ],
        };
        let json = serde_json::to_value(&wrapper).unwrap();

        assert_eq!(json["items"][0]["slug"], "reference/loom");
        assert!(json["items"][0].get("link").is_none());
        assert_eq!(json["items"][1]["link"], "/docs/llms.txt");
        assert!(json["items"][1].get("slug").is_none());
    }

    #[test]
    fn test_item_order_preserved() {
        let original = group(
            "Class Reference",
            &[("Trace", "t"), ("Loom", "l"), ("Agent", "a")],
        );
        let json = serde_json::to_string(&original).unwrap();
        let parsed: NavGroup = serde_json::from_str(&json).unwrap();
        let labels: Vec<&str> = parsed.items.iter().map(NavItem::label).collect();
        assert_eq!(labels, vec!["Trace", "Loom", "Agent"]);
    }

    #[test]
    fn test_diff_identical_trees_is_empty() {
        let tree = vec![group("Guides", &[("Introduction", "guides/introduction")])];
        assert!(diff(&tree, &tree).is_empty());
    }

    #[test]
    fn test_diff_group_rename_and_slug_moves() {
        let old = vec![group("Class Reference", &[("Loom", "reference/loom")])];
        let new = vec![group("Agents", &[("Loom", "agents/loom")])];

        let changes = diff(&old, &new);

        assert_eq!(
            changes,
            vec![
                NavChange::GroupRenamed {
                    from: "Class Reference".to_owned(),
                    to: "Agents".to_owned(),
                },
                NavChange::ItemRemoved {
                    group: "Agents".to_owned(),
                    label: "Loom".to_owned(),
                    target: "reference/loom".to_owned(),
                },
                NavChange::ItemAdded {
                    group: "Agents".to_owned(),
                    label: "Loom".to_owned(),
                    target: "agents/loom".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_diff_insertion_is_not_a_move() {
        let old = vec![group("Ref", &[("Loom", "l"), ("Agent", "a")])];
        let new = vec![group("Ref", &[("Loom", "l"), ("MCP", "m"), ("Agent", "a")])];

        let changes = diff(&old, &new);

        assert_eq!(
            changes,
            vec![NavChange::ItemAdded {
                group: "Ref".to_owned(),
                label: "MCP".to_owned(),
                target: "m".to_owned(),
            }]
        );
    }

    #[test]
    fn test_diff_reorder_and_relabel() {
        let old = vec![group("Ref", &[("Loom", "l"), ("Agent", "a")])];
        let new = vec![group("Ref", &[("Agents", "a"), ("Loom", "l")])];

        let changes = diff(&old, &new);

        assert!(changes.contains(&NavChange::ItemRelabelled {
            group: "Ref".to_owned(),
            target: "a".to_owned(),
            from: "Agent".to_owned(),
            to: "Agents".to_owned(),
        }));
        assert!(changes.contains(&NavChange::ItemMoved {
            group: "Ref".to_owned(),
            target: "a".to_owned(),
            from: 1,
            to: 0,
        }));
    }

    #[test]
    fn test_diff_group_reorder() {
        let guides = group("Guides", &[("Introduction", "guides/introduction")]);
        let reference = group("Class Reference", &[("Loom", "reference/loom")]);
        let old = vec![guides.clone(), reference.clone()];
        let new = vec![reference, guides];

        let changes = diff(&old, &new);

        assert_eq!(
            changes,
            vec![
                NavChange::GroupMoved {
                    label: "Guides".to_owned(),
                    from: 0,
                    to: 1,
                },
                NavChange::GroupMoved {
                    label: "Class Reference".to_owned(),
                    from: 1,
                    to: 0,
                },
            ]
        );
    }

    #[test]
    fn test_diff_group_insertion_is_not_a_move() {
        let old = vec![group("Guides", &[]), group("Class Reference", &[])];
        let new = vec![
            group("Guides", &[]),
            group("MCP", &[]),
            group("Class Reference", &[]),
        ];

        assert_eq!(
            diff(&old, &new),
            vec![NavChange::GroupAdded {
                label: "MCP".to_owned()
            }]
        );
    }

    #[test]
    fn test_diff_added_and_removed_groups() {
        let old = vec![group("Guides", &[]), group("Extra", &[])];
        let new = vec![group("Guides", &[])];
        assert_eq!(
            diff(&old, &new),
            vec![NavChange::GroupRemoved {
                label: "Extra".to_owned()
            }]
        );
        assert_eq!(
            diff(&new, &old),
            vec![NavChange::GroupAdded {
                label: "Extra".to_owned()
            }]
        );
    }

    #[test]
    fn test_nav_change_display() {
        let change = NavChange::GroupRenamed {
            from: "Class Reference".to_owned(),
            to: "Agents".to_owned(),
        };
        assert_eq!(change.to_string(), "~ group \"Class Reference\" -> \"Agents\"");
    }
}
