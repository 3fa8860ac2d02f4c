//! TOML descriptions of box trees.
//!
//! ```toml
//! [[box]]
//! id = "wrapper"
//! width = 400
//! height = 120
//! border = { top = 5, bottom = 5 }
//!
//! [[box]]
//! id = "cell"
//! parent = "wrapper"
//! width = 380
//! height = 100
//! rotation = "left"
//! padding = { top = 10 }
//! ```
//!
//! `padding` fills the box definition; `border` and `margin` together fill
//! the static layout properties. Omitted sides are zero. A parent may be
//! declared after the boxes that refer to it.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::error::LoadError;
use super::find_similar;
use super::tree::BoxTree;
use super::types::{BoxDefinition, BoxId, BoxNode, StaticBoxLayoutProperties};

#[derive(Deserialize)]
struct TomlBoxTree {
    #[serde(default, rename = "box")]
    boxes: Vec<TomlBox>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlBox {
    id: String,
    parent: Option<String>,
    #[serde(default)]
    width: i64,
    #[serde(default)]
    height: i64,
    rotation: Option<String>,
    padding: Option<TomlSides>,
    border: Option<TomlSides>,
    margin: Option<TomlSides>,
}

#[derive(Deserialize, Default, Clone, Copy)]
#[serde(default, deny_unknown_fields)]
struct TomlSides {
    top: i64,
    bottom: i64,
    left: i64,
    right: i64,
}

impl TomlBox {
    fn box_definition(&self) -> Option<BoxDefinition> {
        self.padding.map(|p| BoxDefinition {
            padding_top: p.top,
            padding_bottom: p.bottom,
            padding_left: p.left,
            padding_right: p.right,
        })
    }

    fn static_properties(&self) -> Option<StaticBoxLayoutProperties> {
        if self.border.is_none() && self.margin.is_none() {
            return None;
        }
        let border = self.border.unwrap_or_default();
        let margin = self.margin.unwrap_or_default();
        Some(StaticBoxLayoutProperties {
            border_top: border.top,
            border_bottom: border.bottom,
            border_left: border.left,
            border_right: border.right,
            margin_top: margin.top,
            margin_bottom: margin.bottom,
            margin_left: margin.left,
            margin_right: margin.right,
        })
    }
}

impl BoxTree {
    /// Load a box tree from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a box tree from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let parsed: TomlBoxTree = toml::from_str(content)?;

        // Ids are assigned in declaration order, so parents can be resolved
        // before any node is built.
        let mut ids: HashMap<&str, BoxId> = HashMap::new();
        for (index, entry) in parsed.boxes.iter().enumerate() {
            if ids.insert(entry.id.as_str(), BoxId(index)).is_some() {
                return Err(LoadError::duplicate(&entry.id));
            }
        }

        let mut tree = BoxTree::new();
        for entry in &parsed.boxes {
            let parent = match entry.parent.as_deref() {
                Some(name) => match ids.get(name) {
                    Some(id) => Some(*id),
                    None => {
                        let suggestions = find_similar(ids.keys().copied(), name, 2);
                        return Err(LoadError::unknown_parent(&entry.id, name, suggestions));
                    }
                },
                None => None,
            };

            let node = BoxNode {
                parent,
                width: entry.width,
                height: entry.height,
                box_definition: entry.box_definition(),
                static_properties: entry.static_properties(),
                rotation: entry.rotation.clone(),
            };
            tree.add_named(entry.id.clone(), node);
        }

        Ok(tree)
    }
}
