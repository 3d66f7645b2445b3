use serde::{Deserialize, Serialize};

/// Response of `GET /v1/files/:key`.
///
/// `document` is optional here so callers can tell a malformed payload apart
/// from a transport failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FigmaFile {
    pub name: Option<String>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<String>,
    pub document: Option<Node>,
}

/// A node of the Figma document tree.
///
/// Only the fields the flattener reads are modeled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(rename = "absoluteBoundingBox", default)]
    pub absolute_bounding_box: Option<BoundingBox>,
}

impl Node {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Default::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = Some(characters.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.absolute_bounding_box = Some(bounds);
        self
    }
}

/// Absolute bounding box; Figma omits it for some node types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}
