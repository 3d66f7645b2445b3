//! Flatten a design-file node tree into frame records.
//!
//! The walk is depth-first pre-order with children in document order. It uses
//! an explicit stack, so document depth is bounded by memory rather than by
//! the call stack.

use figma_client::Node;

use super::models::FrameRecord;

/// Node type that yields a record.
pub const CONTAINER_TYPE: &str = "FRAME";
/// Node type whose `characters` are collected as text.
pub const TEXT_TYPE: &str = "TEXT";

#[derive(Debug, Clone)]
pub struct FlattenOptions {
    pub container_type: String,
    pub text_type: String,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            container_type: CONTAINER_TYPE.to_string(),
            text_type: TEXT_TYPE.to_string(),
        }
    }
}

/// Pre-order iterator over a node and all of its descendants.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// One record per `FRAME` node, in document pre-order.
pub fn flatten(root: &Node) -> Vec<FrameRecord> {
    flatten_with(root, &FlattenOptions::default())
}

pub fn flatten_with(root: &Node, options: &FlattenOptions) -> Vec<FrameRecord> {
    PreOrder::new(root)
        .filter(|node| node.node_type == options.container_type)
        .map(|node| frame_record(node, &options.text_type))
        .collect()
}

fn frame_record(node: &Node, text_type: &str) -> FrameRecord {
    let bounds = node.absolute_bounding_box.unwrap_or_default();
    FrameRecord {
        name: node.name.clone().unwrap_or_default(),
        text: collect_text(node, text_type),
        width: bounds.width,
        height: bounds.height,
        x: bounds.x,
        y: bounds.y,
        node_type: node.node_type.clone(),
        child_count: node.children.len(),
    }
}

/// Space-joined contents of every text leaf under `node`, in visit order.
/// Text nodes without characters contribute nothing.
pub fn collect_text(node: &Node, text_type: &str) -> String {
    PreOrder::new(node)
        .filter(|n| n.node_type == text_type)
        .filter_map(|n| n.characters.as_deref())
        .filter(|chars| !chars.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figma_client::BoundingBox;

    fn text(chars: &str) -> Node {
        Node::new(TEXT_TYPE).with_characters(chars)
    }

    #[test]
    fn welcome_frame_scenario() {
        let root = Node::new("DOCUMENT")
            .with_child(Node::new("FRAME").named("Welcome").with_child(text("Let's go")));

        let records = flatten(&root);

        assert_eq!(
            records,
            vec![FrameRecord {
                name: "Welcome".into(),
                text: "Let's go".into(),
                width: None,
                height: None,
                x: None,
                y: None,
                node_type: "FRAME".into(),
                child_count: 1,
            }]
        );
    }

    #[test]
    fn preorder_visits_every_node_once() {
        let root = Node::new("DOCUMENT")
            .with_child(
                Node::new("CANVAS")
                    .with_child(Node::new("FRAME").named("A").with_child(text("a")))
                    .with_child(Node::new("GROUP").with_child(text("loose"))),
            )
            .with_child(Node::new("CANVAS").with_child(Node::new("FRAME").named("B")));

        let visited: Vec<&str> = PreOrder::new(&root).map(|n| n.node_type.as_str()).collect();
        assert_eq!(
            visited,
            vec!["DOCUMENT", "CANVAS", "FRAME", "TEXT", "GROUP", "TEXT", "CANVAS", "FRAME"]
        );
    }

    #[test]
    fn records_follow_document_preorder() {
        let root = Node::new("DOCUMENT").with_child(
            Node::new("CANVAS")
                .with_child(
                    Node::new("FRAME")
                        .named("Outer")
                        .with_child(text("one"))
                        .with_child(Node::new("FRAME").named("Inner").with_child(text("two"))),
                )
                .with_child(Node::new("FRAME").named("Sibling")),
        );

        let records = flatten(&root);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Inner", "Sibling"]);

        // Nested frame text also counts toward the enclosing frame
        assert_eq!(records[0].text, "one two");
        assert_eq!(records[1].text, "two");
        assert_eq!(records[2].text, "");
    }

    #[test]
    fn child_count_is_direct_children_only() {
        let frame = Node::new("FRAME")
            .named("Card")
            .with_child(Node::new("RECTANGLE"))
            .with_child(Node::new("GROUP").with_child(text("a")).with_child(text("b")));

        let records = flatten(&frame);
        assert_eq!(records[0].child_count, 2);
        assert_eq!(records[0].text, "a b");
    }

    #[test]
    fn missing_characters_and_geometry_are_tolerated() {
        let frame = Node::new("FRAME")
            .with_child(Node::new(TEXT_TYPE))
            .with_child(text("kept"))
            .with_bounds(BoundingBox {
                x: Some(10.0),
                y: None,
                width: Some(375.0),
                height: Some(812.0),
            });

        let record = &flatten(&frame)[0];
        assert_eq!(record.name, "");
        assert_eq!(record.text, "kept");
        assert_eq!(record.x, Some(10.0));
        assert_eq!(record.y, None);
        assert_eq!(record.width, Some(375.0));
    }

    #[test]
    fn custom_container_type() {
        let root = Node::new("DOCUMENT")
            .with_child(Node::new("COMPONENT").named("Button").with_child(text("OK")))
            .with_child(Node::new("FRAME").named("Screen"));

        let options = FlattenOptions {
            container_type: "COMPONENT".into(),
            ..Default::default()
        };
        let records = flatten_with(&root, &options);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Button");
        assert_eq!(records[0].text, "OK");
    }

    #[test]
    fn deep_tree_does_not_overflow() {
        let mut node = text("bottom");
        for _ in 0..50_000 {
            node = Node::new("GROUP").with_child(node);
        }
        let root = Node::new("FRAME").named("Deep").with_child(node);

        let records = flatten(&root);
        assert_eq!(records[0].text, "bottom");

        // Drop iteratively; the derived Drop would recurse once per level
        let mut pending = vec![root];
        while let Some(mut n) = pending.pop() {
            pending.append(&mut n.children);
        }
    }
}
