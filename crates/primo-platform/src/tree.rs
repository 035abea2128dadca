//! The realized host tree.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use primo_core::{Handlers, NodeId, Ref};
use serde::Serialize;

/// One mounted host node.
#[derive(Clone, Debug)]
pub struct HostNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub tag: &'static str,
    /// Display name of the primitive that produced it.
    pub name: Option<&'static str>,
    pub attrs: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<NodeId>,
    pub handlers: Handlers,
    pub node_ref: Option<Ref>,
}

impl HostNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn handles_press(&self) -> bool {
        let h = &self.handlers;
        h.on_press.is_some() || h.on_press_in.is_some() || h.on_press_out.is_some()
    }

    pub fn is_focusable(&self) -> bool {
        self.handlers.on_key_down.is_some()
    }
}

/// Serializable view of a subtree.
#[derive(Clone, Debug, Serialize)]
pub struct NodeSnapshot {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

#[derive(Clone, Debug, Default)]
pub struct MountedTree {
    pub(crate) nodes: BTreeMap<NodeId, HostNode>,
    pub(crate) roots: Vec<NodeId>,
}

impl MountedTree {
    pub fn get(&self, id: NodeId) -> Option<&HostNode> {
        self.nodes.get(&id)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &HostNode> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(&id) {
                order.push(node);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order.into_iter()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&HostNode> {
        self.iter().find(|n| n.name == Some(name))
    }

    pub fn all_by_name(&self, name: &str) -> Vec<&HostNode> {
        self.iter().filter(|n| n.name == Some(name)).collect()
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&HostNode> {
        self.iter().find(|n| n.attr(name) == Some(value))
    }

    /// The element whose text child reads `text`, the way a user finds a
    /// button by its label.
    pub fn find_by_text(&self, text: &str) -> Option<&HostNode> {
        let leaf = self.iter().find(|n| n.text.as_deref() == Some(text))?;
        leaf.parent.and_then(|p| self.get(p)).or(Some(leaf))
    }

    /// `from` and its ancestors, nearest first.
    pub fn ancestors(&self, from: NodeId) -> impl Iterator<Item = &HostNode> {
        std::iter::successors(self.get(from), |n| n.parent.and_then(|p| self.get(p)))
    }

    pub fn closest(&self, from: NodeId, pred: impl Fn(&HostNode) -> bool) -> Option<NodeId> {
        self.ancestors(from).find(|n| pred(n)).map(|n| n.id)
    }

    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.roots.iter().filter_map(|id| self.snapshot_of(*id)).collect()
    }

    fn snapshot_of(&self, id: NodeId) -> Option<NodeSnapshot> {
        let node = self.get(id)?;
        Some(NodeSnapshot {
            tag: node.tag,
            name: node.name,
            attrs: node.attrs.clone(),
            style: node.style.clone(),
            text: node.text.clone(),
            children: node
                .children
                .iter()
                .filter_map(|c| self.snapshot_of(*c))
                .collect(),
        })
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }

    /// Compact text rendering, one node per line:
    /// `tag [Name] "text" key="value" {style: value}`.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            self.dump_node(*root, 0, &mut out);
        }
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        let _ = write!(out, "{:indent$}{}", "", node.tag, indent = depth * 2);
        if let Some(name) = node.name {
            let _ = write!(out, " [{name}]");
        }
        if let Some(text) = &node.text {
            let _ = write!(out, " {text:?}");
        }
        for (k, v) in &node.attrs {
            let _ = write!(out, " {k}={v:?}");
        }
        if !node.style.is_empty() {
            let style: Vec<String> = node.style.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            let _ = write!(out, " {{{}}}", style.join("; "));
        }
        out.push('\n');
        for child in &node.children {
            self.dump_node(*child, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{NativePlatform, Renderer, WebPlatform};
    use primo_core::{Color, Element, Role, Semantics, Style};

    fn card() -> Element {
        Element::view()
            .named("Card")
            .style(Style::new().padding(4.0).background(Color::from_hex("#ff0000")))
            .child(
                Element::pressable()
                    .semantics(Semantics::new(Role::Button).label("Close"))
                    .on_press(|_| {})
                    .child(Element::text("x")),
            )
    }

    #[test]
    fn test_lookup_helpers() {
        let mut r = Renderer::new(WebPlatform);
        let tree = r.render(card());
        let button = tree.find_by_text("x").unwrap();
        assert_eq!(button.tag, "button");
        assert_eq!(tree.find_by_attr("aria-label", "Close").map(|n| n.id), Some(button.id));

        let text = button.children[0];
        let names: Vec<_> = tree.ancestors(text).map(|n| n.tag).collect();
        assert_eq!(names, ["span", "button", "div"]);
        let card = tree.closest(text, |n| n.name == Some("Card"));
        assert_eq!(card, tree.roots().first().copied());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_dump_per_platform() {
        let mut native = Renderer::new(NativePlatform);
        insta::assert_snapshot!(native.render(card()).dump(), @r#"
        View [Card] {backgroundColor: #ff0000; padding: 4}
          Pressable accessibilityLabel="Close" accessibilityRole="button"
            Text "x"
        "#);
    }
}
