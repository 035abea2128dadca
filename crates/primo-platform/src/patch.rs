//! Keyed patching of a host tree that lives outside the renderer.
//!
//! A [`Mirror`] remembers what the host currently shows for every node id.
//! [`Mirror::sync`] compares that with a freshly rendered [`MountedTree`] and
//! returns the edits that bring the host up to date. Nodes whose id and tag
//! survive are edited in place, so focus and any in-flight default actions
//! stay on the same host object.

use std::collections::BTreeMap;

use primo_core::NodeId;

use crate::tree::{HostNode, MountedTree};

/// Attribute carrying the node id on hosts that have attributes.
pub const ID_ATTR: &str = "data-primo-id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch {
    /// Detach and forget the node (its host subtree goes with it).
    Remove(NodeId),
    Create {
        id: NodeId,
        tag: &'static str,
    },
    SetAttr {
        id: NodeId,
        name: String,
        value: String,
    },
    RemoveAttr {
        id: NodeId,
        name: String,
    },
    SetText {
        id: NodeId,
        text: Option<String>,
    },
    /// Ensure `id` is child number `index` of `parent` (`None`: the container).
    Place {
        id: NodeId,
        parent: Option<NodeId>,
        index: usize,
    },
}

#[derive(Clone, Debug, PartialEq)]
struct Shown {
    tag: &'static str,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
}

impl Shown {
    fn of(node: &HostNode) -> Self {
        let mut attrs = node.attrs.clone();
        attrs.insert(ID_ATTR.into(), node.id.0.to_string());
        if !node.style.is_empty() {
            let css: Vec<String> = node.style.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            attrs.insert("style".into(), css.join("; "));
        }
        Shown {
            tag: node.tag,
            attrs,
            text: node.text.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Mirror {
    shown: BTreeMap<NodeId, Shown>,
}

impl Mirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.shown.contains_key(&id)
    }

    /// Edits that turn the remembered host tree into `tree`, in apply order:
    /// removals, then creations and attribute/text edits, then placements in
    /// document order.
    pub fn sync(&mut self, tree: &MountedTree) -> Vec<Patch> {
        let mut out = Vec::new();

        let stale: Vec<NodeId> = self
            .shown
            .iter()
            .filter(|(id, shown)| tree.get(**id).is_none_or(|n| n.tag != shown.tag))
            .map(|(id, _)| *id)
            .collect();
        for id in stale {
            self.shown.remove(&id);
            out.push(Patch::Remove(id));
        }

        let mut places = Vec::new();
        for node in tree.iter() {
            let next = Shown::of(node);
            let id = node.id;
            match self.shown.get(&id) {
                None => {
                    out.push(Patch::Create { id, tag: next.tag });
                    for (name, value) in &next.attrs {
                        out.push(Patch::SetAttr {
                            id,
                            name: name.clone(),
                            value: value.clone(),
                        });
                    }
                    if next.text.is_some() {
                        out.push(Patch::SetText {
                            id,
                            text: next.text.clone(),
                        });
                    }
                }
                Some(prev) => {
                    for name in prev.attrs.keys().filter(|k| !next.attrs.contains_key(*k)) {
                        out.push(Patch::RemoveAttr {
                            id,
                            name: name.clone(),
                        });
                    }
                    for (name, value) in &next.attrs {
                        if prev.attrs.get(name) != Some(value) {
                            out.push(Patch::SetAttr {
                                id,
                                name: name.clone(),
                                value: value.clone(),
                            });
                        }
                    }
                    if prev.text != next.text {
                        out.push(Patch::SetText {
                            id,
                            text: next.text.clone(),
                        });
                    }
                }
            }
            let siblings = match node.parent.and_then(|p| tree.get(p)) {
                Some(parent) => parent.children.as_slice(),
                None => tree.roots(),
            };
            let index = siblings.iter().position(|c| *c == id).unwrap_or(0);
            places.push(Patch::Place {
                id,
                parent: node.parent,
                index,
            });
            self.shown.insert(id, next);
        }
        out.extend(places);
        log::trace!("patch: {} edits for {} nodes", out.len(), self.shown.len());
        out
    }
}
