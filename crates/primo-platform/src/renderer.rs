//! Mounting and input routing, shared by both targets.

use std::collections::HashMap;

use primo_core::{
    Element, HostKind, InputEvent, Key, KeyEvent, NodeId, PointerKind, PressEvent, PressSource,
    PrimitiveError, Style, Vec2, take_focus_request,
};

use crate::tree::{HostNode, MountedTree};
use crate::{Gesture, HostPlatform};

/// Realizes element descriptions on one platform and feeds raw input back
/// into their handlers.
///
/// Node ids are positional: a node keeps its id across renders while the
/// element at the same place in the tree keeps its tag, so focus and refs
/// survive a state change.
pub struct Renderer<P: HostPlatform> {
    platform: P,
    tree: MountedTree,
    ids: HashMap<Vec<usize>, (NodeId, &'static str)>,
    next_id: u64,
    /// Node the pointer went down on.
    capture: Option<NodeId>,
    focused: Option<NodeId>,
}

impl<P: HostPlatform> Renderer<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            tree: MountedTree::default(),
            ids: HashMap::new(),
            next_id: 1,
            capture: None,
            focused: None,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn tree(&self) -> &MountedTree {
        &self.tree
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn focus(&mut self, node: NodeId) {
        if self.tree.get(node).is_some() {
            self.focused = Some(node);
        }
    }

    /// Replaces the mounted tree with `root`. Refs of the previous tree are
    /// cleared before the new ones are attached.
    pub fn render(&mut self, root: Element) -> &MountedTree {
        for node in self.tree.nodes.values() {
            if let Some(r) = &node.node_ref {
                r.attach(None);
            }
        }

        let previous = std::mem::take(&mut self.ids);
        let mut mount = Mount {
            platform: &self.platform,
            previous,
            ids: HashMap::new(),
            next_id: &mut self.next_id,
            tree: MountedTree::default(),
        };
        let mut roots = Vec::new();
        mount.element(root, None, &mut vec![], &mut roots);
        let Mount { ids, mut tree, .. } = mount;
        tree.roots = roots;
        self.ids = ids;
        self.tree = tree;

        for node in self.tree.nodes.values() {
            if let Some(r) = &node.node_ref {
                r.attach(Some(node.id));
            }
        }
        if self.focused.is_some_and(|f| self.tree.get(f).is_none()) {
            self.focused = None;
        }
        if self.capture.is_some_and(|c| self.tree.get(c).is_none()) {
            self.capture = None;
        }
        log::debug!("mounted {} nodes on {:?}", self.tree.len(), self.platform.target());
        &self.tree
    }

    /// Builds and renders in one go; a failed build leaves the mounted tree
    /// untouched.
    pub fn render_with(
        &mut self,
        build: impl FnOnce() -> Result<Element, PrimitiveError>,
    ) -> Result<&MountedTree, PrimitiveError> {
        let root = build()?;
        Ok(self.render(root))
    }

    /// Delivers a raw event to `target`. The event goes to the nearest
    /// ancestor that handles it. Returns whether any handler ran.
    pub fn dispatch(&mut self, target: NodeId, event: InputEvent) -> bool {
        if self.tree.get(target).is_none() {
            log::warn!("dispatch to unknown node {target}");
            return false;
        }
        let receiver = match &event {
            InputEvent::KeyDown(_) => self.tree.closest(target, HostNode::is_focusable),
            _ => self.tree.closest(target, HostNode::handles_press),
        };

        if let InputEvent::Pointer(pe) = &event
            && matches!(pe.event, primo_core::PointerEventKind::Down(_))
            && let Some(f) = self.tree.closest(target, HostNode::is_focusable)
        {
            self.focused = Some(f);
        }

        let Some(receiver) = receiver else {
            return false;
        };
        let pressed = self.capture == Some(receiver);
        let gestures = {
            let Some(node) = self.tree.get(receiver) else {
                return false;
            };
            self.platform.capture(&event, node.tag, pressed)
        };

        if let InputEvent::Pointer(pe) = &event {
            use primo_core::PointerEventKind::*;
            match pe.event {
                Down(_) => self.capture = Some(receiver),
                Up(_) | Cancel => self.capture = None,
                Move => {}
            }
        }

        let (source, position) = match &event {
            InputEvent::Pointer(pe) => (PressSource::Pointer(pe.kind), pe.position),
            InputEvent::Click { position } => (PressSource::Pointer(PointerKind::Mouse), *position),
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => (PressSource::Keyboard, Vec2::ZERO),
        };
        let press = PressEvent {
            target,
            source,
            position,
        };

        let mut handled = false;
        for gesture in gestures {
            // Handlers are cloned out so they may run while the tree is borrowed elsewhere.
            let Some(handlers) = self.tree.get(receiver).map(|n| n.handlers.clone()) else {
                break;
            };
            match gesture {
                Gesture::PressIn => {
                    if let Some(h) = handlers.on_press_in {
                        h(&press);
                        handled = true;
                    }
                }
                Gesture::PressOut => {
                    if let Some(h) = handlers.on_press_out {
                        h(&press);
                        handled = true;
                    }
                }
                Gesture::Press => {
                    if let Some(h) = handlers.on_press {
                        log::debug!("press {receiver} ({:?})", press.source);
                        h(&press);
                        handled = true;
                    }
                }
                Gesture::KeyDown(k) => {
                    if let Some(h) = handlers.on_key_down {
                        h(&k);
                        handled = true;
                    }
                }
            }
        }

        if let Some(next) = take_focus_request() {
            self.focus(next);
        }
        handled
    }

    /// Presses `node` the way a user of this platform would.
    pub fn press(&mut self, node: NodeId) -> bool {
        let mut handled = false;
        for event in self.platform.press_sequence(Vec2::ZERO) {
            handled |= self.dispatch(node, event);
        }
        handled
    }

    /// Key down and up on the focused node.
    pub fn key(&mut self, key: Key) -> bool {
        let Some(focused) = self.focused else {
            log::debug!("key {key:?} with nothing focused");
            return false;
        };
        let down = self.dispatch(focused, InputEvent::KeyDown(KeyEvent::new(key.clone())));
        // Focus may have moved on key down; key up goes where it lands.
        let target = self.focused.unwrap_or(focused);
        let up = self.dispatch(target, InputEvent::KeyUp(KeyEvent::new(key)));
        down || up
    }
}

struct Mount<'a, P: HostPlatform> {
    platform: &'a P,
    previous: HashMap<Vec<usize>, (NodeId, &'static str)>,
    ids: HashMap<Vec<usize>, (NodeId, &'static str)>,
    next_id: &'a mut u64,
    tree: MountedTree,
}

impl<P: HostPlatform> Mount<'_, P> {
    fn id_for(&mut self, path: &[usize], tag: &'static str) -> NodeId {
        let id = match self.previous.get(path) {
            Some((id, old_tag)) if *old_tag == tag => *id,
            _ => {
                let id = NodeId(*self.next_id);
                *self.next_id += 1;
                id
            }
        };
        self.ids.insert(path.to_vec(), (id, tag));
        id
    }

    /// Mounts `el` under `parent`, pushing the ids of its top-level nodes to
    /// `out`. Fragments mount their children in place.
    fn element(
        &mut self,
        el: Element,
        parent: Option<NodeId>,
        path: &mut Vec<usize>,
        out: &mut Vec<NodeId>,
    ) {
        let Element {
            kind,
            name,
            props,
            children,
        } = el;

        if kind == HostKind::Fragment {
            for (i, child) in children.into_iter().enumerate() {
                path.push(i);
                self.element(child, parent, path, out);
                path.pop();
            }
            return;
        }

        let tag = self.platform.tag(&kind, &props.semantics);
        let id = self.id_for(path, tag);
        let text = match kind {
            HostKind::Text(t) => Some(t),
            _ => None,
        };
        let node = HostNode {
            id,
            parent,
            tag,
            name,
            attrs: self.platform.attributes(tag, &props),
            style: self.platform.style(&Style::flatten(&props.style)),
            text,
            children: Vec::new(),
            handlers: props.handlers,
            node_ref: props.node_ref,
        };
        self.tree.nodes.insert(id, node);
        out.push(id);

        let mut kids = Vec::new();
        for (i, child) in children.into_iter().enumerate() {
            path.push(i);
            self.element(child, Some(id), path, &mut kids);
            path.pop();
        }
        if let Some(node) = self.tree.nodes.get_mut(&id) {
            node.children = kids;
        }
    }
}
