use std::borrow::Cow;

use crate::{KeyEvent, PressEvent, PropSet, Ref, Semantics, Style};

/// What kind of host element an [`Element`] asks for. Hosts decide the
/// concrete tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostKind {
    View,
    Pressable,
    Text(String),
    /// No host node of its own; children are spliced into the parent.
    Fragment,
}

/// Platform-neutral render description.
#[derive(Clone, Debug)]
pub struct Element {
    pub kind: HostKind,
    /// Display name of the primitive that produced it, for lookups and logs.
    pub name: Option<&'static str>,
    pub props: PropSet,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: HostKind) -> Self {
        Element {
            kind,
            name: None,
            props: PropSet::default(),
            children: vec![],
        }
    }

    pub fn view() -> Self {
        Self::new(HostKind::View)
    }

    pub fn pressable() -> Self {
        Self::new(HostKind::Pressable)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(HostKind::Text(text.into()))
    }

    pub fn fragment(children: Vec<Element>) -> Self {
        Self::new(HostKind::Fragment).with_children(children)
    }

    /// Renders nothing.
    pub fn empty() -> Self {
        Self::fragment(vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.kind == HostKind::Fragment && self.children.is_empty()
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn props(mut self, props: PropSet) -> Self {
        self.props = props;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, kids: Vec<Element>) -> Self {
        self.children = kids;
        self
    }

    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.props = self.props.attr(name, value);
        self
    }

    pub fn style(mut self, s: Style) -> Self {
        self.props = self.props.style(s);
        self
    }

    pub fn class(mut self, c: impl Into<Cow<'static, str>>) -> Self {
        self.props = self.props.class(c);
        self
    }

    pub fn node_ref(mut self, r: impl Into<Ref>) -> Self {
        self.props = self.props.node_ref(r);
        self
    }

    pub fn semantics(mut self, s: Semantics) -> Self {
        self.props = self.props.semantics(s);
        self
    }

    pub fn on_press(mut self, f: impl Fn(&PressEvent) + 'static) -> Self {
        self.props = self.props.on_press(f);
        self
    }

    pub fn on_key_down(mut self, f: impl Fn(&KeyEvent) + 'static) -> Self {
        self.props = self.props.on_key_down(f);
        self
    }

    /// Depth-first search by display name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}
