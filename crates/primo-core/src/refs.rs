//! Node handles and composable refs.
//!
//! A host assigns every mounted element a [`NodeId`]. Consumers observe that
//! id through a [`Ref`]: either an object ref ([`NodeRef`], a shared cell) or
//! a callback. When a primitive and the consumer both hold a ref to the same
//! element, [`compose_refs`] makes both receive the node.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<NodeId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> Option<NodeId> {
        self.0.get()
    }
    pub fn set(&self, node: Option<NodeId>) {
        self.0.set(node);
    }
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}

#[derive(Clone)]
pub enum Ref {
    Object(NodeRef),
    Callback(Rc<dyn Fn(Option<NodeId>)>),
    Composed(Rc<[Ref]>),
}

impl Ref {
    pub fn callback(f: impl Fn(Option<NodeId>) + 'static) -> Self {
        Ref::Callback(Rc::new(f))
    }

    /// Delivers the mounted node (or `None` on unmount) to every target.
    pub fn attach(&self, node: Option<NodeId>) {
        match self {
            Ref::Object(r) => r.set(node),
            Ref::Callback(f) => f(node),
            Ref::Composed(all) => {
                for r in all.iter() {
                    r.attach(node);
                }
            }
        }
    }
}

impl From<NodeRef> for Ref {
    fn from(r: NodeRef) -> Self {
        Ref::Object(r)
    }
}

impl From<&NodeRef> for Ref {
    fn from(r: &NodeRef) -> Self {
        Ref::Object(r.clone())
    }
}

impl fmt::Debug for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ref::Object(r) => r.fmt(f),
            Ref::Callback(_) => f.write_str("Ref(<callback>)"),
            Ref::Composed(all) => f.debug_list().entries(all.iter()).finish(),
        }
    }
}

pub fn compose_refs(first: Option<Ref>, second: Option<Ref>) -> Option<Ref> {
    match (first, second) {
        (Some(a), Some(b)) => Some(Ref::Composed(Rc::from(vec![a, b]))),
        (a, None) => a,
        (None, b) => b,
    }
}
