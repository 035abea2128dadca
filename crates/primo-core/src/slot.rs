//! Polymorphic render target.
//!
//! Every primitive either *is* a host element or merges its behaviour onto
//! the single element the consumer hands it (`as_child`). The decision is a
//! plain value, [`RenderAs`], validated when it is built and resolved by one
//! pure merge, [`PropSet::merge`].
//!
//! ```rust
//! use primo_core::*;
//!
//! let consumer_link = Element::pressable().class("underline").on_press(|_| {});
//! let merged = render(
//!     "ToolbarLink",
//!     HostKind::Pressable,
//!     SlotProps::default().as_child(true),
//!     PropSet::new().semantics(Semantics::new(Role::Link)),
//!     vec![consumer_link],
//! )
//! .unwrap();
//! assert_eq!(merged.props.semantics.role, Some(Role::Link));
//! assert_eq!(merged.props.class.join(), "underline");
//! ```

use std::borrow::Cow;
use std::rc::Rc;

use crate::{
    Element, HandlerOrder, HostKind, KeyEvent, PressEvent, PrimitiveError, PropSet, Ref,
    Semantics, Style, compose_refs,
};

/// The part of every primitive's props that concerns rendering: the
/// `as_child` flag, the merge order for handlers and the consumer's own props.
#[derive(Clone, Debug, Default)]
pub struct SlotProps {
    pub as_child: bool,
    pub handler_order: HandlerOrder,
    pub props: PropSet,
}

impl SlotProps {
    pub fn as_child(mut self, v: bool) -> Self {
        self.as_child = v;
        self
    }
}

/// Capability shared by every primitive's props that renders a view-like
/// element.
pub trait SlottableView: Sized {
    fn slot_mut(&mut self) -> &mut SlotProps;

    fn as_child(mut self, v: bool) -> Self {
        self.slot_mut().as_child = v;
        self
    }
    fn handler_order(mut self, order: HandlerOrder) -> Self {
        self.slot_mut().handler_order = order;
        self
    }
    fn style(mut self, s: Style) -> Self {
        self.slot_mut().props.style.push(s);
        self
    }
    fn class(mut self, c: impl Into<Cow<'static, str>>) -> Self {
        self.slot_mut().props.class.push(c);
        self
    }
    fn node_ref(mut self, r: impl Into<Ref>) -> Self {
        let slot = self.slot_mut();
        slot.props.node_ref = compose_refs(slot.props.node_ref.take(), Some(r.into()));
        self
    }
    fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        let slot = self.slot_mut();
        slot.props.attrs.insert(name.into(), value.to_string());
        self
    }
    fn semantics(mut self, s: Semantics) -> Self {
        let slot = self.slot_mut();
        slot.props.semantics = std::mem::take(&mut slot.props.semantics).merged(&s);
        self
    }
    fn on_key_down(mut self, f: impl Fn(&KeyEvent) + 'static) -> Self {
        self.slot_mut().props.handlers.on_key_down = Some(Rc::new(f));
        self
    }
}

/// Capability of props that render a pressable element.
pub trait SlottablePressable: SlottableView {
    fn on_press(mut self, f: impl Fn(&PressEvent) + 'static) -> Self {
        self.slot_mut().props.handlers.on_press = Some(Rc::new(f));
        self
    }
    fn on_press_in(mut self, f: impl Fn(&PressEvent) + 'static) -> Self {
        self.slot_mut().props.handlers.on_press_in = Some(Rc::new(f));
        self
    }
    fn on_press_out(mut self, f: impl Fn(&PressEvent) + 'static) -> Self {
        self.slot_mut().props.handlers.on_press_out = Some(Rc::new(f));
        self
    }
}

impl SlottableView for SlotProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        self
    }
}
impl SlottablePressable for SlotProps {}

/// Where a primitive's behavioural props end up.
#[derive(Debug)]
pub enum RenderAs {
    /// On the primitive's own host element, wrapping `children`.
    Default {
        props: PropSet,
        children: Vec<Element>,
    },
    /// Onto the consumer's element.
    Merged { props: PropSet, child: Box<Element> },
}

impl RenderAs {
    /// With `as_child`, `children` must hold exactly one element. A fragment
    /// around a single element counts as that element.
    pub fn new(
        component: &'static str,
        as_child: bool,
        props: PropSet,
        children: Vec<Element>,
    ) -> Result<Self, PrimitiveError> {
        if !as_child {
            return Ok(RenderAs::Default { props, children });
        }
        let mut children = children;
        loop {
            match children.len() {
                1 => {}
                found => return Err(PrimitiveError::SlotArity { component, found }),
            }
            let Some(only) = children.pop() else {
                return Err(PrimitiveError::SlotArity {
                    component,
                    found: 0,
                });
            };
            if only.kind == HostKind::Fragment {
                children = only.children;
                continue;
            }
            return Ok(RenderAs::Merged {
                props,
                child: Box::new(only),
            });
        }
    }

    pub fn resolve(self, default_kind: HostKind, order: HandlerOrder) -> Element {
        match self {
            RenderAs::Default { props, children } => Element::new(default_kind)
                .props(props)
                .with_children(children),
            RenderAs::Merged { props, child } => {
                let Element {
                    kind,
                    name,
                    props: child_props,
                    children,
                } = *child;
                Element {
                    kind,
                    name,
                    props: PropSet::merge(props, child_props, order),
                    children,
                }
            }
        }
    }
}

/// Builds a primitive's element: `internal` props merged with the consumer's
/// props from `slot`, then placed according to `slot.as_child`.
pub fn render(
    component: &'static str,
    kind: HostKind,
    slot: SlotProps,
    internal: PropSet,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let SlotProps {
        as_child,
        handler_order,
        props: consumer,
    } = slot;
    let behavioral = PropSet::merge(internal, consumer, HandlerOrder::InternalFirst);
    let target = RenderAs::new(component, as_child, behavioral, children)?;
    if matches!(target, RenderAs::Merged { .. }) {
        log::trace!("{component}: merging onto consumer element");
    }
    Ok(target.resolve(kind, handler_order).named(component))
}
