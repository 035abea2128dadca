use std::borrow::Cow;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{
    ClassList, HandlerOrder, Handlers, KeyEvent, PressEvent, Ref, Semantics, Style, StyleList,
    compose_refs,
};

/// Everything a primitive can put on an element: plain attributes
/// (`data-*` and friends), handlers, style fragments, class names, a ref and
/// semantics.
#[derive(Clone, Debug, Default)]
pub struct PropSet {
    pub attrs: BTreeMap<Cow<'static, str>, String>,
    pub handlers: Handlers,
    pub style: StyleList,
    pub class: ClassList,
    pub node_ref: Option<Ref>,
    pub semantics: Semantics,
}

impl PropSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.attrs.insert(name.into(), value.to_string());
        self
    }

    /// Sets `name` only when `on` holds, as HTML boolean-ish `data-*` flags do.
    pub fn flag(self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
        if on { self.attr(name, "") } else { self }
    }

    pub fn style(mut self, s: Style) -> Self {
        self.style.push(s);
        self
    }

    pub fn class(mut self, c: impl Into<Cow<'static, str>>) -> Self {
        self.class.push(c);
        self
    }

    pub fn node_ref(mut self, r: impl Into<Ref>) -> Self {
        self.node_ref = compose_refs(self.node_ref.take(), Some(r.into()));
        self
    }

    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = self.semantics.merged(&s);
        self
    }

    pub fn on_press(mut self, f: impl Fn(&PressEvent) + 'static) -> Self {
        self.handlers.on_press = Some(Rc::new(f));
        self
    }

    pub fn on_press_in(mut self, f: impl Fn(&PressEvent) + 'static) -> Self {
        self.handlers.on_press_in = Some(Rc::new(f));
        self
    }

    pub fn on_press_out(mut self, f: impl Fn(&PressEvent) + 'static) -> Self {
        self.handlers.on_press_out = Some(Rc::new(f));
        self
    }

    pub fn on_key_down(mut self, f: impl Fn(&KeyEvent) + 'static) -> Self {
        self.handlers.on_key_down = Some(Rc::new(f));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Structural merge of `ours` (the primitive's behaviour) with `theirs`
    /// (the consumer's element or props). Nothing is mutated in place: both
    /// inputs are consumed and a new set is returned.
    ///
    /// - handlers run in both sets, ordered by `order`;
    /// - refs compose, both receive the node;
    /// - style fragments and class names concatenate, ours first;
    /// - plain attributes and semantics: `theirs` wins per key.
    pub fn merge(ours: PropSet, theirs: PropSet, order: HandlerOrder) -> PropSet {
        let mut attrs = ours.attrs;
        attrs.extend(theirs.attrs);

        let mut style = ours.style;
        style.extend(theirs.style);

        let mut class = ours.class;
        class.extend(theirs.class);

        PropSet {
            attrs,
            handlers: Handlers::compose(ours.handlers, theirs.handlers, order),
            style,
            class,
            node_ref: compose_refs(ours.node_ref, theirs.node_ref),
            semantics: ours.semantics.merged(&theirs.semantics),
        }
    }
}
