//! Plain host elements for content inside primitives.

use primo_core::{Element, PressEvent};

pub fn Text(text: impl Into<String>) -> Element {
    Element::text(text)
}

pub fn View(children: Vec<Element>) -> Element {
    Element::view().with_children(children)
}

pub fn Pressable(on_press: impl Fn(&PressEvent) + 'static, children: Vec<Element>) -> Element {
    Element::pressable()
        .on_press(on_press)
        .with_children(children)
}
