//! Browser DOM: `div`/`button`/`span`/`a` nodes with ARIA attributes.

use std::collections::BTreeMap;

use primo_core::{
    HostKind, InputEvent, Key, PointerEventKind, PointerKind, PropSet, Role, Semantics, Style, Vec2,
};
use smallvec::smallvec;

use crate::common::{align_items_name, flex_direction_name, length_css, tap};
use crate::{Gesture, Gestures, HostPlatform, Target};

#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl HostPlatform for WebPlatform {
    fn target(&self) -> Target {
        Target::Web
    }

    fn tag(&self, kind: &HostKind, semantics: &Semantics) -> &'static str {
        match kind {
            HostKind::Pressable if semantics.role == Some(Role::Link) => "a",
            HostKind::Pressable => "button",
            HostKind::Text(_) => "span",
            HostKind::View | HostKind::Fragment => "div",
        }
    }

    fn attributes(&self, tag: &str, props: &PropSet) -> BTreeMap<String, String> {
        let mut out: BTreeMap<String, String> = props
            .attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let sem = &props.semantics;
        let mut aria = |k: &str, v: String| {
            out.insert(k.to_string(), v);
        };

        if let Some(role) = sem.role
            && role != Role::Text
        {
            aria("role", role.aria().into());
        }
        if let Some(label) = &sem.label {
            aria("aria-label", label.clone());
        }
        if sem.disabled == Some(true) {
            aria("aria-disabled", "true".into());
        }
        if let Some(v) = sem.pressed {
            aria("aria-pressed", v.to_string());
        }
        if let Some(v) = sem.checked {
            aria("aria-checked", v.to_string());
        }
        if let Some(v) = sem.expanded {
            aria("aria-expanded", v.to_string());
        }
        if sem.has_popup {
            aria("aria-haspopup", "menu".into());
        }
        if let Some(o) = sem.orientation {
            aria("aria-orientation", o.as_str().into());
        }
        if let Some(range) = sem.range {
            aria("aria-valuemin", range.min.to_string());
            aria("aria-valuemax", range.max.to_string());
            aria("aria-valuenow", range.now.to_string());
        }

        if tag == "button" {
            out.insert("type".into(), "button".into());
            if sem.disabled == Some(true) {
                out.insert("disabled".into(), String::new());
            }
        }
        if !props.class.is_empty() {
            out.insert("class".into(), props.class.join());
        }
        out
    }

    fn style(&self, style: &Style) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        let mut put = |k: &str, v: String| {
            out.insert(k.to_string(), v);
        };
        if let Some(v) = style.width {
            put("width", length_css(v));
        }
        if let Some(v) = style.height {
            put("height", length_css(v));
        }
        if let Some(v) = style.left {
            put("left", length_css(v));
        }
        if let Some(v) = style.right {
            put("right", length_css(v));
        }
        if let Some(v) = style.top {
            put("top", length_css(v));
        }
        if let Some(v) = style.bottom {
            put("bottom", length_css(v));
        }
        if let Some(v) = style.flex_direction {
            put("display", "flex".into());
            put("flex-direction", flex_direction_name(v).into());
        }
        if let Some(v) = style.align_items {
            put("align-items", align_items_name(v).into());
        }
        if let Some(v) = style.gap {
            put("gap", format!("{v}px"));
        }
        if let Some(v) = style.padding {
            put("padding", format!("{v}px"));
        }
        if let Some(c) = style.background {
            put("background-color", c.to_css());
        }
        if let Some(c) = style.color {
            put("color", c.to_css());
        }
        if let Some(v) = style.border_radius {
            put("border-radius", format!("{v}px"));
        }
        if let Some(v) = style.opacity {
            put("opacity", format!("{v}"));
        }
        out
    }

    fn capture(&self, event: &InputEvent, tag: &str, pressed: bool) -> Gestures {
        match event {
            InputEvent::Pointer(pe) => match pe.event {
                PointerEventKind::Down(_) => smallvec![Gesture::PressIn],
                PointerEventKind::Up(_) | PointerEventKind::Cancel if pressed => {
                    smallvec![Gesture::PressOut]
                }
                _ => Gestures::new(),
            },
            InputEvent::Click { .. } => smallvec![Gesture::Press],
            InputEvent::KeyDown(k) => smallvec![Gesture::KeyDown(k.clone())],
            InputEvent::KeyUp(k) => {
                if activates(tag, &k.key) {
                    smallvec![Gesture::Press]
                } else {
                    Gestures::new()
                }
            }
        }
    }

    fn press_sequence(&self, position: Vec2) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = tap(PointerKind::Mouse, position).into();
        events.push(InputEvent::Click { position });
        events
    }
}

/// Whether releasing `key` presses a `tag` element: Enter or Space on a
/// button, Enter on a link.
pub fn activates(tag: &str, key: &Key) -> bool {
    match tag {
        "button" => key.is_activation(),
        "a" => *key == Key::Enter,
        _ => false,
    }
}
