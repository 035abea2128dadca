//! Touch/native view tree: `View`, `Pressable` and `Text` nodes with
//! accessibility props.

use std::collections::BTreeMap;

use primo_core::{
    HostKind, InputEvent, PointerEventKind, PointerKind, PropSet, Semantics, Style, Vec2,
};
use serde_json::json;
use smallvec::smallvec;

use crate::common::{align_items_name, flex_direction_name, length_native, tap};
use crate::{Gesture, Gestures, HostPlatform, Target};

#[derive(Clone, Copy, Debug, Default)]
pub struct NativePlatform;

impl HostPlatform for NativePlatform {
    fn target(&self) -> Target {
        Target::Native
    }

    fn tag(&self, kind: &HostKind, _semantics: &Semantics) -> &'static str {
        match kind {
            HostKind::Pressable => "Pressable",
            HostKind::Text(_) => "Text",
            HostKind::View | HostKind::Fragment => "View",
        }
    }

    fn attributes(&self, tag: &str, props: &PropSet) -> BTreeMap<String, String> {
        let mut out: BTreeMap<String, String> = props
            .attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let sem = &props.semantics;

        if let Some(role) = sem.role {
            out.insert("accessibilityRole".into(), role.native().into());
        }
        if let Some(label) = &sem.label {
            out.insert("accessibilityLabel".into(), label.clone());
        }

        let mut state = serde_json::Map::new();
        if let Some(v) = sem.disabled {
            state.insert("disabled".into(), json!(v));
        }
        // Toggle buttons report pressed as selected.
        if let Some(v) = sem.pressed {
            state.insert("selected".into(), json!(v));
        }
        if let Some(v) = sem.checked {
            state.insert("checked".into(), json!(v));
        }
        if let Some(v) = sem.expanded {
            state.insert("expanded".into(), json!(v));
        }
        if !state.is_empty() {
            out.insert(
                "accessibilityState".into(),
                serde_json::Value::Object(state).to_string(),
            );
        }
        if let Some(range) = sem.range {
            let value = json!({ "min": range.min, "max": range.max, "now": range.now });
            out.insert("accessibilityValue".into(), value.to_string());
        }

        if tag == "Pressable" && sem.disabled == Some(true) {
            out.insert("disabled".into(), "true".into());
        }
        if !props.class.is_empty() {
            out.insert("className".into(), props.class.join());
        }
        out
    }

    fn style(&self, style: &Style) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        let mut put = |k: &str, v: String| {
            out.insert(k.to_string(), v);
        };
        if let Some(v) = style.width {
            put("width", length_native(v));
        }
        if let Some(v) = style.height {
            put("height", length_native(v));
        }
        if let Some(v) = style.left {
            put("left", length_native(v));
        }
        if let Some(v) = style.right {
            put("right", length_native(v));
        }
        if let Some(v) = style.top {
            put("top", length_native(v));
        }
        if let Some(v) = style.bottom {
            put("bottom", length_native(v));
        }
        if let Some(v) = style.flex_direction {
            put("flexDirection", flex_direction_name(v).into());
        }
        if let Some(v) = style.align_items {
            put("alignItems", align_items_name(v).into());
        }
        if let Some(v) = style.gap {
            put("gap", format!("{v}"));
        }
        if let Some(v) = style.padding {
            put("padding", format!("{v}"));
        }
        if let Some(c) = style.background {
            put("backgroundColor", c.to_css());
        }
        if let Some(c) = style.color {
            put("color", c.to_css());
        }
        if let Some(v) = style.border_radius {
            put("borderRadius", format!("{v}"));
        }
        if let Some(v) = style.opacity {
            put("opacity", format!("{v}"));
        }
        out
    }

    fn capture(&self, event: &InputEvent, _tag: &str, pressed: bool) -> Gestures {
        match event {
            InputEvent::Pointer(pe) => match pe.event {
                PointerEventKind::Down(_) => smallvec![Gesture::PressIn],
                PointerEventKind::Up(_) if pressed => {
                    smallvec![Gesture::PressOut, Gesture::Press]
                }
                PointerEventKind::Cancel if pressed => smallvec![Gesture::PressOut],
                _ => Gestures::new(),
            },
            InputEvent::KeyDown(k) => smallvec![Gesture::KeyDown(k.clone())],
            // No DOM click and no keyboard activation on native views.
            InputEvent::Click { .. } | InputEvent::KeyUp(_) => Gestures::new(),
        }
    }

    fn press_sequence(&self, position: Vec2) -> Vec<InputEvent> {
        tap(PointerKind::Touch, position).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primo_core::{Key, KeyEvent, Role};

    #[test]
    fn test_semantics_become_accessibility_props() {
        let props = PropSet::new()
            .semantics(Semantics::new(Role::Button).pressed(true).disabled(true))
            .class("rounded")
            .attr("data-state", "on");
        let attrs = NativePlatform.attributes("Pressable", &props);
        assert_eq!(attrs["accessibilityRole"], "button");
        assert_eq!(attrs["data-state"], "on");
        assert_eq!(attrs["className"], "rounded");
        assert_eq!(attrs["disabled"], "true");
        let state: serde_json::Value = serde_json::from_str(&attrs["accessibilityState"]).unwrap();
        assert_eq!(state, json!({ "disabled": true, "selected": true }));
    }

    #[test]
    fn test_release_activates_only_after_press_on_same_node() {
        let [down, up] = tap(PointerKind::Touch, Vec2::ZERO);
        assert!(matches!(
            NativePlatform.capture(&down, "Pressable", false).as_slice(),
            [Gesture::PressIn]
        ));
        assert!(matches!(
            NativePlatform.capture(&up, "Pressable", true).as_slice(),
            [Gesture::PressOut, Gesture::Press]
        ));
        assert!(NativePlatform.capture(&up, "Pressable", false).is_empty());
        let click = InputEvent::Click { position: Vec2::ZERO };
        assert!(NativePlatform.capture(&click, "Pressable", true).is_empty());
        let enter = InputEvent::KeyUp(KeyEvent::new(Key::Enter));
        assert!(NativePlatform.capture(&enter, "Pressable", false).is_empty());
    }
}
