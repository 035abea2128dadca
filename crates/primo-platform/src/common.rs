//! Pieces shared by both host targets.
use primo_core::{
    AlignItems, FlexDirection, InputEvent, Key, Length, Modifiers, PointerButton, PointerEvent,
    PointerEventKind, PointerId, PointerKind, Vec2,
};

pub(crate) fn pe_mouse(event: PointerEventKind, pos: Vec2, mods: Modifiers) -> PointerEvent {
    PointerEvent {
        id: PointerId(0),
        kind: PointerKind::Mouse,
        event,
        position: pos,
        modifiers: mods,
    }
}

pub(crate) fn pe_touch(event: PointerEventKind, pos: Vec2, mods: Modifiers) -> PointerEvent {
    PointerEvent {
        id: PointerId(0),
        kind: PointerKind::Touch,
        event,
        position: pos,
        modifiers: mods,
    }
}

/// Primary-button down then up at `pos`.
pub(crate) fn tap(kind: PointerKind, pos: Vec2) -> [InputEvent; 2] {
    let make = match kind {
        PointerKind::Touch => pe_touch,
        _ => pe_mouse,
    };
    [
        InputEvent::Pointer(make(
            PointerEventKind::Down(PointerButton::Primary),
            pos,
            Modifiers::empty(),
        )),
        InputEvent::Pointer(make(
            PointerEventKind::Up(PointerButton::Primary),
            pos,
            Modifiers::empty(),
        )),
    ]
}

pub(crate) fn flex_direction_name(d: FlexDirection) -> &'static str {
    match d {
        FlexDirection::Row => "row",
        FlexDirection::Column => "column",
        FlexDirection::RowReverse => "row-reverse",
        FlexDirection::ColumnReverse => "column-reverse",
    }
}

pub(crate) fn align_items_name(a: AlignItems) -> &'static str {
    match a {
        AlignItems::Start => "start",
        AlignItems::End => "end",
        AlignItems::FlexStart => "flex-start",
        AlignItems::FlexEnd => "flex-end",
        AlignItems::Center => "center",
        AlignItems::Baseline => "baseline",
        AlignItems::Stretch => "stretch",
    }
}

/// Native style values: bare numbers for points, `%` suffix otherwise.
pub(crate) fn length_native(l: Length) -> String {
    match l {
        Length::Px(v) => format!("{v}"),
        Length::Percent(v) => format!("{v}%"),
    }
}

pub(crate) fn length_css(l: Length) -> String {
    match l {
        Length::Px(v) => format!("{v}px"),
        Length::Percent(v) => format!("{v}%"),
    }
}

/// Maps a DOM `KeyboardEvent.key` value.
pub fn key_from_dom(key: &str) -> Option<Key> {
    Some(match key {
        "Enter" => Key::Enter,
        "Tab" => Key::Tab,
        "Escape" | "Esc" => Key::Escape,
        " " | "Spacebar" => Key::Space,
        "ArrowLeft" => Key::ArrowLeft,
        "ArrowRight" => Key::ArrowRight,
        "ArrowUp" => Key::ArrowUp,
        "ArrowDown" => Key::ArrowDown,
        "Home" => Key::Home,
        "End" => Key::End,
        "PageUp" => Key::PageUp,
        "PageDown" => Key::PageDown,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Character(c),
                _ => return None,
            }
        }
    })
}
