//! Keyboard focus movement among the items of a toolbar, group or menu.

use std::cell::{Cell, RefCell};

use crate::{Key, NodeId, NodeRef, Orientation, TextDirection};

thread_local! {
    static PENDING_FOCUS: Cell<Option<NodeId>> = const { Cell::new(None) };
}

/// Asks the host to move focus to `node` once the current event is handled.
pub fn request_focus(node: NodeId) {
    PENDING_FOCUS.with(|p| p.set(Some(node)));
}

pub fn take_focus_request() -> Option<NodeId> {
    PENDING_FOCUS.with(|p| p.take())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMove {
    First,
    Last,
    Next,
    Prev,
}

/// Maps a key to a movement. Only the arrows along `orientation` move;
/// horizontal arrows swap under right-to-left text.
pub fn focus_move(key: &Key, orientation: Orientation, dir: TextDirection) -> Option<FocusMove> {
    let forward = dir == TextDirection::Ltr;
    match (key, orientation) {
        (Key::Home | Key::PageUp, _) => Some(FocusMove::First),
        (Key::End | Key::PageDown, _) => Some(FocusMove::Last),
        (Key::ArrowRight, Orientation::Horizontal) => {
            Some(if forward { FocusMove::Next } else { FocusMove::Prev })
        }
        (Key::ArrowLeft, Orientation::Horizontal) => {
            Some(if forward { FocusMove::Prev } else { FocusMove::Next })
        }
        (Key::ArrowDown, Orientation::Vertical) => Some(FocusMove::Next),
        (Key::ArrowUp, Orientation::Vertical) => Some(FocusMove::Prev),
        _ => None,
    }
}

/// Index of the next focusable entry, skipping disabled ones. Wraps around
/// the ends only when `looping`.
pub fn next_focus(enabled: &[bool], from: usize, mv: FocusMove, looping: bool) -> Option<usize> {
    let n = enabled.len();
    let is_on = |i: &usize| enabled[*i];
    match mv {
        FocusMove::First => (0..n).find(is_on),
        FocusMove::Last => (0..n).rev().find(is_on),
        FocusMove::Next => {
            let ahead = (from + 1..n).find(is_on);
            if ahead.is_some() || !looping {
                return ahead;
            }
            (0..from.min(n)).find(is_on)
        }
        FocusMove::Prev => {
            let behind = (0..from.min(n)).rev().find(is_on);
            if behind.is_some() || !looping {
                return behind;
            }
            (from + 1..n).rev().find(is_on)
        }
    }
}

#[derive(Debug)]
struct Entry {
    node: NodeRef,
    disabled: bool,
}

/// One render's collection of focusable items. Items register in render
/// order and learn their node through the returned ref once mounted.
#[derive(Debug)]
pub struct RovingFocus {
    pub orientation: Orientation,
    pub dir: TextDirection,
    pub looping: bool,
    entries: RefCell<Vec<Entry>>,
}

impl RovingFocus {
    pub fn new(orientation: Orientation, dir: TextDirection, looping: bool) -> Self {
        Self {
            orientation,
            dir,
            looping,
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn register(&self, disabled: bool) -> (usize, NodeRef) {
        let node = NodeRef::new();
        let mut entries = self.entries.borrow_mut();
        entries.push(Entry {
            node: node.clone(),
            disabled,
        });
        (entries.len() - 1, node)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves focus away from entry `from` if `key` asks for it. Returns
    /// whether a focus request was made.
    pub fn handle_key(&self, from: usize, key: &Key) -> bool {
        let Some(mv) = focus_move(key, self.orientation, self.dir) else {
            return false;
        };
        let entries = self.entries.borrow();
        let enabled: Vec<bool> = entries.iter().map(|e| !e.disabled).collect();
        let Some(to) = next_focus(&enabled, from, mv, self.looping) else {
            return false;
        };
        match entries[to].node.get() {
            Some(node) => {
                log::debug!("roving focus {from} -> {to} ({node})");
                request_focus(node);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_only_when_looping() {
        let on = [true, true, true];
        assert_eq!(next_focus(&on, 2, FocusMove::Next, false), None);
        assert_eq!(next_focus(&on, 2, FocusMove::Next, true), Some(0));
        assert_eq!(next_focus(&on, 0, FocusMove::Prev, false), None);
        assert_eq!(next_focus(&on, 0, FocusMove::Prev, true), Some(2));
    }

    #[test]
    fn skips_disabled_entries() {
        let on = [true, false, true, false];
        assert_eq!(next_focus(&on, 0, FocusMove::Next, false), Some(2));
        assert_eq!(next_focus(&on, 2, FocusMove::Next, true), Some(0));
        assert_eq!(next_focus(&on, 0, FocusMove::Last, false), Some(2));
        assert_eq!(next_focus(&[false, false], 0, FocusMove::First, true), None);
    }

    #[test]
    fn arrows_follow_orientation_and_direction() {
        use Orientation::*;
        use TextDirection::*;
        assert_eq!(focus_move(&Key::ArrowRight, Horizontal, Ltr), Some(FocusMove::Next));
        assert_eq!(focus_move(&Key::ArrowRight, Horizontal, Rtl), Some(FocusMove::Prev));
        assert_eq!(focus_move(&Key::ArrowDown, Horizontal, Ltr), None);
        assert_eq!(focus_move(&Key::ArrowDown, Vertical, Rtl), Some(FocusMove::Next));
        assert_eq!(focus_move(&Key::End, Vertical, Ltr), Some(FocusMove::Last));
    }

    #[test]
    fn handle_key_requests_focus_on_mounted_node() {
        let roving = RovingFocus::new(Orientation::Horizontal, TextDirection::Ltr, true);
        let (_, first) = roving.register(false);
        let (_, _skipped) = roving.register(true);
        let (_, third) = roving.register(false);
        first.set(Some(NodeId(10)));
        third.set(Some(NodeId(30)));

        assert!(roving.handle_key(0, &Key::ArrowRight));
        assert_eq!(take_focus_request(), Some(NodeId(30)));
        assert!(roving.handle_key(2, &Key::ArrowRight));
        assert_eq!(take_focus_request(), Some(NodeId(10)));
        assert!(!roving.handle_key(0, &Key::ArrowUp));
        assert_eq!(take_focus_request(), None);
    }
}
