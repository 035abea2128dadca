use std::rc::Rc;

use crate::{
    ContextValue, ItemValue, PressEvent, RovingFocus, Selection, SelectionMode, SelectionValue,
};

/// Shared state of one toggle group, rebuilt by the root on every render.
#[derive(Debug)]
pub struct GroupState {
    pub selection: Selection,
    pub disabled: bool,
    /// Keyboard focus movement among the group's items, when enabled.
    pub roving: Option<Rc<RovingFocus>>,
}

impl ContextValue for GroupState {
    const PROVIDER: &'static str = "ToggleGroup";
}

/// Render-time description of one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDescriptor {
    pub value: ItemValue,
    pub disabled: bool,
}

impl ItemDescriptor {
    pub fn new(value: impl Into<ItemValue>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }
}

/// Outcome of activating an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Group or item disabled; nothing was reported.
    Suppressed,
    Changed(SelectionValue),
}

impl GroupState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            disabled: false,
            roving: None,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn is_pressed(&self, item: &str) -> bool {
        self.selection.is_selected(item)
    }

    pub fn is_item_disabled(&self, item: &ItemDescriptor) -> bool {
        self.disabled || item.disabled
    }

    /// Selection half of an item press: reduce and report, unless disabled.
    pub fn activate(&self, item: &ItemDescriptor) -> Activation {
        if self.is_item_disabled(item) {
            log::warn!("toggle item {:?} is disabled, press ignored", item.value);
            return Activation::Suppressed;
        }
        let next = self.selection.toggle(&item.value);
        log::debug!("toggle item {:?} -> {:?}", item.value, next);
        Activation::Changed(next)
    }

    /// Full press handling for an item: selection logic first, then the
    /// consumer's own handler with the original event. A suppressed press
    /// runs neither.
    pub fn press_item(
        &self,
        item: &ItemDescriptor,
        event: &PressEvent,
        consumer: Option<&dyn Fn(&PressEvent)>,
    ) -> Activation {
        let outcome = self.activate(item);
        if outcome != Activation::Suppressed
            && let Some(on_press) = consumer
        {
            on_press(event);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeId, PressSource, Vec2};
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    fn press() -> PressEvent {
        PressEvent {
            target: NodeId(1),
            source: PressSource::Keyboard,
            position: Vec2::ZERO,
        }
    }

    #[test]
    fn disabled_group_never_reports() {
        let calls = Rc::new(RefCell::new(0));
        let single = {
            let calls = calls.clone();
            Selection::single(Some("a".into()), move |_| *calls.borrow_mut() += 1)
        };
        let multiple = {
            let calls = calls.clone();
            Selection::multiple(["a", "b"], move |_| *calls.borrow_mut() += 1)
        };
        for selection in [single, multiple] {
            let mut state = GroupState::new(selection);
            state.disabled = true;
            for item in ["a", "b", "c"] {
                let outcome = state.press_item(&ItemDescriptor::new(item), &press(), None);
                assert_eq!(outcome, Activation::Suppressed);
            }
        }
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn disabled_item_skips_consumer_handler_too() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let state = {
            let log = log.clone();
            GroupState::new(Selection::single(None, move |v| {
                log.borrow_mut().push(format!("change {v:?}"))
            }))
        };
        let consumer = {
            let log = log.clone();
            move |_: &PressEvent| log.borrow_mut().push("consumer".to_string())
        };

        let mut item = ItemDescriptor::new("a");
        item.disabled = true;
        state.press_item(&item, &press(), Some(&consumer));
        assert!(log.borrow().is_empty());

        item.disabled = false;
        state.press_item(&item, &press(), Some(&consumer));
        assert_eq!(
            *log.borrow(),
            vec!["change Some(\"a\")".to_string(), "consumer".to_string()]
        );
    }

    #[test]
    fn multiple_mode_reports_sets() {
        let seen = Rc::new(RefCell::new(None));
        let state = {
            let seen = seen.clone();
            GroupState::new(Selection::multiple(["a"], move |v| *seen.borrow_mut() = Some(v)))
        };
        let outcome = state.activate(&ItemDescriptor::new("b"));
        let expected: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(outcome, Activation::Changed(SelectionValue::Multiple(expected.clone())));
        assert_eq!(*seen.borrow(), Some(expected));
    }
}
