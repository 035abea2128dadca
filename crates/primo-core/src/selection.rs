//! Selection reducers for grouped toggle controls.
//!
//! Pure functions: the next value depends only on the current value and the
//! toggled item. Callers report the result through their change callback.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

pub type ItemValue = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// Exclusive toggle: pressing the selected item clears the selection,
/// pressing any other item replaces it.
pub fn next_single<T: PartialEq + Clone>(current: Option<&T>, item: &T) -> Option<T> {
    match current {
        Some(c) if c == item => None,
        _ => Some(item.clone()),
    }
}

/// Independent toggle: removes `item` if present, inserts it otherwise.
pub fn next_multiple<T: Ord + Clone>(current: &BTreeSet<T>, item: &T) -> BTreeSet<T> {
    let mut next = current.clone();
    if !next.remove(item) {
        next.insert(item.clone());
    }
    next
}

/// A group's value. The variant carries the mode, so the shape of the value
/// always matches it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionValue {
    Single(Option<ItemValue>),
    Multiple(BTreeSet<ItemValue>),
}

impl SelectionValue {
    pub fn mode(&self) -> SelectionMode {
        match self {
            SelectionValue::Single(_) => SelectionMode::Single,
            SelectionValue::Multiple(_) => SelectionMode::Multiple,
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        match self {
            SelectionValue::Single(v) => v.as_deref() == Some(item),
            SelectionValue::Multiple(set) => set.contains(item),
        }
    }

    pub fn toggled(&self, item: &str) -> SelectionValue {
        let item = item.to_string();
        match self {
            SelectionValue::Single(v) => SelectionValue::Single(next_single(v.as_ref(), &item)),
            SelectionValue::Multiple(set) => SelectionValue::Multiple(next_multiple(set, &item)),
        }
    }
}

/// Controlled selection as handed to a group root: mode, current value and
/// the owner's change callback, typed per mode.
#[derive(Clone)]
pub enum Selection {
    Single {
        value: Option<ItemValue>,
        on_value_change: Rc<dyn Fn(Option<ItemValue>)>,
    },
    Multiple {
        value: BTreeSet<ItemValue>,
        on_value_change: Rc<dyn Fn(BTreeSet<ItemValue>)>,
    },
}

impl Selection {
    pub fn single(
        value: Option<ItemValue>,
        on_value_change: impl Fn(Option<ItemValue>) + 'static,
    ) -> Self {
        Selection::Single {
            value,
            on_value_change: Rc::new(on_value_change),
        }
    }

    pub fn multiple<I, V>(value: I, on_value_change: impl Fn(BTreeSet<ItemValue>) + 'static) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ItemValue>,
    {
        Selection::Multiple {
            value: value.into_iter().map(Into::into).collect(),
            on_value_change: Rc::new(on_value_change),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single { .. } => SelectionMode::Single,
            Selection::Multiple { .. } => SelectionMode::Multiple,
        }
    }

    pub fn value(&self) -> SelectionValue {
        match self {
            Selection::Single { value, .. } => SelectionValue::Single(value.clone()),
            Selection::Multiple { value, .. } => SelectionValue::Multiple(value.clone()),
        }
    }

    pub fn is_selected(&self, item: &str) -> bool {
        match self {
            Selection::Single { value, .. } => value.as_deref() == Some(item),
            Selection::Multiple { value, .. } => value.contains(item),
        }
    }

    /// Runs the reducer for `item` and reports the result to the owner.
    pub fn toggle(&self, item: &str) -> SelectionValue {
        let item = item.to_string();
        match self {
            Selection::Single {
                value,
                on_value_change,
            } => {
                let next = next_single(value.as_ref(), &item);
                on_value_change(next.clone());
                SelectionValue::Single(next)
            }
            Selection::Multiple {
                value,
                on_value_change,
            } => {
                let next = next_multiple(value, &item);
                on_value_change(next.clone());
                SelectionValue::Multiple(next)
            }
        }
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("value", &self.value())
            .field("on_value_change", &"<callback>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_toggle_is_an_involution() {
        let a = "a".to_string();
        assert_eq!(next_single(Some(&a), &a), None);
        assert_eq!(next_single(None, &a), Some(a.clone()));
        assert_eq!(next_single(next_single(None, &a).as_ref(), &a), None);
    }

    #[test]
    fn single_selection_replaces_never_merges() {
        for (a, b) in [("a", "b"), ("bold", "italic"), ("x", "")] {
            let (a, b) = (a.to_string(), b.to_string());
            assert_eq!(next_single(Some(&a), &b), Some(b.clone()));
        }
    }

    #[test]
    fn multiple_double_toggle_returns_to_start() {
        let starts = [set(&[]), set(&["a"]), set(&["b", "c"]), set(&["a", "b", "c"])];
        for s in &starts {
            for item in ["a", "b", "z"] {
                let item = item.to_string();
                assert_eq!(next_multiple(&next_multiple(s, &item), &item), *s);
            }
        }
    }

    #[test]
    fn multiple_adds_and_removes() {
        let a = "a".to_string();
        let b = "b".to_string();
        let s = next_multiple(&set(&[]), &a);
        assert_eq!(s, set(&["a"]));
        let s = next_multiple(&s, &b);
        assert_eq!(s, set(&["a", "b"]));
        assert_eq!(next_multiple(&s, &a), set(&["b"]));
    }

    #[test]
    fn selection_value_toggle_keeps_its_shape() {
        let single = SelectionValue::Single(Some("a".into()));
        assert_eq!(single.toggled("a"), SelectionValue::Single(None));
        assert_eq!(single.toggled("b").mode(), SelectionMode::Single);

        let multi = SelectionValue::Multiple(set(&["a"]));
        assert_eq!(multi.toggled("b"), SelectionValue::Multiple(set(&["a", "b"])));
        assert!(multi.contains("a"));
        assert!(!multi.contains("b"));
    }
}
