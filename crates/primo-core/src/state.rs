use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Owner-side holder for a controlled value.
///
/// Primitives never store selection state; the application does, and feeds
/// it back on the next render. This is the smallest such owner: a shared
/// cell that also remembers every value it was handed.
pub struct Controlled<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    history: Vec<T>,
    subs: Vec<Rc<dyn Fn(&T)>>,
}

impl<T> Clone for Controlled<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Clone + 'static> Controlled<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            history: Vec::new(),
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }

    /// Stores `v`, then notifies subscribers. Subscribers may read the
    /// holder back or set it again.
    pub fn set(&self, v: T) {
        let subs = {
            let mut inner = self.0.borrow_mut();
            inner.history.push(v.clone());
            inner.value = v.clone();
            inner.subs.clone()
        };
        for s in subs {
            s(&v);
        }
    }

    /// Callback suitable for an `on_value_change` prop.
    pub fn setter(&self) -> impl Fn(T) + 'static {
        let this = self.clone();
        move |v| this.set(v)
    }

    /// Every value passed to [`Controlled::set`], oldest first.
    pub fn history(&self) -> Vec<T> {
        self.0.borrow().history.clone()
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Rc::new(f));
        inner.subs.len() - 1
    }
}

pub fn controlled<T: Clone + 'static>(value: T) -> Controlled<T> {
    Controlled::new(value)
}
