use std::fmt;
use std::rc::Rc;

use crate::{KeyEvent, PressEvent};

pub type Handler<E> = Rc<dyn Fn(&E)>;

/// Which side of a merge runs first when both carry a handler for the same
/// event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandlerOrder {
    /// The primitive's own handler, then the consumer's.
    #[default]
    InternalFirst,
    ChildFirst,
}

/// Chains two optional handlers; each fires exactly once per event, `first`
/// before `second`.
pub fn compose_handlers<E: 'static>(
    first: Option<Handler<E>>,
    second: Option<Handler<E>>,
) -> Option<Handler<E>> {
    match (first, second) {
        (Some(a), Some(b)) => Some(Rc::new(move |e: &E| {
            a(e);
            b(e);
        })),
        (a, None) => a,
        (None, b) => b,
    }
}

#[derive(Clone, Default)]
pub struct Handlers {
    pub on_press: Option<Handler<PressEvent>>,
    pub on_press_in: Option<Handler<PressEvent>>,
    pub on_press_out: Option<Handler<PressEvent>>,
    pub on_key_down: Option<Handler<KeyEvent>>,
}

impl Handlers {
    pub fn is_empty(&self) -> bool {
        self.on_press.is_none()
            && self.on_press_in.is_none()
            && self.on_press_out.is_none()
            && self.on_key_down.is_none()
    }

    /// Merges `internal` and `child` handler sets event by event.
    pub fn compose(internal: Handlers, child: Handlers, order: HandlerOrder) -> Handlers {
        let (first, second) = match order {
            HandlerOrder::InternalFirst => (internal, child),
            HandlerOrder::ChildFirst => (child, internal),
        };
        Handlers {
            on_press: compose_handlers(first.on_press, second.on_press),
            on_press_in: compose_handlers(first.on_press_in, second.on_press_in),
            on_press_out: compose_handlers(first.on_press_out, second.on_press_out),
            on_key_down: compose_handlers(first.on_key_down, second.on_key_down),
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_press", &self.on_press.as_ref().map(|_| "..."))
            .field("on_press_in", &self.on_press_in.as_ref().map(|_| "..."))
            .field("on_press_out", &self.on_press_out.as_ref().map(|_| "..."))
            .field("on_key_down", &self.on_key_down.as_ref().map(|_| "..."))
            .finish()
    }
}
