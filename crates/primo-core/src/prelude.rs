pub use crate::color::Color;
pub use crate::context::{ContextValue, Provided, provide, use_context, with_context};
pub use crate::element::{Element, HostKind};
pub use crate::error::{ErrorBoundary, ErrorInfo, PrimitiveError};
pub use crate::group::{Activation, GroupState, ItemDescriptor};
pub use crate::handler::HandlerOrder;
pub use crate::input::{InputEvent, Key, KeyEvent, PressEvent};
pub use crate::locals::{TextDirection, text_direction, with_text_direction};
pub use crate::props::PropSet;
pub use crate::refs::{NodeId, NodeRef, Ref};
pub use crate::selection::{ItemValue, Selection, SelectionMode, SelectionValue};
pub use crate::semantics::{Orientation, Role, Semantics};
pub use crate::slot::{SlotProps, SlottablePressable, SlottableView};
pub use crate::state::{Controlled, controlled};
pub use crate::style::{Length, Style};
pub use taffy::{AlignItems, FlexDirection};
