//! Dropdown menu: a trigger button and a popup of menu items.
//!
//! Open state is controlled: [`Root`] takes `open` and reports changes
//! through `on_open_change`.

use std::rc::Rc;

use primo_core::{
    Element, HostKind, Key, PrimitiveError, PropSet, Provided, Role, Semantics,
    SlotProps, SlottablePressable, SlottableView, TextDirection, provide, render, text_direction,
};

use crate::menu;

pub use crate::menu::{
    CheckboxItem, CheckboxItemProps, ContentProps, Group, Item, ItemIndicator, ItemProps, Label,
    MenuState, RadioGroup, RadioGroupProps, RadioItem, RadioItemProps, Separator, ViewProps,
};

pub struct RootProps {
    pub open: bool,
    pub on_open_change: Rc<dyn Fn(bool)>,
    pub dir: Option<TextDirection>,
}

impl RootProps {
    pub fn new(open: bool, on_open_change: impl Fn(bool) + 'static) -> Self {
        Self {
            open,
            on_open_change: Rc::new(on_open_change),
            dir: None,
        }
    }

    pub fn dir(mut self, d: TextDirection) -> Self {
        self.dir = Some(d);
        self
    }
}

/// Provides the menu state. Has no host element of its own.
pub fn Root(
    props: RootProps,
    content: impl FnOnce(&Provided<'_, MenuState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let dir = props.dir.unwrap_or_else(text_direction);
    let state = MenuState::new(props.open, props.on_open_change, dir);
    let children = provide(state, content)?;
    Ok(Element::fragment(children).named("DropdownMenuRoot"))
}

#[derive(Default)]
pub struct TriggerProps {
    pub disabled: bool,
    pub slot: SlotProps,
}

impl TriggerProps {
    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }
}

impl SlottableView for TriggerProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}
impl SlottablePressable for TriggerProps {}

/// Toggles the menu on press; ArrowDown opens it.
pub fn Trigger(
    menu: &Provided<'_, MenuState>,
    props: TriggerProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let TriggerProps { disabled, mut slot } = props;
    let mut semantics = Semantics::new(Role::Button)
        .expanded(menu.open)
        .has_popup();
    let mut internal = PropSet::new()
        .attr("data-state", menu.data_state())
        .flag("data-disabled", disabled);
    if disabled {
        semantics = semantics.disabled(true);
        slot.props.handlers.on_press = None;
    } else {
        let on_press = menu.share();
        let on_key = menu.share();
        internal = internal
            .on_press(move |_| on_press.set_open(!on_press.open))
            .on_key_down(move |e| {
                if e.key == Key::ArrowDown && !on_key.open {
                    on_key.set_open(true);
                }
            });
    }
    render(
        "DropdownMenuTrigger",
        HostKind::Pressable,
        slot,
        internal.semantics(semantics),
        children,
    )
}

pub fn Content(
    menu: &Provided<'_, MenuState>,
    props: ContentProps,
    items: impl FnOnce() -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    menu::content_element("DropdownMenuContent", menu, props, items)
}
