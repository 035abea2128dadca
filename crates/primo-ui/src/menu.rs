//! Menu parts shared by [`dropdown_menu`](crate::dropdown_menu) and
//! [`menubar`](crate::menubar).
//!
//! A root provides [`MenuState`]: whether the menu is open and how to change
//! that. Items close the menu after they ran, unless told otherwise.

use std::rc::Rc;

use primo_core::{
    ContextValue, Element, HostKind, ItemValue, Key, Orientation, PressEvent, PrimitiveError,
    PropSet, Provided, Role, RovingFocus, Semantics, SlotProps, SlottablePressable,
    SlottableView, TextDirection, provide, render,
};

pub struct MenuState {
    pub open: bool,
    pub on_open_change: Rc<dyn Fn(bool)>,
    /// Identifies the menu inside a menubar.
    pub value: Option<ItemValue>,
    pub roving: Rc<RovingFocus>,
}

impl ContextValue for MenuState {
    const PROVIDER: &'static str = "Menu";
}

impl std::fmt::Debug for MenuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuState")
            .field("open", &self.open)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl MenuState {
    pub fn new(open: bool, on_open_change: Rc<dyn Fn(bool)>, dir: TextDirection) -> Self {
        Self {
            open,
            on_open_change,
            value: None,
            roving: Rc::new(RovingFocus::new(Orientation::Vertical, dir, true)),
        }
    }

    pub fn set_open(&self, open: bool) {
        if open != self.open {
            log::debug!("menu {:?} open -> {open}", self.value);
        }
        (self.on_open_change)(open);
    }

    pub fn data_state(&self) -> &'static str {
        if self.open { "open" } else { "closed" }
    }
}

#[derive(Default)]
pub struct ContentProps {
    pub slot: SlotProps,
}

impl SlottableView for ContentProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

/// The popup. Renders nothing, and does not build its items, while closed.
pub(crate) fn content_element(
    component: &'static str,
    menu: &Provided<'_, MenuState>,
    props: ContentProps,
    items: impl FnOnce() -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    if !menu.open {
        return Ok(Element::empty());
    }
    let children = items()?;
    let state = menu.share();
    let internal = PropSet::new()
        .semantics(Semantics::new(Role::Menu).orientation(Orientation::Vertical))
        .attr("data-state", menu.data_state())
        .on_key_down(move |e| {
            if e.key == Key::Escape {
                state.set_open(false);
            }
        });
    render(component, HostKind::View, props.slot, internal, children)
}

pub struct ItemProps {
    pub disabled: bool,
    pub close_on_press: bool,
    pub slot: SlotProps,
}

impl Default for ItemProps {
    fn default() -> Self {
        Self {
            disabled: false,
            close_on_press: true,
            slot: SlotProps::default(),
        }
    }
}

impl ItemProps {
    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }

    pub fn close_on_press(mut self, v: bool) -> Self {
        self.close_on_press = v;
        self
    }
}

impl SlottableView for ItemProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}
impl SlottablePressable for ItemProps {}

pub fn Item(
    menu: &Provided<'_, MenuState>,
    props: ItemProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let ItemProps {
        disabled,
        close_on_press,
        slot,
    } = props;
    menu_item(
        "MenuItem",
        menu,
        PropSet::new().semantics(Semantics::new(Role::MenuItem)),
        disabled,
        close_on_press,
        None,
        slot,
        children,
    )
}

/// Builds a pressable menu row. `action` runs before the consumer's own
/// `on_press`, then the menu closes when `close_on_press`. Disabled rows run
/// none of it.
#[allow(clippy::too_many_arguments)]
fn menu_item(
    component: &'static str,
    menu: &Provided<'_, MenuState>,
    base: PropSet,
    disabled: bool,
    close_on_press: bool,
    action: Option<Rc<dyn Fn()>>,
    mut slot: SlotProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let consumer = slot.props.handlers.on_press.take();
    let state = menu.share();
    let (index, node) = state.roving.register(disabled);
    let mut base = base;
    if disabled {
        base = base.semantics(Semantics::default().disabled(true));
    }

    let roving = state.roving.clone();
    let internal = base
        .flag("data-disabled", disabled)
        .node_ref(node)
        .on_key_down(move |e| {
            roving.handle_key(index, &e.key);
        })
        .on_press(move |e: &PressEvent| {
            if disabled {
                return;
            }
            if let Some(action) = &action {
                action();
            }
            if let Some(on_press) = &consumer {
                on_press(e);
            }
            if close_on_press {
                state.set_open(false);
            }
        });
    render(component, HostKind::Pressable, slot, internal, children)
}

/// Checked state of the item an indicator sits in.
#[derive(Debug)]
pub struct ItemIndicatorState {
    pub checked: bool,
}

impl ContextValue for ItemIndicatorState {
    const PROVIDER: &'static str = "MenuItem";
}

pub struct CheckboxItemProps {
    pub checked: bool,
    pub on_checked_change: Option<Rc<dyn Fn(bool)>>,
    pub disabled: bool,
    pub close_on_press: bool,
    pub slot: SlotProps,
}

impl CheckboxItemProps {
    pub fn new(checked: bool, on_checked_change: impl Fn(bool) + 'static) -> Self {
        Self {
            checked,
            on_checked_change: Some(Rc::new(on_checked_change)),
            disabled: false,
            close_on_press: true,
            slot: SlotProps::default(),
        }
    }

    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }

    pub fn close_on_press(mut self, v: bool) -> Self {
        self.close_on_press = v;
        self
    }
}

impl SlottableView for CheckboxItemProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}
impl SlottablePressable for CheckboxItemProps {}

pub fn CheckboxItem(
    menu: &Provided<'_, MenuState>,
    props: CheckboxItemProps,
    content: impl FnOnce(&Provided<'_, ItemIndicatorState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let CheckboxItemProps {
        checked,
        on_checked_change,
        disabled,
        close_on_press,
        slot,
    } = props;
    let children = provide(ItemIndicatorState { checked }, content)?;
    let action: Option<Rc<dyn Fn()>> = on_checked_change.map(|f| {
        let toggle: Rc<dyn Fn()> = Rc::new(move || f(!checked));
        toggle
    });
    menu_item(
        "MenuCheckboxItem",
        menu,
        checkable(Role::MenuItemCheckbox, checked),
        disabled,
        close_on_press,
        action,
        slot,
        children,
    )
}

/// Shared by a radio group and its items.
pub struct RadioGroupState {
    pub value: Option<ItemValue>,
    pub on_value_change: Rc<dyn Fn(ItemValue)>,
}

impl ContextValue for RadioGroupState {
    const PROVIDER: &'static str = "MenuRadioGroup";
}

pub struct RadioGroupProps {
    pub value: Option<ItemValue>,
    pub on_value_change: Rc<dyn Fn(ItemValue)>,
    pub slot: SlotProps,
}

impl RadioGroupProps {
    pub fn new(value: Option<ItemValue>, on_value_change: impl Fn(ItemValue) + 'static) -> Self {
        Self {
            value,
            on_value_change: Rc::new(on_value_change),
            slot: SlotProps::default(),
        }
    }
}

impl SlottableView for RadioGroupProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

pub fn RadioGroup(
    props: RadioGroupProps,
    content: impl FnOnce(&Provided<'_, RadioGroupState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let RadioGroupProps {
        value,
        on_value_change,
        slot,
    } = props;
    let children = provide(
        RadioGroupState {
            value,
            on_value_change,
        },
        content,
    )?;
    let internal = PropSet::new().semantics(Semantics::new(Role::Group));
    render("MenuRadioGroup", HostKind::View, slot, internal, children)
}

pub struct RadioItemProps {
    pub value: ItemValue,
    pub disabled: bool,
    pub close_on_press: bool,
    pub slot: SlotProps,
}

impl RadioItemProps {
    pub fn new(value: impl Into<ItemValue>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
            close_on_press: true,
            slot: SlotProps::default(),
        }
    }

    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }

    pub fn close_on_press(mut self, v: bool) -> Self {
        self.close_on_press = v;
        self
    }
}

impl SlottableView for RadioItemProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}
impl SlottablePressable for RadioItemProps {}

/// Selecting the current item again reports it again; radio items never
/// deselect.
pub fn RadioItem(
    menu: &Provided<'_, MenuState>,
    group: &Provided<'_, RadioGroupState>,
    props: RadioItemProps,
    content: impl FnOnce(&Provided<'_, ItemIndicatorState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let RadioItemProps {
        value,
        disabled,
        close_on_press,
        slot,
    } = props;
    let checked = group.value.as_deref() == Some(value.as_str());
    let children = provide(ItemIndicatorState { checked }, content)?;
    let action: Rc<dyn Fn()> = {
        let on_value_change = group.on_value_change.clone();
        Rc::new(move || on_value_change(value.clone()))
    };
    menu_item(
        "MenuRadioItem",
        menu,
        checkable(Role::MenuItemRadio, checked),
        disabled,
        close_on_press,
        Some(action),
        slot,
        children,
    )
}

fn checkable(role: Role, checked: bool) -> PropSet {
    PropSet::new()
        .semantics(Semantics::new(role).checked(checked))
        .attr("data-state", if checked { "checked" } else { "unchecked" })
}

#[derive(Default)]
pub struct ViewProps {
    pub slot: SlotProps,
}

impl SlottableView for ViewProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

/// Renders its children only while the enclosing item is checked.
pub fn ItemIndicator(
    item: &Provided<'_, ItemIndicatorState>,
    props: ViewProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    if !item.checked {
        return Ok(Element::empty());
    }
    render(
        "MenuItemIndicator",
        HostKind::View,
        props.slot,
        PropSet::new().attr("data-state", "checked"),
        children,
    )
}

pub fn Label(props: ViewProps, children: Vec<Element>) -> Result<Element, PrimitiveError> {
    render("MenuLabel", HostKind::View, props.slot, PropSet::new(), children)
}

pub fn Group(props: ViewProps, children: Vec<Element>) -> Result<Element, PrimitiveError> {
    let internal = PropSet::new().semantics(Semantics::new(Role::Group));
    render("MenuGroup", HostKind::View, props.slot, internal, children)
}

pub fn Separator(props: ViewProps) -> Result<Element, PrimitiveError> {
    let internal = PropSet::new()
        .semantics(Semantics::new(Role::Separator).orientation(Orientation::Horizontal));
    render("MenuSeparator", HostKind::View, props.slot, internal, vec![])
}
