//! Toggle group: a set of two-state buttons with single or multiple
//! selection.
//!
//! The root receives a controlled [`Selection`] and shares it with its items
//! as [`GroupState`]. Pressing an item runs the matching reducer and reports
//! the result to the owner; the group itself never stores a value.

use std::rc::Rc;

use primo_core::{
    Element, GroupState, HostKind, ItemDescriptor, ItemValue, Orientation, PrimitiveError,
    PropSet, Provided, Role, RovingFocus, Selection, Semantics, SlotProps, SlottablePressable,
    SlottableView, TextDirection, provide, text_direction, with_context,
};

pub struct RootProps {
    pub selection: Selection,
    pub disabled: bool,
    pub orientation: Orientation,
    /// Reading direction for arrow keys; the ambient one when unset.
    pub dir: Option<TextDirection>,
    pub looping: bool,
    /// Arrow keys move focus between items.
    pub roving_focus: bool,
    pub slot: SlotProps,
}

impl RootProps {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            disabled: false,
            orientation: Orientation::Horizontal,
            dir: None,
            looping: true,
            roving_focus: true,
            slot: SlotProps::default(),
        }
    }

    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }

    pub fn orientation(mut self, o: Orientation) -> Self {
        self.orientation = o;
        self
    }

    pub fn dir(mut self, d: TextDirection) -> Self {
        self.dir = Some(d);
        self
    }

    pub fn looping(mut self, v: bool) -> Self {
        self.looping = v;
        self
    }

    pub fn roving_focus(mut self, v: bool) -> Self {
        self.roving_focus = v;
        self
    }
}

impl SlottableView for RootProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

pub struct ItemProps {
    pub value: ItemValue,
    pub disabled: bool,
    pub slot: SlotProps,
}

impl ItemProps {
    pub fn new(value: impl Into<ItemValue>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
            slot: SlotProps::default(),
        }
    }

    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }
}

impl SlottableView for ItemProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}
impl SlottablePressable for ItemProps {}

pub fn Root(
    props: RootProps,
    content: impl FnOnce(&Provided<'_, GroupState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let RootProps {
        selection,
        disabled,
        orientation,
        dir,
        looping,
        roving_focus,
        slot,
    } = props;
    let dir = dir.unwrap_or_else(text_direction);

    let mut state = GroupState::new(selection);
    state.disabled = disabled;
    if roving_focus {
        state.roving = Some(Rc::new(RovingFocus::new(orientation, dir, looping)));
    }

    let children = provide(state, content)?;
    let internal = PropSet::new()
        .semantics(Semantics::new(Role::Group).orientation(orientation))
        .attr("dir", dir.as_str())
        .attr("data-orientation", orientation.as_str())
        .flag("data-disabled", disabled);
    primo_core::render("ToggleGroupRoot", HostKind::View, slot, internal, children)
}

pub fn Item(
    group: &Provided<'_, GroupState>,
    props: ItemProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    item_element("ToggleGroupItem", group, props, children)
}

/// [`Item`] for code that cannot pass the group scope along; fails when no
/// toggle group encloses the call.
pub fn ItemFromContext(props: ItemProps, children: Vec<Element>) -> Result<Element, PrimitiveError> {
    with_context::<GroupState, _>("ToggleGroupItem", |group| Item(group, props, children))?
}

/// Shared by the toggle group and the toolbar's toggle items.
pub(crate) fn item_element(
    component: &'static str,
    group: &Provided<'_, GroupState>,
    props: ItemProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let ItemProps {
        value,
        disabled,
        mut slot,
    } = props;
    // The item's own on_press runs after the selection logic and is skipped
    // with it when disabled.
    let consumer = slot.props.handlers.on_press.take();

    let state = group.share();
    let item = ItemDescriptor { value, disabled };
    let pressed = state.is_pressed(&item.value);
    let is_disabled = state.is_item_disabled(&item);

    let mut semantics = Semantics::new(Role::Button).pressed(pressed);
    if is_disabled {
        semantics = semantics.disabled(true);
    }
    let mut internal = PropSet::new()
        .semantics(semantics)
        .attr("data-state", if pressed { "on" } else { "off" })
        .flag("data-disabled", is_disabled);

    if let Some(roving) = state.roving.clone() {
        let (index, node) = roving.register(is_disabled);
        internal = internal
            .attr("data-orientation", roving.orientation.as_str())
            .node_ref(node)
            .on_key_down(move |e| {
                roving.handle_key(index, &e.key);
            });
    }

    let internal = {
        let state = state.clone();
        internal.on_press(move |e| {
            state.press_item(&item, e, consumer.as_deref());
        })
    };
    primo_core::render(component, HostKind::Pressable, slot, internal, children)
}
