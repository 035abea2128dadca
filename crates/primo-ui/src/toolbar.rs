//! Toolbar: buttons, links and toggle groups sharing one roving focus.

use std::rc::Rc;

use primo_core::{
    ContextValue, Element, FlexDirection, GroupState, HostKind, Orientation, PrimitiveError,
    PropSet, Provided, Role, RovingFocus, Selection, Semantics, SlotProps, SlottablePressable,
    SlottableView, Style, TextDirection, provide, render, text_direction,
};

use crate::toggle_group::{self, ItemProps};

/// Provided by [`Root`] to every part of the toolbar.
#[derive(Debug)]
pub struct ToolbarState {
    pub orientation: Orientation,
    pub dir: TextDirection,
    pub roving: Rc<RovingFocus>,
}

impl ContextValue for ToolbarState {
    const PROVIDER: &'static str = "Toolbar";
}

pub struct RootProps {
    pub orientation: Orientation,
    pub dir: Option<TextDirection>,
    pub looping: bool,
    pub slot: SlotProps,
}

impl Default for RootProps {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            dir: None,
            looping: true,
            slot: SlotProps::default(),
        }
    }
}

impl RootProps {
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
}

impl SlottableView for RootProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

pub fn Root(
    props: RootProps,
    content: impl FnOnce(&Provided<'_, ToolbarState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let RootProps {
        orientation,
        dir,
        looping,
        slot,
    } = props;
    let dir = dir.unwrap_or_else(text_direction);
    let state = ToolbarState {
        orientation,
        dir,
        roving: Rc::new(RovingFocus::new(orientation, dir, looping)),
    };
    let children = provide(state, content)?;

    let direction = match orientation {
        Orientation::Horizontal => FlexDirection::Row,
        Orientation::Vertical => FlexDirection::Column,
    };
    let internal = PropSet::new()
        .semantics(Semantics::new(Role::Toolbar).orientation(orientation))
        .attr("dir", dir.as_str())
        .attr("data-orientation", orientation.as_str())
        .style(Style::new().flex_direction(direction));
    render("ToolbarRoot", HostKind::View, slot, internal, children)
}

/// Props of a toolbar's toggle group. Orientation, direction, looping and
/// arrow-key focus come from the toolbar.
pub struct ToggleGroupProps {
    pub selection: Selection,
    pub disabled: bool,
    pub slot: SlotProps,
}

impl ToggleGroupProps {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            disabled: false,
            slot: SlotProps::default(),
        }
    }

    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }
}

impl SlottableView for ToggleGroupProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

/// A toggle group whose items take part in the toolbar's focus order.
pub fn ToggleGroup(
    toolbar: &Provided<'_, ToolbarState>,
    props: ToggleGroupProps,
    content: impl FnOnce(&Provided<'_, GroupState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let ToggleGroupProps {
        selection,
        disabled,
        slot,
    } = props;
    let mut state = GroupState::new(selection);
    state.disabled = disabled;
    state.roving = Some(toolbar.roving.clone());

    let children = provide(state, content)?;
    let internal = PropSet::new()
        .semantics(Semantics::new(Role::Group))
        .attr("dir", toolbar.dir.as_str())
        .flag("data-disabled", disabled);
    render("ToolbarToggleGroup", HostKind::View, slot, internal, children)
}

pub fn ToggleItem(
    group: &Provided<'_, GroupState>,
    props: ItemProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    toggle_group::item_element("ToolbarToggleItem", group, props, children)
}

#[derive(Default)]
pub struct SeparatorProps {
    pub slot: SlotProps,
}

impl SlottableView for SeparatorProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

/// Divider running across the toolbar's main axis.
pub fn Separator(
    toolbar: &Provided<'_, ToolbarState>,
    props: SeparatorProps,
) -> Result<Element, PrimitiveError> {
    let orientation = toolbar.orientation.perpendicular();
    let internal = PropSet::new()
        .semantics(Semantics::new(Role::Separator).orientation(orientation))
        .attr("data-orientation", orientation.as_str());
    render("ToolbarSeparator", HostKind::View, props.slot, internal, vec![])
}

#[derive(Default)]
pub struct LinkProps {
    pub href: Option<String>,
    pub slot: SlotProps,
}

impl LinkProps {
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl SlottableView for LinkProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}
impl SlottablePressable for LinkProps {}

pub fn Link(
    toolbar: &Provided<'_, ToolbarState>,
    props: LinkProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let mut internal = roving_item(toolbar, false).semantics(Semantics::new(Role::Link));
    if let Some(href) = props.href {
        internal = internal.attr("href", href);
    }
    render("ToolbarLink", HostKind::Pressable, props.slot, internal, children)
}

#[derive(Default)]
pub struct ButtonProps {
    pub disabled: bool,
    pub slot: SlotProps,
}

impl ButtonProps {
    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }
}

impl SlottableView for ButtonProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}
impl SlottablePressable for ButtonProps {}

pub fn Button(
    toolbar: &Provided<'_, ToolbarState>,
    props: ButtonProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let ButtonProps { disabled, mut slot } = props;
    let mut semantics = Semantics::new(Role::Button);
    if disabled {
        semantics = semantics.disabled(true);
        slot.props.handlers.on_press = None;
    }
    let internal = roving_item(toolbar, disabled)
        .semantics(semantics)
        .flag("data-disabled", disabled);
    render("ToolbarButton", HostKind::Pressable, slot, internal, children)
}

fn roving_item(toolbar: &Provided<'_, ToolbarState>, disabled: bool) -> PropSet {
    let roving = toolbar.roving.clone();
    let (index, node) = roving.register(disabled);
    PropSet::new()
        .attr("data-orientation", toolbar.orientation.as_str())
        .node_ref(node)
        .on_key_down(move |e| {
            roving.handle_key(index, &e.key);
        })
}
