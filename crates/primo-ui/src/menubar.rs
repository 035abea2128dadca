//! Menubar: a horizontal row of menus, at most one of them open.
//!
//! The bar's value is the id of the open menu. Triggers run the single
//! selection reducer over it, so pressing the open menu's trigger closes it
//! and pressing another one switches.

use std::rc::Rc;

use primo_core::{
    ContextValue, Element, HostKind, ItemValue, Key, Orientation, PrimitiveError, PropSet,
    Provided, Role, RovingFocus, Semantics, SlotProps, SlottablePressable, SlottableView,
    TextDirection, next_single, provide, render, text_direction,
};

use crate::menu;

pub use crate::menu::{
    CheckboxItem, CheckboxItemProps, ContentProps, Group, Item, ItemIndicator, ItemProps, Label,
    MenuState, RadioGroup, RadioGroupProps, RadioItem, RadioItemProps, Separator, ViewProps,
};

pub struct MenubarState {
    pub value: Option<ItemValue>,
    pub on_value_change: Rc<dyn Fn(Option<ItemValue>)>,
    pub dir: TextDirection,
    pub roving: Rc<RovingFocus>,
}

impl ContextValue for MenubarState {
    const PROVIDER: &'static str = "Menubar";
}

impl MenubarState {
    /// Reports the bar's next value after `menu`'s trigger was pressed.
    pub fn toggle(&self, menu: &ItemValue) -> Option<ItemValue> {
        let next = next_single(self.value.as_ref(), menu);
        log::debug!("menubar {:?} -> {:?}", self.value, next);
        (self.on_value_change)(next.clone());
        next
    }
}

pub struct RootProps {
    pub value: Option<ItemValue>,
    pub on_value_change: Rc<dyn Fn(Option<ItemValue>)>,
    pub dir: Option<TextDirection>,
    pub looping: bool,
    pub slot: SlotProps,
}

impl RootProps {
    pub fn new(
        value: Option<ItemValue>,
        on_value_change: impl Fn(Option<ItemValue>) + 'static,
    ) -> Self {
        Self {
            value,
            on_value_change: Rc::new(on_value_change),
            dir: None,
            looping: true,
            slot: SlotProps::default(),
        }
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
    content: impl FnOnce(&Provided<'_, MenubarState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let RootProps {
        value,
        on_value_change,
        dir,
        looping,
        slot,
    } = props;
    let dir = dir.unwrap_or_else(text_direction);
    let state = MenubarState {
        value,
        on_value_change,
        dir,
        roving: Rc::new(RovingFocus::new(Orientation::Horizontal, dir, looping)),
    };
    let children = provide(state, content)?;
    let internal = PropSet::new()
        .semantics(Semantics::new(Role::MenuBar).orientation(Orientation::Horizontal))
        .attr("dir", dir.as_str());
    render("MenubarRoot", HostKind::View, slot, internal, children)
}

/// One menu of the bar; open while the bar's value equals `value`.
pub fn Menu(
    bar: &Provided<'_, MenubarState>,
    value: impl Into<ItemValue>,
    content: impl FnOnce(&Provided<'_, MenuState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let value = value.into();
    let open = bar.value.as_ref() == Some(&value);
    let on_open_change: Rc<dyn Fn(bool)> = {
        let report = bar.on_value_change.clone();
        let id = value.clone();
        Rc::new(move |open| report(open.then(|| id.clone())))
    };
    let mut state = MenuState::new(open, on_open_change, bar.dir);
    state.value = Some(value);
    let children = provide(state, content)?;
    Ok(Element::fragment(children).named("MenubarMenu"))
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

pub fn Trigger(
    bar: &Provided<'_, MenubarState>,
    menu: &Provided<'_, MenuState>,
    props: TriggerProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let TriggerProps { disabled, mut slot } = props;
    let (index, node) = bar.roving.register(disabled);
    let mut semantics = Semantics::new(Role::MenuItem)
        .expanded(menu.open)
        .has_popup();
    let mut internal = PropSet::new()
        .attr("data-state", menu.data_state())
        .flag("data-disabled", disabled)
        .node_ref(node);

    let id = menu.value.clone().unwrap_or_default();
    if disabled {
        semantics = semantics.disabled(true);
        slot.props.handlers.on_press = None;
    } else {
        let state = bar.share();
        let pressed = id.clone();
        internal = internal.on_press(move |_| {
            state.toggle(&pressed);
        });
    }
    let state = bar.share();
    internal = internal.on_key_down(move |e| {
        if e.key == Key::ArrowDown && !disabled && state.value.as_ref() != Some(&id) {
            (state.on_value_change)(Some(id.clone()));
        } else {
            state.roving.handle_key(index, &e.key);
        }
    });
    render(
        "MenubarTrigger",
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
    menu::content_element("MenubarContent", menu, props, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;
    use primo_core::{KeyEvent, NodeId, PressEvent, PressSource, Vec2, controlled};

    fn press(el: &Element) {
        let on_press = el.props.handlers.on_press.as_ref().expect("pressable");
        on_press(&PressEvent {
            target: NodeId(1),
            source: PressSource::Keyboard,
            position: Vec2::ZERO,
        });
    }

    fn bar(value: &primo_core::Controlled<Option<String>>) -> Element {
        Root(RootProps::new(value.get(), value.setter()), |bar| {
            let file = Menu(bar, "file", |menu| {
                Ok(vec![
                    Trigger(bar, menu, TriggerProps::default(), vec![Text("File")])?,
                    Content(menu, ContentProps::default(), || {
                        Ok(vec![Item(menu, ItemProps::default(), vec![Text("New")])?])
                    })?,
                ])
            })?;
            let edit = Menu(bar, "edit", |menu| {
                Ok(vec![
                    Trigger(bar, menu, TriggerProps::default(), vec![Text("Edit")])?,
                    Content(menu, ContentProps::default(), || {
                        Ok(vec![Item(menu, ItemProps::default(), vec![Text("Undo")])?])
                    })?,
                ])
            })?;
            Ok(vec![file, edit])
        })
        .unwrap()
    }

    fn triggers(root: &Element) -> (&Element, &Element) {
        (&root.children[0].children[0], &root.children[1].children[0])
    }

    #[test]
    fn test_triggers_switch_and_close_menus() {
        let value = controlled::<Option<String>>(None);

        let root = bar(&value);
        assert_eq!(root.props.semantics.role, Some(Role::MenuBar));
        press(triggers(&root).0);
        assert_eq!(value.get(), Some("file".into()));

        let root = bar(&value);
        let (file, edit) = triggers(&root);
        assert_eq!(file.props.semantics.expanded, Some(true));
        assert_eq!(edit.props.get_attr("data-state"), Some("closed"));
        assert!(root.children[1].children[1].is_empty());
        press(edit);
        assert_eq!(value.get(), Some("edit".into()));

        let root = bar(&value);
        press(triggers(&root).1);
        assert_eq!(value.get(), None);
    }

    #[test]
    fn test_item_press_closes_the_bar() {
        let value = controlled(Some("edit".to_string()));
        let root = bar(&value);
        let content = root.find("MenubarContent").unwrap();
        press(&content.children[0]);
        assert_eq!(value.history(), vec![None]);
    }

    #[test]
    fn test_arrow_down_opens_the_focused_menu() {
        let value = controlled::<Option<String>>(None);
        let root = bar(&value);
        let on_key = triggers(&root).1.props.handlers.on_key_down.as_ref().unwrap();
        on_key(&KeyEvent::new(Key::ArrowDown));
        assert_eq!(value.get(), Some("edit".into()));
    }
}
