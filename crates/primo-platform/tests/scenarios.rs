//! End-to-end behaviour through a mounted tree, on both targets.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use primo_core::{
    Controlled, Element, HandlerOrder, Key, NodeId, NodeRef, PrimitiveError, Selection,
    SlottableView, controlled,
};
use primo_platform::{HostPlatform, NativePlatform, Renderer, WebPlatform};
use primo_ui::{Pressable, Text, menubar, slider, toggle_group as tg};

fn by_text<P: HostPlatform>(r: &Renderer<P>, text: &str) -> NodeId {
    r.tree()
        .find_by_text(text)
        .unwrap_or_else(|| panic!("no node labelled {text:?}"))
        .id
}

fn single_group(owner: &Controlled<Option<String>>) -> Result<Element, PrimitiveError> {
    tg::Root(
        tg::RootProps::new(Selection::single(owner.get(), owner.setter())),
        |g| {
            Ok(vec![
                tg::Item(g, tg::ItemProps::new("a"), vec![Text("A")])?,
                tg::Item(g, tg::ItemProps::new("b"), vec![Text("B")])?,
            ])
        },
    )
}

fn multiple_group(owner: &Controlled<BTreeSet<String>>) -> Result<Element, PrimitiveError> {
    tg::Root(
        tg::RootProps::new(Selection::multiple(owner.get(), owner.setter())),
        |g| {
            Ok(vec![
                tg::Item(g, tg::ItemProps::new("a"), vec![Text("A")])?,
                tg::Item(g, tg::ItemProps::new("b"), vec![Text("B")])?,
            ])
        },
    )
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn single_select_then_clear<P: HostPlatform>(platform: P) {
    let owner = controlled::<Option<String>>(None);
    let mut r = Renderer::new(platform);

    r.render_with(|| single_group(&owner)).unwrap();
    assert!(r.press(by_text(&r, "A")));
    assert_eq!(owner.get(), Some("a".into()));

    r.render_with(|| single_group(&owner)).unwrap();
    let a = r.tree().get(by_text(&r, "A")).unwrap();
    assert_eq!(a.attr("data-state"), Some("on"));
    r.press(by_text(&r, "A"));
    assert_eq!(owner.history(), vec![Some("a".into()), None]);
}

#[test]
fn test_single_selection_native() {
    single_select_then_clear(NativePlatform);
}

#[test]
fn test_single_selection_web() {
    single_select_then_clear(WebPlatform);
}

fn multiple_accumulates<P: HostPlatform>(platform: P) {
    let owner = controlled(BTreeSet::new());
    let mut r = Renderer::new(platform);
    for label in ["A", "B", "A"] {
        r.render_with(|| multiple_group(&owner)).unwrap();
        r.press(by_text(&r, label));
    }
    assert_eq!(
        owner.history(),
        vec![set(&["a"]), set(&["a", "b"]), set(&["b"])]
    );
}

#[test]
fn test_multiple_selection_native() {
    multiple_accumulates(NativePlatform);
}

#[test]
fn test_multiple_selection_web() {
    multiple_accumulates(WebPlatform);
}

#[test]
fn test_web_snapshot_of_single_group() {
    let owner = controlled(Some("a".to_string()));
    let mut r = Renderer::new(WebPlatform);
    let tree = r.render_with(|| single_group(&owner)).unwrap();
    insta::assert_snapshot!(tree.dump(), @r#"
    div [ToggleGroupRoot] aria-orientation="horizontal" data-orientation="horizontal" dir="ltr" role="group"
      button [ToggleGroupItem] aria-pressed="true" data-orientation="horizontal" data-state="on" role="button" type="button"
        span "A"
      button [ToggleGroupItem] aria-pressed="false" data-orientation="horizontal" data-state="off" role="button" type="button"
        span "B"
    "#);
}

#[test]
fn test_native_snapshot_of_single_group() {
    let owner = controlled(Some("a".to_string()));
    let mut r = Renderer::new(NativePlatform);
    let tree = r.render_with(|| single_group(&owner)).unwrap();
    insta::assert_snapshot!(tree.dump(), @r#"
    View [ToggleGroupRoot] accessibilityRole="none" data-orientation="horizontal" dir="ltr"
      Pressable [ToggleGroupItem] accessibilityRole="button" accessibilityState="{\"selected\":true}" data-orientation="horizontal" data-state="on"
        Text "A"
      Pressable [ToggleGroupItem] accessibilityRole="button" accessibilityState="{\"selected\":false}" data-orientation="horizontal" data-state="off"
        Text "B"
    "#);
}

#[test]
fn test_snapshot_json_skips_empty_fields() {
    let owner = controlled::<Option<String>>(None);
    let mut r = Renderer::new(WebPlatform);
    let json = r.render_with(|| single_group(&owner)).unwrap().to_json();
    let item = &json[0]["children"][0];
    assert_eq!(item["name"], "ToggleGroupItem");
    assert_eq!(item["attrs"]["aria-pressed"], "false");
    assert_eq!(item["children"][0]["text"], "A");
    assert!(item["children"][0].get("attrs").is_none());
}

fn disabled_group<P: HostPlatform>(platform: P, disabled_attr: &str) {
    let owner = controlled::<Option<String>>(None);
    let mut r = Renderer::new(platform);
    r.render_with(|| {
        tg::Root(
            tg::RootProps::new(Selection::single(owner.get(), owner.setter())).disabled(true),
            |g| Ok(vec![tg::Item(g, tg::ItemProps::new("a"), vec![Text("A")])?]),
        )
    })
    .unwrap();
    let a = by_text(&r, "A");
    assert!(r.tree().get(a).unwrap().attr(disabled_attr).is_some());
    r.press(a);
    assert!(owner.history().is_empty());
}

#[test]
fn test_disabled_group_ignores_presses() {
    disabled_group(NativePlatform, "disabled");
    disabled_group(WebPlatform, "aria-disabled");
}

#[test]
fn test_as_child_handler_order() {
    for (order, expected) in [
        (HandlerOrder::InternalFirst, ["select", "child"]),
        (HandlerOrder::ChildFirst, ["child", "select"]),
    ] {
        let log = Rc::new(RefCell::new(Vec::new()));
        let owner = controlled::<Option<String>>(None);
        {
            let log = log.clone();
            owner.subscribe(move |_| log.borrow_mut().push("select"));
        }
        let mut r = Renderer::new(WebPlatform);
        let child_log = log.clone();
        r.render_with(|| {
            tg::Root(
                tg::RootProps::new(Selection::single(owner.get(), owner.setter())),
                |g| {
                    let chip = Pressable(move |_| child_log.borrow_mut().push("child"), vec![
                        Text("Chip"),
                    ])
                    .class("chip");
                    Ok(vec![tg::Item(
                        g,
                        tg::ItemProps::new("a")
                            .as_child(true)
                            .handler_order(order)
                            .class("item"),
                        vec![chip],
                    )?])
                },
            )
        })
        .unwrap();

        let chip = r.tree().get(by_text(&r, "Chip")).unwrap();
        assert_eq!(chip.name, Some("ToggleGroupItem"));
        assert_eq!(chip.attr("class"), Some("item chip"));
        r.press(chip.id);
        assert_eq!(*log.borrow(), expected);
    }
}

#[test]
fn test_as_child_needs_exactly_one_child() {
    let owner = controlled::<Option<String>>(None);
    let mut r = Renderer::new(NativePlatform);
    let err = r
        .render_with(|| {
            tg::Root(
                tg::RootProps::new(Selection::single(owner.get(), owner.setter())),
                |g| {
                    Ok(vec![tg::Item(
                        g,
                        tg::ItemProps::new("a").as_child(true),
                        vec![Text("one"), Text("two")],
                    )?])
                },
            )
        })
        .unwrap_err();
    assert_eq!(
        err,
        PrimitiveError::SlotArity {
            component: "ToggleGroupItem",
            found: 2
        }
    );
}

#[test]
fn test_consumer_ref_and_roving_ref_both_attach() {
    let owner = controlled::<Option<String>>(None);
    let mine = NodeRef::new();
    let mut r = Renderer::new(WebPlatform);
    let build = || {
        tg::Root(
            tg::RootProps::new(Selection::single(owner.get(), owner.setter())),
            |g| {
                Ok(vec![
                    tg::Item(g, tg::ItemProps::new("a").node_ref(&mine), vec![Text("A")])?,
                    tg::Item(g, tg::ItemProps::new("b"), vec![Text("B")])?,
                ])
            },
        )
    };
    r.render_with(build).unwrap();
    let (a, b) = (by_text(&r, "A"), by_text(&r, "B"));
    assert_eq!(mine.get(), Some(a));

    // Roving focus can only reach `a` through its own ref.
    r.focus(b);
    r.key(Key::ArrowRight);
    assert_eq!(r.focused(), Some(a));
}

fn roving_skips_disabled_and_loops<P: HostPlatform>(platform: P) {
    let owner = controlled(BTreeSet::new());
    let mut r = Renderer::new(platform);
    r.render_with(|| {
        tg::Root(
            tg::RootProps::new(Selection::multiple(owner.get(), owner.setter())),
            |g| {
                Ok(vec![
                    tg::Item(g, tg::ItemProps::new("a"), vec![Text("A")])?,
                    tg::Item(g, tg::ItemProps::new("b").disabled(true), vec![Text("B")])?,
                    tg::Item(g, tg::ItemProps::new("c"), vec![Text("C")])?,
                ])
            },
        )
    })
    .unwrap();
    let (a, c) = (by_text(&r, "A"), by_text(&r, "C"));
    r.focus(a);
    r.key(Key::ArrowRight);
    assert_eq!(r.focused(), Some(c));
    r.key(Key::ArrowRight);
    assert_eq!(r.focused(), Some(a));
    r.key(Key::End);
    assert_eq!(r.focused(), Some(c));
}

#[test]
fn test_roving_focus_native() {
    roving_skips_disabled_and_loops(NativePlatform);
}

#[test]
fn test_roving_focus_web() {
    roving_skips_disabled_and_loops(WebPlatform);
}

#[test]
fn test_enter_activates_only_on_web() {
    let owner = controlled::<Option<String>>(None);

    let mut web = Renderer::new(WebPlatform);
    web.render_with(|| single_group(&owner)).unwrap();
    web.focus(by_text(&web, "B"));
    assert!(web.key(Key::Enter));
    assert_eq!(owner.get(), Some("b".into()));

    let mut native = Renderer::new(NativePlatform);
    native.render_with(|| single_group(&owner)).unwrap();
    native.focus(by_text(&native, "B"));
    native.key(Key::Enter);
    assert_eq!(owner.history(), vec![Some("b".into())]);
}

#[test]
fn test_sibling_groups_are_isolated() {
    let left = controlled::<Option<String>>(None);
    let right = controlled::<Option<String>>(None);
    let mut r = Renderer::new(NativePlatform);
    r.render_with(|| {
        let group = |owner: &Controlled<Option<String>>, label: &'static str| {
            tg::Root(
                tg::RootProps::new(Selection::single(owner.get(), owner.setter())),
                |g| Ok(vec![tg::Item(g, tg::ItemProps::new("x"), vec![Text(label)])?]),
            )
        };
        Ok(Element::view()
            .child(group(&left, "Left")?)
            .child(group(&right, "Right")?))
    })
    .unwrap();
    r.press(by_text(&r, "Right"));
    assert!(left.history().is_empty());
    assert_eq!(right.get(), Some("x".into()));
}

#[test]
fn test_item_outside_group_fails_to_render() {
    let mut r = Renderer::new(WebPlatform);
    let err = r
        .render_with(|| tg::ItemFromContext(tg::ItemProps::new("a"), vec![]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "ToggleGroupItem compound components cannot be rendered outside the ToggleGroup component"
    );
}

fn app_menubar(value: &Controlled<Option<String>>) -> Result<Element, PrimitiveError> {
    menubar::Root(menubar::RootProps::new(value.get(), value.setter()), |bar| {
        let file = menubar::Menu(bar, "file", |menu| {
            Ok(vec![
                menubar::Trigger(bar, menu, menubar::TriggerProps::default(), vec![Text("File")])?,
                menubar::Content(menu, menubar::ContentProps::default(), || {
                    Ok(vec![menubar::Item(
                        menu,
                        menubar::ItemProps::default(),
                        vec![Text("New")],
                    )?])
                })?,
            ])
        })?;
        let edit = menubar::Menu(bar, "edit", |menu| {
            Ok(vec![menubar::Trigger(
                bar,
                menu,
                menubar::TriggerProps::default(),
                vec![Text("Edit")],
            )?])
        })?;
        Ok(vec![file, edit])
    })
}

#[test]
fn test_menubar_opens_and_item_closes() {
    let value = controlled::<Option<String>>(None);
    let mut r = Renderer::new(WebPlatform);

    r.render_with(|| app_menubar(&value)).unwrap();
    assert!(r.tree().find_by_name("MenubarContent").is_none());
    r.press(by_text(&r, "File"));
    assert_eq!(value.get(), Some("file".into()));

    r.render_with(|| app_menubar(&value)).unwrap();
    let content = r.tree().find_by_name("MenubarContent").unwrap();
    assert_eq!(content.attr("role"), Some("menu"));
    let file = r.tree().get(by_text(&r, "File")).unwrap();
    assert_eq!(file.attr("aria-expanded"), Some("true"));
    r.press(by_text(&r, "New"));
    assert_eq!(value.get(), None);
}

#[test]
fn test_menubar_arrow_keys_move_between_triggers() {
    let value = controlled::<Option<String>>(None);
    let mut r = Renderer::new(NativePlatform);
    r.render_with(|| app_menubar(&value)).unwrap();
    let (file, edit) = (by_text(&r, "File"), by_text(&r, "Edit"));
    r.focus(file);
    r.key(Key::ArrowRight);
    assert_eq!(r.focused(), Some(edit));
    r.key(Key::ArrowDown);
    assert_eq!(value.get(), Some("edit".into()));
}

fn app_slider(value: &Controlled<Vec<f32>>, disabled: bool) -> Result<Element, PrimitiveError> {
    slider::Root(
        slider::RootProps::new(value.get(), value.setter())
            .step(10.0)
            .disabled(disabled),
        |s| {
            Ok(vec![
                slider::Track(s, slider::PartProps::default(), vec![slider::Range(
                    s,
                    slider::PartProps::default(),
                )?])?,
                slider::Thumb(s, slider::ThumbProps::new(0))?,
            ])
        },
    )
}

fn slider_keys<P: HostPlatform>(platform: P) {
    let value = controlled(vec![50.0]);
    let mut r = Renderer::new(platform);
    r.render_with(|| app_slider(&value, false)).unwrap();
    let thumb = r.tree().find_by_name("SliderThumb").unwrap().id;
    r.focus(thumb);

    r.key(Key::ArrowRight);
    assert_eq!(value.get(), vec![60.0]);
    r.render_with(|| app_slider(&value, false)).unwrap();
    assert_eq!(r.focused(), Some(thumb));
    let node = r.tree().get(thumb).unwrap();
    assert_eq!(node.style.get("left").map(String::as_str), Some("60%"));

    r.key(Key::PageUp);
    assert_eq!(value.get(), vec![100.0]);
    r.render_with(|| app_slider(&value, false)).unwrap();
    // Already at the maximum: nothing to report.
    r.key(Key::ArrowRight);
    assert_eq!(value.history(), vec![vec![60.0], vec![100.0]]);
}

#[test]
fn test_slider_keys_native() {
    slider_keys(NativePlatform);
}

#[test]
fn test_slider_keys_web() {
    slider_keys(WebPlatform);
}

#[test]
fn test_disabled_slider_ignores_keys() {
    let value = controlled(vec![50.0]);
    let mut r = Renderer::new(WebPlatform);
    r.render_with(|| app_slider(&value, true)).unwrap();
    let thumb = r.tree().find_by_name("SliderThumb").unwrap();
    assert_eq!(thumb.attr("aria-disabled"), Some("true"));
    assert_eq!(thumb.attr("aria-valuenow"), Some("50"));
    let id = thumb.id;
    r.focus(id);
    r.key(Key::Home);
    assert!(value.history().is_empty());
}
