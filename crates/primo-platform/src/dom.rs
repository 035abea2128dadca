//! Browser mount: mirrors a [`Renderer`] tree into real DOM nodes.
//!
//! Input is delegated. The container listens once for each event type and
//! maps the DOM target back to a node through its `data-primo-id`
//! attribute. After a handled event the tree is rebuilt and the DOM patched
//! in place by node id, so the focused element is never replaced.
//!
//! Keyboard activation has one path: Enter/Space key-up on a button (Enter
//! on a link) presses it. The browser's own synthesized click for those keys
//! is cancelled on key-down.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use primo_core::{
    Element, InputEvent, KeyEvent, Modifiers, NodeId, PointerButton, PointerEventKind,
    PrimitiveError, Vec2,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent};

use crate::common::pe_mouse;
use crate::patch::{ID_ATTR, Mirror, Patch};
use crate::web::activates;
use crate::{Renderer, WebPlatform, key_from_dom};

type Build = Box<dyn Fn() -> Result<Element, PrimitiveError>>;

struct Inner {
    document: Document,
    container: web_sys::Element,
    renderer: Renderer<WebPlatform>,
    build: Build,
    mirror: Mirror,
    nodes: HashMap<NodeId, web_sys::Element>,
}

/// A live mount. Dropping it removes the listeners.
pub struct DomMount {
    inner: Rc<RefCell<Inner>>,
    container: web_sys::Element,
    listeners: Vec<(&'static str, Closure<dyn FnMut(web_sys::Event)>)>,
}

/// Renders `build` into the element with id `container_id` and keeps it in
/// sync: every handled event rebuilds and patches.
pub fn mount(
    container_id: &str,
    build: impl Fn() -> Result<Element, PrimitiveError> + 'static,
) -> anyhow::Result<DomMount> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document")?;
    let container = document
        .get_element_by_id(container_id)
        .with_context(|| format!("container '{container_id}' not found"))?;
    container.set_inner_html("");

    let inner = Rc::new(RefCell::new(Inner {
        document,
        container: container.clone(),
        renderer: Renderer::new(WebPlatform),
        build: Box::new(build),
        mirror: Mirror::new(),
        nodes: HashMap::new(),
    }));
    inner.borrow_mut().refresh()?;

    let mut listeners = Vec::new();
    for name in ["mousedown", "mouseup", "click", "keydown", "keyup"] {
        let inner = inner.clone();
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
            let Ok(mut inner) = inner.try_borrow_mut() else {
                log::warn!("{name} while handling another event; dropped");
                return;
            };
            if let Err(err) = inner.on_event(&e) {
                log::error!("{name}: {err:#}");
            }
        });
        container
            .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {name} listener: {e:?}"))?;
        listeners.push((name, cb));
    }
    log::info!("mounted into #{container_id}");

    Ok(DomMount {
        inner,
        container,
        listeners,
    })
}

impl DomMount {
    /// Rebuilds after state changed outside an event handler.
    pub fn rerender(&self) -> anyhow::Result<()> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| anyhow!("rerender during event dispatch"))?
            .refresh()
    }
}

impl Drop for DomMount {
    fn drop(&mut self) {
        for (name, cb) in self.listeners.drain(..) {
            let _ = self
                .container
                .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
    }
}

impl Inner {
    fn on_event(&mut self, e: &web_sys::Event) -> anyhow::Result<()> {
        let Some(target) = self.node_of(e) else {
            return Ok(());
        };
        let Some(event) = translate(e) else {
            return Ok(());
        };
        if let InputEvent::KeyDown(k) | InputEvent::KeyUp(k) = &event
            && let Some(node) = self.renderer.tree().get(target)
            && activates(node.tag, &k.key)
        {
            e.prevent_default();
        }
        if self.renderer.dispatch(target, event) {
            self.refresh()?;
        }
        Ok(())
    }

    fn node_of(&self, e: &web_sys::Event) -> Option<NodeId> {
        let el = e.target()?.dyn_into::<web_sys::Element>().ok()?;
        let hit = el.closest(&format!("[{ID_ATTR}]")).ok()??;
        hit.get_attribute(ID_ATTR)?.parse().ok().map(NodeId)
    }

    fn refresh(&mut self) -> anyhow::Result<()> {
        let root = (self.build)()?;
        self.renderer.render(root);
        let patches = self.mirror.sync(self.renderer.tree());
        for patch in patches {
            self.apply(patch)?;
        }
        if let Some(focused) = self.renderer.focused()
            && let Some(el) = self.nodes.get(&focused)
            && self.document.active_element().as_ref() != Some(el)
            && let Some(el) = el.dyn_ref::<HtmlElement>()
        {
            let _ = el.focus();
        }
        Ok(())
    }

    fn apply(&mut self, patch: Patch) -> anyhow::Result<()> {
        match patch {
            Patch::Remove(id) => {
                if let Some(el) = self.nodes.remove(&id) {
                    el.remove();
                }
            }
            Patch::Create { id, tag } => {
                let el = self
                    .document
                    .create_element(tag)
                    .map_err(|e| anyhow!("create <{tag}>: {e:?}"))?;
                self.nodes.insert(id, el);
            }
            Patch::SetAttr { id, name, value } => {
                self.node(id)?
                    .set_attribute(&name, &value)
                    .map_err(|e| anyhow!("set {name} on node {}: {e:?}", id.0))?;
            }
            Patch::RemoveAttr { id, name } => {
                self.node(id)?
                    .remove_attribute(&name)
                    .map_err(|e| anyhow!("remove {name} from node {}: {e:?}", id.0))?;
            }
            Patch::SetText { id, text } => self.node(id)?.set_text_content(text.as_deref()),
            Patch::Place { id, parent, index } => {
                let el = self.node(id)?;
                let parent = match parent {
                    Some(p) => self.node(p)?,
                    None => &self.container,
                };
                let current = parent.children().item(index as u32);
                if current.as_ref() != Some(el) {
                    parent
                        .insert_before(el, current.as_deref())
                        .map_err(|e| anyhow!("place node {}: {e:?}", id.0))?;
                }
            }
        }
        Ok(())
    }

    fn node(&self, id: NodeId) -> anyhow::Result<&web_sys::Element> {
        self.nodes
            .get(&id)
            .with_context(|| format!("node {} has no element", id.0))
    }
}

fn translate(e: &web_sys::Event) -> Option<InputEvent> {
    if let Some(ke) = e.dyn_ref::<KeyboardEvent>() {
        let key = key_from_dom(&ke.key())?;
        let mut ev = KeyEvent::new(key);
        ev.modifiers = modifiers(ke.shift_key(), ke.ctrl_key(), ke.alt_key(), ke.meta_key());
        ev.is_repeat = ke.repeat();
        return match e.type_().as_str() {
            "keyup" => Some(InputEvent::KeyUp(ev)),
            _ => Some(InputEvent::KeyDown(ev)),
        };
    }
    let me = e.dyn_ref::<MouseEvent>()?;
    let pos = Vec2::new(me.client_x() as f32, me.client_y() as f32);
    let button = match me.button() {
        0 => PointerButton::Primary,
        1 => PointerButton::Tertiary,
        _ => PointerButton::Secondary,
    };
    let mods = modifiers(me.shift_key(), me.ctrl_key(), me.alt_key(), me.meta_key());
    match e.type_().as_str() {
        "mousedown" => Some(InputEvent::Pointer(pe_mouse(
            PointerEventKind::Down(button),
            pos,
            mods,
        ))),
        "mouseup" => Some(InputEvent::Pointer(pe_mouse(
            PointerEventKind::Up(button),
            pos,
            mods,
        ))),
        "click" => Some(InputEvent::Click { position: pos }),
        _ => None,
    }
}

fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    let mut m = Modifiers::empty();
    m.set(Modifiers::SHIFT, shift);
    m.set(Modifiers::CTRL, ctrl);
    m.set(Modifiers::ALT, alt);
    m.set(Modifiers::META, meta);
    m
}
