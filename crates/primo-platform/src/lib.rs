//! Host targets.
//!
//! A primitive produces an [`Element`](primo_core::Element). A
//! [`HostPlatform`] decides what that element becomes on its target (tag,
//! attributes, style) and which raw input counts as a press. The
//! [`Renderer`] is the same for both targets: it mounts the element into a
//! [`MountedTree`], hands node ids to refs and routes input to handlers.
//!
//! ```rust
//! use primo_core::*;
//! use primo_platform::{NativePlatform, Renderer, WebPlatform};
//!
//! let button = || Element::pressable().semantics(Semantics::new(Role::Button)).named("Save");
//!
//! let mut native = Renderer::new(NativePlatform);
//! let mut web = Renderer::new(WebPlatform);
//! assert_eq!(native.render(button()).find_by_name("Save").unwrap().tag, "Pressable");
//! assert_eq!(web.render(button()).find_by_name("Save").unwrap().tag, "button");
//! ```

mod common;
pub mod native;
pub mod patch;
pub mod renderer;
pub mod tree;
pub mod web;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod dom;

pub use common::key_from_dom;
pub use native::NativePlatform;
pub use renderer::Renderer;
pub use tree::{HostNode, MountedTree, NodeSnapshot};
pub use web::WebPlatform;

use std::collections::BTreeMap;

use primo_core::{HostKind, InputEvent, KeyEvent, PropSet, Semantics, Style, Vec2};
use serde::Serialize;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Native,
    Web,
}

/// What a raw input event means to the element that received it.
#[derive(Clone, Debug)]
pub enum Gesture {
    PressIn,
    PressOut,
    Press,
    KeyDown(KeyEvent),
}

pub type Gestures = SmallVec<[Gesture; 2]>;

/// One host target. Implementations are stateless; the renderer tracks
/// which node is pressed and passes it in.
pub trait HostPlatform {
    fn target(&self) -> Target;

    /// Concrete node type for an element.
    fn tag(&self, kind: &HostKind, semantics: &Semantics) -> &'static str;

    /// Attributes as the target spells them, semantics included.
    fn attributes(&self, tag: &str, props: &PropSet) -> BTreeMap<String, String>;

    /// Flattened style as the target spells it.
    fn style(&self, style: &Style) -> BTreeMap<String, String>;

    /// Interprets `event` delivered to a node with tag `tag`. `pressed` tells
    /// whether the pointer went down on that same node.
    fn capture(&self, event: &InputEvent, tag: &str, pressed: bool) -> Gestures;

    /// Raw events a user produces to press something at `position`.
    fn press_sequence(&self, position: Vec2) -> Vec<InputEvent>;
}

/// Sets up logging for the current target: `env_logger` natively (filter
/// from `RUST_LOG`, `info` otherwise), the browser console on wasm32.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        let _ = console_log::init_with_level(log::Level::Info);
    }
    #[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}
