//! # Elements, slots and group state
//!
//! Primo primitives are headless: they describe *behaviour* and leave the
//! pixels to the host. This crate holds the pieces every primitive shares.
//!
//! - [`Element`]: a platform-neutral render description (kind, props,
//!   children). Hosts in `primo-platform` turn it into native views or DOM
//!   nodes.
//! - [`PropSet`]: attributes, handlers, style fragments, class names, a ref
//!   and semantics. Two prop sets merge structurally with [`PropSet::merge`].
//! - [`render`] / [`RenderAs`]: the `as_child` slot. A primitive is either
//!   its own host element or merges onto the consumer's single child.
//! - [`next_single`] / [`next_multiple`]: selection reducers for toggle
//!   groups, and [`Selection`], the controlled value a group root receives.
//! - [`provide`] / [`Provided`]: scoped state from a root to its items.
//!
//! ## A toggle item by hand
//!
//! ```rust
//! use primo_core::*;
//!
//! let owner = controlled::<Option<String>>(None);
//! let state = GroupState::new(Selection::single(owner.get(), owner.setter()));
//!
//! provide(state, |group| {
//!     let item = ItemDescriptor::new("bold");
//!     group.activate(&item);
//! });
//! assert_eq!(owner.get(), Some("bold".to_string()));
//! ```
//!
//! Nothing here stores selection: the owner (`controlled` above) keeps the
//! value and passes it back in on the next render.

pub mod color;
pub mod context;
pub mod element;
pub mod error;
pub mod geometry;
pub mod group;
pub mod handler;
pub mod input;
pub mod locals;
pub mod prelude;
pub mod props;
pub mod refs;
pub mod roving;
pub mod selection;
pub mod semantics;
pub mod slot;
pub mod state;
pub mod style;
pub mod tests;

pub use color::*;
pub use context::*;
pub use element::*;
pub use error::*;
pub use geometry::*;
pub use group::*;
pub use handler::*;
pub use input::*;
pub use locals::*;
pub use props::*;
pub use refs::*;
pub use roving::*;
pub use selection::*;
pub use semantics::*;
pub use slot::*;
pub use state::*;
pub use style::*;
pub use taffy::{AlignItems, FlexDirection};
