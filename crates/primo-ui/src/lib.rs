#![allow(non_snake_case)]
//! Headless primitives.
//!
//! Every primitive is a PascalCase function returning
//! `Result<Element, PrimitiveError>`. Roots take a closure that receives the
//! root's scope; parts take that scope as their first argument, so a part
//! can only be built inside its root:
//!
//! ```rust
//! use primo_core::*;
//! use primo_ui::{Text, toggle_group};
//!
//! let owner = controlled::<Option<String>>(None);
//! let root = toggle_group::Root(
//!     toggle_group::RootProps::new(Selection::single(owner.get(), owner.setter())),
//!     |group| {
//!         Ok(vec![
//!             toggle_group::Item(group, toggle_group::ItemProps::new("left"), vec![Text("L")])?,
//!             toggle_group::Item(group, toggle_group::ItemProps::new("right"), vec![Text("R")])?,
//!         ])
//!     },
//! )
//! .unwrap();
//! assert_eq!(root.children.len(), 2);
//! ```
//!
//! Props structs implement [`SlottableView`](primo_core::SlottableView) (and
//! [`SlottablePressable`](primo_core::SlottablePressable) where they render
//! something pressable), which adds `as_child`, `style`, `class`, `node_ref`
//! and handler builders.

pub mod dropdown_menu;
pub mod menu;
pub mod menubar;
pub mod slider;
pub mod toggle_group;
pub mod toolbar;

mod host;
pub use host::*;
