//! Scoped group state.
//!
//! A root hands its state to a subtree with [`provide`]. Inside the closure
//! the subtree holds a [`Provided`] handle, which is the proof of being
//! inside the provider: functions that take `&Provided<T>` cannot be called
//! from anywhere else. Frames live in a thread-local arena and are removed
//! when the closure returns (or unwinds).
//!
//! Code that cannot thread the handle through can look it up lexically with
//! [`use_context`] / [`with_context`], which fail with
//! [`PrimitiveError::OutsideProvider`] when no provider encloses the call.
//!
//! ```rust
//! use primo_core::*;
//!
//! struct Counter(u32);
//! impl ContextValue for Counter {
//!     const PROVIDER: &'static str = "Counter";
//! }
//!
//! let seen = provide(Counter(3), |scope| scope.0 + use_context::<Counter>("Leaf").unwrap().0);
//! assert_eq!(seen, 6);
//! assert!(use_context::<Counter>("Leaf").is_err());
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::ops::Deref;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use crate::PrimitiveError;

new_key_type! {
    /// Identifies one provider frame for as long as its subtree is being built.
    pub struct ProviderKey;
}

/// State that can be provided to a subtree.
pub trait ContextValue: 'static {
    /// Name of the component that provides it, used in misuse errors.
    const PROVIDER: &'static str;
}

#[derive(Default)]
struct ProviderArena {
    frames: SlotMap<ProviderKey, Rc<dyn Any>>,
    stack: Vec<ProviderKey>,
}

thread_local! {
    static PROVIDERS: RefCell<ProviderArena> = RefCell::new(ProviderArena::default());
}

/// Read access to provided state, valid only inside the providing closure.
pub struct Provided<'s, T: ContextValue> {
    key: ProviderKey,
    value: Rc<T>,
    _scope: PhantomData<&'s ()>,
}

impl<T: ContextValue> Provided<'_, T> {
    pub fn key(&self) -> ProviderKey {
        self.key
    }

    /// The state snapshot itself, for handlers that outlive the render.
    pub fn share(&self) -> Rc<T> {
        self.value.clone()
    }
}

impl<T: ContextValue> Deref for Provided<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

struct FrameGuard(ProviderKey);

impl Drop for FrameGuard {
    fn drop(&mut self) {
        let _ = PROVIDERS.try_with(|p| {
            let mut p = p.borrow_mut();
            p.frames.remove(self.0);
            if let Some(pos) = p.stack.iter().rposition(|k| *k == self.0) {
                p.stack.truncate(pos);
            }
        });
    }
}

/// Makes `value` visible to everything built inside `f`.
pub fn provide<T: ContextValue, R>(value: T, f: impl FnOnce(&Provided<'_, T>) -> R) -> R {
    let value = Rc::new(value);
    let erased: Rc<dyn Any> = value.clone();
    let key = PROVIDERS.with(|p| {
        let mut p = p.borrow_mut();
        let key = p.frames.insert(erased);
        p.stack.push(key);
        key
    });
    log::trace!("provide {} {:?}", T::PROVIDER, key);
    let _guard = FrameGuard(key);
    let scope = Provided {
        key,
        value,
        _scope: PhantomData,
    };
    f(&scope)
}

fn lookup<T: ContextValue>() -> Option<(ProviderKey, Rc<T>)> {
    PROVIDERS.with(|p| {
        let p = p.borrow();
        p.stack.iter().rev().find_map(|key| {
            let value = p.frames.get(*key)?.clone();
            value.downcast::<T>().ok().map(|v| (*key, v))
        })
    })
}

/// Nearest enclosing `T`, or an error naming `component`.
pub fn use_context<T: ContextValue>(component: &'static str) -> Result<Rc<T>, PrimitiveError> {
    lookup::<T>().map(|(_, v)| v).ok_or(PrimitiveError::OutsideProvider {
        component,
        provider: T::PROVIDER,
    })
}

/// Like [`use_context`] but hands out a scoped handle, so the result can be
/// passed to functions that take `&Provided<T>`.
pub fn with_context<T: ContextValue, R>(
    component: &'static str,
    f: impl FnOnce(&Provided<'_, T>) -> R,
) -> Result<R, PrimitiveError> {
    let (key, value) = lookup::<T>().ok_or(PrimitiveError::OutsideProvider {
        component,
        provider: T::PROVIDER,
    })?;
    Ok(f(&Provided {
        key,
        value,
        _scope: PhantomData,
    }))
}

/// Number of providers currently open on this thread.
pub fn provider_depth() -> usize {
    PROVIDERS.with(|p| p.borrow().stack.len())
}
