//! Ambient values for a subtree.
//!
//! Unlike group state, these have a sensible default everywhere, so reads
//! never fail. Override one for a subtree with the matching `with_*`:
//!
//! ```rust
//! use primo_core::*;
//!
//! with_text_direction(TextDirection::Rtl, || {
//!     assert_eq!(text_direction(), TextDirection::Rtl);
//! });
//! assert_eq!(text_direction(), TextDirection::Ltr);
//! ```

use std::cell::RefCell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

thread_local! {
    static DIRECTION: RefCell<Vec<TextDirection>> = const { RefCell::new(Vec::new()) };
}

/// Runs `f` with `dir` as the reading direction of everything built inside.
pub fn with_text_direction<R>(dir: TextDirection, f: impl FnOnce() -> R) -> R {
    // Pops on unwind too.
    struct Frame;
    impl Drop for Frame {
        fn drop(&mut self) {
            let _ = DIRECTION.try_with(|st| st.borrow_mut().pop());
        }
    }
    DIRECTION.with(|st| st.borrow_mut().push(dir));
    let _frame = Frame;
    f()
}

/// Innermost direction set by [`with_text_direction`], left-to-right
/// outside any.
pub fn text_direction() -> TextDirection {
    DIRECTION.with(|st| st.borrow().last().copied().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_directions_restore_on_exit() {
        with_text_direction(TextDirection::Rtl, || {
            with_text_direction(TextDirection::Ltr, || {
                assert_eq!(text_direction(), TextDirection::Ltr);
            });
            assert_eq!(text_direction(), TextDirection::Rtl);
        });
        assert_eq!(text_direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_direction_survives_a_panicking_subtree() {
        let caught = std::panic::catch_unwind(|| {
            with_text_direction(TextDirection::Rtl, || panic!("build failed"));
        });
        assert!(caught.is_err());
        assert_eq!(text_direction(), TextDirection::Ltr);
    }
}
