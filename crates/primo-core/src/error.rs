#![allow(non_snake_case)]
use crate::Element;

/// Usage errors surfaced while building an element tree. None of them is
/// transient; the caller fixes the composition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    #[error("{component} compound components cannot be rendered outside the {provider} component")]
    OutsideProvider {
        component: &'static str,
        provider: &'static str,
    },
    #[error("{component} with `as_child` expects exactly one child element, found {found}")]
    SlotArity {
        component: &'static str,
        found: usize,
    },
}

impl PrimitiveError {
    pub fn component(&self) -> &'static str {
        match self {
            PrimitiveError::OutsideProvider { component, .. }
            | PrimitiveError::SlotArity { component, .. } => component,
        }
    }
}

pub struct ErrorInfo {
    pub message: String,
    pub component: String,
}

/// Renders `content`, or `fallback` when building it failed.
pub fn ErrorBoundary(
    fallback: impl FnOnce(ErrorInfo) -> Element,
    content: impl FnOnce() -> Result<Element, PrimitiveError>,
) -> Element {
    match content() {
        Ok(el) => el,
        Err(err) => {
            log::error!("{err}");
            fallback(ErrorInfo {
                message: err.to_string(),
                component: err.component().to_string(),
            })
        }
    }
}
