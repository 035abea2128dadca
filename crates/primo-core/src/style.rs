//! Style fragments and class lists.
//!
//! Props never hold a single resolved style. They hold an ordered list of
//! fragments that merges by concatenation; hosts resolve it with
//! [`Style::flatten`], where later fragments win field by field. Class names
//! follow the same rule and are joined with spaces.

use std::borrow::Cow;

use smallvec::SmallVec;
use taffy::{AlignItems, FlexDirection};

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub left: Option<Length>,
    pub right: Option<Length>,
    pub top: Option<Length>,
    pub bottom: Option<Length>,
    pub flex_direction: Option<FlexDirection>,
    pub align_items: Option<AlignItems>,
    pub gap: Option<f32>,
    pub padding: Option<f32>,
    pub background: Option<Color>,
    pub color: Option<Color>,
    pub border_radius: Option<f32>,
    pub opacity: Option<f32>,
}

macro_rules! overlay_fields {
    ($dst:ident, $src:ident; $($field:ident),+ $(,)?) => {
        $(
            if $src.$field.is_some() {
                $dst.$field = $src.$field.clone();
            }
        )+
    };
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Applies every field set in `over` on top of `self`.
    pub fn overlay(&mut self, over: &Style) {
        overlay_fields!(self, over;
            width, height, left, right, top, bottom,
            flex_direction, align_items, gap, padding,
            background, color, border_radius, opacity,
        );
    }

    /// Resolves an ordered fragment list; the last fragment setting a field wins.
    pub fn flatten<'a>(fragments: impl IntoIterator<Item = &'a Style>) -> Style {
        let mut out = Style::default();
        for s in fragments {
            out.overlay(s);
        }
        out
    }

    pub fn width(mut self, l: Length) -> Self {
        self.width = Some(l);
        self
    }
    pub fn height(mut self, l: Length) -> Self {
        self.height = Some(l);
        self
    }
    pub fn left(mut self, l: Length) -> Self {
        self.left = Some(l);
        self
    }
    pub fn bottom(mut self, l: Length) -> Self {
        self.bottom = Some(l);
        self
    }
    pub fn flex_direction(mut self, d: FlexDirection) -> Self {
        self.flex_direction = Some(d);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items = Some(a);
        self
    }
    pub fn gap(mut self, v: f32) -> Self {
        self.gap = Some(v);
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }
    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }
    pub fn border_radius(mut self, v: f32) -> Self {
        self.border_radius = Some(v);
        self
    }
    pub fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }
}

pub type StyleList = SmallVec<[Style; 2]>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(SmallVec<[Cow<'static, str>; 4]>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: impl Into<Cow<'static, str>>) {
        let class = class.into();
        if !class.trim().is_empty() {
            self.0.push(class);
        }
    }

    pub fn extend(&mut self, other: ClassList) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.as_ref())
    }

    /// Space separated, in insertion order.
    pub fn join(&self) -> String {
        self.iter()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_lets_later_fragments_win() {
        let base = Style::new()
            .padding(4.0)
            .background(Color::BLACK)
            .width(Length::Percent(100.0));
        let over = Style::new().background(Color::WHITE).opacity(0.5);

        let flat = Style::flatten([&base, &over]);
        assert_eq!(flat.padding, Some(4.0));
        assert_eq!(flat.background, Some(Color::WHITE));
        assert_eq!(flat.opacity, Some(0.5));
        assert_eq!(flat.width, Some(Length::Percent(100.0)));
    }

    #[test]
    fn class_list_skips_blank_entries() {
        let mut classes = ClassList::new();
        classes.push("toolbar");
        classes.push("  ");
        classes.push(String::from("dense"));
        assert_eq!(classes.join(), "toolbar dense");
    }
}
