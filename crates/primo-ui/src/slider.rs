//! Slider: one or more thumbs on a track.
//!
//! Values change in discrete steps from the keyboard. Pointer dragging is
//! left to the application on every target; positions of the range and the
//! thumbs are still computed so a host can lay them out.

use std::rc::Rc;

use primo_core::{
    ContextValue, Element, HostKind, Key, KeyEvent, Length, Modifiers, Orientation,
    PrimitiveError, PropSet, Provided, Role, Semantics, SlotProps, SlottableView, Style,
    TextDirection, provide, render, text_direction,
};

/// Steps moved by PageUp/PageDown or a shifted arrow.
const PAGE_STEPS: f32 = 10.0;

/// Edge of the track the minimum sits at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideFrom {
    Left,
    Right,
    Bottom,
    Top,
}

impl SlideFrom {
    fn back_keys(self) -> [Key; 4] {
        match self {
            SlideFrom::Left | SlideFrom::Bottom => {
                [Key::Home, Key::PageDown, Key::ArrowDown, Key::ArrowLeft]
            }
            SlideFrom::Right => [Key::Home, Key::PageDown, Key::ArrowDown, Key::ArrowRight],
            SlideFrom::Top => [Key::Home, Key::PageDown, Key::ArrowUp, Key::ArrowLeft],
        }
    }
}

pub struct SliderState {
    pub value: Vec<f32>,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub disabled: bool,
    pub orientation: Orientation,
    pub inverted: bool,
    pub dir: TextDirection,
    pub on_value_change: Rc<dyn Fn(Vec<f32>)>,
    pub on_value_commit: Option<Rc<dyn Fn(Vec<f32>)>>,
}

impl ContextValue for SliderState {
    const PROVIDER: &'static str = "Slider";
}

impl SliderState {
    pub fn slide_from(&self) -> SlideFrom {
        match self.orientation {
            Orientation::Horizontal => {
                let ltr = self.dir == TextDirection::Ltr;
                if ltr != self.inverted {
                    SlideFrom::Left
                } else {
                    SlideFrom::Right
                }
            }
            Orientation::Vertical if self.inverted => SlideFrom::Top,
            Orientation::Vertical => SlideFrom::Bottom,
        }
    }

    /// Keeps `v` inside the bounds; NaN lands on `min`.
    pub fn clamp(&self, v: f32) -> f32 {
        if v.is_nan() {
            return self.min;
        }
        v.max(self.min).min(self.max)
    }

    /// Nearest step from `min`, kept inside the bounds and rounded to the
    /// step's precision.
    pub fn snap(&self, v: f32) -> f32 {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return self.clamp(v);
        }
        let k = ((v - self.min) / self.step).round();
        let decimals = self
            .step
            .to_string()
            .split('.')
            .nth(1)
            .map_or(0, str::len) as i32;
        let scale = 10f32.powi(decimals);
        self.clamp(((self.min + k * self.step) * scale).round() / scale)
    }

    /// Position of `v` along the track, 0 to 100.
    pub fn percent(&self, v: f32) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        (v - self.min) / (self.max - self.min) * 100.0
    }

    /// Moves thumb `index` to `v` and reports the new values. Returns `None`
    /// when nothing changed or input is ignored.
    pub fn set_value(&self, index: usize, v: f32) -> Option<Vec<f32>> {
        if self.disabled {
            log::warn!("slider is disabled, ignoring value {v}");
            return None;
        }
        let Some(current) = self.value.get(index) else {
            log::warn!("slider has no thumb {index}");
            return None;
        };
        let next = self.snap(v);
        if next == *current {
            return None;
        }
        let mut values = self.value.clone();
        values[index] = next;
        values.sort_by(f32::total_cmp);
        log::debug!("slider {:?} -> {:?}", self.value, values);
        (self.on_value_change)(values.clone());
        Some(values)
    }

    /// Keyboard movement of thumb `index`. Returns whether the key was used.
    pub fn handle_key(&self, index: usize, e: &KeyEvent) -> bool {
        if self.disabled {
            log::warn!("slider is disabled, ignoring {:?}", e.key);
            return false;
        }
        let Some(&current) = self.value.get(index) else {
            return false;
        };
        let target = match e.key {
            Key::Home => self.min,
            Key::End => self.max,
            Key::PageUp
            | Key::PageDown
            | Key::ArrowLeft
            | Key::ArrowRight
            | Key::ArrowUp
            | Key::ArrowDown => {
                let paged = matches!(e.key, Key::PageUp | Key::PageDown)
                    || e.modifiers.contains(Modifiers::SHIFT);
                let steps = if paged { PAGE_STEPS } else { 1.0 };
                let sign = if self.slide_from().back_keys().contains(&e.key) {
                    -1.0
                } else {
                    1.0
                };
                current + sign * steps * self.step
            }
            _ => return false,
        };
        if let Some(values) = self.set_value(index, target)
            && let Some(commit) = &self.on_value_commit
        {
            commit(values);
        }
        true
    }
}

pub struct RootProps {
    pub value: Vec<f32>,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub disabled: bool,
    pub orientation: Orientation,
    pub inverted: bool,
    pub dir: Option<TextDirection>,
    pub on_value_change: Rc<dyn Fn(Vec<f32>)>,
    pub on_value_commit: Option<Rc<dyn Fn(Vec<f32>)>>,
    pub slot: SlotProps,
}

impl RootProps {
    pub fn new(value: impl Into<Vec<f32>>, on_value_change: impl Fn(Vec<f32>) + 'static) -> Self {
        Self {
            value: value.into(),
            min: 0.0,
            max: 100.0,
            step: 1.0,
            disabled: false,
            orientation: Orientation::Horizontal,
            inverted: false,
            dir: None,
            on_value_change: Rc::new(on_value_change),
            on_value_commit: None,
            slot: SlotProps::default(),
        }
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = v;
        self
    }

    pub fn orientation(mut self, o: Orientation) -> Self {
        self.orientation = o;
        self
    }

    pub fn inverted(mut self, v: bool) -> Self {
        self.inverted = v;
        self
    }

    pub fn dir(mut self, d: TextDirection) -> Self {
        self.dir = Some(d);
        self
    }

    pub fn on_value_commit(mut self, f: impl Fn(Vec<f32>) + 'static) -> Self {
        self.on_value_commit = Some(Rc::new(f));
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
    content: impl FnOnce(&Provided<'_, SliderState>) -> Result<Vec<Element>, PrimitiveError>,
) -> Result<Element, PrimitiveError> {
    let RootProps {
        value,
        min,
        max,
        step,
        disabled,
        orientation,
        inverted,
        dir,
        on_value_change,
        on_value_commit,
        slot,
    } = props;
    let dir = dir.unwrap_or_else(text_direction);
    let (min, max) = bounds(min, max);
    let state = SliderState {
        value,
        min,
        max,
        step,
        disabled,
        orientation,
        inverted,
        dir,
        on_value_change,
        on_value_commit,
    };
    let children = provide(state, content)?;

    let mut internal = common(orientation, disabled).attr("dir", dir.as_str());
    if disabled {
        internal = internal.semantics(Semantics::default().disabled(true));
    }
    render("SliderRoot", HostKind::View, slot, internal, children)
}

/// Reversed bounds are swapped; non-finite ones fall back to `0..=100`.
fn bounds(min: f32, max: f32) -> (f32, f32) {
    if !min.is_finite() || !max.is_finite() {
        log::warn!("slider bounds {min}..{max} are not finite, using 0..100");
        return (0.0, 100.0);
    }
    if min > max {
        log::warn!("slider bounds {min}..{max} are reversed");
        return (max, min);
    }
    (min, max)
}

#[derive(Default)]
pub struct PartProps {
    pub slot: SlotProps,
}

impl SlottableView for PartProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

pub fn Track(
    slider: &Provided<'_, SliderState>,
    props: PartProps,
    children: Vec<Element>,
) -> Result<Element, PrimitiveError> {
    let internal = common(slider.orientation, slider.disabled);
    render("SliderTrack", HostKind::View, props.slot, internal, children)
}

/// The filled part of the track: from the minimum to the only value, or
/// between the lowest and highest thumb.
pub fn Range(
    slider: &Provided<'_, SliderState>,
    props: PartProps,
) -> Result<Element, PrimitiveError> {
    let percents: Vec<f32> = slider.value.iter().map(|v| slider.percent(*v)).collect();
    let start = if percents.len() > 1 {
        percents.iter().copied().fold(f32::INFINITY, f32::min)
    } else {
        0.0
    };
    let end = 100.0 - percents.iter().copied().fold(0.0, f32::max);

    let internal =
        common(slider.orientation, slider.disabled).style(edges(slider.slide_from(), start, end));
    render("SliderRange", HostKind::View, props.slot, internal, vec![])
}

pub struct ThumbProps {
    pub index: usize,
    pub slot: SlotProps,
}

impl ThumbProps {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            slot: SlotProps::default(),
        }
    }
}

impl Default for ThumbProps {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SlottableView for ThumbProps {
    fn slot_mut(&mut self) -> &mut SlotProps {
        &mut self.slot
    }
}

pub fn Thumb(
    slider: &Provided<'_, SliderState>,
    props: ThumbProps,
) -> Result<Element, PrimitiveError> {
    let ThumbProps { index, slot } = props;
    let Some(&value) = slider.value.get(index) else {
        log::warn!("slider thumb {index} has no value");
        return Ok(Element::empty());
    };

    let mut semantics = Semantics::new(Role::Slider)
        .orientation(slider.orientation)
        .range(slider.min, slider.max, value);
    if slider.disabled {
        semantics = semantics.disabled(true);
    }
    let position = slider.percent(value);
    let offset = Some(Length::Percent(position));
    let anchor = match slider.slide_from() {
        SlideFrom::Left => Style {
            left: offset,
            ..Style::default()
        },
        SlideFrom::Right => Style {
            right: offset,
            ..Style::default()
        },
        SlideFrom::Bottom => Style {
            bottom: offset,
            ..Style::default()
        },
        SlideFrom::Top => Style {
            top: offset,
            ..Style::default()
        },
    };

    let state = slider.share();
    let internal = common(slider.orientation, slider.disabled)
        .semantics(semantics)
        .style(anchor)
        .on_key_down(move |e| {
            state.handle_key(index, e);
        });
    render("SliderThumb", HostKind::View, slot, internal, vec![])
}

fn common(orientation: Orientation, disabled: bool) -> PropSet {
    PropSet::new()
        .attr("data-orientation", orientation.as_str())
        .flag("data-disabled", disabled)
}

/// Insets of a span running from `start`% to `100 - end`% of the track.
fn edges(from: SlideFrom, start: f32, end: f32) -> Style {
    let (start, end) = (Some(Length::Percent(start)), Some(Length::Percent(end)));
    match from {
        SlideFrom::Left => Style {
            left: start,
            right: end,
            ..Style::default()
        },
        SlideFrom::Right => Style {
            right: start,
            left: end,
            ..Style::default()
        },
        SlideFrom::Bottom => Style {
            bottom: start,
            top: end,
            ..Style::default()
        },
        SlideFrom::Top => Style {
            top: start,
            bottom: end,
            ..Style::default()
        },
    }
}
