/// High‑level semantic role of an element, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Button,
    Link,
    Toolbar,
    Group,
    Separator,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Slider,
}

impl Role {
    /// The WAI-ARIA role name.
    pub fn aria(self) -> &'static str {
        match self {
            Role::Text => "text",
            Role::Button => "button",
            Role::Link => "link",
            Role::Toolbar => "toolbar",
            Role::Group => "group",
            Role::Separator => "separator",
            Role::Menu => "menu",
            Role::MenuBar => "menubar",
            Role::MenuItem => "menuitem",
            Role::MenuItemCheckbox => "menuitemcheckbox",
            Role::MenuItemRadio => "menuitemradio",
            Role::Slider => "slider",
        }
    }

    /// The closest `accessibilityRole` a native view tree understands.
    pub fn native(self) -> &'static str {
        match self {
            Role::Text => "text",
            Role::Button => "button",
            Role::Link => "link",
            Role::Toolbar => "toolbar",
            Role::Group | Role::Separator => "none",
            Role::Menu => "menu",
            Role::MenuBar => "menubar",
            Role::MenuItem => "menuitem",
            Role::MenuItemCheckbox => "checkbox",
            Role::MenuItemRadio => "radio",
            Role::Slider => "adjustable",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeInfo {
    pub min: f32,
    pub max: f32,
    pub now: f32,
}

/// Semantics attached to an element. Every field is optional so that a
/// consumer's element can override exactly what it sets when merged with a
/// primitive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Semantics {
    pub role: Option<Role>,
    /// Human‑readable label for screen readers.
    pub label: Option<String>,
    pub disabled: Option<bool>,
    /// Toggle buttons.
    pub pressed: Option<bool>,
    /// Checkbox and radio menu items.
    pub checked: Option<bool>,
    /// Triggers of popups.
    pub expanded: Option<bool>,
    pub has_popup: bool,
    pub orientation: Option<Orientation>,
    pub range: Option<RangeInfo>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Semantics::default()
    }

    /// Fields set in `over` replace ours.
    pub fn merged(mut self, over: &Semantics) -> Semantics {
        if over.role.is_some() {
            self.role = over.role;
        }
        if over.label.is_some() {
            self.label = over.label.clone();
        }
        if over.disabled.is_some() {
            self.disabled = over.disabled;
        }
        if over.pressed.is_some() {
            self.pressed = over.pressed;
        }
        if over.checked.is_some() {
            self.checked = over.checked;
        }
        if over.expanded.is_some() {
            self.expanded = over.expanded;
        }
        self.has_popup |= over.has_popup;
        if over.orientation.is_some() {
            self.orientation = over.orientation;
        }
        if over.range.is_some() {
            self.range = over.range;
        }
        self
    }

    pub fn label(mut self, l: impl Into<String>) -> Self {
        self.label = Some(l.into());
        self
    }
    pub fn disabled(mut self, v: bool) -> Self {
        self.disabled = Some(v);
        self
    }
    pub fn pressed(mut self, v: bool) -> Self {
        self.pressed = Some(v);
        self
    }
    pub fn checked(mut self, v: bool) -> Self {
        self.checked = Some(v);
        self
    }
    pub fn expanded(mut self, v: bool) -> Self {
        self.expanded = Some(v);
        self
    }
    pub fn has_popup(mut self) -> Self {
        self.has_popup = true;
        self
    }
    pub fn orientation(mut self, o: Orientation) -> Self {
        self.orientation = Some(o);
        self
    }
    pub fn range(mut self, min: f32, max: f32, now: f32) -> Self {
        self.range = Some(RangeInfo { min, max, now });
        self
    }
}
