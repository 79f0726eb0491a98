//! Option value types shared by the component catalogue.
//!
//! Each enum deserialises from the lowercase Bootstrap keyword and exposes
//! that keyword through `as_str` for building class names.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;

/// Declare a keyword enum with serde names and an `as_str` mapping.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant),+
        }

        impl $name {
            /// Bootstrap keyword for this value.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Contextual colour.
    Variant {
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Danger => "danger",
        Warning => "warning",
        Info => "info",
        Light => "light",
        Dark => "dark",
    }
}

keyword_enum! {
    /// Button colour, including the `link` style.
    ButtonVariant {
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Danger => "danger",
        Warning => "warning",
        Info => "info",
        Light => "light",
        Dark => "dark",
        Link => "link",
    }
}

keyword_enum! {
    /// Background colour utility.
    BgColor {
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Danger => "danger",
        Warning => "warning",
        Info => "info",
        Light => "light",
        Dark => "dark",
        Body => "body",
        White => "white",
        Transparent => "transparent",
    }
}

keyword_enum! {
    /// Text colour utility.
    TextColor {
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Danger => "danger",
        Warning => "warning",
        Info => "info",
        Light => "light",
        Dark => "dark",
        Body => "body",
        Muted => "muted",
        White => "white",
        Black50 => "black-50",
        White50 => "white-50",
    }
}

keyword_enum! {
    Size { Sm => "sm", Lg => "lg" }
}

keyword_enum! {
    /// Close button colour for dark backgrounds.
    CloseVariant { White => "white" }
}

keyword_enum! {
    ModalSize { Sm => "sm", Lg => "lg", Xl => "xl" }
}

keyword_enum! {
    /// Responsive breakpoint.
    Breakpoint {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "xxl",
    }
}

keyword_enum! {
    NavVariant { Tabs => "tabs", Pills => "pills", Underline => "underline" }
}

keyword_enum! {
    /// Colour mode written to `data-bs-theme`.
    Theme { Dark => "dark", Light => "light" }
}

keyword_enum! {
    NavbarPlacement {
        FixedTop => "fixed-top",
        FixedBottom => "fixed-bottom",
        StickyTop => "sticky-top",
        StickyBottom => "sticky-bottom",
    }
}

keyword_enum! {
    OffcanvasPlacement {
        Start => "start",
        End => "end",
        Top => "top",
        Bottom => "bottom",
    }
}

keyword_enum! {
    DropdownDirection {
        Down => "down",
        Up => "up",
        End => "end",
        Start => "start",
    }
}

keyword_enum! {
    Align { Start => "start", End => "end" }
}

keyword_enum! {
    HeadingLevel {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
    }
}

keyword_enum! {
    /// Tag for components that render either a button or an anchor.
    ButtonTag { Button => "button", A => "a" }
}

keyword_enum! {
    ButtonType { Button => "button", Submit => "submit", Reset => "reset" }
}

keyword_enum! {
    ToggleType { Checkbox => "checkbox", Radio => "radio" }
}

keyword_enum! {
    OverlayPlacement {
        Auto => "auto",
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

keyword_enum! {
    Trigger {
        Click => "click",
        Hover => "hover",
        Focus => "focus",
        Manual => "manual",
    }
}

keyword_enum! {
    PlaceholderAnimation { Glow => "glow", Wave => "wave" }
}

keyword_enum! {
    NavTag { Nav => "nav", Ul => "ul" }
}

keyword_enum! {
    NavItemTag { Li => "li", Div => "div" }
}

keyword_enum! {
    ListGroupTag { Ul => "ul", Ol => "ol", Div => "div" }
}

keyword_enum! {
    ListGroupItemTag { Li => "li", A => "a", Button => "button", Div => "div" }
}

keyword_enum! {
    BrandTag { A => "a", Span => "span" }
}

keyword_enum! {
    TextAlign { Start => "start", Center => "center", End => "end" }
}

keyword_enum! {
    CardImgPosition { Top => "top", Bottom => "bottom" }
}

keyword_enum! {
    /// Input kind for a form check; `switch` is a checkbox styled as a toggle.
    FormCheckType { Checkbox => "checkbox", Radio => "radio", Switch => "switch" }
}

keyword_enum! {
    AutoWidth { Auto => "auto" }
}

macro_rules! default_variant {
    ($($name:ident => $variant:ident),+ $(,)?) => {
        $(impl Default for $name {
            fn default() -> Self {
                Self::$variant
            }
        })+
    };
}

default_variant! {
    Variant => Primary,
    ButtonVariant => Primary,
    NavVariant => Tabs,
    OffcanvasPlacement => Start,
    DropdownDirection => Down,
    ButtonTag => Button,
    ButtonType => Button,
    ToggleType => Checkbox,
    OverlayPlacement => Top,
    NavTag => Nav,
    NavItemTag => Li,
    ListGroupTag => Ul,
    ListGroupItemTag => Li,
    FormCheckType => Checkbox,
    BrandTag => A,
}

/// `true` for the unqualified behaviour, or a breakpoint for the responsive
/// variant. `false` is treated as absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Responsive {
    Flag(bool),
    Breakpoint(Breakpoint),
}

impl Responsive {
    /// Class for this value: `base` or `base-{bp}{suffix}`.
    #[must_use]
    pub fn class(self, base: &str, suffix: &str) -> Option<String> {
        match self {
            Self::Flag(false) => None,
            Self::Flag(true) => Some(base.to_owned()),
            Self::Breakpoint(bp) => Some(format!("{base}-{bp}{suffix}")),
        }
    }
}

keyword_enum! {
    Fluid { Fluid => "fluid" }
}

keyword_enum! {
    /// The `static` backdrop that ignores clicks.
    StaticBackdrop { Static => "static" }
}

keyword_enum! {
    /// Outside-click mode for `data-bs-auto-close`.
    AutoCloseMode { Inside => "inside", Outside => "outside" }
}

keyword_enum! {
    PausePolicy { Hover => "hover" }
}

/// Navbar inner container: `true` → `container`, `fluid` → `container-fluid`,
/// breakpoint → `container-{bp}`, `false` → no container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NavbarContainer {
    Flag(bool),
    Fluid(Fluid),
    Breakpoint(Breakpoint),
}

impl Default for NavbarContainer {
    fn default() -> Self {
        Self::Fluid(Fluid::Fluid)
    }
}

impl NavbarContainer {
    #[must_use]
    pub fn class(self) -> Option<Cow<'static, str>> {
        match self {
            Self::Flag(false) => None,
            Self::Flag(true) => Some(Cow::Borrowed("container")),
            Self::Fluid(_) => Some(Cow::Borrowed("container-fluid")),
            Self::Breakpoint(bp) => Some(Cow::Owned(format!("container-{bp}"))),
        }
    }
}

/// Page container width: `false` → `container`, `true` or `fluid` →
/// `container-fluid`, breakpoint → `container-{bp}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContainerFluid {
    Flag(bool),
    Fluid(Fluid),
    Breakpoint(Breakpoint),
}

impl Default for ContainerFluid {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl ContainerFluid {
    #[must_use]
    pub fn class(self) -> Cow<'static, str> {
        match self {
            Self::Flag(false) => Cow::Borrowed("container"),
            Self::Flag(true) | Self::Fluid(_) => Cow::Borrowed("container-fluid"),
            Self::Breakpoint(bp) => Cow::Owned(format!("container-{bp}")),
        }
    }
}

/// Grid column span: a number of columns or `auto`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColSize {
    Span(u8),
    Auto(AutoWidth),
}

impl fmt::Display for ColSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Span(n) => write!(f, "{n}"),
            Self::Auto(auto) => f.write_str(auto.as_str()),
        }
    }
}

/// Backdrop behaviour for modals and offcanvas panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Backdrop {
    Flag(bool),
    Static(StaticBackdrop),
}

impl Backdrop {
    /// Value for `data-bs-backdrop`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flag(true) => "true",
            Self::Flag(false) => "false",
            Self::Static(_) => "static",
        }
    }
}

/// Dropdown auto-close behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AutoClose {
    Flag(bool),
    Mode(AutoCloseMode),
}

impl AutoClose {
    /// Value for `data-bs-auto-close`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flag(true) => "true",
            Self::Flag(false) => "false",
            Self::Mode(mode) => mode.as_str(),
        }
    }
}

/// Carousel autoplay: `true` → `carousel`, `false` → off, or a raw value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Ride {
    Flag(bool),
    Value(String),
}

impl Default for Ride {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl Ride {
    /// Value for `data-bs-ride`, or `None` when autoplay is off.
    #[must_use]
    pub fn attr(&self) -> Option<&str> {
        match self {
            Self::Flag(false) => None,
            Self::Flag(true) => Some("carousel"),
            Self::Value(value) => Some(value),
        }
    }
}

/// Carousel hover behaviour: `hover` pauses, `false` keeps cycling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Pause {
    Flag(bool),
    Policy(PausePolicy),
}

impl Default for Pause {
    fn default() -> Self {
        Self::Policy(PausePolicy::Hover)
    }
}

impl Pause {
    /// Value for `data-bs-pause`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flag(true) | Self::Policy(_) => "hover",
            Self::Flag(false) => "false",
        }
    }
}

/// Error returned for an invalid HTML tag name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tag name: '{0}'")]
pub struct InvalidTagName(String);

/// Validated HTML tag name for components with a free-form `as` option.
///
/// # Example
///
/// ```
/// use bs5_components::TagName;
///
/// let tag = TagName::try_from("section".to_owned()).unwrap();
/// assert_eq!(tag.as_str(), "section");
/// assert!(TagName::try_from("div onclick=x".to_owned()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct TagName(Cow<'static, str>);

impl TagName {
    /// Tag name known at compile time.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TagName {
    type Error = InvalidTagName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
        if valid {
            Ok(Self(Cow::Owned(value)))
        } else {
            Err(InvalidTagName(value))
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip_through_serde() {
        let placement: NavbarPlacement = serde_json::from_str(r#""sticky-top""#).unwrap();
        assert_eq!(placement, NavbarPlacement::StickyTop);
        assert_eq!(placement.as_str(), "sticky-top");
    }

    #[test]
    fn test_col_size_accepts_number_or_auto() {
        let sizes: Vec<ColSize> = serde_json::from_str(r#"[6, "auto"]"#).unwrap();
        assert_eq!(sizes, vec![ColSize::Span(6), ColSize::Auto(AutoWidth::Auto)]);
        assert_eq!(sizes[0].to_string(), "6");
        assert_eq!(sizes[1].to_string(), "auto");
        assert!(serde_json::from_str::<ColSize>(r#""wide""#).is_err());
    }

    #[test]
    fn test_container_fluid_classes() {
        let values: Vec<ContainerFluid> =
            serde_json::from_str(r#"[false, true, "fluid", "md"]"#).unwrap();
        let classes: Vec<_> = values.into_iter().map(ContainerFluid::class).collect();
        assert_eq!(classes, ["container", "container-fluid", "container-fluid", "container-md"]);
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        assert!(serde_json::from_str::<Variant>(r#""purple""#).is_err());
    }

    #[test]
    fn test_responsive_classes() {
        assert_eq!(Responsive::Flag(false).class("modal-fullscreen", "-down"), None);
        assert_eq!(
            Responsive::Flag(true).class("modal-fullscreen", "-down"),
            Some("modal-fullscreen".to_owned())
        );
        assert_eq!(
            Responsive::Breakpoint(Breakpoint::Md).class("modal-fullscreen", "-down"),
            Some("modal-fullscreen-md-down".to_owned())
        );
    }

    #[test]
    fn test_navbar_container_variants() {
        let parse = |s: &str| serde_json::from_str::<NavbarContainer>(s).unwrap();
        assert_eq!(parse("true").class().as_deref(), Some("container"));
        assert_eq!(parse("false").class(), None);
        assert_eq!(parse(r#""fluid""#).class().as_deref(), Some("container-fluid"));
        assert_eq!(parse(r#""lg""#).class().as_deref(), Some("container-lg"));
        assert_eq!(NavbarContainer::default().class().as_deref(), Some("container-fluid"));
    }

    #[test]
    fn test_backdrop_and_auto_close_values() {
        let backdrop: Backdrop = serde_json::from_str(r#""static""#).unwrap();
        assert_eq!(backdrop.as_str(), "static");
        let auto_close: AutoClose = serde_json::from_str("false").unwrap();
        assert_eq!(auto_close.as_str(), "false");
        let auto_close: AutoClose = serde_json::from_str(r#""outside""#).unwrap();
        assert_eq!(auto_close.as_str(), "outside");
    }

    #[test]
    fn test_ride_values() {
        assert_eq!(Ride::default().attr(), None);
        assert_eq!(Ride::Flag(true).attr(), Some("carousel"));
        assert_eq!(Ride::Value("true".to_owned()).attr(), Some("true"));
    }

    #[test]
    fn test_pause_values() {
        assert_eq!(Pause::default().as_str(), "hover");
        let pause: Pause = serde_json::from_str("false").unwrap();
        assert_eq!(pause.as_str(), "false");
    }

    #[test]
    fn test_tag_name_validation() {
        assert!(TagName::try_from("h5".to_owned()).is_ok());
        assert!(TagName::try_from("my-element".to_owned()).is_ok());
        assert!(TagName::try_from(String::new()).is_err());
        assert!(TagName::try_from("5h".to_owned()).is_err());
        assert!(serde_json::from_str::<TagName>(r#""<script>""#).is_err());
    }
}
