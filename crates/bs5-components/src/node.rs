//! Component tree and dispatch.
//!
//! A document is a list of [`Node`]s. Text nodes are escaped; element nodes
//! carry a typed option struct selected by the `component` field.

use std::fmt::{Display, Write};

use serde::Deserialize;

use crate::components::{
    Accordion, AccordionBody, AccordionButton, AccordionHeader, AccordionItem, Alert,
    AlertHeading, AlertLink, Badge, Breadcrumb, BreadcrumbItem, Button, Card, CardBody,
    CardFooter, CardHeader, CardImg, CardImgOverlay, CardSubtitle, CardText, CardTitle, Carousel,
    CarouselCaption, CarouselIndicator, CarouselItem, CloseButton, Col, Collapse, CollapseToggle,
    Container, Dropdown, DropdownButton, DropdownDivider, DropdownHeader, DropdownItem,
    DropdownItemText, DropdownMenu, DropdownToggle, Figure, FigureCaption, FigureImage,
    FloatingLabel, Form, FormCheck, FormControl, FormFloating, FormGroup, FormLabel, FormRange,
    FormSelect, FormText, FormTextarea, Image, InputGroup, InputGroupCheckbox, InputGroupRadio,
    InputGroupText, ListGroup, ListGroupItem, Modal, ModalBody, ModalFooter, ModalHeader, ModalTitle, ModalToggle, Nav, NavDropdown,
    NavItem, NavLink, Navbar, NavbarBrand, NavbarCollapse, NavbarNav, NavbarText,
    NavbarToggler, Offcanvas, OffcanvasBody, OffcanvasHeader, OffcanvasTitle, OffcanvasToggle,
    PageItem, PageLink, Pagination, PaginationEllipsis, PaginationFirst, PaginationItem,
    PaginationLast, PaginationNext, PaginationPrev, Placeholder, PlaceholderButton, Popover,
    Row, SplitButton, Tab, TabContainer, TabContent, TabPane, Tabs, ToggleButton,
    ToggleButtonGroup, Tooltip,
};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::html::escape_html;

/// A renderable component.
pub trait Component {
    /// Name used in documents and error messages.
    const NAME: &'static str;

    /// Append this component's markup to `out`.
    fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError>;
}

/// A node of the component tree.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Plain text, escaped on output.
    Text(String),
    /// A component.
    Element(Box<Element>),
}

impl Node {
    /// Text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn render(&self, ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        match self {
            Self::Text(text) => {
                out.push_str(&escape_html(text));
                Ok(())
            }
            Self::Element(element) => element.render(ctx, out),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Raw markup inserted without escaping.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Html {
    pub html: String,
}

impl Html {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl Component for Html {
    const NAME: &'static str = "Html";

    fn render(&self, _ctx: &mut RenderContext, out: &mut String) -> Result<(), RenderError> {
        out.push_str(&self.html);
        Ok(())
    }
}

macro_rules! elements {
    ($($name:ident),+ $(,)?) => {
        /// Any component, tagged by its name in documents.
        #[derive(Clone, Debug, Deserialize)]
        #[serde(tag = "component")]
        pub enum Element {
            $($name($name)),+
        }

        impl Element {
            /// Component name.
            #[must_use]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$name(_) => <$name as Component>::NAME),+
                }
            }

            pub fn render(
                &self,
                ctx: &mut RenderContext,
                out: &mut String,
            ) -> Result<(), RenderError> {
                match self {
                    $(Self::$name(component) => component.render(ctx, out)),+
                }
            }
        }

        /// Names of all registered components.
        pub const COMPONENT_NAMES: &[&str] = &[$(<$name as Component>::NAME),+];

        $(impl From<$name> for Node {
            fn from(component: $name) -> Self {
                Self::Element(Box::new(Element::$name(component)))
            }
        })+
    };
}

elements! {
    Accordion,
    AccordionItem,
    AccordionHeader,
    AccordionButton,
    AccordionBody,
    Alert,
    AlertLink,
    AlertHeading,
    Badge,
    Breadcrumb,
    BreadcrumbItem,
    Button,
    CloseButton,
    Card,
    CardHeader,
    CardBody,
    CardFooter,
    CardImg,
    CardImgOverlay,
    CardTitle,
    CardSubtitle,
    CardText,
    Carousel,
    CarouselItem,
    CarouselCaption,
    CarouselIndicator,
    Collapse,
    CollapseToggle,
    Dropdown,
    DropdownToggle,
    DropdownMenu,
    DropdownItem,
    DropdownDivider,
    DropdownHeader,
    DropdownItemText,
    DropdownButton,
    SplitButton,
    Figure,
    FigureImage,
    FigureCaption,
    FormRange,
    Image,
    InputGroup,
    InputGroupText,
    InputGroupRadio,
    InputGroupCheckbox,
    FloatingLabel,
    Form,
    FormGroup,
    FormLabel,
    FormControl,
    FormSelect,
    FormTextarea,
    FormCheck,
    FormText,
    FormFloating,
    Container,
    Row,
    Col,
    ListGroup,
    ListGroupItem,
    Modal,
    ModalHeader,
    ModalBody,
    ModalFooter,
    ModalTitle,
    ModalToggle,
    Nav,
    NavItem,
    NavLink,
    NavDropdown,
    Navbar,
    NavbarBrand,
    NavbarToggler,
    NavbarCollapse,
    NavbarNav,
    NavbarText,
    Offcanvas,
    OffcanvasHeader,
    OffcanvasBody,
    OffcanvasTitle,
    OffcanvasToggle,
    Pagination,
    PaginationItem,
    PageItem,
    PageLink,
    PaginationFirst,
    PaginationPrev,
    PaginationNext,
    PaginationLast,
    PaginationEllipsis,
    Placeholder,
    PlaceholderButton,
    Popover,
    Tooltip,
    Tabs,
    Tab,
    TabContainer,
    TabContent,
    TabPane,
    ToggleButtonGroup,
    ToggleButton,
    Html,
}

/// Render `children` in document order.
pub fn render_children(
    children: &[Node],
    ctx: &mut RenderContext,
    out: &mut String,
) -> Result<(), RenderError> {
    for child in children {
        child.render(ctx, out)?;
    }
    Ok(())
}

/// Render `nodes` into a new string.
///
/// # Example
///
/// ```
/// use bs5_components::{render, Badge, Node, RenderContext};
///
/// let badge = Badge { children: vec![Node::text("New")], ..Badge::default() };
/// let html = render(&[badge.into()], &mut RenderContext::new()).unwrap();
/// assert_eq!(html, r#"<span class="badge text-bg-primary">New</span>"#);
/// ```
pub fn render(nodes: &[Node], ctx: &mut RenderContext) -> Result<String, RenderError> {
    let mut out = String::new();
    render_children(nodes, ctx, &mut out)?;
    Ok(out)
}

/// Write `<tag attrs>children</tag>`.
pub(crate) fn render_element(
    tag: &str,
    attrs: impl Display,
    children: &[Node],
    ctx: &mut RenderContext,
    out: &mut String,
) -> Result<(), RenderError> {
    let _ = write!(out, "<{tag}{attrs}>");
    render_children(children, ctx, out)?;
    let _ = write!(out, "</{tag}>");
    Ok(())
}
