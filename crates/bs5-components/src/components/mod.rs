//! Bootstrap 5 component catalogue.
//!
//! Every component is a plain option struct implementing
//! [`Component`](crate::Component). Containers hold their `children`;
//! components that need state from an ancestor read it from the
//! [`RenderContext`](crate::RenderContext).

mod accordion;
mod alert;
mod badge;
mod breadcrumb;
mod button;
mod card;
mod carousel;
mod collapse;
mod dropdown;
mod figure;
mod form;
mod layout;
mod list_group;
mod modal;
mod nav;
mod navbar;
mod offcanvas;
mod overlay;
mod pagination;
mod placeholder;
mod tabs;
mod toggle_button;

pub use accordion::{Accordion, AccordionBody, AccordionButton, AccordionHeader, AccordionItem};
pub use alert::{Alert, AlertHeading, AlertLink};
pub use badge::Badge;
pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use button::{Button, CloseButton};
pub use card::{
    Card, CardBody, CardFooter, CardHeader, CardImg, CardImgOverlay, CardSubtitle, CardText,
    CardTitle,
};
pub use carousel::{Carousel, CarouselCaption, CarouselIndicator, CarouselItem};
pub use collapse::{Collapse, CollapseToggle};
pub use dropdown::{
    Dropdown, DropdownButton, DropdownDivider, DropdownHeader, DropdownItem, DropdownItemText,
    DropdownMenu, DropdownToggle, SplitButton,
};
pub use figure::{Figure, FigureCaption, FigureImage, Image};
pub use form::{
    FloatingLabel, Form, FormCheck, FormControl, FormFloating, FormGroup, FormLabel, FormRange,
    FormSelect, FormText, FormTextarea, InputGroup, InputGroupCheckbox, InputGroupRadio,
    InputGroupText,
};
pub use layout::{Col, Container, Row};
pub use list_group::{ListGroup, ListGroupItem};
pub use modal::{Modal, ModalBody, ModalFooter, ModalHeader, ModalTitle, ModalToggle};
pub use nav::{Nav, NavDropdown, NavItem, NavLink};
pub use navbar::{Navbar, NavbarBrand, NavbarCollapse, NavbarNav, NavbarText, NavbarToggler};
pub use offcanvas::{Offcanvas, OffcanvasBody, OffcanvasHeader, OffcanvasTitle, OffcanvasToggle};
pub use overlay::{Popover, Tooltip};
pub use pagination::{
    PageItem, PageLink, Pagination, PaginationEllipsis, PaginationFirst, PaginationItem,
    PaginationLast, PaginationNext, PaginationPrev,
};
pub use placeholder::{Placeholder, PlaceholderButton};
pub use tabs::{Tab, TabContainer, TabContent, TabDescriptor, TabPane, Tabs};
pub use toggle_button::{ToggleButton, ToggleButtonGroup};

/// Serde default for options that are on unless disabled.
pub(crate) fn enabled() -> bool {
    true
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::context::{ComponentIds, IdStrategy, RenderContext};
    use crate::node::{Node, render};

    /// Context with deterministic ids `c1`, `c2`, ...
    pub fn context() -> RenderContext {
        RenderContext::with_ids(ComponentIds::new(IdStrategy::Sequential))
    }

    /// Render a single node with a fresh sequential context.
    pub fn render_one(node: impl Into<Node>) -> String {
        render(&[node.into()], &mut context()).unwrap()
    }

    /// Parse and render a YAML document with a fresh sequential context.
    pub fn render_yaml(yaml: &str) -> String {
        let nodes: Vec<Node> = serde_yaml::from_str(yaml).unwrap();
        render(&nodes, &mut context()).unwrap()
    }

    /// Parse and render a YAML document, returning the render error.
    pub fn render_yaml_err(yaml: &str) -> crate::error::RenderError {
        let nodes: Vec<Node> = serde_yaml::from_str(yaml).unwrap();
        render(&nodes, &mut context()).unwrap_err()
    }
}
