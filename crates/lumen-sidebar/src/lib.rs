//! Blog sidebar rendering.
//!
//! The sidebar is a pure function of the current location and the site
//! metadata. It renders the author block, a heading that depends on whether
//! the page is the home page, the subtitle, a navigation menu, social links
//! and a copyright line as an HTML fragment.
//!
//! The menu and link-list regions are rendered by collaborators behind the
//! [`MenuRenderer`] and [`LinksRenderer`] traits. [`Menu`] and [`Links`] are
//! the default implementations.
//!
//! # Quick Start
//!
//! ```
//! use lumen_sidebar::{Author, Location, Sidebar, SiteMetadata};
//!
//! let metadata = SiteMetadata {
//!     author: Author::new("Chad Lumley"),
//!     subtitle: "Engineer".to_owned(),
//!     copyright: "© 2020".to_owned(),
//!     menu: Vec::new(),
//! };
//!
//! let sidebar = Sidebar::new("/NewPixelMe.png");
//! let html = sidebar.render(Some(&Location::new("/")), &metadata);
//! assert!(html.contains("<h1 class=\"sidebar__author-title\">"));
//! ```

mod error;
mod escape;
mod links;
mod menu;
mod model;
mod sidebar;

pub use error::RenderError;
pub use escape::escape;
pub use links::{Links, LinksRenderer};
pub use menu::{Menu, MenuRenderer};
pub use model::{
    Author, Location, MenuItem, PageData, ROOT_PATH, SidebarProps, SiteData, SiteMetadata,
    resolve_pathname,
};
pub use sidebar::{FIRST_NAME, JOB_TITLE, LAST_NAME, Sidebar};
