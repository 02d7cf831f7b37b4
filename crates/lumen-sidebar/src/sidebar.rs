//! Sidebar view.
//!
//! Produces the same DOM structure and class names as the theme stylesheet
//! expects (`sidebar`, `sidebar__author`, `showbox`, `loader`, `cloud`).

use std::fmt::Write;

use tracing::debug;

use crate::{
    Links, LinksRenderer, Location, Menu, MenuRenderer, ROOT_PATH, SidebarProps, SiteMetadata,
    escape, resolve_pathname,
};

/// Job caption shown under the author's name on the home page.
pub const JOB_TITLE: &str = "SR. FRONT END ENGINEER";
/// First name shown on every page except home.
pub const FIRST_NAME: &str = "CHAD";
/// Last name shown on every page except home.
pub const LAST_NAME: &str = "LUMLEY";

/// Animated accents around the author photo.
const CLOUDS: &str = "<div class=\"cloud\"></div>\n\
                      <div class=\"cloud\"></div>\n\
                      <div class=\"cloud\"></div>\n\
                      <div class=\"cloud\"></div>\n\
                      <div class=\"cloud\"></div>\n";

/// Blog sidebar.
///
/// Holds only the photo path and the two region renderers; every call to
/// [`Sidebar::render`] is computed from its arguments alone.
#[derive(Clone, Debug)]
pub struct Sidebar<M = Menu, L = Links> {
    photo_src: String,
    menu: M,
    links: L,
}

impl Sidebar {
    /// Create a sidebar with the default menu and link-list renderers.
    pub fn new(photo_src: impl Into<String>) -> Self {
        Self::with_renderers(photo_src, Menu::new(), Links)
    }
}

impl<M: MenuRenderer, L: LinksRenderer> Sidebar<M, L> {
    /// Create a sidebar with custom region renderers.
    pub fn with_renderers(photo_src: impl Into<String>, menu: M, links: L) -> Self {
        Self {
            photo_src: photo_src.into(),
            menu,
            links,
        }
    }

    /// Render the sidebar for `location`.
    ///
    /// An absent location, or one without a pathname, renders as the home page.
    pub fn render(&self, location: Option<&Location>, metadata: &SiteMetadata) -> String {
        let pathname = resolve_pathname(location);
        let is_home_page = pathname == ROOT_PATH;
        debug!(pathname, is_home_page, "Rendering sidebar");

        let mut html = String::with_capacity(2048);
        html.push_str("<div class=\"sidebar\">\n<div class=\"sidebar__inner\">\n");

        html.push_str("<div class=\"sidebar__author\">\n<div>\n");
        self.render_photo(&mut html, &metadata.author.name);
        if is_home_page {
            render_home_title(&mut html, &metadata.author.name);
        } else {
            render_page_title(&mut html);
        }
        let _ = writeln!(
            html,
            "<p class=\"sidebar__author-subtitle\">{}</p>",
            escape(&metadata.subtitle)
        );
        html.push_str("</div>\n</div>\n");

        html.push_str("<div>\n");
        self.menu.render(&mut html, &metadata.menu);
        self.links.render(&mut html, &metadata.author);
        let _ = writeln!(
            html,
            "<p class=\"sidebar__copyright\">{}</p>",
            escape(&metadata.copyright)
        );
        html.push_str("</div>\n");

        html.push_str("</div>\n</div>\n");
        html
    }

    /// Render decoded page props.
    pub fn render_props(&self, props: &SidebarProps) -> String {
        self.render(props.location.as_ref(), props.metadata())
    }

    /// Render the photo link with its cloud accents.
    fn render_photo(&self, html: &mut String, author_name: &str) {
        let _ = writeln!(html, "<a href=\"{ROOT_PATH}\">");
        html.push_str("<div class=\"showbox\">\n<div class=\"loader\">\n");
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\" class=\"sidebar__author-photo\">",
            escape(&self.photo_src),
            escape(author_name),
        );
        html.push_str(CLOUDS);
        html.push_str("</div>\n</div>\n</a>\n");
    }
}

/// Home page heading: full name and job caption.
fn render_home_title(html: &mut String, author_name: &str) {
    html.push_str("<h1 class=\"sidebar__author-title\">\n");
    let _ = writeln!(
        html,
        "<a class=\"sidebar__author-title-link\" href=\"{ROOT_PATH}\">"
    );
    let _ = writeln!(html, "{}", escape(author_name));
    let _ = writeln!(html, "<div class=\"sidebar__author-title-job\">{JOB_TITLE}</div>");
    html.push_str("</a>\n</h1>\n");
}

/// Heading on every other page: the fixed first and last name.
fn render_page_title(html: &mut String) {
    html.push_str("<h2 class=\"sidebar__author-title\">\n");
    let _ = writeln!(
        html,
        "<a class=\"sidebar__author-title-link\" href=\"{ROOT_PATH}\">"
    );
    let _ = writeln!(
        html,
        "<div class=\"sidebar__author-title-first-name\">{FIRST_NAME}</div>"
    );
    let _ = writeln!(
        html,
        "<div class=\"sidebar__author-title-last-name\">{LAST_NAME}</div>"
    );
    html.push_str("</a>\n</h2>\n");
}
