//! Navigation menu region.

use std::fmt::Write;

use crate::{MenuItem, escape};

/// Renders the sidebar's navigation region from the site menu.
pub trait MenuRenderer {
    /// Append the menu markup for `menu` to `html`.
    fn render(&self, html: &mut String, menu: &[MenuItem]);
}

/// Default menu: one link per item, in order.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    active_path: Option<String>,
}

impl Menu {
    /// Create a menu with no active item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the item whose path equals `path` as active.
    #[must_use]
    pub fn with_active_path(mut self, path: impl Into<String>) -> Self {
        self.active_path = Some(path.into());
        self
    }
}

impl MenuRenderer for Menu {
    fn render(&self, html: &mut String, menu: &[MenuItem]) {
        html.push_str("<nav class=\"menu\">\n<ul class=\"menu__list\">\n");
        for item in menu {
            let active = self.active_path.as_deref() == Some(item.path.as_str());
            let classes = if active {
                "menu__list-item-link menu__list-item-link--active"
            } else {
                "menu__list-item-link"
            };
            let _ = writeln!(
                html,
                "<li class=\"menu__list-item\"><a href=\"{}\" class=\"{}\">{}</a></li>",
                escape(&item.path),
                classes,
                escape(&item.label),
            );
        }
        html.push_str("</ul>\n</nav>\n");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem {
                label: "Articles".to_owned(),
                path: "/".to_owned(),
            },
            MenuItem {
                label: "About me".to_owned(),
                path: "/pages/about".to_owned(),
            },
        ]
    }

    #[test]
    fn render_menu_items_in_order() {
        let mut html = String::new();
        Menu::new().render(&mut html, &items());

        assert_eq!(
            html,
            "<nav class=\"menu\">\n<ul class=\"menu__list\">\n\
             <li class=\"menu__list-item\">\
             <a href=\"/\" class=\"menu__list-item-link\">Articles</a></li>\n\
             <li class=\"menu__list-item\">\
             <a href=\"/pages/about\" class=\"menu__list-item-link\">About me</a></li>\n\
             </ul>\n</nav>\n"
        );
    }

    #[test]
    fn render_menu_marks_active_item() {
        let mut html = String::new();
        Menu::new()
            .with_active_path("/pages/about")
            .render(&mut html, &items());

        assert!(html.contains(
            "<a href=\"/pages/about\" class=\"menu__list-item-link menu__list-item-link--active\">"
        ));
        assert!(html.contains("<a href=\"/\" class=\"menu__list-item-link\">"));
    }

    #[test]
    fn render_empty_menu() {
        let mut html = String::new();
        Menu::new().render(&mut html, &[]);
        assert_eq!(html, "<nav class=\"menu\">\n<ul class=\"menu__list\">\n</ul>\n</nav>\n");
    }

    #[test]
    fn render_menu_escapes_labels() {
        let mut html = String::new();
        let menu = vec![MenuItem {
            label: "Q&A".to_owned(),
            path: "/q&a".to_owned(),
        }];
        Menu::new().render(&mut html, &menu);
        assert!(html.contains("<a href=\"/q&amp;a\" class=\"menu__list-item-link\">Q&amp;A</a>"));
    }
}
