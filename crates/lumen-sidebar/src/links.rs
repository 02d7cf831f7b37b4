//! Social and contact links region.

use std::fmt::Write;

use crate::{Author, escape};

/// Renders the sidebar's link-list region from the author's contact handles.
pub trait LinksRenderer {
    /// Append the link-list markup for `author` to `html`.
    fn render(&self, html: &mut String, author: &Author);
}

/// Default link list: social profiles, direct contact, then the feed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Links;

/// A single icon link.
struct LinkEntry {
    href: String,
    icon: &'static str,
    external: bool,
}

impl LinksRenderer for Links {
    fn render(&self, html: &mut String, author: &Author) {
        let social = [
            entry(author.twitter.as_deref(), "icon-twitter", true, |h| {
                format!("https://www.twitter.com/{h}")
            }),
            entry(author.github.as_deref(), "icon-github", true, |h| {
                format!("https://www.github.com/{h}")
            }),
            entry(author.vk.as_deref(), "icon-vkontakte", true, |h| {
                format!("https://www.vk.com/{h}")
            }),
        ];
        let contact = [
            entry(author.email.as_deref(), "icon-mail", false, |h| {
                format!("mailto:{h}")
            }),
            entry(author.telegram.as_deref(), "icon-paper-plane", false, |h| {
                format!("telegram:{h}")
            }),
        ];
        let feed = [entry(author.rss.as_deref(), "icon-rss", false, str::to_owned)];

        html.push_str("<div class=\"links\">\n");
        render_group(html, &social);
        render_group(html, &contact);
        render_group(html, &feed);
        html.push_str("</div>\n");
    }
}

/// Build a link entry, skipping absent or empty handles.
fn entry(
    handle: Option<&str>,
    icon: &'static str,
    external: bool,
    href: impl Fn(&str) -> String,
) -> Option<LinkEntry> {
    handle.filter(|h| !h.is_empty()).map(|h| LinkEntry {
        href: href(h),
        icon,
        external,
    })
}

fn render_group(html: &mut String, entries: &[Option<LinkEntry>]) {
    if entries.iter().all(Option::is_none) {
        return;
    }
    html.push_str("<ul class=\"links__list\">\n");
    for link in entries.iter().flatten() {
        let target = if link.external {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<li class=\"links__list-item\"><a href=\"{}\"{}><i class=\"{}\"></i></a></li>",
            escape(&link.href),
            target,
            link.icon,
        );
    }
    html.push_str("</ul>\n");
}
