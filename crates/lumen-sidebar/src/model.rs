//! Sidebar input model.
//!
//! Field names follow the host page context (`siteMetadata`, `pathname`), so
//! the same types decode both the page-context JSON and `lumen.toml`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::RenderError;

/// The site's home route.
pub const ROOT_PATH: &str = "/";

/// Blog author, shared by the heading and the link-list renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Full name, used for the photo alt text and the home-page heading.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vk: Option<String>,
    /// Feed URL, linked verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rss: Option<String>,
}

impl Author {
    /// Create an author with a name and no contact handles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Navigation menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

/// Site-wide metadata consumed by the sidebar.
///
/// All fields are required. A missing field is a decode error, not something
/// the renderer recovers from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub author: Author,
    pub subtitle: String,
    pub copyright: String,
    pub menu: Vec<MenuItem>,
}

/// Current routing location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Current path. A non-string value decodes as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pathname: Option<String>,
}

impl Location {
    /// Create a location for the given path.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: Some(pathname.into()),
        }
    }
}

/// Resolve the current path, defaulting to [`ROOT_PATH`] when the location or
/// its pathname is absent.
pub fn resolve_pathname(location: Option<&Location>) -> &str {
    location
        .and_then(|loc| loc.pathname.as_deref())
        .unwrap_or(ROOT_PATH)
}

/// `data.site` in the page context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(rename = "siteMetadata")]
    pub site_metadata: SiteMetadata,
}

/// `data` in the page context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub site: SiteData,
}

/// Props handed to the sidebar by the host page.
///
/// ```json
/// {
///   "location": { "pathname": "/posts/abc" },
///   "data": { "site": { "siteMetadata": { ... } } }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarProps {
    /// Routing location. A value that is not an object decodes as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_location",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Location>,
    pub data: PageData,
}

impl SidebarProps {
    /// Decode page props from JSON.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Props` if the JSON is malformed or a required
    /// metadata field is missing.
    pub fn from_json(content: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Site metadata carried by these props.
    pub fn metadata(&self) -> &SiteMetadata {
        &self.data.site.site_metadata
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_location<'de, D>(deserializer: D) -> Result<Option<Location>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(value @ serde_json::Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PROPS: &str = r#"{
        "location": { "pathname": "/posts/abc" },
        "data": { "site": { "siteMetadata": {
            "author": { "name": "Chad Lumley", "twitter": "chadlumley" },
            "subtitle": "Engineer",
            "copyright": "© 2020",
            "menu": [{ "label": "Articles", "path": "/" }]
        } } }
    }"#;

    #[test]
    fn test_resolve_pathname_present() {
        let location = Location::new("/posts/abc");
        assert_eq!(resolve_pathname(Some(&location)), "/posts/abc");
    }

    #[test]
    fn test_resolve_pathname_defaults_to_root() {
        assert_eq!(resolve_pathname(None), "/");
        assert_eq!(resolve_pathname(Some(&Location::default())), "/");
    }

    #[test]
    fn test_resolve_pathname_keeps_empty_string() {
        let location = Location::new("");
        assert_eq!(resolve_pathname(Some(&location)), "");
    }

    #[test]
    fn test_props_from_json() {
        let props = SidebarProps::from_json(PROPS).unwrap();

        assert_eq!(props.location, Some(Location::new("/posts/abc")));
        let metadata = props.metadata();
        assert_eq!(metadata.author.name, "Chad Lumley");
        assert_eq!(metadata.author.twitter.as_deref(), Some("chadlumley"));
        assert_eq!(metadata.author.github, None);
        assert_eq!(metadata.subtitle, "Engineer");
        assert_eq!(metadata.copyright, "© 2020");
        assert_eq!(
            metadata.menu,
            vec![MenuItem {
                label: "Articles".to_owned(),
                path: "/".to_owned(),
            }]
        );
    }

    #[test]
    fn test_props_without_location() {
        let json = r#"{ "data": { "site": { "siteMetadata": {
            "author": { "name": "A" }, "subtitle": "", "copyright": "", "menu": []
        } } } }"#;
        let props = SidebarProps::from_json(json).unwrap();
        assert_eq!(props.location, None);
    }

    #[test]
    fn test_props_location_without_pathname() {
        let json = r#"{ "location": {}, "data": { "site": { "siteMetadata": {
            "author": { "name": "A" }, "subtitle": "", "copyright": "", "menu": []
        } } } }"#;
        let props = SidebarProps::from_json(json).unwrap();
        assert_eq!(props.location, Some(Location::default()));
    }

    #[test]
    fn test_props_malformed_pathname_is_absent() {
        let json = r#"{ "location": { "pathname": 42 }, "data": { "site": { "siteMetadata": {
            "author": { "name": "A" }, "subtitle": "", "copyright": "", "menu": []
        } } } }"#;
        let props = SidebarProps::from_json(json).unwrap();
        assert_eq!(props.location, Some(Location { pathname: None }));
    }

    #[test]
    fn test_props_malformed_location_is_absent() {
        let json = r#"{ "location": "nowhere", "data": { "site": { "siteMetadata": {
            "author": { "name": "A" }, "subtitle": "", "copyright": "", "menu": []
        } } } }"#;
        let props = SidebarProps::from_json(json).unwrap();
        assert_eq!(props.location, None);
    }

    #[test]
    fn test_props_missing_subtitle_fails() {
        let json = r#"{ "data": { "site": { "siteMetadata": {
            "author": { "name": "A" }, "copyright": "", "menu": []
        } } } }"#;
        let err = SidebarProps::from_json(json).unwrap_err();
        assert!(
            matches!(err, RenderError::Props(_)),
            "Expected RenderError::Props, got {err:?}"
        );
        assert!(err.to_string().contains("subtitle"));
    }

    #[test]
    fn test_props_missing_author_name_fails() {
        let json = r#"{ "data": { "site": { "siteMetadata": {
            "author": {}, "subtitle": "", "copyright": "", "menu": []
        } } } }"#;
        let err = SidebarProps::from_json(json).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_props_missing_menu_fails() {
        let json = r#"{ "data": { "site": { "siteMetadata": {
            "author": { "name": "A" }, "subtitle": "", "copyright": ""
        } } } }"#;
        assert!(SidebarProps::from_json(json).is_err());
    }

    #[test]
    fn test_author_new_has_no_contacts() {
        let author = Author::new("Chad Lumley");
        assert_eq!(author.name, "Chad Lumley");
        assert!(author.email.is_none());
        assert!(author.rss.is_none());
    }
}
