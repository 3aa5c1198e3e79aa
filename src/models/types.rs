//! Content record types
//!
//! Plain display records. Every list is defined once in
//! `utils::content` and never mutated.

use serde::Serialize;

use crate::utils::constants::ASSET_PREFIX;

/// Reference to an image under the static asset directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    /// Public URL of the image (`/assets/<path>`)
    pub fn url(&self) -> String {
        format!("{}/{}", ASSET_PREFIX, self.0.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub id: u32,
    pub thumbnail: ImageRef,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub tech_stack: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<&'static str>,
}

impl Project {
    /// Glyph shown when the project has no image
    pub fn initial(&self) -> char {
        self.title.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub event: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

/// Navbar entry pointing at an in-page anchor
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

impl SocialLink {
    /// Single-letter badge rendered in place of an icon font
    pub fn badge(&self) -> String {
        self.icon
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Copy for the hero block
#[derive(Debug, Clone, Serialize)]
pub struct HeroCopy {
    pub greeting: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
    pub highlight: &'static str,
    pub pitch: &'static str,
    pub portrait: ImageRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_uses_asset_prefix() {
        assert_eq!(ImageRef("images/a.jpg").url(), "/assets/images/a.jpg");
        assert_eq!(ImageRef("/images/a.jpg").url(), "/assets/images/a.jpg");
    }

    #[test]
    fn test_project_initial() {
        let project = Project {
            title: "OneShield",
            description: "",
            image: None,
            tech_stack: &[],
            github: None,
            live: None,
        };
        assert_eq!(project.initial(), 'O');
    }

    #[test]
    fn test_social_badge() {
        let link = SocialLink {
            name: "GitHub",
            url: "https://github.com",
            icon: "github",
        };
        assert_eq!(link.badge(), "G");
    }
}
