//! Page Rendering
//!
//! Server-side HTML for the single page, built with Maud. Sections are
//! composed top to bottom in [`render_page`]; every effect is rendered from
//! the descriptors in `core` so the first frame matches what the script
//! computes on the client.

pub mod assets;
pub mod layout;
pub mod sections;

use maud::{html, Markup, DOCTYPE};
use serde::Serialize;

use crate::core::{ContactFields, GalleryState, Notification};
use crate::utils::constants::{ANCHOR_GALLERY, WILDCARD_CATEGORY};

/// What the contact section shows
#[derive(Debug, Clone, Default)]
pub struct ContactView {
    pub fields: ContactFields,
    pub notification: Option<Notification>,
    pub error: Option<String>,
}

/// Everything a page render depends on
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub gallery: GalleryState<'static>,
    pub contact: ContactView,
    pub year: i32,
}

/// Full document
pub fn render_page(view: &PageView<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (layout::head(view.title))
            body {
                (layout::navbar())
                main {
                    (sections::hero())
                    (sections::about())
                    (sections::achievements())
                    (sections::projects())
                    (sections::gallery(&view.gallery))
                    (sections::services())
                    (sections::contact(&view.contact))
                }
                (layout::footer(view.year))
                (layout::scroll_to_top())
                @if let Some(notification) = &view.contact.notification {
                    (layout::toast(notification))
                }
                script { (maud::PreEscaped(assets::EFFECTS_SCRIPT)) }
            }
        }
    }
}

#[derive(Serialize)]
struct GalleryLink<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<u32>,
}

/// Link to the gallery with a category and optional open image
pub fn gallery_href(category: &str, image: Option<u32>) -> String {
    let link = GalleryLink {
        category: (category != WILDCARD_CATEGORY).then_some(category),
        image,
    };
    match serde_urlencoded::to_string(&link) {
        Ok(query) if !query.is_empty() => format!("/?{}#{}", query, ANCHOR_GALLERY),
        _ => format!("/#{}", ANCHOR_GALLERY),
    }
}

/// Effect parameters embedded as `data-*` JSON for the client script
pub(crate) fn data_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::SITE_TITLE;
    use crate::utils::content::GALLERY;

    fn view() -> PageView<'static> {
        PageView {
            title: SITE_TITLE,
            gallery: GalleryState::new(GALLERY),
            contact: ContactView::default(),
            year: 2026,
        }
    }

    #[test]
    fn test_page_has_title_and_all_anchors_in_order() {
        let html = render_page(&view()).into_string();
        assert!(html.contains(&format!("<title>{}</title>", SITE_TITLE)));

        let mut cursor = 0;
        for anchor in crate::utils::constants::SECTION_ORDER {
            let needle = format!("id=\"{}\"", anchor);
            let pos = html[cursor..]
                .find(&needle)
                .unwrap_or_else(|| panic!("section {} missing or out of order", anchor));
            cursor += pos;
        }
    }

    #[test]
    fn test_gallery_href() {
        assert_eq!(gallery_href("all", None), "/#gallery");
        assert_eq!(gallery_href("projects", None), "/?category=projects#gallery");
        assert_eq!(
            gallery_href("awards", Some(3)),
            "/?category=awards&image=3#gallery"
        );
        assert_eq!(gallery_href("all", Some(1)), "/?image=1#gallery");
    }

    #[test]
    fn test_gallery_href_encodes_category() {
        assert_eq!(
            gallery_href("big awards", None),
            "/?category=big+awards#gallery"
        );
        assert_eq!(
            gallery_href("a&b", Some(2)),
            "/?category=a%26b&image=2#gallery"
        );
    }

    #[test]
    fn test_toast_only_after_send() {
        let html = render_page(&view()).into_string();
        assert!(!html.contains("Message Sent!"));

        let mut sent = view();
        sent.contact.notification = Some(Notification::message_sent());
        let html = render_page(&sent).into_string();
        assert!(html.contains("Message Sent!"));
    }
}
