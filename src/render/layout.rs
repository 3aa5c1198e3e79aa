//! Page chrome: head, navbar, footer, toast

use maud::{html, Markup, PreEscaped};

use super::assets::{HEAD_SCRIPT, STYLES};
use crate::core::{Notification, RevealSchedule};
use crate::utils::constants::{
    ANCHOR_HOME, BRAND_ACCENT, BRAND_NAME, NAVBAR_CONDENSE_THRESHOLD_PX,
};
use crate::utils::content::{HERO, NAV_ITEMS, SOCIAL_LINKS};

pub fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (title) }
            script { (PreEscaped(HEAD_SCRIPT)) }
            style { (PreEscaped(STYLES)) }
        }
    }
}

pub fn navbar() -> Markup {
    let links = RevealSchedule::NAV_LINKS;
    html! {
        header #navbar .navbar data-condense-at=(NAVBAR_CONDENSE_THRESHOLD_PX) {
            div .container .navbar-inner {
                a .brand href={ "#" (ANCHOR_HOME) } {
                    (BRAND_NAME) span .accent { (BRAND_ACCENT) }
                }
                nav .nav-links {
                    @for (i, item) in NAV_ITEMS.iter().enumerate() {
                        a .reveal href=(item.href()) style=(links.style(i)) { (item.name) }
                    }
                }
                details .mobile-menu {
                    summary aria-label="Open menu" { "☰" }
                    nav {
                        @for item in NAV_ITEMS {
                            a href=(item.href()) { (item.name) }
                        }
                    }
                }
            }
        }
    }
}

pub fn footer(year: i32) -> Markup {
    html! {
        footer .footer {
            div .container {
                div .footer-row {
                    p { "© " (year) " " (HERO.name) ". Built with Rust & Maud." }
                    div .socials {
                        @for link in SOCIAL_LINKS {
                            a href=(link.url) target="_blank" rel="noopener noreferrer" aria-label=(link.name) {
                                span .sr-only { (link.name) }
                                span .social-badge { (link.badge()) }
                            }
                        }
                    }
                }
                div .back-to-top {
                    a href={ "#" (ANCHOR_HOME) } aria-label="Back to top" { "Back to Top ↑" }
                }
            }
        }
    }
}

pub fn scroll_to_top() -> Markup {
    html! {
        a #scroll-top .scroll-top href={ "#" (ANCHOR_HOME) } aria-label="Scroll to top" { "↑" }
    }
}

/// One-shot notification
pub fn toast(notification: &Notification) -> Markup {
    html! {
        div .toast role="status" {
            strong { (notification.title) }
            p { (notification.description) }
        }
    }
}
