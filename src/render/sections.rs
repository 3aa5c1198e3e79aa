//! Content sections, top to bottom

use maud::{html, Markup};

use super::{data_json, gallery_href, ContactView};
use crate::core::{
    ContactField, GalleryState, ParallaxEffect, RevealSchedule, ScrollSample, ScrollSpin,
    TiltEffect, TypedText,
};
use crate::models::types::{Achievement, GalleryImage, Project};
use crate::utils::constants::{
    ANCHOR_ABOUT, ANCHOR_ACHIEVEMENTS, ANCHOR_CONTACT, ANCHOR_GALLERY, ANCHOR_HOME,
    ANCHOR_PROJECTS, ANCHOR_SERVICES, SCROLL_SPIN_DEG_PER_PX,
};
use crate::utils::content::{
    ABOUT_PARAGRAPHS, ABOUT_ROLES, ACHIEVEMENTS, CONTACT_CHANNELS, HERO, PROJECTS, SERVICES,
    TECH_STACK,
};

/// Viewport height assumed for the server-rendered parallax frame
const MOUNT_VIEWPORT_PX: f64 = 900.0;

fn section_header(title: &str, lead: Option<&str>) -> Markup {
    html! {
        div .section-header .reveal style=(RevealSchedule::SECTION_HEADER.style(0)) {
            h2 .section-heading { (title) }
            @if let Some(lead) = lead {
                p .lead { (lead) }
            }
        }
    }
}

pub fn hero() -> Markup {
    let typed = TypedText::new(HERO.greeting);
    html! {
        section #(ANCHOR_HOME) .hero {
            div .blob .blob-a {}
            div .blob .blob-b {}
            div .container .hero-grid {
                div .hero-copy .reveal style=(RevealSchedule::SECTION_HEADER.style(0)) {
                    p .greeting {
                        span .typed style=(typed.style()) { (HERO.greeting) }
                    }
                    h1 { (HERO.name) }
                    h2 .headline {
                        (HERO.headline) " " span .accent { (HERO.highlight) }
                    }
                    p .pitch { (HERO.pitch) }
                    div .cta-row {
                        a .button .primary href={ "#" (ANCHOR_PROJECTS) } { "View Projects →" }
                        a .button .outline href={ "#" (ANCHOR_CONTACT) } { "Contact Me" }
                        a .button .secondary href={ "#" (ANCHOR_CONTACT) } { "Hire Me" }
                    }
                }
                div .hero-portrait {
                    div .media {
                        div .placeholder { "PS" }
                        img src=(HERO.portrait.url()) alt=(HERO.name) onerror="this.remove()";
                    }
                    div .badge-float { "🚀" }
                }
            }
        }
    }
}

pub fn about() -> Markup {
    let spin = ScrollSpin::default();
    html! {
        section #(ANCHOR_ABOUT) .muted {
            div .container {
                (section_header("About Me", None))
                div .two-col {
                    div .cube-frame data-spin=(SCROLL_SPIN_DEG_PER_PX)
                        style={ "transform:" (spin.current().transform()) } {
                        span .cube-mark { "PS" }
                        span .badge-float { "🚀" }
                    }
                    div .about-copy {
                        h3 { (HERO.name) }
                        div .roles {
                            @for role in ABOUT_ROLES {
                                span .pill .outline { (role) }
                            }
                        }
                        @for paragraph in ABOUT_PARAGRAPHS {
                            p { (paragraph) }
                        }
                        h4 { "Tech Stack" }
                        div .badges {
                            @for (i, tech) in TECH_STACK.iter().enumerate() {
                                span .pill .reveal style=(RevealSchedule::TECH_BADGES.style(i)) { (tech) }
                            }
                        }
                        a .link-arrow href={ "#" (ANCHOR_CONTACT) } { "Let's Connect →" }
                    }
                }
            }
        }
    }
}

pub fn achievements() -> Markup {
    let parallax = ParallaxEffect::default();
    let frames = parallax.frames(ScrollSample::below_fold(MOUNT_VIEWPORT_PX), ACHIEVEMENTS.len());
    html! {
        section #(ANCHOR_ACHIEVEMENTS) data-parallax=(data_json(&parallax)) {
            div .container {
                (section_header(
                    "Achievements",
                    Some("A track record of excellence in hackathons and tech competitions, showcasing problem-solving skills and innovation."),
                ))
                div .grid {
                    @for (i, (achievement, frame)) in ACHIEVEMENTS.iter().zip(frames.iter()).enumerate() {
                        div .parallax-item data-parallax-index=(i) style=(frame.css_vars()) {
                            (achievement_card(achievement, i))
                        }
                    }
                }
                p .more { "And many more achievements..." }
            }
        }
    }
}

fn achievement_card(achievement: &Achievement, index: usize) -> Markup {
    html! {
        div .card .tilt .reveal data-tilt=(data_json(&TiltEffect::ACHIEVEMENT_CARD))
            style=(RevealSchedule::ACHIEVEMENT_GRID.style(index)) {
            div .card-stripe {}
            div .card-body {
                span .pill { (achievement.title) }
                h3 { (achievement.event) }
                p { (achievement.description) }
                span .trophy { "🏆" }
            }
        }
    }
}

pub fn projects() -> Markup {
    html! {
        section #(ANCHOR_PROJECTS) .muted {
            div .container {
                (section_header(
                    "Projects",
                    Some("Explore my portfolio of web applications and projects that showcase my technical skills and problem-solving abilities."),
                ))
                div .grid {
                    @for (i, project) in PROJECTS.iter().enumerate() {
                        (project_card(project, i))
                    }
                }
            }
        }
    }
}

fn project_links(project: &Project) -> Markup {
    html! {
        @if let Some(github) = project.github {
            a .button .outline .small href=(github) target="_blank" rel="noopener noreferrer" { "GitHub" }
        }
        @if let Some(live) = project.live {
            a .button .primary .small href=(live) target="_blank" rel="noopener noreferrer" { "Live Demo" }
        }
    }
}

fn project_card(project: &Project, index: usize) -> Markup {
    html! {
        div .card .tilt .reveal data-tilt=(data_json(&TiltEffect::PROJECT_CARD))
            style=(RevealSchedule::PROJECT_GRID.style(index)) {
            div .media .project-media {
                div .placeholder { (project.initial()) }
                @if let Some(image) = project.image {
                    img src=(image.url()) alt=(project.title) loading="lazy" onerror="this.remove()";
                }
                div .overlay { (project_links(project)) }
            }
            div .card-body {
                h3 { (project.title) }
                p { (project.description) }
                div .badges {
                    @for (i, tech) in project.tech_stack.iter().enumerate() {
                        span .pill .outline .reveal style=(RevealSchedule::PROJECT_BADGES.style(i)) { (tech) }
                    }
                }
                div .card-actions { (project_links(project)) }
            }
        }
    }
}

pub fn gallery(state: &GalleryState<'static>) -> Markup {
    let visible = state.visible();
    let active = state.filter().as_str();
    html! {
        section #(ANCHOR_GALLERY) .muted {
            div .container {
                (section_header(
                    "Gallery",
                    Some("A visual journey through my achievements and experiences in tech competitions and events."),
                ))
                nav .filters aria-label="Gallery categories" {
                    @for category in state.categories() {
                        a .button .small .primary[state.is_active(category)] .outline[!state.is_active(category)]
                            href=(gallery_href(category, None)) { (category) }
                    }
                }
                @if visible.is_empty() {
                    p .empty { "No gallery items found for this category." }
                } @else {
                    div .grid {
                        @for (i, image) in visible.iter().enumerate() {
                            (gallery_item(image, active, i))
                        }
                    }
                }
            }
            @if let Some(selected) = state.selected() {
                (gallery_modal(selected, active))
            }
        }
    }
}

fn gallery_item(image: &GalleryImage, active: &str, index: usize) -> Markup {
    html! {
        a .gallery-item .tilt .reveal href=(gallery_href(active, Some(image.id)))
            data-tilt=(data_json(&TiltEffect::GALLERY_ITEM))
            style=(RevealSchedule::GALLERY_GRID.style(index)) {
            div .media {
                div .placeholder { (image.id) }
                img src=(image.thumbnail.url()) alt=(image.title) loading="lazy" onerror="this.remove()";
            }
            div .caption {
                h3 { (image.title) }
                p { (image.description) }
            }
        }
    }
}

fn gallery_modal(image: &GalleryImage, active: &str) -> Markup {
    let close = gallery_href(active, None);
    html! {
        div .modal role="dialog" aria-modal="true" aria-label=(image.title) {
            a .modal-backdrop href=(close) aria-label="Close" {}
            div .modal-panel {
                div .media .modal-media {
                    div .placeholder { (image.id) }
                    img src=(image.thumbnail.url()) alt=(image.title) onerror="this.remove()";
                }
                div .modal-body {
                    h3 { (image.title) }
                    p { (image.description) }
                    div .modal-footer {
                        span .pill { (image.category) }
                        a .button .primary href=(close) { "Close" }
                    }
                }
            }
        }
    }
}

pub fn services() -> Markup {
    html! {
        section #(ANCHOR_SERVICES) .muted {
            div .container {
                (section_header(
                    "Services I Offer",
                    Some("Professional services tailored to meet your development needs and help you achieve your digital goals."),
                ))
                div .grid {
                    @for (i, service) in SERVICES.iter().enumerate() {
                        div .card .service .reveal style=(RevealSchedule::SERVICE_GRID.style(i)) {
                            div .service-icon { (service.icon) }
                            h3 { (service.title) }
                            p { (service.description) }
                        }
                    }
                }
                div .center {
                    a .button .primary href={ "#" (ANCHOR_CONTACT) } { "Discuss Your Project →" }
                }
            }
        }
    }
}

pub fn contact(view: &ContactView) -> Markup {
    html! {
        section #(ANCHOR_CONTACT) {
            div .container {
                (section_header(
                    "Get In Touch",
                    Some("Have a project in mind or want to explore collaboration opportunities? Reach out using any of these channels."),
                ))
                div .two-col {
                    div .card {
                        div .card-body {
                            h3 { "Contact Information" }
                            ul .channels {
                                @for channel in CONTACT_CHANNELS {
                                    li {
                                        span .channel-icon { (channel.icon) }
                                        div {
                                            h4 { (channel.title) }
                                            a href=(channel.link) target="_blank" rel="noopener noreferrer" { (channel.value) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div .card {
                        div .card-body {
                            h3 { "Send a Message" }
                            @if let Some(error) = &view.error {
                                p .form-error role="alert" { (error) }
                            }
                            form #contact-form method="post" action="/contact" {
                                label for=(ContactField::Name.as_str()) { "Your Name" }
                                input #name name="name" type="text" required placeholder="John Doe"
                                    value=(view.fields.name);
                                label for=(ContactField::Email.as_str()) { "Your Email" }
                                input #email name="email" type="email" required placeholder="john@example.com"
                                    value=(view.fields.email);
                                label for=(ContactField::Message.as_str()) { "Your Message" }
                                textarea #message name="message" rows="5" required placeholder="How can I help you?" {
                                    (view.fields.message)
                                }
                                button .button .primary .wide type="submit" { "Send Message" }
                            }
                        }
                    }
                }
            }
        }
    }
}
