//! Integration tests for the portfolio widgets

use portfolio_site::core::{
    ContactField, ContactFields, ElementRect, FormState, MessageSink, PointerSample, ScrollSample,
};
use portfolio_site::utils::content::GALLERY;
use portfolio_site::{
    ContactDesk, ContactForm, ErrorCode, GalleryState, LoggingInbox, ParallaxEffect, TiltEffect,
    TiltTracker,
};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_every_category_filters_in_order() {
    let mut gallery = GalleryState::new(GALLERY);

    for category in gallery.categories().into_iter().skip(1) {
        gallery.set_category(category).unwrap();
        let visible = gallery.visible();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|image| image.category == category));

        let expected: Vec<u32> = GALLERY
            .iter()
            .filter(|image| image.category == category)
            .map(|image| image.id)
            .collect();
        let ids: Vec<u32> = visible.iter().map(|image| image.id).collect();
        assert_eq!(ids, expected, "order for {}", category);
    }

    gallery.set_category("all").unwrap();
    assert_eq!(gallery.visible().len(), GALLERY.len());
}

#[test]
fn test_modal_open_replace_dismiss() {
    let mut gallery = GalleryState::new(GALLERY);
    assert!(gallery.selected().is_none());

    gallery.select(2).unwrap();
    gallery.select(4).unwrap();
    assert_eq!(gallery.selected().map(|image| image.id), Some(4));

    gallery.dismiss();
    assert!(gallery.selected().is_none());

    let err = gallery.select(42).unwrap_err();
    assert_eq!(err.code, ErrorCode::ApiNotFound);
}

#[test]
fn test_tilt_returns_to_rest_after_leave() {
    let rect = ElementRect::new(10.0, 10.0, 300.0, 200.0);
    for effect in [
        TiltEffect::ACHIEVEMENT_CARD,
        TiltEffect::PROJECT_CARD,
        TiltEffect::GALLERY_ITEM,
    ] {
        let mut tracker = TiltTracker::new(effect);
        assert!(tracker.on_move(rect.center(), rect).rotate_y_deg == 0.0);

        let corner = PointerSample { x: 12.0, y: 205.0 };
        let tilted = tracker.on_move(corner, rect);
        assert!(tilted.rotate_x_deg != 0.0 && tilted.rotate_y_deg != 0.0);

        assert!(tracker.on_leave().is_rest());
        assert!(tracker.current().is_rest());
    }
}

#[test]
fn test_parallax_settles_once_scrolled_in() {
    let effect = ParallaxEffect::default();
    let frames = effect.frames(
        ScrollSample {
            element_top: -200.0,
            viewport_height: 900.0,
        },
        6,
    );
    assert!(frames.iter().all(|frame| frame.opacity == 1.0));
    assert!(frames.iter().all(|frame| frame.translate_y_px == 0.0));
}

struct Discard;

impl MessageSink for Discard {
    fn deliver(&self, _message: &portfolio_site::core::ContactMessage) {}
}

#[tokio::test(start_paused = true)]
async fn test_contact_round_trip_clears_fields() {
    let inbox = Arc::new(LoggingInbox::new(8));
    let desk = ContactDesk::new(Duration::from_millis(1500), inbox.clone());

    let mut form = ContactForm::new();
    form.set_field(ContactField::Name, "Jane");
    form.set_field(ContactField::Email, "jane@example.com");
    form.set_field(ContactField::Message, "Hello");

    let submission = desk.begin(form).unwrap();
    assert_eq!(submission.form().state(), FormState::Submitting);

    let (form, notification) = desk.finish(submission).await.unwrap();
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.fields(), &ContactFields::default());
    assert_eq!(notification.title, "Message Sent!");
    assert_eq!(inbox.len(), 1);
}

#[tokio::test]
async fn test_contact_missing_field_keeps_idle() {
    let desk = ContactDesk::new(Duration::ZERO, Arc::new(Discard));
    let form = ContactForm::with_fields(ContactFields {
        name: "Jane".to_string(),
        email: String::new(),
        message: "Hello".to_string(),
    });

    let (form, err) = desk.begin(form).unwrap_err();
    assert_eq!(err.code, ErrorCode::FormMissingField);
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.fields().name, "Jane");
}
