// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are routed according to the active
//! screen; the detail screen adds the carousel's frame ticks.

use super::{Message, Screen};
use crate::ui::{detail, gallery};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

/// Creates the event subscription for the current screen.
///
/// - Home: window resizes only
/// - Car detail: arrow keys drive the carousel, Escape goes home
/// - Not found: Escape goes home
pub fn create_event_subscription(screen: &Screen) -> Subscription<Message> {
    match screen {
        Screen::Home => event::listen_with(home_events),
        Screen::CarDetail(_) => event::listen_with(detail_events),
        Screen::NotFound(_) => event::listen_with(not_found_events),
    }
}

/// Frame ticks for the carousel while it animates.
pub fn create_detail_subscription(detail: Option<&detail::State>) -> Subscription<Message> {
    detail.map_or_else(Subscription::none, |state| {
        state.subscription().map(Message::Detail)
    })
}

fn home_events(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    resized(&event)
}

fn detail_events(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if let Some(message) = resized(&event) {
        return Some(message);
    }
    if status == event::Status::Captured {
        return None;
    }

    let gallery_message = |message| Message::Detail(detail::Message::Gallery(message));
    match pressed_key(&event)? {
        Key::Named(Named::ArrowLeft) => Some(gallery_message(gallery::Message::Previous)),
        Key::Named(Named::ArrowRight) => Some(gallery_message(gallery::Message::Next)),
        Key::Named(Named::Escape) => Some(Message::GoHome),
        _ => None,
    }
}

fn not_found_events(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if let Some(message) = resized(&event) {
        return Some(message);
    }
    if status == event::Status::Captured {
        return None;
    }
    match pressed_key(&event)? {
        Key::Named(Named::Escape) => Some(Message::GoHome),
        _ => None,
    }
}

fn resized(event: &Event) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        _ => None,
    }
}

fn pressed_key(event: &Event) -> Option<&Key> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Location, Modifiers};
    use iced::Size;

    fn key_press(named: Named) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: key::Physical::Code(key::Code::ArrowLeft),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    fn window_id() -> window::Id {
        window::Id::unique()
    }

    #[test]
    fn arrows_drive_the_carousel_on_detail() {
        let left = detail_events(key_press(Named::ArrowLeft), event::Status::Ignored, window_id());
        assert!(matches!(
            left,
            Some(Message::Detail(detail::Message::Gallery(gallery::Message::Previous)))
        ));

        let right = detail_events(key_press(Named::ArrowRight), event::Status::Ignored, window_id());
        assert!(matches!(
            right,
            Some(Message::Detail(detail::Message::Gallery(gallery::Message::Next)))
        ));
    }

    #[test]
    fn captured_keys_are_ignored() {
        let result = detail_events(key_press(Named::ArrowLeft), event::Status::Captured, window_id());
        assert!(result.is_none());
    }

    #[test]
    fn escape_goes_home_from_car_screens() {
        assert!(matches!(
            detail_events(key_press(Named::Escape), event::Status::Ignored, window_id()),
            Some(Message::GoHome)
        ));
        assert!(matches!(
            not_found_events(key_press(Named::Escape), event::Status::Ignored, window_id()),
            Some(Message::GoHome)
        ));
        assert!(home_events(key_press(Named::Escape), event::Status::Ignored, window_id()).is_none());
    }

    #[test]
    fn resize_is_reported_everywhere() {
        let event = Event::Window(window::Event::Resized(Size::new(1024.0, 768.0)));
        assert!(matches!(
            home_events(event.clone(), event::Status::Ignored, window_id()),
            Some(Message::WindowResized(size)) if size.width == 1024.0
        ));
        assert!(matches!(
            detail_events(event, event::Status::Captured, window_id()),
            Some(Message::WindowResized(_))
        ));
    }
}
