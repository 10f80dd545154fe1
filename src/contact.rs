// SPDX-License-Identifier: MPL-2.0
//! Seller contact links.

use crate::catalog::format::format_price;
use crate::catalog::Car;
use crate::error::{Error, Result};
use std::process::{Command, Stdio};

const MESSAGING_BASE_URL: &str = "https://wa.me/";

/// Builds a messaging deep link for `phone` with `message` pre-filled.
///
/// Only ASCII digits of the phone number are kept, so `+971 50 123 4567`
/// becomes `971501234567`.
pub fn messaging_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{MESSAGING_BASE_URL}{digits}?text={}",
        urlencoding::encode(message)
    )
}

/// Pre-filled message sent to the seller of `car`.
pub fn inquiry_message(car: &Car) -> String {
    format!(
        "Hi, I'm interested in your {} {} {} listed for {}",
        car.make,
        car.model,
        car.year,
        format_price(car.price, &car.currency)
    )
}

/// Messaging link for `car`, when the listing has a number.
pub fn car_inquiry_link(car: &Car) -> Option<String> {
    car.contact_number()
        .map(|number| messaging_link(number, &inquiry_message(car)))
}

/// Hands `url` to the platform opener without waiting for it.
pub fn open_link(url: &str) -> Result<()> {
    let mut command = opener_command(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match command.spawn() {
        Ok(_) => {
            tracing::debug!(url, "opened external link");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(url, error = %err, "failed to open external link");
            Err(Error::Launch(err.to_string()))
        }
    }
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    // Empty title argument, otherwise `start` treats a quoted URL as the title.
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_keeps_only_digits_and_encodes_message() {
        let link = messaging_link("+971 50 123 4567", "Hi there");
        assert!(link.contains("971501234567"));
        assert!(link.contains("Hi%20there"));
        assert_eq!(link, "https://wa.me/971501234567?text=Hi%20there");
    }

    #[test]
    fn link_encodes_reserved_characters() {
        let link = messaging_link("050-1234", "Price: AED 85,000 & more?");
        assert_eq!(
            link,
            "https://wa.me/0501234?text=Price%3A%20AED%2085%2C000%20%26%20more%3F"
        );
    }

    #[test]
    fn inquiry_mentions_car_and_price() {
        let car = Car {
            make: "Toyota".into(),
            model: "Camry".into(),
            year: 2019,
            price: 85_000.0,
            currency: "AED".into(),
            ..Car::default()
        };
        assert_eq!(
            inquiry_message(&car),
            "Hi, I'm interested in your Toyota Camry 2019 listed for AED 85,000"
        );
    }

    #[test]
    fn inquiry_link_requires_number() {
        let mut car = Car {
            make: "Kia".into(),
            ..Car::default()
        };
        assert!(car_inquiry_link(&car).is_none());

        car.whatsapp_number = Some("+971 55 000 1111".into());
        let link = car_inquiry_link(&car).expect("link for car with number");
        assert!(link.starts_with("https://wa.me/971550001111?text=Hi%2C%20I%27m"));
    }
}
