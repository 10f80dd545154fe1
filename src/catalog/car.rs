// SPDX-License-Identifier: MPL-2.0
//! Car listing record as it appears in the data file.

use serde::{Deserialize, Deserializer, Serialize};

/// One used-car listing.
///
/// String fields the data file omits default to empty so a sparse record
/// still renders. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Car {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub make: String,
    pub make_ar: String,
    pub make_country_name: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub currency: String,
    pub km_driven: f64,
    pub city: String,
    pub country: String,
    pub body_style: String,
    pub body_condition: String,
    pub mechanical_condition: String,
    pub fuel_type: String,
    pub transmission_type: String,
    pub cylinders: String,
    pub seller_type: String,
    pub locale: String,
    pub exterior_color: String,
    /// Seller-provided HTML.
    pub description: String,
    pub picture_title: String,
    pub pictures: Vec<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    pub show_whatsapp_access: String,
}

impl Car {
    /// `"{make} {model} {year}"`, used for image captions and inquiries.
    pub fn display_title(&self) -> String {
        format!("{} {} {}", self.make, self.model, self.year)
    }

    /// Listing title, falling back to [`Self::display_title`] when blank.
    pub fn heading(&self) -> String {
        if self.title.trim().is_empty() {
            self.display_title()
        } else {
            self.title.clone()
        }
    }

    /// First picture, shown on cards.
    pub fn cover_picture(&self) -> Option<&str> {
        self.pictures.first().map(String::as_str)
    }

    /// Messaging number when the listing has a usable one.
    pub fn contact_number(&self) -> Option<&str> {
        self.whatsapp_number
            .as_deref()
            .filter(|number| number.chars().any(|c| c.is_ascii_digit()))
    }
}

/// Accepts `"123"` as well as `123` for the identifier.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}
