// SPDX-License-Identifier: MPL-2.0
use showroom::catalog::format::{format_mileage, format_price, html_to_text};
use showroom::catalog::Catalog;
use showroom::config::{self, Config};
use showroom::contact;
use showroom::error::Error;
use showroom::i18n::fluent::I18n;
use showroom::media::{self, ImageCache, ImageSource, ImageStatus};
use std::path::PathBuf;
use tempfile::tempdir;

fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

#[tokio::test]
async fn sample_catalog_loads_and_finds_cars_in_both_lists() {
    let catalog = Catalog::load(test_data_dir().join("cars.json"))
        .await
        .expect("sample catalog should load");

    assert_eq!(catalog.listing_count(), 3);
    assert_eq!(catalog.featured_count(), 1);

    let patrol = catalog.find("101").expect("numeric id is matched as text");
    assert_eq!(patrol.display_title(), "Nissan Patrol 2021");
    assert_eq!(format_price(patrol.price, &patrol.currency), "AED 185,000");
    assert_eq!(format_mileage(patrol.km_driven), "42,500");

    let corolla = catalog.find("102").expect("string id");
    assert_eq!(corolla.heading(), "Toyota Corolla 2018");
    assert_eq!(format_mileage(corolla.km_driven), "98,210.25");

    let g63 = catalog.find("201").expect("featured-only car");
    assert!(g63.featured);

    assert!(catalog.find("999").is_none());
}

#[tokio::test]
async fn missing_data_file_is_an_io_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let result = Catalog::load(dir.path().join("absent.json")).await;
    assert!(matches!(result, Err(Error::Io(_))));
}

#[tokio::test]
async fn malformed_data_file_is_a_json_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("cars.json");
    std::fs::write(&path, "{ \"data\": [").expect("failed to write data file");

    let result = Catalog::load(&path).await;
    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test]
async fn local_pictures_resolve_against_the_data_directory() {
    let base = test_data_dir();
    let catalog = Catalog::load(base.join("cars.json"))
        .await
        .expect("sample catalog should load");
    let patrol = catalog.find("101").expect("patrol listed");

    let mut cache = ImageCache::new(8);
    let claimed = cache.claim(patrol.pictures.iter().map(String::as_str));
    assert_eq!(claimed.len(), 2);

    for reference in claimed {
        let source = ImageSource::resolve(&reference, &base).expect("reference resolves");
        assert!(!source.is_remote());
        let result = media::load(source).await;
        assert!(result.is_ok(), "{reference} should load");
        cache.finish(reference, result);
    }

    assert_eq!(cache.status("/images/patrol-front.png"), ImageStatus::Ready);
    assert_eq!(cache.status("/images/patrol-side.png"), ImageStatus::Ready);
}

#[test]
fn description_html_becomes_readable_text() {
    let text = html_to_text(
        "<p>GCC specs &amp; full service history.</p><ul><li>One owner</li><li>Sunroof</li></ul>",
    );
    assert!(text.contains("GCC specs & full service history."));
    assert!(text.contains("One owner"));
    assert!(!text.contains('<'));
}

#[test]
fn inquiry_link_targets_the_seller() {
    let catalog =
        Catalog::from_json(&std::fs::read_to_string(test_data_dir().join("cars.json")).expect("read"))
            .expect("parse");

    let patrol = catalog.find("101").expect("patrol listed");
    let link = contact::car_inquiry_link(patrol).expect("patrol has a number");
    assert!(link.starts_with("https://wa.me/971501234567?text="));
    assert!(link.contains("Nissan%20Patrol%202021"));

    let x5 = catalog.find("103").expect("x5 listed");
    assert!(contact::car_inquiry_link(x5).is_none());
}

#[test]
fn messaging_link_encodes_phone_and_message() {
    let link = contact::messaging_link("+971 50 123 4567", "Hi there");
    assert!(link.contains("971501234567"));
    assert!(link.contains("Hi%20there"));
}

#[test]
fn language_choice_survives_a_config_round_trip() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("ar".to_string());
    config::save_to_path(&config, &path).expect("failed to write config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ar");
    assert!(i18n.is_rtl());

    let english = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(english.current_locale().to_string(), "en-US");
    assert!(!english.is_rtl());
}
