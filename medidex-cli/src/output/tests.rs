//! Formatter tests.

use super::{JsonFormatter, TextFormatter};
use chrono::NaiveDate;
use medidex_core::{DirectoryError, Doctor};
use medidex_store::Theme;

fn sample_doctor() -> Doctor {
    Doctor {
        id: "1".to_string(),
        first_name: "Greta".to_string(),
        last_name: "Houde".to_string(),
        state: "VT".to_string(),
        license_active: true,
        date_of_birth: NaiveDate::from_ymd_opt(1981, 4, 12).unwrap(),
        registered_at: NaiveDate::from_ymd_opt(2009, 8, 30).unwrap(),
    }
}

fn inactive_doctor() -> Doctor {
    Doctor {
        id: "2".to_string(),
        first_name: "Ade".to_string(),
        last_name: "Okafor".to_string(),
        state: "TX".to_string(),
        license_active: false,
        date_of_birth: NaiveDate::from_ymd_opt(1969, 12, 1).unwrap(),
        registered_at: NaiveDate::from_ymd_opt(1997, 5, 22).unwrap(),
    }
}

// ============================================================================
// Text Formatter
// ============================================================================

#[test]
fn card_without_colors_has_no_ansi_codes() {
    let formatter = TextFormatter::new(false, Theme::Light);
    let card = formatter.format_card(&sample_doctor());
    assert!(!card.contains('\x1b'));
    assert!(card.contains("Greta Houde"));
    assert!(card.contains("(VT)"));
    assert!(card.contains("license active"));
    assert!(card.contains("id 1"));
}

#[test]
fn card_with_colors_resets_ansi_state() {
    let formatter = TextFormatter::new(true, Theme::Light);
    let card = formatter.format_card(&sample_doctor());
    assert!(card.contains("\x1b[32m"));
    assert!(card.contains("\x1b[0m"));
}

#[test]
fn dark_theme_uses_bright_palette() {
    let light = TextFormatter::new(true, Theme::Light)
        .format_card(&sample_doctor());
    let dark = TextFormatter::new(true, Theme::Dark)
        .format_card(&sample_doctor());
    assert!(light.contains("\x1b[32m"));
    assert!(dark.contains("\x1b[92m"));
}

#[test]
fn inactive_license_shows_inactive_badge() {
    let formatter = TextFormatter::new(false, Theme::Light);
    let card = formatter.format_card(&inactive_doctor());
    assert!(card.contains("license inactive"));
}

#[test]
fn detail_includes_dates() {
    let formatter = TextFormatter::new(false, Theme::Light);
    let detail = formatter.format_detail(&sample_doctor());
    assert!(detail.contains("1981-04-12"));
    assert!(detail.contains("2009-08-30"));
}

#[test]
fn empty_directory_renders_placeholder() {
    let formatter = TextFormatter::new(false, Theme::Light);
    let out = formatter.format_directory(&[]);
    assert_eq!(out, "No doctors in the directory.\n");
}

#[test]
fn directory_renders_every_card_and_a_count() {
    let formatter = TextFormatter::new(false, Theme::Light);
    let out = formatter.format_directory(&[sample_doctor(), inactive_doctor()]);
    assert!(out.contains("Greta Houde"));
    assert!(out.contains("Ade Okafor"));
    assert!(out.contains("2 practitioner(s)"));
}

// ============================================================================
// JSON Formatter
// ============================================================================

#[test]
fn json_directory_round_trips() {
    let formatter = JsonFormatter::new(false);
    let out = formatter.format_doctors(&[sample_doctor()]).unwrap();
    let back: Vec<Doctor> = serde_json::from_str(&out).unwrap();
    assert_eq!(back, vec![sample_doctor()]);
}

#[test]
fn json_error_carries_display_message_and_status() {
    let formatter = JsonFormatter::new(false);
    let out = formatter
        .format_error(&DirectoryError::from_status(404))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["error"], "Doctors not found");
    assert_eq!(value["status"], 404);
}

#[test]
fn json_error_without_status_serializes_null() {
    let formatter = JsonFormatter::new(false);
    let out = formatter
        .format_error(&DirectoryError::doctor_away())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["error"], "The doctor is away, please try again later.");
    assert!(value["status"].is_null());
}

#[test]
fn pretty_output_is_multiline() {
    let formatter = JsonFormatter::new(true);
    let out = formatter.format_doctor(&sample_doctor()).unwrap();
    assert!(out.contains('\n'));
}
