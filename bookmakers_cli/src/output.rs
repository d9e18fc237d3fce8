//! Terminal inspection output: table and JSON views of the entries.

use serde::Serialize;
use tabled::{Table, Tabled};

use bookmakers_api::types::Bookmaker;

use crate::html_output::stars_of;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Html,
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct BookmakerRow {
    #[tabled(rename = "Logo")]
    #[serde(rename = "Logo")]
    logo: String,
    #[tabled(rename = "Verified")]
    #[serde(rename = "Verified")]
    verified: bool,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: f64,
    #[tabled(rename = "Stars")]
    #[serde(rename = "Stars")]
    stars: String,
    #[tabled(rename = "Reviews")]
    #[serde(rename = "Reviews")]
    reviews: u64,
    #[tabled(rename = "Bonus")]
    #[serde(rename = "Bonus")]
    bonus: String,
    #[tabled(rename = "Badge")]
    #[serde(rename = "Badge")]
    badge: String,
}

fn build_bookmaker_rows(entries: &[Bookmaker]) -> Vec<BookmakerRow> {
    entries
        .iter()
        .map(|bk| BookmakerRow {
            logo: bk.logo.clone(),
            verified: bk.verified,
            rating: bk.rating,
            stars: format_stars(stars_of(bk.rating)),
            reviews: bk.reviews_count,
            bonus: bk
                .bonus
                .as_ref()
                .filter(|b| b.is_displayable())
                .map(|b| b.to_string())
                .unwrap_or_default(),
            badge: bk.badge_name.clone().unwrap_or_default(),
        })
        .collect()
}

fn format_stars(filled: u8) -> String {
    let filled = filled as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn print_bookmakers_table(entries: &[Bookmaker]) {
    println!("{}", Table::new(build_bookmaker_rows(entries)));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_fixture() -> Vec<Bookmaker> {
        let json_str = include_str!("../../bookmakers_api/tests/fixtures/bookmakers.json");
        serde_json::from_str(json_str).unwrap()
    }

    #[test]
    fn test_format_stars() {
        assert_eq!(format_stars(5), "★★★★★");
        assert_eq!(format_stars(3), "★★★☆☆");
        assert_eq!(format_stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn test_build_rows_mapping() {
        let rows = build_bookmaker_rows(&load_fixture());
        assert_eq!(rows.len(), 4);

        let row = &rows[0];
        assert_eq!(row.logo, "img/logos/betline.svg");
        assert!(row.verified);
        assert_eq!(row.rating, 4.7);
        assert_eq!(row.stars, "★★★★★");
        assert_eq!(row.reviews, 1243);
        assert_eq!(row.bonus, "100$");
        assert_eq!(row.badge, "Top choice");
    }

    #[test]
    fn test_build_rows_hidden_bonus_and_missing_badge() {
        let rows = build_bookmaker_rows(&load_fixture());
        // winplace has a null bonus, oddsy has no badge.
        assert_eq!(rows[2].bonus, "");
        assert_eq!(rows[3].badge, "");
    }

    #[test]
    fn test_build_rows_empty() {
        assert!(build_bookmaker_rows(&[]).is_empty());
    }

    #[test]
    fn test_entries_json_serializable() {
        let entries = load_fixture();
        let val = serde_json::to_value(&entries).unwrap();
        assert!(val.is_array());
        assert_eq!(val.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_table_contains_headers() {
        let table = Table::new(build_bookmaker_rows(&load_fixture())).to_string();
        assert!(table.contains("Logo"));
        assert!(table.contains("Rating"));
        assert!(table.contains("Reviews"));
    }
}
