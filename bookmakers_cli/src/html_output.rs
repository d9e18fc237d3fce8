//! HTML fragment rendering for the bookmakers board.
//!
//! Rows are first built as view models with their conditional blocks
//! resolved, then written as markup through quick-xml so text and
//! attribute escaping is never hand-rolled.

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use bookmakers_api::types::Bookmaker;
use bookmakers_api::Renderer;

type HtmlWriter = Writer<Cursor<Vec<u8>>>;

/// Number of filled star glyphs for a rating, on half-open thresholds.
/// Out-of-range ratings fall through the same buckets, so anything above
/// 4.5 renders 5 filled and anything at or below 0.5 renders none.
pub fn stars_of(rating: f64) -> u8 {
    if rating > 4.5 {
        5
    } else if rating > 3.5 {
        4
    } else if rating > 2.5 {
        3
    } else if rating > 1.5 {
        2
    } else if rating > 0.5 {
        1
    } else {
        0
    }
}

/// Badge block of a row: CSS class modifier plus label text.
struct BadgeView {
    modifier: String,
    label: String,
}

/// View model for one rendered row. The optional blocks are already
/// boolean-guarded here; the writer below only walks the structure.
struct Row {
    logo: String,
    verified: bool,
    rating: f64,
    stars_filled: u8,
    reviews_count: u64,
    badge: Option<BadgeView>,
    bonus: Option<String>,
    internal_link: String,
    external_link: String,
}

fn build_rows(entries: &[Bookmaker]) -> Vec<Row> {
    entries
        .iter()
        .map(|bk| Row {
            logo: bk.logo.clone(),
            verified: bk.verified,
            rating: bk.rating,
            stars_filled: stars_of(bk.rating),
            reviews_count: bk.reviews_count,
            badge: bk.badge.as_ref().filter(|b| !b.is_empty()).map(|b| BadgeView {
                modifier: b.clone(),
                label: bk.badge_name.clone().unwrap_or_default(),
            }),
            bonus: bk
                .bonus
                .as_ref()
                .filter(|b| b.is_displayable())
                .map(|b| b.to_string()),
            internal_link: bk.internal_link.clone(),
            external_link: bk.external_link.clone(),
        })
        .collect()
}

fn write_img(
    writer: &mut HtmlWriter,
    attrs: &[(&str, &str)],
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Empty(BytesStart::new("img").with_attributes(attrs.iter().copied())))
}

fn write_text_element(
    writer: &mut HtmlWriter,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(
        BytesStart::new(tag).with_attributes([("class", class)]),
    ))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))
}

fn write_stars(writer: &mut HtmlWriter, row: &Row) -> Result<(), quick_xml::Error> {
    let label = format!("Rating {} out of 5", row.rating);
    writer.write_event(Event::Start(BytesStart::new("div").with_attributes([
        ("class", "bookmakers__stars"),
        ("aria-label", label.as_str()),
    ])))?;
    for _ in 0..row.stars_filled {
        write_img(
            writer,
            &[
                ("class", "bookmakers__star bookmakers__star_filled"),
                ("src", "img/icons/star-filled.svg"),
                ("alt", ""),
                ("aria-hidden", "true"),
                ("width", "16"),
                ("height", "16"),
            ],
        )?;
    }
    for _ in row.stars_filled..5 {
        write_img(
            writer,
            &[
                ("class", "bookmakers__star bookmakers__star_empty"),
                ("src", "img/icons/star-empty.svg"),
                ("alt", ""),
                ("aria-hidden", "true"),
                ("width", "16"),
                ("height", "16"),
            ],
        )?;
    }
    writer.write_event(Event::End(BytesEnd::new("div")))
}

fn write_row(writer: &mut HtmlWriter, row: &Row) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(
        BytesStart::new("li").with_attributes([("class", "bookmakers__row")]),
    ))?;

    writer.write_event(Event::Start(
        BytesStart::new("div").with_attributes([("class", "bookmakers__company")]),
    ))?;
    write_img(
        writer,
        &[
            ("class", "bookmakers__logo"),
            ("src", row.logo.as_str()),
            ("alt", "Bookmaker logo"),
            ("width", "115"),
            ("height", "20"),
        ],
    )?;
    if row.verified {
        write_img(
            writer,
            &[
                ("class", "bookmakers__verified"),
                ("src", "img/icons/verified.svg"),
                ("alt", "Verified"),
                ("width", "16"),
                ("height", "16"),
            ],
        )?;
    }
    writer.write_event(Event::End(BytesEnd::new("div")))?;

    writer.write_event(Event::Start(BytesStart::new("a").with_attributes([
        ("class", "bookmakers__rating"),
        ("href", "#"),
    ])))?;
    write_stars(writer, row)?;
    write_text_element(writer, "p", "bookmakers__score", &row.rating.to_string())?;
    writer.write_event(Event::End(BytesEnd::new("a")))?;

    writer.write_event(Event::Start(
        BytesStart::new("div").with_attributes([("class", "bookmakers__reviews")]),
    ))?;
    write_img(
        writer,
        &[
            ("class", "bookmakers__chats"),
            ("src", "img/icons/chat.svg"),
            ("aria-hidden", "true"),
            ("width", "16"),
            ("height", "16"),
        ],
    )?;
    write_text_element(
        writer,
        "p",
        "bookmakers__reviews-count",
        &row.reviews_count.to_string(),
    )?;
    writer.write_event(Event::End(BytesEnd::new("div")))?;

    writer.write_event(Event::Start(
        BytesStart::new("div").with_attributes([("class", "bookmakers__bonus")]),
    ))?;
    if let Some(badge) = &row.badge {
        let class = format!("bookmakers__badge bookmakers__badge_{}", badge.modifier);
        write_text_element(writer, "div", &class, &badge.label)?;
    }
    if let Some(bonus) = &row.bonus {
        write_img(
            writer,
            &[
                ("class", "bookmakers__gift"),
                ("src", "img/icons/gift.svg"),
                ("aria-hidden", "true"),
                ("width", "16"),
                ("height", "16"),
            ],
        )?;
        write_text_element(writer, "p", "bookmakers__amount", bonus)?;
    }
    writer.write_event(Event::End(BytesEnd::new("div")))?;

    writer.write_event(Event::Start(
        BytesStart::new("div").with_attributes([("class", "bookmakers__actions")]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("a").with_attributes([
        ("class", "bookmakers__button bookmakers__button_review"),
        ("href", row.internal_link.as_str()),
        ("target", "_blank"),
    ])))?;
    writer.write_event(Event::Text(BytesText::new("Review")))?;
    writer.write_event(Event::End(BytesEnd::new("a")))?;
    writer.write_event(Event::Start(BytesStart::new("a").with_attributes([
        ("class", "bookmakers__button bookmakers__button_site"),
        ("href", row.external_link.as_str()),
        ("target", "_blank"),
    ])))?;
    writer.write_event(Event::Text(BytesText::new("Site")))?;
    writer.write_event(Event::End(BytesEnd::new("a")))?;
    writer.write_event(Event::End(BytesEnd::new("div")))?;

    writer.write_event(Event::End(BytesEnd::new("li")))
}

fn into_string(writer: HtmlWriter) -> String {
    let buf = writer.into_inner().into_inner();
    String::from_utf8(buf).expect("valid utf8")
}

/// Renders the replacement fragment for the board container: one `<li>`
/// row per entry, in the order given.
pub fn bookmakers_to_html(entries: &[Bookmaker]) -> String {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    for row in build_rows(entries) {
        write_row(&mut writer, &row).expect("write row");
    }
    into_string(writer)
}

/// Renders the single error row shown on any load failure.
pub fn error_row_to_html(message: &str) -> String {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let text = format!("⚠ {}", message);
    writer
        .write_event(Event::Start(BytesStart::new("li").with_attributes([
            ("class", "bookmakers__row bookmakers__row_error"),
            ("style", "color:red; padding:10px; list-style:none;"),
        ])))
        .expect("write error row start");
    writer
        .write_event(Event::Text(BytesText::new(&text)))
        .expect("write error row text");
    writer
        .write_event(Event::End(BytesEnd::new("li")))
        .expect("write error row end");
    into_string(writer)
}

/// The fixed output container. Every write swaps the whole fragment, so
/// repeated renders and error displays are idempotent.
#[derive(Default)]
pub struct Container {
    html: String,
}

impl Container {
    pub fn replace(&mut self, html: String) {
        self.html = html;
    }

    pub fn contents(&self) -> &str {
        &self.html
    }
}

/// [`Renderer`] writing HTML fragments into a [`Container`].
#[derive(Default)]
pub struct HtmlRenderer {
    container: Container,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, entries: &[Bookmaker]) {
        self.container.replace(bookmakers_to_html(entries));
    }

    fn show_error(&mut self, message: &str) {
        self.container.replace(error_row_to_html(message));
    }
}
