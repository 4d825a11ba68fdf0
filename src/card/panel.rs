//! SVG stats panel generation.
//!
//! One fixed template parameterized by title and aggregated counters. The
//! panel is generated with [maud](https://maud.lambda.xyz/), so every
//! interpolated value is escaped — a mod title full of angle brackets ends up
//! as text nodes, never as markup.

use super::layout::CardLayout;
use super::stats::{StatTotals, format_count};
use maud::html;

const FONT_STACK: &str = "Verdana, Geneva, sans-serif";

const BACKGROUND: &str = "#1b2838";
const TITLE_COLOR: &str = "#ffffff";
const VALUE_COLOR: &str = "#66c0f4";
const LABEL_COLOR: &str = "#8f98a0";

const CORNER_RADIUS: u32 = 4;
const SIDE_PAD: u32 = 14;
const TITLE_BASELINE: u32 = 30;
const VALUE_BASELINE: u32 = 64;
const LABEL_BASELINE: u32 = 82;

/// Titles longer than this are cut with an ellipsis; the panel has a fixed
/// width and SVG text does not wrap.
const TITLE_MAX_CHARS: usize = 60;

/// Render the fixed stats panel template for one card.
pub fn render_panel(layout: &CardLayout, title: &str, totals: &StatTotals) -> String {
    let width = layout.info_width();
    let height = layout.height;
    let column = width.saturating_sub(2 * SIDE_PAD) / 3;

    let rows = [
        ("Views", format_count(totals.views)),
        ("Downloads", format_count(totals.downloads)),
        ("Favorites", format_count(totals.favorites)),
    ];

    html! {
        svg xmlns="http://www.w3.org/2000/svg" width=(width) height=(height)
            viewBox={ "0 0 " (width) " " (height) } {
            rect width="100%" height="100%" rx=(CORNER_RADIUS) fill=(BACKGROUND) {}
            text x=(SIDE_PAD) y=(TITLE_BASELINE) font-family=(FONT_STACK)
                font-size="16" font-weight="bold" fill=(TITLE_COLOR) {
                (truncate_title(title))
            }
            @for (i, (label, value)) in rows.iter().enumerate() {
                @let x = SIDE_PAD + i as u32 * column;
                text x=(x) y=(VALUE_BASELINE) font-family=(FONT_STACK)
                    font-size="18" fill=(VALUE_COLOR) {
                    (value)
                }
                text x=(x) y=(LABEL_BASELINE) font-family=(FONT_STACK)
                    font-size="11" letter-spacing="1" fill=(LABEL_COLOR) {
                    (label.to_uppercase())
                }
            }
        }
    }
    .into_string()
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_MAX_CHARS {
        return title.to_string();
    }
    let mut cut: String = title.chars().take(TITLE_MAX_CHARS - 1).collect();
    cut.push('…');
    cut
}
