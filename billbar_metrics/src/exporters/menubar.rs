//! Plain-text block for BitBar/xbar style menu-bar hosts.
//!
//! The first line is the status item; everything after the first `---`
//! shows up in the drop-down menu.

use crate::aggregator::AggregationResult;
use billbar_core::TimeWindow;

pub const DEFAULT_LABEL_WIDTH: usize = 24;
pub const BILLING_CONSOLE_URL: &str = "https://console.aws.amazon.com/billing/home";

#[derive(Debug, Clone)]
pub struct MenuBarOptions {
    /// Base64 image shown beside the headline.
    pub icon: Option<String>,
    pub label_width: usize,
    /// Font for the per-service lines, so the padding lines up.
    pub font: Option<String>,
    pub footer_text: String,
    pub footer_href: String,
}

impl Default for MenuBarOptions {
    fn default() -> Self {
        Self {
            icon: None,
            label_width: DEFAULT_LABEL_WIDTH,
            font: Some("Menlo".to_string()),
            footer_text: "Open Billing Dashboard".to_string(),
            footer_href: BILLING_CONSOLE_URL.to_string(),
        }
    }
}

pub struct MenuBarExporter;

impl MenuBarExporter {
    pub fn format(
        window: &TimeWindow,
        result: &AggregationResult,
        options: &MenuBarOptions,
    ) -> String {
        let headline = match result.total() {
            Some(total) => format!("${:.2}", total),
            None => "$-".to_string(),
        };

        let mut out = match &options.icon {
            Some(icon) => format!("{} | image={}\n", headline, icon),
            None => format!("{}\n", headline),
        };

        out.push_str("---\n");
        out.push_str(&format!(
            "{} - {}\n",
            window.start().format("%Y-%m-%d"),
            window.end().format("%Y-%m-%d")
        ));

        for charge in result.iter() {
            let line = format!(
                "{:<width$}${:.2}",
                charge.label,
                charge.sum,
                width = options.label_width
            );
            let line = match &options.font {
                Some(font) => format!("{} | font={}\n", line, font),
                None => format!("{}\n", line),
            };
            out.push_str(&line);
        }

        out.push_str("---\n");
        out.push_str(&format!(
            "{} | href={}\n",
            options.footer_text, options.footer_href
        ));
        out
    }
}
