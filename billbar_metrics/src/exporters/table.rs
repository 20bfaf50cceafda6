use crate::aggregator::AggregationResult;
use billbar_core::TimeWindow;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChargeRow {
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Charge (USD)")]
    charge: String,
}

/// Terminal rendering for interactive use.
pub struct TableExporter;

impl TableExporter {
    pub fn format(window: &TimeWindow, result: &AggregationResult) -> String {
        let rows: Vec<ChargeRow> = result
            .iter()
            .map(|c| ChargeRow {
                service: c.label.clone(),
                charge: format!("{:.2}", c.sum),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());

        let total = match result.total() {
            Some(total) => format!("${:.2}", total).green().bold().to_string(),
            None => "$-".yellow().to_string(),
        };

        format!(
            "{} {}\n{} - {}\n{}\n",
            "Estimated charges:".bold().cyan(),
            total,
            window.start().format("%Y-%m-%d"),
            window.end().format("%Y-%m-%d"),
            table
        )
    }
}
