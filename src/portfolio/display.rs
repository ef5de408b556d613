//! Portfolio display and formatting
//!
//! Renders the summary cards and holdings table to the terminal.
//! Unknown live values (price feed not loaded, or unknown coin id)
//! render as an em-dash rather than zero.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::portfolio::types::{EnrichedHolding, PortfolioSummary};

/// Format a USD amount with two decimal places
pub fn format_usd(value: Decimal) -> String {
    format!("${:.2}", value)
}

/// Format a per-unit price; small-cap coins need more precision
pub fn format_price(value: Decimal) -> String {
    if value.abs() < Decimal::ONE && !value.is_zero() {
        format!("${:.6}", value)
    } else {
        format!("${:.2}", value)
    }
}

/// Format a signed USD amount with an explicit plus for gains
pub fn format_signed_usd(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+${:.2}", value)
    } else {
        format!("-${:.2}", value.abs())
    }
}

/// Format a signed percentage
pub fn format_signed_pct(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

fn paint(text: String, positive: bool) -> String {
    if positive {
        text.bright_green().to_string()
    } else {
        text.bright_red().to_string()
    }
}

/// Render the full portfolio view: header, summary cards, holdings table
pub fn print_portfolio(
    enriched: &[EnrichedHolding],
    summary: &PortfolioSummary,
    last_refreshed: Option<DateTime<Utc>>,
) {
    println!("{}", "═".repeat(90).bright_blue());
    println!("{}", "📊 MY PORTFOLIO".bright_white().bold());
    println!("{}", "═".repeat(90).bright_blue());

    match last_refreshed {
        Some(at) => println!(
            "🔄 Last updated: {}",
            at.format("%Y-%m-%d %H:%M:%S UTC").to_string().bright_cyan()
        ),
        None => println!(
            "🔄 Last updated: {}",
            "never (run 'coinlens refresh')".bright_black()
        ),
    }

    println!("\n{}", "SUMMARY".bright_yellow());
    println!("{}", "─".repeat(50).bright_black());
    println!(
        "💵 Total Invested: {}",
        format_usd(summary.total_invested).bright_white()
    );
    println!(
        "💰 Current Value:  {}",
        format_usd(summary.total_current).bright_white()
    );
    println!(
        "📈 Total P&L:      {} ({})",
        paint(format_signed_usd(summary.total_pnl), summary.is_profit()),
        paint(format_signed_pct(summary.total_pnl_pct), summary.is_profit()),
    );
    println!(
        "🪙 Holdings:       {} unique coins",
        enriched.len().to_string().bright_white()
    );

    println!("\n{}", "HOLDINGS".bright_yellow());
    println!("{}", "─".repeat(90).bright_black());
    println!("{}", holdings_table(enriched));
}

/// Build the holdings table
pub fn holdings_table(enriched: &[EnrichedHolding]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Coin",
            "Symbol",
            "Quantity",
            "Avg Buy Price",
            "Current Price",
            "Invested",
            "Current Value",
            "P&L",
        ]);

    for entry in enriched {
        let positive = entry.is_profit();
        let pnl_cell = match (entry.pnl, entry.pnl_pct) {
            (Some(pnl), Some(pct)) => paint(
                format!("{} ({})", format_signed_usd(pnl), format_signed_pct(pct)),
                positive,
            ),
            (Some(pnl), None) => paint(format_signed_usd(pnl), positive),
            _ => "—".bright_black().to_string(),
        };

        table.add_row(vec![
            Cell::new(&entry.holding.name),
            Cell::new(entry.holding.symbol.to_uppercase()),
            Cell::new(format!("{}", entry.holding.quantity)).set_alignment(CellAlignment::Right),
            Cell::new(format_price(entry.holding.avg_buy_price))
                .set_alignment(CellAlignment::Right),
            Cell::new(
                entry
                    .current_price
                    .map(format_price)
                    .unwrap_or_else(|| "—".to_string()),
            )
            .set_alignment(CellAlignment::Right),
            Cell::new(format_usd(entry.invested_value)).set_alignment(CellAlignment::Right),
            Cell::new(
                entry
                    .current_value
                    .map(format_usd)
                    .unwrap_or_else(|| "—".to_string()),
            )
            .set_alignment(CellAlignment::Right),
            Cell::new(pnl_cell).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Friendly first-run view
pub fn print_empty_state() {
    println!("\n{}", "No holdings yet".bright_white().bold());
    println!(
        "{}",
        "Start tracking your portfolio by adding your first coin:".bright_black()
    );
    println!(
        "  {} {}",
        "coinlens add bitcoin --quantity 0.5 --price 45000".bright_cyan(),
        "(data is saved locally on this device)".bright_black()
    );
}
