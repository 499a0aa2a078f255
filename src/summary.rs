//! Summary
//!
//! Console rendering for the cart and listings: a `tabled` line table plus
//! aligned Subtotal / Savings / Total lines, with naira amounts formatted by
//! `rusty_money`.

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, NGN},
};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{CartLine, CartStore},
    products::Product,
};

/// Errors that can occur when rendering a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("IO error")]
    Io,
}

/// A display snapshot of the cart.
///
/// Captures the lines and totals at construction time; later cart mutations
/// do not show through.
#[derive(Debug, Clone)]
pub struct CartSummary {
    lines: Vec<CartLine>,
    subtotal: u64,
    count: u64,
    undiscounted_total: u64,
}

impl CartSummary {
    /// Snapshot the current state of a cart.
    #[must_use]
    pub fn from_cart(cart: &CartStore<'_>) -> Self {
        let lines = cart.lines().to_vec();
        let undiscounted_total = lines.iter().map(CartLine::undiscounted_amount).sum();

        Self {
            lines,
            subtotal: cart.subtotal(),
            count: cart.count(),
            undiscounted_total,
        }
    }

    /// Sum of price times quantity across the captured lines.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    /// Sum of quantities across the captured lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total saved against the pre-discount prices, in whole naira.
    #[must_use]
    pub fn savings(&self) -> u64 {
        self.undiscounted_total.saturating_sub(self.subtotal)
    }

    /// Savings as a fraction of the pre-discount total.
    #[must_use]
    pub fn savings_percent(&self) -> Percentage {
        if self.undiscounted_total == 0 {
            return Percentage::from(0.0);
        }

        // Do the ratio in decimal space to avoid integer truncation.
        let savings = Decimal::from(self.savings());
        let undiscounted = Decimal::from(self.undiscounted_total);

        Percentage::from(savings / undiscounted)
    }

    /// The captured lines, in cart order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Prints the cart summary to the console.
    ///
    /// # Errors
    ///
    /// Returns a `SummaryError` if the summary cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Category", "Price", "Qty", "Amount"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.product.name.clone(),
                line.product.category.title().to_string(),
                naira(*line.product.price).to_string(),
                line.quantity.to_string(),
                naira(line.amount()).to_string(),
            ]);
        }

        write_table(&mut out, builder, 3..6)?;
        self.write_totals(&mut out)?;

        Ok(())
    }

    fn write_totals(&self, out: &mut impl io::Write) -> Result<(), SummaryError> {
        let savings_percent_points = percent_points(self.savings_percent());

        let subtotal_label = " Subtotal:";
        let savings_label = " Savings:";
        let total_label = " Total:";

        let subtotal_val = format!("{}  ", naira(self.subtotal));
        let savings_val = format!("({savings_percent_points:.2}%) {}  ", naira(self.savings()));
        let total_val = format!("{}  ", naira(self.subtotal));

        let label_width = subtotal_label
            .len()
            .max(savings_label.len())
            .max(total_label.len());

        let value_width = subtotal_val
            .len()
            .max(savings_val.len())
            .max(total_val.len());

        write_summary_line(out, subtotal_label, &subtotal_val, label_width, value_width)?;
        write_summary_line(out, savings_label, &savings_val, label_width, value_width)?;
        write_summary_line(out, total_label, &total_val, label_width, value_width)?;

        writeln!(out).map_err(|_err| SummaryError::Io)
    }
}

/// Prints a product listing to the console, in listing order.
///
/// # Errors
///
/// Returns a `SummaryError` if the listing cannot be written.
pub fn write_listing(mut out: impl io::Write, products: &[&Product]) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Category", "Price", "Rating", "Stock"]);

    for (idx, product) in products.iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            product.name.clone(),
            product.category.title().to_string(),
            naira(*product.price).to_string(),
            format!("{:.1} ({} reviews)", product.rating, product.reviews),
            if product.in_stock { "in stock" } else { "sold out" }.to_string(),
        ]);
    }

    write_table(&mut out, builder, 3..4)
}

/// A whole-naira amount as displayable money.
fn naira(amount: u64) -> Money<'static, Currency> {
    Money::from_major(i64::try_from(amount).unwrap_or(i64::MAX), NGN)
}

/// `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print
/// percent points.
fn percent_points(percentage: Percentage) -> Decimal {
    ((percentage * Decimal::ONE) * Decimal::from_i64(100).unwrap_or(Decimal::ZERO)).round_dp(2)
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    money_columns: std::ops::Range<usize>,
) -> Result<(), SummaryError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(money_columns), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| SummaryError::Io)
}

/// Writes a summary line with a right-aligned label and a fixed-width value column.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_width: usize,
    value_width: usize,
) -> Result<(), SummaryError> {
    writeln!(out, "{label:>label_width$}  {value:>value_width$}").map_err(|_err| SummaryError::Io)
}
