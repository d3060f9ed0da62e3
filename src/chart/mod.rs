//! Consumers for the aggregated views.

use std::io::{self, Write};

use crate::{
    core::{CategoryTotal, SeriesPoint},
    domain::DATE_FORMAT,
};

const BAR_WIDTH: usize = 40;
const EMPTY_MESSAGE: &str = "No expenses recorded.";

/// Terminal consumer of aggregated expense data.
pub trait ChartSink {
    fn plot_series(&mut self, title: &str, points: &[SeriesPoint]) -> io::Result<()>;
    fn plot_categories(&mut self, title: &str, totals: &[CategoryTotal]) -> io::Result<()>;
}

/// Renders series as aligned text rows with a proportional bar.
pub struct TextChart<W: Write> {
    out: W,
    currency_symbol: String,
}

impl TextChart<io::Stdout> {
    pub fn stdout(currency_symbol: impl Into<String>) -> Self {
        Self::new(io::stdout(), currency_symbol)
    }
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, title: &str, rows: &[(String, f64)]) -> io::Result<()> {
        writeln!(self.out, "=== {} ===", title.trim())?;
        if rows.is_empty() {
            writeln!(self.out, "{EMPTY_MESSAGE}")?;
            return self.out.flush();
        }
        let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
        let peak = rows
            .iter()
            .map(|(_, value)| value.abs())
            .fold(0.0_f64, f64::max);
        for (label, value) in rows {
            let amount = format!("{}{:.2}", self.currency_symbol, value);
            writeln!(
                self.out,
                "{label:<label_width$}  {amount:>12}  {}",
                bar(*value, peak)
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> ChartSink for TextChart<W> {
    fn plot_series(&mut self, title: &str, points: &[SeriesPoint]) -> io::Result<()> {
        let rows: Vec<_> = points
            .iter()
            .map(|point| (point.date.format(DATE_FORMAT).to_string(), point.amount))
            .collect();
        self.render(title, &rows)
    }

    fn plot_categories(&mut self, title: &str, totals: &[CategoryTotal]) -> io::Result<()> {
        let rows: Vec<_> = totals
            .iter()
            .map(|entry| (entry.category.clone(), entry.total))
            .collect();
        self.render(title, &rows)
    }
}

fn bar(value: f64, peak: f64) -> String {
    if peak <= 0.0 || !value.is_finite() {
        return String::new();
    }
    let len = ((value.abs() / peak) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rendered(f: impl FnOnce(&mut TextChart<Vec<u8>>) -> io::Result<()>) -> String {
        let mut chart = TextChart::new(Vec::new(), "$");
        f(&mut chart).expect("render");
        String::from_utf8(chart.into_inner()).expect("utf8")
    }

    #[test]
    fn series_rows_follow_input_order() {
        let points = vec![
            SeriesPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                amount: 8.0,
            },
            SeriesPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                amount: 16.0,
            },
        ];
        let text = rendered(|chart| chart.plot_series("Over Time", &points));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "=== Over Time ===");
        assert!(lines[1].starts_with("2024-01-01"));
        assert!(lines[1].contains("$8.00"));
        assert!(lines[2].ends_with(&"#".repeat(BAR_WIDTH)));
    }

    #[test]
    fn empty_input_prints_notice() {
        let text = rendered(|chart| chart.plot_categories("By Category", &[]));
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn bar_is_scaled_to_peak() {
        assert_eq!(bar(5.0, 10.0).len(), BAR_WIDTH / 2);
        assert!(bar(1.0, 0.0).is_empty());
    }
}
