use std::fmt::Write;

use chatmood_core::{AppViewModel, BarPoint, HealthDoughnut, ReportView, HEALTH_MAX};

const TITLE: &str = "Analyze Your WhatsApp Chat";
const BAR_WIDTH: usize = 30;
const RING_WIDTH: usize = 20;
const FILLED: char = '█';
const EMPTY: char = '░';

/// Renders the whole view as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {TITLE} ==");
    let _ = writeln!(out, "📄 {}", view.upload_title);
    let _ = writeln!(out, "[ {} ]", view.submit_label);

    if let Some(error) = &view.error {
        let _ = writeln!(out);
        let _ = writeln!(out, "Error: {}", error.message);
    }

    if let Some(report) = &view.report {
        let _ = writeln!(out);
        render_report(&mut out, report);
    }

    out
}

fn render_report(out: &mut String, report: &ReportView) {
    let badge = &report.mood;
    let _ = writeln!(
        out,
        "Overall Mood: {} {} ({})",
        badge.presentation.icon, badge.label, badge.presentation.color
    );
    if let Some(total) = report.total_messages {
        let _ = writeln!(out, "Messages analyzed: {total}");
    }

    if let Some(health) = &report.health {
        let _ = writeln!(out);
        let _ = writeln!(out, "Chat Health Score");
        let _ = writeln!(out, "  {}", health_line(health));
    }

    let _ = writeln!(out);
    let cards: Vec<String> = report
        .percentages
        .iter()
        .map(|card| format!("{} {} {}%", card.icon, card.label, card.percent))
        .collect();
    let _ = writeln!(out, "{}", cards.join("   "));

    let _ = writeln!(out);
    let _ = writeln!(out, "Messages");
    for line in bar_lines(&report.bars) {
        let _ = writeln!(out, "  {line}");
    }

    if !report.negative_messages.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Most Negative Messages");
        for (index, message) in report.negative_messages.iter().enumerate() {
            let _ = writeln!(out, "  {}. “{}”", index + 1, message);
        }
    }
}

fn health_line(health: &HealthDoughnut) -> String {
    let filled = cells(health.slices[0].value, HEALTH_MAX, RING_WIDTH);
    format!(
        "{}{} {}/100",
        FILLED.to_string().repeat(filled),
        EMPTY.to_string().repeat(RING_WIDTH - filled),
        health.center
    )
}

fn bar_lines(bars: &[BarPoint]) -> Vec<String> {
    let max = bars.iter().map(|bar| bar.value).max().unwrap_or(0);
    let label_width = bars.iter().map(|bar| bar.label.len()).max().unwrap_or(0);
    bars.iter()
        .map(|bar| {
            let filled = cells(bar.value as f64, max as f64, BAR_WIDTH);
            format!(
                "{:<width$} │{} {}",
                bar.label,
                FILLED.to_string().repeat(filled),
                bar.value,
                width = label_width
            )
        })
        .collect()
}

/// Number of filled cells out of `width` for `value / max`.
fn cells(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    (ratio * width as f64).round() as usize
}
