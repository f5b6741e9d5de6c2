//! Summary popup
//!
//! Shows the per-category report text above a bar chart of the same totals.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::report::CHART_TITLE;
use crate::reports::CategorySummary;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Bar height in cents, so fractional totals still scale correctly
fn to_cents(amount: f64) -> u64 {
    (amount * 100.0).round().max(0.0) as u64
}

/// Build one bar per category, labelled and valued in currency
pub fn build_bars(summary: &CategorySummary, currency: &str) -> Vec<Bar<'static>> {
    summary
        .categories()
        .iter()
        .map(|c| {
            Bar::default()
                .value(to_cents(c.amount))
                .label(Line::from(c.category.clone()))
                .text_value(format!("{}{:.2}", currency, c.amount))
        })
        .collect()
}

/// "3 records in 2 categories"
fn counts_line(summary: &CategorySummary) -> String {
    let records = summary.record_count();
    let categories = summary.len();
    format!(
        "{} record{} in {} categor{}",
        records,
        if records == 1 { "" } else { "s" },
        categories,
        if categories == 1 { "y" } else { "ies" }
    )
}

/// Width of each bar so the whole group fits the chart area
fn bar_width(area_width: u16, bars: usize) -> u16 {
    let bars = u16::try_from(bars).unwrap_or(u16::MAX).max(1);
    (area_width / bars).saturating_sub(1).clamp(3, 14)
}

/// Render the summary popup
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Summary ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(Line::from(" Press any key to close ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(summary) = app.summary.as_ref().filter(|s| !s.is_empty()) else {
        let text = Paragraph::new("No expenses to summarize")
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, inner);
        return;
    };

    let currency = &app.settings.currency_symbol;
    let report = summary.format_terminal(currency);
    let report_height = u16::try_from(report.lines().count()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(report_height),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(report).style(Style::default().fg(Color::White)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(counts_line(summary)).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    let bars = build_bars(summary, currency);
    let bar_width = bar_width(chunks[2].width, bars.len());

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(CHART_TITLE)
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(chart, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Expense;
    use crate::storage::CsvExpenseStore;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn sample_summary() -> CategorySummary {
        let expenses = vec![
            Expense::new("2024-01-01", "Food", 10.0),
            Expense::new("2024-01-02", "Food", 5.5),
            Expense::new("2024-01-03", "Utilities", 40.0),
        ];
        CategorySummary::summarize(&expenses).unwrap()
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_empty_summary() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvExpenseStore::new(temp_dir.path().join("expenses.csv"));
        let settings = Settings::default();
        let app = App::new(&store, &settings);

        let screen = draw(&app);
        assert!(screen.contains("Summary"));
        assert!(screen.contains("No expenses to summarize"));
        assert!(!screen.contains(CHART_TITLE));
    }

    #[test]
    fn test_renders_report_and_chart() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvExpenseStore::new(temp_dir.path().join("expenses.csv"));
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        app.summary = Some(sample_summary());

        let screen = draw(&app);
        assert!(screen.contains(CHART_TITLE));
        assert!(screen.contains("Expense Summary:"));
        assert!(screen.contains("Food: $15.50"));
        assert!(screen.contains("Total: $55.50"));
        assert!(screen.contains("3 records in 2 categories"));
        assert!(!screen.contains("No expenses to summarize"));
    }

    #[test]
    fn test_counts_line() {
        assert_eq!(counts_line(&sample_summary()), "3 records in 2 categories");

        let single = CategorySummary::summarize(&[Expense::new("", "Food", 1.0)]).unwrap();
        assert_eq!(counts_line(&single), "1 record in 1 category");
    }

    #[test]
    fn test_bar_width_with_many_categories() {
        assert_eq!(bar_width(76, 2), 14);
        assert_eq!(bar_width(76, 0), 14);
        assert_eq!(bar_width(76, 40), 3);
        assert_eq!(bar_width(76, 65_536), 3);
        assert_eq!(bar_width(76, usize::MAX), 3);
    }

    #[test]
    fn test_to_cents() {
        assert_eq!(to_cents(12.345), 1235);
        assert_eq!(to_cents(0.1 + 0.2), 30);
        assert_eq!(to_cents(-4.0), 0);
    }

    #[test]
    fn test_one_bar_per_category() {
        let expenses = vec![
            Expense::new("2024-01-01", "Food", 10.0),
            Expense::new("2024-01-02", "Food", 5.5),
            Expense::new("2024-01-03", "Utilities", 40.0),
        ];
        let summary = CategorySummary::summarize(&expenses).unwrap();

        assert_eq!(build_bars(&summary, "$").len(), 2);
    }
}
