use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use proxlock_core::plans::FeatureRow;

use crate::theme::Theme;

/// Feature comparison table across the three plans. The caller omits
/// this widget entirely when the row list is empty.
pub struct FeaturesTableWidget;

impl FeaturesTableWidget {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, rows: &[FeatureRow]) {
        let header = Row::new(vec!["Feature", "Free", "Plus", "Pro"]).style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );

        let body = rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.label.clone()).style(Style::default().fg(theme.fg0)),
                Cell::from(row.free.clone()).style(Style::default().fg(theme.fg1)),
                Cell::from(row.plus.clone()).style(Style::default().fg(theme.fg1)),
                Cell::from(row.pro.clone()).style(Style::default().fg(theme.fg1)),
            ])
        });

        let table = Table::new(
            body,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.bg2))
                .title(" Features "),
        );

        frame.render_widget(table, area);
    }
}
