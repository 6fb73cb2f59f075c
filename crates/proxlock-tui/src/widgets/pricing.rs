use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use proxlock_core::content;
use proxlock_core::plans::{
    self, build_feature_rows, find_plan, FallbackPlan, PlanDescriptor, FALLBACK_FREE,
    FALLBACK_PLUS, FALLBACK_PRO,
};

use crate::app::App;
use crate::theme::Theme;

use super::FeaturesTableWidget;

/// Pricing page: three plan cards, an enterprise contact row, and the
/// feature comparison table.
///
/// Fetched plan data fills the cards when available; while loading or
/// after a failed fetch the static fallback catalog is shown instead,
/// so the page renders something sensible in every state.
pub struct PricingWidget;

/// Resolved display values for one plan card.
struct CardData {
    name: String,
    price: String,
    trial: Option<String>,
    description: String,
}

impl PricingWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let fetched = app.plans.plans();
        let loading = app.plans.is_loading();

        let rows = fetched
            .map(|plans| {
                build_feature_rows(
                    find_plan(plans, plans::FREE_PLAN_ID),
                    find_plan(plans, plans::PLUS_PLAN_ID),
                    find_plan(plans, plans::PRO_PLAN_ID),
                )
            })
            .unwrap_or_default();

        let table_height = if rows.is_empty() {
            0
        } else {
            rows.len() as u16 + 3
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),            // title, subtitle, beta notice
                Constraint::Length(9),            // plan cards
                Constraint::Length(2),            // enterprise row
                Constraint::Length(table_height), // feature table
                Constraint::Min(0),
            ])
            .split(area);

        Self::render_heading(frame, chunks[0], theme, loading);
        Self::render_cards(frame, chunks[1], theme, fetched, loading);
        Self::render_enterprise(frame, chunks[2], theme);
        if !rows.is_empty() {
            FeaturesTableWidget::render(frame, chunks[3], theme, &rows);
        }
    }

    fn render_heading(frame: &mut Frame, area: Rect, theme: &Theme, loading: bool) {
        let mut lines = vec![
            Line::from(Span::styled(
                content::PRICING_TITLE,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                content::PRICING_SUBTITLE,
                Style::default().fg(theme.fg1),
            )),
            Line::from(vec![
                Span::styled(
                    format!(" {} ", content::BETA_BADGE),
                    Style::default().fg(theme.button_fg).bg(theme.yellow),
                ),
                Span::styled(
                    format!(" {}", content::BETA_NOTICE),
                    Style::default().fg(theme.grey1),
                ),
            ]),
        ];
        if loading {
            lines.push(Line::from(Span::styled(
                "Loading current plans…",
                Style::default().fg(theme.grey0),
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_cards(
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        fetched: Option<&[PlanDescriptor]>,
        loading: bool,
    ) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        let cards = [
            (plans::FREE_PLAN_ID, FALLBACK_FREE, false),
            (plans::PLUS_PLAN_ID, FALLBACK_PLUS, false),
            (plans::PRO_PLAN_ID, FALLBACK_PRO, true),
        ];

        for ((key, fallback, highlighted), column) in cards.into_iter().zip(columns.iter()) {
            let data = resolve_card(fetched, key, fallback);
            Self::render_card(frame, *column, theme, &data, highlighted, loading);
        }
    }

    fn render_card(
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        data: &CardData,
        highlighted: bool,
        loading: bool,
    ) {
        let border = if highlighted { theme.accent } else { theme.bg2 };
        let body_fg = if loading { theme.grey0 } else { theme.fg1 };

        let mut lines = vec![
            Line::from(Span::styled(
                data.price.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "per month",
                Style::default().fg(theme.grey1),
            )),
        ];
        if let Some(trial) = &data.trial {
            lines.push(Line::from(Span::styled(
                trial.clone(),
                Style::default().fg(theme.green),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            data.description.clone(),
            Style::default().fg(body_fg),
        )));

        let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", data.name)),
        );
        frame.render_widget(card, area);
    }

    fn render_enterprise(frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", content::ENTERPRISE_NAME),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "{} ({}). {} ({})",
                    content::ENTERPRISE_PRICE,
                    content::ENTERPRISE_BILLING,
                    content::ENTERPRISE_DESCRIPTION,
                    content::urls::EMAIL_CONTACT
                ),
                Style::default().fg(theme.fg1),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Pick card values from the fetched plan when present, falling back to
/// the static catalog field by field.
fn resolve_card(
    fetched: Option<&[PlanDescriptor]>,
    key: &str,
    fallback: FallbackPlan,
) -> CardData {
    let plan = fetched.and_then(|plans| find_plan(plans, key));

    let name = plan
        .map(|p| p.name.clone())
        .unwrap_or_else(|| fallback.name.to_string());
    let price = plan
        .and_then(|p| p.fee.as_ref())
        .map(|f| f.amount_formatted.clone())
        .unwrap_or_else(|| format!("${}", fallback.price));
    let trial_days = plan
        .and_then(|p| p.free_trial_days)
        .unwrap_or(fallback.free_trial_days);
    let description = plan
        .and_then(|p| p.description.clone())
        .unwrap_or_else(|| fallback.description.to_string());

    CardData {
        name,
        price,
        trial: (trial_days > 0).then(|| format!("{trial_days}-day free trial")),
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxlock_core::plans::PlanFee;

    fn fetched_plus() -> Vec<PlanDescriptor> {
        vec![PlanDescriptor {
            id: plans::PLUS_PLAN_ID.to_string(),
            slug: "plus".to_string(),
            name: "Plus".to_string(),
            description: Some("Fetched description".to_string()),
            fee: Some(PlanFee {
                amount_formatted: "$9.99".to_string(),
            }),
            free_trial_days: Some(14),
            features: Vec::new(),
        }]
    }

    #[test]
    fn test_card_prefers_fetched_values() {
        let plans = fetched_plus();
        let card = resolve_card(Some(&plans), plans::PLUS_PLAN_ID, FALLBACK_PLUS);
        assert_eq!(card.price, "$9.99");
        assert_eq!(card.trial.as_deref(), Some("14-day free trial"));
        assert_eq!(card.description, "Fetched description");
    }

    #[test]
    fn test_card_falls_back_when_plan_missing() {
        let plans = fetched_plus();
        let card = resolve_card(Some(&plans), plans::PRO_PLAN_ID, FALLBACK_PRO);
        assert_eq!(card.name, "Pro");
        assert_eq!(card.price, "$19.99");
        assert_eq!(card.trial.as_deref(), Some("7-day free trial"));
    }

    #[test]
    fn test_enterprise_row_carries_billing_terms() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(140, 2)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| PricingWidget::render_enterprise(frame, frame.area(), &theme))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains(content::ENTERPRISE_NAME));
        assert!(text.contains(content::ENTERPRISE_BILLING));
        assert!(text.contains(content::urls::EMAIL_CONTACT));
    }

    #[test]
    fn test_free_plan_has_no_trial_line() {
        let card = resolve_card(None, plans::FREE_PLAN_ID, FALLBACK_FREE);
        assert_eq!(card.price, "$0");
        assert!(card.trial.is_none());
    }
}
