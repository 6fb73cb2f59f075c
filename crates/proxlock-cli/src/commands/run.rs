use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use proxlock_core::billing::PlanFetcher;
use proxlock_core::{content, AppConfig};
use proxlock_tui::{
    app::{App, Page},
    event::{AppEvent, EventHandler, PlansResult},
    input::{handle_key_event, handle_mouse_event, Action},
    widgets::{HeaderWidget, HomeWidget, PricingWidget, StatusBarWidget},
    Theme,
};

use crate::StartPage;

pub async fn run(config: Arc<AppConfig>, start_page: StartPage) -> Result<()> {
    // Billing widget access is a hard requirement of the pricing view:
    // resolve the publishable key before touching the terminal so a
    // missing key fails loudly instead of inside the alternate screen.
    let fetcher = Arc::new(PlanFetcher::new(&config.billing)?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("ProxLock")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), Theme::default(), Instant::now());
    if matches!(start_page, StartPage::Pricing) {
        app.goto_pricing();
    }

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Channel for async plan fetch results
    let (plans_tx, mut plans_rx) = mpsc::unbounded_channel::<PlansResult>();

    // Checked at the END of each iteration to pick the NEXT iteration's
    // tick rate
    let mut needs_fast_update = app.needs_fast_tick();

    loop {
        // Process any completed plan fetches (non-blocking)
        while let Ok(result) = plans_rx.try_recv() {
            handle_plans_result(&mut app, result);
        }

        // Kick off a fetch the first time the pricing page is shown
        if app.page == Page::Pricing && app.plans_need_fetch() {
            spawn_plan_fetch(&mut app, &fetcher, plans_tx.clone());
        }

        app.update(Instant::now());

        terminal.draw(|frame| {
            let size = frame.area();
            app.viewport_width = size.width;
            app.viewport_height = size.height.saturating_sub(2);

            // Header + content + status bar
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            HeaderWidget::render(frame, layout[0], &app);
            match app.page {
                Page::Home => HomeWidget::render(frame, layout[1], &mut app),
                Page::Pricing => PricingWidget::render(frame, layout[1], &app),
            }
            StatusBarWidget::render(frame, layout[2], &app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, &fetcher, plans_tx.clone());
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse);
                    handle_action(&mut app, action, &fetcher, plans_tx.clone());
                }
                AppEvent::Resize(w, h) => {
                    app.viewport_width = w;
                    app.viewport_height = h.saturating_sub(2);
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_tick();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_plans_result(app: &mut App, result: PlansResult) {
    use proxlock_tui::app::PlansState;

    match result {
        PlansResult::Loaded(plans) => {
            info!("loaded {} plans", plans.len());
            app.plans = PlansState::Loaded(plans);
            app.clear_status();
        }
        PlansResult::Failed(error) => {
            // Fallback catalog takes over; surface the failure quietly
            app.plans = PlansState::Failed(error);
            app.set_status("Showing standard pricing (live fetch failed)");
        }
    }
}

fn spawn_plan_fetch(
    app: &mut App,
    fetcher: &Arc<PlanFetcher>,
    tx: mpsc::UnboundedSender<PlansResult>,
) {
    use proxlock_tui::app::PlansState;

    app.plans = PlansState::Loading;
    let fetcher = fetcher.clone();
    tokio::spawn(async move {
        match fetcher.fetch_plans().await {
            Ok(plans) => {
                let _ = tx.send(PlansResult::Loaded(plans));
            }
            Err(e) => {
                let _ = tx.send(PlansResult::Failed(e.to_string()));
            }
        }
    });
}

fn open_url(app: &mut App, url: &str) {
    if let Err(e) = open::that(url) {
        app.set_status(format!("Failed to open browser: {e}"));
    } else {
        app.set_status(format!("Opening {url}"));
    }
}

fn handle_action(
    app: &mut App,
    action: Action,
    fetcher: &Arc<PlanFetcher>,
    plans_tx: mpsc::UnboundedSender<PlansResult>,
) {
    // Clear pending key on any action except the g prefix itself
    if action != Action::PendingG && action != Action::JumpToTop {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::ScrollPageDown => app.scroll_page_down(),
        Action::ScrollPageUp => app.scroll_page_up(),
        Action::JumpToTop => {
            app.clear_pending_key();
            app.jump_to_top();
        }
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::GotoHome => app.goto_home(Instant::now()),
        Action::GotoPricing => {
            app.goto_pricing();
            if app.plans_need_fetch() {
                spawn_plan_fetch(app, fetcher, plans_tx);
            }
        }
        Action::OpenApp => open_url(app, content::urls::APP),
        Action::OpenDocs => open_url(app, content::urls::DOCS),
        Action::OpenDiscord => open_url(app, content::urls::DISCORD),
        Action::Refresh => {
            app.set_status("Refreshing plans...");
            spawn_plan_fetch(app, fetcher, plans_tx);
        }
        Action::None => {}
    }
}
