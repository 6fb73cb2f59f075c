use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

use proxlock_core::plans::PlanDescriptor;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick_rate: Duration,
}

/// Result of an async plan fetch
pub enum PlansResult {
    /// Plans fetched successfully
    Loaded(Vec<PlanDescriptor>),
    /// Fetch failed; the pricing view masks this with fallbacks
    Failed(String),
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_fps: u32) -> Self {
        let animation_tick_rate = if animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis((1000 / animation_fps).max(1) as u64)
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick_rate,
        }
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll at the animation frame rate; used while the reveal or a
    /// scroll animation is running
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse activity (wheel scrolling)
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
