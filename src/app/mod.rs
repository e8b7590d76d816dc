//! Application module
//!
//! Contains the session state and the terminal event loop.
//!
//! # Module Structure
//! - `state` - Session state types (ConverterState, Field, AppMode, WarningDialog)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, ConverterState, Field, WarningDialog};

use crate::config_file::ConverterConfig;
use crate::error;
use crate::input::{InputHandler, InputResult};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for a terminal event before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    state: ConverterState,
    ui_renderer: UiRenderer,
    input_handler: InputHandler,
}

impl App {
    /// Create a new application instance with a fresh session
    pub fn new(config: &ConverterConfig) -> Self {
        info!(
            "Creating new App instance ({} -> {})",
            config.default_from, config.default_to
        );
        Self {
            state: ConverterState::new(config),
            ui_renderer: UiRenderer::new(),
            input_handler: InputHandler::new(),
        }
    }

    /// Session state
    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    /// Run the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> error::Result<()> {
        loop {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, self.input_handler.keybindings())
            })?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                // Only key presses; release/repeat events are reported on some platforms
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.input_handler.handle_key(&mut self.state, key) == InputResult::Quit {
                        info!(
                            "Quit requested after {} conversion(s)",
                            self.state.history.len()
                        );
                        return Ok(());
                    }
                }
                Event::Resize(cols, rows) => debug!("Terminal resized to {}x{}", cols, rows),
                _ => {}
            }
        }
    }
}
