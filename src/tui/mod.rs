// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive shell (ratatui + crossterm). The loop is
//! single-threaded and synchronous: it blocks on the next input event,
//! applies the decoded command, and redraws. There are no timers and no
//! background work; resizes arrive as discrete events.

use std::{collections::BTreeSet, error::Error, io};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::layout::{layout_focus, LabelMode, Viewport};
use crate::model::Network;
use crate::ops::{FocusCommand, FocusState};
use crate::render::render_focus_frame;

const WELCOME_STATUS: &str = "Welcome to MetaZoom";
const HELP_STATUS: &str = "r: random reaction  s: random species  n: toggle labels  q: quit";

/// Runs the interactive terminal UI until the user quits.
pub fn run(network: Network, currency: BTreeSet<String>) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(network, currency);

    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, &mut app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(width, height) => app.handle_resize(width, height),
            _ => {}
        }
    }

    Ok(())
}

/// The built-in demo model, a glycolysis fragment.
pub fn demo_network() -> Network {
    crate::model::fixtures::glycolysis_fragment()
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    app.handle_resize(area.width, area.height);
    let text = app.render_frame();
    frame.render_widget(Paragraph::new(text), area);
}

fn label_mode_name(mode: LabelMode) -> &'static str {
    match mode {
        LabelMode::Id => "ids",
        LabelMode::Name => "names",
    }
}

pub struct App {
    network: Network,
    // Accepted on the command line and carried through; the layout core
    // never sees it.
    currency: BTreeSet<String>,
    state: FocusState,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    pub fn new(network: Network, currency: BTreeSet<String>) -> Self {
        Self::new_with_rng(network, currency, StdRng::from_entropy())
    }

    /// Like `new` but with a caller-supplied rng, so tests can seed it.
    pub fn new_with_rng(network: Network, currency: BTreeSet<String>, rng: StdRng) -> Self {
        let mut app = Self {
            network,
            currency,
            state: FocusState::new(Viewport::new(0, 0)),
            rng,
            should_quit: false,
        };
        app.focus_initial();
        app
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn currency(&self) -> &BTreeSet<String> {
        &self.currency
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Startup focus: a random reaction, falling back to a random species.
    /// An empty model leaves the focus unset and reports on the status line;
    /// the loop still runs so the user can quit normally.
    fn focus_initial(&mut self) {
        let outcome = self
            .state
            .center_on_random_reaction(&self.network, &mut self.rng)
            .or_else(|_| {
                self.state
                    .center_on_random_species(&self.network, &mut self.rng)
            });
        match outcome {
            Ok(()) => self.state.set_status(WELCOME_STATUS),
            Err(err) => self.state.set_status(err.to_string()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_code(key.code);
    }

    fn handle_key_code(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.set_status(HELP_STATUS),
            KeyCode::Char('n') => {
                // Toggling cannot fail; the rng is untouched.
                let _ = self
                    .state
                    .apply(&self.network, FocusCommand::ToggleLabelMode, &mut self.rng);
                self.state.set_status(format!(
                    "labels: {}",
                    label_mode_name(self.state.label_mode())
                ));
            }
            KeyCode::Char('s') => self.recenter(FocusCommand::CenterRandomSpecies),
            // Any unbound key recenters on a random reaction.
            _ => self.recenter(FocusCommand::CenterRandomReaction),
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let viewport = Viewport::new(usize::from(width), usize::from(height));
        if self.state.viewport() != viewport {
            // Resizing cannot fail; the rng is untouched.
            let _ = self.state.apply(
                &self.network,
                FocusCommand::Resize {
                    width: viewport.width(),
                    height: viewport.height(),
                },
                &mut self.rng,
            );
        }
    }

    fn recenter(&mut self, command: FocusCommand) {
        match self.state.apply(&self.network, command, &mut self.rng) {
            Ok(()) => {
                if let Some(key) = self.state.focus().cloned() {
                    self.state.set_status(key.to_string());
                }
            }
            Err(err) => self.state.set_status(err.to_string()),
        }
    }

    /// Produces the text for the next frame.
    ///
    /// Consumes the pending status message; without one, a default line
    /// showing the focus and label mode is used. Layout or render failures
    /// degrade to a message instead of aborting the loop.
    pub fn render_frame(&mut self) -> String {
        let viewport = self.state.viewport();
        let status = self
            .state
            .take_status()
            .unwrap_or_else(|| self.default_status());

        let Some(key) = self.state.focus().cloned() else {
            return status;
        };

        match layout_focus(&self.network, &key, viewport, self.state.label_mode()) {
            Ok(layout) => match render_focus_frame(&layout, &status, viewport) {
                Ok(text) => text,
                Err(err) => format!("render failed: {err}"),
            },
            Err(err) => format!("layout failed: {err}"),
        }
    }

    fn default_status(&self) -> String {
        match self.state.focus() {
            Some(key) => format!(
                "{key} | labels: {}",
                label_mode_name(self.state.label_mode())
            ),
            None => "no focus".to_owned(),
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
