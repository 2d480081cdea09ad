use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::actions;
use crate::client::AnalysisClient;
use crate::components::{busy, charts, input_panel, readouts, status_bar, strategy};
use crate::config::AppConfig;
use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, POSITIVE_COLOR};
use crate::worker::AnalysisWorker;

/// Frame budget for the tick loop. Animations advance by measured elapsed
/// time, so a late frame never desynchronizes them.
const TICK_INTERVAL: Duration = Duration::from_millis(33);

pub struct App {
    state: AppState,
    worker: AnalysisWorker,
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let client = AnalysisClient::new(config.service_url.clone(), config.request_timeout())?;
        let worker = AnalysisWorker::new(client);

        Ok(Self {
            state: AppState::default(),
            worker,
            config,
        })
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut last_tick = Instant::now();

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;

            self.handle_events()?;

            let dt = last_tick.elapsed();
            last_tick = Instant::now();
            self.tick(dt.as_millis() as u64);
        }

        self.worker.shutdown();
        Ok(())
    }

    /// Advance time-driven state: drain worker responses, then step every
    /// in-flight animation by the frame delta.
    fn tick(&mut self, dt_ms: u64) {
        actions::poll_worker(&mut self.state, &self.worker, &self.config);
        self.state.tick(dt_ms);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        // Budget the wait so animations keep advancing while the keyboard is
        // idle.
        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.focus = self.state.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.focus = self.state.focus.prev();
            }
            KeyCode::Enter => {
                actions::submit_analysis(&mut self.state, &self.worker);
            }
            KeyCode::Esc => {
                self.state.clear_notice();
            }
            KeyCode::Backspace => {
                self.state.focused_input_mut().pop();
            }
            // digits and a decimal point only, so 'q' stays free to quit
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                self.state.focused_input_mut().push(c);
            }
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input panel
                Constraint::Length(5), // Metric readouts
                Constraint::Min(10),   // Forecast charts
                Constraint::Length(7), // Strategy narrative
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        input_panel::render(frame, chunks[0], &self.state);

        if self.state.sections_visible {
            readouts::render(frame, chunks[1], &self.state);

            let chart_halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 2); 2])
                .split(chunks[2]);
            self.state
                .charts
                .profit
                .render(frame, chart_halves[0], POSITIVE_COLOR);
            self.state
                .charts
                .revenue
                .render(frame, chart_halves[1], HEADER_COLOR);

            strategy::render(frame, chunks[3], &self.state);
        } else {
            charts::render_placeholder(frame, chunks[2]);
        }

        status_bar::render(frame, chunks[4], &self.state);

        // Overlay last so it sits above everything else
        busy::render(frame, &self.state);
    }
}
