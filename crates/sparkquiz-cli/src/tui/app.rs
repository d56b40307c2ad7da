//! Main TUI application
//!
//! Owns the presenter and the framebuffer, runs the frame loop, and restores
//! the terminal on the way out.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use sparkquiz_core::{Input, Presenter, PresenterOptions, Question};
use std::{io, time::Duration};
use tokio::time::MissedTickBehavior;

use super::canvas::{cursor_cells, QuizCanvas};
use super::events::{translate, Action};
use super::raster::{rasterize, CellMetrics, Framebuffer, Label};

pub struct App {
    presenter: Presenter,
    metrics: CellMetrics,
    framebuffer: Framebuffer,
    labels: Vec<Label>,
    frame_interval: Duration,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        questions: Vec<Question>,
        options: PresenterOptions,
        frame_interval: Duration,
    ) -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        let metrics = CellMetrics::for_terminal(rows);
        let presenter = Presenter::new(questions, metrics.viewport(cols, rows), options);

        Ok(Self {
            presenter,
            metrics,
            framebuffer: Framebuffer::new(cols, rows.saturating_mul(2)),
            labels: Vec::new(),
            frame_interval,
            should_quit: false,
        })
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Frame loop: inputs are applied as they arrive, ticks and redraws happen
    /// on the frame interval
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frames = tokio::time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased; // Prefer events over the frame tick when both are ready

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(&event),
                        Some(Err(e)) => {
                            tracing::warn!("Terminal event error: {}", e);
                        }
                        None => {
                            tracing::info!("Terminal event stream closed");
                            self.should_quit = true;
                        }
                    }
                }
                _ = frames.tick() => {
                    self.presenter.tick();
                    terminal.draw(|f| self.draw(f))?;
                }
            }

            if self.should_quit {
                tracing::info!(frames = self.presenter.frame(), "Quitting");
                break;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::Resize(_, rows) = event {
            self.metrics = CellMetrics::for_terminal(*rows);
        }
        match translate(event, self.metrics) {
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::Forward(input)) => self.presenter.handle_input(input),
            None => {}
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let area = f.area();

        // Keep the logical viewport in step with whatever size we are drawn at
        self.metrics = CellMetrics::for_terminal(area.height);
        let viewport = self.metrics.viewport(area.width, area.height);
        if viewport != self.presenter.viewport() {
            self.presenter.handle_input(Input::Resized(viewport));
        }

        self.framebuffer
            .resize(area.width, area.height.saturating_mul(2));
        let commands = self.presenter.render();
        self.labels = rasterize(&commands, self.metrics, &mut self.framebuffer);

        let cursor = self
            .presenter
            .pointer()
            .map(|pointer| cursor_cells(self.metrics, pointer));
        f.render_widget(
            QuizCanvas::new(&self.framebuffer, &self.labels).cursor(cursor),
            area,
        );
    }
}
