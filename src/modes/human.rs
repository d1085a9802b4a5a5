use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{info, warn};

use crate::game::{GameConfig, Simulation, TickStatus, TurnScheduler};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Requests from the input task that only the game loop may act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Restart,
    Quit,
}

pub struct HumanMode {
    config: GameConfig,
    simulation: Simulation,
    metrics: GameMetrics,
    renderer: Renderer,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            simulation: Simulation::new(config.clone()),
            config,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let (control_tx, mut control_rx) = mpsc::unbounded_channel();
        let input_task = tokio::spawn(read_input(self.simulation.scheduler(), control_tx));

        let mut tick_timer = interval(self.config.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        info!(tick_ms = self.config.tick_interval_ms, "game_loop_started");

        loop {
            tokio::select! {
                maybe_control = control_rx.recv() => {
                    match maybe_control {
                        Some(Control::Restart) => self.restart(),
                        Some(Control::Quit) | None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.simulation.is_alive() {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.simulation.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        input_task.abort();
        info!("game_loop_stopped");
        Ok(())
    }

    fn update_game(&mut self) {
        if let TickStatus::Dead(_) = self.simulation.tick() {
            self.metrics.on_game_over(&self.simulation.snapshot());
        }
    }

    /// Throw the finished (or running) game away and spawn a new one
    fn restart(&mut self) {
        let scheduler = self.simulation.scheduler();
        scheduler.clear();
        self.simulation = Simulation::with_scheduler(self.config.clone(), scheduler);
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Input context: turns go straight into the queue, everything else to the game loop
async fn read_input(scheduler: Arc<TurnScheduler>, control: mpsc::UnboundedSender<Control>) {
    let handler = InputHandler::new();
    let mut events = EventStream::new();

    while let Some(event) = events.next().await {
        let key = match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(error) => {
                warn!(%error, "input_read_failed");
                break;
            }
        };

        let message = match handler.handle_key_event(key) {
            KeyAction::Turn(request) => {
                scheduler.enqueue(request);
                continue;
            }
            KeyAction::Restart => Control::Restart,
            KeyAction::Quit => Control::Quit,
            KeyAction::None => continue,
        };

        if control.send(message).is_err() {
            break;
        }
    }
}
