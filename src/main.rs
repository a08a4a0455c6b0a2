//! Terminal runner (default binary).
//!
//! Drives the core at a fixed frame rate with crossterm input and the
//! framebuffer renderer. Reaching the portal shows a modal verdict screen that
//! waits for a key before starting a fresh run.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::terminal;

use world_of_magic::config::GameConfig;
use world_of_magic::core::{FrameInput, FrameOutcome, LevelLayout, Scene, World};
use world_of_magic::input::{click_position, should_quit, Control, InputHandler};
use world_of_magic::journal::Journal;
use world_of_magic::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use world_of_magic::types::{Verdict, FRAME_MS};

/// Presses of a held movement key closer together than this are auto-repeat.
/// Covers the initial repeat delay of common terminals.
const VERDICT_REPEAT_GAP: Duration = Duration::from_millis(600);

/// What the player chose on the verdict screen.
enum Dismiss {
    Replay,
    Quit,
}

fn main() -> Result<()> {
    let config = GameConfig::load()?;
    let level = LevelLayout::default_level().build()?;
    let mut journal = match &config.log_path {
        Some(path) => Journal::open(path)?,
        None => Journal::disabled(),
    };

    let mut term = TerminalRenderer::new().with_mouse(config.mouse);
    term.enter()?;

    let result = Runner::new(&config).run(&mut term, World::new_game(level, 0), &mut journal);

    // Always try to restore terminal state.
    let _ = term.exit();
    journal.flush();
    result
}

struct Runner {
    view: GameView,
    input: InputHandler,
    clock: Instant,
    scene: Scene,
    fb: FrameBuffer,
}

impl Runner {
    fn new(config: &GameConfig) -> Self {
        Self {
            view: GameView::new(config.cell_w, config.cell_h),
            input: InputHandler::new(),
            clock: Instant::now(),
            scene: Scene::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    fn now_ms(&self) -> u64 {
        self.clock.elapsed().as_millis() as u64
    }

    fn viewport(&self) -> Viewport {
        let fallback = self.view.view_viewport();
        let (w, h) = terminal::size().unwrap_or((fallback.width, fallback.height));
        Viewport::new(w, h)
    }

    fn run(
        &mut self,
        term: &mut TerminalRenderer,
        mut world: World,
        journal: &mut Journal,
    ) -> Result<()> {
        let frame_budget = Duration::from_millis(FRAME_MS);

        loop {
            let frame_start = Instant::now();

            if !self.pump_events(term)? {
                return Ok(());
            }
            let frame_input = self.frame_input(&world);

            let now = self.now_ms();
            let outcome = world.frame(&frame_input, now, &mut self.scene);
            let frame = world.frame_count();
            for event in world.drain_events() {
                journal.record(frame, now, &event);
            }
            self.draw(term)?;

            if let FrameOutcome::Verdict(verdict) = outcome {
                match self.show_verdict(term, verdict)? {
                    Dismiss::Quit => return Ok(()),
                    Dismiss::Replay => {
                        let now = self.now_ms();
                        world.reset(now);
                        self.input.reset();
                        for event in world.drain_events() {
                            journal.record(0, now, &event);
                        }
                    }
                }
                continue;
            }

            if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    /// Drain pending terminal events without blocking. Returns false on quit.
    fn pump_events(&mut self, term: &mut TerminalRenderer) -> Result<bool> {
        let (cell_w, cell_h) = self.view.cell_size();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(false);
                    }
                    self.input.handle_key_event(key);
                }
                Event::Mouse(mouse) => {
                    if let Some(position) = click_position(mouse, cell_w, cell_h) {
                        self.input.handle_click(position);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        Ok(true)
    }

    /// Held keys plus the click for this frame; `R` presses the replay button.
    fn frame_input(&mut self, world: &World) -> FrameInput {
        let mut frame_input = self.input.sample();
        let replay = self.input.take_presses().contains(&Control::Replay);
        if replay && world.is_game_over() {
            let button = world.replay_button();
            frame_input.click = Some((
                button.x + button.width / 2,
                button.y + button.height / 2,
            ));
        }
        frame_input
    }

    fn draw(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let viewport = self.viewport();
        self.view.render_into(&self.scene, viewport, &mut self.fb);
        term.draw_swap(&mut self.fb)
    }

    /// Modal verdict screen. Blocks on terminal events until dismissed.
    fn show_verdict(&mut self, term: &mut TerminalRenderer, verdict: Verdict) -> Result<Dismiss> {
        self.scene = Scene::verdict_screen(verdict);
        self.draw(term)?;

        // Input queued during the last frame belongs to the run, not the modal.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(Dismiss::Quit);
                }
                self.input.handle_key_event(key);
            }
        }

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(Dismiss::Quit);
                    }
                    if self.input.is_new_press(key, VERDICT_REPEAT_GAP) {
                        return Ok(Dismiss::Replay);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    return Ok(Dismiss::Replay);
                }
                Event::Resize(..) => {
                    term.invalidate();
                    self.draw(term)?;
                }
                _ => {}
            }
        }
    }
}
