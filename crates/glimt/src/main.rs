use std::io::stdout;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEventKind,
};
use crossterm::execute;
use glimt_config::Config;
use glimt_core::{ColorRole, Palette};
use glimt_engine::AnimationDriver;
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
    DefaultTerminal, Frame,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = App::new(Config::load_or_default(), terminal.size().ok()).run(terminal);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated backdrop.
    driver: AnimationDriver,
    /// Start of the animation clock.
    epoch: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, size: Option<ratatui::layout::Size>) -> Self {
        let (width, height) = size.map_or((0, 0), |s| (s.width, s.height));
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let driver = AnimationDriver::new(
            config.effect,
            config.theme,
            config.speed,
            width,
            height.saturating_sub(1),
            seed,
            config.density,
        );
        Self {
            running: false,
            driver,
            epoch: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.driver.start();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.driver.destroy();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Backdrop
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let now_ms = self.epoch.elapsed().as_millis() as u64;
        if let Some(canvas) = self.driver.tick(now_ms) {
            let backdrop = Paragraph::new(canvas.to_lines());
            frame.render_widget(backdrop, chunks[0]);
        }

        let palette = Palette::for_theme(self.driver.theme());
        let accent = palette.color(ColorRole::Accent);
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "e".bold().fg(accent),
            format!(" effect ({})  ", self.driver.effect().name()).dark_gray(),
            "t".bold().fg(accent),
            " theme  ".dark_gray(),
            "s".bold().fg(accent),
            format!(" speed ({})", self.driver.speed().label()).dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the backdrop keeps animating.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved => {
                    self.driver.pointer_moved(mouse.column, mouse.row);
                }
                Event::Resize(width, height) => {
                    self.driver.resize(width, height.saturating_sub(1));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('e')) => self.next_effect(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            _ => {}
        }
    }

    /// Switch to the next backdrop effect.
    fn next_effect(&mut self) {
        self.driver.set_effect(self.driver.effect().next());
    }

    /// Toggle between dark and light themes.
    fn toggle_theme(&mut self) {
        self.driver.set_theme(self.driver.theme().toggle());
    }

    /// Cycle through animation speeds.
    fn cycle_speed(&mut self) {
        self.driver.set_speed(self.driver.speed().next());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
