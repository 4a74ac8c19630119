//! Application runtime and event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::outcome::PickOutcome;
use crate::state::App;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App<'_> {
	/// Pump the terminal event loop until the user exits with an outcome.
	///
	/// # Errors
	/// Returns terminal I/O failures from the backend.
	pub fn run(&mut self) -> Result<PickOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let result = self.event_loop(&mut terminal);

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<PickOutcome> {
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key)? {
						return Ok(outcome);
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				_ => {}
			}
		}
	}
}
