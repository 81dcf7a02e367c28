//! Terminal session: raw mode plus the alternate screen, restored on drop.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while a mode runs. Dropping it restores the terminal,
/// including on error paths.
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = stdout.execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Keys the modes react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Flap,
    Quit,
    Other,
}

pub fn key_action(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Other;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => KeyAction::Flap,
        _ => KeyAction::Other,
    }
}

/// Wait up to `timeout` for a key press.
pub fn poll_key(timeout: Duration) -> io::Result<Option<KeyAction>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(Some(key_action(key)));
        }
    }
    Ok(None)
}

/// Collect key presses until `deadline`. Used to pace ticks.
pub fn poll_until(deadline: Instant) -> io::Result<Vec<KeyAction>> {
    let mut actions = Vec::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match poll_key(remaining)? {
            Some(action) => actions.push(action),
            None if remaining.is_zero() => break,
            None => {}
        }
        if Instant::now() >= deadline {
            break;
        }
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_actions() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_action(press(KeyCode::Char(' '))), KeyAction::Flap);
        assert_eq!(key_action(press(KeyCode::Up)), KeyAction::Flap);
        assert_eq!(key_action(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(key_action(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(key_action(press(KeyCode::Char('x'))), KeyAction::Other);
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }
}
