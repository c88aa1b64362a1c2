//! TUI application state and logic

use crate::session::{Action, Event, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which panel owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing raw text to pour into the pool
    Letters,
    /// Typing a word to forge
    Word,
    /// Selecting a pool letter to discard
    Pool,
    /// Selecting an accepted word to remove
    Words,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub session: Session,
    pub input_mode: InputMode,
    pub letter_input: String,
    pub word_input: String,
    pub pool_cursor: usize,
    pub word_cursor: usize,
    pub messages: Vec<Message>,
    pub undo_stack: Vec<Session>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            input_mode: InputMode::Letters,
            letter_input: String::new(),
            word_input: String::new(),
            pool_cursor: 0,
            word_cursor: 0,
            messages: vec![
                Message {
                    text: "Welcome! Pour some letters into the pool to begin.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB cycles panels; the word box turns green when formable.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            undo_stack: Vec::new(),
            should_quit: false,
        }
    }

    /// Route an action through the session, tracking undo and messages
    fn commit(&mut self, action: Action) -> Event {
        let (next, event) = self.session.apply(action);

        let style = match &event {
            Event::LettersAdded { .. }
            | Event::WordAccepted { .. }
            | Event::WordRemoved { .. }
            | Event::LetterDiscarded { .. } => MessageStyle::Success,
            Event::Reset => MessageStyle::Info,
            Event::NothingToAdd | Event::WordRejected { .. } | Event::InvalidWord { .. } => {
                MessageStyle::Error
            }
        };

        let changed = !matches!(
            event,
            Event::NothingToAdd | Event::WordRejected { .. } | Event::InvalidWord { .. }
        );
        if changed {
            self.undo_stack.push(self.session.clone());
            self.session = next;
            self.clamp_cursors();
        }

        self.add_message(&event.to_string(), style);
        event
    }

    pub fn submit_letters(&mut self) {
        if self.letter_input.is_empty() {
            return;
        }
        let raw = std::mem::take(&mut self.letter_input);
        self.commit(Action::AddLetters(raw));
    }

    pub fn submit_word(&mut self) {
        if self.word_input.is_empty() {
            return;
        }
        // Judge formability against the pool the word was submitted to; an
        // accepted word consumes its letters before we get back here.
        let formable = self.session.word_is_formable(&self.word_input);
        self.commit(Action::SubmitWord(self.word_input.clone()));

        // Anything the pool could form clears the box, duplicates included;
        // a word short on letters stays put so the user can see what fell
        // short and fix it.
        if formable {
            self.word_input.clear();
        }
    }

    pub fn remove_selected_word(&mut self) {
        if self.session.words().is_empty() {
            self.add_message("No words to remove!", MessageStyle::Error);
            return;
        }
        self.commit(Action::RemoveWord(self.word_cursor));
    }

    pub fn discard_selected_letter(&mut self) {
        if self.session.pool().is_empty() {
            self.add_message("The pool is already empty!", MessageStyle::Error);
            return;
        }
        self.commit(Action::DiscardLetter(self.pool_cursor));
    }

    pub fn new_session(&mut self) {
        self.letter_input.clear();
        self.word_input.clear();
        self.commit(Action::Reset);
    }

    pub fn undo_last(&mut self) {
        if let Some(prior) = self.undo_stack.pop() {
            self.session = prior;
            self.clamp_cursors();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Move keyboard focus to the next panel
    ///
    /// Leaving the letter box submits whatever was typed, like clicking
    /// away from a form field.
    pub fn cycle_mode(&mut self) {
        if self.input_mode == InputMode::Letters {
            self.submit_letters();
        }
        self.input_mode = match self.input_mode {
            InputMode::Letters => InputMode::Word,
            InputMode::Word => InputMode::Pool,
            InputMode::Pool => InputMode::Words,
            InputMode::Words => InputMode::Letters,
        };
    }

    pub fn pool_select_left(&mut self) {
        self.pool_cursor = self.pool_cursor.saturating_sub(1);
    }

    pub fn pool_select_right(&mut self) {
        if self.pool_cursor + 1 < self.session.pool().len() {
            self.pool_cursor += 1;
        }
    }

    pub fn words_select_up(&mut self) {
        self.word_cursor = self.word_cursor.saturating_sub(1);
    }

    pub fn words_select_down(&mut self) {
        if self.word_cursor + 1 < self.session.words().len() {
            self.word_cursor += 1;
        }
    }

    fn clamp_cursors(&mut self) {
        self.pool_cursor = self
            .pool_cursor
            .min(self.session.pool().len().saturating_sub(1));
        self.word_cursor = self
            .word_cursor
            .min(self.session.words().len().saturating_sub(1));
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}


/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let TermEvent::Key(key) = event::read()? {
            // Key press only; release events double-fire on Windows
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match key.code {
                KeyCode::Char('c') if ctrl => {
                    app.should_quit = true;
                }
                KeyCode::Char('z') if ctrl => {
                    app.undo_last();
                }
                KeyCode::Tab => {
                    app.cycle_mode();
                }
                _ => match app.input_mode {
                    InputMode::Letters => match key.code {
                        KeyCode::Char(c) => app.letter_input.push(c),
                        KeyCode::Backspace => {
                            app.letter_input.pop();
                        }
                        KeyCode::Enter => app.submit_letters(),
                        KeyCode::Esc => app.letter_input.clear(),
                        _ => {}
                    },
                    InputMode::Word => match key.code {
                        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                            app.word_input.push(c.to_ascii_lowercase());
                        }
                        KeyCode::Backspace => {
                            app.word_input.pop();
                        }
                        KeyCode::Enter => app.submit_word(),
                        KeyCode::Esc => app.word_input.clear(),
                        _ => {}
                    },
                    InputMode::Pool => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('u') => app.undo_last(),
                        KeyCode::Char('n') => app.new_session(),
                        KeyCode::Left => app.pool_select_left(),
                        KeyCode::Right => app.pool_select_right(),
                        KeyCode::Delete | KeyCode::Backspace => app.discard_selected_letter(),
                        KeyCode::Esc => app.input_mode = InputMode::Letters,
                        _ => {}
                    },
                    InputMode::Words => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('u') => app.undo_last(),
                        KeyCode::Char('n') => app.new_session(),
                        KeyCode::Up => app.words_select_up(),
                        KeyCode::Down => app.words_select_down(),
                        KeyCode::Delete | KeyCode::Backspace => app.remove_selected_word(),
                        KeyCode::Esc => app.input_mode = InputMode::Letters,
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
