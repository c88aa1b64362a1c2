//! TUI rendering with ratatui
//!
//! Visualizations for the letter pool builder interface.

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Left panel
            Constraint::Percentage(45), // Right panel
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LETTERFORGE - Pool, Words, Permutations")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Letter pool
            Constraint::Percentage(60), // Accepted words
        ])
        .split(area);

    render_pool(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Expansions
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_expansions(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_pool(f: &mut Frame, app: &App, area: Rect) {
    let selecting = app.input_mode == InputMode::Pool;
    let letters = app.session.pool().letters();

    let content = if letters.is_empty() {
        vec![Line::from(Span::styled(
            "(empty - pour some letters in)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let mut spans = Vec::with_capacity(letters.len() * 2);
        for (i, letter) in letters.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if selecting && i == app.pool_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(letter.to_string(), style));
        }
        vec![Line::from(spans)]
    };

    let border_style = if selecting {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" Pool ({}) ", letters.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(border_style),
    );
    f.render_widget(paragraph, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let selecting = app.input_mode == InputMode::Words;
    let words = app.session.words();

    let items: Vec<ListItem> = if words.is_empty() {
        vec![ListItem::new("(no words forged yet)").style(Style::default().fg(Color::DarkGray))]
    } else {
        words
            .words()
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let selected = selecting && i == app.word_cursor;
                let marker = if selected { "▶ " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!("{marker}{}. {word}", i + 1)).style(style)
            })
            .collect()
    };

    let border_style = if selecting {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Words ({}) ", words.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(border_style),
    );
    f.render_widget(list, area);
}

fn render_expansions(f: &mut Frame, app: &App, area: Rect) {
    let expansions = app.session.expansions();
    let visible = area.height.saturating_sub(2) as usize;

    let content: Vec<Line> = if expansions.is_empty() {
        vec![Line::from(Span::styled(
            "(forge a word to see its permutations)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if expansions.len() <= visible {
        expansions
            .iter()
            .map(|expansion| Line::from(expansion.as_str()))
            .collect()
    } else {
        // More than fits: show what we can plus a remainder line
        let shown = visible.saturating_sub(1);
        let mut lines: Vec<Line> = expansions
            .iter()
            .take(shown)
            .map(|expansion| Line::from(expansion.as_str()))
            .collect();
        lines.push(Line::from(Span::styled(
            format!("… {} more", expansions.len() - shown),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(format!(" Expansions ({}) ", expansions.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Letters => (
            " Pour Letters (any text) | ENTER to add | TAB next panel ",
            app.letter_input.as_str(),
            Color::Yellow,
        ),
        InputMode::Word => {
            // Live feedback: green the moment the pool can form the word
            let formable =
                !app.word_input.is_empty() && app.session.word_is_formable(&app.word_input);
            (
                " Forge Word | ENTER to submit | TAB next panel ",
                app.word_input.as_str(),
                if formable { Color::Green } else { Color::Yellow },
            )
        }
        InputMode::Pool => (
            " Pool: ←/→ select | DEL to discard letter | ESC back ",
            "",
            Color::Cyan,
        ),
        InputMode::Words => (
            " Words: ↑/↓ select | DEL to remove word | ESC back ",
            "",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Letters => "Mode: Letters",
        InputMode::Word => "Mode: Word",
        InputMode::Pool => "Mode: Pool",
        InputMode::Words => "Mode: Words",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let counts_text = format!(
        "Letters: {} | Words: {}",
        app.session.pool().len(),
        app.session.words().len()
    );
    let counts = Paragraph::new(counts_text).alignment(Alignment::Center);
    f.render_widget(counts, chunks[1]);

    let expansions_text = format!("Expansions: {}", app.session.expansions().len());
    let expansions = Paragraph::new(expansions_text).alignment(Alignment::Center);
    f.render_widget(expansions, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Letters | InputMode::Word => "TAB: Panels | Ctrl+Z: Undo | Ctrl+C: Quit",
        InputMode::Pool | InputMode::Words => "q: Quit | u: Undo | n: New | TAB: Panels",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
