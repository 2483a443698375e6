use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph};

use matchday_terminal::history::{HistoryRow, SAMPLE_HISTORY, accuracy_percent};
use matchday_terminal::predictor::{Outcome, percent};
use matchday_terminal::state::{AppState, FormField};

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('h') => self.state.help_overlay = !self.state.help_overlay,
                KeyCode::Char('r') => self.state.reset_form(),
                _ => {}
            }
            return;
        }

        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.state.help_overlay = false;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(),
            KeyCode::Left => self.state.cycle_choice(false),
            KeyCode::Right => self.state.cycle_choice(true),
            KeyCode::Enter => self.state.submit(),
            KeyCode::Backspace => self.state.edit_backspace(),
            KeyCode::Char(c) => self.state.edit_char(c),
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new();
    app.state
        .push_log("[INFO] Fill in the form and press Enter to predict");
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    render_body(frame, chunks[1], &app.state);

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text()).block(Block::default());
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let status = if state.form.is_complete() {
        "Enter to predict"
    } else {
        "Enter team and opponent"
    };
    let line1 = format!("  .-.  MATCHDAY TERMINAL | Outcome Predictor | {status}");
    let line2 = " /___\\".to_string();
    let line3 = "  |_|".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text() -> String {
    "Tab/↑/↓ Move | ←/→ Venue/Formation | Enter Predict | Ctrl-R Reset | Ctrl-H Help | Esc Quit"
        .to_string()
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(36), Constraint::Length(46)])
        .split(area);

    render_form(frame, columns[0], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Min(6),
        ])
        .split(columns[1]);

    render_prediction(frame, right[0], state);
    render_model_inputs(frame, right[1], state);
    render_history(frame, right[2]);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("Match Details")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    const LABEL_WIDTH: usize = 11;
    for (i, field) in FormField::ORDER.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row_area = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };

        let focused = *field == state.focus;
        let style = if focused {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let mut value = state.form.value_text(*field);
        if focused && !field.is_choice() {
            value.push('_');
        }
        let line = format!("{:<LABEL_WIDTH$}{}", format!("{}:", field.label()), value);
        frame.render_widget(Paragraph::new(line).style(style), row_area);
    }
}

fn render_prediction(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Prediction").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let Some(result) = &state.prediction else {
        let empty = Paragraph::new("No prediction yet").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);

    let headline = format!(
        "{}  (confidence {}%)",
        result.outcome.label(),
        result.confidence_percent()
    );
    let headline_style = Style::default()
        .fg(outcome_color(result.outcome))
        .add_modifier(Modifier::BOLD);
    let summary = format!(
        "W {}%  D {}%  L {}%",
        percent(result.probs.win),
        percent(result.probs.draw),
        percent(result.probs.loss)
    );
    let text = Paragraph::new(format!("{headline}\n{summary}")).style(headline_style);
    frame.render_widget(text, rows[0]);

    let win = Bar::default()
        .value(percent(result.probs.win) as u64)
        .text_value(String::new())
        .style(Style::default().fg(Color::Green));
    let draw = Bar::default()
        .value(percent(result.probs.draw) as u64)
        .text_value(String::new())
        .style(Style::default().fg(Color::Yellow));
    let loss = Bar::default()
        .value(percent(result.probs.loss) as u64)
        .text_value(String::new())
        .style(Style::default().fg(Color::Red));

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&[win, draw, loss]))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(0)
        .max(100);
    frame.render_widget(chart, rows[1]);
}

fn render_model_inputs(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match &state.features {
        Some(v) => format!(
            "opponent_freq:  {:>6.1}\nvenue_home:     {:>6}\nxg:             {:>6.2}\nxga:            {:>6.2}\ncaptain_freq:   {:>6.1}\nformation_freq: {:>6.1}\nteam_freq:      {:>6.1}",
            v.opponent_freq,
            v.venue_home,
            v.xg,
            v.xga,
            v.captain_freq,
            v.formation_freq,
            v.team_freq
        ),
        None => "No inputs encoded yet".to_string(),
    };
    let inputs = Paragraph::new(text).block(
        Block::default()
            .title("Model Inputs (placeholder encoding)")
            .borders(Borders::ALL),
    );
    frame.render_widget(inputs, area);
}

fn render_history(frame: &mut Frame, area: Rect) {
    let title = format!(
        "Recent Predictions ({}% accuracy)",
        accuracy_percent(SAMPLE_HISTORY)
    );
    let lines: Vec<String> = SAMPLE_HISTORY.iter().map(history_line).collect();
    let list =
        Paragraph::new(lines.join("\n")).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn history_line(row: &HistoryRow) -> String {
    let hit = if row.result == row.predicted {
        "+"
    } else {
        "x"
    };
    format!(
        "{} vs {:<11} ({}) {:>3}  {} {}% {}",
        row.date,
        row.opponent,
        row.venue.label(),
        row.score,
        row.result.letter(),
        row.confidence,
        hit
    )
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Win => Color::Green,
        Outcome::Draw => Color::Yellow,
        Outcome::Loss => Color::Red,
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Matchday Terminal - Help",
        "",
        "Form:",
        "  Tab / ↓      Next field",
        "  Shift-Tab / ↑ Previous field",
        "  ← / →        Cycle venue or formation",
        "  Enter        Predict match result",
        "  Backspace    Delete in text field",
        "",
        "Global:",
        "  Ctrl-R       Reset form",
        "  Ctrl-H       Toggle help",
        "  Esc / Ctrl-Q Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
