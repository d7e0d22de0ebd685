//! Play command implementation - Interactive TUI pegboard.

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crib::render::describe_tally;
use crib::{Action, Player, Session, TallyCategory, WINNING_SCORE};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{stdout, Stdout};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub(crate) fn execute(first: u8) -> Result<(), CliError> {
    let active = Player::from_number(first)
        .ok_or_else(|| CliError::new(format!("No player {first} (expected 1 or 2)")))?;

    run_tui(App::new(active))
}

/// Keyboard key that claims `category` on the board.
///
/// Categories map to digits in catalog order: `1` is the first, `0` the tenth.
pub(crate) fn key_for_category(category: TallyCategory) -> char {
    let digit = u32::try_from((category.index() + 1) % 10).unwrap_or(0);
    char::from_digit(digit, 10).unwrap_or('?')
}

/// Category claimed by a digit key.
fn category_for_key(key: char) -> Option<TallyCategory> {
    let digit = usize::try_from(key.to_digit(10)?).ok()?;
    TallyCategory::ALL.get((digit + 9) % 10).copied()
}

/// App state for the TUI.
#[derive(Debug)]
struct App {
    session: Session,
    active: Player,
    status: Option<&'static str>,
}

const GAME_OVER: &str = "Game over - press [n] to play again";

impl App {
    fn new(active: Player) -> Self {
        Self {
            session: Session::new(),
            active,
            status: None,
        }
    }

    /// Handle one key press. Returns `false` when the user quits.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        self.status = None;
        let player = self.active;

        let action = match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab | KeyCode::BackTab => {
                self.active = self.active.opponent();
                return true;
            }
            KeyCode::Char('+' | '=') => Some(Action::Adjust { player, delta: 1 }),
            KeyCode::Char('-') => Some(Action::Adjust { player, delta: -1 }),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                category_for_key(c).map(|category| Action::AddTally { player, category })
            }
            KeyCode::Backspace => Some(Action::ResetTurn { player }),
            KeyCode::Enter => {
                if self.session.board().is_locked() {
                    // Keep the tally rather than clearing it against a locked board
                    self.status = Some(GAME_OVER);
                    None
                } else if self.session.can_submit(player) {
                    Some(Action::SubmitTurn { player })
                } else {
                    self.status = Some("Nothing to score yet");
                    None
                }
            }
            KeyCode::Char('n') => Some(Action::ResetGame),
            _ => None,
        };

        if let Some(action) = action
            && !self.session.dispatch(action)
            && self.session.board().is_locked()
        {
            self.status = Some(GAME_OVER);
        }

        true
    }
}

fn run_tui(app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
) -> Result<(), CliError> {
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Player 2 (across the table)
            Constraint::Length(3), // Winner banner
            Constraint::Min(9),    // Player 1
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_panel(f, chunks[1], app, Player::Two);
    render_banner(f, chunks[2], app);
    render_panel(f, chunks[3], app, Player::One);
    render_footer(f, chunks[4], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let record = app.session.record();
    let title = format!(
        " Crib Pegboard | Games {} - {} | Active: {} ",
        record.wins(Player::One),
        record.wins(Player::Two),
        app.active
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_panel(f: &mut Frame, area: Rect, app: &App, player: Player) {
    let board = app.session.board();
    let tally = app.session.tally(player);
    let color = player_color(player);

    let border_style = if player == app.active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {player} "));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let score = board.score(player);
    let peg = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(score) / f64::from(WINNING_SCORE))
        .label(format!("{score}/{WINNING_SCORE}"));
    f.render_widget(peg, rows[0]);

    let mut lines = vec![
        Line::from(format!(
            "Score: {} - {}",
            score,
            board.score(player.opponent())
        )),
        Line::from(""),
    ];

    let mut turn = format!("Turn score: {}", tally.total());
    if !tally.is_empty() {
        turn.push_str(&format!("  ({})", describe_tally(tally)));
    }
    lines.push(Line::from(Span::styled(
        turn,
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let buttons: Vec<Span> = TallyCategory::ALL
        .into_iter()
        .map(|category| {
            let style = if tally.quantity(category) > 0 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Span::styled(
                format!(
                    "[{}] {}({})  ",
                    key_for_category(category),
                    category.label(),
                    category.point_value()
                ),
                style,
            )
        })
        .collect();
    lines.push(Line::from(buttons));

    let submit_style = if app.session.can_submit(player) && !board.is_locked() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        Span::raw("[Backspace] reset  "),
        Span::styled("[Enter] score it", submit_style),
    ]));

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(body, rows[1]);
}

fn render_banner(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.session.board().winner() {
        Some(winner) => Line::from(vec![
            Span::styled(
                format!("{winner} wins!"),
                Style::default()
                    .fg(player_color(winner))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  [n] Play again"),
        ]),
        None => Line::from(app.status.unwrap_or("First to 121")),
    };

    let banner = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(banner, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Blue,
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.session.board().is_locked() {
        " [q] Quit  [n] Play again  [Tab] Switch player "
    } else {
        " [q] Quit  [Tab] Switch player  [+/-] Adjust  [0-9] Claim  [Enter] Score  [Backspace] Reset turn  [n] New game "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_round_trip() {
        for category in TallyCategory::ALL {
            assert_eq!(category_for_key(key_for_category(category)), Some(category));
        }
        assert_eq!(key_for_category(TallyCategory::Fifteen), '1');
        assert_eq!(key_for_category(TallyCategory::Nobs), '0');
        assert_eq!(category_for_key('x'), None);
    }

    #[test]
    fn test_keys_build_and_submit_turn() {
        let mut app = App::new(Player::One);
        assert!(app.handle_key(KeyCode::Char('1')));
        assert!(app.handle_key(KeyCode::Char('1')));
        assert!(app.handle_key(KeyCode::Char('0')));
        assert_eq!(app.session.tally(Player::One).total(), 5);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session.board().score(Player::One), 5);
        assert!(app.session.tally(Player::One).is_empty());
    }

    #[test]
    fn test_enter_disabled_for_empty_turn() {
        let mut app = App::new(Player::Two);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session, Session::new());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_tab_switches_active_player() {
        let mut app = App::new(Player::One);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.session.board().score(Player::Two), 1);
        assert_eq!(app.session.board().score(Player::One), 0);
    }

    #[test]
    fn test_play_again_after_winner() {
        let mut app = App::new(Player::One);
        app.session.dispatch(Action::Adjust {
            player: Player::One,
            delta: 120,
        });
        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.session.board().winner(), Some(Player::One));

        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.session.board().score(Player::Two), 0);
        assert!(app.status.is_some());

        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.session.board().winner(), None);
        assert_eq!(app.session.record().wins(Player::One), 1);
    }

    #[test]
    fn test_enter_keeps_tally_after_winner() {
        let mut app = App::new(Player::Two);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('1'));
        app.session.dispatch(Action::Adjust {
            player: Player::One,
            delta: 121,
        });
        assert!(app.session.board().is_locked());

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session.tally(Player::Two).total(), 4);
        assert_eq!(app.session.board().score(Player::Two), 0);
        assert_eq!(app.status, Some(GAME_OVER));

        // The tally is still there to submit in the next game
        app.handle_key(KeyCode::Char('n'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session.board().score(Player::Two), 4);
        assert!(app.session.tally(Player::Two).is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Player::One);
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Esc));
    }
}
