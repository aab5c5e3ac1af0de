use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use rudoku_core::{Difficulty, Game, Generator, MoveOutcome};

const MENU_ITEMS: [&str; 4] = ["New game", "Select difficulty", "About", "Quit"];
const WRONG_FLASH: Duration = Duration::from_millis(1000);
const WIN_SCREEN: Duration = Duration::from_secs(3);

enum Screen {
    Menu,
    DifficultyMenu,
    About,
    Playing,
    Won(Instant),
}

// A wrong digit shown briefly at its target cell before being cleared; the
// engine never stores it.
struct Flash {
    x: usize,
    y: usize,
    value: u8,
    until: Instant,
}

struct App {
    screen: Screen,
    menu_sel: usize,
    diff_sel: usize,
    difficulty: Difficulty,
    game: Option<Game>,
    sel: (usize, usize), // cursor as (row, col), 0-indexed
    flash: Option<Flash>,
    status: String,
}

impl App {
    fn new() -> Self {
        Self {
            screen: Screen::Menu,
            menu_sel: 0,
            diff_sel: 0,
            difficulty: Difficulty::Easy,
            game: None,
            sel: (0, 0),
            flash: None,
            status: String::new(),
        }
    }

    fn start_game(&mut self) -> anyhow::Result<()> {
        log::info!("starting a {} game", self.difficulty.label());
        let mut generator = Generator::new(None);
        self.game = Some(Game::with_difficulty(&mut generator, self.difficulty)?);
        self.sel = (0, 0);
        self.flash = None;
        self.status.clear();
        self.screen = Screen::Playing;
        Ok(())
    }
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("R U D O K U", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let style = if i == app.menu_sel {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(*item, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Difficulty: {}", app.difficulty.label())));
    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Menu"));
    frame.render_widget(para, area);
}

fn draw_difficulty_menu(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, d) in Difficulty::ALL.iter().enumerate() {
        let style = if i == app.diff_sel {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(d.label(), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Enter=select | Esc=back"));
    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Difficulty"));
    frame.render_widget(para, area);
}

fn draw_about(frame: &mut Frame, area: Rect) {
    let text = "HOW TO PLAY\n\n\
        1. Go to main menu > New game\n\
        2. Move the cursor with the arrow keys (or hjkl)\n\
        3. Press a digit to guess the value of the selected cell\n\n\
        A correct guess is kept and highlighted in green.\n\
        A wrong guess shows up in red for a moment, then clears.\n\n\
        Press any key to go back.";
    let para = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("About"));
    frame.render_widget(para, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, game: &Game) {
    let mut lines: Vec<Line> = Vec::new();
    for r in 0..9 {
        let mut spans: Vec<Span> = Vec::new();
        for c in 0..9 {
            let mut v = game.field().get(c, r);
            let mut style = Style::default();
            if game.player_filled().contains(&(c, r)) {
                style = style.fg(Color::Green);
            }
            if let Some(flash) = &app.flash {
                if (flash.x, flash.y) == (c, r) {
                    v = flash.value;
                    style = Style::default().fg(Color::Red);
                }
            }
            if (r, c) == app.sel {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            let ch = if v == 0 { ' ' } else { char::from(b'0' + v) };
            spans.push(Span::styled(format!(" {} ", ch), style));
            if c % 3 == 2 && c != 8 {
                spans.push(Span::styled("┃", Style::default().fg(Color::White)));
            }
        }
        lines.push(Line::from(spans));
        // Heavy horizontal separator between 3x3 bands
        if r % 3 == 2 && r != 8 {
            lines.push(Line::from(Span::styled(
                "━━━━━━━━━┿━━━━━━━━━┿━━━━━━━━━",
                Style::default().fg(Color::White),
            )));
        }
    }
    let block = Block::default().borders(Borders::ALL).title("Sudoku");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_counts(frame: &mut Frame, area: Rect, game: &Game) {
    let counts = game.count_remaining();
    let mut lines: Vec<Line> = vec![Line::from(format!("Total unfilled: {}", counts[0])), Line::from("")];
    for d in 1..=9 {
        lines.push(Line::from(format!("{}: {}", d, counts[d])));
    }
    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Remaining"));
    frame.render_widget(para, area);
}

fn draw_game(frame: &mut Frame, app: &App, game: &Game) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(13), Constraint::Length(4)])
        .split(frame.size());
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(33), Constraint::Min(20)])
        .split(rows[0]);
    draw_board(frame, cols[0], app, game);
    draw_counts(frame, cols[1], game);

    let help = format!(
        "arrows/hjkl=move | 1-9=guess | q=menu\nSelected: ({}, {})   Status: {}",
        app.sel.0 + 1,
        app.sel.1 + 1,
        app.status
    );
    let para = Paragraph::new(help).block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(para, rows[1]);
}

fn draw_won(frame: &mut Frame) {
    let size = frame.size();
    let area = Rect {
        x: size.width.saturating_sub(12) / 2,
        y: size.height / 2,
        width: size.width.min(12),
        height: 1,
    };
    let span = Span::styled("You won!", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
    frame.render_widget(Paragraph::new(Line::from(span)).alignment(Alignment::Center), area);
}

fn try_move_sel(sel: &mut (usize, usize), last_move: &mut Instant, cooldown: Duration, dr: isize, dc: isize) {
    let now = Instant::now();
    if now.duration_since(*last_move) < cooldown {
        return;
    }
    let nr = ((sel.0 as isize + dr).rem_euclid(9)) as usize;
    let nc = ((sel.1 as isize + dc).rem_euclid(9)) as usize;
    *sel = (nr, nc);
    *last_move = now;
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:#}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    let cooldown = Duration::from_millis(120);
    let mut last_move = Instant::now() - cooldown;

    loop {
        if let Some(flash) = &app.flash {
            if Instant::now() >= flash.until {
                app.flash = None;
            }
        }
        if let Screen::Won(since) = &app.screen {
            if since.elapsed() >= WIN_SCREEN {
                app.screen = Screen::Menu;
            }
        }

        terminal.draw(|f| {
            let area = f.size();
            match (&app.screen, &app.game) {
                (Screen::Menu, _) => draw_menu(f, area, app),
                (Screen::DifficultyMenu, _) => draw_difficulty_menu(f, area, app),
                (Screen::About, _) => draw_about(f, area),
                (Screen::Playing, Some(game)) => draw_game(f, app, game),
                (Screen::Won(_), Some(game)) => {
                    draw_game(f, app, game);
                    draw_won(f);
                }
                _ => {}
            }
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else { continue };

        match app.screen {
            Screen::Menu => match key.code {
                KeyCode::Down => {
                    if app.menu_sel + 1 < MENU_ITEMS.len() {
                        app.menu_sel += 1;
                    }
                }
                KeyCode::Up => app.menu_sel = app.menu_sel.saturating_sub(1),
                KeyCode::Enter => match app.menu_sel {
                    0 => app.start_game()?,
                    1 => {
                        app.diff_sel = Difficulty::ALL.iter().position(|&d| d == app.difficulty).unwrap_or(0);
                        app.screen = Screen::DifficultyMenu;
                    }
                    2 => app.screen = Screen::About,
                    _ => return Ok(()),
                },
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            },
            Screen::DifficultyMenu => match key.code {
                KeyCode::Down => {
                    if app.diff_sel + 1 < Difficulty::ALL.len() {
                        app.diff_sel += 1;
                    }
                }
                KeyCode::Up => app.diff_sel = app.diff_sel.saturating_sub(1),
                KeyCode::Enter => {
                    app.difficulty = Difficulty::ALL[app.diff_sel];
                    app.screen = Screen::Menu;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.screen = Screen::Menu,
                _ => {}
            },
            Screen::About => app.screen = Screen::Menu,
            Screen::Won(_) => app.screen = Screen::Menu,
            Screen::Playing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.screen = Screen::Menu,
                KeyCode::Left | KeyCode::Char('h') => try_move_sel(&mut app.sel, &mut last_move, cooldown, 0, -1),
                KeyCode::Right | KeyCode::Char('l') => try_move_sel(&mut app.sel, &mut last_move, cooldown, 0, 1),
                KeyCode::Up | KeyCode::Char('k') => try_move_sel(&mut app.sel, &mut last_move, cooldown, -1, 0),
                KeyCode::Down | KeyCode::Char('j') => try_move_sel(&mut app.sel, &mut last_move, cooldown, 1, 0),
                KeyCode::Char(ch) if ('1'..='9').contains(&ch) => {
                    let value = ch as u8 - b'0';
                    let (row, col) = app.sel;
                    let Some(game) = app.game.as_mut() else { continue };
                    match game.guess(row + 1, col + 1, value) {
                        MoveOutcome::Committed => {
                            app.status = format!("Placed {} at ({}, {})", value, row + 1, col + 1);
                            if game.is_complete() {
                                app.screen = Screen::Won(Instant::now());
                            }
                        }
                        MoveOutcome::Wrong => {
                            app.flash = Some(Flash {
                                x: col,
                                y: row,
                                value,
                                until: Instant::now() + WRONG_FLASH,
                            });
                            app.status = "Wrong guess".into();
                        }
                        MoveOutcome::AlreadyFilled => {
                            app.status = "This cell has already been filled".into();
                        }
                        MoveOutcome::InvalidInput => {
                            app.status = "Invalid input".into();
                        }
                    }
                }
                _ => {}
            },
        }
    }
}
