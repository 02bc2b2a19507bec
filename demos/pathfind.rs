//! Interactive pathfinding visualizer in the terminal.
//!
//! Run with `cargo run --bin pathfind`. Pass `--print` to render one seeded
//! map to stdout and exit; set `RUST_LOG=debug` there to see search logs.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use gridnav_core::Point;
use gridnav_demos::{Glyph, HEIGHT, HELP_TEXT, Visualizer, WIDTH};

const SEED: u64 = 0x9a7f;

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn color(glyph: Glyph) -> Color {
    match glyph {
        Glyph::Floor => Color::DarkGrey,
        Glyph::Wall => Color::Grey,
        Glyph::Start => Color::Green,
        Glyph::Goal => Color::Red,
        Glyph::Path => Color::Yellow,
        Glyph::Ray => Color::Cyan,
        Glyph::RayHit => Color::Magenta,
        Glyph::Overlay => Color::Blue,
    }
}

fn draw(out: &mut impl Write, vis: &Visualizer) -> io::Result<()> {
    for y in 0..HEIGHT {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        for x in 0..WIDTH {
            let p = Point::new(x, y);
            let (glyph, ch) = vis.cell(p);
            if p == vis.cursor() {
                queue!(out, SetBackgroundColor(Color::DarkBlue))?;
            }
            queue!(out, SetForegroundColor(color(glyph)), Print(ch), ResetColor)?;
        }
    }
    queue!(
        out,
        cursor::MoveTo(0, HEIGHT as u16 + 1),
        terminal::Clear(ClearType::CurrentLine),
        Print(vis.status_line())
    )?;
    for (i, line) in HELP_TEXT.lines().enumerate() {
        queue!(out, cursor::MoveTo(0, (HEIGHT + 2) as u16 + i as u16), Print(line))?;
    }
    out.flush()
}

fn run() -> io::Result<()> {
    let mut vis = Visualizer::scattered(WIDTH, HEIGHT, SEED);
    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    draw(&mut stdout, &vis)?;
    loop {
        let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = gridnav_demos::action_for(code) else {
            continue;
        };
        if !vis.apply(action) {
            return Ok(());
        }
        draw(&mut stdout, &vis)?;
    }
}

fn print_once() {
    env_logger::init();
    let vis = Visualizer::scattered(WIDTH, HEIGHT, SEED);
    for row in vis.render() {
        println!("{row}");
    }
    println!("{}", vis.status_line());
}

fn main() -> io::Result<()> {
    if std::env::args().skip(1).any(|a| a == "--print") {
        print_once();
        return Ok(());
    }
    run()
}
