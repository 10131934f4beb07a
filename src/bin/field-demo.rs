use std::process::exit;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use termfields::{
    backends::CrosstermBackend, fmt::Color, BorderStyle, Direction, Field, Pos, Session,
};

const WIDTH: usize = 12;

fn center(size: Pos) -> Pos {
    Pos(size.x() / 2 - WIDTH as isize / 2, size.y() / 2)
}

fn run(session: &mut Session<CrosstermBackend>, border: BorderStyle) -> termfields::Result<()> {
    session.create_field(1, 2, 60, "arrows: shift   b: border   m: recenter   q: quit")?;
    let Pos(col, row) = center(session.size());
    let mut field: Field = session.create_field(row, col, WIDTH, "")?;
    field = session.draw_box(&field, border)?;
    let mut moves = 0usize;
    loop {
        let label = format!("moves: {}", moves);
        field = session.update(&field, &format!("{:<width$}", label, width = WIDTH))?;
        let code = match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => code,
            _ => continue,
        };
        let dir = match code {
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Char('b') => {
                field = session.draw_box(&field, field.border().next())?;
                continue;
            }
            KeyCode::Char('m') => {
                let Pos(col, row) = center(session.size());
                field = session.move_to(&field, row, col)?;
                continue;
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => continue,
        };
        field = session.shift(&field, dir)?;
        moves += 1;
    }
    Ok(())
}

fn main() {
    let border = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{} (try none, ascii, or unicode)", e);
                exit(2);
            }
        },
        None => BorderStyle::Unicode,
    };
    let mut session = Session::new(CrosstermBackend::new()).fg(Color::BrightGreen);
    session.init().expect("failed to initialize terminal");
    let res = run(&mut session, border);
    session.close();
    if let Err(e) = res {
        eprintln!("field-demo failed: {}", e);
        exit(1);
    }
}
