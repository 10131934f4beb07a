//! Updateable text fields at fixed places on the terminal.
//!
//! There are two central parts to familiarize yourself with.
//!
//! The first is [`Session`]. It owns the terminal (through a [`Backend`]) and does all of the drawing: creating
//! fields, updating their text, drawing borders around them, and moving them around. It has to be [initialized]
//! before anything gets drawn, and [closed] when you're done, which also happens when it's dropped.
//!
//! The second is [`Field`]. It's a plain record of one field: where its text starts, how wide it is, what border it
//! has, and what it says. Every `Session` operation takes a field and returns an updated copy, so an operation
//! which fails leaves you holding the field exactly as it was.
//!
//! ```no_run
//! use termfields::{backends::CrosstermBackend, BorderStyle, Direction, Session};
//!
//! let mut session = Session::new(CrosstermBackend::new());
//! session.init().expect("failed to take over the terminal");
//! let field = session.create_field(5, 10, 8, "hello").unwrap();
//! let field = session.draw_box(&field, BorderStyle::Unicode).unwrap();
//! let field = session.shift(&field, Direction::Down).unwrap();
//! assert_eq!(field.row(), 6);
//! session.close();
//! ```
//!
//! # Features
//!
//! There's one feature to enable each builtin backend; see [`backends`] for details. `cli_crossterm` is on by
//! default.
//!
//! # Custom backends
//!
//! Anything which implements [`Backend`] can be drawn onto. Backends only need to put characters into cells and
//! show them on `flush`; the session handles all the geometry and bookkeeping.
//!
//! [initialized]: Session::init
//! [closed]: Session::close

mod error;
mod traits;

pub mod backends;

mod border;
mod field;
pub mod fmt;
mod pos;
pub mod screen;
mod session;

mod util;

pub use crate::{
    border::{BorderStyle, Glyphs},
    error::{Error, Result},
    field::{Direction, Field},
    pos::Pos,
    session::Session,
    traits::Backend,
};
