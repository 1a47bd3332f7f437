use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::{Board, BoardErr};
use crate::config::Format;
use crate::data::{CELLS, SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErr {
    Pos(usize, usize),
    Rows(usize),
    Cols(usize, usize),
    Board(BoardErr),
}

impl Display for ParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParseErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParseErr::Rows(cnt) => write!(f, "Expected {} rows, found {}", SIZE, cnt),
            ParseErr::Cols(r, cnt) => {
                write!(f, "Expected {} cells on row {}, found {}", SIZE, r, cnt)
            }
            ParseErr::Board(ref err) => write!(f, "Invalid board: {}", err),
        }
    }
}

impl Error for ParseErr {}

impl From<BoardErr> for ParseErr {
    fn from(err: BoardErr) -> Self {
        ParseErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParseErr;

    fn from_str(s: &str) -> Result<Board, ParseErr> {
        parse(s)
    }
}

/// Guesses the format - compact boards have no whitespace inside them.
pub fn parse(text: &str) -> Result<Board, ParseErr> {
    let text = text.trim();
    if text.contains(char::is_whitespace) {
        parse_format(text, Format::Grid)
    } else {
        parse_format(text, Format::Compact)
    }
}

pub fn parse_format(text: &str, format: Format) -> Result<Board, ParseErr> {
    let text = text.trim();
    match format {
        Format::Grid => parse_grid(text),
        Format::Compact => parse_compact(text),
    }
}

fn parse_grid(text: &str) -> Result<Board, ParseErr> {
    let size = usize::from(SIZE);
    let lines: Vec<_> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() != size {
        return Err(ParseErr::Rows(lines.len()));
    }

    let mut cells = [0; CELLS];
    for (r, line) in lines.iter().enumerate() {
        let tokens: Vec<_> = line.split_whitespace().collect();
        if tokens.len() != size {
            return Err(ParseErr::Cols(r, tokens.len()));
        }
        for (c, token) in tokens.iter().enumerate() {
            cells[r * size + c] = parse_value(token).ok_or(ParseErr::Pos(r, c))?;
        }
    }
    Ok(Board::from_cells(cells)?)
}

fn parse_compact(text: &str) -> Result<Board, ParseErr> {
    let size = usize::from(SIZE);
    let chars: Vec<_> = text.chars().collect();
    if chars.len() != CELLS {
        // report the row where it stopped making sense
        let r = chars.len().min(CELLS) / size;
        return Err(ParseErr::Cols(r, chars.len() % size));
    }

    let mut cells = [0; CELLS];
    for (i, &ch) in chars.iter().enumerate() {
        let mut buf = [0; 4];
        cells[i] = parse_value(ch.encode_utf8(&mut buf)).ok_or(ParseErr::Pos(i / size, i % size))?;
    }
    Ok(Board::from_cells(cells)?)
}

fn parse_value(token: &str) -> Option<u8> {
    match token {
        "_" => Some(0),
        _ => token.parse().ok(),
    }
}
