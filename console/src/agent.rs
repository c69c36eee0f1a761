use std::io::{self, BufRead, Cursor, Write};

use uno_engine::{
    agent::PlayerAgent,
    card::{Card, Color},
    error::{Result, UnoError},
    turn::Choice,
};

use crate::render::{render, render_color};

/// Somewhere to read the human's answers from, one line at a time.
pub trait LineSource {
    /// `None` once the input is closed.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl LineSource for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if BufRead::read_line(self, &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }
}

pub fn prompt(
    input: &mut impl LineSource,
    output: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    input.next_line()
}

/// The human seat, played from a terminal.
pub struct ConsoleAgent<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> ConsoleAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_index(&mut self, message: &str) -> Result<Option<usize>> {
        match prompt(&mut self.input, &mut self.output, message)? {
            Some(line) => Ok(line.trim().parse().ok()),
            None => Err(UnoError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ))),
        }
    }
}

impl<R: LineSource, W: Write> PlayerAgent for ConsoleAgent<R, W> {
    fn choose_card(&mut self, hand: &[Card], discard_top: &Card, can_draw: bool) -> Result<Choice> {
        loop {
            writeln!(self.output)?;
            for (index, card) in hand.iter().enumerate() {
                writeln!(self.output, "\t{index}: {}", render(card))?;
            }
            if can_draw {
                writeln!(self.output, "\t{}: draw a card!", hand.len())?;
            }

            let message = format!("\nCurrent card: {}\nInput: ", render(discard_top));
            match self.read_index(&message)? {
                Some(index) if can_draw && index == hand.len() => return Ok(Choice::Draw),
                Some(index) if index < hand.len() => return Ok(Choice::Play(index)),
                _ => writeln!(self.output, "Please enter a valid number!")?,
            }
        }
    }

    fn choose_color(&mut self, options: &[Color]) -> Result<Color> {
        let listing: String = options
            .iter()
            .enumerate()
            .map(|(index, color)| format!("|{index}: {}|", render_color(*color)))
            .collect();

        loop {
            match self.read_index(&format!("Color: {listing}\nInput: "))? {
                Some(index) if index < options.len() => return Ok(options[index]),
                _ => writeln!(self.output, "Please enter a valid number!")?,
            }
        }
    }
}
