//! Program images for the tcpu teaching processor.
//!
//! A program image is the ordered list of 16-bit words an assembler emits,
//! laid out from address 0. Two file formats are supported:
//!
//! - **text**: one hexadecimal word per line (`004A`), blank lines and
//!   surrounding whitespace ignored. This is the format a simulator
//!   front-end typically loads.
//! - **binary**: the words as a plain stream of big-endian byte pairs.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::error::Error as StdError;
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub type Word = u16;

/// An assembled program: machine words starting at address 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    pub fn from_words(words: Vec<Word>) -> Program {
        Program { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A text-format line did not parse as a hexadecimal word.
    InvalidWord { line: usize, token: String },
    /// A binary stream ended in the middle of a word.
    TruncatedWord,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::InvalidWord { line, token } => {
                write!(f, "line {}: \"{}\" is not a hexadecimal word", line, token)
            }
            Error::TruncatedWord => f.write_str("binary image ends mid-word"),
        }
    }
}

impl StdError for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

/// Parses the text format: one hexadecimal word per line.
pub fn parse_text(input: &str) -> Result<Program, Error> {
    let mut words = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let word = Word::from_str_radix(token, 16).map_err(|_| Error::InvalidWord {
            line: index + 1,
            token: token.to_string(),
        })?;
        words.push(word);
    }
    Ok(Program::from_words(words))
}

pub fn read_text<R: Read>(reader: &mut R) -> Result<Program, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_text(&input)
}

pub fn write_text<W: Write>(writer: &mut W, program: &Program) -> Result<(), Error> {
    for word in program.words() {
        writeln!(writer, "{:04X}", word)?;
    }
    Ok(())
}

/// Reads the binary format: big-endian words until end of stream.
pub fn read<R: Read>(reader: &mut R) -> Result<Program, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.len() % 2 != 0 {
        return Err(Error::TruncatedWord);
    }

    let mut words = Vec::with_capacity(bytes.len() / 2);
    let mut cursor = &bytes[..];
    while !cursor.is_empty() {
        words.push(cursor.read_u16::<BigEndian>()?);
    }
    Ok(Program::from_words(words))
}

pub fn write<W: Write>(writer: &mut W, program: &Program) -> Result<(), Error> {
    for word in program.words() {
        writer.write_u16::<BigEndian>(*word)?;
    }
    Ok(())
}

pub trait ReadImageExt: Read + Sized {
    fn read_image(&mut self) -> Result<Program, Error> {
        read(self)
    }

    fn read_image_text(&mut self) -> Result<Program, Error> {
        read_text(self)
    }
}

impl<R: Read + Sized> ReadImageExt for R {}

pub trait WriteImageExt: Write + Sized {
    fn write_image(&mut self, program: &Program) -> Result<(), Error> {
        write(self, program)
    }

    fn write_image_text(&mut self, program: &Program) -> Result<(), Error> {
        write_text(self, program)
    }
}

impl<W: Write + Sized> WriteImageExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Program, Error> {
    BufReader::new(File::open(path)?).read_image()
}

pub fn write_file<P: AsRef<Path>>(path: P, program: &Program) -> Result<(), Error> {
    BufWriter::new(File::create(path)?).write_image(program)
}

pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<Program, Error> {
    BufReader::new(File::open(path)?).read_image_text()
}

pub fn write_text_file<P: AsRef<Path>>(path: P, program: &Program) -> Result<(), Error> {
    BufWriter::new(File::create(path)?).write_image_text(program)
}
