//! Buffered text-file helpers and filename utilities.
//!
//! Free functions only; none of them hold state. Callers own the readers and
//! writers, so the same handle can serve several calls in a row.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Open a buffered reader over the file at `path`.
pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// Open a buffered writer over the file at `path`, truncating any prior content.
pub fn open_writer<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Read everything remaining in `reader`, normalizing line endings to `\n`.
pub fn read_to_string<R: BufRead>(reader: R) -> io::Result<String> {
    let mut out = String::new();
    for line in reader.lines() {
        out.push_str(&line?);
        out.push('\n');
    }
    Ok(out)
}

/// Read the next line and split it on commas, trimming each field.
/// Returns `None` at end of input.
pub fn read_csv_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<String>>> {
    Ok(next_line(reader)?
        .map(|line| line.split(',').map(|s| s.trim().to_owned()).collect()))
}

/// Read the next line and split it on ASCII whitespace.
/// Returns `None` at end of input.
pub fn read_ssv_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<String>>> {
    Ok(next_line(reader)?
        .map(|line| line.split_whitespace().map(str::to_owned).collect()))
}

fn next_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Write `fields` as one comma-separated line.
pub fn write_csv<W: Write, T: Display>(out: &mut W, fields: &[T]) -> io::Result<()> {
    write_joined(out, ',', fields)
}

/// Write `fields` as one space-separated line.
pub fn write_ssv<W: Write, T: Display>(out: &mut W, fields: &[T]) -> io::Result<()> {
    write_joined(out, ' ', fields)
}

/// Write `fields` joined by `sep`, followed by a newline.
pub fn write_joined<W: Write, T: Display>(out: &mut W, sep: char, fields: &[T]) -> io::Result<()> {
    writeln!(out, "{}", join_with(sep, fields))
}

/// Join the displayed form of `items` with `sep`. An empty slice yields "".
pub fn join_with<T: Display>(sep: char, items: &[T]) -> String {
    let mut s = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            s.push(sep);
        }
        s.push_str(&item.to_string());
    }
    s
}

/// Extension of `filename`: the text after the last `.`, lowercased.
///
/// A dot at index 0 does not count (".hidden" has no extension), and neither
/// does a trailing dot.
pub fn file_extension(filename: &str) -> Option<String> {
    let index = filename.rfind('.')?;
    if index == 0 {
        return None;
    }
    let ext = &filename[index + 1..];
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
