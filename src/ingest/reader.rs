// src/ingest/reader.rs
//! Minimal quote-aware CSV record splitting.
//!
//! Handles RFC 4180 quoting: fields may be wrapped in double quotes,
//! doubled quotes escape a literal quote, and quoted fields may contain
//! commas and line breaks. Anything fancier belongs upstream in the
//! dataset cleaning step.

use std::iter::Peekable;
use std::str::Chars;

/// Splits CSV text into records of raw field strings.
pub fn records(content: &str) -> impl Iterator<Item = Vec<String>> + '_ {
    RecordIter {
        chars: content.chars().peekable(),
        done: false,
    }
}

struct RecordIter<'a> {
    chars: Peekable<Chars<'a>>,
    done: bool,
}

impl Iterator for RecordIter<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        if self.done {
            return None;
        }

        let mut record: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut saw_any = false;

        while let Some(c) = self.chars.next() {
            saw_any = true;
            match c {
                '"' if in_quotes => {
                    if self.chars.peek() == Some(&'"') {
                        self.chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '"' => in_quotes = true,
                ',' if !in_quotes => record.push(std::mem::take(&mut field)),
                '\r' if !in_quotes => {
                    if self.chars.peek() == Some(&'\n') {
                        self.chars.next();
                    }
                    record.push(field);
                    return Some(record);
                }
                '\n' if !in_quotes => {
                    record.push(field);
                    return Some(record);
                }
                _ => field.push(c),
            }
        }

        self.done = true;
        if saw_any {
            record.push(field);
            Some(record)
        } else {
            None
        }
    }
}
