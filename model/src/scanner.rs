/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::LibraryObject;
use std::fmt::Display;

/// Scans IDF text (e.g., `Material, name, field, field;`) into [`LibraryObject`]s.
///
/// Comments start with `!` and run until the end of the line. A comment
/// written after a field (e.g., `0.1, !- Thickness {m}`) is kept as the
/// description of that field.
pub(crate) struct IdfScanner<'a> {
    /// The line being read
    line: usize,

    source: &'a [u8],

    current_index: usize,

    start_index: usize,

    finished: bool,
}

impl<'a> IdfScanner<'a> {
    /// Creates a new [`IdfScanner`]
    pub(crate) fn new(source: &'a [u8], line: usize) -> Self {
        Self {
            finished: source.is_empty(),
            source,
            line,
            current_index: 0,
            start_index: 0,
        }
    }

    /// Creates an syntax error message
    fn make_error_msg<S: Display>(msg: S, ln: usize) -> String {
        format!("Error [in line {}]: {}", ln, msg)
    }

    /// Advances one `byte` in the `source`, returning the consumed
    /// `char` inside of an `Option`. If finished, it will mark the
    /// [`IdfScanner`] as finished and return `None`
    fn advance(&mut self) -> Option<char> {
        if let Some(v) = self.source.get(self.current_index) {
            self.current_index += 1;
            if self.current_index == self.source.len() {
                self.finished = true;
            }
            if *v == b'\n' {
                self.line += 1;
            }
            Some(*v as char)
        } else {
            self.finished = true;
            None
        }
    }

    /// Gets the `char` at the `current_index`. Returns `\0` if
    /// finished.
    fn peek(&self) -> char {
        if self.finished {
            return '\0';
        }
        self.source[self.current_index] as char
    }

    /// Consumes everything until the end of the line (the new line
    /// is not consumed)
    fn skip_line(&mut self) {
        while !self.finished && self.peek() != '\n' {
            self.advance();
        }
    }

    /// Skips the white spaces and the comments
    fn skip_white_space(&mut self) {
        while !self.finished {
            match self.peek() {
                ' ' | '\r' | '\t' | '\n' => {
                    self.advance();
                }
                '!' => self.skip_line(),
                _ => return,
            }
        }
    }

    /// Gets the text between `ini` and `fin`, trimmed
    fn text(&self, ini: usize, fin: usize) -> Result<String, String> {
        let slice = self.source.get(ini..fin).ok_or_else(|| {
            Self::make_error_msg("Internal error... could not source text", self.line)
        })?;
        let s = std::str::from_utf8(slice).map_err(|e| Self::make_error_msg(e, self.line))?;
        Ok(s.trim().to_string())
    }

    /// Consumes a whole field, including its terminator. Returns
    /// the trimmed text of the field and the terminator (i.e., `,` or `;`)
    fn field(&mut self) -> Result<(String, char), String> {
        self.skip_white_space();
        self.start_index = self.current_index;
        loop {
            match self.peek() {
                ',' | ';' => {
                    let fin = self.current_index;
                    let terminator = self.advance().unwrap_or(';');
                    let value = self.text(self.start_index, fin)?;
                    return Ok((value, terminator));
                }
                '!' => {
                    // A comment in the middle of a field... that
                    // means a missing separator
                    let errmsg = Self::make_error_msg(
                        "Expecting ',' or ';' before a comment",
                        self.line,
                    );
                    return Err(errmsg);
                }
                '\0' if self.finished => {
                    let errmsg = Self::make_error_msg("Unexpected End of File", self.line);
                    return Err(errmsg);
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Consumes the comment that follows a field in the same
    /// line, if any. Returns its text without the leading `!` or `!-`
    fn trailing_comment(&mut self) -> Result<String, String> {
        while self.peek() == ' ' || self.peek() == '\t' || self.peek() == '\r' {
            self.advance();
        }
        if self.peek() != '!' {
            return Ok(String::new());
        }
        self.advance();
        if self.peek() == '-' {
            self.advance();
        }
        let ini = self.current_index;
        self.skip_line();
        self.text(ini, self.current_index)
    }

    /// Parses all the objects in the source
    pub(crate) fn parse_objects(&mut self) -> Result<Vec<LibraryObject>, String> {
        let mut ret = Vec::new();
        loop {
            self.skip_white_space();
            if self.finished {
                break;
            }

            let ln = self.line;
            let (class, terminator) = self.field()?;
            if terminator == ';' {
                // Objects with no fields (e.g., `Output:Surfaces:Drawing;`)
                // are not library objects
                self.trailing_comment()?;
                continue;
            }
            self.trailing_comment()?;

            let (name, mut terminator) = self.field()?;
            self.trailing_comment()?;
            if name.is_empty() {
                let errmsg = Self::make_error_msg(format!("'{}' object has no name", class), ln);
                return Err(errmsg);
            }

            let mut object = LibraryObject::new(class, name);
            while terminator == ',' {
                let (value, t) = self.field()?;
                let comment = self.trailing_comment()?;
                object.push_field(value, comment);
                terminator = t;
            }
            ret.push(object);
        }
        Ok(ret)
    }
}

/***********/
/* TESTING */
/***********/
