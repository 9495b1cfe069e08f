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

/// Splits a single line of an EPW file into its comma-separated
/// elements. Commas within quotation marks do not split.
pub(crate) struct HeaderScanner<'a> {
    /// Indicates the position of current character being
    /// scanned
    current: usize,

    /// Indicates the position of the first character of the
    /// element being scanned
    start: usize,

    /// The data source
    src: &'a [u8],

    /// Are we in a string? (i.e. within quotation marks, e.g. " STRING ")
    in_string: bool,

    /// Did we reach the end of the line?
    line_ended: bool,
}

impl<'a> HeaderScanner<'a> {
    /// Creates a new scanner.
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            current: 0,
            start: 0,
            src,
            in_string: false,
            line_ended: false,
        }
    }

    /// Checks if the scanner is finished
    fn is_finished(&self) -> bool {
        self.line_ended || self.current > self.src.len()
    }

    /// Scans all the characters until reaching the Comma (or the end of the line).
    fn scan_element(&mut self) -> Option<&'a [u8]> {
        if self.is_finished() {
            return None;
        }

        while self.current < self.src.len() {
            // If we find a comma, and we are not in a string, break
            if !self.in_string && self.src[self.current] == b',' {
                break;
            }

            if self.src[self.current] == b'\n' {
                self.line_ended = true;
                break;
            }

            // Toggle string if we are in one.
            if self.src[self.current] == b'"' {
                self.in_string = !self.in_string;
            }
            self.current += 1;
        }

        // Ignore the \r
        let mut end = self.current;
        if end > self.start && self.src[end - 1] == b'\r' {
            end -= 1;
        }
        let (ini, fin) = (self.start, end);

        self.current += 1; // skip the comma
        self.start = self.current;

        self.src.get(ini..fin)
    }

    /// Scans the whole first line
    pub fn scan_line(mut self) -> Result<Vec<String>, String> {
        let mut ret = Vec::new();
        while let Some(slice) = self.scan_element() {
            let s = String::from_utf8(slice.to_vec()).map_err(|e| e.to_string())?;
            ret.push(s.trim().to_string());
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_line() -> Result<(), String> {
        let src = b"Hello,,how\r\n,are,you";
        let elements = HeaderScanner::new(src).scan_line()?;
        assert_eq!(elements, vec!["Hello", "", "how"]);

        let src = b"LOCATION,\"auto,con,ruedas\",tres";
        let elements = HeaderScanner::new(src).scan_line()?;
        assert_eq!(elements, vec!["LOCATION", "\"auto,con,ruedas\"", "tres"]);

        let elements = HeaderScanner::new(b"").scan_line()?;
        assert_eq!(elements, vec![""]);
        Ok(())
    }
}
