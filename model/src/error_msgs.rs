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

use std::fmt::Display;

/// How serious a message is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Something the user might want to know
    Info,
    /// Something went wrong, but the workflow continued
    Warning,
    /// The workflow could not continue
    Error,
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MessageKind::Info => "Info",
            MessageKind::Warning => "Warning",
            MessageKind::Error => "Error",
        };
        write!(f, "{}", s)
    }
}

/// Builds a message that tells the user which part of
/// the workflow it is comming from
///
/// ```
/// use model::{format_message, MessageKind};
/// let msg = format_message(MessageKind::Warning, "Write IDF", "something happened");
/// assert_eq!(msg, "Warning: [in Write IDF] something happened");
/// ```
pub fn format_message<C: Display, T: Display>(kind: MessageKind, module_name: C, msg: T) -> String {
    format!("{}: [in {}] {}", kind, module_name, msg)
}

/// Prints a warning message.
///
/// ```
/// use model::print_warning;
/// print_warning("Write IDF", "some warning");
/// ```
pub fn print_warning<C: Display, T: Display>(module_name: C, msg: T) {
    eprintln!("{}", format_message(MessageKind::Warning, module_name, msg))
}

/// Prints an error message.
///
/// ```
/// use model::print_error;
/// print_error("Run Simulation", "some error");
/// ```
pub fn print_error<C: Display, T: Display>(module_name: C, msg: T) {
    eprintln!("{}", format_message(MessageKind::Error, module_name, msg))
}
