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

use std::collections::HashSet;

/// An entry of a [`Report`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    /// A progress message
    Message(String),
    /// A warning
    Warning(String),
}

impl std::fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportEntry::Message(m) => write!(f, "{}", m),
            ReportEntry::Warning(w) => write!(f, "Warning: {}", w),
        }
    }
}

/// The textual log of a write (and, possibly, a run): the progress
/// messages and the warnings issued along the way, in the order in
/// which they were issued.
///
/// Every entry is also emitted through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
    warned_once: HashSet<String>,
}

impl Report {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a progress message
    pub fn info<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        tracing::info!("{}", msg);
        self.entries.push(ReportEntry::Message(msg));
    }

    /// Records a warning
    pub fn warn<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        tracing::warn!("{}", msg);
        self.entries.push(ReportEntry::Warning(msg));
    }

    /// Records a warning unless another warning with the same
    /// `key` has already been recorded
    pub fn warn_once<S: Into<String>>(&mut self, key: &str, msg: S) {
        if self.warned_once.insert(key.to_string()) {
            self.warn(msg)
        }
    }

    /// All the entries, in order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The progress messages, in order
    pub fn messages(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                ReportEntry::Message(m) => Some(m.as_str()),
                ReportEntry::Warning(_) => None,
            })
            .collect()
    }

    /// The warnings, in order
    pub fn warnings(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                ReportEntry::Warning(w) => Some(w.as_str()),
                ReportEntry::Message(_) => None,
            })
            .collect()
    }

    /// Counts the warnings that contain a certain text
    pub fn count_warnings(&self, text: &str) -> usize {
        self.warnings().iter().filter(|w| w.contains(text)).count()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in &self.entries {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}

/***********/
/* TESTING */
/***********/
