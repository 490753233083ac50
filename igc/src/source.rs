// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::BufRead;

use crate::Error;

/// A sequential source of lines.
///
/// The header and track decoders read from a line source one line at a time
/// and never own the underlying file or buffer. A decoder that reads a line
/// it doesn't consume hands it back with [`push_back`](LineSource::push_back)
/// so the next decoder starts at that line.
pub trait LineSource {
    /// Reads the next line without line terminator and trailing whitespace.
    ///
    /// Returns `None` at the end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableSource`] if the underlying reader fails.
    fn next_line(&mut self) -> Result<Option<Vec<u8>>, Error>;

    /// Returns a line to the source, which is read again by the next call to
    /// [`next_line`](LineSource::next_line).
    fn push_back(&mut self, line: Vec<u8>);

    /// The 1-based number of the line returned last, or 0 before the first
    /// line is read.
    fn line_number(&self) -> usize;
}

impl<S> LineSource for &mut S
where
    S: LineSource + ?Sized,
{
    fn next_line(&mut self) -> Result<Option<Vec<u8>>, Error> {
        (**self).next_line()
    }

    fn push_back(&mut self, line: Vec<u8>) {
        (**self).push_back(line)
    }

    fn line_number(&self) -> usize {
        (**self).line_number()
    }
}

/// Line source reading from a buffered reader.
///
/// Lines are split at `\n`. Any line terminator and trailing whitespace is
/// removed, so files with `\r\n` or `\n` endings read alike. Bytes are
/// passed on as is without UTF-8 validation.
///
/// # Examples
///
/// ```
/// use igc::{IgcHeader, LineReader, LineSource};
///
/// let data = b"AXSDUB4963\r\nHFPLTPILOTINCHARGE:JuM\r\nB1015305207650N00610100EA0012300150\r\n";
/// let mut source = LineReader::new(&data[..]);
///
/// let header = IgcHeader::decode(&mut source)?;
/// assert_eq!(header.pilot_name, "JuM");
///
/// // the first B record is still available
/// let line = source.next_line()?.expect("there should be a B record");
/// assert!(line.starts_with(b"B101530"));
/// # Ok::<(), igc::Error>(())
/// ```
pub struct LineReader<R> {
    inner: R,
    pushed: Vec<Vec<u8>>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed: Vec::new(),
            line: 0,
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Result<Option<Vec<u8>>, Error> {
        if let Some(line) = self.pushed.pop() {
            self.line += 1;
            return Ok(Some(line));
        }

        let mut buf = Vec::new();
        if self.inner.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let len = buf.trim_ascii_end().len();
        buf.truncate(len);
        self.line += 1;
        Ok(Some(buf))
    }

    fn push_back(&mut self, line: Vec<u8>) {
        self.pushed.push(line);
        self.line = self.line.saturating_sub(1);
    }

    fn line_number(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read};

    use super::*;

    #[test]
    fn reads_lines_without_terminators() {
        let mut source = LineReader::new(&b"A1\r\nH2\n\nB3"[..]);
        assert_eq!(source.next_line(), Ok(Some(b"A1".to_vec())));
        assert_eq!(source.next_line(), Ok(Some(b"H2".to_vec())));
        assert_eq!(source.next_line(), Ok(Some(Vec::new())));
        assert_eq!(source.next_line(), Ok(Some(b"B3".to_vec())));
        assert_eq!(source.line_number(), 4);
        assert_eq!(source.next_line(), Ok(None));
    }

    #[test]
    fn pushed_back_line_is_read_again() {
        let mut source = LineReader::new(&b"A1\nB2\nB3\n"[..]);
        source.next_line().expect("line should be read");
        let line = source.next_line().expect("line should be read");
        assert_eq!(source.line_number(), 2);

        source.push_back(line.expect("there should be a line"));
        assert_eq!(source.line_number(), 1);
        assert_eq!(source.next_line(), Ok(Some(b"B2".to_vec())));
        assert_eq!(source.line_number(), 2);
        assert_eq!(source.next_line(), Ok(Some(b"B3".to_vec())));
    }

    #[test]
    fn keeps_non_utf8_bytes() {
        let mut source = LineReader::new(&b"HFPLTPILOTINCHARGE:J\xfcrgen\r\n"[..]);
        assert_eq!(
            source.next_line(),
            Ok(Some(b"HFPLTPILOTINCHARGE:J\xfcrgen".to_vec()))
        );
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn reports_unreadable_source() {
        let mut source = LineReader::new(BufReader::new(FailingReader));
        assert_eq!(
            source.next_line(),
            Err(Error::UnreadableSource("disk on fire".to_string()))
        );
    }
}
