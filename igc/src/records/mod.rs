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

//! IGC records.
//!
//! Every line of an IGC file is one record whose type is given by the
//! first byte. Only the B record has a fixed column layout worth a
//! [`Fix`] type; the other records are classified by [`RecordKind`].

mod fix;

pub use fix::{Fix, FIX_MIN_LENGTH};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum RecordKind {
    /// `A`: flight recorder manufacturer and serial, always the first record.
    Manufacturer,
    /// `H`: one tagged header field.
    Header,
    /// `I`: layout of the B record extension.
    FixExtension,
    /// `B`: one GNSS fix.
    Fix,
    /// `L`: free text log book entry.
    Comment,
    /// `G`: security signature.
    Security,
    /// Any other record type, or a blank line.
    Other,
}

impl RecordKind {
    /// Classifies a line by its record type byte.
    pub fn of(line: &[u8]) -> Self {
        match line.first() {
            Some(b'A') => Self::Manufacturer,
            Some(b'H') => Self::Header,
            Some(b'I') => Self::FixExtension,
            Some(b'B') => Self::Fix,
            Some(b'L') => Self::Comment,
            Some(b'G') => Self::Security,
            _ => Self::Other,
        }
    }
}

/// Iterator over the records of an IGC file held in memory.
///
/// Yields every line with trailing whitespace and line terminators removed.
/// Blank lines are skipped.
pub struct Records<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator from a byte slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use igc::records::{Fix, RecordKind, Records};
    /// # use igc::Error;
    /// #
    /// # fn parse_records(data: &[u8]) -> Result<(), Error> {
    /// for (kind, bytes) in Records::new(data) {
    ///     match kind {
    ///         RecordKind::Fix => {
    ///             let fix = Fix::try_from(bytes)?;
    ///             // now you can read the fix's fields or convert it
    ///             // to a track point
    ///         },
    ///         _ => {},
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (RecordKind, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.data.len() {
            let rest = &self.data[self.pos..];
            let end = rest
                .iter()
                .position(|&b| b == b'\n')
                .map_or(rest.len(), |i| i + 1);
            self.pos += end;

            let line = rest[..end].trim_ascii_end();
            if !line.is_empty() {
                return Some((RecordKind::of(line), line));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_records() {
        let data = b"AXSDUB4963\r\nHFDTE090824\r\n\r\nB1015305207650N00610100EA0012300150\r\nGABCDEF";
        let kinds: Vec<_> = Records::new(data).map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecordKind::Manufacturer,
                RecordKind::Header,
                RecordKind::Fix,
                RecordKind::Security
            ]
        );
    }

    #[test]
    fn strips_line_terminators() {
        let mut records = Records::new(b"HFGIDGLIDERID:NKN  \r\n");
        assert_eq!(
            records.next(),
            Some((RecordKind::Header, b"HFGIDGLIDERID:NKN".as_slice()))
        );
        assert_eq!(records.next(), None);
    }
}
