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

use crate::{Error, FixedField};

/// A fixed-column IGC record type.
pub trait Record<'a>: Sized {
    /// The minimum length of the record in bytes, including the record type.
    const MIN_LENGTH: usize;

    /// Parse this record type from a field iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short or contains invalid data.
    fn parse(fields: Fields<'a>) -> Result<Self, Error>;

    /// Parse this record type from the bytes of one line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedRecord`] if the line is shorter than
    /// [`MIN_LENGTH`][Record::MIN_LENGTH] or ends within a required field,
    /// or any other error returned by [`parse`][Record::parse].
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let truncated = Error::TruncatedRecord {
            actual: bytes.len(),
        };

        if bytes.len() < Self::MIN_LENGTH {
            return Err(truncated);
        }

        Self::parse(Fields::new(bytes)).map_err(|e| match e {
            Error::InvalidFieldLength { .. } => truncated,
            e => e,
        })
    }
}

pub struct Fields<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Fields<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, index: 0 }
    }

    /// Reads the next field, and advances the position by the field's length.
    ///
    /// Past the end of the line, fields are parsed from an empty slice.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn next<F>(&mut self) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        let field = F::from_bytes(self.bytes.get(self.index..).unwrap_or_default())?;
        self.index += F::LENGTH;
        Ok(field)
    }

    /// Jumps to the 1-based column and get the field.
    ///
    /// The next field will be the one following this field's position.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn get<F>(&mut self, position: usize) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        self.index = position - 1;
        self.next()
    }
}
