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

use std::error;
use std::fmt;
use std::io;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The first line of the file is not a manufacturer A record.
    MalformedHeader,
    MalformedCoordinate {
        field: &'static str,
        bytes: Vec<u8>,
    },
    MalformedTimestamp {
        bytes: Vec<u8>,
    },
    MalformedDate {
        bytes: Vec<u8>,
    },
    MalformedAltitude {
        bytes: Vec<u8>,
    },
    /// A B record ends before its fix validity column.
    TruncatedRecord {
        actual: usize,
    },
    InvalidFieldLength {
        expected: usize,
        actual: usize,
    },
    /// The line source failed to read. Holds the I/O error's message.
    UnreadableSource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader => {
                write!(f, "first record should be a manufacturer A record")
            }
            Self::MalformedCoordinate { field, bytes } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "{field} should be degrees, minutes and hemisphere but is \"{s}\"")
            }
            Self::MalformedTimestamp { bytes } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "time should be HHMMSS but is \"{s}\"")
            }
            Self::MalformedDate { bytes } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "date should be DDMMYY but is \"{s}\"")
            }
            Self::MalformedAltitude { bytes } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "altitude should be a number but is \"{s}\"")
            }
            Self::TruncatedRecord { actual } => {
                write!(
                    f,
                    "B record should be at least {} byte long but is {actual}",
                    crate::records::FIX_MIN_LENGTH
                )
            }
            Self::InvalidFieldLength { expected, actual } => {
                write!(f, "field should be {expected} byte long but is {actual}")
            }
            Self::UnreadableSource(e) => write!(f, "source is unreadable: {e}"),
        }
    }
}

impl Error {
    /// Returns `true` if the error ends decoding of the whole file.
    ///
    /// All other errors are local to one record or header field.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedHeader | Self::UnreadableSource(_))
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::UnreadableSource(e.to_string())
    }
}

/// A record that failed to decode and was skipped.
///
/// The line number is 1-based and counts every line of the source, header
/// lines included.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordError {
    pub line: usize,
    pub error: Error,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

impl error::Error for RecordError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}
