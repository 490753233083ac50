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

/// Validity of a GNSS fix.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Validity {
    /// `A`: valid 3D fix.
    Valid,
    /// `V`: 2D fix or no GNSS data.
    Invalid,
    /// Any other byte found in the validity column.
    Other(u8),
}

impl Validity {
    /// Returns the character as found in the record.
    pub fn as_char(&self) -> char {
        match self {
            Self::Valid => 'A',
            Self::Invalid => 'V',
            Self::Other(b) => *b as char,
        }
    }

    /// Returns `true` for a valid 3D fix.
    pub fn is_valid(&self) -> bool {
        *self == Self::Valid
    }
}

impl<'a> FixedField<'a> for Validity {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        match bytes.first() {
            Some(b'A') => Ok(Self::Valid),
            Some(b'V') => Ok(Self::Invalid),
            Some(&b) => Ok(Self::Other(b)),
            None => Err(Error::InvalidFieldLength {
                expected: Self::LENGTH,
                actual: 0,
            }),
        }
    }
}
