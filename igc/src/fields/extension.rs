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

use std::borrow::Cow;
use std::fmt;

use crate::{Error, FixedField};

/// Raw bytes following the fixed fields of a record.
///
/// Without an I record describing their layout the bytes are kept as they
/// are.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Extension<'a>(&'a [u8]);

impl<'a> Extension<'a> {
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the extension as string, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.0)
    }
}

impl<'a> FixedField<'a> for Extension<'a> {
    // takes the rest of the line
    const LENGTH: usize = 0;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Extension<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.to_string_lossy())
    }
}
