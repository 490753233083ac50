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

use crate::{Bytes, Error};

/// Altitude in meters, zero padded with an optional leading minus.
pub type Altitude<'a> = Bytes<'a, 5>;

impl<'a> Altitude<'a> {
    /// Returns the altitude in meters.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a signed number.
    pub fn as_meters(&self) -> Result<i32, Error> {
        let malformed = || Error::MalformedAltitude {
            bytes: self.0.to_vec(),
        };

        match self.0.split_first() {
            Some((b'-', digits)) => parse_numeric!(i32, digits, malformed()).map(|m| -m),
            _ => parse_numeric!(i32, self.0, malformed()),
        }
    }
}
