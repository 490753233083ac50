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

use chrono::TimeDelta;

use crate::codec::{decode_time_of_day, TIME_LENGTH};
use crate::{Bytes, Error};

/// UTC time of a fix as `HHMMSS`.
pub type Time<'a> = Bytes<'a, TIME_LENGTH>;

impl<'a> Time<'a> {
    /// Returns the time elapsed since midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not numeric.
    pub fn time_of_day(&self) -> Result<TimeDelta, Error> {
        decode_time_of_day(self.0)
    }
}
