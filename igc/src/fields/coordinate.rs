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

use crate::codec::{decode_latitude, decode_longitude, LATITUDE_LENGTH, LONGITUDE_LENGTH};
use crate::{Bytes, Error};

pub type Latitude<'a> = Bytes<'a, LATITUDE_LENGTH>;

impl<'a> Latitude<'a> {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    ///
    /// # Errors
    ///
    /// Returns an error if a digit group is not numeric or if the hemisphere
    /// is neither `N` nor `S`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        decode_latitude(self.0)
    }
}

pub type Longitude<'a> = Bytes<'a, LONGITUDE_LENGTH>;

impl<'a> Longitude<'a> {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    ///
    /// A longitude starting with a separator instead of the hundreds digit
    /// is read as `DDMMmmmE` from the second byte on.
    ///
    /// # Errors
    ///
    /// Returns an error if a digit group is not numeric or if the hemisphere
    /// is neither `E` nor `W`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        decode_longitude(self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn parses_latitude() {
        let lat = Latitude::from_bytes(b"4723456S").expect("latitude should parse");
        let decimal = lat.as_decimal().expect("latitude should decode");
        assert!((decimal + 47.390933333).abs() < 1e-9);
    }

    #[test]
    fn parses_longitude() {
        let long = Longitude::from_bytes(b"01132500EA").expect("longitude should parse");
        assert_eq!(long.as_str(), "01132500E");
        let decimal = long.as_decimal().expect("longitude should decode");
        assert!((decimal - 11.541666666).abs() < 1e-9);
    }

    #[test]
    fn parses_longitude_after_separator() {
        let long = Longitude::from_bytes(b" 1132500WA").expect("longitude should parse");
        let decimal = long.as_decimal().expect("longitude should decode");
        assert!((decimal + 11.541666666).abs() < 1e-9);
    }
}
