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

use crate::fields::*;
use crate::Record;

/// The minimum length of a B record, up to and including the fix validity.
pub const FIX_MIN_LENGTH: usize = 25;

/// A B record holding one GNSS fix.
///
/// ```text
/// B HHMMSS DDMMmmmN DDDMMmmmE V PPPPP GGGGG ...
/// ```
///
/// Lines ending before column 30 or 35 have no pressure or GNSS altitude.
#[derive(Record, Clone, Copy, PartialEq, Debug)]
#[igc(min_length = FIX_MIN_LENGTH)]
pub struct Fix<'a> {
    #[igc(field = 2)]
    pub time: Time<'a>,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    pub validity: Validity,
    pub pressure_altitude: Option<Altitude<'a>>,
    pub gnss_altitude: Option<Altitude<'a>>,
    pub extension: Option<Extension<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const FIX: &[u8] = b"B1015305207650N00610100EA0012300150";

    #[test]
    fn fix_record() {
        let fix = Fix::try_from(FIX).expect("fix should parse");

        assert_eq!(fix.time.as_str(), "101530");
        assert_eq!(fix.latitude.as_str(), "5207650N");
        assert_eq!(fix.longitude.as_str(), "00610100E");
        assert_eq!(fix.validity, Validity::Valid);
        assert_eq!(fix.pressure_altitude.map(|a| a.as_meters()), Some(Ok(123)));
        assert_eq!(fix.gnss_altitude.map(|a| a.as_meters()), Some(Ok(150)));
        assert_eq!(fix.extension, None);
    }

    #[test]
    fn fix_record_with_extension() {
        let fix = Fix::try_from(b"B1015305207650N00610100EA0012300150012345".as_slice())
            .expect("fix should parse");
        assert_eq!(
            fix.extension.map(|e| e.as_bytes()),
            Some(b"012345".as_slice())
        );
    }

    #[test]
    fn fix_record_without_gnss_altitude() {
        let fix = Fix::try_from(&FIX[..30]).expect("fix should parse");
        assert_eq!(fix.pressure_altitude.map(|a| a.as_meters()), Some(Ok(123)));
        assert_eq!(fix.gnss_altitude, None);
        assert_eq!(fix.extension, None);
    }

    #[test]
    fn fix_record_without_altitudes() {
        let fix = Fix::try_from(&FIX[..25]).expect("fix should parse");
        assert_eq!(fix.validity, Validity::Valid);
        assert_eq!(fix.pressure_altitude, None);
        assert_eq!(fix.gnss_altitude, None);
    }

    #[test]
    fn truncated_fix_record() {
        assert_eq!(
            Fix::try_from(&FIX[..24]),
            Err(Error::TruncatedRecord { actual: 24 })
        );
    }
}
