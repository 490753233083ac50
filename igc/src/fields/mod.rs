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

//! Fields of the fixed-column records.
//!
//! Each field references the bytes of the line it was parsed from and
//! converts them into a value on demand.

mod altitude;
mod coordinate;
mod extension;
mod time;
mod validity;

pub use altitude::Altitude;
pub use coordinate::{Latitude, Longitude};
pub use extension::Extension;
pub use time::Time;
pub use validity::Validity;
