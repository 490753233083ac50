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
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub enum Error {
    /// A file that could not be opened or decoded.
    Decode { path: PathBuf, error: igc::Error },
    /// A CSV file that could not be written.
    Export {
        path: PathBuf,
        error: Arc<csv::Error>,
    },
}

impl Error {
    /// The file this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. } | Self::Export { path, .. } => path,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, error } => write!(f, "{}: {error}", path.display()),
            Self::Export { path, error } => {
                write!(f, "{}: CSV export failed: {error}", path.display())
            }
        }
    }
}

/// Export errors are equal if they refer to the same file and have the same
/// message, as `csv::Error` can't be compared.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Decode { path, error },
                Self::Decode {
                    path: other_path,
                    error: other_error,
                },
            ) => path == other_path && error == other_error,
            (
                Self::Export { path, error },
                Self::Export {
                    path: other_path,
                    error: other_error,
                },
            ) => path == other_path && error.to_string() == other_error.to_string(),
            _ => false,
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Decode { error, .. } => Some(error),
            Self::Export { error, .. } => Some(&**error),
        }
    }
}
