// Copyright 2025 JiangLong.
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

//! JSON record decoding

use crate::shared::error::TopologyError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Decode a JSON array into records, keeping source order.
///
/// `origin` labels the buffer in error messages (usually the file path).
pub fn decode_records<T: DeserializeOwned>(
    origin: &str,
    contents: &[u8],
) -> Result<Vec<T>, TopologyError> {
    let records: Vec<T> =
        serde_json::from_slice(contents).map_err(|e| TopologyError::decode(origin, e))?;
    tracing::debug!(origin, count = records.len(), "decoded records");
    Ok(records)
}

/// Read a whole file and decode it as a JSON array of records.
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, TopologyError> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|e| TopologyError::io(path, e))?;
    decode_records(&format!("file {:?}", path.display().to_string()), &contents)
}
