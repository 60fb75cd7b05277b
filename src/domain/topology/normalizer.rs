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

//! Cluster normalization: records or `name:address` flags into an
//! infrastructure mapping plus a sorted name list.

use crate::domain::model::{ClusterEntry, MemInfrastructure};
use crate::infrastructure::constants::CLUSTER_FLAG_SEPARATOR;
use crate::shared::error::TopologyError;

/// Outcome of normalizing `--cluster` flags.
///
/// Malformed entries are skipped, so `names` and `infrastructure` may be
/// partial while `errors` holds one aggregated value describing every skip.
#[derive(Debug)]
pub struct FlagClusters {
    pub names: Vec<String>,
    pub infrastructure: MemInfrastructure,
    pub errors: Option<TopologyError>,
}

impl FlagClusters {
    pub fn is_complete(&self) -> bool {
        self.errors.is_none()
    }

    /// Strict view: any malformed entry fails the whole batch.
    pub fn into_result(self) -> Result<(Vec<String>, MemInfrastructure), TopologyError> {
        match self.errors {
            Some(err) => Err(err),
            None => Ok((self.names, self.infrastructure)),
        }
    }

    /// Best-effort view: whatever was well-formed, plus the errors.
    pub fn partial(self) -> (Vec<String>, MemInfrastructure, Option<TopologyError>) {
        (self.names, self.infrastructure, self.errors)
    }
}

/// Build the infrastructure mapping from decoded cluster records.
///
/// Duplicate names resolve last-write-wins. An empty name fails the batch.
pub fn normalize_cluster_records(
    entries: &[ClusterEntry],
) -> Result<(Vec<String>, MemInfrastructure), TopologyError> {
    let mut infra = MemInfrastructure::new();

    for (idx, entry) in entries.iter().enumerate() {
        if entry.name().is_empty() {
            return Err(TopologyError::validation(format!(
                "cluster at index {} has an empty name (address: {:?})",
                idx,
                entry.address()
            )));
        }
        if let Some(previous) = infra.insert(entry.name(), entry.address()) {
            tracing::warn!(
                cluster = entry.name(),
                previous = %previous,
                address = entry.address(),
                "duplicate cluster name, keeping the last address"
            );
        }
    }

    Ok((sorted_names(&infra), infra))
}

/// Build the infrastructure mapping from `name:address` strings.
///
/// Entries that do not split into exactly two parts, or whose name is
/// empty, are reported and skipped; the rest are kept.
pub fn normalize_cluster_flags<S: AsRef<str>>(entries: &[S]) -> FlagClusters {
    let mut infra = MemInfrastructure::new();
    let mut errors = Vec::new();

    for raw in entries {
        let raw = raw.as_ref();
        match parse_cluster_flag(raw) {
            Some((name, address)) => {
                if let Some(previous) = infra.insert(name, address) {
                    tracing::warn!(
                        cluster = name,
                        previous = %previous,
                        address,
                        "duplicate cluster flag, keeping the last address"
                    );
                }
            }
            None => {
                tracing::debug!(entry = raw, "skipping malformed cluster flag");
                errors.push(TopologyError::MalformedEntry(raw.to_string()));
            }
        }
    }

    FlagClusters {
        names: sorted_names(&infra),
        infrastructure: infra,
        errors: TopologyError::aggregate(errors),
    }
}

fn parse_cluster_flag(raw: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = raw.split(CLUSTER_FLAG_SEPARATOR).collect();
    match parts.as_slice() {
        [name, address] if !name.is_empty() => Some((*name, *address)),
        _ => None,
    }
}

fn sorted_names(infra: &MemInfrastructure) -> Vec<String> {
    let mut names: Vec<String> = infra.iter().map(|(name, _)| name.to_string()).collect();
    names.sort();
    names
}
