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

//! Global service records

use crate::shared::error::TopologyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A service exposed across every cluster of the mesh.
///
/// `name` is the identity the store keys on; everything else is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalService {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default)]
    pub hostname: String,

    /// Virtual address the service is reachable on from inside the mesh
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default)]
    pub backends: Vec<Backend>,
}

/// One cluster-local set of workloads backing a global service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    pub cluster: String,

    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl GlobalService {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            hostname: String::new(),
            address: None,
            backends: Vec::new(),
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backends.push(backend);
        self
    }

    pub fn validate(&self) -> Result<(), TopologyError> {
        if self.name.trim().is_empty() {
            return Err(TopologyError::validation(format!(
                "global service name must not be empty (hostname: {:?})",
                self.hostname
            )));
        }
        Ok(())
    }

    /// Distinct cluster names referenced by this service's backends, sorted
    pub fn backend_clusters(&self) -> Vec<&str> {
        let mut clusters: Vec<&str> = self.backends.iter().map(|b| b.cluster.as_str()).collect();
        clusters.sort_unstable();
        clusters.dedup();
        clusters
    }
}

impl Backend {
    pub fn new(cluster: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            labels: BTreeMap::new(),
            port: None,
        }
    }
}
