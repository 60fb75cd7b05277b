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

//! Cluster records and the name -> address infrastructure view

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Domain view of a cluster: the only shape that reaches the topology model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    pub address: String,
}

/// CLI representation of a cluster.
///
/// Adds local kubeconfig details for display; these never reach the
/// infrastructure mapping or the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEntry {
    #[serde(flatten)]
    pub cluster: Cluster,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig_context: Option<String>,
}

impl Cluster {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl ClusterEntry {
    pub fn name(&self) -> &str {
        &self.cluster.name
    }

    pub fn address(&self) -> &str {
        &self.cluster.address
    }
}

impl From<Cluster> for ClusterEntry {
    fn from(cluster: Cluster) -> Self {
        Self {
            cluster,
            kubeconfig_path: None,
            kubeconfig_context: None,
        }
    }
}

/// Read access to cluster state, as consumed by downstream topology logic.
pub trait Infrastructure {
    fn cluster_address(&self, name: &str) -> Option<&str>;

    /// Every known cluster name, ascending
    fn cluster_names(&self) -> Vec<&str>;

    fn contains_cluster(&self, name: &str) -> bool {
        self.cluster_address(name).is_some()
    }
}

/// In-memory infrastructure built fresh on every invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemInfrastructure {
    clusters: BTreeMap<String, String>,
}

impl MemInfrastructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a cluster address, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, address: impl Into<String>) -> Option<String> {
        self.clusters.insert(name.into(), address.into())
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.clusters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.clusters
    }
}

impl From<BTreeMap<String, String>> for MemInfrastructure {
    fn from(clusters: BTreeMap<String, String>) -> Self {
        Self { clusters }
    }
}

impl Infrastructure for MemInfrastructure {
    fn cluster_address(&self, name: &str) -> Option<&str> {
        self.clusters.get(name).map(String::as_str)
    }

    fn cluster_names(&self) -> Vec<&str> {
        self.clusters.keys().map(String::as_str).collect()
    }
}
