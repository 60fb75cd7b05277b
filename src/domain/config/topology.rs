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

//! CLI configuration file

use crate::infrastructure::constants::CONF_FILE_ENV;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;

/// Defaults for the CLI, loaded from a TOML file.
///
/// ```toml
/// services_file = "services.json"
/// clusters_file = "clusters.json"
/// clusters = ["west:10.0.0.1", "east:10.0.0.2"]
/// best_effort = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConf {
    pub services_file: Option<String>,
    pub clusters_file: Option<String>,
    /// Inline `name:address` entries, used when no clusters file is set
    pub clusters: Vec<String>,
    /// Accept partially malformed `clusters` entries instead of failing
    pub best_effort: bool,
}

impl TopologyConf {
    /// Load configuration from TOML file
    pub fn from<T: AsRef<str>>(path: T) -> anyhow::Result<Self> {
        let content = read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.as_ref(), e))?;

        let conf: Self =
            toml::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;

        Ok(conf)
    }

    /// Resolve the config file: explicit path > environment variable > defaults
    pub fn load(explicit: Option<&str>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path, "loading config file");
            return Self::from(path);
        }

        match std::env::var(CONF_FILE_ENV) {
            Ok(path) if !path.is_empty() => {
                tracing::debug!(path = %path, env = CONF_FILE_ENV, "loading config file");
                Self::from(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
