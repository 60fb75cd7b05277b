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

use super::TopologyConf;
use crate::infrastructure::constants::{
    KEY_BEST_EFFORT, KEY_CLUSTERS, KEY_CLUSTERS_FILE, KEY_SERVICES_FILE,
};
use crate::shared::error::TopologyError;
use std::collections::HashMap;

/// Parse `-D key=value` properties. The first malformed one fails the batch.
pub fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>, TopologyError> {
    let mut map = HashMap::new();

    for config in configs {
        let parts: Vec<&str> = config.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(TopologyError::config_error(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            )));
        }

        let key = parts[0].trim();
        let value = parts[1].trim();

        if key.is_empty() {
            return Err(TopologyError::config_error(format!(
                "Empty key in config: '{}'",
                config
            )));
        }

        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

pub fn apply_to_topology_conf(
    configs: &HashMap<String, String>,
    conf: &mut TopologyConf,
) -> Result<(), TopologyError> {
    if let Some(path) = configs.get(KEY_SERVICES_FILE) {
        conf.services_file = Some(path.clone());
    }

    if let Some(path) = configs.get(KEY_CLUSTERS_FILE) {
        conf.clusters_file = Some(path.clone());
    }

    if let Some(clusters) = configs.get(KEY_CLUSTERS) {
        conf.clusters = clusters
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    if let Some(flag) = configs.get(KEY_BEST_EFFORT) {
        conf.best_effort = flag.parse::<bool>().map_err(|_| {
            TopologyError::config_error(format!(
                "{} must be 'true' or 'false', got '{}'",
                KEY_BEST_EFFORT, flag
            ))
        })?;
    }

    for key in configs.keys() {
        if ![KEY_SERVICES_FILE, KEY_CLUSTERS_FILE, KEY_CLUSTERS, KEY_BEST_EFFORT]
            .contains(&key.as_str())
        {
            tracing::warn!(key = %key, "ignoring unknown dynamic config key");
        }
    }

    Ok(())
}
