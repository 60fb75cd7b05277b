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

/// Environment variable pointing at the CLI config file
pub const CONF_FILE_ENV: &str = "MESH_TOPOLOGY_CONF_FILE";

/// Separator between cluster name and address in `--cluster` flags
pub const CLUSTER_FLAG_SEPARATOR: char = ':';

/// Decode origin labels used in error messages
pub const ORIGIN_BUFFER: &str = "buffer";

/// Store record kinds
pub const KIND_GLOBAL_SERVICE: &str = "global service";

/// Dynamic configuration keys (-D key=value)
pub const KEY_SERVICES_FILE: &str = "topology.services-file";
pub const KEY_CLUSTERS_FILE: &str = "topology.clusters-file";
pub const KEY_CLUSTERS: &str = "topology.clusters";
pub const KEY_BEST_EFFORT: &str = "topology.best-effort";
