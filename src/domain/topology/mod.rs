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

//! Topology construction: decode, normalize, ingest, assemble

pub mod assembler;
pub mod check;
pub mod decoder;
pub mod ingestor;
pub mod normalizer;

pub use self::assembler::{clusters_from_file, clusters_from_flags, services_from_file, ClusterView};
pub use self::check::{unresolved_backends, UnresolvedBackend};
pub use self::decoder::{decode_records, read_records};
pub use self::ingestor::ingest_global_services;
pub use self::normalizer::{normalize_cluster_flags, normalize_cluster_records, FlagClusters};
