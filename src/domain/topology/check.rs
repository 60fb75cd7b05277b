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

use crate::domain::model::Infrastructure;
use crate::infrastructure::datamodel::DataModel;

/// A backend that points at a cluster the infrastructure does not know.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnresolvedBackend {
    pub service: String,
    pub cluster: String,
}

/// Every `(service, cluster)` pair whose cluster is missing, sorted.
pub fn unresolved_backends(
    store: &dyn DataModel,
    infrastructure: &dyn Infrastructure,
) -> Vec<UnresolvedBackend> {
    let mut missing: Vec<UnresolvedBackend> = store
        .global_services()
        .into_iter()
        .flat_map(move |svc| {
            svc.backend_clusters()
                .into_iter()
                .filter(move |cluster| !infrastructure.contains_cluster(cluster))
                .map(move |cluster| UnresolvedBackend {
                    service: svc.name.clone(),
                    cluster: cluster.to_string(),
                })
        })
        .collect();
    missing.sort();
    missing
}
