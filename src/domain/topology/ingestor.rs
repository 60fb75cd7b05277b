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

use crate::domain::model::GlobalService;
use crate::infrastructure::datamodel::DataModel;
use crate::shared::error::TopologyError;

/// Hand every service to the store, in input order.
///
/// Each record is moved into the store as its own value. The first store
/// failure stops ingestion and is returned as-is.
pub fn ingest_global_services(
    store: &mut dyn DataModel,
    services: Vec<GlobalService>,
) -> Result<usize, TopologyError> {
    let mut created = 0;
    for service in services {
        tracing::debug!(service = %service.name, "creating global service");
        store.create_global_service(service)?;
        created += 1;
    }
    tracing::info!(count = created, "ingested global services");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Backend;
    use crate::infrastructure::datamodel::MemDataModel;

    /// Records every create call without any conflict policy.
    #[derive(Default)]
    struct RecordingStore {
        created: Vec<GlobalService>,
        fail_on: Option<String>,
    }

    impl DataModel for RecordingStore {
        fn create_global_service(&mut self, service: GlobalService) -> Result<(), TopologyError> {
            if self.fail_on.as_deref() == Some(service.name.as_str()) {
                return Err(TopologyError::already_exists("global service", service.name));
            }
            self.created.push(service);
            Ok(())
        }

        fn global_service(&self, name: &str) -> Option<&GlobalService> {
            self.created.iter().find(|s| s.name == name)
        }

        fn global_services(&self) -> Vec<&GlobalService> {
            self.created.iter().collect()
        }
    }

    fn services() -> Vec<GlobalService> {
        vec![
            GlobalService::new("reviews").with_backend(Backend::new("west")),
            GlobalService::new("ratings").with_backend(Backend::new("east")),
            GlobalService::new("details"),
        ]
    }

    #[test]
    fn test_one_create_per_record_in_order() {
        let mut store = RecordingStore::default();
        let created = ingest_global_services(&mut store, services()).unwrap();

        assert_eq!(created, 3);
        let names: Vec<_> = store.created.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["reviews", "ratings", "details"]);
    }

    #[test]
    fn test_records_are_independent_values() {
        let mut store = RecordingStore::default();
        ingest_global_services(&mut store, services()).unwrap();

        store.created[0].hostname = "mutated.global".to_string();
        store.created[0].backends.clear();

        assert!(store.created[1].hostname.is_empty());
        assert_eq!(store.created[1].backends, vec![Backend::new("east")]);
        assert_eq!(store.global_service("details").unwrap().name, "details");
    }

    #[test]
    fn test_store_failure_propagates() {
        let mut store = RecordingStore {
            fail_on: Some("ratings".to_string()),
            ..Default::default()
        };
        let err = ingest_global_services(&mut store, services()).unwrap_err();

        assert!(matches!(err, TopologyError::AlreadyExists { .. }));
        assert_eq!(store.created.len(), 1);
    }

    #[test]
    fn test_mem_store_duplicate_fails() {
        let mut store = MemDataModel::new();
        let batch = vec![GlobalService::new("a"), GlobalService::new("a")];
        assert!(ingest_global_services(&mut store, batch).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let mut store = MemDataModel::new();
        assert_eq!(ingest_global_services(&mut store, Vec::new()).unwrap(), 0);
        assert!(store.is_empty());
    }
}
