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

use mesh_topology::*;
use std::io::Write;
use tempfile::NamedTempFile;

mod test_utils {
    use super::*;

    pub fn write_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    pub const SERVICES: &str = r#"[
        {
            "name": "reviews",
            "namespace": "bookinfo",
            "hostname": "reviews.global",
            "backends": [{"cluster": "west", "labels": {"app": "reviews"}}]
        },
        {
            "name": "ratings",
            "hostname": "ratings.global",
            "backends": [{"cluster": "east"}, {"cluster": "south"}]
        },
        {"name": "details"}
    ]"#;

    pub const CLUSTERS: &str = r#"[
        {"name": "west", "address": "10.0.0.1", "kubeconfig_path": "/home/ops/.kube/west"},
        {"name": "east", "address": "10.0.0.2", "kubeconfig_context": "east-admin"},
        {"name": "central", "address": "10.0.0.3"}
    ]"#;
}

// ============================================================================
// Global services
// ============================================================================

#[test]
fn test_services_file_creates_every_record() {
    let file = test_utils::write_json(test_utils::SERVICES);
    let dm = services_from_file(file.path()).expect("Failed to load services");

    assert_eq!(dm.len(), 3);
    let names: Vec<_> = dm.global_services().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["reviews", "ratings", "details"]);

    let reviews = dm.global_service("reviews").unwrap();
    assert_eq!(reviews.namespace.as_deref(), Some("bookinfo"));
    assert_eq!(reviews.backends[0].cluster, "west");
}

#[test]
fn test_services_are_independent_copies() {
    let file = test_utils::write_json(test_utils::SERVICES);
    let dm = services_from_file(file.path()).unwrap();

    let mut reviews = dm.global_service("reviews").unwrap().clone();
    reviews.backends.clear();
    reviews.hostname = "changed".to_string();

    assert_eq!(dm.global_service("reviews").unwrap().hostname, "reviews.global");
    assert_eq!(dm.global_service("ratings").unwrap().backends.len(), 2);
    assert!(dm.global_service("details").unwrap().backends.is_empty());
}

#[test]
fn test_services_empty_array() {
    let file = test_utils::write_json("[]");
    let dm = services_from_file(file.path()).unwrap();
    assert!(dm.is_empty());
}

#[test]
fn test_services_non_json_is_decode_error() {
    let file = test_utils::write_json("services:\n  - reviews\n");
    let err = services_from_file(file.path()).unwrap_err();
    assert!(matches!(err, TopologyError::Decode { .. }));
    assert!(err.to_string().contains("could not unmarshal"));
}

#[test]
fn test_services_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("services.json");
    let err = services_from_file(&path).unwrap_err();
    assert!(matches!(err, TopologyError::Io { .. }));
    assert!(err.to_string().contains("services.json"));
}

#[test]
fn test_services_duplicate_name_fails() {
    let file = test_utils::write_json(r#"[{"name": "a"}, {"name": "a"}]"#);
    let err = services_from_file(file.path()).unwrap_err();
    assert!(matches!(err, TopologyError::AlreadyExists { .. }));
}

// ============================================================================
// Clusters from file
// ============================================================================

#[test]
fn test_clusters_file_view() {
    let file = test_utils::write_json(test_utils::CLUSTERS);
    let view = clusters_from_file(file.path()).expect("Failed to load clusters");

    assert_eq!(view.names, vec!["central", "east", "west"]);

    let file_order: Vec<_> = view.clusters.iter().map(|c| c.name()).collect();
    assert_eq!(file_order, vec!["west", "east", "central"]);
    assert_eq!(
        view.clusters[0].kubeconfig_path.as_deref(),
        Some("/home/ops/.kube/west")
    );
    assert_eq!(view.clusters[1].kubeconfig_context.as_deref(), Some("east-admin"));

    assert_eq!(view.infrastructure.len(), 3);
    assert_eq!(view.infrastructure.cluster_address("central"), Some("10.0.0.3"));
}

#[test]
fn test_clusters_file_duplicate_last_wins() {
    let file = test_utils::write_json(
        r#"[{"name": "x", "address": "1.1.1.1"}, {"name": "x", "address": "2.2.2.2"}]"#,
    );
    let view = clusters_from_file(file.path()).unwrap();

    assert_eq!(view.names, vec!["x"]);
    assert_eq!(view.clusters.len(), 2);
    assert_eq!(view.infrastructure.cluster_address("x"), Some("2.2.2.2"));
}

#[test]
fn test_clusters_file_empty_array() {
    let file = test_utils::write_json("[]");
    let view = clusters_from_file(file.path()).unwrap();
    assert!(view.names.is_empty());
    assert!(view.clusters.is_empty());
    assert!(view.infrastructure.is_empty());
}

#[test]
fn test_clusters_file_decode_failure() {
    let file = test_utils::write_json("not json at all");
    let err = clusters_from_file(file.path()).unwrap_err();
    assert!(matches!(err, TopologyError::Decode { .. }));
}

#[test]
fn test_clusters_file_idempotent() {
    let file = test_utils::write_json(test_utils::CLUSTERS);
    let first = clusters_from_file(file.path()).unwrap();
    let second = clusters_from_file(file.path()).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Clusters from flags
// ============================================================================

#[test]
fn test_flags_partial_failure_scenario() {
    let result = clusters_from_flags(&["a:1", "bad", "b:2"]);

    assert_eq!(result.names, vec!["a", "b"]);
    assert_eq!(result.infrastructure.cluster_address("a"), Some("1"));
    assert_eq!(result.infrastructure.cluster_address("b"), Some("2"));
    assert_eq!(result.infrastructure.len(), 2);

    let err = result.errors.expect("expected an aggregated error");
    assert_eq!(err.errors().len(), 1);
    assert!(err.to_string().contains("\"bad\""));
}

#[test]
fn test_flags_skipped_entries_do_not_shift_names() {
    // malformed entries first, then valid ones
    let result = clusters_from_flags(&["x", "y", "z", "c:3", "a:1"]);
    assert_eq!(result.names, vec!["a", "c"]);
    assert_eq!(result.errors.unwrap().errors().len(), 3);
}

#[test]
fn test_flags_all_valid() {
    let (names, infra) = clusters_from_flags(&["west:10.0.0.1", "east:10.0.0.2"])
        .into_result()
        .unwrap();
    assert_eq!(names, vec!["east", "west"]);
    assert_eq!(infra.cluster_names(), vec!["east", "west"]);
}

// ============================================================================
// Cross-check
// ============================================================================

#[test]
fn test_unresolved_backends_against_cluster_file() {
    let services = test_utils::write_json(test_utils::SERVICES);
    let clusters = test_utils::write_json(test_utils::CLUSTERS);

    let dm = services_from_file(services.path()).unwrap();
    let view = clusters_from_file(clusters.path()).unwrap();

    let missing = unresolved_backends(&dm, &view.infrastructure);
    assert_eq!(
        missing,
        vec![UnresolvedBackend {
            service: "ratings".to_string(),
            cluster: "south".to_string(),
        }]
    );
}
