//! Property-based tests for index path resolution.
//!
//! This module uses proptest to verify:
//! - Explicit names are joined in input order
//! - An enabled all-indices flag always wins
//! - An untouched selection resolves to the default index and keeps it
//! - Later selections replace earlier ones
//! - Type markers resolve in place to their mapped index

use es_client::{
    ElasticInferrer, ExplicitIndices, IndexNameMarker, IndicesPath, RequestParameters, TypeMarker,
};
use es_config::ConnectionSettings;
use proptest::prelude::*;

fn index_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.-]{0,12}"
}

fn index_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(index_name(), 1..8)
}

proptest! {
    #[test]
    fn test_explicit_names_joined_in_order(names in index_names(), flag in prop::option::of(Just(false))) {
        let settings = ConnectionSettings::default().with_default_index("default");
        let inferrer = ElasticInferrer::new(&settings);
        let mut path = IndicesPath::new().indices(names.clone());
        if let Some(flag) = flag {
            path = path.with_all_indices(flag);
        }

        let resolved = path.resolve(&inferrer, None).unwrap();
        prop_assert_eq!(resolved.index(), names.join(","));
        let split: Vec<&str> = resolved.index().split(',').collect();
        prop_assert_eq!(split, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_indices_wins(names in prop::option::of(index_names()), before in any::<bool>()) {
        let settings = ConnectionSettings::default().with_default_index("default");
        let inferrer = ElasticInferrer::new(&settings);
        let mut path = IndicesPath::new();
        if before {
            path = path.all_indices();
        }
        if let Some(names) = names {
            path = path.indices(names);
        }
        if !before {
            path = path.all_indices();
        }

        let resolved = path.resolve(&inferrer, None).unwrap();
        prop_assert_eq!(resolved.index(), "_all");
    }

    #[test]
    fn test_default_index_is_sticky(default in index_name(), rounds in 1usize..4) {
        let settings = ConnectionSettings::default().with_default_index(default.clone());
        let inferrer = ElasticInferrer::new(&settings);
        let mut path = IndicesPath::new();

        for _ in 0..rounds {
            let resolved = path.resolve(&inferrer, Some(RequestParameters::new())).unwrap();
            prop_assert_eq!(resolved.index(), default.as_str());
            prop_assert_eq!(
                path.explicit_indices(),
                &ExplicitIndices::Set(vec![IndexNameMarker::Name(default.clone())])
            );
        }
    }

    #[test]
    fn test_later_selection_replaces_earlier(first in index_names(), second in index_names()) {
        let settings = ConnectionSettings::default();
        let inferrer = ElasticInferrer::new(&settings);
        let mut path = IndicesPath::new().indices(first).indices(second.clone());

        let resolved = path.resolve(&inferrer, None).unwrap();
        prop_assert_eq!(resolved.index(), second.join(","));
    }

    #[test]
    fn test_type_marker_resolves_in_place(
        names in index_names(),
        mapped in index_name(),
        position in any::<prop::sample::Index>(),
    ) {
        let settings = ConnectionSettings::default().with_type_index("Doc", mapped.clone());
        let inferrer = ElasticInferrer::new(&settings);
        let at = position.index(names.len() + 1);

        let mut markers: Vec<IndexNameMarker> = names.iter().cloned().map(IndexNameMarker::from).collect();
        markers.insert(at, TypeMarker::named("Doc").into());
        let mut path = IndicesPath::new().index_markers(markers);

        let resolved = path.resolve(&inferrer, None).unwrap();
        let parts: Vec<&str> = resolved.index().split(',').collect();
        prop_assert_eq!(parts.len(), names.len() + 1);
        prop_assert_eq!(parts[at], mapped.as_str());
    }
}
