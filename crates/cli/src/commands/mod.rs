//! CLI command implementations.

pub mod resolve;
pub mod search;

use std::time::Duration;

use es_client::{IndexNameMarker, IndicesPath, RequestConfiguration, RequestParameters, TypeMarker};
use secrecy::SecretString;

use crate::args::Selection;

/// Build the index path for a command's selection flags.
///
/// Names come before type markers. Without `--all` the all-indices flag is
/// never touched, and with neither names nor types the selection stays unset,
/// so the default index applies at resolution time.
pub fn indices_path(selection: &Selection) -> IndicesPath {
    let mut path = IndicesPath::new();
    if selection.all {
        path = path.all_indices();
    }

    if !selection.indices.is_empty() || !selection.types.is_empty() {
        let names = selection.indices.iter().cloned().map(IndexNameMarker::Name);
        let types = selection
            .types
            .iter()
            .map(|t| IndexNameMarker::Type(TypeMarker::named(t.clone())));
        path = path.index_markers(names.chain(types));
    }

    if let Some(configuration) = request_configuration(selection) {
        path = path.with_request_configuration(configuration);
    }
    path
}

/// Query parameters from `--param`, or `None` when there are none.
pub fn request_parameters(selection: &Selection) -> Option<RequestParameters> {
    if selection.params.is_empty() {
        return None;
    }
    let params = selection
        .params
        .iter()
        .fold(RequestParameters::new(), |params, (key, value)| {
            params.set(key.clone(), value)
        });
    Some(params)
}

fn request_configuration(selection: &Selection) -> Option<RequestConfiguration> {
    let has_overrides = !selection.headers.is_empty()
        || selection.opaque_id.is_some()
        || selection.request_timeout.is_some()
        || selection.username.is_some();
    if !has_overrides {
        return None;
    }

    let mut cfg = RequestConfiguration::new();
    for (name, value) in &selection.headers {
        cfg = cfg.with_header(name.clone(), value.clone());
    }
    if let Some(id) = &selection.opaque_id {
        cfg = cfg.with_opaque_id(id.clone());
    }
    if let Some(secs) = selection.request_timeout {
        cfg = cfg.with_request_timeout(Duration::from_secs(secs));
    }
    if let (Some(username), Some(password)) = (&selection.username, &selection.password) {
        cfg = cfg.with_basic_auth(username.clone(), SecretString::new(password.clone().into()));
    }
    Some(cfg)
}
