//! Endpoint settings validation.

use crate::schema::ChemistConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(super) fn validate_api(errors: &mut Vec<String>, config: &ChemistConfig) {
    let api = &config.api;

    if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }

    validate_non_empty(errors, "api.model", &api.model);
    if api.model.contains('/') {
        errors.push(format!("api.model = {:?} must not contain '/'", api.model));
    }

    validate_non_empty(errors, "api.key_env", &api.key_env);
    validate_range(errors, "api.timeout_secs", api.timeout_secs, 0, 3600);
}
