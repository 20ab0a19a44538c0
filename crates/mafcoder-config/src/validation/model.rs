use crate::schema::MafConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate the `[model]` section.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &MafConfig) {
    let model = &config.model;
    validate_not_blank(errors, "model.name", &model.name);
    validate_not_blank(errors, "model.api_key_env", &model.api_key_env);

    if !(model.api_base.starts_with("http://") || model.api_base.starts_with("https://")) {
        errors.push(format!(
            "model.api_base = {:?} must be an http(s) URL",
            model.api_base
        ));
    }

    validate_range(
        errors,
        "model.max_output_tokens",
        model.max_output_tokens,
        16,
        128_000,
    );
}
