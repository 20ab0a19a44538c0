use crate::schema::MafConfig;

/// Validate the `[console]` section: the sample menu needs at least one
/// usable entry.
pub(crate) fn validate_console(errors: &mut Vec<String>, config: &MafConfig) {
    let samples = &config.console.samples;
    if samples.is_empty() {
        errors.push("console.samples must contain at least one prompt".to_string());
    }
    for (i, sample) in samples.iter().enumerate() {
        if sample.trim().is_empty() {
            errors.push(format!("console.samples[{i}] must not be empty"));
        }
    }
}
