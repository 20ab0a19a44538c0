use crate::schema::MafConfig;

use super::helpers::validate_range;

/// Validate the `[agent]` section.
pub(crate) fn validate_agent(errors: &mut Vec<String>, config: &MafConfig) {
    validate_range(
        errors,
        "agent.max_tool_rounds",
        config.agent.max_tool_rounds,
        1,
        100,
    );
}
