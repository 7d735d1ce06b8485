use crate::graph::{ConditionType, EdgeDefinition};

/// Literal always-true placeholder, in the engine's interpolation syntax.
pub const ALWAYS_TRUE: &str = "${true}";
/// Expression taken when the previous step reported success.
pub const RESULT_SUCCESS: &str = "${result.success == true}";
/// Expression taken when the previous step reported failure.
pub const RESULT_FAILURE: &str = "${result.success == false}";

/// Wraps free-form logic text in the engine's `${...}` interpolation syntax.
pub fn wrap_expression(logic: &str) -> String {
    format!("${{{}}}", logic)
}

/// Derives the engine expression for a conditional edge.
///
/// A pre-rendered engine condition on the edge always wins; otherwise the
/// coarse condition tag is mapped by fixed rule. Tags without a dedicated
/// expression fall back to the always-true placeholder.
pub fn render_condition(edge: &EdgeDefinition) -> String {
    if let Some(expression) = &edge.engine_condition {
        return expression.clone();
    }
    match edge.condition_type {
        Some(ConditionType::Match) => RESULT_SUCCESS.to_string(),
        Some(ConditionType::NoMatch) => RESULT_FAILURE.to_string(),
        Some(ConditionType::Custom) => match &edge.custom_logic {
            Some(logic) => wrap_expression(logic),
            None => ALWAYS_TRUE.to_string(),
        },
        _ => ALWAYS_TRUE.to_string(),
    }
}
