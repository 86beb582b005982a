//! Diet plan assembly.
//!
//! The numbers (BMR, calorie target, macro grams) are computed locally and
//! deterministically; only the narrative meal schedule comes from the
//! gateway. A plan is immutable once assembled.

use crate::error::Result;
use crate::llm::prompts;
use crate::llm::GatewayClient;
use crate::metrics::{split_macros, MacroSplit, UserHealthProfile};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Evidence-based tips shipped with every generated plan.
const TIPS: [&str; 5] = [
    "Hydrate consistently with 8-10 glasses of water throughout the day",
    "Maintain regular eating intervals to optimize metabolism and energy levels",
    "Include diverse colorful vegetables and fruits for essential micronutrients",
    "Practice mindful portion control using the balanced plate method",
    "Combine proper nutrition with regular physical activity for optimal results",
];

/// A personalized diet plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlan {
    /// Basal metabolic rate, kcal/day.
    pub bmr: i32,
    /// Daily calorie target after activity and goal adjustment.
    pub total_calories: i32,
    /// Macro gram targets for the calorie budget.
    pub macros: MacroSplit,
    /// Generated 7-day meal narrative.
    pub plan_text: String,
    /// Fixed nutrition tips, in display order.
    pub tips: Vec<String>,
}

/// Generate a diet plan for a profile.
///
/// Validation runs first and blocks the (billed) remote call on failure.
/// The calculations never depend on the generated text, so a plan's numbers
/// are reproducible from the profile alone.
///
/// # Errors
///
/// [`CompanionError::Validation`](crate::error::CompanionError::Validation)
/// for an invalid profile, [`CompanionError::Gateway`](crate::error::CompanionError::Gateway)
/// when the generation call fails.
pub async fn generate_plan(
    client: &GatewayClient,
    profile: &UserHealthProfile,
    language_code: &str,
) -> Result<DietPlan> {
    profile.validate()?;

    let bmr = profile.bmr();
    let total_calories = profile.target_calories();
    let macros = split_macros(total_calories);

    let prompt = prompts::diet_prompt(profile, bmr, total_calories, language_code);
    let plan_text = client
        .generate(&prompts::chat_system_prompt(language_code), &prompt)
        .await?;

    info!(bmr, total_calories, "diet plan generated");

    Ok(DietPlan {
        bmr,
        total_calories,
        macros,
        plan_text,
        tips: TIPS.iter().map(|t| (*t).to_owned()).collect(),
    })
}
