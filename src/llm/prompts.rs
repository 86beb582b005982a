//! Per-feature system instructions, language table, and fallback strings.
//!
//! These are configuration for the external text-generation collaborator.
//! Changing this file changes tone and framing, never behavior.

use crate::metrics::UserHealthProfile;

/// Language codes the assistant can respond in, with display names.
const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("bn", "Bengali"),
    ("mr", "Marathi"),
    ("gu", "Gujarati"),
    ("kn", "Kannada"),
    ("ml", "Malayalam"),
];

/// Map a language code to its display name; unknown codes fall back to
/// English.
pub fn language_name(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("English")
}

/// User-safe substitute text when a chat generation fails.
pub const CHAT_FALLBACK: &str = "I'm sorry, I'm having trouble processing your request right now. \
     Please try again in a moment.";

/// User-safe substitute text when report analysis fails.
pub const ANALYSIS_FALLBACK: &str = "I'm sorry, I couldn't analyze your report at this time. \
     Please make sure the report text is clear and try again.";

/// System instructions for the health chat assistant, in the requested
/// language.
pub fn chat_system_prompt(language_code: &str) -> String {
    let language = language_name(language_code);
    format!(
        "You are Sahay, a compassionate and knowledgeable digital health assistant. Your role is to:\n\
         \n\
         1. Answer health-related questions in simple, clear language\n\
         2. Provide general health information and wellness tips\n\
         3. Help users understand medical terminology\n\
         4. Suggest when to seek professional medical care\n\
         5. Support multilingual communication\n\
         \n\
         IMPORTANT:\n\
         - Respond in {language} language\n\
         - Always remind users that you provide general information only and cannot replace professional medical advice\n\
         - For serious symptoms or emergencies, always advise consulting a healthcare provider immediately\n\
         - Be empathetic, patient, and culturally sensitive\n\
         - Use simple language and avoid complex medical jargon unless explaining it"
    )
}

/// System instructions for the medical report analyzer.
pub const ANALYZER_SYSTEM_PROMPT: &str = "You are Sahay's medical report analyzer. Your role is to:\n\
    \n\
    1. Read and understand medical reports (blood tests, lab results, imaging reports, etc.)\n\
    2. Explain medical terminology in simple, easy-to-understand language\n\
    3. Highlight key findings and what they mean\n\
    4. Identify values that are outside normal ranges\n\
    5. Provide context about what the results might indicate\n\
    6. Suggest follow-up actions or when to consult a doctor\n\
    \n\
    IMPORTANT GUIDELINES:\n\
    - Use simple, non-technical language\n\
    - Break down complex medical terms\n\
    - Organize your analysis clearly with sections\n\
    - Always emphasize that this is educational information only\n\
    - Never provide definitive diagnoses\n\
    - Always recommend consulting with healthcare professionals for proper interpretation\n\
    - Be sensitive and supportive in your communication\n\
    \n\
    Format your response with clear sections:\n\
    1. Summary Overview\n\
    2. Key Findings\n\
    3. Explanation of Values\n\
    4. Recommendations\n\
    5. When to Seek Medical Attention";

/// Wrap the raw report text as the analyzer's user turn.
pub fn analyzer_user_prompt(report_text: &str) -> String {
    format!(
        "Please analyze this medical report and explain it in simple terms:\n\n{report_text}"
    )
}

/// Build the diet-plan generation prompt from a validated profile and its
/// pre-computed calorie figures.
pub fn diet_prompt(
    profile: &UserHealthProfile,
    bmr: i32,
    total_calories: i32,
    language_code: &str,
) -> String {
    let restrictions = non_empty_or(&profile.dietary_restrictions, "No specific restrictions");
    let allergies = non_empty_or(&profile.allergies, "None specified");
    let cuisine = non_empty_or(&profile.cuisine, "Mixed international");
    let language = language_name(language_code);

    format!(
        "Create a personalized 7-day diet plan for a health-conscious individual:\n\
         \n\
         HEALTH PROFILE:\n\
         - Demographics: {age} years old, {gender:?}\n\
         - Physical Stats: {weight}kg, {height}cm\n\
         - Metabolic Rate: {bmr} calories (BMR), Target: {total_calories} calories/day\n\
         - Activity Level: {activity:?}, Health Goal: {goal:?}\n\
         - Dietary Preferences: {restrictions}\n\
         - Food Allergies: {allergies}\n\
         - Cuisine Preference: {cuisine}\n\
         \n\
         Please provide a comprehensive nutrition plan including:\n\
         1. Complete 7-day meal schedule (breakfast, lunch, dinner, 2 snacks)\n\
         2. Balanced macronutrients: 25% protein, 50% carbohydrates, 25% healthy fats\n\
         3. Detailed portion sizes and calorie breakdown per meal\n\
         4. 5 evidence-based nutrition tips for optimal health\n\
         5. Meal preparation suggestions for busy schedules\n\
         6. Respond in {language}\n\
         \n\
         Focus on whole foods, balanced nutrition, and sustainable eating habits.",
        age = profile.age,
        gender = profile.gender,
        weight = profile.weight_kg,
        height = profile.height_cm,
        activity = profile.activity_level,
        goal = profile.goal,
    )
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() { default } else { value }
}
