//! Immutable catalogs a fresh session starts from: named system-prompt
//! presets and the default response structure.
use promptshape_schema::{FieldPatch, FieldTree};

/// A named, reusable system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemPromptPreset {
    pub name: &'static str,
    pub prompt: &'static str,
}

pub static SYSTEM_PROMPT_PRESETS: &[SystemPromptPreset] = &[
    SystemPromptPreset {
        name: "Default",
        prompt: "You are a helpful AI assistant. Provide clear, accurate, and helpful responses.",
    },
    SystemPromptPreset {
        name: "Creative Writer",
        prompt: "You are a creative writer. Write engaging, imaginative, and well-crafted content. Use vivid language and creative storytelling techniques.",
    },
    SystemPromptPreset {
        name: "Code Assistant",
        prompt: "You are a programming expert. Write clean, efficient, and well-documented code. Explain your reasoning and suggest best practices.",
    },
    SystemPromptPreset {
        name: "Academic Tutor",
        prompt: "You are an academic tutor. Explain complex concepts clearly, provide examples, and help with learning. Be patient and educational.",
    },
    SystemPromptPreset {
        name: "Business Consultant",
        prompt: "You are a business consultant. Provide strategic advice, analyze situations, and offer practical business solutions.",
    },
    SystemPromptPreset {
        name: "Training Assistant",
        prompt: "You are a nutrition and fitness expert. Analyze the user's input and return ONLY a valid JSON object with calorie estimates.\n\nThe user personal stats are\nmale\n47 years old\n180 cm\nsedentary\n88kg\n\n\nCRITICAL: Your response must be ONLY valid JSON with no additional text.\n\nRequired JSON structure:\n{\n  \"caloriesIn\": 0,\n  \"caloriesOut\": 0,\n  \"age\": null,\n  \"weight\": null,\n  \"height\": null,\n  \"activityLevel\": null,\n\"tdee\":null,\n  \"meals\": [{\"name\": \"Food Name\", \"calories\": 100, \"quantity\": \"1 serving\"}],\n  \"activities\": [{\"name\": \"Activity Name\", \"calories\": 50, \"duration\": \"10 minutes\"}],\n\"balance\":0\n}\n\nInstructions:\n- caloriesIn: Sum of all food calories\n- caloriesOut: Sum of all activity calories\n- meals: Each item shows TOTAL calories for the full quantity consumed\n- activities: Each item shows TOTAL calories burned for the full duration\n- Use realistic calorie estimates based on typical portions and intensities\n- All numbers must be integers\n- Set age/weight/height/activityLevel to null if not mentioned\n- For activityLevel, use one of: \"sedentary\", \"light\", \"moderate\", \"active\", \"very_active\"\n- Use empty arrays [] if no food/activities mentioned\n- Calculate TDEE field based on user personal stats and provide tdee in json response\n- Calculate balance which caloriesIn-(caloriesOut+tdee)",
    },
    SystemPromptPreset {
        name: "Custom",
        prompt: "",
    },
];

pub fn find_preset(name: &str) -> Option<&'static SystemPromptPreset> {
    SYSTEM_PROMPT_PRESETS.iter().find(|preset| preset.name == name)
}

pub fn default_preset() -> &'static SystemPromptPreset {
    &SYSTEM_PROMPT_PRESETS[0]
}

/// The structure a new session proposes: a single required `response`
/// string.
pub fn default_response_fields() -> FieldTree {
    let mut tree = FieldTree::new();
    tree.insert_with(
        None,
        FieldPatch::new()
            .name("response")
            .description("The main response from the AI")
            .required(true)
            .example("Hello, how can I help you?"),
    );
    tree
}
