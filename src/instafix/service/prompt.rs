use serde_json::{json, Value};

pub const SYSTEM_INSTRUCTION: &str = "\
You are 'Instant Fix', a world-class life coach designed to provide immediate, high-impact guidance.
Your tone is empathetic but direct, concise, and action-oriented.

For every user problem, you must provide three distinct outputs:
1. Insight: A profound 3-line advice snippet that shifts perspective. Max 3 sentences.
2. Plan: A 30-second read plan explaining the strategy. Keep it punchy.
3. Actions: Exactly 3 direct, immediate steps the user can take right now. Start with verbs.

Do not use markdown formatting in the strings. Keep text clean.";

/// Response schema declared to the endpoint. Field set mirrors `FixPayload`.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "insight": {
                "type": "STRING",
                "description": "3-line advice: Short, practical insight."
            },
            "plan": {
                "type": "STRING",
                "description": "30-second plan: Quick strategy overview."
            },
            "actions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3-step action list."
            }
        },
        "required": ["insight", "plan", "actions"]
    })
}
