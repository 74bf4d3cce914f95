//! Prompt templates and placeholder texts.

pub const INSIGHT_SYSTEM_INSTRUCTION: &str =
    "You are a helpful, knowledgeable, and concise math tutor.";

pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are an enthusiastic 3D geometry expert. \
     Keep answers short and strictly related to math, geometry, or the golden ratio.";

pub const NO_INSIGHT_TEXT: &str = "No insight generated.";

pub const INSIGHT_FAILURE_TEXT: &str =
    "Unable to fetch AI insights at this moment. Please check your API key connection.";

pub const CHAT_FAILURE_TEXT: &str = "Error connecting to AI service.";

/// Canned topics offered next to the insight box.
pub const SUGGESTED_TOPICS: [&str; 3] = [
    "The connection between Sunflowers and Fibonacci Spheres",
    "Why is the Golden Angle roughly 137.5 degrees?",
    "Mathematical properties of the Fibonacci Lattice",
];

/// Topic requested when the tutor panel first opens.
pub fn default_topic(points: u32) -> String {
    format!(
        "The mathematical significance of distributing {points} points on a sphere using the golden ratio."
    )
}

pub fn insight_prompt(points: u32, topic: &str) -> String {
    format!(
        "You are an expert mathematician and creative coder.\n\
         The user is visualizing a Fibonacci Sphere with {points} points.\n\
         \n\
         Topic requested: {topic}.\n\
         \n\
         Explain this concept briefly (max 2 paragraphs).\n\
         Focus on the beauty of the math, specifically the Golden Ratio (Phi).\n\
         If relevant, mention how the points are distributed using the formula involving the Golden Angle.\n\
         Format with Markdown."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_prompt_mentions_points_and_topic() {
        let prompt = insight_prompt(420, "Sunflowers");
        assert!(prompt.contains("Fibonacci Sphere with 420 points"));
        assert!(prompt.contains("Topic requested: Sunflowers."));
        assert!(prompt.contains("max 2 paragraphs"));
        assert!(prompt.ends_with("Format with Markdown."));
    }

    #[test]
    fn default_topic_embeds_point_count() {
        assert_eq!(
            default_topic(1000),
            "The mathematical significance of distributing 1000 points on a sphere using the golden ratio."
        );
    }

    #[test]
    fn chat_instruction_is_one_line() {
        assert!(!CHAT_SYSTEM_INSTRUCTION.contains('\n'));
        assert!(CHAT_SYSTEM_INSTRUCTION.contains("expert. Keep answers short"));
    }
}
