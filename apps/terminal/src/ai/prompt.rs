//! Prompt text sent to the model.

use std::fmt::Write;
use std::str::FromStr;

use super::GenerateRequest;

/// System prompt for the tutoring chat.
pub const CHAT_SYSTEM_PROMPT: &str = "You are an AI assistant that helps Vietnamese speakers learn English. \
You can create vocabulary, explain words, write examples and dialogues, \
or answer any question about English. Reply in Vietnamese unless asked otherwise.";

/// Tone of explanations and memory tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Default,
    Simple,
    Humorous,
    Academic,
    Kids,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Simple => "simple",
            Self::Humorous => "humorous",
            Self::Academic => "academic",
            Self::Kids => "kids",
        }
    }

    fn instruction(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Simple => Some(
                "Explain each word simply, in everyday language. Keep memory tips short and easy to recall.",
            ),
            Self::Humorous => Some(
                "Explain each word in a funny, lighthearted way. Memory tips should be humorous, using a short joke or an amusing comparison.",
            ),
            Self::Academic => Some(
                "Explain each word in an academic, professional tone. Memory tips should be analytical and logical, suited to serious learners.",
            ),
            Self::Kids => Some(
                "Explain each word simply and cheerfully for children. Memory tips should be playful, using images or cute little stories.",
            ),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "simple" => Ok(Self::Simple),
            "humorous" | "funny" => Ok(Self::Humorous),
            "academic" => Ok(Self::Academic),
            "kids" | "children" => Ok(Self::Kids),
            other => Err(format!("unknown style: {other}")),
        }
    }
}

/// Build the vocabulary generation prompt.
pub fn build_vocabulary_prompt(request: &GenerateRequest) -> String {
    let interests = request.interests.trim();
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are a professional English teacher. Create {} English vocabulary words based on this topic or these keywords: \"{}\"\n",
        request.word_count,
        request.topic.trim()
    );

    if !interests.is_empty() {
        let _ = writeln!(prompt, "IMPORTANT - Personalize for the learner's interests:");
        let _ = writeln!(prompt, "The learner is interested in: {interests}");
        let _ = writeln!(
            prompt,
            "Make the example sentences relate to these interests.\n"
        );
    }

    if let Some(instruction) = request.style.instruction() {
        let _ = writeln!(prompt, "IMPORTANT - Explanation style:");
        let _ = writeln!(prompt, "{instruction}\n");
    }

    prompt.push_str("Requirements:\n");
    prompt.push_str("1. Every word must include:\n");
    prompt.push_str("   - The English word\n");
    prompt.push_str("   - Its Vietnamese meaning\n");
    prompt.push_str("   - IPA pronunciation\n");
    prompt.push_str("   - An example sentence in English");
    if !interests.is_empty() {
        let _ = write!(prompt, " (related to: {interests})");
    }
    prompt.push('\n');
    prompt.push_str("   - A memory tip (in Vietnamese");
    if request.style != Style::Default {
        let _ = write!(prompt, ", in a {} style", request.style.as_str());
    }
    prompt.push_str(")\n\n");

    prompt.push_str("2. Return the result as a JSON array in this format:\n");
    prompt.push_str(
        r#"[
  {
    "english": "English word",
    "vietnamese": "Vietnamese meaning",
    "pronunciation": "/IPA/",
    "example": "Example sentence in English",
    "memoryTip": "Memory tip in Vietnamese"
  }
]

"#,
    );
    prompt.push_str("Return only the JSON array, with no other text.");
    prompt
}
