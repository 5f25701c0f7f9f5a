//! AI generation and chat commands.

use std::io::Write;

use tokio::io::{AsyncBufRead, Lines};
use vocab_core::{ChatMessage, Sender, VocabularySet};

use crate::ai::GenerateRequest;
use crate::error::Result;
use crate::state::AppState;

/// Generate a word list on a topic and save it as a new set.
pub async fn generate<W: Write>(
    state: &AppState,
    request: &GenerateRequest,
    out: &mut W,
) -> Result<VocabularySet> {
    writeln!(out, "Generating {} words about '{}'...", request.word_count, request.topic.trim())?;
    let words = state.ai.generate_vocabulary(request).await?;

    for (i, word) in words.iter().enumerate() {
        writeln!(out, "{:>3}. {} - {}", i + 1, word.english, word.vietnamese)?;
    }

    let title = format!("AI: {}", request.topic.trim());
    let set = state.vocabulary.save_generated(&title, &words)?;
    writeln!(out, "Saved {} words as '{}' ({})", set.word_count, set.title, set.set_id)?;
    Ok(set)
}

/// Interactive tutoring chat. An empty line or `/quit` ends it.
///
/// Failed requests are reported and the conversation goes on. Returns the
/// transcript.
pub async fn chat<R, W>(state: &AppState, input: &mut Lines<R>, out: &mut W) -> Result<Vec<ChatMessage>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut transcript = Vec::new();
    writeln!(out, "Ask anything about English. Type /quit to leave.")?;

    while let Some(line) = input.next_line().await? {
        let message = line.trim();
        if message.is_empty() || message == "/quit" {
            break;
        }
        transcript.push(ChatMessage::new(Sender::User, message));

        match state.ai.chat(message).await {
            Ok(reply) => {
                writeln!(out, "\n{reply}\n")?;
                transcript.push(ChatMessage::new(Sender::Ai, reply));
            }
            Err(e) => {
                tracing::warn!("chat request failed: {}", e);
                writeln!(out, "Sorry, that failed: {e}")?;
            }
        }
    }
    Ok(transcript)
}
