//! Assistant service: canned replies picked by keyword.
//!
//! DESIGN
//! ======
//! Input is lower-cased and checked for topic keywords in a fixed order;
//! the first topic with a matching substring wins. There is no ranking and
//! no memory beyond the transcript. Replies are appended after a short
//! simulated "typing" delay.

use serde::Serialize;
use tracing::info;

use crate::state::AppState;

pub const GREETING: &str =
    "Hello! I'm your CampusPay AI assistant. How can I help you navigate the Algorand ecosystem today?";
pub const SPLIT_REPLY: &str = "To split a bill, go to the 'Expense Splitting' tab, add your friends' Algorand addresses, and click 'Deploy Split Smart Contract'. The contract will handle the math and logic on-chain!";
pub const TICKET_REPLY: &str = "You can buy event tickets in the 'Ticketing' tab. Each ticket is a unique NFT (ASA) on Algorand, ensuring it's authentic and secure.";
pub const FUNDRAISING_REPLY: &str = "Our fundraising module allows you to donate ALGO directly to campus projects. Every donation is recorded on the Algorand blockchain for full transparency.";
pub const HELLO_REPLY: &str = "Hi there! I'm ready to help you with your CampusPay experience. What's on your mind?";
pub const FALLBACK_REPLY: &str = "I'm still learning, but I can help you with payments, splitting bills, or event tickets! Try asking about 'how to split' or 'buying tickets'.";

/// Topics in match priority order.
const TOPICS: &[(&[&str], &str)] = &[
    (&["split"], SPLIT_REPLY),
    (&["ticket"], TICKET_REPLY),
    (&["fund", "donate"], FUNDRAISING_REPLY),
    (&["hello", "hi"], HELLO_REPLY),
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AssistantError {
    #[error("message is empty")]
    EmptyMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatExchange {
    pub question: ChatMessage,
    pub reply: ChatMessage,
}

/// Pick the canned reply for `input`.
#[must_use]
pub fn reply_for(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(*k)))
        .map_or(FALLBACK_REPLY, |(_, reply)| *reply)
}

#[must_use]
pub fn seed_transcript() -> Vec<ChatMessage> {
    vec![ChatMessage { id: 1, sender: Sender::Assistant, text: GREETING.to_owned() }]
}

/// Append the user's message, wait, then append the assistant reply.
pub async fn send(state: &AppState, text: &str) -> Result<ChatExchange, AssistantError> {
    if text.trim().is_empty() {
        return Err(AssistantError::EmptyMessage);
    }

    let question = {
        let mut campus = state.campus.write().await;
        let message = ChatMessage { id: campus.next_message_id, sender: Sender::User, text: text.to_owned() };
        campus.next_message_id += 1;
        campus.transcript.push(message.clone());
        message
    };
    info!(message_id = question.id, len = text.len(), "assistant: message received");

    if !state.config.assistant_delay.is_zero() {
        tokio::time::sleep(state.config.assistant_delay).await;
    }

    let reply_text = reply_for(text);
    let mut campus = state.campus.write().await;
    let reply = ChatMessage { id: campus.next_message_id, sender: Sender::Assistant, text: reply_text.to_owned() };
    campus.next_message_id += 1;
    campus.transcript.push(reply.clone());
    Ok(ChatExchange { question, reply })
}

pub async fn transcript(state: &AppState) -> Vec<ChatMessage> {
    state.campus.read().await.transcript.clone()
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
