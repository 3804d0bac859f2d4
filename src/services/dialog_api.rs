//! Mock dialog API.
//!
//! Mirrors the real service's surface: four functions returning canned
//! payloads. The dialog lists are embedded JSON so the decode path matches
//! what a network response would go through; decode failures are logged and
//! propagated, and the page renders a generic retry affordance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::practice::chat::GrammarReview;
use crate::services::grammar;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to decode dialog payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One transcript message as the backend would serialize it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogMessage {
    pub id: u32,
    pub sender: String,
    pub name: String,
    pub text: String,
    pub avatar: String,
    #[serde(default)]
    pub grammar: String,
    #[serde(default, rename = "grammarNote")]
    pub grammar_note: String,
    #[serde(default, rename = "aiPolish")]
    pub ai_polish: String,
}

/// Grammar-correction record for a single dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarCorrection {
    pub grammar: String,
    #[serde(rename = "grammarNote")]
    pub grammar_note: String,
    #[serde(rename = "aiPolish")]
    pub ai_polish: String,
}

/// Response to a user reply: the tutor's answer plus grammar feedback.
#[derive(Debug, Clone)]
pub struct ReplyOutcome {
    pub ai_reply: String,
    pub review: GrammarReview,
}

/// An AI question paired with the user's answer (if one was given).
#[derive(Debug, Clone)]
pub struct DialogPair {
    pub id: u32,
    pub ai: DialogMessage,
    pub user: Option<DialogMessage>,
}

const AI_DIALOGS_JSON: &str = r#"[
  {
    "id": 1,
    "sender": "ai",
    "name": "Catherine",
    "text": "Hi Kevin! It's nice to meet you. How are you today?",
    "avatar": "/assets/catherine.svg"
  },
  {
    "id": 2,
    "sender": "ai",
    "name": "Catherine",
    "text": "I'm good too, thanks. This coffee shop is cozy, isn't it?",
    "avatar": "/assets/catherine.svg"
  },
  {
    "id": 3,
    "sender": "ai",
    "name": "Catherine",
    "text": "Thank you, Kevin. That's very kind of you to say. Do you come here often?",
    "avatar": "/assets/catherine.svg"
  }
]"#;

const USER_DIALOGS_JSON: &str = r#"[
  {
    "id": 1,
    "sender": "user",
    "name": "Me",
    "text": "I'm good, and how are you?",
    "avatar": "/assets/user.svg",
    "grammar": "I'm good, and how are you?",
    "grammarNote": "语法正确",
    "aiPolish": "暂无AI润色数据"
  },
  {
    "id": 2,
    "sender": "user",
    "name": "Me",
    "text": "Yeah, it's a great cafe, and you are very pretty today.",
    "avatar": "/assets/user.svg",
    "grammarNote": "无语法错误",
    "aiPolish": "Yeah, this café has such a nice vibe, and you're looking absolutely lovely today!"
  },
  {
    "id": 3,
    "sender": "user",
    "name": "Me",
    "text": "Now this is my first time here. What would you like to drink?",
    "avatar": "/assets/user.svg",
    "grammarNote": "无语法错误",
    "aiPolish": "Actually, it's my first time here. What can I get you to drink?"
  }
]"#;

fn decode_dialogs(payload: &str) -> Result<Vec<DialogMessage>, ApiError> {
    serde_json::from_str(payload).map_err(|err| {
        log::error!("dialog payload decode failed: {err}");
        ApiError::Decode(err)
    })
}

/// Messages the tutor sent.
pub fn fetch_ai_dialogs() -> Result<Vec<DialogMessage>, ApiError> {
    decode_dialogs(AI_DIALOGS_JSON)
}

/// Messages the user sent, with their grammar feedback.
pub fn fetch_user_dialogs() -> Result<Vec<DialogMessage>, ApiError> {
    decode_dialogs(USER_DIALOGS_JSON)
}

/// AI/user message pairs for the report page; a missing answer leaves the
/// pair open.
pub fn fetch_dialog_pairs() -> Result<Vec<DialogPair>, ApiError> {
    let ai = fetch_ai_dialogs()?;
    let mut users = fetch_user_dialogs()?.into_iter();
    Ok(ai
        .into_iter()
        .map(|ai| DialogPair {
            id: ai.id,
            user: users.next(),
            ai,
        })
        .collect())
}

/// Grammar-correction record for one dialog id.
pub fn fetch_grammar_corrections(dialog_id: u32) -> Result<GrammarCorrection, ApiError> {
    let correction = match dialog_id {
        1 => GrammarCorrection {
            grammar: "I'm good, and how are you?".to_string(),
            grammar_note: "语法正确".to_string(),
            ai_polish: "I'm doing well, thanks for asking — how about you?".to_string(),
        },
        2 => GrammarCorrection {
            grammar: "Yeah, it's a great cafe, and you are very pretty today.".to_string(),
            grammar_note: "无语法错误".to_string(),
            ai_polish: "Yeah, this café has such a nice vibe, and you're looking absolutely lovely today!"
                .to_string(),
        },
        3 => GrammarCorrection {
            grammar: "Now this is my first time here. What would you like to drink?".to_string(),
            grammar_note: "无语法错误".to_string(),
            ai_polish: "Actually, it's my first time here. What can I get you to drink?".to_string(),
        },
        _ => GrammarCorrection {
            grammar: String::new(),
            grammar_note: "未找到该对话的语法纠错数据".to_string(),
            ai_polish: String::new(),
        },
    };
    Ok(correction)
}

/// Send a user reply and receive the canned tutor response plus grammar
/// feedback for the sent text.
pub fn send_user_reply(message: &str) -> Result<ReplyOutcome, ApiError> {
    log::debug!("mock reply for: {message}");
    Ok(ReplyOutcome {
        ai_reply: "That's interesting! Can you tell me more about your thoughts on that?"
            .to_string(),
        review: grammar::review(message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_dialogs_decode() {
        let ai = fetch_ai_dialogs().unwrap();
        assert_eq!(ai.len(), 3);
        assert_eq!(ai[0].name, "Catherine");
        assert!(ai[0].grammar.is_empty());

        let user = fetch_user_dialogs().unwrap();
        assert_eq!(user.len(), 3);
        assert_eq!(user[0].grammar_note, "语法正确");
        // Pair 2 carries a polish line but no correction.
        assert!(user[1].grammar.is_empty());
        assert!(!user[1].ai_polish.is_empty());
    }

    #[test]
    fn pairs_zip_ai_with_user_answers() {
        let pairs = fetch_dialog_pairs().unwrap();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|pair| pair.user.is_some()));
        assert_eq!(pairs[2].id, 3);
        assert_eq!(
            pairs[2].user.as_ref().unwrap().text,
            "Now this is my first time here. What would you like to drink?"
        );
    }

    #[test]
    fn unknown_dialog_id_gets_the_fallback_correction() {
        let correction = fetch_grammar_corrections(42).unwrap();
        assert_eq!(correction.grammar_note, "未找到该对话的语法纠错数据");
        assert!(correction.grammar.is_empty());
    }

    #[test]
    fn reply_outcome_is_deterministic() {
        let outcome = send_user_reply("I like this place").unwrap();
        assert_eq!(
            outcome.ai_reply,
            "That's interesting! Can you tell me more about your thoughts on that?"
        );
        assert_eq!(outcome.review.corrected, "I like this place.");
        assert_eq!(outcome.review.polish, "I think i like this place.");
    }
}
