//! Support chat triage.
//!
//! Incoming messages are classified by keyword lists checked in priority
//! order (crisis, anxiety, depression). Each class carries a canned response
//! and a weight added to the session's running assessment score. Messages
//! matching nothing get a supportive response, rotated round robin.
//!
//! Every client talks to its own [`ChatSession`], keyed by a session id in
//! [`ChatSessions`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WellnessError, WellnessResult};

pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "die",
    "hopeless",
];
pub const ANXIETY_KEYWORDS: &[&str] = &["anxious", "worried", "panic", "stress", "overwhelmed"];
pub const DEPRESSION_KEYWORDS: &[&str] = &["sad", "depressed", "empty", "worthless", "lonely"];

/// Messages kept per session; the oldest are dropped first.
pub const MAX_TRANSCRIPT: usize = 200;
/// Live sessions kept before the least recently used one is evicted.
pub const MAX_SESSIONS: usize = 1024;

const GREETING: &str = "Hello! I'm here to support you through whatever you're experiencing. This is a safe, confidential space where you can share your thoughts and feelings. How are you doing today?";

const CRISIS_RESPONSE: &str = "I'm really concerned about what you're sharing. Your safety is the most important thing right now. Please know that you're not alone and there are people who want to help. Would you like me to connect you with a crisis counselor right away, or would you prefer to call a crisis helpline? You can also text 'HELLO' to 741741 for immediate support.";

const ANXIETY_RESPONSE: &str = "It sounds like you're experiencing some anxiety, which is very common among students. Let's work through this together. Can you tell me more about what's making you feel this way? In the meantime, try this quick breathing exercise: breathe in for 4 counts, hold for 4, then breathe out for 6. This can help calm your nervous system.";

const DEPRESSION_RESPONSE: &str = "Thank you for sharing that with me. It takes courage to talk about difficult feelings. What you're experiencing sounds really challenging. Remember that these feelings, while very real and valid, are temporary. Have you been able to talk to anyone else about how you're feeling? I'm here to listen and support you.";

const COPING_SUGGESTION: &str = "Here are some immediate coping strategies that might help: 1) Practice deep breathing, 2) Try progressive muscle relaxation, 3) Go for a short walk, 4) Listen to calming music. Would you like me to guide you through any of these?";

const SUPPORTIVE_RESPONSES: &[&str] = &[
    "I hear you, and I want you to know that your feelings are valid. Can you tell me more about what's been on your mind?",
    "Thank you for sharing that with me. It sounds like you're going through a lot right now. What would be most helpful for you in this moment?",
    "I appreciate you opening up. Sometimes just talking about what we're experiencing can be the first step toward feeling better. How long have you been feeling this way?",
    "That sounds really difficult to deal with. You're not alone in this - many students face similar challenges. What kind of support do you think would help you most right now?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Normal,
    Assessment,
    Crisis,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
}

impl ChatMessage {
    fn new(content: impl Into<String>, sender: Sender, kind: Option<MessageKind>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// Result of classifying one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub kind: MessageKind,
    pub response: &'static str,
    /// Added to the session's assessment score.
    pub score_delta: u32,
}

/// Classifies a message. `turn` selects the supportive response used when
/// no keyword matches.
pub fn analyze(content: &str, turn: usize) -> Analysis {
    let lower = content.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|keyword| lower.contains(keyword));

    if mentions(CRISIS_KEYWORDS) {
        Analysis {
            kind: MessageKind::Crisis,
            response: CRISIS_RESPONSE,
            score_delta: 3,
        }
    } else if mentions(ANXIETY_KEYWORDS) {
        Analysis {
            kind: MessageKind::Assessment,
            response: ANXIETY_RESPONSE,
            score_delta: 1,
        }
    } else if mentions(DEPRESSION_KEYWORDS) {
        Analysis {
            kind: MessageKind::Assessment,
            response: DEPRESSION_RESPONSE,
            score_delta: 2,
        }
    } else {
        Analysis {
            kind: MessageKind::Normal,
            response: SUPPORTIVE_RESPONSES[turn % SUPPORTIVE_RESPONSES.len()],
            score_delta: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    Feeling,
    Coping,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedPrompt {
    pub id: &'static str,
    pub text: &'static str,
    pub category: PromptCategory,
}

/// Quick replies offered under the chat input.
pub fn suggested_prompts() -> Vec<SuggestedPrompt> {
    use PromptCategory::*;
    [
        ("1", "I'm feeling anxious about exams", Feeling),
        ("2", "I'm having trouble sleeping", Feeling),
        ("3", "I feel overwhelmed with coursework", Feeling),
        ("4", "I need help with stress management", Coping),
        ("5", "Can you suggest breathing exercises?", Coping),
        ("6", "I want to talk to someone", Support),
    ]
    .into_iter()
    .map(|(id, text, category)| SuggestedPrompt { id, text, category })
    .collect()
}

/// What one exchange added to the transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub message: ChatMessage,
    pub reply: ChatMessage,
    /// Coping suggestions sent after assessment replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<ChatMessage>,
    pub assessment_score: u32,
    pub crisis_alert: bool,
}

/// A single conversation with its running assessment.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    assessment_score: u32,
    crisis_alert: bool,
    supportive_turn: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Starts a session with the greeting message.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(GREETING, Sender::Ai, Some(MessageKind::Normal))],
            assessment_score: 0,
            crisis_alert: false,
            supportive_turn: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn assessment_score(&self) -> u32 {
        self.assessment_score
    }

    /// Set once any message trips the crisis keywords; never cleared.
    pub fn crisis_alert(&self) -> bool {
        self.crisis_alert
    }

    pub fn send(&mut self, content: &str) -> WellnessResult<ChatExchange> {
        let content = content.trim();
        if content.is_empty() {
            return Err(WellnessError::InvalidInput("message is empty".to_string()));
        }

        let analysis = analyze(content, self.supportive_turn);
        if analysis.kind == MessageKind::Normal {
            self.supportive_turn += 1;
        }
        if analysis.kind == MessageKind::Crisis {
            self.crisis_alert = true;
            tracing::warn!("crisis keywords detected in chat message");
        }
        self.assessment_score = self.assessment_score.saturating_add(analysis.score_delta);

        let message = ChatMessage::new(content, Sender::User, None);
        let reply = ChatMessage::new(analysis.response, Sender::Ai, Some(analysis.kind));
        let follow_up = (analysis.kind == MessageKind::Assessment).then(|| {
            ChatMessage::new(COPING_SUGGESTION, Sender::Ai, Some(MessageKind::Suggestion))
        });

        self.messages.push(message.clone());
        self.messages.push(reply.clone());
        if let Some(follow_up) = &follow_up {
            self.messages.push(follow_up.clone());
        }
        if self.messages.len() > MAX_TRANSCRIPT {
            let excess = self.messages.len() - MAX_TRANSCRIPT;
            self.messages.drain(..excess);
        }

        Ok(ChatExchange {
            message,
            reply,
            follow_up,
            assessment_score: self.assessment_score,
            crisis_alert: self.crisis_alert,
        })
    }
}

/// Reply to one message sent through [`ChatSessions`].
#[derive(Debug, Clone)]
pub struct SessionReply {
    pub session_id: String,
    pub exchange: ChatExchange,
}

#[derive(Debug)]
struct SessionEntry {
    session: ChatSession,
    last_used: u64,
}

#[derive(Debug, Default)]
struct SessionTable {
    entries: HashMap<String, SessionEntry>,
    clock: u64,
}

/// Chat sessions keyed by client session id.
#[derive(Debug)]
pub struct ChatSessions {
    table: Mutex<SessionTable>,
    capacity: usize,
}

impl Default for ChatSessions {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSessions {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SESSIONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Mutex::new(SessionTable::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.table.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sends `content` to the session named by `session_id`.
    ///
    /// A missing or unknown id starts a fresh session; the id in use is
    /// returned with the exchange.
    pub fn send(&self, session_id: Option<&str>, content: &str) -> WellnessResult<SessionReply> {
        if content.trim().is_empty() {
            return Err(WellnessError::InvalidInput("message is empty".to_string()));
        }

        let session_id = session_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::now_v7().to_string());

        let mut table = self.table.lock();
        table.clock += 1;
        let now = table.clock;
        if !table.entries.contains_key(&session_id) {
            if table.entries.len() >= self.capacity {
                evict_least_recent(&mut table.entries);
            }
            tracing::debug!(%session_id, "chat session started");
        }
        let entry = table
            .entries
            .entry(session_id.clone())
            .or_insert_with(|| SessionEntry {
                session: ChatSession::new(),
                last_used: now,
            });
        entry.last_used = now;
        let exchange = entry.session.send(content)?;
        Ok(SessionReply {
            session_id,
            exchange,
        })
    }

    /// Current transcript of a session, greeting first.
    pub fn transcript(&self, session_id: &str) -> WellnessResult<Vec<ChatMessage>> {
        self.table
            .lock()
            .entries
            .get(session_id)
            .map(|entry| entry.session.messages().to_vec())
            .ok_or_else(|| WellnessError::NotFound(format!("chat session {session_id}")))
    }
}

fn evict_least_recent(entries: &mut HashMap<String, SessionEntry>) {
    let oldest = entries
        .iter()
        .min_by_key(|(_, entry)| entry.last_used)
        .map(|(id, _)| id.clone());
    if let Some(id) = oldest {
        entries.remove(&id);
        tracing::debug!(session_id = %id, "chat session evicted");
    }
}
