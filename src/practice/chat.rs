//! Scripted chat session.
//!
//! The "tutor" replies from a fixed per-round script after a simulated
//! delay. When the final round's reply has landed, a completion banner is
//! scheduled one more delay later.

use std::time::{Duration, Instant};

use crate::practice::timer::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Ai,
    User,
}

/// Mock grammar feedback attached to a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarReview {
    pub corrected: String,
    pub note: String,
    pub polish: String,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: usize,
    pub sender: Sender,
    pub text: String,
    pub review: Option<GrammarReview>,
}

#[derive(Debug)]
enum ChatEvent {
    Reply(u32),
    Completed,
}

#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    rounds: u32,
    max_rounds: u32,
    sending: bool,
    completed: bool,
    script: &'static [&'static str],
    fallback_reply: &'static str,
    timers: Scheduler<ChatEvent>,
    reply_delay: Duration,
    next_message_id: usize,
}

impl ChatSession {
    pub fn new(
        opening: Vec<(Sender, String, Option<GrammarReview>)>,
        script: &'static [&'static str],
        fallback_reply: &'static str,
        max_rounds: u32,
        reply_delay: Duration,
    ) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            rounds: 0,
            max_rounds,
            sending: false,
            completed: false,
            script,
            fallback_reply,
            timers: Scheduler::new(),
            reply_delay,
            next_message_id: 1,
        };
        for (sender, text, review) in opening {
            session.push_message(sender, text, review);
        }
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Append a user message and schedule the scripted reply. Refused while
    /// a reply is pending, after completion, or for blank input.
    pub fn send(&mut self, text: &str, review: GrammarReview, now: Instant) -> bool {
        let text = text.trim();
        if text.is_empty() || self.sending || self.completed {
            return false;
        }
        self.push_message(Sender::User, text.to_string(), Some(review));
        self.rounds += 1;
        self.sending = true;
        self.timers
            .schedule(now + self.reply_delay, ChatEvent::Reply(self.rounds));
        true
    }

    /// Reset to a fresh conversation opened by `greeting`.
    pub fn start_scene(&mut self, greeting: &str) {
        self.messages.clear();
        self.next_message_id = 1;
        self.rounds = 0;
        self.sending = false;
        self.completed = false;
        self.timers.clear();
        self.push_message(Sender::Ai, greeting.to_string(), None);
    }

    pub fn tick(&mut self, now: Instant) {
        for (_, event) in self.timers.fire_due(now) {
            match event {
                ChatEvent::Reply(round) => {
                    let reply = self.reply_for_round(round);
                    self.push_message(Sender::Ai, reply.to_string(), None);
                    self.sending = false;
                    if round >= self.max_rounds {
                        self.timers
                            .schedule(now + self.reply_delay, ChatEvent::Completed);
                    }
                }
                ChatEvent::Completed => {
                    self.completed = true;
                }
            }
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    fn reply_for_round(&self, round: u32) -> &'static str {
        self.script
            .get(round.saturating_sub(1) as usize)
            .copied()
            .unwrap_or(self.fallback_reply)
    }

    fn push_message(&mut self, sender: Sender, text: String, review: Option<GrammarReview>) {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            review,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);
    const SCRIPT: [&str; 2] = ["first reply", "second reply"];

    fn review() -> GrammarReview {
        GrammarReview {
            corrected: "corrected".to_string(),
            note: "note".to_string(),
            polish: "polish".to_string(),
        }
    }

    fn session() -> ChatSession {
        ChatSession::new(Vec::new(), &SCRIPT, "fallback", 2, DELAY)
    }

    #[test]
    fn reply_arrives_after_the_delay() {
        let t0 = Instant::now();
        let mut chat = session();
        assert!(chat.send("Hello there", review(), t0));
        assert!(chat.is_sending());
        assert_eq!(chat.messages().len(), 1);

        chat.tick(t0 + DELAY - Duration::from_millis(1));
        assert_eq!(chat.messages().len(), 1);

        chat.tick(t0 + DELAY);
        assert!(!chat.is_sending());
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[1].sender, Sender::Ai);
        assert_eq!(chat.messages()[1].text, "first reply");
    }

    #[test]
    fn sends_are_refused_while_a_reply_is_pending() {
        let t0 = Instant::now();
        let mut chat = session();
        chat.send("one", review(), t0);
        assert!(!chat.send("two", review(), t0 + Duration::from_millis(10)));
        assert_eq!(chat.rounds(), 1);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut chat = session();
        assert!(!chat.send("   ", review(), Instant::now()));
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn completion_banner_follows_the_final_reply() {
        let t0 = Instant::now();
        let mut chat = session();
        chat.send("round one", review(), t0);
        chat.tick(t0 + DELAY);

        let t1 = t0 + Duration::from_secs(5);
        chat.send("round two", review(), t1);
        chat.tick(t1 + DELAY);
        assert_eq!(chat.messages().last().unwrap().text, "second reply");
        assert!(!chat.is_completed());

        chat.tick(t1 + DELAY + DELAY);
        assert!(chat.is_completed());
        assert!(!chat.send("more", review(), t1 + Duration::from_secs(10)));
    }

    #[test]
    fn start_scene_resets_the_conversation() {
        let t0 = Instant::now();
        let mut chat = session();
        chat.send("round one", review(), t0);
        chat.start_scene("Welcome to the cafe!");

        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, "Welcome to the cafe!");
        assert_eq!(chat.rounds(), 0);
        assert!(!chat.is_sending());
        // The pre-reset reply timer must not fire into the new scene.
        chat.tick(t0 + DELAY);
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn rounds_past_the_script_use_the_fallback_reply() {
        let t0 = Instant::now();
        let mut chat = ChatSession::new(Vec::new(), &SCRIPT, "fallback", 5, DELAY);
        for round in 0..3u64 {
            let at = t0 + Duration::from_secs(round * 10);
            assert!(chat.send("text", review(), at));
            chat.tick(at + DELAY);
        }
        assert_eq!(chat.messages().last().unwrap().text, "fallback");
    }
}
