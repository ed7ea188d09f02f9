//! Assistant session - one linear conversation with a single request in flight.
//!
//! A send appends the user's turn immediately, waits for the backend, and then
//! appends exactly one assistant turn. Backend failures never reach the caller:
//! they become a fixed apology in the conversation. While a request is
//! outstanding further sends are rejected with `AssistantBusy`.

use super::GenerationBackend;
use crate::{
    entities::ConversationTurn,
    errors::{Error, Result},
};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Reply appended when the backend call fails
pub const FALLBACK_REPLY: &str = "Maaf, terjadi kesalahan saat menghubungi asisten AI.";

/// Reply appended when the backend answers with no text
pub const EMPTY_REPLY: &str = "Maaf, saya sedang mengalami kendala teknis.";

/// Clears the busy flag when a send finishes, however it finishes.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// In-memory conversation bound to one backend
pub struct AssistantSession<B> {
    backend: B,
    history: Mutex<Vec<ConversationTurn>>,
    busy: AtomicBool,
}

impl<B: GenerationBackend> AssistantSession<B> {
    /// Starts an empty conversation.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            history: Mutex::new(Vec::new()),
            busy: AtomicBool::new(false),
        }
    }

    /// Whether a message is currently waiting for its reply.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Snapshot of the conversation, oldest turn first.
    pub async fn history(&self) -> Vec<ConversationTurn> {
        self.history.lock().await.clone()
    }

    /// Forgets the conversation, as when the member leaves the assistant screen.
    ///
    /// # Errors
    /// Returns `AssistantBusy` while a reply is pending.
    pub async fn reset(&self) -> Result<()> {
        if self.is_busy() {
            return Err(Error::AssistantBusy);
        }
        self.history.lock().await.clear();
        Ok(())
    }

    /// Sends a message and returns the assistant turn appended in reply.
    ///
    /// # Errors
    /// - `EmptyMessage` if the message is blank; nothing is appended
    /// - `AssistantBusy` if another send is in flight; nothing is appended
    ///
    /// Backend failures are not errors here; they yield [`FALLBACK_REPLY`].
    pub async fn send(&self, message: &str) -> Result<ConversationTurn> {
        if message.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(Error::AssistantBusy);
        }
        let _guard = BusyGuard(&self.busy);

        // The backend gets the turns before this message plus the message itself.
        let prior = {
            let mut history = self.history.lock().await;
            let prior = history.clone();
            history.push(ConversationTurn::user(message));
            prior
        };
        debug!("Sending assistant message with {} prior turns", prior.len());

        let text = match self.backend.generate(&prior, message).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("Assistant backend returned an empty reply");
                EMPTY_REPLY.to_string()
            }
            Ok(text) => text,
            Err(e) => {
                warn!("Assistant backend failed: {e}");
                FALLBACK_REPLY.to_string()
            }
        };

        let reply = ConversationTurn::assistant(text);
        self.history.lock().await.push(reply.clone());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::ConversationRole;
    use std::{collections::VecDeque, sync::Arc};
    use tokio::sync::Notify;

    /// Replies from a script and records what it was asked.
    #[derive(Default)]
    struct ScriptedBackend {
        replies: std::sync::Mutex<VecDeque<Result<String>>>,
        calls: std::sync::Mutex<Vec<(usize, String)>>,
    }

    impl ScriptedBackend {
        fn with(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: std::sync::Mutex::new(replies.into()),
                calls: std::sync::Mutex::default(),
            }
        }
    }

    impl GenerationBackend for ScriptedBackend {
        async fn generate(&self, history: &[ConversationTurn], prompt: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((history.len(), prompt.to_string()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("ok".to_string()))
        }
    }

    /// Holds every request until the gate is opened.
    struct GatedBackend {
        gate: Arc<Notify>,
    }

    impl GenerationBackend for GatedBackend {
        async fn generate(&self, _history: &[ConversationTurn], _prompt: &str) -> Result<String> {
            self.gate.notified().await;
            Ok("Silakan datang ke Bank Sampah Gresik.".to_string())
        }
    }

    fn unavailable() -> Error {
        Error::AssistantUnavailable {
            reason: "connection reset".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_appends_user_and_reply() -> Result<()> {
        let session = AssistantSession::new(ScriptedBackend::with(vec![Ok(
            "Botol plastik bisa dicacah lalu dijual.".to_string(),
        )]));

        let reply = session.send("Bagaimana cara mendaur ulang botol plastik?").await?;
        assert_eq!(reply.role, ConversationRole::Assistant);

        let history = session.history().await;
        assert_eq!(
            history,
            vec![
                ConversationTurn::user("Bagaimana cara mendaur ulang botol plastik?"),
                ConversationTurn::assistant("Botol plastik bisa dicacah lalu dijual."),
            ]
        );
        assert!(!session.is_busy());
        Ok(())
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_fallback_turn() -> Result<()> {
        let session = AssistantSession::new(ScriptedBackend::with(vec![Err(unavailable())]));

        let reply = session.send("Di mana lokasi terdekat?").await?;
        assert_eq!(reply.text, FALLBACK_REPLY);

        let history = session.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], ConversationTurn::user("Di mana lokasi terdekat?"));
        assert_eq!(history[1], ConversationTurn::assistant(FALLBACK_REPLY));
        assert!(!session.is_busy());
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_backend_reply_replaced() -> Result<()> {
        let session = AssistantSession::new(ScriptedBackend::with(vec![Ok("  ".to_string())]));
        let reply = session.send("Halo").await?;
        assert_eq!(reply.text, EMPTY_REPLY);
        Ok(())
    }

    #[tokio::test]
    async fn test_backend_receives_prior_history_and_new_message() -> Result<()> {
        let backend = ScriptedBackend::default();
        let session = AssistantSession::new(backend);

        session.send("Pertama").await?;
        session.send("Kedua").await?;

        let calls = session.backend.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![(0, "Pertama".to_string()), (2, "Kedua".to_string())]
        );
        assert_eq!(session.history().await.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let session = AssistantSession::new(ScriptedBackend::default());
        assert!(matches!(session.send("   ").await, Err(Error::EmptyMessage)));
        assert!(session.history().await.is_empty());
        assert!(session.backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_send_rejected_while_busy() {
        let gate = Arc::new(Notify::new());
        let session = AssistantSession::new(GatedBackend {
            gate: Arc::clone(&gate),
        });

        let (first, second) = tokio::join!(session.send("Di mana lokasi terdekat?"), async {
            tokio::task::yield_now().await;
            assert!(session.is_busy());
            assert!(matches!(session.reset().await, Err(Error::AssistantBusy)));
            let second = session.send("Halo?").await;
            gate.notify_one();
            second
        });

        assert!(matches!(second, Err(Error::AssistantBusy)));
        assert_eq!(first.unwrap().text, "Silakan datang ke Bank Sampah Gresik.");

        let history = session.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].text, "Di mana lokasi terdekat?");
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_reset_clears_history() -> Result<()> {
        let session = AssistantSession::new(ScriptedBackend::default());
        session.send("Halo").await?;
        session.reset().await?;
        assert!(session.history().await.is_empty());
        Ok(())
    }
}
