use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::repo_types::Message;
use crate::error::ChatError;
use crate::openai::{ChatCompletion, ChatMessage};
use crate::store::Store;

pub const SYSTEM_PROMPT: &str = "You are a friendly nutrition and wellness assistant. \
Give short, practical advice about food, meals and healthy habits. \
Do not give medical diagnoses; suggest seeing a professional when appropriate.";

pub const APOLOGY: &str = "Sorry, I couldn't get a response right now. Please try again later.";

/// Conversation with the assistant.
///
/// Two lists are kept: what the user sees (`messages`) and what the model
/// is sent (`context`, always headed by the system prompt). When an
/// exchange fails the user sees an apology bubble; the context keeps the
/// user turn but never gets an assistant turn for it.
#[derive(Clone)]
pub struct ChatRepository {
    client: Arc<dyn ChatCompletion>,
    messages: Arc<Store<Vec<Message>>>,
    context: Arc<Store<Vec<ChatMessage>>>,
    // one exchange at a time, so turns never interleave in the context
    exchange: Arc<Mutex<()>>,
}

fn initial_context() -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT)]
}

fn push<T: Clone>(store: &Store<Vec<T>>, item: T) {
    store.update(|cur| {
        let mut next = cur.clone();
        next.push(item);
        (next, ())
    });
}

impl ChatRepository {
    pub fn new(client: Arc<dyn ChatCompletion>) -> Self {
        Self {
            client,
            messages: Arc::new(Store::new(Vec::new())),
            context: Arc::new(Store::new(initial_context())),
            exchange: Arc::new(Mutex::new(())),
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.get()
    }

    pub fn context(&self) -> Vec<ChatMessage> {
        self.context.get()
    }

    /// Sends one user turn and waits for the reply. Concurrent calls queue
    /// up behind each other.
    ///
    /// Cancellation: if the returned future is dropped while the model call
    /// is in flight, the user turn stays in both lists with no reply and no
    /// apology. The caller that dropped it is the one left without an answer.
    pub async fn send_message(&self, text: &str) -> Result<Message, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let _turn = self.exchange.lock().await;

        push(&self.messages, Message::user(text));
        push(&self.context, ChatMessage::user(text));

        let context = self.context.get();
        debug!(turns = context.len(), "sending chat context");

        match self.client.complete(&context).await {
            Ok(reply) => {
                let shown = Message::assistant(reply.content.clone());
                push(&self.messages, shown.clone());
                push(&self.context, ChatMessage::assistant(reply.content));
                Ok(shown)
            }
            Err(e) => {
                warn!(error = %e, "chat exchange failed");
                push(&self.messages, Message::assistant(APOLOGY));
                Err(e)
            }
        }
    }

    /// Drops the conversation and starts over from the system prompt.
    pub async fn clear(&self) {
        let _turn = self.exchange.lock().await;
        self.messages.set(Vec::new());
        self.context.set(initial_context());
        debug!("chat cleared");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;

    use tokio::sync::Notify;
    use tokio::task::JoinHandle;

    use super::*;
    use crate::openai::dto::Role;

    /// Replays canned replies; `None` stands for a failed call.
    struct ScriptedModel {
        replies: StdMutex<VecDeque<Option<&'static str>>>,
        calls: StdMutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Option<&'static str>>) -> Arc<Self> {
            Arc::new(Self {
                replies: StdMutex::new(replies.into()),
                calls: StdMutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ChatCompletion for ScriptedModel {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChatError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            match self.replies.lock().unwrap().pop_front().flatten() {
                Some(text) => Ok(ChatMessage::assistant(text)),
                None => Err(ChatError::EmptyResponse),
            }
        }
    }

    /// Blocks inside `complete` until released; answers `re: <last turn>`.
    #[derive(Default)]
    struct GatedModel {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl ChatCompletion for GatedModel {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChatError> {
            self.entered.notify_one();
            self.release.notified().await;
            let last = messages.last().map(|m| m.content.as_str()).unwrap_or_default();
            Ok(ChatMessage::assistant(format!("re: {last}")))
        }
    }

    fn spawn_send(chat: &ChatRepository, text: &'static str) -> JoinHandle<Result<Message, ChatError>> {
        let chat = chat.clone();
        tokio::spawn(async move { chat.send_message(text).await })
    }

    async fn let_others_run() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn successful_exchange_appends_to_both_lists() {
        let model = ScriptedModel::new(vec![Some("Drink water.")]);
        let chat = ChatRepository::new(model.clone());

        let reply = chat.send_message("  tips?  ").await.unwrap();
        assert_eq!(reply.content, "Drink water.");
        assert!(!reply.is_user);

        let shown: Vec<_> = chat.messages().into_iter().map(|m| (m.is_user, m.content)).collect();
        assert_eq!(
            shown,
            vec![(true, "tips?".to_string()), (false, "Drink water.".to_string())]
        );
        assert_eq!(
            chat.context(),
            vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user("tips?"),
                ChatMessage::assistant("Drink water."),
            ]
        );

        // the request carried the full context up to the user turn
        let calls = model.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 2);
        assert_eq!(calls[0][0].role, Role::System);
    }

    #[tokio::test]
    async fn failed_exchange_shows_apology_but_adds_no_assistant_turn() {
        let model = ScriptedModel::new(vec![None]);
        let chat = ChatRepository::new(model);

        let err = chat.send_message("hello").await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyResponse));

        let shown = chat.messages();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[1].content, APOLOGY);
        assert!(!shown[1].is_user);

        let ctx = chat.context();
        assert_eq!(ctx.len(), 2);
        assert!(ctx.iter().all(|m| m.role != Role::Assistant));
        assert!(ctx.iter().all(|m| m.content != APOLOGY));
    }

    #[tokio::test]
    async fn context_accumulates_across_turns() {
        let model = ScriptedModel::new(vec![Some("one"), None, Some("three")]);
        let chat = ChatRepository::new(model.clone());

        chat.send_message("a").await.unwrap();
        chat.send_message("b").await.unwrap_err();
        chat.send_message("c").await.unwrap();

        assert_eq!(chat.messages().len(), 6);
        // system, a, one, b, c, three
        assert_eq!(chat.context().len(), 6);
        let calls = model.calls.lock().unwrap();
        assert_eq!(calls.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 4, 5]);
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_side_effects() {
        let model = ScriptedModel::new(Vec::new());
        let chat = ChatRepository::new(model.clone());

        assert!(matches!(
            chat.send_message("   ").await.unwrap_err(),
            ChatError::EmptyInput
        ));
        assert!(chat.messages().is_empty());
        assert_eq!(chat.context().len(), 1);
        assert!(model.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_resets_to_system_prompt_only() {
        let model = ScriptedModel::new(vec![Some("hi"), None]);
        let chat = ChatRepository::new(model);
        chat.send_message("x").await.unwrap();
        chat.send_message("y").await.unwrap_err();

        chat.clear().await;

        assert!(chat.messages().is_empty());
        assert_eq!(chat.context(), vec![ChatMessage::system(SYSTEM_PROMPT)]);
    }

    #[tokio::test]
    async fn concurrent_sends_never_interleave() {
        let model = Arc::new(GatedModel::default());
        let chat = ChatRepository::new(model.clone());

        let first = spawn_send(&chat, "u1");
        model.entered.notified().await;
        let second = spawn_send(&chat, "u2");
        let_others_run().await;

        // u2 waits for u1's reply before touching either list
        assert_eq!(
            chat.context(),
            vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user("u1")]
        );
        assert!(!second.is_finished());

        model.release.notify_one();
        assert_eq!(first.await.unwrap().unwrap().content, "re: u1");
        model.entered.notified().await;
        model.release.notify_one();
        assert_eq!(second.await.unwrap().unwrap().content, "re: u2");

        assert_eq!(
            chat.context(),
            vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user("u1"),
                ChatMessage::assistant("re: u1"),
                ChatMessage::user("u2"),
                ChatMessage::assistant("re: u2"),
            ]
        );
        let shown: Vec<_> = chat.messages().into_iter().map(|m| m.content).collect();
        assert_eq!(shown, ["u1", "re: u1", "u2", "re: u2"]);
    }

    #[tokio::test]
    async fn clear_waits_for_in_flight_exchange() {
        let model = Arc::new(GatedModel::default());
        let chat = ChatRepository::new(model.clone());

        let send = spawn_send(&chat, "u1");
        model.entered.notified().await;
        let clearing = tokio::spawn({
            let chat = chat.clone();
            async move { chat.clear().await }
        });
        let_others_run().await;
        assert!(!clearing.is_finished());
        assert_eq!(chat.messages().len(), 1);

        model.release.notify_one();
        send.await.unwrap().unwrap();
        clearing.await.unwrap();

        assert!(chat.messages().is_empty());
        assert_eq!(chat.context(), vec![ChatMessage::system(SYSTEM_PROMPT)]);
    }

    #[tokio::test]
    async fn dropped_send_leaves_unanswered_user_turn() {
        let model = Arc::new(GatedModel::default());
        let chat = ChatRepository::new(model.clone());

        let send = spawn_send(&chat, "u1");
        model.entered.notified().await;
        send.abort();
        assert!(send.await.unwrap_err().is_cancelled());

        let shown = chat.messages();
        assert_eq!(shown.len(), 1);
        assert!(shown[0].is_user);
        assert_eq!(chat.context().len(), 2);

        // the exchange lock went with the dropped future
        chat.clear().await;
        assert_eq!(chat.context(), vec![ChatMessage::system(SYSTEM_PROMPT)]);
    }
}
