use crate::models::{ChatMessage, Exchange, ExchangeMessage, Message, Role};

/// Messages for the chat view: every non-blank message, in file order
pub fn chat_messages(messages: &[Message]) -> Vec<ChatMessage> {
    messages
        .iter()
        .enumerate()
        .filter(|(_, m)| !m.is_blank())
        .map(|(index, m)| ChatMessage {
            index,
            uuid: m.uuid.clone(),
            role: m.role.clone(),
            content: m.content.clone(),
            timestamp: m.timestamp,
        })
        .collect()
}

/// The user prompt at `index` and the first assistant message after it
///
/// Both sides are `None` when `index` is out of range or is not a user message.
pub fn find_exchange(messages: &[Message], index: usize) -> Exchange {
    let Some(prompt) = messages.get(index).filter(|m| m.role == Role::User) else {
        return Exchange::default();
    };

    let response = messages[index + 1..].iter().find(|m| m.role == Role::Assistant);

    Exchange { prompt: Some(exchange_message(prompt)), response: response.map(exchange_message) }
}

fn exchange_message(message: &Message) -> ExchangeMessage {
    ExchangeMessage {
        uuid: message.uuid.clone(),
        content: message.content.clone(),
        timestamp: message.timestamp,
    }
}
