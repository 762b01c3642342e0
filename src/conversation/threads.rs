use crate::models::{Message, Role, Thread, ThreadPrompt};
use crate::utils::truncate_with_ellipsis;

/// Maximum characters of the first prompt kept as a thread summary
pub const THREAD_SUMMARY_CHARS: usize = 80;

/// Group a session's messages into threads, oldest first
///
/// Non-blank user prompts accumulate until an assistant message closes them into a
/// thread. An assistant message with nothing pending, or a message with any other
/// role, does nothing. Prompts still pending at the end form a final thread with
/// no answer.
pub fn group_threads(messages: &[Message]) -> Vec<Thread> {
    let mut threads = Vec::new();
    let mut pending: Vec<ThreadPrompt> = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        match message.role {
            Role::User => {
                let content = message.content.trim();
                if content.is_empty() {
                    continue;
                }
                pending.push(ThreadPrompt {
                    index,
                    uuid: message.uuid.clone(),
                    content: content.to_string(),
                    timestamp: message.timestamp,
                });
            }
            Role::Assistant if !pending.is_empty() => {
                let id = threads.len();
                threads.push(close_thread(id, std::mem::take(&mut pending)));
            }
            _ => {}
        }
    }

    if !pending.is_empty() {
        let id = threads.len();
        threads.push(close_thread(id, pending));
    }

    threads
}

/// Threads in display order, most recent first
///
/// Ids keep their construction order: the newest thread has the highest id.
pub fn threads_newest_first(messages: &[Message]) -> Vec<Thread> {
    let mut threads = group_threads(messages);
    threads.reverse();
    threads
}

fn close_thread(id: usize, prompts: Vec<ThreadPrompt>) -> Thread {
    // Callers only close non-empty groups
    let first = &prompts[0];
    let last = &prompts[prompts.len() - 1];

    Thread {
        id: format!("thread-{}", id),
        first_index: first.index,
        prompt_count: prompts.len(),
        summary: truncate_with_ellipsis(&first.content, THREAD_SUMMARY_CHARS),
        start_time: first.timestamp,
        end_time: last.timestamp,
        prompts,
    }
}
