//! Views over a loaded session: prompt threads, the chat transcript, and
//! prompt/response lookup

pub mod threads;
pub mod views;

pub use threads::{THREAD_SUMMARY_CHARS, group_threads, threads_newest_first};
pub use views::{chat_messages, find_exchange};
