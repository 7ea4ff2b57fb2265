mod message;
mod thread;

pub use message::{Message, MessageRole};
pub use thread::ChatThread;
