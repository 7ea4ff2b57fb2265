pub mod error;
pub mod models;
pub mod store;

pub use error::PersistError;
pub use models::{ChatThread, Message, MessageRole};
pub use store::ThreadStore;
