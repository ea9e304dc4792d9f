//! Message domain: the persisted row and its repository.

mod models;
mod repository;

pub use models::Message;
pub use repository::MessageRepository;
