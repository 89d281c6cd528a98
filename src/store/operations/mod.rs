pub mod query;
pub mod read;
pub mod write;

pub use query::ping;
pub use read::list_messages;
pub use write::insert_message;
