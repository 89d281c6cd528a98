// Handlers module

pub mod analysis;
pub mod cofact;
pub mod messages;
pub mod rejection;
pub mod session;
pub mod status;

pub use analysis::{analysis_get_handler, analysis_post_handler};
pub use cofact::cofact_check_handler;
pub use messages::{create_message_handler, list_messages_handler};
pub use rejection::{handle_rejection, ApiError};
pub use session::{create_session_handler, get_session_handler, local_session_handler};
pub use status::{db_test_handler, health_handler, root_handler};
