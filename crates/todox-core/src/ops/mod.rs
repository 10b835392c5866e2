pub mod session_store;
pub mod store;

pub use session_store::SessionStore;
pub use store::ListStore;
