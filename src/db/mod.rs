pub mod lock;
pub mod log;
pub mod store;
pub mod users;
