pub mod routes;
pub mod store;

pub use routes::{router, AppState, SharedState};
pub use store::RoomStore;
