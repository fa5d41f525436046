pub mod delete;
pub mod get;
pub mod status;

pub use delete::user_delete;
pub use get::user_get;
pub use status::status_patch;
