pub mod user;

pub use user::{TrybeModule, User};
