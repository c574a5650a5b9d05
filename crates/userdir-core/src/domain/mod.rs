//! Domain entities mirroring the upstream wire format.

mod post;
mod user;

pub use post::Post;
pub use user::{Address, User, UserId};
