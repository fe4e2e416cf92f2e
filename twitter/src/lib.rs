mod auth;
mod client;
mod error;
mod response;
mod status;
mod user;

pub use auth::{authenticate, authenticate_with_base_url, Credentials, API_BASE};
pub use client::{TwitterApi, TwitterClient};
pub use error::TwitterError;
pub use status::{RawStatus, StatusAuthor};
pub use user::RawUser;
