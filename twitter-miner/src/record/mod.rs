mod tweet;
mod user;

pub use tweet::Tweet;
pub use twitter_miner_common::{ExportMapping, Record};
pub use user::User;
