pub mod config;
pub mod etl;
pub mod http;
pub mod pipeline;
pub mod record;

#[cfg(test)]
mod testing;

/// Log at `info` unless `RUST_LOG` says otherwise
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
