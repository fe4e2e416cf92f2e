use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
    pub default_account: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8000".to_owned(),
            default_account: "elonmusk".to_owned(),
        }
    }
}

impl ServerConfig {
    pub(super) fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(listen) = lookup("LISTEN") {
            self.listen = listen;
        }
    }
}
