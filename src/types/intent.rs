use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct IntentUrl {
    pub path: String,
    pub query: HashMap<String, String>,
}

impl IntentUrl {
    pub fn new(path: impl Into<String>, query: HashMap<String, String>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    pub fn request(&self) -> Option<&str> {
        self.query.get("request").map(String::as_str)
    }
}
