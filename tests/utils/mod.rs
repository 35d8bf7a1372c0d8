#![allow(dead_code)]

pub mod config;
pub mod launcher;

use intentd::types::intent::IntentUrl;
use std::collections::HashMap;

pub fn intent_with_request(request: &str) -> IntentUrl {
    let mut query = HashMap::new();
    query.insert("request".to_string(), request.to_string());

    IntentUrl::new("/intent", query)
}
