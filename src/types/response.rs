use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub enum ErrorType {
    NotFound,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Response {
    pub status: u16,
    pub success: bool,
    pub message: String,
    pub error: Option<Error>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Error {
    pub r#type: Option<ErrorType>,
    pub message: String,
}
