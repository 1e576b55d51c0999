use serde_json::Value;

/// 响应体，能按JSON解析就保存为JSON，否则保留原文
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    Json(Value),
    Text(String),
}

impl ResponsePayload {
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => ResponsePayload::Json(value),
            Err(_) => ResponsePayload::Text(body),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: ResponsePayload,
}
