use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
}

/// 按题库接口约定解析后的响应
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub result: ResultStatus,
    pub data: Value,
}

impl NormalizedResult {
    pub fn success(data: Value) -> Self {
        NormalizedResult {
            result: ResultStatus::Success,
            data,
        }
    }
}
