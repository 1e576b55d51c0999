use serde_json::Value;
use tracing::warn;

use crate::models::http_response::ResponsePayload;
use crate::models::normalized_result::NormalizedResult;

/// 按题库接口的约定解析响应。
///
/// `code == 0` 表示成功但没有数据；其他情况取 `data`，`data` 是对象时再取一层 `data.data`。
/// 非0的code同样记为成功，这是该类接口的约定。
/// 没有响应、空响应或无法解析为JSON的文本都返回 `None`。
pub fn normalize(payload: Option<&ResponsePayload>) -> Option<NormalizedResult> {
    let value = match payload? {
        ResponsePayload::Text(text) => decode(text)?,
        ResponsePayload::Json(value) if is_empty(value) => return None,
        ResponsePayload::Json(Value::String(text)) => decode(text)?,
        ResponsePayload::Json(value) => value.clone(),
    };

    let result = match value {
        Value::Object(mut map) => {
            let code = map.get("code").cloned().unwrap_or(Value::from(-1));
            if is_zero_code(&code) {
                NormalizedResult::success(Value::Null)
            } else {
                match map.remove("data") {
                    Some(Value::Object(mut inner)) => {
                        NormalizedResult::success(inner.remove("data").unwrap_or(Value::Null))
                    }
                    Some(data) => NormalizedResult::success(data),
                    None => NormalizedResult::success(Value::Null),
                }
            }
        }
        other => NormalizedResult::success(other),
    };
    Some(result)
}

fn decode(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "解析响应时出错");
            None
        }
    }
}

/// 没有内容的响应：null、false、0、空字符串、空数组和空对象
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

// false 与 0 比较相等，和接口端的宽松比较保持一致
fn is_zero_code(code: &Value) -> bool {
    match code {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    }
}
