use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ParseError;
use crate::models::endpoint_config::EndpointConfig;

/// 读取配置文件并解析
pub fn load_config(path: &Path) -> Result<EndpointConfig, ParseError> {
    let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "读取配置文件");
    parse_config(&content)
}

/// 解析配置文本，文本可以是单行JSON，也可以是夹在说明文字中的多行JSON
pub fn parse_config(content: &str) -> Result<EndpointConfig, ParseError> {
    let json = extract_json(content);
    // 先解析为Value，重复的键按最后一次出现的值为准
    let value: serde_json::Value =
        serde_json::from_str(&json).map_err(|source| ParseError::JsonDecode { source })?;
    serde_json::from_value(value).map_err(|source| ParseError::JsonDecode { source })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Seeking,
    Capturing,
    Done,
}

/// 从多行文本中取出JSON部分。
///
/// 以 `{` 开头的行开始截取，之后的非空行依次加入，截取到第一个以 `}` 结尾的行为止（包含该行）。
/// 嵌套对象的右括号单独成行时也会结束截取，多个顶层对象同样只取到第一个 `}` 行。
pub(crate) fn extract_json(content: &str) -> String {
    let content = content.trim();
    if !content.contains('\n') {
        return content.to_string();
    }

    let mut state = ScanState::Seeking;
    let mut captured = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        match state {
            ScanState::Seeking => {
                if line.starts_with('{') {
                    captured.push(line);
                    state = if line.ends_with('}') {
                        ScanState::Done
                    } else {
                        ScanState::Capturing
                    };
                }
            }
            ScanState::Capturing => {
                if line.is_empty() {
                    continue;
                }
                captured.push(line);
                if line.ends_with('}') {
                    state = ScanState::Done;
                }
            }
            ScanState::Done => break,
        }
    }
    captured.join(" ")
}
