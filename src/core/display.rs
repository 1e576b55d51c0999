use prettytable::{format, row, Cell, Row, Table};
use serde_json::Value;

use crate::models::endpoint_config::EndpointConfig;
use crate::models::http_response::{HttpResponse, ResponsePayload};
use crate::models::normalized_result::NormalizedResult;

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

/// 当前配置的可读展示
pub fn render_config(config: &EndpointConfig) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.add_row(row!["字段", "值"]);
    table.add_row(row!["名称", or_na(config.name.as_deref())]);
    table.add_row(row!["主页", or_na(config.homepage.as_deref())]);
    table.add_row(row!["API地址", or_na(config.url.as_deref())]);
    table.add_row(row!["请求方法", config.method]);
    table.add_row(row!["类型", or_na(config.request_type.as_deref())]);
    table.add_row(row!["内容类型", config.content_type]);
    // 数据字段逐行列出，字段名缩进
    table.add_row(row!["数据字段", ""]);
    for (key, template) in &config.data_templates {
        table.add_row(Row::new(vec![
            Cell::new(&format!("  {}", key)),
            Cell::new(template),
        ]));
    }
    table.add_row(row!["处理函数", or_na(config.handler.as_deref())]);
    format!("\n当前API配置:\n{}", table)
}

/// 逐字段序列化为单行JSON，可直接作为配置文件重新加载
pub fn to_config_text(config: &EndpointConfig) -> serde_json::Result<String> {
    serde_json::to_string(config)
}

pub fn render_response(response: &HttpResponse) -> String {
    let mut headers = Table::new();
    headers.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    headers.add_row(row!["响应头", "值"]);
    for (name, value) in &response.headers {
        headers.add_row(row![name, value]);
    }

    let mut lines = vec![
        "✓ 请求成功".to_string(),
        format!("状态码: {}", response.status),
        headers.to_string(),
    ];
    match &response.body {
        ResponsePayload::Json(value) => {
            lines.push("响应数据 (JSON格式):".to_string());
            lines.push(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()));
        }
        ResponsePayload::Text(text) => {
            lines.push("响应数据 (文本格式):".to_string());
            lines.push(text.clone());
        }
    }
    lines.join("\n")
}

pub fn render_normalized(result: &NormalizedResult) -> String {
    match &result.data {
        Value::Null => "\n✓ 响应解析成功: 请求成功".to_string(),
        Value::String(answer) => format!("\n✓ 响应解析成功: {}", answer),
        other => format!("\n✓ 响应解析成功: {}", other),
    }
}
