use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_CONTENT_TYPE: &str = "json";

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// 一个待测试题库接口的描述，键名与OCS题库配置一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_method", deserialize_with = "method_or_default")]
    pub method: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    #[serde(
        default = "default_content_type",
        deserialize_with = "content_type_or_default"
    )]
    pub content_type: String,
    /// 字段名 -> 模板
    #[serde(rename = "data", default, deserialize_with = "null_as_default")]
    pub data_templates: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

// 显式写成 null 的字段与缺省同样处理
fn method_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_method))
}

fn content_type_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_content_type))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            name: None,
            homepage: None,
            url: None,
            method: default_method(),
            request_type: None,
            content_type: default_content_type(),
            data_templates: BTreeMap::new(),
            handler: None,
        }
    }
}

impl EndpointConfig {
    /// 非空的请求地址
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// 只有 "json" 会发送 application/json，其余都按表单处理
    pub fn content_type_header(&self) -> &'static str {
        if self.content_type == DEFAULT_CONTENT_TYPE {
            JSON_CONTENT_TYPE
        } else {
            FORM_CONTENT_TYPE
        }
    }
}
