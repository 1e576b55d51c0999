use std::collections::BTreeMap;

use tracing::debug;
use url::form_urlencoded;

use crate::error::BuildError;
use crate::models::endpoint_config::EndpointConfig;
use crate::models::resolved_request::ResolvedRequest;
use crate::models::test_params::TestParameters;

pub const TITLE_TOKEN: &str = "${title}";
pub const OPTIONS_TOKEN: &str = "${options}";
pub const TYPE_TOKEN: &str = "${type}";
/// 题库配置里表示"这里填API密钥"的原文
pub const API_KEY_MARKER: &str = "生成api-key";

/// 把测试值填进模板。纯文本替换，所有出现的位置都会替换，不认识的占位符原样保留。
///
/// 这里插入的是原始值，编码只在拼接查询串时做一次。
pub fn substitute(template: &str, params: &TestParameters) -> String {
    let mut value = template
        .replace(TITLE_TOKEN, &params.title)
        .replace(OPTIONS_TOKEN, &params.options)
        .replace(TYPE_TOKEN, &params.question_type);
    if !params.api_key.is_empty() {
        value = value.replace(API_KEY_MARKER, &params.api_key);
    }
    value
}

/// 根据配置和测试参数构建最终请求
pub fn build(config: &EndpointConfig, params: &TestParameters) -> Result<ResolvedRequest, BuildError> {
    // 没有地址无法构建请求
    let base_url = config.base_url().ok_or(BuildError::MissingUrl)?;

    // 逐个字段替换模板，同名字段后者覆盖前者
    let query: BTreeMap<&str, String> = config
        .data_templates
        .iter()
        .map(|(field, template)| (field.as_str(), substitute(template, params)))
        .collect();

    // 没有数据字段就直接用原地址
    let url = if query.is_empty() {
        base_url.to_string()
    } else {
        let query_string = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter())
            .finish();
        // 原地址已带查询串时用&拼接
        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", base_url, separator, query_string)
    };
    debug!(url = %url, fields = query.len(), "构建请求");

    Ok(ResolvedRequest {
        method: config.method.to_uppercase(),
        url,
        content_type: config.content_type_header(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TestParameters {
        TestParameters::new("中国的首都是哪里?", "北京###上海", "选择题", "")
    }

    fn config(url: &str, data: &[(&str, &str)]) -> EndpointConfig {
        EndpointConfig {
            url: Some(url.to_string()),
            data_templates: data
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..EndpointConfig::default()
        }
    }

    #[test]
    fn template_without_tokens_is_unchanged() {
        let template = "固定值 ${unknown} $title {title}";
        assert_eq!(substitute(template, &params()), template);
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let value = substitute("${title}|${title}|${options}|${type}", &params());
        assert_eq!(value, "中国的首都是哪里?|中国的首都是哪里?|北京###上海|选择题");
    }

    #[test]
    fn api_key_marker_needs_a_key() {
        assert_eq!(substitute("生成api-key", &params()), "生成api-key");

        let mut with_key = params();
        with_key.api_key = "k&1".to_string();
        assert_eq!(substitute("Bearer 生成api-key/生成api-key", &with_key), "Bearer k&1/k&1");
    }

    #[test]
    fn missing_url_fails_regardless_of_fields() {
        let mut cfg = config("", &[("title", "${title}")]);
        assert!(matches!(build(&cfg, &params()), Err(BuildError::MissingUrl)));
        cfg.url = None;
        assert!(matches!(build(&cfg, &params()), Err(BuildError::MissingUrl)));
    }

    #[test]
    fn no_fields_keeps_url() {
        let request = build(&config("http://x/api?a=1", &[]), &params()).unwrap();
        assert_eq!(request.url, "http://x/api?a=1");
    }

    #[test]
    fn query_is_appended_with_question_mark() {
        let request = build(&config("http://x/api", &[("q", "${type}")]), &params()).unwrap();
        assert_eq!(request.url.matches('?').count(), 1);
        assert_eq!(request.url, "http://x/api?q=%E9%80%89%E6%8B%A9%E9%A2%98");
    }

    #[test]
    fn query_is_appended_with_ampersand() {
        let request = build(&config("http://x/api?a=1", &[("q", "x")]), &params()).unwrap();
        assert_eq!(request.url, "http://x/api?a=1&q=x");
        assert_eq!(request.url.matches('&').count(), 1);
        assert_eq!(request.url.matches('?').count(), 1);
    }

    #[test]
    fn values_are_encoded_once() {
        let p = TestParameters::new("a b%", "", "", "k/1");
        let request = build(
            &config("http://x/api", &[("key", "生成api-key"), ("title", "[${title}]")]),
            &p,
        )
        .unwrap();
        assert_eq!(
            request.url,
            "http://x/api?key=k%2F1&title=%5Ba+b%25%5D"
        );
    }

    #[test]
    fn method_and_content_type() {
        let mut cfg = config("http://x/api", &[]);
        cfg.method = "post".to_string();
        cfg.content_type = "form".to_string();
        let request = build(&cfg, &params()).unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.content_type, "application/x-www-form-urlencoded");
    }
}
