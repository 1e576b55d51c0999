use std::collections::BTreeMap;

use crate::core::prompt::AnswerSource;
use crate::error::PromptError;
use crate::models::endpoint_config::{EndpointConfig, DEFAULT_CONTENT_TYPE, DEFAULT_METHOD};
use crate::models::test_params::{
    TestParameters, DEFAULT_OPTIONS, DEFAULT_QUESTION_TYPE, DEFAULT_TITLE,
};

pub const DEFAULT_NAME: &str = "完美题库";
pub const DEFAULT_HOMEPAGE: &str = "https://currso.com/";
pub const DEFAULT_TYPE: &str = "GM_xmlhttpRequest";
pub const DEFAULT_HANDLER: &str =
    "return (res)=>res.code === 0 ? [undefined, undefined] : [undefined,res.data.data]";

fn or_default(answer: String, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer
    }
}

/// 逐项询问配置，空回答使用默认值；地址没有默认值
pub fn input_config<A: AnswerSource + ?Sized>(
    answers: &mut A,
) -> Result<EndpointConfig, PromptError> {
    println!("\n请手动输入API配置信息:");
    let name = or_default(answers.ask("名称 (如: 完美题库): ")?, DEFAULT_NAME);
    let homepage = or_default(
        answers.ask("主页 (如: https://currso.com/): ")?,
        DEFAULT_HOMEPAGE,
    );
    let url = answers.ask("API地址 (如: http://127.0.0.1:8000/api/query): ")?;
    let method = or_default(answers.ask("请求方法 (GET/POST, 默认GET): ")?, DEFAULT_METHOD);
    let request_type = or_default(answers.ask("类型 (如: GM_xmlhttpRequest): ")?, DEFAULT_TYPE);
    let content_type = or_default(answers.ask("内容类型 (如: json): ")?, DEFAULT_CONTENT_TYPE);
    let handler = or_default(answers.ask("处理函数 (默认值): ")?, DEFAULT_HANDLER);

    println!("\n请输入数据字段 (按回车结束):");
    let mut data_templates = BTreeMap::new();
    loop {
        let key = answers.ask("字段名 (如: title, options, type, api-key): ")?;
        if key.is_empty() {
            break;
        }
        let value = answers.ask(&format!("{} 的值: ", key))?;
        data_templates.insert(key, value);
    }

    Ok(EndpointConfig {
        name: Some(name),
        homepage: Some(homepage),
        url: Some(url),
        method,
        request_type: Some(request_type),
        content_type,
        data_templates,
        handler: Some(handler),
    })
}

/// 询问本次测试的题目、选项、类型和密钥
pub fn input_test_params<A: AnswerSource + ?Sized>(
    answers: &mut A,
) -> Result<TestParameters, PromptError> {
    println!("\n请输入测试参数:");
    let title = or_default(
        answers.ask(&format!("题目 (默认: {}): ", DEFAULT_TITLE))?,
        DEFAULT_TITLE,
    );
    let options = or_default(
        answers.ask(&format!("选项 (默认: {}): ", DEFAULT_OPTIONS))?,
        DEFAULT_OPTIONS,
    );
    let question_type = or_default(
        answers.ask(&format!("题目类型 (默认: {}): ", DEFAULT_QUESTION_TYPE))?,
        DEFAULT_QUESTION_TYPE,
    );
    let api_key = answers.ask("API密钥 (可选): ")?;
    Ok(TestParameters {
        title,
        options,
        question_type,
        api_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::ScriptedAnswers;

    #[test]
    fn empty_answers_use_defaults() {
        let mut answers = ScriptedAnswers::new(["", "", "", "", "", "", "", ""]);
        let config = input_config(&mut answers).unwrap();
        assert_eq!(config.name.as_deref(), Some(DEFAULT_NAME));
        assert_eq!(config.homepage.as_deref(), Some(DEFAULT_HOMEPAGE));
        assert_eq!(config.url.as_deref(), Some(""));
        assert_eq!(config.method, "GET");
        assert_eq!(config.request_type.as_deref(), Some(DEFAULT_TYPE));
        assert_eq!(config.content_type, "json");
        assert_eq!(config.handler.as_deref(), Some(DEFAULT_HANDLER));
        assert!(config.data_templates.is_empty());
        assert_eq!(answers.remaining(), 0);
    }

    #[test]
    fn data_fields_are_collected_until_empty_name() {
        let mut answers = ScriptedAnswers::new([
            "我的题库",
            "",
            "http://127.0.0.1:8000/api/query",
            "POST",
            "",
            "form",
            "",
            "title",
            "${title}",
            "key",
            "生成api-key",
            "title",
            "${title}-${type}",
            "",
        ]);
        let config = input_config(&mut answers).unwrap();
        assert_eq!(config.name.as_deref(), Some("我的题库"));
        assert_eq!(config.base_url(), Some("http://127.0.0.1:8000/api/query"));
        assert_eq!(config.method, "POST");
        assert_eq!(config.content_type, "form");
        assert_eq!(config.data_templates.len(), 2);
        assert_eq!(
            config.data_templates.get("title").map(String::as_str),
            Some("${title}-${type}")
        );
        assert_eq!(
            config.data_templates.get("key").map(String::as_str),
            Some("生成api-key")
        );
    }

    #[test]
    fn closed_input_is_reported() {
        let mut answers = ScriptedAnswers::new(["名称"]);
        assert!(matches!(input_config(&mut answers), Err(PromptError::Closed)));
    }

    #[test]
    fn test_params_defaults() {
        let mut answers = ScriptedAnswers::new(["", "", "", ""]);
        let params = input_test_params(&mut answers).unwrap();
        assert_eq!(
            params,
            TestParameters::new(DEFAULT_TITLE, DEFAULT_OPTIONS, DEFAULT_QUESTION_TYPE, "")
        );

        let mut answers = ScriptedAnswers::new(["1+1=?", "1###2", "单选题", "sk-1"]);
        let params = input_test_params(&mut answers).unwrap();
        assert_eq!(params, TestParameters::new("1+1=?", "1###2", "单选题", "sk-1"));
    }
}
