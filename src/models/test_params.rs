pub const DEFAULT_TITLE: &str = "中国的首都是哪里?";
pub const DEFAULT_OPTIONS: &str = "北京###上海###广州###深圳";
pub const DEFAULT_QUESTION_TYPE: &str = "选择题";

/// 单次测试请求填入模板的值
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestParameters {
    pub title: String,
    pub options: String,
    pub question_type: String,
    /// 为空时不替换 "生成api-key"
    pub api_key: String,
}

impl TestParameters {
    pub fn new(
        title: impl Into<String>,
        options: impl Into<String>,
        question_type: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        TestParameters {
            title: title.into(),
            options: options.into(),
            question_type: question_type.into(),
            api_key: api_key.into(),
        }
    }
}
