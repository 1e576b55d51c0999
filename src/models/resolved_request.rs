/// 替换完模板后的最终请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// 已转为大写
    pub method: String,
    pub url: String,
    pub content_type: &'static str,
}
