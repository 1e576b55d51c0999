use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use tracing::{debug, warn};

use crate::error::TransportError;
use crate::models::http_response::{HttpResponse, ResponsePayload};
use crate::models::resolved_request::ResolvedRequest;

/// 构建http客户端，超时为0时不设超时
pub fn build_client(timeout_secs: u64) -> anyhow::Result<Client> {
    // 构建http客户端
    let client_builder = Client::builder();
    // 如果传入了超时时间，客户端添加超时时间
    let client = if timeout_secs > 0 {
        client_builder
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("构建带超时的http客户端失败")?
    } else {
        client_builder.build().context("构建http客户端失败")?
    };
    Ok(client)
}

/// 发送一次测试请求并读取完整响应
pub async fn send_request(
    client: &Client,
    request: &ResolvedRequest,
) -> Result<HttpResponse, TransportError> {
    // 构建请求方法
    let method = Method::from_bytes(request.method.as_bytes()).map_err(|err| TransportError::Other {
        message: format!("无效的方法 '{}': {}", request.method, err),
    })?;
    debug!(method = %method, url = %request.url, "发送请求");

    // 塞请求头并发送请求
    let response = client
        .request(method, &request.url)
        .header(CONTENT_TYPE, HeaderValue::from_static(request.content_type))
        .send()
        .await
        .map_err(log_transport_error)?;

    // 先获取状态码
    let status = response.status().as_u16();
    // 响应头转为字符串，非UTF-8的值按有损方式转换
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    // 读取完整响应体
    let body = response.text().await.map_err(log_transport_error)?;
    debug!(status, bytes = body.len(), "收到响应");

    // 能解析为JSON就按JSON保存
    Ok(HttpResponse {
        status,
        headers,
        body: ResponsePayload::from_body(body),
    })
}

fn log_transport_error(err: reqwest::Error) -> TransportError {
    warn!(error = %err, "请求失败");
    TransportError::from(err)
}
