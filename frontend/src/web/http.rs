//! HTTP 客户端
//!
//! 基于 `gloo-net` 的 `HttpClient` 实现，供核心库的 `IntakeApi` 使用。

use gloo_net::http::{Method, RequestBuilder};
use letterdesk::request::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};

#[derive(Clone, Copy, Default)]
pub struct GlooHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = match req.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = RequestBuilder::new(&req.url).method(method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| HttpError::RequestBuild(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
