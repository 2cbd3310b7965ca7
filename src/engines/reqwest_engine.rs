// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::HttpSettings;
use crate::domain::models::link::{CheckLinkRequest, LinkStatus};
use crate::engines::traits::LinkChecker;
use async_trait::async_trait;
use std::error::Error as _;
use tracing::debug;

/// 链接状态检查引擎
///
/// 基于reqwest的HEAD请求实现，只关心状态码，不读取响应体
pub struct ReqwestLinkChecker {
    client: reqwest::Client,
}

impl ReqwestLinkChecker {
    /// 使用给定客户端创建检查器
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// 根据HTTP配置构建检查器
    pub fn from_settings(settings: &HttpSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
            .build()?;
        Ok(Self::new(client))
    }
}

/// 展开错误链，得到可读的失败描述
fn describe_error(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl LinkChecker for ReqwestLinkChecker {
    /// 执行HEAD请求
    ///
    /// 超时由计时器控制：到期时放弃请求并返回 `Timeout`
    async fn check_link(&self, request: CheckLinkRequest) -> LinkStatus {
        let send = self.client.head(&request.url).send();

        match tokio::time::timeout(request.timeout, send).await {
            Ok(Ok(response)) => LinkStatus::from_status(request.url, response.status().as_u16()),
            Ok(Err(e)) if e.is_timeout() => LinkStatus::timed_out(request.url),
            Ok(Err(e)) => {
                debug!(url = %request.url, error = %e, "HEAD request failed");
                LinkStatus::failed(request.url, describe_error(&e))
            }
            // Dropping the future aborts the in-flight request
            Err(_) => LinkStatus::timed_out(request.url),
        }
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
