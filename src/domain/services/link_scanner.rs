// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::link::{CandidateLink, CheckLinkRequest, CheckResult, ScanReport};
use crate::engines::traits::LinkChecker;
use crate::infrastructure::metrics;
use crate::utils::batch_runner::BatchRunner;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// 链接扫描服务
///
/// 将候选链接分批交给状态检查器，汇总出损坏链接列表
pub struct LinkScanner {
    /// 状态检查器
    checker: Arc<dyn LinkChecker>,
    /// 并发执行器
    runner: BatchRunner,
}

impl LinkScanner {
    /// 创建新的链接扫描服务实例
    ///
    /// # 参数
    ///
    /// * `checker` - 状态检查器
    /// * `runner` - 控制同时在途请求数的执行器
    pub fn new(checker: Arc<dyn LinkChecker>, runner: BatchRunner) -> Self {
        Self { checker, runner }
    }

    /// 检查所有候选链接，返回与输入顺序一致的结果
    pub async fn check_all(
        &self,
        candidates: Vec<CandidateLink>,
        timeout: Duration,
    ) -> Vec<CheckResult> {
        let checker = &self.checker;

        self.runner
            .run(candidates, |link| async move {
                let status = checker
                    .check_link(CheckLinkRequest {
                        url: link.url.clone(),
                        timeout,
                    })
                    .await;

                if status.is_timeout() {
                    metrics::record_timeout();
                }

                let result = CheckResult::from_status(&link, status);
                debug!(
                    url = %result.url,
                    status = result.status_code,
                    broken = result.broken,
                    checker = checker.name(),
                    "Link checked"
                );
                metrics::record_link_checked(result.broken);
                result
            })
            .await
    }

    /// 扫描候选链接
    ///
    /// # 返回值
    ///
    /// 只包含损坏链接的报告，以及实际检查的链接总数
    pub async fn scan(&self, candidates: Vec<CandidateLink>, timeout: Duration) -> ScanReport {
        let total_checked = candidates.len();
        let broken_links: Vec<CheckResult> = self
            .check_all(candidates, timeout)
            .await
            .into_iter()
            .filter(|result| result.broken)
            .collect();

        info!(
            total_checked,
            broken = broken_links.len(),
            "Link scan finished"
        );

        ScanReport {
            broken_links,
            total_checked,
        }
    }
}
