// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// 默认单个链接检查超时（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
/// 默认历史记录上限
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// 扫描设置
///
/// 用户可见的扫描选项，作为单例持久化在 `settings` 键下。
/// 只能通过编排器的显式保存操作修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScanSettings {
    /// 是否检查外部链接
    pub check_external: bool,
    /// 是否检查内部链接
    pub check_internal: bool,
    /// 单个链接检查超时（毫秒）
    #[validate(range(min = 100, max = 120_000))]
    pub timeout_ms: u64,
    /// 历史记录最大条数
    #[validate(range(min = 1, max = 1000))]
    pub history_limit: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            check_external: true,
            check_internal: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ScanSettings {
    /// 超时时间
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 根据设置判断某类链接是否需要检查
    pub fn should_check(&self, is_external: bool) -> bool {
        if is_external {
            self.check_external
        } else {
            self.check_internal
        }
    }
}

/// 对设置的部分修改
///
/// 未提供的字段保持原值
#[derive(Debug, Clone, Default)]
pub struct ScanSettingsPatch {
    pub check_external: Option<bool>,
    pub check_internal: Option<bool>,
    pub timeout_ms: Option<u64>,
    pub history_limit: Option<usize>,
}

impl ScanSettingsPatch {
    /// 是否没有任何修改
    pub fn is_empty(&self) -> bool {
        self.check_external.is_none()
            && self.check_internal.is_none()
            && self.timeout_ms.is_none()
            && self.history_limit.is_none()
    }

    /// 将修改应用到现有设置上，返回新设置
    pub fn apply(&self, base: &ScanSettings) -> ScanSettings {
        ScanSettings {
            check_external: self.check_external.unwrap_or(base.check_external),
            check_internal: self.check_internal.unwrap_or(base.check_internal),
            timeout_ms: self.timeout_ms.unwrap_or(base.timeout_ms),
            history_limit: self.history_limit.unwrap_or(base.history_limit),
        }
    }
}
