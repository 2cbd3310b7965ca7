// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::storage_repository::StorageError;
use crate::engines::traits::PageError;
use thiserror::Error;

/// 编排器错误类型
///
/// 单个链接的失败不会出现在这里，它们被记录在各自的检查结果中
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("No active tab found")]
    NoActiveTab,

    /// 页面上下文不可达，整次扫描被中止
    #[error("Failed to scan page: {0}")]
    ScanFailed(#[from] PageError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] validator::ValidationErrors),

    #[error("History entry {0} does not exist")]
    HistoryIndexOutOfRange(usize),
}
