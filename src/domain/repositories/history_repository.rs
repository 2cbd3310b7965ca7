// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::history::HistoryEntry;
use crate::domain::repositories::storage_repository::StorageError;
use async_trait::async_trait;

/// 扫描历史仓库特质
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// 读取全部历史，最近的在前
    async fn list(&self) -> Result<Vec<HistoryEntry>, StorageError>;

    /// 在最前面插入一条记录并裁剪到 `limit` 条，返回保存后的历史
    async fn prepend(
        &self,
        entry: HistoryEntry,
        limit: usize,
    ) -> Result<Vec<HistoryEntry>, StorageError>;

    /// 清空历史
    async fn clear(&self) -> Result<(), StorageError>;
}
