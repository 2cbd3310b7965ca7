// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::history::{push_front_capped, HistoryEntry};
use crate::domain::repositories::history_repository::HistoryRepository;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// 历史记录在存储中的键
pub const HISTORY_KEY: &str = "history";

/// 历史仓库实现
///
/// 整个历史列表作为一个JSON数组保存，每次写入都是完整的读-改-写
pub struct HistoryRepositoryImpl {
    storage: Arc<dyn StorageRepository>,
}

impl HistoryRepositoryImpl {
    pub fn new(storage: Arc<dyn StorageRepository>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl HistoryRepository for HistoryRepositoryImpl {
    async fn list(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        match self.storage.get(HISTORY_KEY).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    async fn prepend(
        &self,
        entry: HistoryEntry,
        limit: usize,
    ) -> Result<Vec<HistoryEntry>, StorageError> {
        let mut history = self.list().await?;
        push_front_capped(&mut history, entry, limit);

        let bytes = serde_json::to_vec(&history)?;
        self.storage.save(HISTORY_KEY, &bytes).await?;
        Ok(history)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.storage.delete(HISTORY_KEY).await
    }
}
