// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan_settings::ScanSettings;
use crate::domain::repositories::settings_repository::SettingsRepository;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// 设置记录在存储中的键
pub const SETTINGS_KEY: &str = "settings";

/// 设置仓库实现
///
/// 以JSON快照的形式保存在 `settings` 键下
pub struct SettingsRepositoryImpl {
    storage: Arc<dyn StorageRepository>,
}

impl SettingsRepositoryImpl {
    pub fn new(storage: Arc<dyn StorageRepository>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryImpl {
    async fn load(&self) -> Result<Option<ScanSettings>, StorageError> {
        match self.storage.get(SETTINGS_KEY).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, settings: &ScanSettings) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(settings)?;
        self.storage.save(SETTINGS_KEY, &bytes).await
    }
}
