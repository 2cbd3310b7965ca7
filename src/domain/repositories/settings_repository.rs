// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan_settings::ScanSettings;
use crate::domain::repositories::storage_repository::StorageError;
use async_trait::async_trait;

/// 设置仓库特质
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// 读取已保存的设置
    async fn load(&self) -> Result<Option<ScanSettings>, StorageError>;

    /// 覆盖保存设置
    async fn save(&self, settings: &ScanSettings) -> Result<(), StorageError>;

    /// 读取设置，首次运行时写入并返回默认值
    async fn load_or_init(&self) -> Result<ScanSettings, StorageError> {
        match self.load().await? {
            Some(settings) => Ok(settings),
            None => {
                let defaults = ScanSettings::default();
                self.save(&defaults).await?;
                Ok(defaults)
            }
        }
    }
}
