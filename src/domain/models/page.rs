// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 标签页
///
/// 编排器眼中的"当前页面"。标签页可以存在但无法扫描（特权页面或加载失败）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: u64,
    pub title: String,
    pub url: String,
}
