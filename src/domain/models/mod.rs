// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 扫描设置（scan_settings）：用户可配置的扫描选项
/// - 链接（link）：候选链接、检查请求/响应和扫描报告
/// - 历史（history）：扫描历史条目及其裁剪规则
/// - 页面（page）：被扫描的标签页
pub mod history;
pub mod link;
pub mod page;
pub mod scan_settings;
