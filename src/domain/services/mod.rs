// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 链接提取（link_extractor）：从页面文档中提取、规范化、去重和过滤候选链接
/// - 链接扫描（link_scanner）：分批并发检查候选链接并汇总损坏链接
pub mod link_extractor;
pub mod link_scanner;
