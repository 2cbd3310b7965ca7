// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 指标（metrics）：扫描计数指标
/// - 仓库实现（repositories）：设置和历史仓库的具体实现
/// - 存储（storage）：本地文件和内存键值存储
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod metrics;
pub mod repositories;
pub mod storage;
