// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括分批并发执行、错误类型和日志初始化
pub mod batch_runner;
pub mod errors;
pub mod telemetry;
