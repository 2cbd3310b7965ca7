// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理进程级配置：存储目录、HTTP客户端和扫描并发
pub mod settings;
