// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：设置、链接、历史和标签页
/// - 仓库接口（repositories）：持久化状态的抽象接口
/// - 服务（services）：链接提取与扫描
///
/// 领域层只依赖于引擎层定义的消息接口，不依赖任何具体实现。
pub mod models;
pub mod repositories;
pub mod services;
