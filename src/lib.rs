// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 扫描编排器、界面端口和报告生成
pub mod application;

/// 配置模块
///
/// 处理进程级配置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体、链接提取与扫描服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 上下文之间的消息接口，以及基于HTTP的页面和状态检查实现
pub mod engines;

/// 基础设施模块
///
/// 键值存储、仓库实现和指标
pub mod infrastructure;

/// 表示层模块
///
/// 命令行和终端输出
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
