// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 包含扫描编排器、界面呈现端口和报告生成
pub mod orchestrator;
pub mod presenter;
pub mod report;
