// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 命令行参数定义和终端呈现实现
pub mod cli;
pub mod console;
