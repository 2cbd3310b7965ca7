// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::future::Future;

/// 默认批大小，即同时在途的最大任务数
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// 分批并发执行器
///
/// 将输入切分为固定大小的批次：批内任务并发执行，批与批之间严格串行。
/// 同时在途的任务数不超过 `batch_size`，输出顺序与输入一致。
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    batch_size: usize,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl BatchRunner {
    /// 创建执行器，批大小至少为1
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// 对每个输入运行 `task`
    ///
    /// # 参数
    ///
    /// * `items` - 输入列表
    /// * `task` - 为单个输入构造future的函数
    ///
    /// # 返回值
    ///
    /// 与输入一一对应的输出列表
    pub async fn run<I, T, F, Fut>(&self, items: Vec<I>, mut task: F) -> Vec<T>
    where
        F: FnMut(I) -> Fut,
        Fut: Future<Output = T>,
    {
        let mut results = Vec::with_capacity(items.len());
        let mut items = items.into_iter().peekable();

        while items.peek().is_some() {
            let batch: Vec<Fut> = items.by_ref().take(self.batch_size).map(&mut task).collect();
            results.extend(join_all(batch).await);
        }

        results
    }
}
