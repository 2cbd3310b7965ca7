// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::link::CheckResult;
use chrono::{DateTime, SecondsFormat, Utc};

/// 报告表头
pub const CSV_HEADER: &str = "URL,Status Code,Type";

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// 生成损坏链接报告
///
/// 每个损坏链接一行：带引号的URL、状态码（无状态码时为 `ERR`）、带引号的类型
pub fn build_csv(links: &[CheckResult]) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + links.len() * 64);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for link in links {
        csv.push_str(&format!(
            "{},{},{}\n",
            quote(&link.url),
            link.status_label(),
            quote(link.type_label())
        ));
    }

    csv
}

/// 报告文件名：`broken-links-<ISO-8601时间，冒号和点替换为连字符>.csv`
pub fn report_filename(at: DateTime<Utc>) -> String {
    let timestamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("broken-links-{}.csv", timestamp)
}
