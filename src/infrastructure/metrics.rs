// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter};

/// 注册扫描相关指标
///
/// 不安装导出器；嵌入本库的进程可以自行安装 recorder
pub fn init_metrics() {
    describe_counter!("links_checked_total", "Total number of links checked");
    describe_counter!("links_broken_total", "Total number of links found broken");
    describe_counter!(
        "link_check_timeouts_total",
        "Total number of link checks aborted by timeout"
    );
    describe_counter!("scans_total", "Total number of page scans started");
    describe_counter!(
        "scans_failed_total",
        "Total number of page scans aborted because the page was unreachable"
    );
}

pub fn record_link_checked(broken: bool) {
    counter!("links_checked_total").increment(1);
    if broken {
        counter!("links_broken_total").increment(1);
    }
}

pub fn record_timeout() {
    counter!("link_check_timeouts_total").increment(1);
}

pub fn record_scan_started() {
    counter!("scans_total").increment(1);
}

pub fn record_scan_failed() {
    counter!("scans_failed_total").increment(1);
}
