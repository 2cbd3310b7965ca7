// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan_settings::ScanSettingsPatch;
use clap::{Parser, Subcommand};

/// linkscan - find broken links on a web page
#[derive(Parser, Debug)]
#[command(name = "linkscan")]
#[command(version)]
#[command(about = "Scan a page's links, report the broken ones and keep a scan history.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the links of a page
    Scan {
        /// Page to open and scan
        url: String,

        /// Save a CSV report of the broken links
        #[arg(long)]
        report: bool,
    },

    /// Show past scans
    History {
        /// Reopen the entry at this index and scan it again
        #[arg(long)]
        open: Option<usize>,

        /// Save a CSV report after rescanning
        #[arg(long, requires = "open")]
        report: bool,
    },

    /// Delete all past scans
    ClearHistory,

    /// Show settings, or update and save them
    Settings {
        /// Check links pointing to other origins
        #[arg(long)]
        check_external: Option<bool>,

        /// Check links on the page's own origin
        #[arg(long)]
        check_internal: Option<bool>,

        /// Per-link timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Number of past scans to keep
        #[arg(long)]
        history_limit: Option<usize>,
    },
}

impl Commands {
    /// `settings` 子命令携带的修改
    pub fn settings_patch(&self) -> Option<ScanSettingsPatch> {
        match self {
            Commands::Settings {
                check_external,
                check_internal,
                timeout_ms,
                history_limit,
            } => Some(ScanSettingsPatch {
                check_external: *check_external,
                check_internal: *check_internal,
                timeout_ms: *timeout_ms,
                history_limit: *history_limit,
            }),
            _ => None,
        }
    }
}
