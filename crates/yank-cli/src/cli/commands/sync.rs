//! `yank sync` – fetch the missing entries of a playlist.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use yank_core::catalog::YtDlpCatalog;
use yank_core::config::YankConfig;
use yank_core::fetch::{DryRunFetcher, Fetcher, YtDlpFetcher};
use yank_core::notify::{notify_completion, NotifySend};
use yank_core::orchestrator::OutcomeStatus;
use yank_core::pipeline::{sync_collection, SyncOptions, SyncResult};

/// Resolved options for one `yank sync` invocation.
#[derive(Debug)]
pub struct SyncArgs {
    pub url: String,
    pub output_root: PathBuf,
    pub jobs: Option<usize>,
    pub notify: bool,
    pub dry_run: bool,
}

pub async fn run_sync(cfg: &YankConfig, args: SyncArgs) -> Result<()> {
    let opts = SyncOptions {
        output_root: args.output_root,
        max_concurrent: args.jobs.unwrap_or(cfg.max_concurrent_fetches),
        dry_run: args.dry_run,
    };
    let source = YtDlpCatalog::new(cfg.tool.program.clone());
    let tool = cfg.tool.clone();
    let dry_run = args.dry_run;

    let result = sync_collection(&source, &args.url, &opts, |dir: &Path| -> Arc<dyn Fetcher> {
        if dry_run {
            Arc::new(DryRunFetcher)
        } else {
            Arc::new(YtDlpFetcher::new(tool, dir))
        }
    })
    .await?;

    print_report(&result, dry_run);

    if args.notify && !dry_run {
        notify_completion(&NotifySend::default(), &result.report);
    }
    Ok(())
}

fn print_report(result: &SyncResult, dry_run: bool) {
    println!("{}", result.target_dir.display());
    let report = &result.report;

    if dry_run {
        let mut pending: Vec<_> = report
            .outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Succeeded)
            .collect();
        pending.sort_by_key(|o| o.index);
        for o in &pending {
            println!("  would download: {}", o.entry.title);
        }
        println!(
            "{} to download, {} already present",
            pending.len(),
            report.count(OutcomeStatus::Skipped)
        );
        return;
    }

    let mut failures: Vec<_> = report.failures().collect();
    failures.sort_by_key(|o| o.index);
    for o in failures {
        println!(
            "  failed: {} ({})",
            o.entry.title,
            o.error.as_deref().unwrap_or("unknown error")
        );
    }
    println!("{}", report.summary());
    tracing::info!("sync finished: {}", report.summary());
}
