//! Concurrent scan driver
//!
//! Files are processed on a bounded set of tasks. Each task returns its own
//! results tagged with the file's enumeration index, and the report is
//! assembled after fan-in, so completion order never leaks into the output.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::ScanConfig;
use crate::content::{ContentItem, ContentSet};
use crate::error::{FileError, ScanError};
use crate::file_processor::{process_file, ItemMatches};
use crate::report::{FileResult, ReportMap, ScanReport, SkippedFile};
use crate::scanner::{display_path, scan_markup_files};

type FileOutcome = (usize, Result<Vec<ItemMatches>, FileError>);

/// Scan every markup file under `root` for every content item
///
/// # Errors
///
/// Returns error if the root cannot be enumerated, or in strict mode when a
/// file fails to parse. No partial report is returned in either case.
pub async fn scan(
    root: &Path,
    content: &ContentSet,
    config: &ScanConfig,
) -> Result<ScanReport, ScanError> {
    let root_for_scan = root.to_path_buf();
    let config_for_scan = config.clone();
    let files =
        tokio::task::spawn_blocking(move || scan_markup_files(&root_for_scan, &config_for_scan))
            .await??;

    let outcomes = run_file_tasks(&files, content.to_shared(), config).await?;

    let report = assemble(root, &files, content, outcomes);
    tracing::info!(
        files = report.files_scanned,
        matched_items = report.results.len(),
        skipped = report.skipped.len(),
        "scan complete"
    );

    Ok(report)
}

/// Fan out one task per file, never more than `config.concurrency` at a time
async fn run_file_tasks(
    files: &[PathBuf],
    items: Arc<[ContentItem]>,
    config: &ScanConfig,
) -> Result<Vec<FileOutcome>, ScanError> {
    let highlight = Arc::new(config.highlight());
    let limit = config.concurrency.max(1);

    let mut outcomes = Vec::with_capacity(files.len());
    let mut tasks: JoinSet<FileOutcome> = JoinSet::new();

    for (index, path) in files.iter().enumerate() {
        while tasks.len() >= limit {
            if let Some(joined) = tasks.join_next().await {
                outcomes.push(settle(&mut tasks, joined, config.strict)?);
            }
        }

        let path = path.clone();
        let items = Arc::clone(&items);
        let highlight = Arc::clone(&highlight);

        tasks.spawn(async move { (index, process_file(path, &items, &highlight).await) });
    }

    while let Some(joined) = tasks.join_next().await {
        outcomes.push(settle(&mut tasks, joined, config.strict)?);
    }

    // Completion order is arbitrary; restore enumeration order
    outcomes.sort_unstable_by_key(|(index, _)| *index);
    Ok(outcomes)
}

/// Record a finished task, aborting all others on a fatal outcome
fn settle(
    tasks: &mut JoinSet<FileOutcome>,
    joined: Result<FileOutcome, tokio::task::JoinError>,
    strict: bool,
) -> Result<FileOutcome, ScanError> {
    let (index, outcome) = match joined {
        Ok(done) => done,
        Err(e) => {
            tasks.abort_all();
            return Err(ScanError::Worker(e));
        }
    };

    match outcome {
        Err(FileError::Parse(e)) if strict => {
            tasks.abort_all();
            Err(ScanError::Parse(e))
        }
        outcome => Ok((index, outcome)),
    }
}

/// Merge per-file results into per-item buckets in enumeration order
fn assemble(
    root: &Path,
    files: &[PathBuf],
    content: &ContentSet,
    outcomes: Vec<FileOutcome>,
) -> ScanReport {
    let mut buckets: Vec<Vec<FileResult>> = vec![Vec::new(); content.len()];
    let mut skipped = Vec::new();

    for (index, outcome) in outcomes {
        let file = display_path(root, &files[index]);

        match outcome {
            Ok(matches) => {
                for ItemMatches { item, occurrences } in matches {
                    buckets[item].push(FileResult {
                        file: file.clone(),
                        occurrences,
                    });
                }
            }
            Err(e) => {
                let reason = e.reason();
                tracing::warn!("skipping {file}: {reason}");
                skipped.push(SkippedFile { file, reason });
            }
        }
    }

    let mut results = ReportMap::new();
    for (item, found) in content.iter().zip(buckets) {
        results.push(item.id.clone(), found);
    }

    ScanReport {
        results,
        skipped,
        files_scanned: files.len(),
    }
}
