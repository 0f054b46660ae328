//! diffdeck CLI entry point.
//!
//! Diffs two files, or two directory trees with the concurrent loader.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio_util::sync::CancellationToken;

use diffdeck::domain::{
    ChangeKind, DiffLine, FileDiffRequest, FileDiffResult, LineKind, SplitDiff, ViewMode,
};
use diffdeck::engine::{
    DiffAlgorithm, compute_diff, diff_stats, fold_unchanged_runs, project_split,
};
use diffdeck::infra::config::{EngineConfig, load_config};
use diffdeck::infra::content::DirContentSource;
use diffdeck::infra::language::detect_language;
use diffdeck::infra::loader::DiffLoader;

#[derive(Parser, Debug)]
#[command(name = "diffdeck")]
#[command(version)]
#[command(about = "Line diffs with collapsible sections, for files or directory trees", long_about = None)]
struct Args {
    /// Old file or directory root
    old: PathBuf,

    /// New file or directory root
    new: PathBuf,

    /// Side-by-side output
    #[arg(long)]
    split: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Use Myers instead of the bounded-lookahead walk
    #[arg(long)]
    myers: bool,

    /// Keep long unchanged runs expanded
    #[arg(long)]
    no_fold: bool,

    /// Max concurrent file loads in directory mode
    #[arg(long)]
    jobs: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_config();
    if args.myers {
        config.algorithm = DiffAlgorithm::Myers;
    }
    if let Some(jobs) = args.jobs {
        config.concurrency = jobs;
    }
    if args.no_fold {
        // a run can never exceed this, so nothing folds
        config.collapse_threshold = usize::MAX;
    }

    if args.old.is_dir() && args.new.is_dir() {
        diff_directories(&args, &config).await
    } else if args.old.is_file() && args.new.is_file() {
        diff_files(&args, &config)
    } else {
        bail!(
            "{} and {} must both be files or both be directories",
            args.old.display(),
            args.new.display()
        );
    }
}

fn diff_files(args: &Args, config: &EngineConfig) -> Result<()> {
    let old_text = std::fs::read_to_string(&args.old)
        .with_context(|| format!("reading {}", args.old.display()))?;
    let new_text = std::fs::read_to_string(&args.new)
        .with_context(|| format!("reading {}", args.new.display()))?;

    let lines = compute_diff(&old_text, &new_text, config.algorithm);
    let result = if args.split {
        FileDiffResult::Split(project_split(&lines))
    } else {
        FileDiffResult::Unified(fold_unchanged_runs(lines, &config.fold_options()))
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_result(&args.new.display().to_string(), &result);
    Ok(())
}

async fn diff_directories(args: &Args, config: &EngineConfig) -> Result<()> {
    let requests = collect_requests(&args.old, &args.new)?;
    if requests.is_empty() {
        println!("no files to compare");
        return Ok(());
    }

    let source = DirContentSource::new(&args.old, &args.new);
    let loader = DiffLoader::new(Arc::new(source), config.loader_options());
    let view_mode = if args.split {
        ViewMode::Split
    } else {
        ViewMode::Unified
    };

    let cancel = CancellationToken::new();
    let report = loader
        .load_all(None, &requests, view_mode, &cancel)
        .await
        .context("loading diffs")?;

    if args.json {
        let failures: serde_json::Map<String, serde_json::Value> = report
            .failures
            .iter()
            .map(|(path, err)| (path.clone(), serde_json::Value::String(err.to_string())))
            .collect();
        let output = serde_json::json!({
            "diffs": report.diffs,
            "failures": failures,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    // requests are sorted, so output order is stable
    for request in &requests {
        if let Some(result) = report.diffs.get(&request.file_path) {
            print_result(&request.file_path, result);
        } else if let Some(err) = report.failures.get(&request.file_path) {
            println!("!! {}: {err}", request.file_path);
        }
    }
    Ok(())
}

/// Union of relative file paths under both roots, classified by which side
/// they exist on.
fn collect_requests(old_root: &Path, new_root: &Path) -> Result<Vec<FileDiffRequest>> {
    let old_paths = collect_relative_paths(old_root)?;
    let new_paths = collect_relative_paths(new_root)?;

    let mut requests = Vec::new();
    for path in old_paths.union(&new_paths) {
        let change_kind = match (old_paths.contains(path), new_paths.contains(path)) {
            (true, true) => ChangeKind::Modified,
            (false, true) => ChangeKind::Added,
            (true, false) => ChangeKind::Deleted,
            (false, false) => unreachable!(),
        };
        requests.push(FileDiffRequest::new(path.clone(), change_kind));
    }
    Ok(requests)
}

fn collect_relative_paths(root: &Path) -> Result<BTreeSet<String>> {
    let mut paths = BTreeSet::new();
    for entry in ignore::WalkBuilder::new(root).hidden(false).build() {
        let entry = entry?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            let rel = entry
                .path()
                .strip_prefix(root)
                .with_context(|| format!("walking {}", root.display()))?;
            paths.insert(rel.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(paths)
}

fn print_result(path: &str, result: &FileDiffResult) {
    let language = detect_language(path)
        .map(|l| format!(" [{l}]"))
        .unwrap_or_default();
    match result {
        FileDiffResult::Unified(lines) => {
            let stats = diff_stats(lines);
            println!("=== {path}{language} (+{} -{})", stats.additions, stats.deletions);
            for line in lines {
                print_unified_line(line);
            }
        }
        FileDiffResult::Split(split) => {
            println!("=== {path}{language}");
            print_split(split);
        }
    }
}

fn print_unified_line(line: &DiffLine) {
    if line.is_fold {
        let count = line.folded_count.unwrap_or(0);
        println!("@@ {count} unchanged lines folded @@");
        return;
    }
    let marker = match line.kind {
        LineKind::Added => '+',
        LineKind::Removed => '-',
        LineKind::Unchanged => ' ',
    };
    println!("{marker}{}", line.content);
}

fn print_split(split: &SplitDiff) {
    const WIDTH: usize = 60;
    for (left, right) in split.left.iter().zip(&split.right) {
        let left_text = left.as_ref().map(cell_text).unwrap_or_default();
        let right_text = right.as_ref().map(cell_text).unwrap_or_default();
        println!("{left_text:<WIDTH$} | {right_text}");
    }
}

fn cell_text(line: &DiffLine) -> String {
    if line.is_fold {
        return format!("@@ {} folded @@", line.folded_count.unwrap_or(0));
    }
    let marker = match line.kind {
        LineKind::Added => '+',
        LineKind::Removed => '-',
        LineKind::Unchanged => ' ',
    };
    format!("{marker}{}", line.content)
}
