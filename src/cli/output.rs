//! Printing navigation targets

use hubref::core::HubrefResult;
use hubref::resolver::{DiffLines, LineRange, NavigationTarget};

fn line_suffix(range: Option<LineRange>) -> String {
    match range {
        Some(LineRange { start, end: Some(end) }) => format!("#L{}-L{}", start, end),
        Some(LineRange { start, end: None }) => format!("#L{}", start),
        None => String::new(),
    }
}

fn diff_suffix(lines: Option<DiffLines>) -> String {
    let Some(lines) = lines else {
        return String::new();
    };
    let side = if lines.right { 'R' } else { 'L' };
    match lines.end {
        Some(end) => format!(" {}{}-{}{}", side, lines.start, side, end),
        None => format!(" {}{}", side, lines.start),
    }
}

/// One-line, human-readable description of a target
pub fn describe(target: &NavigationTarget) -> String {
    match target {
        NavigationTarget::FileView {
            repo,
            ref_name,
            path,
            highlight,
        } => format!("file {}@{}:{}{}", repo, ref_name, path, line_suffix(*highlight)),
        NavigationTarget::Repository {
            repo,
            ref_name,
            path,
            initial_page,
        } => {
            let mut line = format!("browse {}@{}", repo, ref_name);
            if let Some(path) = path.as_deref().filter(|p| !p.is_empty()) {
                line.push(':');
                line.push_str(path);
            }
            if let Some(page) = initial_page {
                line.push_str(&format!(" (page {})", page));
            }
            line
        }
        NavigationTarget::ImagePreview { repo, sha, path } => {
            format!("image {}@{}:{}", repo, sha, path)
        }
        NavigationTarget::CommitDiff {
            repo,
            sha,
            path,
            highlight,
        } => format!("commit-diff {}@{}:{}{}", repo, sha, path, diff_suffix(*highlight)),
        NavigationTarget::PullRequestDiff {
            repo,
            number,
            sha,
            path,
            highlight,
        } => format!(
            "pull-diff {}#{}@{}:{}{}",
            repo,
            number,
            sha,
            path,
            diff_suffix(*highlight)
        ),
        NavigationTarget::Commit { repo, sha } => format!("commit {}@{}", repo, sha),
        NavigationTarget::PullRequestFiles { repo, number, sha } => {
            format!("pull-files {}#{}@{}", repo, number, sha)
        }
    }
}

pub fn print_target(target: &NavigationTarget, json: bool) -> HubrefResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(target)?);
    } else {
        println!("{}", describe(target));
    }
    Ok(())
}
