//! Turning links into navigation targets

pub mod diff;
pub mod fragment;
pub mod ref_path;
pub mod target;

pub use diff::{CommitDiffSource, DiffSource, DiffTargetResolver, PullRequestDiffSource};
pub use fragment::{parse_line_fragment, path_fingerprint, DiffHighlightId, LineRange};
pub use ref_path::{RefPathResolver, ResolveMode, ResolvedRef};
pub use target::{DiffLines, NavigationTarget, RepoCoordinates};
