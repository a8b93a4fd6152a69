pub mod auth;
pub mod diff;
pub mod output;
pub mod refs;
pub mod resolve;
pub mod terminal;

use hubref::config::Config;
use hubref::core::HubrefResult;
use hubref::di::{ServiceContainer, SessionGuard};
use hubref::github::GitHubClient;
use hubref::resolver::RepoCoordinates;
use hubref::session::{KeyringSession, TokenSource};
use std::io::IsTerminal;
use std::sync::Arc;
use terminal::{SpinnerBusy, TerminalNotifier};

/// Wire the real config, HTTP client, session guard and terminal UI
pub fn container() -> HubrefResult<ServiceContainer> {
    let config = Config::load()?;
    let source = TokenSource::select(config.token.clone(), KeyringSession::stored_token);

    let session: Arc<dyn SessionGuard> = source.session();
    let github = GitHubClient::new(&config, source.token())?;
    let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();

    Ok(ServiceContainer::with_providers(
        Arc::new(config),
        Arc::new(github),
        session,
        Arc::new(SpinnerBusy::new()),
        Arc::new(TerminalNotifier::new(interactive)),
    ))
}

/// clap value parser for `owner/repo`
pub fn parse_repo(value: &str) -> Result<RepoCoordinates, String> {
    RepoCoordinates::parse(value).ok_or_else(|| format!("expected owner/repo, got '{}'", value))
}

/// Accept fragments with or without the leading `#`
pub fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}
