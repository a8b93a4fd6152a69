use super::output::print_target;
use super::strip_hash;
use hubref::core::{HubrefError, HubrefResult};
use hubref::di::ServiceContainer;
use hubref::resolver::{RepoCoordinates, ResolveMode};

pub struct ResolveOptions {
    pub repo: RepoCoordinates,
    pub ref_and_path: String,
    pub fragment: Option<String>,
    pub browse: bool,
    pub initial_page: Option<u32>,
    pub json: bool,
}

impl ResolveOptions {
    fn mode(&self) -> ResolveMode {
        if self.browse {
            ResolveMode::Browse {
                initial_page: self.initial_page,
            }
        } else {
            ResolveMode::FileView {
                fragment: self.fragment.as_deref().map(|f| strip_hash(f).to_string()),
            }
        }
    }
}

pub async fn run(container: &ServiceContainer, options: ResolveOptions) -> HubrefResult<()> {
    let resolver = container.ref_resolver();
    let mode = options.mode();
    let input = options.ref_and_path.as_str();
    let (resolver, repo, mode) = (&resolver, &options.repo, &mode);

    let target = container
        .retryable(
            &format!("Resolving {} in {}", input, repo),
            "Could not resolve the link",
        )
        .run(move || resolver.disambiguate(repo, input, mode))
        .await?;

    match target {
        Some(target) => print_target(&target, options.json),
        None => Err(HubrefError::Application(format!(
            "Nothing in {} matches '{}'",
            repo, input
        ))),
    }
}
