use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use serde_json::json;
use std::path::PathBuf;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ZERO_SHA: &str = "0000000000000000000000000000000000000000";

// Declare submodules
pub mod diff;
pub mod listing;
pub mod resolve;

/// Test context that provides isolated environment for each test
pub struct TestContext {
    pub temp: TempDir,
    pub hubref_home: PathBuf,
    pub server: MockServer,
}

impl TestContext {
    /// Create a new test context with isolated environment and a mock API
    pub async fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.child("config").to_path_buf();
        std::fs::create_dir_all(&config_dir).unwrap();

        let hubref_home = config_dir.join("hubref");
        std::fs::create_dir_all(&hubref_home).unwrap();

        Self {
            temp,
            hubref_home,
            server: MockServer::start().await,
        }
    }

    /// Create a Command for running hubref against the mock API
    pub fn hubref(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("hubref").unwrap();
        cmd.current_dir(&self.temp);

        // Set platform-specific env vars that dirs crate uses
        let config_dir = self.temp.child("config").to_path_buf();
        if cfg!(target_os = "windows") {
            cmd.env("APPDATA", &config_dir);
            cmd.env("USERPROFILE", self.temp.path());
        } else if cfg!(target_os = "linux") {
            cmd.env("XDG_CONFIG_HOME", &config_dir);
            cmd.env("HOME", self.temp.path());
        } else {
            cmd.env("HOME", self.temp.path());
        }

        // A token from the environment keeps the OS keychain out of the way
        cmd.env("GITHUB_TOKEN", "e2e-token");
        cmd.env("HUBREF_API_URL", self.server.uri());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Serve `names` as successive pages of a ref list (`branches` or `tags`)
    pub async fn mount_ref_pages(&self, list: &str, pages: &[&[&str]]) {
        self.mount_ref_pages_reading(list, pages, pages.len()).await;
    }

    /// Like `mount_ref_pages`, but pages after the first `read` must never be requested
    pub async fn mount_ref_pages_reading(&self, list: &str, pages: &[&[&str]], read: usize) {
        let route = format!("/repos/octo/hello/{}", list);
        let count = pages.len();
        for (index, names) in pages.iter().enumerate() {
            let number = index + 1;
            let body: Vec<_> = names
                .iter()
                .map(|name| json!({ "name": name, "commit": { "sha": ZERO_SHA } }))
                .collect();
            let mut response = ResponseTemplate::new(200).set_body_json(body);
            if number < count {
                let base = format!("{}{}?per_page=100", self.server.uri(), route);
                let link = format!(
                    r#"<{}&page={}>; rel="next", <{}&page={}>; rel="last""#,
                    base,
                    number + 1,
                    base,
                    count
                );
                response = response.insert_header("link", link.as_str());
            }
            Mock::given(method("GET"))
                .and(path(route.as_str()))
                .and(query_param("page", number.to_string().as_str()))
                .respond_with(response)
                .expect(u64::from(number <= read))
                .mount(&self.server)
                .await;
        }
    }

    /// Number of requests the mock API has seen so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
