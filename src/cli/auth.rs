use super::terminal::UserInput;
use hubref::core::credentials::GITHUB_TOKEN_KEY;
use hubref::core::{CredentialStore, HubrefError, HubrefResult};

pub fn login(token: Option<String>, input: &dyn UserInput) -> HubrefResult<()> {
    let token = match token {
        Some(token) => token,
        None => {
            println!("GitHub Login");
            println!("Create a personal access token at https://github.com/settings/tokens");
            println!();
            input.prompt_secret("Token")?
        }
    };
    let token = validate_token(&token)?;

    CredentialStore::store(GITHUB_TOKEN_KEY, token)?;

    println!("✓ Token stored securely");
    Ok(())
}

pub fn logout() -> HubrefResult<()> {
    CredentialStore::delete(GITHUB_TOKEN_KEY)?;
    println!("✓ Logged out");
    Ok(())
}

fn validate_token(token: &str) -> HubrefResult<&str> {
    let token = token.trim();
    if token.is_empty() {
        return Err(HubrefError::Credential("Token cannot be empty".to_string()));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(HubrefError::Credential(
            "Token cannot contain whitespace".to_string(),
        ));
    }
    Ok(token)
}
