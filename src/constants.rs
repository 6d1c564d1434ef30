/// Gist creation endpoint
pub const DEFAULT_GIST_API_URL: &str = "https://api.github.com/gists";
pub const GIST_API_URL_ENV: &str = "GISTCLIP_API_URL";
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Credential location, relative to the home directory
pub const SECRET_DIR_NAME: &str = ".secret";
pub const TOKEN_FILE_NAME: &str = "gists";
pub const TOKEN_FILE_ENV: &str = "GISTCLIP_TOKEN_FILE";

/// Substituted when the description is empty or whitespace-only
pub const PLACEHOLDER_DESCRIPTION: &str = "(no description)";

pub const VERSION: &str = env!("GISTCLIP_VERSION");

pub fn user_agent() -> String {
    format!("gistclip/{}", VERSION)
}

/// Get the gist endpoint from environment variable or default
pub fn get_gist_api_url() -> String {
    match std::env::var(GIST_API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_GIST_API_URL.to_string(),
    }
}
