//! URL construction helpers for the admin API.
//!
//! Resource names are user-supplied, so they are percent-encoded as a single
//! path segment before being appended to a collection route.

use url::Url;

/// Append an API path to the backend origin, keeping any base path prefix.
pub fn build_url(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = base.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}{path}"));
    url
}

/// `{collection}/{name}` with `name` encoded as one segment.
pub fn resource_path(collection: &str, name: &str) -> String {
    format!("{collection}/{}", urlencoding::encode(name))
}

/// `{collection}/{name}/{action}`.
pub fn action_path(collection: &str, name: &str, action: &str) -> String {
    format!("{}/{action}", resource_path(collection, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcphub_core::contracts::{COMMANDS_PATH, SERVERS_PATH};

    #[test]
    fn test_build_url_from_origin() {
        let base = Url::parse("http://127.0.0.1:18888").unwrap();
        let url = build_url(&base, SERVERS_PATH);
        assert_eq!(url.as_str(), "http://127.0.0.1:18888/api/mcp-servers");
    }

    #[test]
    fn test_build_url_keeps_base_prefix() {
        let base = Url::parse("https://gateway.local/admin/").unwrap();
        let url = build_url(&base, COMMANDS_PATH);
        assert_eq!(url.as_str(), "https://gateway.local/admin/api/commands");
    }

    #[test]
    fn test_resource_name_is_one_segment() {
        assert_eq!(
            resource_path(COMMANDS_PATH, "a/b c"),
            "/api/commands/a%2Fb%20c"
        );
        assert_eq!(
            action_path(SERVERS_PATH, "tapd", "toggle"),
            "/api/mcp-servers/tapd/toggle"
        );
    }

    #[test]
    fn test_encoded_segment_survives_url_building() {
        let base = Url::parse("http://127.0.0.1:18888").unwrap();
        let url = build_url(&base, &action_path(SERVERS_PATH, "my server", "test"));
        assert_eq!(url.path(), "/api/mcp-servers/my%20server/test");
    }
}
