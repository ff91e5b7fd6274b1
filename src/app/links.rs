//! Hypermedia links embedded in responses.

use serde::Serialize;

use crate::app::config::Config;

/// A `{rel, href}` pair pointing at a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    /// Link to `path` (which must start with `/`) under the configured base URL.
    pub fn new(config: &Config, rel: &str, path: &str) -> Self {
        Self {
            rel: rel.to_string(),
            href: format!("{}{}", config.app_url_base(), path),
        }
    }

    pub fn self_link(config: &Config, path: &str) -> Self {
        Self::new(config, "self", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_is_absolute() {
        let config = Config::for_tests();
        let link = Link::self_link(&config, "/project/01ABC");
        assert_eq!(link.rel, "self");
        assert_eq!(link.href, "http://localhost:3000/project/01ABC");
    }
}
