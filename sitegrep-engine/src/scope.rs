use url::Url;

/// Crawl scope derived once from the seed URL at crawl start and
/// immutable for the duration of the crawl.
#[derive(Debug, Clone)]
pub struct ScopeContext {
    base_domain: String,
    base_scheme: String,
}

impl ScopeContext {
    pub fn from_seed(seed: &Url) -> Self {
        Self {
            base_domain: authority(seed),
            base_scheme: seed.scheme().to_string(),
        }
    }

    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    pub fn base_scheme(&self) -> &str {
        &self.base_scheme
    }

    /// True iff the candidate's authority equals the base domain exactly
    /// or is a subdomain of it. Scheme is not checked. Ports are not
    /// normalized: `upi.edu` and `upi.edu:8080` are distinct authorities.
    pub fn in_scope(&self, candidate: &str) -> bool {
        let Ok(parsed) = Url::parse(candidate) else {
            return false;
        };
        if parsed.host_str().is_none() {
            return false;
        }
        let auth = authority(&parsed);
        auth == self.base_domain || auth.ends_with(&format!(".{}", self.base_domain))
    }
}

fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
