use serde::Serialize;

/// Editorial category of a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    News,
    Geopolitical,
    Economic,
    Official,
    Regional,
}

/// An RSS/Atom source polled by the host.
///
/// `tier` ranks sources: lower values are polled and displayed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedDescriptor {
    pub url: &'static str,
    pub name: &'static str,
    pub tier: u8,
    #[serde(rename = "type")]
    pub kind: FeedKind,
    pub region: &'static str,
}

impl FeedDescriptor {
    #[must_use]
    pub fn has_web_scheme(&self) -> bool {
        self.url.starts_with("https://") || self.url.starts_with("http://")
    }
}
