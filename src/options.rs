//! Configuration options for extraction.

use url::Url;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use dugout_extract::Options;
/// use url::Url;
///
/// let options = Options {
///     base_url: Url::parse("https://www.dugout-online.com/").ok(),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Base URL the page was loaded from.
    ///
    /// The club page links its league with a relative href; inside a browser
    /// that href comes back absolutized, but over a detached tree the base
    /// has to be supplied by the caller. When set, the league URL is
    /// resolved against it; when `None`, the href is passed through as-is.
    ///
    /// Default: `None`
    pub base_url: Option<Url>,
}
