use thiserror::Error;
use url::Url;

/// Error returned by `rewrite_path`.
#[derive(Error, Debug)]
pub(crate) enum UrlRewriteError {
    #[error("Page location `{location}` is not a valid URL: {source}")]
    InvalidLocation {
        location: String,
        source: url::ParseError,
    },
    #[error("Stream URL `{url}` cannot be resolved: {source}")]
    InvalidStreamUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Stream URL `{url}` cannot carry a path")]
    CannotBeABase { url: String },
}

/// Resolve `stream_url` and replace its path component by `new_path`, keeping its scheme,
/// host and port.
///
/// `stream_url` is first parsed as an absolute URL. If it is not one, it is resolved against
/// `page_location`.
pub(crate) fn rewrite_path(
    stream_url: &str,
    page_location: &str,
    new_path: &str,
) -> Result<String, UrlRewriteError> {
    let mut parsed = match Url::parse(stream_url) {
        Ok(url) => url,
        Err(_) => {
            let base =
                Url::parse(page_location).map_err(|source| UrlRewriteError::InvalidLocation {
                    location: page_location.to_owned(),
                    source,
                })?;
            base.join(stream_url)
                .map_err(|source| UrlRewriteError::InvalidStreamUrl {
                    url: stream_url.to_owned(),
                    source,
                })?
        }
    };
    if parsed.cannot_be_a_base() {
        return Err(UrlRewriteError::CannotBeABase {
            url: stream_url.to_owned(),
        });
    }
    parsed.set_path(new_path);
    Ok(parsed.into())
}
