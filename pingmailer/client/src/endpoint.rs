use reqwest::Url;

use crate::error::{Error, Result};

/// Parses an absolute `http`/`https` URL, reporting failures against `field`.
pub(crate) fn parse_http_url(field: &'static str, value: &str) -> Result<Url> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Validation { field, reason: "is empty".to_string() });
    }

    let url = Url::parse(value).map_err(|err| Error::Validation {
        field,
        reason: format!("`{value}` is not a URL, {err}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::Validation {
            field,
            reason: format!("unsupported scheme `{scheme}`, expected `http` or `https`"),
        }),
    }
}

/// Strips trailing slashes so `<base>/<path>` never doubles the separator.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String> {
    let url = parse_http_url("base_url", base_url)?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Joins a service path onto a base URL.
pub(crate) fn service_endpoint(base_url: &str, path: &str) -> Result<Url> {
    let base = normalize_base_url(base_url)?;
    parse_http_url("base_url", &format!("{base}/{}", path.trim_start_matches('/')))
}
