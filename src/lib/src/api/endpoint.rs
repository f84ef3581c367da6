use reqwest::Url;

use crate::error::ArchiveError;

/// Joins the API base url and a route, `uri` must start with a slash
pub fn url_from_base(base_url: &str, uri: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), uri)
}

pub fn url_with_params(
    base_url: &str,
    uri: &str,
    params: &[(&str, String)],
) -> Result<String, ArchiveError> {
    let url = url_from_base(base_url, uri);
    if params.is_empty() {
        return Ok(url);
    }
    let url = Url::parse_with_params(&url, params.iter().map(|(k, v)| (*k, v.as_str())))?;
    Ok(url.to_string())
}

/// Path segment escaping for slugs and ids coming from user input
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_base_strips_trailing_slash() {
        assert_eq!(
            url_from_base("http://localhost:5000/api/", "/entries"),
            "http://localhost:5000/api/entries"
        );
    }

    #[test]
    fn test_url_with_params_encodes_values() -> Result<(), ArchiveError> {
        let url = url_with_params(
            "http://localhost:5000/api",
            "/entries",
            &[("search", "sun temple".to_string()), ("page", "2".to_string())],
        )?;
        assert_eq!(
            url,
            "http://localhost:5000/api/entries?search=sun+temple&page=2"
        );
        Ok(())
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("hampi-temple"), "hampi-temple");
    }
}
