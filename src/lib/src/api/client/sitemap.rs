use crate::api;
use crate::api::client;
use crate::error::ArchiveError;

/// The sitemap XML the server renders
pub async fn get(base_url: &str) -> Result<String, ArchiveError> {
    let url = api::endpoint::url_from_base(base_url, "/sitemap");
    log::debug!("api::client::sitemap::get {}", url);

    let client = client::new()?;
    let res = client.get(&url).send().await?;
    client::parse_json_body(&url, res).await
}
