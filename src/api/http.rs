//! HTTP implementation of [`BossApi`] over `reqwest` (fetch-backed on wasm32).

use async_trait::async_trait;

use super::response::{boss_from_response, is_success, page_from_response};
use super::{encode_component, BossApi};
use crate::config::AppConfig;
use crate::error::{BossError, BossResult};
use crate::models::{BossDetail, BossPage};
use crate::pagination::PageQuery;

#[derive(Clone)]
pub struct HttpBossApi {
    client: reqwest::Client,
    bosses_url: String,
}

impl HttpBossApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            bosses_url: config.bosses_url(),
        }
    }

    fn boss_url(&self, id: &str) -> String {
        format!("{}/{}", self.bosses_url, encode_component(id))
    }
}

fn transport(err: reqwest::Error) -> BossError {
    BossError::Transport(err.to_string())
}

/// Status and body; the body is only read for 2xx responses
async fn status_and_body(response: reqwest::Response) -> BossResult<(u16, String)> {
    let status = response.status().as_u16();
    if !is_success(status) {
        return Ok((status, String::new()));
    }
    let body = response.text().await.map_err(transport)?;
    Ok((status, body))
}

#[async_trait(?Send)]
impl BossApi for HttpBossApi {
    async fn fetch_page(&self, query: &PageQuery) -> BossResult<BossPage> {
        log::debug!("GET {} {:?}", self.bosses_url, query);
        let response = self
            .client
            .get(&self.bosses_url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        let (status, body) = status_and_body(response).await?;
        page_from_response(status, &body)
    }

    async fn fetch_boss(&self, id: &str) -> BossResult<BossDetail> {
        let url = self.boss_url(id);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(transport)?;

        let (status, body) = status_and_body(response).await?;
        boss_from_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boss_url_encodes_id() {
        let api = HttpBossApi::new(&AppConfig::default());
        assert_eq!(
            api.boss_url("17f6 9d7"),
            "https://eldenring.fanapis.com/api/bosses/17f6%209d7"
        );
    }
}
