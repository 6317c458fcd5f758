//! Detail Loader
//!
//! Loads the boss named by `?boss=<id>` and draws it, or an error.

use crate::api::BossApi;
use crate::error::{BossError, BossResult};
use crate::view_model::DetailView;

/// Rendering surface of the detail page
pub trait DetailRenderer {
    fn show_loading(&self);
    /// Replace title, media and info table with this boss
    fn show_boss(&self, view: DetailView);
    /// Clear title and media, replace the info table with one error row
    fn show_error(&self, message: &str);
}

pub struct DetailLoader<A, R> {
    api: A,
    view: R,
}

impl<A: BossApi, R: DetailRenderer> DetailLoader<A, R> {
    pub fn new(api: A, view: R) -> Self {
        Self { api, view }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn view(&self) -> &R {
        &self.view
    }

    /// Fetch and draw one boss. A missing or empty id draws the error
    /// without touching the network.
    pub async fn load(&self, boss_id: Option<&str>) -> BossResult<()> {
        let result = match boss_id.filter(|id| !id.is_empty()) {
            None => Err(BossError::MissingIdentifier),
            Some(id) => {
                self.view.show_loading();
                self.api.fetch_boss(id).await
            }
        };

        match result {
            Ok(boss) => {
                let view = DetailView::from_detail(&boss);
                log::info!("[detail] showing {}", view.title);
                self.view.show_boss(view);
                Ok(())
            }
            Err(err) => {
                log::warn!("[detail] load failed for {:?}: {:?}", boss_id, err);
                self.view.show_error(&err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BossDetail, Drops};
    use crate::testing::{DetailEvent, MockApi, RecordingDetailView};

    fn loader(api: MockApi) -> DetailLoader<MockApi, RecordingDetailView> {
        DetailLoader::new(api, RecordingDetailView::default())
    }

    #[tokio::test]
    async fn test_missing_id_skips_network() {
        let l = loader(MockApi::default());
        assert_eq!(l.load(None).await, Err(BossError::MissingIdentifier));
        assert_eq!(l.load(Some("")).await, Err(BossError::MissingIdentifier));
        assert!(l.api().boss_ids().is_empty());
        assert_eq!(
            l.view().events(),
            vec![
                DetailEvent::Error("missing boss identifier (expected ?boss=...)".to_string()),
                DetailEvent::Error("missing boss identifier (expected ?boss=...)".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_renders_boss() {
        let api = MockApi::default();
        api.push_boss(Ok(BossDetail {
            name: Some("Godrick the Grafted".to_string()),
            region: Some("Limgrave".to_string()),
            drops: Some(Drops::Many(vec!["Remembrance of the Grafted".to_string(), "Runes".to_string()])),
            ..Default::default()
        }));
        let l = loader(api);

        assert_eq!(l.load(Some("17f69")).await, Ok(()));
        assert_eq!(l.api().boss_ids(), vec!["17f69".to_string()]);

        let events = l.view().events();
        assert_eq!(events[0], DetailEvent::Loading);
        match &events[1] {
            DetailEvent::Boss(view) => {
                assert_eq!(view.title, "Godrick the Grafted");
                assert!(view.image.is_none());
                assert_eq!(view.rows[1].value, "Remembrance of the Grafted, Runes");
            }
            other => panic!("expected boss, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_not_found() {
        let api = MockApi::default();
        api.push_boss(Err(BossError::NotFound { status: 404 }));
        let l = loader(api);

        assert_eq!(l.load(Some("nope")).await, Err(BossError::NotFound { status: 404 }));
        assert_eq!(
            l.view().events().last(),
            Some(&DetailEvent::Error("boss not found".to_string()))
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let api = MockApi::default();
        api.push_boss(Err(BossError::malformed("missing `data` field")));
        let l = loader(api);

        assert!(l.load(Some("x")).await.is_err());
        assert_eq!(
            l.view().events().last(),
            Some(&DetailEvent::Error("unexpected response".to_string()))
        );
    }
}
