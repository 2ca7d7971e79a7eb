use crate::database::RecordStore;
use crate::error::{AppError, AppResult};
use crate::models::{AssignmentRecord, CreateDrawRequest, CreateDrawResponse, DrawLink, ResultResponse};
use crate::services::build_records;
use crate::utils::{generate_derangement, validate_draw};
use std::sync::Arc;

#[derive(Clone)]
pub struct DrawService {
    store: Arc<dyn RecordStore>,
    public_url: Option<String>,
}

impl DrawService {
    pub fn new(store: Arc<dyn RecordStore>, public_url: Option<String>) -> Self {
        Self { store, public_url }
    }

    /// Runs a draw
    ///
    /// 1. validate name and participants
    /// 2. derange the participant list
    /// 3. build one record per giver with its own retrieval id
    /// 4. persist the batch (all or nothing)
    /// 5. return one private link per giver
    ///
    /// `origin` is the caller's `Origin` header, used for links when no public
    /// URL is configured.
    pub async fn create_draw(
        &self,
        request: &CreateDrawRequest,
        origin: Option<&str>,
    ) -> AppResult<CreateDrawResponse> {
        let draw = validate_draw(&request.draw_name, &request.participants)?;

        let receivers = {
            let mut rng = rand::thread_rng();
            generate_derangement(&draw.participants, &mut rng)?
        };

        let records = build_records(&draw.draw_name, &draw.participants, &receivers)?;

        self.store.insert_all(&records).await?;

        let draw_id = records
            .first()
            .map(|r| r.draw_id.clone())
            .ok_or_else(|| AppError::InternalError("draw produced no records".into()))?;

        log::info!(
            "Draw {} created with {} participants",
            draw_id,
            records.len()
        );

        let base = self.link_base(origin);
        let links = records
            .iter()
            .map(|r| DrawLink {
                name: r.giver.clone(),
                link: result_link(&base, &r.result_id),
            })
            .collect();

        Ok(CreateDrawResponse { draw_id, links })
    }

    /// Returns the one pairing `result_id` names. Unknown, blank and removed
    /// ids all give the same `NotFound`.
    pub async fn retrieve(&self, result_id: &str) -> AppResult<ResultResponse> {
        let result_id = result_id.trim();
        if result_id.is_empty() {
            return Err(AppError::NotFound);
        }

        let record: AssignmentRecord = self
            .store
            .find_by_result_id(result_id)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(record.into())
    }

    fn link_base(&self, origin: Option<&str>) -> String {
        self.public_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .or(origin)
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or_default()
    }
}

/// `<base>/#result/<id>`, or the bare fragment when there is no base
fn result_link(base: &str, result_id: &str) -> String {
    if base.is_empty() {
        format!("#result/{result_id}")
    } else {
        format!("{base}/#result/{result_id}")
    }
}
