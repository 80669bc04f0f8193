//! Editing session state machine.
//!
//! ```text
//!            start_new                 save ok / cancel
//!   Idle ─────────────────▶ Drafting ───────────────────▶ Idle
//!     │      start_edit                save ok / cancel
//!     └───────────────────▶ EditingExisting ────────────▶ Idle
//! ```
//!
//! After every successful mutation the whole trail list is fetched again;
//! there is no incremental cache update. Failures are reported through the
//! [`UserInterface`] and leave the state as it was.

use trails_core::types::DbId;

use crate::api::{TrailsApi, TrailsApiError};
use crate::draft::{DraftError, TrailDraft};
use crate::models::Trail;
use crate::ui::UserInterface;

pub const LOAD_FAILED_ALERT: &str =
    "Erro ao carregar trilhas. Verifique se o backend está rodando.";
pub const SAVE_FAILED_ALERT: &str = "Erro ao salvar trilha";
pub const DELETE_FAILED_ALERT: &str = "Erro ao deletar";
pub const NAME_REQUIRED_ALERT: &str = "Nome da trilha é obrigatório!";
pub const DELETE_CONFIRMATION: &str = "Tem certeza que quer deletar esta trilha?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    /// Browsing the list; no draft open.
    Idle,
    /// Composing a new trail; save creates.
    Drafting(TrailDraft),
    /// Editing a fetched trail; save replaces.
    EditingExisting { trail_id: DbId, draft: TrailDraft },
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("No draft is open")]
    NoDraft,

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Api(#[from] TrailsApiError),
}

/// Holds the loaded trail list and at most one open draft.
pub struct TrailEditor<A, U> {
    api: A,
    ui: U,
    trails: Vec<Trail>,
    loading: bool,
    state: EditorState,
}

impl<A: TrailsApi, U: UserInterface> TrailEditor<A, U> {
    /// A fresh editor. The list is empty and marked loading until the first
    /// [`load_trails`](Self::load_trails) completes.
    pub fn new(api: A, ui: U) -> Self {
        Self {
            api,
            ui,
            trails: Vec::new(),
            loading: true,
            state: EditorState::Idle,
        }
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn draft(&self) -> Option<&TrailDraft> {
        match &self.state {
            EditorState::Idle => None,
            EditorState::Drafting(draft) | EditorState::EditingExisting { draft, .. } => {
                Some(draft)
            }
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TrailDraft> {
        match &mut self.state {
            EditorState::Idle => None,
            EditorState::Drafting(draft) | EditorState::EditingExisting { draft, .. } => {
                Some(draft)
            }
        }
    }

    /// Fetch the full trail list.
    ///
    /// On failure the previous list is kept and the user is alerted.
    /// Returns `true` if the list was refreshed.
    pub async fn load_trails(&mut self) -> bool {
        let result = self.api.list_trails().await;
        self.loading = false;
        match result {
            Ok(trails) => {
                tracing::debug!(count = trails.len(), "Loaded trails");
                self.trails = trails;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load trails");
                self.ui.alert(LOAD_FAILED_ALERT);
                false
            }
        }
    }

    /// Open a blank draft for a new trail.
    ///
    /// Ignored if a draft is already open; the form keeps what was typed.
    pub fn start_new(&mut self) {
        if self.state == EditorState::Idle {
            self.state = EditorState::Drafting(TrailDraft::new());
        }
    }

    /// Open a draft seeded from a loaded trail, replacing any open draft.
    ///
    /// Returns `false` if `trail_id` is not in the loaded list.
    pub fn start_edit(&mut self, trail_id: DbId) -> bool {
        let Some(trail) = self.trails.iter().find(|t| t.id == trail_id) else {
            return false;
        };
        self.state = EditorState::EditingExisting {
            trail_id,
            draft: TrailDraft::from_trail(trail),
        };
        self.ui.scroll_to_top();
        true
    }

    /// Discard the open draft.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Submit the open draft: create when drafting, replace when editing.
    ///
    /// On success the draft is closed and the list reloaded. On failure the
    /// user is alerted and the draft stays open for another attempt.
    pub async fn save(&mut self) -> Result<Trail, EditorError> {
        let (payload, target) = match &self.state {
            EditorState::Idle => return Err(EditorError::NoDraft),
            EditorState::Drafting(draft) => (draft.to_payload(), None),
            EditorState::EditingExisting { trail_id, draft } => {
                (draft.to_payload(), Some(*trail_id))
            }
        };

        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                self.ui.alert(NAME_REQUIRED_ALERT);
                return Err(err.into());
            }
        };

        let result = match target {
            Some(id) => self.api.replace_trail(id, &payload).await,
            None => self.api.create_trail(&payload).await,
        };

        match result {
            Ok(trail) => {
                tracing::info!(trail_id = trail.id, replaced = target.is_some(), "Saved trail");
                self.state = EditorState::Idle;
                self.load_trails().await;
                Ok(trail)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to save trail");
                self.ui.alert(SAVE_FAILED_ALERT);
                Err(err.into())
            }
        }
    }

    /// Delete a trail after the user confirms.
    ///
    /// Returns `Ok(false)` without sending anything if the user declines.
    pub async fn delete(&mut self, trail_id: DbId) -> Result<bool, EditorError> {
        if !self.ui.confirm(DELETE_CONFIRMATION) {
            return Ok(false);
        }

        match self.api.delete_trail(trail_id).await {
            Ok(()) => {
                tracing::info!(trail_id, "Deleted trail");
                self.load_trails().await;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(trail_id, error = %err, "Failed to delete trail");
                self.ui.alert(DELETE_FAILED_ALERT);
                Err(err.into())
            }
        }
    }
}
