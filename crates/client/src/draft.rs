//! In-memory draft of one trail being created or edited.
//!
//! Module drafts are edited by position. Every structural change (add,
//! remove) renumbers all drafts, so `order` always equals `index + 1`.

use crate::models::{ModulePayload, Trail, TrailPayload};

/// One editable module. `title` and `content` hold raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDraft {
    pub title: String,
    pub content: String,
    /// 1-based position within the draft.
    pub order: usize,
}

impl ModuleDraft {
    fn blank(order: usize) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            order,
        }
    }
}

/// Which text field of a module draft an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleField {
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Nome da trilha é obrigatório")]
    MissingName,
}

/// The editable state of one trail.
///
/// Always holds at least one module draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailDraft {
    pub name: String,
    pub description: String,
    modules: Vec<ModuleDraft>,
}

impl Default for TrailDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailDraft {
    /// A blank draft with a single empty module.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            modules: vec![ModuleDraft::blank(1)],
        }
    }

    /// Seed a draft from a fetched trail.
    ///
    /// Module order comes from the position in `trail.modules`, not from the
    /// stored `order_num`. A trail without modules gets one blank draft.
    pub fn from_trail(trail: &Trail) -> Self {
        let mut modules: Vec<ModuleDraft> = trail
            .modules
            .iter()
            .enumerate()
            .map(|(i, m)| ModuleDraft {
                title: m.title.clone(),
                content: m.content.clone().unwrap_or_default(),
                order: i + 1,
            })
            .collect();
        if modules.is_empty() {
            modules.push(ModuleDraft::blank(1));
        }

        Self {
            name: trail.name.clone(),
            description: trail.description.clone().unwrap_or_default(),
            modules,
        }
    }

    pub fn modules(&self) -> &[ModuleDraft] {
        &self.modules
    }

    /// Append a blank module draft at the end.
    pub fn add_module(&mut self) {
        self.modules.push(ModuleDraft::blank(self.modules.len() + 1));
        self.renumber();
    }

    /// Remove the module draft at `index`.
    ///
    /// Returns `false` when `index` is out of range or the draft would be
    /// left without modules.
    pub fn remove_module(&mut self, index: usize) -> bool {
        if index >= self.modules.len() || self.modules.len() == 1 {
            return false;
        }
        self.modules.remove(index);
        self.renumber();
        true
    }

    /// Set one field of the module draft at `index`.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn update_module(
        &mut self,
        index: usize,
        field: ModuleField,
        value: impl Into<String>,
    ) -> bool {
        let Some(module) = self.modules.get_mut(index) else {
            return false;
        };
        match field {
            ModuleField::Title => module.title = value.into(),
            ModuleField::Content => module.content = value.into(),
        }
        module.order = index + 1;
        true
    }

    /// Build the request body for a save.
    ///
    /// Trims `name` and `description` (a blank description is sent as
    /// `null`). Module drafts with a blank title are dropped; a blank
    /// content is sent as `null`.
    pub fn to_payload(&self) -> Result<TrailPayload, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let modules = self
            .modules
            .iter()
            .filter(|m| !m.title.trim().is_empty())
            .map(|m| ModulePayload {
                title: m.title.trim().to_string(),
                content: non_blank(&m.content),
            })
            .collect();

        Ok(TrailPayload {
            name: name.to_string(),
            description: non_blank(&self.description),
            modules,
        })
    }

    fn renumber(&mut self) {
        for (i, module) in self.modules.iter_mut().enumerate() {
            module.order = i + 1;
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use trails_core::types::Timestamp;

    use super::*;
    use crate::models::Module;

    fn orders(draft: &TrailDraft) -> Vec<usize> {
        draft.modules().iter().map(|m| m.order).collect()
    }

    fn fetched_trail(titles: &[&str]) -> Trail {
        Trail {
            id: 3,
            name: "Math".to_string(),
            description: None,
            created_at: Timestamp::default(),
            modules: titles
                .iter()
                .enumerate()
                .map(|(i, t)| Module {
                    id: 100 + i as i64,
                    title: t.to_string(),
                    content: Some(format!("{t} notes")),
                    // Stored numbering deliberately not matching the position.
                    order_num: (i as i32 + 1) * 10,
                    trail_id: 3,
                })
                .collect(),
        }
    }

    #[test]
    fn new_draft_has_one_blank_module() {
        let draft = TrailDraft::new();
        assert_eq!(draft.modules().len(), 1);
        assert_eq!(draft.modules()[0], ModuleDraft::blank(1));
    }

    #[test]
    fn add_appends_with_next_order() {
        let mut draft = TrailDraft::new();
        draft.add_module();
        draft.add_module();
        assert_eq!(orders(&draft), vec![1, 2, 3]);
    }

    #[test]
    fn remove_renumbers_remaining_modules_immediately() {
        let mut draft = TrailDraft::new();
        draft.add_module();
        draft.add_module();
        draft.update_module(2, ModuleField::Title, "Third");

        assert!(draft.remove_module(0));
        assert_eq!(orders(&draft), vec![1, 2]);
        assert_eq!(draft.modules()[1].title, "Third");
    }

    #[test]
    fn remove_keeps_last_module() {
        let mut draft = TrailDraft::new();
        assert!(!draft.remove_module(0));
        assert_eq!(draft.modules().len(), 1);
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut draft = TrailDraft::new();
        draft.add_module();
        assert!(!draft.remove_module(5));
        assert_eq!(draft.modules().len(), 2);
    }

    #[test]
    fn update_sets_field_and_position() {
        let mut draft = TrailDraft::new();
        assert!(draft.update_module(0, ModuleField::Title, "Algebra"));
        assert!(draft.update_module(0, ModuleField::Content, "Equations"));
        assert!(!draft.update_module(3, ModuleField::Title, "Nowhere"));

        assert_eq!(draft.modules()[0].title, "Algebra");
        assert_eq!(draft.modules()[0].content, "Equations");
        assert_eq!(draft.modules()[0].order, 1);
    }

    #[test]
    fn from_trail_orders_by_position() {
        let draft = TrailDraft::from_trail(&fetched_trail(&["Algebra", "Geometry"]));
        assert_eq!(draft.name, "Math");
        assert_eq!(draft.description, "");
        assert_eq!(orders(&draft), vec![1, 2]);
        assert_eq!(draft.modules()[1].content, "Geometry notes");
    }

    #[test]
    fn from_trail_without_modules_seeds_blank_one() {
        let draft = TrailDraft::from_trail(&fetched_trail(&[]));
        assert_eq!(draft.modules().len(), 1);
        assert!(draft.modules()[0].title.is_empty());
    }

    #[test]
    fn payload_requires_name() {
        let mut draft = TrailDraft::new();
        draft.name = "   ".to_string();
        assert_matches!(draft.to_payload(), Err(DraftError::MissingName));
    }

    #[test]
    fn payload_drops_untitled_modules_and_nulls_blanks() {
        let mut draft = TrailDraft::new();
        draft.name = " Math ".to_string();
        draft.description = "  ".to_string();
        draft.update_module(0, ModuleField::Title, "Algebra");
        draft.add_module();
        draft.update_module(1, ModuleField::Title, "   ");
        draft.update_module(1, ModuleField::Content, "Orphaned content");
        draft.add_module();
        draft.update_module(2, ModuleField::Title, "Geometry");
        draft.update_module(2, ModuleField::Content, "Shapes");

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.name, "Math");
        assert_eq!(payload.description, None);
        assert_eq!(
            payload.modules,
            vec![
                ModulePayload {
                    title: "Algebra".to_string(),
                    content: None,
                },
                ModulePayload {
                    title: "Geometry".to_string(),
                    content: Some("Shapes".to_string()),
                },
            ]
        );
    }
}
