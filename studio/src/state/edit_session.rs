//! Per-scene editing for planning cards.
//!
//! DESIGN
//! ======
//! A card keeps its source scenes untouched and edits a working copy keyed by
//! scene number. At most one scene is open at a time. `discard` restores the
//! working copy from the source, so after a discard the scene is identical to
//! the payload it came from. Nothing is written back to the transcript.

#[cfg(test)]
#[path = "edit_session_test.rs"]
mod edit_session_test;

use std::collections::BTreeMap;

use plans::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("scene {0} does not exist")]
    UnknownScene(u32),
    #[error("scene {0} is not being edited")]
    NotEditing(u32),
}

/// Working copies and edit mode for one card.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneEditor<S: Scene> {
    source: Vec<S>,
    working: BTreeMap<u32, S>,
    editing: Option<u32>,
}

impl<S: Scene> SceneEditor<S> {
    pub fn new(scenes: &[S]) -> Self {
        let working = scenes.iter().map(|s| (s.scene_number(), s.clone())).collect();
        Self { source: scenes.to_vec(), working, editing: None }
    }

    /// Scene currently open for editing.
    #[must_use]
    pub fn editing(&self) -> Option<u32> {
        self.editing
    }

    #[must_use]
    pub fn is_editing(&self, scene_number: u32) -> bool {
        self.editing == Some(scene_number)
    }

    /// Current working copy of a scene.
    #[must_use]
    pub fn working(&self, scene_number: u32) -> Option<&S> {
        self.working.get(&scene_number)
    }

    /// Immutable source scene.
    #[must_use]
    pub fn source(&self, scene_number: u32) -> Option<&S> {
        self.source.iter().find(|s| s.scene_number() == scene_number)
    }

    /// Whether the working copy differs from the source.
    #[must_use]
    pub fn is_dirty(&self, scene_number: u32) -> bool {
        self.working(scene_number) != self.source(scene_number)
    }

    /// Open `scene_number` for editing.
    ///
    /// An open session on another scene is discarded first.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownScene`] for numbers not in the payload.
    pub fn begin(&mut self, scene_number: u32) -> Result<(), EditError> {
        if !self.working.contains_key(&scene_number) {
            return Err(EditError::UnknownScene(scene_number));
        }
        if let Some(open) = self.editing
            && open != scene_number
        {
            self.restore(open);
        }
        self.editing = Some(scene_number);
        Ok(())
    }

    /// Apply a field change to the open scene's working copy.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotEditing`] unless `scene_number` is open.
    pub fn update(&mut self, scene_number: u32, edit: impl FnOnce(&mut S)) -> Result<(), EditError> {
        if !self.is_editing(scene_number) {
            return Err(EditError::NotEditing(scene_number));
        }
        let scene = self
            .working
            .get_mut(&scene_number)
            .ok_or(EditError::UnknownScene(scene_number))?;
        edit(scene);
        Ok(())
    }

    /// Leave edit mode keeping the working copy. Returns the saved scene.
    pub fn commit(&mut self) -> Option<S> {
        let open = self.editing.take()?;
        self.working.get(&open).cloned()
    }

    /// Leave edit mode restoring the working copy from the source.
    /// Returns the number of the discarded scene.
    pub fn discard(&mut self) -> Option<u32> {
        let open = self.editing.take()?;
        self.restore(open);
        Some(open)
    }

    fn restore(&mut self, scene_number: u32) {
        let original = self.source.iter().find(|s| s.scene_number() == scene_number).cloned();
        if let Some(original) = original {
            self.working.insert(scene_number, original);
        }
    }
}
