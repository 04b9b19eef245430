//! Typed planning payloads attached to assistant messages.
//!
//! This crate owns the structured "planning card" data shared by the studio
//! UI: task plans, video plans, storyboards and scripts. Payloads arrive as
//! JSON in a `kind`/`data` envelope and are validated on decode so that
//! per-scene working copies can be keyed by scene number.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_payload`] and [`Payload::validate`].
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The raw text is not a well-formed payload envelope.
    #[error("failed to decode plan payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// Two scenes in the same payload share a scene number.
    #[error("duplicate scene number {0}")]
    DuplicateScene(u32),
}

/// A scene that can be edited independently inside a card.
pub trait Scene: Clone + PartialEq {
    /// Stable key of the scene within its payload.
    fn scene_number(&self) -> u32;
}

/// A payload made of numbered scenes.
pub trait SceneSet {
    type Scene: Scene;

    fn scenes(&self) -> &[Self::Scene];
}

// =============================================================
// Task plan
// =============================================================

/// Ordered list of steps the assistant intends to carry out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPlan {
    pub title: String,
    pub steps: Vec<TaskStep>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStep {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substeps: Vec<String>,
    /// `None` when the step does not track completion at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPlan {
    /// Number of steps explicitly marked complete.
    #[must_use]
    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.completed == Some(true)).count()
    }
}

// =============================================================
// Video plan
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlan {
    pub title: String,
    pub total_scenes: u32,
    pub scenes: Vec<VideoScene>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoScene {
    pub scene_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Narration read over the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover: Option<String>,
}

impl Scene for VideoScene {
    fn scene_number(&self) -> u32 {
        self.scene_number
    }
}

impl SceneSet for VideoPlan {
    type Scene = VideoScene;

    fn scenes(&self) -> &[VideoScene] {
        &self.scenes
    }
}

// =============================================================
// Storyboard
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storyboard {
    pub title: String,
    pub total_scenes: u32,
    pub scenes: Vec<StoryboardScene>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardScene {
    pub scene_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Rendered frame; `None` while the frame is still pending generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Scene for StoryboardScene {
    fn scene_number(&self) -> u32 {
        self.scene_number
    }
}

impl SceneSet for Storyboard {
    type Scene = StoryboardScene;

    fn scenes(&self) -> &[StoryboardScene] {
        &self.scenes
    }
}

// =============================================================
// Script
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub title: String,
    pub total_scenes: u32,
    pub scenes: Vec<ScriptScene>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptScene {
    pub scene_number: u32,
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_type: Option<SceneType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dialogue: Vec<DialogueLine>,
}

impl ScriptScene {
    /// Slug line shown above the scene.
    ///
    /// Built from the structured fields once a location is known, so edits to
    /// type/location/time are reflected; otherwise the authored heading.
    #[must_use]
    pub fn display_heading(&self) -> String {
        match self.location.as_deref().map(str::trim) {
            Some(location) if !location.is_empty() => {
                let scene_type = self.scene_type.unwrap_or_default();
                let time = self.time_of_day.unwrap_or_default();
                format!("{} {} - {}", scene_type.label(), location.to_uppercase(), time.label())
            }
            _ => self.heading.clone(),
        }
    }
}

impl Scene for ScriptScene {
    fn scene_number(&self) -> u32 {
        self.scene_number
    }
}

impl SceneSet for Script {
    type Scene = ScriptScene;

    fn scenes(&self) -> &[ScriptScene] {
        &self.scenes
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub character: String,
    pub line: String,
}

/// Interior/exterior marker of a script scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneType {
    #[default]
    Interior,
    Exterior,
}

impl SceneType {
    pub const ALL: [Self; 2] = [Self::Interior, Self::Exterior];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Interior => "INT.",
            Self::Exterior => "EXT.",
        }
    }

    /// Stable identifier used for form `<option>` values.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Exterior => "exterior",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
    Dusk,
    Dawn,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [Self; 5] = [Self::Day, Self::Night, Self::Dusk, Self::Dawn, Self::Evening];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Night => "NIGHT",
            Self::Dusk => "DUSK",
            Self::Dawn => "DAWN",
            Self::Evening => "EVENING",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
            Self::Dusk => "dusk",
            Self::Dawn => "dawn",
            Self::Evening => "evening",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

// =============================================================
// Envelope
// =============================================================

/// Structured payload carried by an assistant message.
///
/// A message carries at most one payload, so the variants are exclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum Payload {
    TaskPlanning(TaskPlan),
    VideoPlanning(VideoPlan),
    Storyboard(Storyboard),
    Script(Script),
}

impl Payload {
    /// Card title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::TaskPlanning(p) => &p.title,
            Self::VideoPlanning(p) => &p.title,
            Self::Storyboard(p) => &p.title,
            Self::Script(p) => &p.title,
        }
    }

    /// Envelope tag, matching the serialized `kind` field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TaskPlanning(_) => "taskPlanning",
            Self::VideoPlanning(_) => "videoPlanning",
            Self::Storyboard(_) => "storyboard",
            Self::Script(_) => "script",
        }
    }

    /// Check structural invariants not expressible in the types.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::DuplicateScene`] when two scenes share a number.
    pub fn validate(&self) -> Result<(), PlanError> {
        match self {
            Self::TaskPlanning(_) => Ok(()),
            Self::VideoPlanning(p) => ensure_unique_scenes(p),
            Self::Storyboard(p) => ensure_unique_scenes(p),
            Self::Script(p) => ensure_unique_scenes(p),
        }
    }
}

fn ensure_unique_scenes<T: SceneSet>(set: &T) -> Result<(), PlanError> {
    let mut seen = HashSet::new();
    for scene in set.scenes() {
        if !seen.insert(scene.scene_number()) {
            return Err(PlanError::DuplicateScene(scene.scene_number()));
        }
    }
    Ok(())
}

/// Decode a single payload envelope from JSON text.
///
/// # Errors
///
/// Returns [`PlanError::Decode`] for malformed JSON or unknown kinds and
/// [`PlanError::DuplicateScene`] for payloads that fail validation.
pub fn decode_payload(raw: &str) -> Result<Payload, PlanError> {
    let payload: Payload = serde_json::from_str(raw)?;
    payload.validate()?;
    Ok(payload)
}

/// Decode a JSON array of payload envelopes.
///
/// # Errors
///
/// Fails on the first malformed or invalid payload.
pub fn decode_payloads(raw: &str) -> Result<Vec<Payload>, PlanError> {
    let payloads: Vec<Payload> = serde_json::from_str(raw)?;
    for payload in &payloads {
        payload.validate()?;
    }
    Ok(payloads)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
