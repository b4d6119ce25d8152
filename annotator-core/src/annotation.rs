use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("The phoneme sequence is empty or invalid.")]
    EmptySequence,
    #[error("no annotation with id {0}")]
    UnknownId(String),
    #[error("index {index} is out of range for {len} annotations")]
    OutOfRange { index: usize, len: usize },
    #[error("phoneme text must not be blank")]
    BlankPhoneme,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeStatus {
    #[default]
    Pending,
    Correct,
    Deleted,
    Substituted,
    Inserted,
}

impl PhonemeStatus {
    pub const ALL: [PhonemeStatus; 5] = [
        PhonemeStatus::Pending,
        PhonemeStatus::Correct,
        PhonemeStatus::Deleted,
        PhonemeStatus::Substituted,
        PhonemeStatus::Inserted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PhonemeStatus::Pending => "Pending",
            PhonemeStatus::Correct => "Correct",
            PhonemeStatus::Deleted => "Deleted",
            PhonemeStatus::Substituted => "Substituted",
            PhonemeStatus::Inserted => "Inserted",
        }
    }

    /// Wire name, also used for CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            PhonemeStatus::Pending => "pending",
            PhonemeStatus::Correct => "correct",
            PhonemeStatus::Deleted => "deleted",
            PhonemeStatus::Substituted => "substituted",
            PhonemeStatus::Inserted => "inserted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonemeAnnotation {
    pub id: String,
    pub text: String,
    pub status: PhonemeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution_text: Option<String>,
}

impl PhonemeAnnotation {
    pub fn new(text: impl Into<String>, status: PhonemeStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            status,
            substitution_text: None,
        }
    }
}

/// Split a reference sequence on whitespace, dropping empty tokens.
pub fn parse_phoneme_sequence(text: &str) -> Result<Vec<String>, AnnotationError> {
    let phonemes: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if phonemes.is_empty() {
        return Err(AnnotationError::EmptySequence);
    }
    Ok(phonemes)
}

/// Per-status counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub pending: usize,
    pub correct: usize,
    pub deleted: usize,
    pub substituted: usize,
    pub inserted: usize,
}

impl StatusTally {
    /// Annotations that are no longer pending.
    pub fn reviewed(&self) -> usize {
        self.correct + self.deleted + self.substituted + self.inserted
    }

    pub fn total(&self) -> usize {
        self.pending + self.reviewed()
    }
}

/// Ordered phoneme annotations for the loaded recording.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotationStore {
    items: Vec<PhonemeAnnotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// One pending annotation per phoneme of `text`.
    pub fn from_sequence(text: &str) -> Result<Self, AnnotationError> {
        let items = parse_phoneme_sequence(text)?
            .into_iter()
            .map(|p| PhonemeAnnotation::new(p, PhonemeStatus::Pending))
            .collect();
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[PhonemeAnnotation] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&PhonemeAnnotation> {
        self.items.iter().find(|a| a.id == id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Set the status of `id`. The substitution text is kept only for
    /// `Substituted`, and a blank one is dropped.
    pub fn update(
        &mut self,
        id: &str,
        status: PhonemeStatus,
        substitution: Option<&str>,
    ) -> Result<(), AnnotationError> {
        let anno = self
            .items
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AnnotationError::UnknownId(id.to_string()))?;
        anno.status = status;
        anno.substitution_text = match status {
            PhonemeStatus::Substituted => substitution
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            _ => None,
        };
        Ok(())
    }

    /// Insert a phoneme heard in the recording but absent from the reference.
    /// `index` past the end appends. Returns the new annotation's id.
    pub fn insert(&mut self, text: &str, index: usize) -> Result<String, AnnotationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnnotationError::BlankPhoneme);
        }
        // Marked Inserted rather than Pending so the export records that it
        // was not part of the reference sequence.
        let anno = PhonemeAnnotation::new(text, PhonemeStatus::Inserted);
        let id = anno.id.clone();
        let index = index.min(self.items.len());
        self.items.insert(index, anno);
        Ok(id)
    }

    pub fn remove(&mut self, index: usize) -> Result<PhonemeAnnotation, AnnotationError> {
        if index >= self.items.len() {
            return Err(AnnotationError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn tally(&self) -> StatusTally {
        let mut t = StatusTally::default();
        for a in &self.items {
            match a.status {
                PhonemeStatus::Pending => t.pending += 1,
                PhonemeStatus::Correct => t.correct += 1,
                PhonemeStatus::Deleted => t.deleted += 1,
                PhonemeStatus::Substituted => t.substituted += 1,
                PhonemeStatus::Inserted => t.inserted += 1,
            }
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(store: &AnnotationStore) -> Vec<&str> {
        store.items().iter().map(|a| a.text.as_str()).collect()
    }

    #[test]
    fn test_parse_splits_on_any_whitespace() {
        let p = parse_phoneme_sequence("  HH  AH\tL\nOW ").unwrap();
        assert_eq!(p, vec!["HH", "AH", "L", "OW"]);
        assert_eq!(parse_phoneme_sequence(" \n\t "), Err(AnnotationError::EmptySequence));
    }

    #[test]
    fn test_from_sequence_starts_pending_with_unique_ids() {
        let store = AnnotationStore::from_sequence("P AE T").unwrap();
        assert_eq!(texts(&store), vec!["P", "AE", "T"]);
        assert!(store.items().iter().all(|a| a.status == PhonemeStatus::Pending));
        let ids: std::collections::HashSet<_> = store.items().iter().map(|a| &a.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_update_substitution_only_when_substituted() {
        let mut store = AnnotationStore::from_sequence("P AE T").unwrap();
        let id = store.items()[1].id.clone();

        store.update(&id, PhonemeStatus::Substituted, Some(" EH ")).unwrap();
        assert_eq!(store.get(&id).unwrap().substitution_text.as_deref(), Some("EH"));

        store.update(&id, PhonemeStatus::Correct, Some("EH")).unwrap();
        let a = store.get(&id).unwrap();
        assert_eq!(a.status, PhonemeStatus::Correct);
        assert_eq!(a.substitution_text, None);

        store.update(&id, PhonemeStatus::Substituted, Some("  ")).unwrap();
        assert_eq!(store.get(&id).unwrap().substitution_text, None);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = AnnotationStore::from_sequence("P").unwrap();
        assert_eq!(
            store.update("nope", PhonemeStatus::Deleted, None),
            Err(AnnotationError::UnknownId("nope".into()))
        );
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut store = AnnotationStore::from_sequence("P T").unwrap();
        let id = store.insert("AE", 1).unwrap();
        store.insert("S", 99).unwrap();
        assert_eq!(texts(&store), vec!["P", "AE", "T", "S"]);
        assert_eq!(store.get(&id).unwrap().status, PhonemeStatus::Inserted);
        assert_eq!(store.insert("   ", 0), Err(AnnotationError::BlankPhoneme));
    }

    #[test]
    fn test_remove_by_index() {
        let mut store = AnnotationStore::from_sequence("P AE T").unwrap();
        let removed = store.remove(0).unwrap();
        assert_eq!(removed.text, "P");
        assert_eq!(texts(&store), vec!["AE", "T"]);
        assert_eq!(store.remove(2), Err(AnnotationError::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_tally() {
        let mut store = AnnotationStore::from_sequence("P AE T").unwrap();
        let ids: Vec<String> = store.items().iter().map(|a| a.id.clone()).collect();
        store.update(&ids[0], PhonemeStatus::Correct, None).unwrap();
        store.update(&ids[1], PhonemeStatus::Deleted, None).unwrap();
        store.insert("S", 3).unwrap();
        let t = store.tally();
        assert_eq!((t.pending, t.correct, t.deleted, t.inserted), (1, 1, 1, 1));
        assert_eq!(t.reviewed(), 3);
        assert_eq!(t.total(), 4);
    }
}
