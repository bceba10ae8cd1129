use super::{DatabaseFormat, detect_format, jsonl, legacy};
use crate::{
    config::StudyConfig,
    error::{Result, StudyError, ValidationError},
    model::{Flashcard, FlashcardPatch, Note, StudySet},
    validation,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// In-memory study sets and notes backed by two flat files.
///
/// Every mutation validates first, then rewrites the whole backing file,
/// and only then replaces the in-memory collection. A failed write leaves
/// both memory and disk as they were.
#[derive(Debug)]
pub struct Store {
    set_path: PathBuf,
    note_path: PathBuf,
    sets: Vec<StudySet>,
    notes: Vec<Note>,
}

impl Store {
    /// An empty store writing to the configured files. Nothing is read.
    pub fn new(config: &StudyConfig, project_root: &Path) -> Self {
        Self::with_paths(
            config.set_file_path(project_root),
            config.note_file_path(project_root),
        )
    }

    pub fn with_paths(set_path: PathBuf, note_path: PathBuf) -> Self {
        Self {
            set_path,
            note_path,
            sets: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Create a store and load both collections from disk.
    pub fn open(config: &StudyConfig, project_root: &Path) -> Result<Self> {
        let mut store = Self::new(config, project_root);
        store.load_sets()?;
        store.load_notes()?;
        Ok(store)
    }

    pub fn set_path(&self) -> &Path {
        &self.set_path
    }

    pub fn note_path(&self) -> &Path {
        &self.note_path
    }

    pub fn sets(&self) -> &[StudySet] {
        &self.sets
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn set(&self, id: u64) -> Result<&StudySet> {
        self.sets
            .iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| StudyError::NotFound(format!("study set {}", id)))
    }

    pub fn note(&self, id: u64) -> Result<&Note> {
        self.notes
            .iter()
            .find(|n| n.id() == id)
            .ok_or_else(|| StudyError::NotFound(format!("note {}", id)))
    }

    fn set_index(&self, id: u64) -> Result<usize> {
        self.sets
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| StudyError::NotFound(format!("study set {}", id)))
    }

    fn note_index(&self, id: u64) -> Result<usize> {
        self.notes
            .iter()
            .position(|n| n.id() == id)
            .ok_or_else(|| StudyError::NotFound(format!("note {}", id)))
    }

    // Loading

    pub fn load_sets(&mut self) -> Result<()> {
        self.sets = match read_database(&self.set_path)? {
            Some((DatabaseFormat::Legacy, content)) => {
                non_empty_legacy(legacy::parse_sets(&content)?, &self.set_path)?
            }
            Some((DatabaseFormat::JsonLines, content)) => jsonl::parse_records(&content)?,
            None => Vec::new(),
        };
        for set in &self.sets {
            set.reserve_ids();
        }
        tracing::debug!(count = self.sets.len(), path = %self.set_path.display(), "Loaded study sets");
        Ok(())
    }

    pub fn load_notes(&mut self) -> Result<()> {
        self.notes = match read_database(&self.note_path)? {
            Some((DatabaseFormat::Legacy, content)) => {
                non_empty_legacy(legacy::parse_notes(&content)?, &self.note_path)?
            }
            Some((DatabaseFormat::JsonLines, content)) => jsonl::parse_records(&content)?,
            None => Vec::new(),
        };
        for note in &self.notes {
            note.reserve_id();
        }
        tracing::debug!(count = self.notes.len(), path = %self.note_path.display(), "Loaded notes");
        Ok(())
    }

    // Saving

    /// Rewrite the set file from memory.
    pub fn update_set_database(&self) -> Result<()> {
        write_database(&self.set_path, &self.sets)
    }

    /// Rewrite the note file from memory.
    pub fn update_note_database(&self) -> Result<()> {
        write_database(&self.note_path, &self.notes)
    }

    fn commit_sets(&mut self, sets: Vec<StudySet>) -> Result<()> {
        write_database(&self.set_path, &sets)?;
        self.sets = sets;
        Ok(())
    }

    fn commit_notes(&mut self, notes: Vec<Note>) -> Result<()> {
        write_database(&self.note_path, &notes)?;
        self.notes = notes;
        Ok(())
    }

    // Study sets

    /// Add a new set. Returns its id.
    pub fn add_set(
        &mut self,
        title: &str,
        description: &str,
        flashcards: Vec<Flashcard>,
    ) -> Result<u64> {
        validation::validate_set(title, &flashcards)?;

        let set = StudySet::new(title, description, flashcards);
        let id = set.id();
        tracing::info!(id, title = %set.title(), cards = set.len(), "Adding study set");

        let mut sets = self.sets.clone();
        sets.push(set);
        self.commit_sets(sets)?;
        Ok(id)
    }

    /// Replace whichever of title, description and cards differ from the
    /// stored set. Editing counts as an access.
    pub fn edit_set(
        &mut self,
        id: u64,
        title: &str,
        description: &str,
        flashcards: Vec<Flashcard>,
    ) -> Result<()> {
        validation::validate_set(title, &flashcards)?;
        let idx = self.set_index(id)?;
        tracing::info!(id, title = %title, "Editing study set");

        let mut sets = self.sets.clone();
        let set = &mut sets[idx];
        if title != set.title() {
            set.update_title(title);
        }
        if description != set.description() {
            set.update_description(description);
        }
        if flashcards.as_slice() != set.flashcards() {
            set.replace_flashcards(flashcards);
        }
        set.update_date_accessed();
        self.commit_sets(sets)
    }

    pub fn delete_set(&mut self, id: u64) -> Result<StudySet> {
        let idx = self.set_index(id)?;
        tracing::info!(id, title = %self.sets[idx].title(), "Deleting study set");

        let mut sets = self.sets.clone();
        let removed = sets.remove(idx);
        self.commit_sets(sets)?;
        Ok(removed)
    }

    /// Apply a partial update to one card of a stored set.
    pub fn update_flashcard(
        &mut self,
        set_id: u64,
        card_id: u64,
        patch: FlashcardPatch,
    ) -> Result<()> {
        let idx = self.set_index(set_id)?;
        tracing::info!(set_id, card_id, "Updating flashcard");

        let mut sets = self.sets.clone();
        if !sets[idx].update_flashcard(card_id, patch) {
            return Err(StudyError::NotFound(format!(
                "flashcard {} in study set {}",
                card_id, set_id
            )));
        }
        self.commit_sets(sets)
    }

    /// Append a new card to a stored set. Returns the card's id.
    pub fn add_flashcard(
        &mut self,
        set_id: u64,
        term: &str,
        definition: &str,
        priority: i32,
    ) -> Result<u64> {
        validation::valid_flashcard(term, definition)?;
        let idx = self.set_index(set_id)?;

        let card = Flashcard::new(term, definition, priority);
        let card_id = card.id();
        tracing::info!(set_id, card_id, term = %term, "Adding flashcard");

        let mut sets = self.sets.clone();
        sets[idx].add_flashcard(card);
        sets[idx].update_date_accessed();
        self.commit_sets(sets)?;
        Ok(card_id)
    }

    /// Remove one card from a stored set. The last card cannot be removed.
    pub fn remove_flashcard(&mut self, set_id: u64, card_id: u64) -> Result<Flashcard> {
        let idx = self.set_index(set_id)?;
        tracing::info!(set_id, card_id, "Removing flashcard");

        let mut sets = self.sets.clone();
        let set = &mut sets[idx];
        if set.flashcard(card_id).is_none() {
            return Err(StudyError::NotFound(format!(
                "flashcard {} in study set {}",
                card_id, set_id
            )));
        }
        if set.len() == 1 {
            return Err(ValidationError::NoFlashcards.into());
        }
        let removed = set.remove_flashcard(card_id).ok_or_else(|| {
            StudyError::NotFound(format!("flashcard {} in study set {}", card_id, set_id))
        })?;
        set.update_date_accessed();
        self.commit_sets(sets)?;
        Ok(removed)
    }

    /// Mark a set as opened for studying or viewing.
    pub fn touch_set(&mut self, id: u64) -> Result<()> {
        let idx = self.set_index(id)?;
        tracing::debug!(id, "Touching study set");

        let mut sets = self.sets.clone();
        sets[idx].update_date_accessed();
        self.commit_sets(sets)
    }

    // Notes

    /// Add a new note. Returns its id.
    pub fn add_note(&mut self, title: &str, description: &str, text: &str) -> Result<u64> {
        validation::validate_title(title)?;

        let note = Note::new(title, description, text);
        let id = note.id();
        tracing::info!(id, title = %note.title(), words = note.word_count(), "Adding note");

        let mut notes = self.notes.clone();
        notes.push(note);
        self.commit_notes(notes)?;
        Ok(id)
    }

    /// Replace whichever of title, description and text differ from the
    /// stored note. The word count only changes with the text. Editing
    /// counts as an access.
    pub fn edit_note(&mut self, id: u64, title: &str, description: &str, text: &str) -> Result<()> {
        validation::validate_title(title)?;
        let idx = self.note_index(id)?;
        tracing::info!(id, title = %title, "Editing note");

        let mut notes = self.notes.clone();
        let note = &mut notes[idx];
        if title != note.title() {
            note.update_title(title);
        }
        if description != note.description() {
            note.update_description(description);
        }
        if text != note.text() {
            note.update_text(text);
        }
        note.update_date_accessed();
        self.commit_notes(notes)
    }

    pub fn delete_note(&mut self, id: u64) -> Result<Note> {
        let idx = self.note_index(id)?;
        tracing::info!(id, title = %self.notes[idx].title(), "Deleting note");

        let mut notes = self.notes.clone();
        let removed = notes.remove(idx);
        self.commit_notes(notes)?;
        Ok(removed)
    }

    /// Mark a note as opened for viewing.
    pub fn touch_note(&mut self, id: u64) -> Result<()> {
        let idx = self.note_index(id)?;
        tracing::debug!(id, "Touching note");

        let mut notes = self.notes.clone();
        notes[idx].update_date_accessed();
        self.commit_notes(notes)
    }

    // Legacy interchange

    /// Append the sets from a legacy-format file. Returns how many were read.
    pub fn import_legacy_sets(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let imported = legacy::parse_sets(&content)?;
        let count = imported.len();
        tracing::info!(count, path = %path.display(), "Importing legacy study sets");

        let mut sets = self.sets.clone();
        sets.extend(imported);
        self.commit_sets(sets)?;
        Ok(count)
    }

    /// Append the notes from a legacy-format file. Returns how many were read.
    pub fn import_legacy_notes(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let imported = legacy::parse_notes(&content)?;
        let count = imported.len();
        tracing::info!(count, path = %path.display(), "Importing legacy notes");

        let mut notes = self.notes.clone();
        notes.extend(imported);
        self.commit_notes(notes)?;
        Ok(count)
    }

    /// Write both collections to `dir` in the legacy format, using the
    /// store's file names. Returns the written paths.
    pub fn export_legacy(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        std::fs::create_dir_all(dir)?;
        let set_target = dir.join(file_name(&self.set_path)?);
        let note_target = dir.join(file_name(&self.note_path)?);

        atomic_write(&set_target, &legacy::render_sets(&self.sets))?;
        atomic_write(&note_target, &legacy::render_notes(&self.notes))?;
        tracing::info!(
            sets = self.sets.len(),
            notes = self.notes.len(),
            dir = %dir.display(),
            "Exported legacy databases"
        );
        Ok((set_target, note_target))
    }
}

/// Apply every field that differs from the card's current value.
///
/// Works on draft cards that are not yet part of a stored set, so nothing
/// is validated or persisted here.
pub fn edit_flashcard(flashcard: &mut Flashcard, term: &str, definition: &str, priority: i32) {
    if term != flashcard.term() {
        flashcard.set_term(term);
    }
    if definition != flashcard.definition() {
        flashcard.set_definition(definition);
    }
    if priority != flashcard.priority() {
        flashcard.set_priority(priority);
    }
}

fn file_name(path: &Path) -> Result<&std::ffi::OsStr> {
    path.file_name()
        .ok_or_else(|| StudyError::Storage(format!("Path has no filename: {}", path.display())))
}

fn read_database(path: &Path) -> Result<Option<(DatabaseFormat, String)>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Database file missing, starting empty");
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(&content);
    if format == DatabaseFormat::Legacy {
        tracing::warn!(
            path = %path.display(),
            "Legacy database format detected, it will be rewritten as JSON lines on the next save"
        );
    }
    Ok(Some((format, content)))
}

/// A file detected as legacy starts with a record header, so reading no
/// records means the header belongs to the other collection. Loading it as
/// empty would let the next save wipe the file.
fn non_empty_legacy<T>(records: Vec<T>, path: &Path) -> Result<Vec<T>> {
    if records.is_empty() {
        return Err(StudyError::Parse(format!(
            "{}: legacy header found but no records could be read",
            path.display()
        )));
    }
    Ok(records)
}

fn write_database<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let content = jsonl::render_records(records)?;
    atomic_write(path, &content)?;
    tracing::debug!(count = records.len(), path = %path.display(), "Wrote database");
    Ok(())
}

/// Atomically write content to a file using temp file + rename.
fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = match target_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(target_dir)?;

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| StudyError::Storage(format!("Failed to create temp file: {}", e)))?;

    use std::io::Write;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| StudyError::Storage(format!("Failed to write to temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| StudyError::Storage(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(target_path)
        .map_err(|e| StudyError::Storage(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}
