use flashstudy::config::StudyConfig;
use flashstudy::error::{StudyError, ValidationError};
use flashstudy::model::{Flashcard, FlashcardPatch};
use flashstudy::storage::{DatabaseFormat, Store, detect_format};
use tempfile::TempDir;

const LEGACY_SETS: &str = "Title;Description;Flashcards;DateCreated;DateAccessed
Spanish
Week 3 vocab
FlashcardStart:
perro
dog
1
gato
cat
3
FlashcardEnd:
Tue Apr 08 14:03:22 PDT 2025
Wed Apr 09 09:15:00 PDT 2025

";

const LEGACY_NOTES: &str = "Title;Description;Text;DateCreated;DateAccessed
Lecture 4
Cell biology
TextStart:
Mitochondria are the powerhouse.
TextEnd:
Tue Apr 08 14:03:22 PDT 2025
Tue Apr 08 14:03:22 PDT 2025

";

fn open(dir: &TempDir) -> Store {
    Store::open(&StudyConfig::default(), dir.path()).unwrap()
}

#[test]
fn test_records_survive_reopen_with_same_ids() {
    let temp_dir = TempDir::new().unwrap();

    let (set_id, note_id, card_ids) = {
        let mut store = open(&temp_dir);
        let set_id = store
            .add_set(
                "Capitals",
                "Europe",
                vec![
                    Flashcard::new("France", "Paris", 1),
                    Flashcard::new("Spain", "Madrid", 3),
                ],
            )
            .unwrap();
        let note_id = store.add_note("Lecture", "", "one two three").unwrap();
        let card_ids: Vec<u64> = store
            .set(set_id)
            .unwrap()
            .flashcards()
            .iter()
            .map(|c| c.id())
            .collect();
        (set_id, note_id, card_ids)
    };

    let store = open(&temp_dir);
    let set = store.set(set_id).unwrap();
    assert_eq!(set.title(), "Capitals");
    assert_eq!(set.description(), "Europe");
    let reloaded: Vec<u64> = set.flashcards().iter().map(|c| c.id()).collect();
    assert_eq!(reloaded, card_ids);
    assert_eq!(set.flashcards()[1].priority(), 3);

    let note = store.note(note_id).unwrap();
    assert_eq!(note.text(), "one two three");
    assert_eq!(note.word_count(), 3);
}

#[test]
fn test_new_ids_do_not_collide_with_loaded_ones() {
    let temp_dir = TempDir::new().unwrap();
    let first = {
        let mut store = open(&temp_dir);
        store
            .add_set("First", "", vec![Flashcard::new("a", "b", 2)])
            .unwrap()
    };

    let mut store = open(&temp_dir);
    let second = store
        .add_set("Second", "", vec![Flashcard::new("c", "d", 2)])
        .unwrap();
    assert!(second > first);
    assert_eq!(store.sets().len(), 2);
}

#[test]
fn test_legacy_file_is_read_and_rewritten_as_json_lines() {
    let temp_dir = TempDir::new().unwrap();
    let config = StudyConfig::default();
    let set_path = config.set_file_path(temp_dir.path());
    std::fs::write(&set_path, LEGACY_SETS).unwrap();

    let mut store = open(&temp_dir);
    assert_eq!(store.sets().len(), 1);
    let spanish = store.sets()[0].clone();
    assert_eq!(spanish.title(), "Spanish");
    assert_eq!(spanish.len(), 2);

    // Reading alone leaves the file untouched
    let content = std::fs::read_to_string(&set_path).unwrap();
    assert_eq!(detect_format(&content), DatabaseFormat::Legacy);

    store
        .edit_set(
            spanish.id(),
            "Spanish",
            "Week 4 vocab",
            spanish.flashcards().to_vec(),
        )
        .unwrap();

    let content = std::fs::read_to_string(&set_path).unwrap();
    assert_eq!(detect_format(&content), DatabaseFormat::JsonLines);

    let store = open(&temp_dir);
    let reloaded = store.set(spanish.id()).unwrap();
    assert_eq!(reloaded.description(), "Week 4 vocab");
    assert_eq!(reloaded.date_created(), spanish.date_created());
    assert_eq!(reloaded.flashcards(), spanish.flashcards());
}

#[test]
fn test_import_then_export_legacy() {
    let temp_dir = TempDir::new().unwrap();
    let legacy_dir = temp_dir.path().join("legacy");
    std::fs::create_dir_all(&legacy_dir).unwrap();
    std::fs::write(legacy_dir.join("sets.txt"), LEGACY_SETS).unwrap();
    std::fs::write(legacy_dir.join("notes.txt"), LEGACY_NOTES).unwrap();

    let mut store = open(&temp_dir);
    store
        .add_set("Existing", "", vec![Flashcard::new("x", "y", 2)])
        .unwrap();
    assert_eq!(
        store.import_legacy_sets(&legacy_dir.join("sets.txt")).unwrap(),
        1
    );
    assert_eq!(
        store
            .import_legacy_notes(&legacy_dir.join("notes.txt"))
            .unwrap(),
        1
    );
    assert_eq!(store.sets().len(), 2);
    assert_eq!(store.notes()[0].word_count(), 4);

    let out_dir = temp_dir.path().join("out");
    let (set_file, note_file) = store.export_legacy(&out_dir).unwrap();
    let sets = std::fs::read_to_string(set_file).unwrap();
    let notes = std::fs::read_to_string(note_file).unwrap();
    assert_eq!(detect_format(&sets), DatabaseFormat::Legacy);
    assert!(sets.contains("Existing"));
    assert!(sets.contains("Spanish"));
    assert!(notes.contains("Mitochondria are the powerhouse."));
}

#[test]
fn test_invalid_set_is_rejected_and_nothing_written() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);

    let err = store.add_set("  ", "", vec![Flashcard::new("a", "b", 2)]);
    assert!(matches!(
        err,
        Err(StudyError::Invalid(ValidationError::MissingTitle))
    ));

    let err = store.add_set("Empty", "", Vec::new());
    assert!(matches!(
        err,
        Err(StudyError::Invalid(ValidationError::NoFlashcards))
    ));

    assert!(store.sets().is_empty());
    assert!(!store.set_path().exists());
}

#[test]
fn test_card_update_persists() {
    let temp_dir = TempDir::new().unwrap();
    let (set_id, card_id) = {
        let mut store = open(&temp_dir);
        let set_id = store
            .add_set("Chem", "", vec![Flashcard::new("H", "Hydrogen", 2)])
            .unwrap();
        let card_id = store.set(set_id).unwrap().flashcards()[0].id();
        store
            .update_flashcard(
                set_id,
                card_id,
                FlashcardPatch {
                    term: None,
                    definition: Some("Hydrogen (1)".to_string()),
                    priority: Some(1),
                },
            )
            .unwrap();
        (set_id, card_id)
    };

    let store = open(&temp_dir);
    let card = store.set(set_id).unwrap().flashcard(card_id).unwrap();
    assert_eq!(card.term(), "H");
    assert_eq!(card.definition(), "Hydrogen (1)");
    assert_eq!(card.priority(), 1);
}

#[test]
fn test_update_set_database_rewrites_legacy_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = StudyConfig::default();
    std::fs::write(config.set_file_path(temp_dir.path()), LEGACY_SETS).unwrap();

    let store = open(&temp_dir);
    let before = store.sets().to_vec();
    store.update_set_database().unwrap();

    let content = std::fs::read_to_string(store.set_path()).unwrap();
    assert_eq!(detect_format(&content), DatabaseFormat::JsonLines);

    let reopened = open(&temp_dir);
    assert_eq!(reopened.sets(), before.as_slice());
}

#[test]
fn test_update_note_database_rewrites_legacy_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = StudyConfig::default();
    std::fs::write(config.note_file_path(temp_dir.path()), LEGACY_NOTES).unwrap();

    let store = open(&temp_dir);
    let before = store.notes().to_vec();
    store.update_note_database().unwrap();

    let content = std::fs::read_to_string(store.note_path()).unwrap();
    assert_eq!(detect_format(&content), DatabaseFormat::JsonLines);

    let reopened = open(&temp_dir);
    assert_eq!(reopened.notes(), before.as_slice());
    assert_eq!(reopened.notes()[0].date_created(), before[0].date_created());
    assert_eq!(reopened.notes()[0].date_accessed(), before[0].date_accessed());
}

#[test]
fn test_legacy_header_with_trailing_space_survives_a_save() {
    let temp_dir = TempDir::new().unwrap();
    let config = StudyConfig::default();
    let set_path = config.set_file_path(temp_dir.path());
    let padded = LEGACY_SETS.replacen(
        "Title;Description;Flashcards;DateCreated;DateAccessed",
        "Title;Description;Flashcards;DateCreated;DateAccessed ",
        1,
    );
    std::fs::write(&set_path, padded).unwrap();

    let mut store = open(&temp_dir);
    assert_eq!(store.sets().len(), 1);
    store
        .add_set("New", "", vec![Flashcard::new("a", "b", 2)])
        .unwrap();

    let reopened = open(&temp_dir);
    let titles: Vec<&str> = reopened.sets().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["Spanish", "New"]);
}

#[test]
fn test_legacy_file_with_wrong_header_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let config = StudyConfig::default();
    let set_path = config.set_file_path(temp_dir.path());
    // A note database saved under the set file name
    std::fs::write(&set_path, LEGACY_NOTES).unwrap();

    let err = Store::open(&config, temp_dir.path()).unwrap_err();
    assert!(matches!(err, StudyError::Parse(_)));
    assert_eq!(std::fs::read_to_string(&set_path).unwrap(), LEGACY_NOTES);
}

#[test]
fn test_add_and_remove_single_cards() {
    let temp_dir = TempDir::new().unwrap();
    let set_id = {
        let mut store = open(&temp_dir);
        let set_id = store
            .add_set("Capitals", "", vec![Flashcard::new("France", "Paris", 1)])
            .unwrap();
        let first = store.set(set_id).unwrap().flashcards()[0].id();
        store.add_flashcard(set_id, "Spain", "Madrid", 2).unwrap();
        store.remove_flashcard(set_id, first).unwrap();
        set_id
    };

    let mut store = open(&temp_dir);
    let set = store.set(set_id).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.flashcards()[0].term(), "Spain");

    let last = set.flashcards()[0].id();
    assert!(matches!(
        store.remove_flashcard(set_id, last),
        Err(StudyError::Invalid(ValidationError::NoFlashcards))
    ));
}
