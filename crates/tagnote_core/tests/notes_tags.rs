use std::collections::HashSet;
use tagnote_core::{
    MemoryKeyValueStore, Note, NoteDraft, NoteFilter, NoteId, Notebook, SeedData, Snapshot, Tag,
    TagId,
};
use uuid::Uuid;

fn scenario_ids() -> (TagId, TagId, NoteId, NoteId, NoteId) {
    (
        TagId::from_uuid(Uuid::from_u128(1)),
        TagId::from_uuid(Uuid::from_u128(2)),
        NoteId::from_uuid(Uuid::from_u128(101)),
        NoteId::from_uuid(Uuid::from_u128(102)),
        NoteId::from_uuid(Uuid::from_u128(103)),
    )
}

/// Info/Concepts tags with Hooks, Routing and Misc notes, stored before open.
fn scenario_notebook() -> Notebook<MemoryKeyValueStore> {
    let (info, concepts, n1, n2, n3) = scenario_ids();
    let snapshot = Snapshot {
        tags: vec![Tag::with_id(info, "Info"), Tag::with_id(concepts, "Concepts")],
        notes: vec![
            Note::from_draft(n1, NoteDraft::new("Hooks", "hooks body").tags([info, concepts])),
            Note::from_draft(n2, NoteDraft::new("Routing", "routing body").tags([info, concepts])),
            Note::from_draft(n3, NoteDraft::new("Misc", "")),
        ],
    };
    let mut store = MemoryKeyValueStore::new();
    snapshot.save(&mut store).unwrap();
    Notebook::open(store).unwrap()
}

fn ids(notes: &[tagnote_core::ResolvedNote]) -> Vec<NoteId> {
    notes.iter().map(|note| note.id).collect()
}

fn assert_referential_invariant(notebook: &Notebook<MemoryKeyValueStore>) {
    let live: HashSet<TagId> = notebook.tags().iter().map(|tag| tag.id).collect();
    for note in notebook.notes() {
        for tag_id in &note.tag_ids {
            assert!(live.contains(tag_id), "note {} references dead tag {tag_id}", note.id);
        }
    }
}

#[test]
fn scenario_filter_by_tag_keeps_order() {
    let notebook = scenario_notebook();
    let (_, concepts, n1, n2, _) = scenario_ids();

    let result = notebook.filter(&NoteFilter::new().require_tag(concepts));
    assert_eq!(ids(&result), vec![n1, n2]);
}

#[test]
fn scenario_filter_by_title_is_case_insensitive() {
    let notebook = scenario_notebook();
    let (_, _, _, n2, _) = scenario_ids();

    let result = notebook.filter(&NoteFilter::new().title("rout"));
    assert_eq!(ids(&result), vec![n2]);
}

#[test]
fn scenario_neutral_filter_returns_everything() {
    let notebook = scenario_notebook();
    let (_, _, n1, n2, n3) = scenario_ids();

    let result = notebook.filter(&NoteFilter::new());
    assert_eq!(ids(&result), vec![n1, n2, n3]);
    assert_eq!(result[0].tag_labels(), vec!["Info", "Concepts"]);
}

#[test]
fn scenario_delete_tag_cascades_to_notes() {
    let mut notebook = scenario_notebook();
    let (info, concepts, n1, n2, n3) = scenario_ids();

    assert!(notebook.delete_tag(concepts).unwrap());

    let tag_ids_of = |id: NoteId| {
        notebook
            .notes()
            .iter()
            .find(|note| note.id == id)
            .unwrap()
            .tag_ids
            .clone()
    };
    assert_eq!(tag_ids_of(n1), vec![info]);
    assert_eq!(tag_ids_of(n2), vec![info]);
    assert!(tag_ids_of(n3).is_empty());
    assert!(notebook
        .filter(&NoteFilter::new().require_tag(concepts))
        .is_empty());
    assert_referential_invariant(&notebook);
}

#[test]
fn title_and_tag_criteria_combine() {
    let notebook = scenario_notebook();
    let (info, _, n1, _, _) = scenario_ids();

    let result = notebook.filter(&NoteFilter::new().title("HOO").require_tag(info));
    assert_eq!(ids(&result), vec![n1]);

    let none = notebook.filter(&NoteFilter::new().title("misc").require_tag(info));
    assert!(none.is_empty());
}

#[test]
fn duplicate_labels_stay_distinct_when_filtering() {
    let mut notebook = Notebook::open(MemoryKeyValueStore::new()).unwrap();
    let first = notebook.create_tag("work").unwrap();
    let second = notebook.create_tag("work").unwrap();
    let note = notebook
        .create_note(NoteDraft::new("plan", "").tags([first.id]))
        .unwrap();

    assert_eq!(
        ids(&notebook.filter(&NoteFilter::new().require_tag(first.id))),
        vec![note.id]
    );
    assert!(notebook
        .filter(&NoteFilter::new().require_tag(second.id))
        .is_empty());
}

#[test]
fn note_crud_through_notebook() {
    let mut notebook = Notebook::open(MemoryKeyValueStore::new()).unwrap();
    let tag = notebook.create_tag("Info").unwrap();
    let note = notebook
        .create_note(NoteDraft::new("Draft", "# body").tags([tag.id]))
        .unwrap();

    assert!(notebook
        .update_note(note.id, NoteDraft::new("Final", "# done"))
        .unwrap());
    let resolved = notebook.note(note.id).unwrap();
    assert_eq!(resolved.title, "Final");
    assert_eq!(resolved.markdown, "# done");
    assert!(resolved.tags.is_empty());

    assert!(notebook.delete_note(note.id).unwrap());
    assert!(notebook.note(note.id).is_none());
    assert!(!notebook.delete_note(note.id).unwrap());
}

#[test]
fn renamed_tag_shows_up_in_resolved_notes() {
    let mut notebook = Notebook::open(MemoryKeyValueStore::new()).unwrap();
    let tag = notebook.create_tag("Inf").unwrap();
    let note = notebook
        .create_note(NoteDraft::new("n", "").tags([tag.id]))
        .unwrap();

    assert!(notebook.update_tag(tag.id, "Info").unwrap());
    assert_eq!(notebook.note(note.id).unwrap().tag_labels(), vec!["Info"]);
}

#[test]
fn seeding_materializes_stock_content_with_fresh_ids() {
    let notebook =
        Notebook::open_or_seed(MemoryKeyValueStore::new(), &SeedData::default_content()).unwrap();

    let labels: Vec<&str> = notebook.tags().iter().map(|tag| tag.label.as_str()).collect();
    assert_eq!(labels, vec!["Info", "Concepts"]);
    let titles: Vec<&str> = notebook
        .notes()
        .iter()
        .map(|note| note.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Project Description", "Hooks", "Routing"]);

    let concepts = notebook.tags()[1].id;
    let result = notebook.filter(&NoteFilter::new().require_tag(concepts));
    let titles: Vec<&str> = result.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["Hooks", "Routing"]);
}

#[test]
fn seeding_skips_existing_content_and_unknown_keys() {
    let seed = SeedData::empty()
        .tag("a", "A")
        .note("uses missing key", "", &["a", "missing"]);
    let notebook = Notebook::open_or_seed(MemoryKeyValueStore::new(), &seed).unwrap();
    assert_eq!(notebook.notes()[0].tag_ids, vec![notebook.tags()[0].id]);

    let store = notebook.into_store();
    let reopened = Notebook::open_or_seed(store, &SeedData::default_content()).unwrap();
    assert_eq!(reopened.tags().len(), 1);
    assert_eq!(reopened.notes().len(), 1);
}

#[test]
fn random_mutation_sequence_preserves_referential_invariant() {
    let mut notebook = Notebook::open(MemoryKeyValueStore::new()).unwrap();
    let mut tag_ids = Vec::new();
    for round in 0..20u32 {
        let tag = notebook.create_tag(format!("t{round}")).unwrap();
        tag_ids.push(tag.id);
        let picked: Vec<TagId> = tag_ids
            .iter()
            .copied()
            .filter(|id| id.as_uuid().as_u128() % 3 != u128::from(round % 3))
            .collect();
        notebook
            .create_note(NoteDraft::new(format!("n{round}"), "").tags(picked))
            .unwrap();
        if round % 4 == 3 {
            let victim = tag_ids.remove(0);
            notebook.delete_tag(victim).unwrap();
        }
        assert_referential_invariant(&notebook);
    }
}
