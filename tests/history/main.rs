
use profile_history::{
    HistoryConfig, HistoryManager, ProfileState, ProfileUpdate, Snapshottable, UserProfile,
};
use subject::Draft;

fn titles(history: &HistoryManager<Draft>) -> Vec<String> {
    history
        .history()
        .iter()
        .map(|s| s.state().title.clone())
        .collect()
}

fn save_titles(history: &mut HistoryManager<Draft>, draft: &mut Draft, list: &[&str]) {
    for title in list {
        draft.retitle(title);
        history.save_state(&*draft);
    }
}

#[test]
fn profile_edit_scenario_with_small_retention() {
    let mut history = HistoryManager::with_max_retention(3);
    let mut profile = UserProfile::new("u1", "Alice", "alice@example.com").unwrap();
    history.save_state(&profile);

    profile.apply(ProfileUpdate::new().name("Bob")).unwrap();
    history.save_state(&profile);
    profile.apply(ProfileUpdate::new().name("Carol")).unwrap();
    history.save_state(&profile);

    assert_eq!(history.len(), 3);
    assert_eq!(history.current_index(), Some(2));
    assert_eq!(history.current_snapshot().unwrap().name(), "Carol");

    assert!(history.undo(&mut profile).unwrap());
    assert!(history.undo(&mut profile).unwrap());
    assert_eq!(profile.name(), "Alice");
    assert_eq!(history.current_snapshot().unwrap().name(), "Alice");
    assert!(!history.can_undo());

    profile.apply(ProfileUpdate::new().name("Dana")).unwrap();
    history.save_state(&profile);

    let names: Vec<String> = history
        .history()
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    assert_eq!(names, vec!["Alice", "Dana"]);
    assert_eq!(history.len(), 2);
    assert_eq!(history.current_index(), Some(1));
    assert_eq!(history.current_snapshot().unwrap().name(), "Dana");
    assert!(!history.can_redo());
}

#[test]
fn branch_truncation_discards_redo_states() {
    let mut history = HistoryManager::new();
    let mut draft = Draft::default();
    save_titles(&mut history, &mut draft, &["A", "B", "C", "D"]);

    assert!(history.jump_to(1, &mut draft).unwrap());
    assert_eq!(draft.title, "B");

    save_titles(&mut history, &mut draft, &["E"]);
    assert_eq!(titles(&history), vec!["A", "B", "E"]);
    assert_eq!(history.current_index(), Some(2));
}

#[test]
fn eviction_keeps_newest_and_shifts_index() {
    let mut history = HistoryManager::with_max_retention(2);
    let mut draft = Draft::default();
    save_titles(&mut history, &mut draft, &["A", "B", "C"]);

    assert_eq!(titles(&history), vec!["B", "C"]);
    assert_eq!(history.current_index(), Some(1));

    assert!(history.undo(&mut draft).unwrap());
    assert_eq!(draft.title, "B");
    assert!(!history.undo(&mut draft).unwrap());
}

#[test]
fn save_after_jump_to_oldest_truncates_everything_newer() {
    let mut history = HistoryManager::with_max_retention(3);
    let mut draft = Draft::default();
    save_titles(&mut history, &mut draft, &["A", "B", "C"]);

    history.jump_to(0, &mut draft).unwrap();
    save_titles(&mut history, &mut draft, &["X"]);

    assert_eq!(titles(&history), vec!["A", "X"]);
    assert_eq!(history.current_index(), Some(1));
}

#[test]
fn undo_redo_round_trip_restores_fields() {
    let mut history = HistoryManager::new();
    let mut draft = Draft::titled("first");
    history.save_state(&draft);

    draft.retitle("second");
    draft.body = "body text".into();
    history.save_state(&draft);
    let before_undo = draft.clone();

    assert!(history.undo(&mut draft).unwrap());
    assert_eq!(draft, Draft::titled("first"));

    assert!(history.redo(&mut draft).unwrap());
    assert_eq!(draft, before_undo);
}

#[test]
fn fresh_manager_guards() {
    let mut history: HistoryManager<Draft> = HistoryManager::new();
    let mut draft = Draft::titled("untouched");

    assert!(!history.undo(&mut draft).unwrap());
    assert!(!history.redo(&mut draft).unwrap());
    assert!(history.current_snapshot().is_none());
    assert_eq!(draft.title, "untouched");
}

#[test]
fn stats_track_timestamps() {
    let mut history = HistoryManager::from_config(&HistoryConfig::new().with_max_retention(10));
    let mut draft = Draft::default();
    save_titles(&mut history, &mut draft, &["a", "b", "c"]);
    history.jump_to(0, &mut draft).unwrap();

    let stats = history.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.current_index, Some(0));
    assert!(!stats.can_undo);
    assert!(stats.can_redo);
    assert_eq!(stats.max_retention, 10);
    assert_eq!(stats.current_timestamp, stats.first_timestamp);
    assert!(stats.first_timestamp <= stats.last_timestamp);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["current_index"], 0);
}

#[test]
fn snapshot_export_includes_fields_and_timestamp() {
    let profile = UserProfile::new("u1", "Alice", "alice@example.com").unwrap();
    let snapshot = profile.create_snapshot();

    let map = snapshot.to_map().unwrap();
    let state: ProfileState = serde_json::from_value(serde_json::Value::Object(
        map.iter()
            .filter(|(key, _)| key.as_str() != "timestamp")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    ))
    .unwrap();
    assert_eq!(&state, profile.state());
    assert!(map["timestamp"].is_string());
}
