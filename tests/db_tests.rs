use chrono::NaiveDate;
use gifted::db::*;
use gifted::model::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn add_participant(conn: &rusqlite::Connection, username: &str, first: &str) -> Participant {
    let p = Participant::create(username.into(), first.into(), "Tester".into());
    participant_repo::insert(conn, &p).unwrap();
    p
}

fn add_event(conn: &rusqlite::Connection, title: &str, roster: Vec<Id<Participant>>) -> Event {
    let mut event = Event::create(
        title.into(),
        None,
        date(2026, 12, 1),
        date(2026, 12, 25),
    );
    event.participant_ids = roster;
    event_repo::insert(conn, &event).unwrap();
    event
}

// ==========================================================================
// PARTICIPANT REPO TESTS
// ==========================================================================

#[test]
fn participant_insert_and_find() {
    let conn = schema::test_connection();

    let alice = add_participant(&conn, "alice", "Alice");

    let found = participant_repo::find_by_id(&conn, alice.id).unwrap().unwrap();
    assert_eq!(found.username, "alice");
    assert_eq!(found.first_name, "Alice");
    assert!(!found.is_child());
}

#[test]
fn participant_find_by_username_is_case_insensitive() {
    let conn = schema::test_connection();
    add_participant(&conn, "alice", "Alice");

    let found = participant_repo::find_by_username(&conn, "ALICE").unwrap();
    assert!(found.is_some());
}

#[test]
fn participant_username_is_unique() {
    let conn = schema::test_connection();
    add_participant(&conn, "alice", "Alice");

    let dup = Participant::create("alice".into(), "Other".into(), "Person".into());
    assert!(participant_repo::insert(&conn, &dup).is_err());
}

#[test]
fn participant_update() {
    let conn = schema::test_connection();
    let mut alice = add_participant(&conn, "alice", "Alice");

    alice.last_name = "Anderson".into();
    participant_repo::update(&conn, &alice).unwrap();

    let found = participant_repo::find_by_id(&conn, alice.id).unwrap().unwrap();
    assert_eq!(found.last_name, "Anderson");
}

#[test]
fn find_children_of_parent() {
    let conn = schema::test_connection();
    let parent = add_participant(&conn, "pat", "Pat");

    let child = Participant::create_child(parent.id, "kid".into(), "Kiddo".into(), "Tester".into());
    participant_repo::insert(&conn, &child).unwrap();

    let children = participant_repo::find_children(&conn, parent.id).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].username, "kid");
    assert!(children[0].is_child());
}

#[test]
fn deleting_parent_orphans_children_gracefully() {
    let conn = schema::test_connection();
    let parent = add_participant(&conn, "pat", "Pat");

    let child = Participant::create_child(parent.id, "kid".into(), "Kiddo".into(), "Tester".into());
    participant_repo::insert(&conn, &child).unwrap();

    participant_repo::delete(&conn, parent.id).unwrap();

    let found = participant_repo::find_by_id(&conn, child.id).unwrap().unwrap();
    assert_eq!(found.managed_by, None);
}

// ==========================================================================
// EVENT REPO TESTS
// ==========================================================================

#[test]
fn event_insert_and_find_with_roster_order() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let b = add_participant(&conn, "bob", "Bob");
    let c = add_participant(&conn, "carol", "Carol");

    let event = add_event(&conn, "Christmas", vec![c.id, a.id, b.id]);

    let found = event_repo::find_by_id(&conn, event.id).unwrap().unwrap();
    assert_eq!(found.title, "Christmas");
    assert_eq!(found.participant_ids, vec![c.id, a.id, b.id]);
}

#[test]
fn event_add_participants_appends_in_order() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let b = add_participant(&conn, "bob", "Bob");
    let c = add_participant(&conn, "carol", "Carol");

    let event = add_event(&conn, "Christmas", vec![a.id]);
    event_repo::add_participants(&conn, event.id, &[b.id, c.id]).unwrap();

    let roster = event_repo::find_roster_ids(&conn, event.id).unwrap();
    assert_eq!(roster, vec![a.id, b.id, c.id]);
}

#[test]
fn event_add_participants_ignores_duplicates() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");

    let event = add_event(&conn, "Christmas", vec![a.id]);
    event_repo::add_participants(&conn, event.id, &[a.id]).unwrap();

    let roster = event_repo::find_roster_ids(&conn, event.id).unwrap();
    assert_eq!(roster.len(), 1);
}

#[test]
fn event_remove_participant_drops_their_pairs() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let b = add_participant(&conn, "bob", "Bob");
    let c = add_participant(&conn, "carol", "Carol");

    let event = add_event(&conn, "Christmas", vec![a.id, b.id, c.id]);
    pair_repo::insert(&conn, &Pair::new(event.id, a.id, b.id)).unwrap();
    pair_repo::insert(&conn, &Pair::new(event.id, b.id, c.id)).unwrap();
    pair_repo::insert(&conn, &Pair::new(event.id, c.id, a.id)).unwrap();

    event_repo::remove_participants(&conn, event.id, &[b.id]).unwrap();

    // Both the row where b gifts and the row where b receives are gone.
    let pairs = pair_repo::find_by_event(&conn, event.id).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].gifter_id, c.id);
}

#[test]
fn event_delete_removes_roster_and_pairs() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let b = add_participant(&conn, "bob", "Bob");

    let event = add_event(&conn, "Christmas", vec![a.id, b.id]);
    pair_repo::insert(&conn, &Pair::new(event.id, a.id, b.id)).unwrap();

    event_repo::delete(&conn, event.id).unwrap();

    assert!(event_repo::find_by_id(&conn, event.id).unwrap().is_none());
    assert!(pair_repo::find_by_event(&conn, event.id).unwrap().is_empty());
    assert!(event_repo::find_roster_ids(&conn, event.id).unwrap().is_empty());
}

#[test]
fn event_all_is_sorted_by_start_date() {
    let conn = schema::test_connection();

    let mut later = Event::create("Later".into(), None, date(2027, 6, 1), date(2027, 6, 30));
    later.participant_ids = Vec::new();
    event_repo::insert(&conn, &later).unwrap();

    let mut earlier = Event::create("Earlier".into(), None, date(2026, 12, 1), date(2026, 12, 25));
    earlier.participant_ids = Vec::new();
    event_repo::insert(&conn, &earlier).unwrap();

    let events = event_repo::all(&conn).unwrap();
    assert_eq!(events[0].title, "Earlier");
    assert_eq!(events[1].title, "Later");
}

// ==========================================================================
// PAIR REPO TESTS
// ==========================================================================

#[test]
fn pair_insert_and_find_by_gifter() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let b = add_participant(&conn, "bob", "Bob");
    let event = add_event(&conn, "Christmas", vec![a.id, b.id]);

    pair_repo::insert(&conn, &Pair::new(event.id, a.id, b.id)).unwrap();

    let pair = pair_repo::find_by_gifter(&conn, event.id, a.id).unwrap().unwrap();
    assert_eq!(pair.giftee_id, b.id);
    assert!(pair.created_at.is_some());
}

#[test]
fn pair_find_by_gifter_returns_none_before_first_shuffle() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let b = add_participant(&conn, "bob", "Bob");
    let event = add_event(&conn, "Christmas", vec![a.id, b.id]);

    assert!(pair_repo::find_by_gifter(&conn, event.id, a.id).unwrap().is_none());
}

#[test]
fn pair_update_giftee_keeps_created_at() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let b = add_participant(&conn, "bob", "Bob");
    let c = add_participant(&conn, "carol", "Carol");
    let event = add_event(&conn, "Christmas", vec![a.id, b.id, c.id]);

    pair_repo::insert(&conn, &Pair::new(event.id, a.id, b.id)).unwrap();
    let before = pair_repo::find_by_gifter(&conn, event.id, a.id).unwrap().unwrap();

    pair_repo::update_giftee(&conn, event.id, a.id, c.id).unwrap();
    let after = pair_repo::find_by_gifter(&conn, event.id, a.id).unwrap().unwrap();

    assert_eq!(after.giftee_id, c.id);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn pair_storage_rejects_self_assignment() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let event = add_event(&conn, "Christmas", vec![a.id]);

    let result = pair_repo::insert(&conn, &Pair::new(event.id, a.id, a.id));
    assert!(result.is_err());
}

#[test]
fn pair_storage_rejects_second_row_per_gifter() {
    let conn = schema::test_connection();
    let a = add_participant(&conn, "alice", "Alice");
    let b = add_participant(&conn, "bob", "Bob");
    let c = add_participant(&conn, "carol", "Carol");
    let event = add_event(&conn, "Christmas", vec![a.id, b.id, c.id]);

    pair_repo::insert(&conn, &Pair::new(event.id, a.id, b.id)).unwrap();
    let result = pair_repo::insert(&conn, &Pair::new(event.id, a.id, c.id));
    assert!(result.is_err());
}
