//! Integration tests for registration, start and roster import.

use swiss_tournament_web::{
    read_roster, record_game, register_roster, start_tournament, Outcome, Tournament,
    TournamentError, TournamentState, BYE_ID,
};

fn registered(players: &[(&str, i32)]) -> Tournament {
    let mut t = Tournament::new("My Tournament", 5);
    for &(id, rating) in players {
        t.register(id, rating).unwrap();
    }
    t
}

#[test]
fn start_orders_by_rating_and_builds_rank_map() {
    let mut t = registered(&[("Emmanuel", 3000), ("Joy", 500), ("Peniel", 1000), ("Daniel", 4000)]);
    start_tournament(&mut t).unwrap();

    assert_eq!(t.ratings_rank(), ["Daniel", "Emmanuel", "Peniel", "Joy"]);
    assert_eq!(t.player("Daniel").unwrap().rating_pos, 1);
    assert_eq!(t.player("Emmanuel").unwrap().rating_pos, 2);
    assert_eq!(t.player("Peniel").unwrap().rating_pos, 3);
    assert_eq!(t.player("Joy").unwrap().rating_pos, 4);

    assert_eq!(t.rank_to_id(), [BYE_ID, "Daniel", "Emmanuel", "Peniel", "Joy"]);
    for (rank, id) in t.rank_to_id().iter().enumerate() {
        assert_eq!(t.rating_pos_of(id), Some(rank));
    }
    assert_eq!(t.points_rank(), t.ratings_rank());
    assert_eq!(t.state(), TournamentState::Ongoing);
    assert!(t.is_ongoing());
}

#[test]
fn equal_ratings_keep_registration_order() {
    let mut t = registered(&[("A", 1500), ("B", 1800), ("C", 1500), ("D", 1500)]);
    start_tournament(&mut t).unwrap();
    assert_eq!(t.ratings_rank(), ["B", "A", "C", "D"]);
}

#[test]
fn duplicate_registration_is_rejected_without_change() {
    let mut t = registered(&[("Joy", 500)]);
    assert_eq!(
        t.register("Joy", 2700),
        Err(TournamentError::DuplicateParticipant("Joy".to_string()))
    );
    assert_eq!(t.player_count(), 1);
    assert_eq!(t.player("Joy").unwrap().rating, 500);
    assert_eq!(t.ratings_rank(), ["Joy"]);
}

#[test]
fn bye_sentinel_cannot_register() {
    let mut t = Tournament::new("T", 3);
    assert_eq!(t.register(BYE_ID, 1000), Err(TournamentError::ReservedIdentifier));
    assert_eq!(t.player_count(), 0);
}

#[test]
fn registration_closes_at_start() {
    let mut t = registered(&[("A", 1000), ("B", 900)]);
    start_tournament(&mut t).unwrap();
    assert_eq!(t.register("C", 800), Err(TournamentError::InvalidState));
    assert_eq!(start_tournament(&mut t), Err(TournamentError::InvalidState));
    assert_eq!(t.ratings_rank().len(), 2);
}

#[test]
fn results_need_a_started_tournament() {
    let mut t = registered(&[("A", 1000), ("B", 900)]);
    assert_eq!(
        record_game(&mut t, "A", "B", Outcome::Draw),
        Err(TournamentError::InvalidState)
    );
    assert!(t.player("A").unwrap().results.is_empty());
}

#[test]
fn roster_import_registers_and_skips_duplicates() {
    let csv = "id, rating\nEmmanuel, 3000\nJoy,500\nEmmanuel,100\nPeniel,1000\n";
    let entries = read_roster(csv.as_bytes()).unwrap();
    assert_eq!(entries.len(), 4);

    let mut t = Tournament::new("T", 3);
    let added = register_roster(&mut t, &entries).unwrap();
    assert_eq!(added, ["Emmanuel", "Joy", "Peniel"]);
    assert_eq!(t.player("Emmanuel").unwrap().rating, 3000);
}

#[test]
fn roster_with_bye_sentinel_registers_nothing() {
    let csv = format!("id,rating\nJoy,500\n{},100\n", BYE_ID);
    let entries = read_roster(csv.as_bytes()).unwrap();
    let mut t = Tournament::new("T", 3);
    assert_eq!(
        register_roster(&mut t, &entries),
        Err(TournamentError::ReservedIdentifier)
    );
    assert_eq!(t.player_count(), 0);
}

#[test]
fn roster_with_bad_rating_fails_to_parse() {
    assert!(read_roster("id,rating\nJoy,strong\n".as_bytes()).is_err());
}
