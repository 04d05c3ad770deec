//! Property tests over random result sequences.

use proptest::prelude::*;
use std::cmp::Ordering;
use swiss_tournament_web::{
    assign_bye, compare_players, decode_response, record_game, sort_by_points, start_tournament,
    Outcome, Player, Tournament,
};

#[derive(Clone, Debug)]
enum Event {
    Game(usize, usize, Outcome),
    Bye(usize),
}

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::WhiteWins),
        Just(Outcome::BlackWins),
        Just(Outcome::Draw),
    ]
}

fn event(players: usize) -> impl Strategy<Value = Event> {
    prop_oneof![
        (0..players, 0..players, outcome()).prop_map(|(w, b, o)| Event::Game(w, b, o)),
        (0..players).prop_map(Event::Bye),
    ]
}

fn tournament(ratings: &[i32]) -> Tournament {
    let mut t = Tournament::new("Prop", 9);
    for (i, &rating) in ratings.iter().enumerate() {
        t.register(format!("P{i}"), rating).unwrap();
    }
    start_tournament(&mut t).unwrap();
    t
}

fn apply(t: &mut Tournament, events: &[Event]) {
    for e in events {
        // Self-pairings are rejected and must leave no trace.
        let _ = match e {
            Event::Game(w, b, o) => record_game(t, &format!("P{w}"), &format!("P{b}"), *o),
            Event::Bye(p) => assign_bye(t, &format!("P{p}")),
        };
    }
}

/// True if the pairwise cascade has no cycle among `group`.
fn pairwise_is_transitive(group: &[&Player]) -> bool {
    let ahead = |a: &Player, b: &Player| compare_players(a, b) == Ordering::Less;
    group.iter().all(|a| {
        group.iter().all(|b| {
            group.iter().all(|c| !(ahead(a, b) && ahead(b, c)) || ahead(a, c))
        })
    })
}

proptest! {
    #[test]
    fn points_always_equal_history_sum(
        ratings in prop::collection::vec(0i32..3000, 2..8),
        events in prop::collection::vec(event(8), 0..40),
    ) {
        let mut t = tournament(&ratings);
        let n = ratings.len();
        let events: Vec<_> = events
            .into_iter()
            .filter(|e| match e {
                Event::Game(w, b, _) => *w < n && *b < n,
                Event::Bye(p) => *p < n,
            })
            .collect();
        apply(&mut t, &events);
        for p in t.players() {
            prop_assert!((p.points - p.history_points()).abs() < 1e-9);
        }
    }

    #[test]
    fn sort_is_idempotent_and_positions_are_consistent(
        ratings in prop::collection::vec(0i32..3000, 2..8),
        events in prop::collection::vec(event(8), 0..40),
    ) {
        let mut t = tournament(&ratings);
        let n = ratings.len();
        let events: Vec<_> = events
            .into_iter()
            .filter(|e| match e {
                Event::Game(w, b, _) => *w < n && *b < n,
                Event::Bye(p) => *p < n,
            })
            .collect();
        apply(&mut t, &events);

        sort_by_points(&mut t).unwrap();
        let first = t.points_rank().to_vec();
        sort_by_points(&mut t).unwrap();
        prop_assert_eq!(t.points_rank(), first.as_slice());

        for (idx, id) in t.points_rank().iter().enumerate() {
            prop_assert_eq!(t.player(id).unwrap().points_pos, idx + 1);
        }
        for pair in t.points_rank().windows(2) {
            let a = t.player(&pair[0]).unwrap();
            let b = t.player(&pair[1]).unwrap();
            prop_assert!(a.points >= b.points);
        }
    }

    #[test]
    fn decoded_ranks_match_rank_map(
        ratings in prop::collection::vec(0i32..3000, 1..8),
        picks in prop::collection::vec((0usize..8, 0usize..8), 0..6),
    ) {
        let t = tournament(&ratings);
        let n = ratings.len();
        let picks: Vec<_> = picks.into_iter().filter(|(a, b)| *a <= n && *b <= n).collect();
        let mut doc = String::from("4\n");
        for (a, b) in &picks {
            doc.push_str(&format!("{a} {b}\n"));
        }
        let round = decode_response(&doc, t.rank_to_id()).unwrap();
        prop_assert_eq!(round.pairs.len(), picks.len());
        for ((a, b), pair) in picks.iter().zip(&round.pairs) {
            prop_assert_eq!(&pair.white, &t.rank_to_id()[*a]);
            prop_assert_eq!(&pair.black, &t.rank_to_id()[*b]);
        }
    }

    #[test]
    fn acyclic_tie_groups_follow_the_pairwise_cascade(
        ratings in prop::collection::vec(0i32..3000, 2..8),
        events in prop::collection::vec(event(8), 0..24),
    ) {
        let mut t = tournament(&ratings);
        let n = ratings.len();
        let events: Vec<_> = events
            .into_iter()
            .filter(|e| match e {
                Event::Game(w, b, _) => *w < n && *b < n,
                Event::Bye(p) => *p < n,
            })
            .collect();
        apply(&mut t, &events);
        sort_by_points(&mut t).unwrap();

        let ranked: Vec<&Player> = t
            .points_rank()
            .iter()
            .map(|id| t.player(id).unwrap())
            .collect();
        for group in ranked.chunk_by(|a, b| a.points == b.points) {
            if !pairwise_is_transitive(group) {
                continue;
            }
            for (i, a) in group.iter().enumerate() {
                for b in &group[i + 1..] {
                    prop_assert_eq!(compare_players(a, b), Ordering::Less);
                }
            }
            for pair in group.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let never_met =
                    a.score_against(&b.id).is_none() && b.score_against(&a.id).is_none();
                if never_met && a.rating != b.rating {
                    prop_assert!(a.rating > b.rating, "{} ranked above {}", a.id, b.id);
                }
            }
        }
    }
}
