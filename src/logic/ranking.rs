//! Points ranking: tie-break cascade and standings view.

use crate::models::{Player, PlayerId, Tournament, TournamentError};
use serde::Serialize;
use std::cmp::Ordering;

/// Head-to-head scores of two players: what each scored against the other.
/// `(0.0, 0.0)` if they never met, which counts as a tie.
pub fn head_to_head(a: &Player, b: &Player) -> (f64, f64) {
    (
        a.score_against(&b.id).unwrap_or(0.0),
        b.score_against(&a.id).unwrap_or(0.0),
    )
}

/// Pairwise cascade, each level only consulted when the previous one ties:
/// 1. points (higher first)
/// 2. head-to-head: what each scored in their mutual games (never met counts as a tie)
/// 3. rating (higher first)
/// 4. registration order
///
/// `Less` means `a` ranks ahead of `b`. Level 2 is not transitive: results can be cyclic.
pub fn compare_players(a: &Player, b: &Player) -> Ordering {
    let (a_score, b_score) = head_to_head(a, b);
    b.points
        .total_cmp(&a.points)
        .then_with(|| b_score.total_cmp(&a_score))
        .then_with(|| by_rating(a, b))
}

/// Levels 3 and 4 of the cascade; a total order on its own.
fn by_rating(a: &Player, b: &Player) -> Ordering {
    b.rating
        .cmp(&a.rating)
        .then_with(|| a.registration_index.cmp(&b.registration_index))
}

/// Re-sort the points ranking by `compare_players` and rewrite every `points_pos`.
///
/// Players on equal points are ordered by the pairwise cascade wherever it is
/// consistent. Players caught in a head-to-head cycle are ordered among themselves
/// by rating then registration order, and the cycle as a whole keeps its place
/// relative to everyone else. The result depends only on the recorded results,
/// not on the previous order.
pub fn sort_by_points(tournament: &mut Tournament) -> Result<(), TournamentError> {
    tournament.require_ongoing()?;

    let participants = &tournament.participants;
    let mut ranked: Vec<&Player> = tournament
        .points_rank
        .iter()
        .filter_map(|id| participants.get(id))
        .collect();
    debug_assert_eq!(ranked.len(), tournament.points_rank.len());

    ranked.sort_by(|a, b| b.points.total_cmp(&a.points).then_with(|| by_rating(a, b)));
    let mut start = 0;
    while start < ranked.len() {
        let points = ranked[start].points;
        let len = ranked[start..]
            .iter()
            .take_while(|p| p.points.total_cmp(&points) == Ordering::Equal)
            .count();
        order_tie_group(&mut ranked[start..start + len]);
        start += len;
    }
    let order: Vec<PlayerId> = ranked.iter().map(|p| p.id.clone()).collect();

    tournament.points_rank = order;
    for (idx, id) in tournament.points_rank.iter().enumerate() {
        if let Some(p) = tournament.participants.get_mut(id) {
            p.points_pos = idx + 1;
        }
    }
    Ok(())
}

/// Order players on equal points.
///
/// `ahead[i][j]` starts as the pairwise cascade and is closed transitively. Where
/// only one of `ahead[i][j]`, `ahead[j][i]` holds the pair is settled by the
/// cascade; where both hold, i and j sit on a cycle and rating decides.
fn order_tie_group(group: &mut [&Player]) {
    let n = group.len();
    if n < 2 {
        return;
    }

    let mut ahead = vec![vec![false; n]; n];
    for i in 0..n {
        for j in 0..n {
            ahead[i][j] = i != j && compare_players(group[i], group[j]) == Ordering::Less;
        }
    }
    for k in 0..n {
        for i in 0..n {
            if !ahead[i][k] {
                continue;
            }
            for j in 0..n {
                if ahead[k][j] {
                    ahead[i][j] = true;
                }
            }
        }
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| match (ahead[i][j], ahead[j][i]) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => by_rating(group[i], group[j]),
    });
    let sorted: Vec<&Player> = order.iter().map(|&i| group[i]).collect();
    group.copy_from_slice(&sorted);
}

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    pub points_pos: usize,
    pub id: PlayerId,
    pub rating: i32,
    pub rating_pos: usize,
    pub points: f64,
}

/// Standings in points-rank order, as of the last `sort_by_points`.
pub fn standings(tournament: &Tournament) -> Vec<Standing> {
    tournament
        .points_rank
        .iter()
        .filter_map(|id| tournament.participants.get(id))
        .map(|p| Standing {
            points_pos: p.points_pos,
            id: p.id.clone(),
            rating: p.rating,
            rating_pos: p.rating_pos,
            points: p.points,
        })
        .collect()
}
