use tablewright_core::{schema::MoveTarget, Error};
use tablewright_sql::reorder::{plan_moves, Move};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Replays a move sequence over an order, the way the store would.
fn apply(current: &[String], moves: &[Move]) -> Vec<String> {
    let mut order = current.to_vec();
    for mv in moves {
        let old = order
            .iter()
            .position(|name| *name == mv.name)
            .expect("move names a known column");
        order.remove(old);
        let at = match &mv.position {
            MoveTarget::First => 0,
            MoveTarget::After(anchor) => {
                order
                    .iter()
                    .position(|name| name == anchor)
                    .expect("anchor is a known column")
                    + 1
            }
        };
        order.insert(at, mv.name.clone());
    }
    order
}

#[test]
fn matching_orders_plan_no_moves() {
    let current = names(&["a", "b", "c"]);
    let moves = plan_moves(&current, &current).unwrap();
    assert!(moves.is_empty());
}

#[test]
fn rotating_three_columns_takes_one_move() {
    let current = names(&["a", "b", "c"]);
    let target = names(&["c", "a", "b"]);

    let moves = plan_moves(&current, &target).unwrap();
    assert_eq!(
        moves,
        [Move {
            name: "c".into(),
            position: MoveTarget::First,
        }]
    );
    assert_eq!(apply(&current, &moves), target);
}

#[test]
fn later_moves_anchor_on_finalized_positions() {
    let current = names(&["a", "b", "c", "d"]);
    let target = names(&["b", "d", "a", "c"]);

    let moves = plan_moves(&current, &target).unwrap();
    assert_eq!(apply(&current, &moves), target);

    // Position 0 anchors FIRST; every later move anchors AFTER its left
    // neighbor in the target order.
    for (i, mv) in moves.iter().enumerate() {
        match &mv.position {
            MoveTarget::First => assert_eq!(i, 0),
            MoveTarget::After(anchor) => {
                let at = target.iter().position(|n| n == &mv.name).unwrap();
                assert_eq!(anchor, &target[at - 1]);
            }
        }
    }
}

#[test]
fn every_permutation_of_four_reaches_the_target() {
    let current = names(&["a", "b", "c", "d"]);
    let pool = ["a", "b", "c", "d"];

    for i in 0..4 {
        for j in 0..4 {
            if j == i {
                continue;
            }
            for k in 0..4 {
                if k == i || k == j {
                    continue;
                }
                let l = 6 - i - j - k;
                let target = names(&[pool[i], pool[j], pool[k], pool[l]]);
                let moves = plan_moves(&current, &target).unwrap();
                assert_eq!(apply(&current, &moves), target, "target {target:?}");
                if target == current {
                    assert!(moves.is_empty());
                }
            }
        }
    }
}

#[test]
fn reversal_moves_all_but_one_column() {
    let current = names(&["a", "b", "c", "d", "e"]);
    let target = names(&["e", "d", "c", "b", "a"]);

    let moves = plan_moves(&current, &target).unwrap();
    assert_eq!(moves.len(), 4);
    assert_eq!(apply(&current, &moves), target);
}

#[test]
fn mismatched_name_sets_are_rejected() {
    let err = plan_moves(&names(&["a", "b"]), &names(&["a", "c"])).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = plan_moves(&names(&["a", "b"]), &names(&["a"])).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn duplicate_names_are_rejected() {
    let err = plan_moves(&names(&["a", "b"]), &names(&["a", "a"])).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("duplicate column name `a`"));

    let err = plan_moves(&names(&["a", "a"]), &names(&["a", "b"])).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
