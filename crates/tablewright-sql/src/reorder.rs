use tablewright_core::{schema::MoveTarget, Error, Result};

use std::collections::HashSet;

/// One planned repositioning of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The column to reposition.
    pub name: String,

    /// Where it goes.
    pub position: MoveTarget,
}

/// Computes the move sequence that turns `current` into `target`.
///
/// Both orders must be permutations of the same name set. The planner
/// scans target positions left to right over a working copy of
/// `current`; a position that already matches is skipped, otherwise the
/// wanted column is repositioned to `AFTER` its left neighbor in the
/// target (or `FIRST` at position 0) and the working copy is updated.
/// Positions 0..i-1 are final before position i is examined, so a single
/// pass suffices and the plan is empty iff the orders already match.
pub fn plan_moves(current: &[String], target: &[String]) -> Result<Vec<Move>> {
    validate_permutation(current, target)?;

    let mut working: Vec<&str> = current.iter().map(String::as_str).collect();
    let mut moves = Vec::new();

    for (i, want) in target.iter().enumerate() {
        if working[i] == want.as_str() {
            continue;
        }

        let position = if i == 0 {
            MoveTarget::First
        } else {
            MoveTarget::After(target[i - 1].clone())
        };
        moves.push(Move {
            name: want.clone(),
            position,
        });

        let old = working[i..]
            .iter()
            .position(|name| *name == want.as_str())
            .expect("validated permutation")
            + i;
        working.remove(old);
        working.insert(i, want.as_str());
    }

    Ok(moves)
}

fn validate_permutation(current: &[String], target: &[String]) -> Result<()> {
    if current.len() != target.len() {
        return Err(Error::validation(format!(
            "target order has {} columns, current order has {}",
            target.len(),
            current.len()
        )));
    }

    let mut current_names = HashSet::new();
    for name in current {
        if !current_names.insert(name.as_str()) {
            return Err(Error::validation(format!(
                "duplicate column name `{name}` in current order"
            )));
        }
    }

    let mut target_names = HashSet::new();
    for name in target {
        if !target_names.insert(name.as_str()) {
            return Err(Error::validation(format!(
                "duplicate column name `{name}` in target order"
            )));
        }
        if !current_names.contains(name.as_str()) {
            return Err(Error::validation(format!(
                "column `{name}` is not part of the current order"
            )));
        }
    }

    Ok(())
}
