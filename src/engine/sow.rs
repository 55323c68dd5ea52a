//! The sowing pass: stone placement, capture, and move classification.
//!
//! This module is the only place that moves stones between pits and houses.
//! The state machine validates legality before calling in; [`sow`] assumes
//! a legal, non-empty source pit and never returns [`MoveOutcome::Illegal`].

use crate::core::{Board, MoveOutcome, SideId};

use super::cursor::{next_slot, Slot};

/// Perform one full sowing pass for `mover` from `pit_index` and classify it.
///
/// Stones are placed strictly one at a time: each landing pit's "was it
/// empty" state depends on placements earlier in the same pass, so there is
/// no batch shortcut even when the pass laps the whole board. Only the
/// final stone's placement decides the returned classification, and only a
/// final-stone `Steal` triggers the capture.
pub(crate) fn sow(board: &mut Board, mover: SideId, pit_index: usize) -> MoveOutcome {
    let pit_count = board.pit_count();
    let stones = board.side_mut(mover).take_pit(pit_index);
    debug_assert!(stones > 0, "caller must reject moves from empty pits");

    let mut slot = Slot::Pit(mover, pit_index);
    let mut outcome = MoveOutcome::Continue;
    for _ in 0..stones {
        slot = next_slot(mover, slot, pit_count);
        outcome = place(board, mover, slot);
    }

    if outcome == MoveOutcome::Steal {
        if let Slot::Pit(_, landing) = slot {
            capture(board, mover, landing);
        }
    }

    outcome
}

/// Place a single stone into `slot` and classify the placement.
fn place(board: &mut Board, mover: SideId, slot: Slot) -> MoveOutcome {
    match slot {
        Slot::Pit(side, index) => {
            let was_empty = board.side(side).pit(index) == Some(0);
            board.side_mut(side).drop_stone(index);
            // A capture candidate only on the mover's own side.
            if side == mover && was_empty {
                MoveOutcome::Steal
            } else {
                MoveOutcome::Continue
            }
        }
        Slot::House(side) => {
            board.side_mut(side).bank(1);
            MoveOutcome::PlayAgain
        }
    }
}

/// Move the landing pit's single stone and the opposite pit's stones into
/// the mover's house.
fn capture(board: &mut Board, mover: SideId, landing: usize) {
    let mirror = board.pit_count() - 1 - landing;
    let own = board.side_mut(mover).take_pit(landing);
    let stolen = board.side_mut(mover.opponent()).take_pit(mirror);
    board.side_mut(mover).bank(own + stolen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;
    use SideId::{A, B};

    /// Overwrite one side's pit row with explicit counts.
    fn set_pits(board: &mut Board, side: SideId, counts: &[u32]) {
        assert_eq!(counts.len(), board.pit_count());
        for (index, &count) in counts.iter().enumerate() {
            board.side_mut(side).take_pit(index);
            for _ in 0..count {
                board.side_mut(side).drop_stone(index);
            }
        }
    }

    #[test]
    fn test_plain_sow_stays_on_own_side() {
        // Mode 3, pit 2: three stones land in pits 3, 4, 5.
        let mut board = Board::new(Mode::ThreeStones, 6);

        let outcome = sow(&mut board, A, 2);

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.side(A).pits(), &[3, 3, 0, 4, 4, 4]);
        assert_eq!(board.side(A).house(), 0);
        assert_eq!(board.side(B).pits(), &[3, 3, 3, 3, 3, 3]);
    }

    #[test]
    fn test_last_stone_in_house_is_play_again() {
        let mut board = Board::new(Mode::ThreeStones, 6);
        set_pits(&mut board, A, [3, 3, 3, 3, 3, 1].as_slice());

        let outcome = sow(&mut board, A, 5);

        assert_eq!(outcome, MoveOutcome::PlayAgain);
        assert_eq!(board.side(A).house(), 1);
        assert_eq!(board.side(A).pit(5), Some(0));
    }

    #[test]
    fn test_sow_crosses_into_opponent_row() {
        // Mode 3, pit 5: house, then opponent pits 0 and 1.
        let mut board = Board::new(Mode::ThreeStones, 6);

        let outcome = sow(&mut board, A, 5);

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.side(A).house(), 1);
        assert_eq!(board.side(B).pits(), &[4, 4, 3, 3, 3, 3]);
    }

    #[test]
    fn test_final_stone_in_own_empty_pit_captures() {
        let mut board = Board::new(Mode::ThreeStones, 6);
        set_pits(&mut board, A, [3, 3, 1, 0, 3, 3].as_slice());

        let outcome = sow(&mut board, A, 2);

        assert_eq!(outcome, MoveOutcome::Steal);
        // The sown stone plus B's mirror pit (index 2) end up in A's house.
        assert_eq!(board.side(A).pit(3), Some(0));
        assert_eq!(board.side(B).pit(2), Some(0));
        assert_eq!(board.side(A).house(), 1 + 3);
    }

    #[test]
    fn test_landing_in_opponent_empty_pit_never_captures() {
        let mut board = Board::new(Mode::ThreeStones, 6);
        set_pits(&mut board, A, [3, 3, 3, 3, 3, 2].as_slice());
        set_pits(&mut board, B, [0, 3, 3, 3, 3, 3].as_slice());

        // Two stones from pit 5: house, then B's empty pit 0.
        let outcome = sow(&mut board, A, 5);

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.side(B).pit(0), Some(1));
        assert_eq!(board.side(A).house(), 1);
    }

    #[test]
    fn test_intermediate_empty_landing_does_not_capture() {
        let mut board = Board::new(Mode::ThreeStones, 6);
        set_pits(&mut board, A, [3, 3, 2, 0, 3, 3].as_slice());

        // Two stones from pit 2: the first lands in empty pit 3, the second
        // in pit 4. Only the final placement classifies the move.
        let outcome = sow(&mut board, A, 2);

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.side(A).pit(3), Some(1));
        assert_eq!(board.side(A).pit(4), Some(4));
        assert_eq!(board.side(A).house(), 0);
        assert_eq!(board.side(B).pits(), &[3, 3, 3, 3, 3, 3]);
    }

    #[test]
    fn test_multi_lap_skips_opponent_house_every_lap() {
        // Two pits per side; nine stones from A's pit 0 lap the board twice.
        // Circuit: A1 H B0 B1 A0 A1 H B0 B1 — the house is fed on both laps,
        // B's house never.
        let mut board = Board::new(Mode::ThreeStones, 2);
        set_pits(&mut board, A, [9, 1].as_slice());
        set_pits(&mut board, B, [1, 1].as_slice());

        let outcome = sow(&mut board, A, 0);

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.side(A).house(), 2);
        assert_eq!(board.side(B).house(), 0);
        assert_eq!(board.side(A).pits(), &[1, 3]);
        assert_eq!(board.side(B).pits(), &[3, 3]);
    }

    #[test]
    fn test_lap_back_into_emptied_source_pit_captures() {
        // Two pits per side; five stones from A's pit 0 walk
        // A1 H B0 B1 A0 — the final stone returns to the source pit, which
        // was emptied at the start of the pass, so it captures B's mirror.
        let mut board = Board::new(Mode::ThreeStones, 2);
        set_pits(&mut board, A, [5, 1].as_slice());
        set_pits(&mut board, B, [2, 2].as_slice());

        let outcome = sow(&mut board, A, 0);

        assert_eq!(outcome, MoveOutcome::Steal);
        assert_eq!(board.side(A).pit(0), Some(0));
        // Mirror of pit 0 on a two-pit board is pit 1, which held 2 + 1 sown.
        assert_eq!(board.side(B).pit(1), Some(0));
        // House: 1 from the lap through it, plus 1 landing + 3 stolen.
        assert_eq!(board.side(A).house(), 5);
    }

    #[test]
    fn test_sowing_conserves_stones() {
        let mut board = Board::new(Mode::SixStones, 6);
        let total = board.total_stones();

        sow(&mut board, A, 0);
        assert_eq!(board.total_stones(), total);

        sow(&mut board, B, 3);
        assert_eq!(board.total_stones(), total);

        sow(&mut board, A, 5);
        assert_eq!(board.total_stones(), total);
    }
}
