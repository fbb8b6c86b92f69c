//! Snapshot fidelity: decode(encode(x)) reconstructs x exactly.

use blob_board::{Board, CellState};
use blob_snapshot::{board_hash, decode_board, encode_board, LoadWarning};
use blob_test_utils::TestBoardBuilder;
use proptest::prelude::*;

fn cell_state() -> impl Strategy<Value = CellState> {
    (any::<bool>(), 0.0f64..1e6, 0.0f64..=255.0).prop_map(|(touched, food, intensity)| {
        CellState {
            touched: touched || intensity > 0.0,
            food,
            intensity,
        }
    })
}

fn arb_board() -> impl Strategy<Value = Board> {
    (1u32..10, 1u32..10).prop_flat_map(|(w, h)| {
        proptest::collection::vec(cell_state(), (w * h) as usize)
            .prop_map(move |states| Board::from_states(w, h, states))
    })
}

proptest! {
    #[test]
    fn board_text_round_trip_is_exact(board in arb_board()) {
        let decoded = decode_board(&encode_board(&board)).unwrap();
        prop_assert!(decoded.is_clean());
        prop_assert_eq!(board_hash(&decoded.value), board_hash(&board));
        prop_assert_eq!(decoded.value, board);
    }
}

#[test]
fn fixture_board_survives_round_trip() {
    let board = TestBoardBuilder::new(6, 4)
        .trail_row(2, 33.3)
        .food(5, 3, 100.0)
        .food(0, 0, 0.25)
        .build();
    let decoded = decode_board(&encode_board(&board)).unwrap();
    assert!(decoded.is_clean());
    assert_eq!(decoded.value, board);
}

#[test]
fn windows_line_endings_are_accepted() {
    let decoded = decode_board("2 1\r\n1,3,4 0,0,0\r\n").unwrap();
    assert!(decoded.is_clean());
    let board = decoded.into_value();
    assert_eq!(board.food(0, 0), Some(3.0));
    assert!(board.is_touched(0, 0));
}

#[test]
fn surplus_rows_are_dropped_with_a_warning() {
    let decoded = decode_board("1 1\n1,0,1\n1,0,2").unwrap();
    assert_eq!(
        decoded.warnings,
        vec![LoadWarning::RowCountMismatch {
            found: 2,
            expected: 1
        }]
    );
    assert_eq!(decoded.value.intensity(0, 0), Some(1.0));
}
