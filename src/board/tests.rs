use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(CENTER, Pos::new(7, 7));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    // Top-left
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    // Top-right
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    // Bottom-left
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    // Bottom-right
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    assert_eq!(board.get(pos), Stone::Empty);
    assert!(board.is_empty(pos));

    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_board_remove_stone() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.place_stone(pos, Stone::White);
    board.remove_stone(pos);

    assert_eq!(board.get(pos), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_board_place_empty_is_noop() {
    let mut board = Board::new();
    board.place_stone(Pos::new(5, 5), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_try_place_valid() {
    let mut board = Board::new();
    let pos = board.try_place(7, 7, Stone::Black).expect("valid move");
    assert_eq!(pos, Pos::new(7, 7));
    assert_eq!(board.get(pos), Stone::Black);
}

#[test]
fn test_try_place_occupied() {
    let mut board = Board::new();
    board.try_place(7, 7, Stone::Black).expect("valid move");

    let result = board.try_place(7, 7, Stone::White);
    assert_eq!(result, Err(MoveError::Occupied));
    // The occupant is unchanged
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
}

#[test]
fn test_try_place_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.try_place(15, 7, Stone::Black), Err(MoveError::OutOfBounds));
    assert_eq!(board.try_place(7, 15, Stone::Black), Err(MoveError::OutOfBounds));
    assert_eq!(board.try_place(200, 200, Stone::Black), Err(MoveError::OutOfBounds));
    assert!(board.is_board_empty());
}

#[test]
fn test_move_error_display() {
    assert_eq!(
        MoveError::Occupied.to_string(),
        "cell is already occupied"
    );
    assert_eq!(
        MoveError::OutOfBounds.to_string(),
        "move target is outside the board"
    );
}

#[test]
fn test_bitboard_iter_ones() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(7, 7), Stone::Black);
    board.place_stone(Pos::new(14, 14), Stone::Black);

    let positions: Vec<Pos> = board.black.iter_ones().collect();
    assert_eq!(
        positions,
        vec![Pos::new(0, 0), Pos::new(7, 7), Pos::new(14, 14)]
    );
}

#[test]
fn test_board_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());

    for idx in 0..TOTAL_CELLS {
        let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(Pos::from_index(idx), stone);
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count() as usize, TOTAL_CELLS);
}
