use super::*;

#[test]
fn color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
    assert_eq!(Color::Empty.opponent(), Color::Empty);
}

#[test]
fn color_sign() {
    assert_eq!(Color::Black.sign(), 1);
    assert_eq!(Color::White.sign(), -1);
    assert_eq!(Color::Empty.sign(), 0);
}

#[test]
fn pos_new() {
    let pos = Pos::new(9, 9);
    assert_eq!(pos.x, 9);
    assert_eq!(pos.y, 9);
}

#[test]
fn pos_conversion() {
    let pos = Pos::new(9, 9); // center
    assert_eq!(pos.to_index(), 9 * 19 + 9);
    assert_eq!(pos.to_index(), 180);

    let pos2 = Pos::from_index(180);
    assert_eq!(pos2.x, 9);
    assert_eq!(pos2.y, 9);
}

#[test]
fn pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(18, 18));
    assert!(Pos::is_valid(9, 9));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(19, 0));
    assert!(!Pos::is_valid(0, 19));
}

#[test]
fn board_constants() {
    assert_eq!(BOARD_SIZE, 19);
    assert_eq!(TOTAL_CELLS, 361);
}

#[test]
fn pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 18).to_index(), 18);
    assert_eq!(Pos::new(18, 0).to_index(), 342);
    assert_eq!(Pos::new(18, 18).to_index(), 360);
}

#[test]
fn capture_conservation() {
    // Scenario 1 from spec §8: +1@(9,9), -1@(9,10), -1@(9,11), +1@(9,12)
    // captures the two White stones in between.
    let b = Board::empty();
    let b = b.after_move(Pos::new(9, 9), Color::Black, &[], 0);
    let b = b.after_move(Pos::new(9, 10), Color::White, &[], 0);
    let b = b.after_move(Pos::new(9, 11), Color::White, &[], 0);
    let captured = [Pos::new(9, 10), Pos::new(9, 11)];
    let b = b.after_move(Pos::new(9, 12), Color::Black, &captured, 0);

    assert_eq!(b.captures(Color::Black), 1);
    assert!(b.is_empty(Pos::new(9, 10)));
    assert!(b.is_empty(Pos::new(9, 11)));
    assert_eq!(b.get(Pos::new(9, 9)), Color::Black);
    assert_eq!(b.get(Pos::new(9, 12)), Color::Black);
}
