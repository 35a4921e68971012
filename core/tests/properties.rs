use fieldsweep_core::*;
use proptest::prelude::*;
use std::collections::{BTreeSet, VecDeque};

#[derive(Copy, Clone, Debug)]
enum Command {
    Click(Coord2),
    RightClick(Coord2),
}

fn board_config() -> impl Strategy<Value = BoardConfig> {
    (1..=16u16, 1..=16u16, 0.0..=0.5f64)
        .prop_map(|(columns, rows, chance)| BoardConfig::new(columns, rows, chance).unwrap())
}

fn commands(config: BoardConfig) -> impl Strategy<Value = Vec<Command>> {
    let coords = (0..config.columns, 0..config.rows);
    let command = prop_oneof![
        coords.clone().prop_map(Command::Click),
        coords.prop_map(Command::RightClick),
    ];
    prop::collection::vec(command, 0..40)
}

fn scenario() -> impl Strategy<Value = (BoardConfig, u64, Vec<Command>)> {
    board_config().prop_flat_map(|config| (Just(config), any::<u64>(), commands(config)))
}

fn all_coords<S>(board: &Board<S>) -> impl Iterator<Item = Coord2> + use<S> {
    let (columns, rows) = board.config().size();
    (0..rows).flat_map(move |row| (0..columns).map(move |col| (col, row)))
}

fn brute_force_number<S>(board: &Board<S>, (col, row): Coord2) -> i32 {
    let (columns, rows) = board.config().size();
    let mut count = 0;
    for dr in -1i32..=1 {
        for dc in -1i32..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let c = i32::from(col) + dc;
            let r = i32::from(row) + dr;
            if c < 0 || r < 0 || c >= i32::from(columns) || r >= i32::from(rows) {
                continue;
            }
            if board.is_mine((c as Coord, r as Coord)) {
                count += 1;
            }
        }
    }
    count
}

/// Cells zero-connected to `start` plus every cell bordering one of them.
fn zero_region_and_rim<S>(board: &Board<S>, start: Coord2) -> BTreeSet<Coord2> {
    let bounds = board.config().size();
    let mut region = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(coords) = queue.pop_front() {
        for neighbor in NeighborIter::new(coords, bounds) {
            if board.calculate_field_number(neighbor) == 0 && region.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    let mut expected = region.clone();
    for &coords in &region {
        expected.extend(NeighborIter::new(coords, bounds));
    }
    expected
}

proptest! {
    #[test]
    fn mine_count_matches_cells((config, seed, commands) in scenario()) {
        let mut board = Board::generated(config, RngSource::seeded(seed)).unwrap();
        let count = |board: &Board<_>| all_coords(board).filter(|&c| board.is_mine(c)).count();
        let initial = count(&board);
        prop_assert_eq!(board.mine_count(), initial);

        for command in commands {
            match command {
                Command::Click(coords) => { board.handle_click_on_field(coords).unwrap(); }
                Command::RightClick(coords) => { board.handle_right_click_on_field(coords).unwrap(); }
            }
            board.check_and_update_has_won();
            prop_assert_eq!(board.mine_count(), initial);
            prop_assert_eq!(count(&board), initial);
        }
    }

    #[test]
    fn flags_never_exceed_mines((config, seed, commands) in scenario()) {
        let mut board = Board::generated(config, RngSource::seeded(seed)).unwrap();

        for command in commands {
            match command {
                Command::Click(coords) => { board.handle_click_on_field(coords).unwrap(); }
                Command::RightClick(coords) => { board.handle_right_click_on_field(coords).unwrap(); }
            }
            prop_assert!(board.flag_count() <= board.mine_count());
            prop_assert!(board.get_mine_count_for_visual() >= 0);
        }
    }

    #[test]
    fn clicking_a_flag_changes_nothing((config, seed, commands) in scenario()) {
        let mut board = Board::generated(config, RngSource::seeded(seed)).unwrap();
        for command in commands {
            if let Command::RightClick(coords) = command {
                board.handle_right_click_on_field(coords).unwrap();
            }
        }

        let flagged: Vec<_> = all_coords(&board).filter(|&c| board.is_flagged(c)).collect();
        for coords in flagged {
            let before: Vec<_> = all_coords(&board).map(|c| board.is_revealed(c)).collect();
            let outcome = board.handle_click_on_field(coords).unwrap();
            let after: Vec<_> = all_coords(&board).map(|c| board.is_revealed(c)).collect();
            prop_assert_eq!(outcome, RevealOutcome::NoChange);
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn loss_reveals_everything((config, seed, commands) in scenario()) {
        let mut board = Board::generated(config, RngSource::seeded(seed)).unwrap();

        for command in commands {
            let outcome = match command {
                Command::Click(coords) => board.handle_click_on_field(coords).unwrap(),
                Command::RightClick(coords) => {
                    board.handle_right_click_on_field(coords).unwrap();
                    RevealOutcome::NoChange
                }
            };
            if outcome == RevealOutcome::HitMine {
                prop_assert_eq!(board.state(), BoardState::Lost);
                prop_assert!(!board.has_won());
                prop_assert!(all_coords(&board).all(|c| board.is_revealed(c)));
                let hit = board.hit_mine_index().unwrap();
                prop_assert!(board.is_crossed(board.coords_of(hit)));
            }
            if board.has_won() {
                prop_assert!(board.is_game_over());
            }
        }
    }

    #[test]
    fn field_numbers_match_brute_force((config, seed) in (board_config(), any::<u64>())) {
        let board = Board::generated(config, RngSource::seeded(seed)).unwrap();

        for coords in all_coords(&board) {
            let number = board.calculate_field_number(coords);
            if board.is_mine(coords) {
                prop_assert_eq!(number, -1);
            } else {
                prop_assert!((0..=8).contains(&number));
                prop_assert_eq!(number, brute_force_number(&board, coords));
            }
        }
    }

    #[test]
    fn flood_fill_opens_exactly_zero_region_and_rim((config, seed) in (board_config(), any::<u64>())) {
        let mut board = Board::generated(config, RngSource::seeded(seed)).unwrap();
        let Some(start) = all_coords(&board).find(|&c| board.calculate_field_number(c) == 0) else {
            return Ok(());
        };
        let expected = zero_region_and_rim(&board, start);

        board.handle_click_on_field(start).unwrap();

        let revealed: BTreeSet<_> = all_coords(&board).filter(|&c| board.is_revealed(c)).collect();
        prop_assert!(revealed.iter().all(|&c| !board.is_mine(c)));
        prop_assert_eq!(revealed, expected);
    }
}

#[test]
fn empty_board_opens_in_one_click() {
    let config = BoardConfig::new(40, 40, 0.0).unwrap();
    let mut board = Board::generated(config, RngSource::seeded(11)).unwrap();

    board.handle_click_on_field((20, 20)).unwrap();

    assert!(all_coords(&board).all(|c| board.is_revealed(c)));
    assert!(board.check_and_update_has_won());
}

#[test]
fn reset_with_same_seed_differs_from_first_game() {
    let config = BoardConfig::default();
    let mut board = Board::generated(config, RngSource::seeded(2024)).unwrap();
    let first = board.layout().clone();

    board.reset_board();

    assert!(board.is_board_generated());
    assert_eq!(board.flag_count(), 0);
    assert!(all_coords(&board).all(|c| !board.is_revealed(c)));
    assert_ne!(board.layout(), &first);

    let mut replay = Board::generated(config, RngSource::seeded(2024)).unwrap();
    assert_eq!(replay.layout(), &first);
    replay.reset_board();
    assert_eq!(replay.layout(), board.layout());
}

#[test]
fn snapshot_of_lost_game_shows_all_mines() {
    let config = BoardConfig::new(8, 8, 0.3).unwrap();
    let mut board = Board::generated(config, RngSource::seeded(77)).unwrap();
    let mine = all_coords(&board).find(|&c| board.is_mine(c)).unwrap();

    board.handle_click_on_field(mine).unwrap();
    let snapshot = BoardSnapshot::capture(&mut board).unwrap();

    assert_eq!(snapshot.state, BoardState::Lost);
    assert_eq!(snapshot.cell_at(mine), Some(CellView::Crossed));
    assert!(snapshot.cells.iter().all(|cell| *cell != CellView::Hidden));
}
