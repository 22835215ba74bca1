use day6::{
    Direction, Error, Laboratory, LoopCriterion, PatrolConfig, PatrolEnd, Position, Tile,
    DEFAULT_MAX_STEPS,
};

const EXAMPLE: &str = include_str!("example.txt");

const COLUMN: &str = "...\n...\n...\n.^.\n";

fn lab(text: &str) -> Laboratory {
    Laboratory::try_from(text).unwrap()
}

#[test]
fn turning_right_four_times_is_identity() {
    for dir in [Direction::Up, Direction::Right, Direction::Down, Direction::Left] {
        assert_eq!(dir.turn_right().turn_right().turn_right().turn_right(), dir);
        assert_ne!(dir.turn_right(), dir);
    }
}

#[test]
fn straight_line_visits_cells_up_to_border() {
    let lab = lab(COLUMN);
    let patrol = lab.patrol(DEFAULT_MAX_STEPS);

    assert_eq!(patrol.end(), PatrolEnd::Exited);
    assert_eq!(patrol.visited_n(), 3);
    for r in 0..3 {
        assert!(patrol.visited().contains(&Position::new(r, 1)));
    }
}

#[test]
fn guard_facing_off_the_edge_never_moves() {
    let lab = lab("..^..\n.....\n");
    let patrol = lab.patrol(DEFAULT_MAX_STEPS);

    assert_eq!(patrol.end(), PatrolEnd::Exited);
    assert_eq!(patrol.visited_n(), 0);
}

#[test]
fn example_visits_41_positions() {
    let lab = lab(EXAMPLE);
    assert_eq!(lab.guard().pos(), &Position::new(6, 4));
    assert_eq!(lab.guard().dir(), Direction::Up);
    assert_eq!((lab.row_n(), lab.col_n()), (10, 10));

    let patrol = lab.patrol(DEFAULT_MAX_STEPS);
    assert_eq!(patrol.end(), PatrolEnd::Exited);
    assert_eq!(patrol.visited_n(), 41);
}

#[test]
fn repeated_patrols_are_identical() {
    let lab = lab(EXAMPLE);
    let first = lab.patrol(DEFAULT_MAX_STEPS);
    let second = lab.patrol(DEFAULT_MAX_STEPS);

    assert_eq!(first.visited(), second.visited());
    assert_eq!(first.end(), second.end());
}

#[test]
fn example_has_six_loop_positions() {
    let mut lab = lab(EXAMPLE);
    let positions = lab.loop_positions(&PatrolConfig::default());

    assert_eq!(positions.len(), 6);
    assert!(positions.contains(&Position::new(6, 3)));
    assert!(positions
        .windows(2)
        .all(|w| (w[0].r(), w[0].c()) < (w[1].r(), w[1].c())));
}

#[test]
fn loop_search_leaves_laboratory_untouched() {
    let mut lab = lab(EXAMPLE);
    let before = lab.patrol(DEFAULT_MAX_STEPS);
    lab.loop_positions(&PatrolConfig::default());

    for r in 0..lab.row_n() {
        for c in 0..lab.col_n() {
            assert_ne!(lab.tile(&Position::new(r, c)), Some(Tile::TempWall));
        }
    }
    assert_eq!(lab.patrol(DEFAULT_MAX_STEPS).visited(), before.visited());
}

#[test]
fn obstruction_off_the_path_changes_nothing() {
    let mut lab = lab(COLUMN);
    let baseline = lab.patrol(DEFAULT_MAX_STEPS);

    let trial = lab.obstruct(&Position::new(0, 0)).unwrap();
    assert_eq!(trial.tile(trial.pos()), Some(Tile::TempWall));
    let obstructed = trial.patrol(DEFAULT_MAX_STEPS);
    assert_eq!(obstructed.visited(), baseline.visited());
}

#[test]
fn obstruction_is_removed_on_drop() {
    let mut lab = lab(COLUMN);
    let pos = Position::new(1, 1);
    {
        let trial = lab.obstruct(&pos).unwrap();
        assert_eq!(trial.patrol(DEFAULT_MAX_STEPS).visited_n(), 2);
    }

    assert_eq!(lab.tile(&pos), Some(Tile::Empty));
    assert_eq!(lab.patrol(DEFAULT_MAX_STEPS).visited_n(), 3);
}

#[test]
fn only_free_tiles_can_be_obstructed() {
    let mut lab = lab("#..\n.^.\n");

    assert!(lab.obstruct(&Position::new(0, 0)).is_none());
    assert!(lab.obstruct(&Position::new(1, 1)).is_none());
    assert!(lab.obstruct(&Position::new(2, 0)).is_none());
    assert!(lab.obstruct(&Position::new(0, 1)).is_some());
}

#[test]
fn enclosed_guard_spins_into_a_loop() {
    let lab = lab(".#.\n#^#\n.#.\n");
    let patrol = lab.patrol(DEFAULT_MAX_STEPS);

    assert_eq!(patrol.end(), PatrolEnd::Looped);
    assert_eq!(patrol.visited_n(), 0);
}

#[test]
fn budget_bounds_forward_moves() {
    let lab = lab(COLUMN);
    let patrol = lab.patrol(1);

    assert_eq!(patrol.end(), PatrolEnd::BudgetExhausted);
    assert_eq!(patrol.visited_n(), 1);
}

#[test]
fn truncated_visits_counts_shortened_patrols() {
    let mut lab = lab(COLUMN);
    let truncated = lab.loop_positions(&PatrolConfig {
        max_steps: DEFAULT_MAX_STEPS,
        criterion: LoopCriterion::TruncatedVisits,
    });
    assert_eq!(truncated, vec![Position::new(1, 1), Position::new(2, 1)]);

    let repeated = lab.loop_positions(&PatrolConfig::default());
    assert!(repeated.is_empty());
}

#[test]
fn truncated_visits_overcounts_example() {
    let mut lab = lab(EXAMPLE);
    let positions = lab.loop_positions(&PatrolConfig {
        max_steps: DEFAULT_MAX_STEPS,
        criterion: LoopCriterion::TruncatedVisits,
    });

    assert_eq!(positions.len(), 40);
    assert!(positions.contains(&Position::new(6, 3)));
}

#[test]
fn first_guard_wins() {
    let lab = lab("^..\n..>\n");

    assert_eq!(lab.guard().pos(), &Position::new(0, 0));
    assert_eq!(lab.guard().dir(), Direction::Up);
    assert_eq!(lab.tile(&Position::new(1, 2)), Some(Tile::Empty));
}

#[test]
fn malformed_layouts_are_rejected() {
    assert!(matches!(
        Laboratory::try_from("....\n.^.\n"),
        Err(Error::InconsistentRow(4, 3))
    ));
    assert!(matches!(
        Laboratory::try_from("..x\n.^.\n"),
        Err(Error::InvalidChar('x'))
    ));
    assert!(matches!(
        Laboratory::try_from("...\n.#.\n"),
        Err(Error::MissingGuard)
    ));
}
