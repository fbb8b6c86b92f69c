//! End-to-end agent behaviour on small boards.

use blob_agents::{Agent, AntState, DumbScouter, FsmAnt, Gatherer, SensingScouter};
use blob_core::{BlobConfig, Cell, MAX_INTENSITY};
use blob_test_utils::{lean_config, AgentHarness, TestBoardBuilder};
use proptest::prelude::*;

fn chebyshev(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[test]
fn starving_ant_walks_to_food_and_eats_it_all() {
    let board = TestBoardBuilder::new(5, 5).food(4, 4, 10.0).build();
    let mut h = AgentHarness::new(board, BlobConfig::default(), 1).know_board_food();
    let mut ant = FsmAnt::new(Cell::new(2, 2), &h.knowledge.config);
    ant.set_stored(0.0);
    ant.update(&mut h.ctx());
    assert_eq!(ant.state(), AntState::Starving);

    for _ in 0..10 {
        if !h.knowledge.knows_food(Cell::new(4, 4)) {
            break;
        }
        h.tick(&mut ant);
    }
    assert_eq!(ant.position(), Cell::new(4, 4));
    assert_eq!(h.board.food(4, 4), Some(0.0));
    assert_eq!(h.knowledge.food_count(), 0);
    assert_eq!(ant.stored(), 10.0);
}

#[test]
fn only_food_source_refills_to_minimum_in_one_update() {
    let board = TestBoardBuilder::new(6, 6).food(3, 3, 100.0).build();
    let mut h = AgentHarness::new(board, BlobConfig::default(), 2).know_board_food();
    assert_eq!(h.knowledge.food_count(), 1);
    let mut ant = FsmAnt::new(Cell::new(3, 3), &h.knowledge.config);
    ant.set_stored(0.0);
    ant.update(&mut h.ctx());
    assert!(ant.stored() >= h.knowledge.config.harvesting.min);
    assert_eq!(ant.state(), AntState::Scouting);
}

#[test]
fn lean_ant_starves_after_ten_updates() {
    let board = TestBoardBuilder::new(4, 4).build();
    let mut h = AgentHarness::new(board, lean_config(), 3);
    let mut ant = FsmAnt::new(Cell::new(1, 1), &h.knowledge.config);
    let mut updates = 0;
    while ant.state() == AntState::Scouting && updates < 100 {
        ant.update(&mut h.ctx());
        updates += 1;
    }
    assert_eq!(updates, 10);
}

#[test]
fn saturated_board_costs_the_ant_nothing() {
    let board = TestBoardBuilder::new(4, 4)
        .trail_everywhere(MAX_INTENSITY)
        .build();
    let mut h = AgentHarness::new(board, BlobConfig::default(), 4);
    let mut ant = FsmAnt::new(Cell::new(1, 1), &h.knowledge.config);
    let reserve = ant.stored();
    for _ in 0..20 {
        h.tick(&mut ant);
    }
    assert_eq!(ant.stored(), reserve);
    assert_eq!(ant.state(), AntState::Scouting);
    assert_eq!(h.board.total_intensity(), 100.0);
}

#[test]
fn sensing_scout_leaves_its_own_trail_behind() {
    let board = TestBoardBuilder::new(9, 9).build();
    let mut h = AgentHarness::new(board, BlobConfig::default(), 4);
    let mut scout = SensingScouter::new(Cell::new(4, 4), &h.knowledge.config);
    let mut visited = vec![scout.position()];
    for _ in 0..20 {
        h.tick(&mut scout);
        visited.push(scout.position());
    }
    let distinct = {
        let mut v = visited.clone();
        v.sort();
        v.dedup();
        v.len()
    };
    assert!(distinct > 5, "scout kept revisiting: {visited:?}");
}

#[test]
fn gatherer_reaches_food_beyond_its_sightline() {
    let board = TestBoardBuilder::new(30, 1)
        .trail_row(0, 200.0)
        .food(29, 0, 50.0)
        .build();
    let mut config = BlobConfig::default();
    config.gathering.sightline = 3;
    let mut h = AgentHarness::new(board, config, 5).know_board_food();
    let mut gatherer = Gatherer::new(Cell::ORIGIN, &h.knowledge.config);
    for _ in 0..60 {
        let before = gatherer.position();
        gatherer.step(&mut h.ctx());
        assert!(gatherer.position().x > before.x, "stalled at {before}");
        if gatherer.position() == Cell::new(29, 0) {
            break;
        }
    }
    assert_eq!(gatherer.position(), Cell::new(29, 0));
}

proptest! {
    #[test]
    fn ant_stays_on_board_with_bounded_reserve(seed in any::<u64>(), w in 1u32..12, h in 1u32..12) {
        let board = TestBoardBuilder::new(w, h).food(0, 0, 40.0).build();
        let mut harness = AgentHarness::new(board, BlobConfig::default(), seed).know_board_food();
        let start = Cell::new((w / 2) as i32, (h / 2) as i32);
        let mut ant = FsmAnt::new(start, &harness.knowledge.config);
        let max = harness.knowledge.config.harvesting.max;
        for _ in 0..60 {
            let before = ant.position();
            harness.tick(&mut ant);
            let after = ant.position();
            prop_assert!(harness.board.inside(after.x, after.y));
            prop_assert!(chebyshev(before, after) <= 1);
            prop_assert!(ant.stored() >= 0.0 && ant.stored() <= max);
        }
    }

    #[test]
    fn random_walk_never_jumps(seed in any::<u64>()) {
        let board = TestBoardBuilder::new(5, 5).build();
        let mut harness = AgentHarness::new(board, BlobConfig::default(), seed);
        let mut scout = DumbScouter::new(Cell::new(2, 2), 1.0);
        for _ in 0..50 {
            let before = scout.position();
            harness.tick(&mut scout);
            prop_assert!(chebyshev(before, scout.position()) <= 1);
        }
    }
}
