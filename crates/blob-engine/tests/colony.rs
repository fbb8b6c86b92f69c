//! Whole-colony behaviour over many ticks.

use blob_agents::AntState;
use blob_board::Board;
use blob_core::{BlobConfig, Cell};
use blob_engine::{BlobManager, Player};
use blob_snapshot::board_hash;
use blob_test_utils::TestBoardBuilder;
use proptest::prelude::*;

fn seeded_colony(seed: u64) -> BlobManager {
    let board = TestBoardBuilder::new(30, 30)
        .trail(15, 15, 100.0)
        .food(15, 15, 100.0)
        .food(3, 25, 100.0)
        .build();
    BlobManager::new(board, BlobConfig::default(), seed).unwrap()
}

#[test]
fn same_seed_same_history() {
    let mut a = seeded_colony(42);
    let mut b = seeded_colony(42);
    for _ in 0..50 {
        assert_eq!(a.step(), b.step());
        assert_eq!(board_hash(a.board()), board_hash(b.board()));
    }
    let pa: Vec<Cell> = a.agents().map(|v| v.position).collect();
    let pb: Vec<Cell> = b.agents().map(|v| v.position).collect();
    assert_eq!(pa, pb);
}

#[test]
fn different_seeds_diverge() {
    let mut a = seeded_colony(1);
    let mut b = seeded_colony(2);
    for _ in 0..30 {
        a.step();
        b.step();
    }
    assert_ne!(board_hash(a.board()), board_hash(b.board()));
}

#[test]
fn colony_spreads_trail() {
    let mut m = seeded_colony(9);
    let start = m.stats().coverage;
    for _ in 0..100 {
        m.step();
    }
    let stats = m.stats();
    assert!(stats.coverage > start);
    assert!(stats.total_intensity > 0.0);
    assert_eq!(stats.agents, m.agent_count());
    assert!(stats.agents >= BlobConfig::default().scouters.min);
}

#[test]
fn buried_food_is_discovered() {
    let board = TestBoardBuilder::new(12, 12)
        .trail(6, 6, 100.0)
        .food(6, 6, 1000.0)
        .food(7, 6, 1000.0)
        .food(6, 7, 1000.0)
        .food(7, 7, 1000.0)
        .build();
    let mut m = BlobManager::new(board, BlobConfig::default(), 5).unwrap();
    assert_eq!(m.knowledge().food_count(), 1);
    let mut discovered = 0;
    for _ in 0..200 {
        discovered += m.step().discovered;
    }
    assert!(discovered > 0);
    assert!(m.knowledge().food_count() > 1);
}

#[test]
fn stuck_agents_are_replaced() {
    // A 1×1 board: nobody can ever move.
    let mut m = BlobManager::new(Board::new(1, 1), BlobConfig::default(), 0).unwrap();
    let before: Vec<_> = m.agents().map(|a| a.id).collect();
    let report = m.step();
    assert_eq!(report.died, before.len());
    assert_eq!(report.replaced, before.len());
    let after: Vec<_> = m.agents().map(|a| a.id).collect();
    assert_eq!(after.len(), before.len());
    assert!(after.iter().all(|id| !before.contains(id)));
}

#[test]
fn experimenter_session_flow() {
    let mut m = seeded_colony(3);
    let mut player = Player::new();
    assert!(player.place_food(&mut m, 0, 0, 2, 50.0));
    for _ in 0..20 {
        m.step();
    }
    player.clean_board(&mut m);
    let (top, _) = player.blob_cover(&m);
    assert_eq!(top, 0.0);
    assert!(m.agents().all(|a| a.position.y >= 15));
    assert!(m
        .agents()
        .all(|a| matches!(a.state, AntState::Scouting | AntState::Starving)));
}

proptest! {
    #[test]
    fn tick_invariants_hold(seed in any::<u64>(), w in 2u32..16, h in 2u32..16) {
        let board = TestBoardBuilder::new(w, h).trail(0, 0, 50.0).food(0, 0, 30.0).build();
        let mut m = BlobManager::new(board, BlobConfig::default(), seed).unwrap();
        for _ in 0..25 {
            m.step();
            let floor = m.knowledge().config.scouters.min;
            prop_assert!(m.agent_count() >= floor);
            prop_assert_eq!(m.agent_count(), m.knowledge().target_population());
            for agent in m.agents() {
                prop_assert!(m.board().inside(agent.position.x, agent.position.y));
            }
            for (cell, state) in m.board().cells() {
                prop_assert!((0.0..=255.0).contains(&state.intensity), "{cell}");
                prop_assert!(state.food >= 0.0);
            }
            for &food in m.knowledge().known_food() {
                prop_assert!(m.board().has_food(food.x, food.y));
            }
        }
    }
}
