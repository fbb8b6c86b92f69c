//! Headless colony run.
//!
//! Builds the reference colony, runs it with an experimenter who drops
//! food and cleans half the board now and then, prints progress, and saves
//! the final session to a temporary directory.
//!
//! Set `RUST_LOG=debug` (or `trace`) to watch discoveries, spawns and
//! retargets.

use blob_bench::reference_profile;
use blob_board::BoardRegion;
use blob_core::DEFAULT_FOOD;
use blob_engine::{save_session, Player, SessionFiles};
use blob_snapshot::board_hash;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    println!("=== Blob Headless Run ===\n");

    let mut colony = reference_profile(42).expect("default configuration is valid");
    let mut player = Player::new();

    for tick in 1..=500u32 {
        let report = colony.step();

        if tick % 100 == 0 {
            let region = player.next_clean_region().opposite();
            let placed = player.scatter_food(&mut colony, 5, region, DEFAULT_FOOD);
            tracing::info!(tick, placed, ?region, "food scattered");
        }
        if tick == 250 {
            let cleaned = player.clean_board(&mut colony);
            tracing::info!(tick, ?cleaned, "half board cleaned");
        }

        if tick % 50 == 0 {
            let stats = colony.stats();
            let (top, bottom) = player.blob_cover(&colony);
            println!(
                "tick {:>4}: agents={:>3} target={:>3} food={:>2} cover={:>5.1}% \
                 (top {:>5.1}%, bottom {:>5.1}%) trail={:>5.2}% died={}",
                stats.tick.0,
                stats.agents,
                stats.target_population,
                stats.known_food,
                stats.coverage,
                top,
                bottom,
                stats.total_intensity,
                report.died,
            );
        }
    }

    let region = BoardRegion::Whole;
    println!(
        "\nfinal coverage {:.1}%, board hash {:#018x}",
        colony.board().coverage(region),
        board_hash(colony.board())
    );

    let dir = std::env::temp_dir().join("blob-headless");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("cannot create {}: {e}", dir.display());
        return;
    }
    let files = SessionFiles::new(&dir, "headless");
    match save_session(&files, &colony, &player) {
        Ok(()) => println!("session saved to {}", dir.display()),
        Err(e) => eprintln!("save failed: {e}"),
    }
}
