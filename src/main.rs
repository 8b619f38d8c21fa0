//! Stable Match - Binary Entry Point
//!
//! Generates shuffled preferences for both sides, runs the engine and prints
//! the final partners of each side.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use stable_match::config::{LogFormat, Settings};
use stable_match::{MatchError, MatchOutcome, MatchingEngine, ShuffledPreferences};

fn main() {
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    init_logging(&settings.logging.level, &settings.logging.format);

    let outcome = match run(settings.matching.size, settings.matching.seed) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Matching failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome.ensure_complete() {
        error!("{}", e);
    }

    let receipt = &outcome.receipt;
    println!("{}", outcome.matching);
    println!();
    println!("  Proposals:      {:>8}", receipt.proposals);
    println!("  Rejections:     {:>8}", receipt.rejections);
    println!("  Displacements:  {:>8}", receipt.displacements);
    if let Some(ratio) = receipt.offers_per_proposer() {
        println!("  Offers/proposer:{:>8}", ratio.round_dp(2));
    }
    println!("  Stable:         {:>8}", outcome.is_stable());
    println!("  State root:     {}", receipt.state_root_hex());
}

fn run(size: usize, seed: Option<u64>) -> Result<MatchOutcome, MatchError> {
    let mut proposer_rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    // Responder stream is derived from the proposer stream so one seed covers both
    let responder_rng = ChaCha8Rng::seed_from_u64(proposer_rng.gen());
    info!(size, ?seed, "generating preferences");

    MatchingEngine::new(
        size,
        ShuffledPreferences::new(proposer_rng),
        ShuffledPreferences::new(responder_rng),
    )?
    .run()
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match LogFormat::parse(format) {
        Some(LogFormat::Compact) => subscriber.compact().init(),
        Some(LogFormat::Json) => subscriber.json().init(),
        Some(LogFormat::Pretty) => subscriber.pretty().init(),
        None => {
            subscriber.pretty().init();
            warn!(format, "unknown log format, using pretty");
        }
    }
}
