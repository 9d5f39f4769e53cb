//! Draws a holiday gift exchange for one family.
//!
//! Run with `RUST_LOG=info cargo run --example holiday_exchange` to see
//! restart diagnostics.

use tracing_subscriber::EnvFilter;
use u_derange::assign::{AllowedReceivers, AssignConfig, AssignRunner, GroupCoversReceiver, RuleSet};

const KAYLA: &str = "kayla";
const MITCH: &str = "mitch";
const TYLER: &str = "tyler";
const ZACH: &str = "zach";
const ALYSSUM: &str = "alyssum";
const EMMA: &str = "emma";
const SOPHIE: &str = "sophie";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let participants = [KAYLA, MITCH, TYLER, ZACH, ALYSSUM, EMMA, SOPHIE];

    let rules = RuleSet::builder()
        // Kayla or Mitch has Tyler.
        .with_rule(GroupCoversReceiver::new([KAYLA, MITCH], TYLER))
        .with_rule(AllowedReceivers::new(TYLER, [SOPHIE, EMMA]))
        .with_exclusive_pair(ZACH, ALYSSUM)
        .with_exclusive_pair(KAYLA, MITCH)
        .build();

    match AssignRunner::run(&participants, &rules, &AssignConfig::default()) {
        Ok(result) => {
            for (giver, receiver) in result.assignment.iter() {
                println!("{giver} -> {receiver}");
            }
            println!(
                "({} restarts, {} rejected draws)",
                result.restarts, result.rejections
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
