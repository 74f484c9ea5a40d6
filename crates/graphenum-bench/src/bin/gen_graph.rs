//! Writes a generated graph document to stdout.
//!
//! Usage: `gen-graph [tiny|small|medium|large] [SEED]`. Defaults to the
//! small tier with seed 42. The output feeds straight into `graphenum`.

use std::error::Error;
use std::io::Write as _;

use graphenum_bench::{SizeTier, generate_input};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let tier = match args.next().as_deref() {
        None | Some("small") => SizeTier::Small,
        Some("tiny") => SizeTier::Tiny,
        Some("medium") => SizeTier::Medium,
        Some("large") => SizeTier::Large,
        Some(other) => return Err(format!("unknown tier {other:?}").into()),
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 42,
    };

    let input = generate_input(&tier.config(seed));
    eprintln!(
        "Generated {} edges over {} vertices",
        input.edges.len(),
        tier.config(seed).num_vertices
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &input)?;
    writeln!(out)?;
    Ok(())
}
