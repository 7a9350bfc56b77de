//! Neo Key Generator CLI
//!
//! Usage:
//!   neo_keygen                      # Print one fresh keypair
//!   neo_keygen -n 5                 # Print five keypairs
//!   neo_keygen -p Neo -t contains   # Search for an address containing "neo"
//!   neo_keygen -p AN -s xyz -c      # Prefix "AN" and suffix "xyz", case sensitive

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use neo_keygen::{Config, KeyPair, NetworkProfile, Pattern, VanityResult, WorkerPool};

fn main() {
    init_tracing();
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let profile = match config.profile() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let outcome = if config.is_search() {
        search(&config, profile);
        Ok(())
    } else {
        generate(config.count, profile)
    };

    if let Err(e) = outcome {
        error!(error = %e, "key generation failed");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn generate(count: usize, profile: NetworkProfile) -> neo_keygen::crypto::Result<()> {
    for index in 1..=count {
        let keypair = KeyPair::generate_with(&mut rand::thread_rng(), profile)?;

        println!("=== Key #{} ===", index);
        println!("Address:     {}", keypair.address());
        println!("WIF:         {}", keypair.wif());
        println!("Private Key: {}", keypair.private_key_hex());
        println!("Public Key:  {}", keypair.compressed_public_key_hex());
        println!("Script:      {}", keypair.script());
        println!("Script Hash: {}", keypair.script_hash());
        println!();
    }
    Ok(())
}

fn search(config: &Config, profile: NetworkProfile) {
    let pattern = match config.suffix.as_deref() {
        Some(suffix) => Pattern::new_prefix_and_suffix(
            config.pattern.clone().unwrap_or_default(),
            suffix,
            config.case_sensitive,
        ),
        None => Pattern::new(
            config.pattern.clone().unwrap_or_default(),
            config.effective_pattern_type(),
            config.case_sensitive,
        ),
    };

    let pool = WorkerPool::new(config.worker_count(), pattern, profile);
    ctrlc_handler(pool.stop_flag_clone());

    let pattern = pool.pattern();
    println!("Neo Vanity Address Search");
    println!("=========================");
    println!("Network:    {}", profile);
    match pattern.suffix() {
        Some(suffix) => println!(
            "Pattern:    {} ... {} ({})",
            pattern.pattern(),
            suffix,
            pattern.pattern_type()
        ),
        None => println!("Pattern:    {} ({})", pattern.pattern(), pattern.pattern_type()),
    }
    println!("Difficulty: {}", pattern.difficulty_description());
    println!("Workers:    {}", pool.num_workers());
    println!("Target:     {} address(es)", config.count);
    println!();

    println!("Searching... (Press Ctrl+C to stop)\n");

    let mut found = 0;
    let report_interval = Duration::from_secs(config.report_interval);

    loop {
        match pool.wait_for_result(report_interval) {
            Some(result) => {
                found += 1;
                print_result(&result, found);

                if config.count > 0 && found >= config.count {
                    println!("\nTarget reached! Found {} address(es).", found);
                    break;
                }
            }
            None => print_progress(&pool),
        }

        if pool.is_stopped() {
            println!("\nStopped.");
            break;
        }
    }

    println!("\n--- Final Statistics ---");
    println!("Total keys generated: {}", format_number(pool.total_keys()));
    println!("Total matches found:  {}", pool.total_matches());
    println!("Time elapsed:         {:.2}s", pool.elapsed().as_secs_f64());
    println!(
        "Average speed:        {}/s",
        format_number(pool.keys_per_second() as u64)
    );

    info!(keys = pool.total_keys(), matches = found, "search finished");
    pool.join();
}

fn print_result(result: &VanityResult, index: usize) {
    println!("=== Match #{} ===", index);
    println!("Address:     {}", result.address);
    println!("WIF:         {}", result.wif);
    println!("Private Key: {}", result.private_key);
    println!("Script Hash: {}", result.script_hash);
    println!("Worker:      {}", result.worker_id);
    println!();
}

fn print_progress(pool: &WorkerPool) {
    let keys = pool.total_keys();
    let rate = pool.keys_per_second();
    let elapsed = pool.elapsed().as_secs();

    println!(
        "[{:>4}s] Generated {} keys ({}/s)",
        elapsed,
        format_number(keys),
        format_number(rate as u64)
    );
}

fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn ctrlc_handler(stop_flag: Arc<AtomicBool>) {
    if let Err(e) = ctrlc::set_handler(move || {
        stop_flag.store(true, Ordering::Relaxed);
    }) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }
}
