//! Wordpass CLI
//!
//! Prints memorable passphrases built from random dictionary words.

use clap::Parser;
use std::io;
use tracing::warn;
use wordpass::{
    app,
    interactive::TerminalPrompt,
    logging,
    random::{PassphraseRng, WeakRngPolicy},
    Cli, Error,
};

fn main() {
    // Initialize logging; stdout is reserved for passphrases
    logging::init();

    // Ctrl-C is a cancellation, not a failure
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!();
        std::process::exit(0);
    }) {
        warn!("Failed to install Ctrl-C handler: {}", e);
    }

    let cli = Cli::parse();

    let status = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            if !e.is_cancelled() {
                eprintln!("{}", e);
            }
            e.exit_code()
        }
    };

    std::process::exit(status);
}

fn run(cli: Cli) -> Result<(), Error> {
    let file_config = cli.load_file_config()?;
    let settings = cli.into_settings(file_config);

    let policy = WeakRngPolicy::from_flag_and_env(settings.allow_weak_rng);
    let mut rng = PassphraseRng::with_policy(policy)?;

    tracing::debug!(
        version = wordpass::VERSION,
        strength = ?rng.strength(),
        secure = rng.is_secure(),
        "Starting passphrase generation"
    );

    let mut prompt = TerminalPrompt::stdio();
    app::run(&settings, &mut rng, &mut io::stdout(), &mut prompt)
}
