//! enigma - command-line front end for the rotor cipher machine.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use enigmacrypt::plug_board::MAX_PLUG_COUNT;
use enigmacrypt::{AvailableReflector, AvailableRotor, Enigma, EnigmaError, MachineConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(version)]
#[command(about = "Emulate Enigma encryption", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available rotors and reflectors
    List,

    /// Encode (or decode) a message
    Encode {
        /// Rotor settings, reflector side first (e.g. "I:A II:A III:A")
        #[arg(short, long)]
        rotors: String,

        /// Reflector setting (e.g. "UKW:A")
        #[arg(short = 's', long)]
        reflector: String,

        /// Plug pairs (e.g. "AB CD")
        #[arg(short, long, default_value = "")]
        plugs: String,

        /// Print the signal path of every letter to stderr
        #[arg(long)]
        debug: bool,

        /// Message to encode
        #[arg(value_name = "MESSAGE")]
        message: String,
    },

    /// Generate random configurations
    Random {
        /// Plugs on the board, 0 to 10 (random if omitted)
        #[arg(short, long)]
        plug_count: Option<usize>,

        /// Number of configurations to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(debug: bool) {
    let default = if debug { "enigmacrypt=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn list() {
    println!("Available rotors:");
    for rotor in AvailableRotor::ALL {
        println!("    {}: {}", rotor, rotor.wiring());
    }
    println!();
    println!("Available reflectors:");
    for reflector in AvailableReflector::ALL {
        println!("    {}: {}", reflector, reflector.wiring());
    }
}

fn encode(
    rotors: &str,
    reflector: &str,
    plugs: &str,
    debug: bool,
    message: &str,
) -> Result<(), EnigmaError> {
    let config = MachineConfig::parse(
        &rotors.to_uppercase(),
        &reflector.to_uppercase(),
        &plugs.to_uppercase(),
    )?
    .with_debug(debug);
    let mut enigma = Enigma::new(&config)?;
    let encoded = enigma.encode_message(message)?;
    for line in enigma.take_trace() {
        eprintln!("{}", line);
    }
    println!("{}", encoded);
    Ok(())
}

fn random(plug_count: Option<usize>, count: usize, seed: Option<u64>) -> Result<(), EnigmaError> {
    match seed {
        Some(seed) => generate(&mut StdRng::seed_from_u64(seed), plug_count, count),
        None => generate(&mut rand::thread_rng(), plug_count, count),
    }
}

fn generate<R: Rng>(
    rng: &mut R,
    plug_count: Option<usize>,
    count: usize,
) -> Result<(), EnigmaError> {
    for _ in 0..count {
        let plugs = plug_count.unwrap_or_else(|| rng.gen_range(0..=MAX_PLUG_COUNT));
        let config = MachineConfig::random_with(rng, plugs)?;
        println!("{}", config);
        println!();
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug = matches!(cli.command, Commands::Encode { debug: true, .. });
    init_tracing(debug);

    let result = match cli.command {
        Commands::List => {
            list();
            Ok(())
        }
        Commands::Encode {
            rotors,
            reflector,
            plugs,
            debug,
            message,
        } => encode(&rotors, &reflector, &plugs, debug, &message),
        Commands::Random {
            plug_count,
            count,
            seed,
        } => random(plug_count, count, seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
