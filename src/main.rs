use clap::{Parser, Subcommand};
use enigma::cli::{convert_file, generate_keysheet, show_info, ConvertOptions, KeysheetOptions};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("ENIGMA_VERSION");
const PROFILE: &str = env!("ENIGMA_PROFILE");
const GIT_HASH: &str = env!("ENIGMA_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "enigma")]
#[command(author, about = "Generalized rotor cipher machine", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encipher or decipher a file of settings and message lines
    #[command(alias = "c")]
    Convert {
        /// Rotor catalog (JSON); defaults to the built-in catalog
        #[arg(long)]
        config: Option<PathBuf>,

        /// Keep spaces in place instead of five-letter groups
        #[arg(long)]
        raw: bool,

        /// Input file
        input: PathBuf,

        /// Output file (stdout if omitted)
        output: Option<PathBuf>,
    },

    /// Show the machine and rotor catalog
    #[command(alias = "i")]
    Info {
        /// Rotor catalog (JSON); defaults to the built-in catalog
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate random daily settings
    #[command(alias = "k")]
    Keysheet {
        /// Rotor catalog (JSON); defaults to the built-in catalog
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of settings lines
        #[arg(long, default_value = "1")]
        days: usize,

        /// Plugboard cables per line
        #[arg(long, default_value = "10")]
        plugs: usize,

        /// Seed for a reproducible sheet
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("enigma {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Convert {
            config,
            raw,
            input,
            output,
        } => {
            let options = ConvertOptions { config, raw };
            convert_file(&input, output.as_deref(), &options).map(|text| match output {
                Some(path) => println!("Converted {} to {}", input.display(), path.display()),
                None => print!("{}", text),
            })
        }

        Commands::Info { config } => show_info(config.as_deref()).map(|info| print!("{}", info)),

        Commands::Keysheet {
            config,
            days,
            plugs,
            seed,
        } => {
            let options = KeysheetOptions {
                config,
                days,
                plugs,
                seed,
            };
            generate_keysheet(&options).map(|sheet| {
                for settings in sheet {
                    println!("{}", settings);
                }
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
