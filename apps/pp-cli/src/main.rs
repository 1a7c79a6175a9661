use clap::{Parser, Subcommand};
use pp_factory::{logging, packager, updater, UpdateConfig, CURRENT_VERSION};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "PyPack Factory")]
#[command(version = CURRENT_VERSION)]
#[command(about = "Package Python scripts into standalone executables with PyInstaller")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package one script (prompts for anything not given)
    Pack {
        #[arg(short, long)]
        script: Option<String>,

        #[arg(short, long)]
        output: Option<String>,

        /// Produce a folder with supporting files instead of a single executable
        #[arg(long, default_value_t = false)]
        no_onefile: bool,

        /// Keep the console window of the packaged program
        #[arg(long, default_value_t = false)]
        console: bool,

        /// Packaging tool executable
        #[arg(short, long)]
        tool: Option<String>,
    },

    /// Compare the installed version against the latest release
    CheckUpdate,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            script,
            output,
            no_onefile,
            console,
            tool,
        } => {
            let args = packager::PackArgs {
                script_path: script,
                output_dir: output,
                one_file: !no_onefile,
                windowed: !console,
                tool,
            };
            if let Err(e) = packager::run_cli(args) {
                eprintln!("❌ Packaging Error: {}", e);
                return ExitCode::FAILURE;
            }
        }

        Commands::CheckUpdate => {
            if let Err(e) = updater::run_update_cli(UpdateConfig::default()) {
                eprintln!("❌ Update Check Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
