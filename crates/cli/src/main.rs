use clap::Parser;
use owner_lines_cli::args::Args;
use owner_lines_cli::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    owner_lines_cli::logging::init();

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Application Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match owner_lines_cli::app::run(&config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        // walk/serialize/write failures are reported on stdout and still exit 0
        Err(e) if e.is_run_failure() => {
            println!("{e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
