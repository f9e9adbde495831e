use clap::Parser;
use curry_ladder::cli::Cli;

fn main() -> Result<(), String> {
    env_logger::init();
    let cli = Cli::parse();
    let script = std::env::args_os()
        .next()
        .map(|s| s.to_string_lossy().into_owned());
    curry_ladder::run(&cli, script).map_err(|e| e.to_string())?;
    Ok(())
}
