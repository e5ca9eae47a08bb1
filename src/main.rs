use clap::Parser;

use pfb_export::cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let output = args.command.run(args.format)?;
    println!("{}", output);
    Ok(())
}
