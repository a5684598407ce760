use clap::Parser; // trait import enables BlochCli::parse()

use blochview::cli::{BlochCli, Command};
use blochview::config::Settings;
use blochview::{commands, logging, tui};

fn main() -> anyhow::Result<()> {
    let args = BlochCli::parse();
    logging::init(args.verbose);

    let settings = Settings::load(&args.config)?;

    match args.cmd {
        Some(Command::State { state, json }) => commands::state::main(state, json, &settings),
        Some(Command::Gates) => commands::gates::main(),
        Some(Command::Export { state, view, out }) => {
            commands::export::main(state, view.into(), out, &settings)
        }
        // no subcommand opens the interactive view
        Some(Command::Tui) | None => tui::run_tui(&settings),
    }
}
