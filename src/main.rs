//! This crate contains the source code for the binary for the game labyrunner.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{
    eyre::{Result, WrapErr as _},
    install,
};
use labyrunner::{
    config::Config, logging, maze::MazeGenerator, session::GameSession, types::SessionState, App,
};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    config.validate()?;
    logging::init(&config).wrap_err("failed to set up logging")?;

    let seed = config.seed();
    log::info!("generating {}x{} maze with seed {seed}", config.cols, config.rows);
    if !config.goal_is_carvable() {
        log::warn!("even maze dimensions leave the goal cell uncarved");
    }
    let grid = MazeGenerator::new(seed).generate(config.cols, config.rows)?;
    log::debug!("generated maze:\n{grid}");

    let session = GameSession::new(&grid)?;

    let mut terminal = ratatui::init();
    let outcome = App::new(session, &config).run(&mut terminal);
    ratatui::restore();

    if outcome? == SessionState::Won {
        println!("You reached the goal!");
    }

    Ok(())
}
