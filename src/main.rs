use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tap_rally::app::{run, GameController};
use tap_rally::config::GameSettings;
use tap_rally::platform::{SaveFileStore, TerminalGuard};

fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = GameSettings::load().context("loading settings")?;
    let store = SaveFileStore::new(settings.state_path.clone());

    let mut controller = match store.load() {
        Ok(Some(snapshot)) => GameController::from_snapshot(settings, snapshot),
        Ok(None) => GameController::new(settings),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable save file");
            GameController::new(settings)
        }
    };

    let mut guard = TerminalGuard::new().context("setting up the terminal")?;
    let result = run(&mut controller, &mut guard);
    drop(guard);

    // Mirror the save-state lifecycle: keep the snapshot only when a
    // round was interrupted mid-countdown.
    let snapshot = controller.snapshot();
    if snapshot.round_active {
        store.store(&snapshot).context("saving game state")?;
        tracing::debug!(score = snapshot.score, "saved mid-round state");
    } else {
        store.remove().context("clearing game state")?;
    }

    result.context("running the game")?;
    Ok(())
}

/// Logging goes to stderr and stays silent unless `RUST_LOG` asks for
/// more, so it never scribbles over the game screen.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tap_rally=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
