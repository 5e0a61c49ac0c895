use std::io::{self, BufRead, Write};

use anyhow::Context;

use stockroom_console::{Command, Outcome, Session};
use stockroom_inventory::{Inventory, InventoryConfig};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = InventoryConfig::from_env().context("invalid STOCKROOM_* configuration")?;
    let inventory = Inventory::from_config(&config).context("failed to build inventory")?;
    tracing::info!(
        items = inventory.count(),
        undo_capacity = config.undo_capacity,
        alert_capacity = config.alert_capacity,
        low_stock_threshold = config.low_stock_threshold,
        "inventory ready"
    );

    let mut session = Session::new(inventory);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let result = Command::parse(&line).and_then(|cmd| match cmd {
            Some(cmd) => session.execute(cmd).map(Some),
            None => Ok(None),
        });
        match result {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(Outcome::Continue(text))) => writeln!(stdout, "{text}")?,
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(error = %err, "command rejected");
                writeln!(stdout, "error: {err:#}")?;
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}
