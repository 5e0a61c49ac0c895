use std::fmt::Write as _;

use anyhow::Context;
use chrono::Utc;

use stockroom_core::Entity;
use stockroom_inventory::{Inventory, Item, LogEntry};

use crate::command::{Command, HELP};

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show; keep reading commands.
    Continue(String),
    Quit,
}

/// A console session over a single inventory.
#[derive(Debug)]
pub struct Session {
    inventory: Inventory,
}

impl Session {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Run `cmd`. Domain errors come back as `Err` with the inventory unchanged.
    pub fn execute(&mut self, cmd: Command) -> anyhow::Result<Outcome> {
        let text = match cmd {
            Command::Add { id, fields } => {
                let item = Item::from_fields(id, fields)?;
                self.inventory.add_item(item)?;
                format!("added item {id}")
            }
            Command::Update { id, fields } => {
                self.inventory.update_item(id, fields)?;
                format!("updated item {id}")
            }
            Command::Delete(id) => {
                let removed = self.inventory.delete_item(id)?;
                format!("deleted item {id} ({})", removed.name())
            }
            Command::Find(id) => match self.inventory.locate(id) {
                Some(item) => format!(
                    "found [{}] {} | qty: {} | price: {}",
                    self.inventory.lookup_mode().as_str(),
                    item.name(),
                    item.qty(),
                    item.price()
                ),
                None => format!("item {id} not found"),
            },
            Command::Mode(mode) => {
                let mode = match mode {
                    Some(m) => {
                        self.inventory.set_lookup_mode(m);
                        m
                    }
                    None => self.inventory.toggle_lookup_mode(),
                };
                format!("lookup mode: {}", mode.as_str())
            }
            Command::Sort { field, ascending } => {
                self.inventory.sort_by(field, ascending)?;
                self.render_table()
            }
            Command::Undo => describe_undo(&self.inventory.undo()?),
            Command::Alerts => {
                let alerts = self.inventory.low_stock_alerts();
                if alerts.is_empty() {
                    "no low-stock items".to_string()
                } else {
                    let mut out = format!("{} low-stock item(s):", alerts.len());
                    for a in alerts.iter() {
                        let _ = write!(out, "\n  {} {} (qty {})", a.id, a.name, a.qty);
                    }
                    out
                }
            }
            Command::Count => format!("total items in inventory: {}", self.inventory.count()),
            Command::List => self.render_table(),
            Command::Export => self
                .inventory
                .export_snapshot(Utc::now())
                .to_json_pretty()
                .context("failed to export inventory snapshot")?,
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(text))
    }

    /// Rows in list order; low-stock rows are flagged with `!`.
    fn render_table(&self) -> String {
        let threshold = self.inventory.low_stock_threshold();
        let mut out = format!("   {:>6}  {:<24} {:>5} {:>10}", "ID", "NAME", "QTY", "PRICE");
        for item in self.inventory.items() {
            let flag = if item.is_low_stock(threshold) { '!' } else { ' ' };
            let _ = write!(
                out,
                "\n{flag}  {:>6}  {:<24} {:>5} {:>10.2}",
                item.id(),
                item.name(),
                item.qty(),
                item.price()
            );
        }
        let _ = write!(out, "\ntotal items in inventory: {}", self.inventory.count());
        out
    }
}

fn describe_undo(entry: &LogEntry) -> String {
    match entry {
        LogEntry::Added { item } => format!("undid add of item {}", item.id()),
        LogEntry::Deleted { item } => format!("undid delete of item {}", item.id()),
        LogEntry::Updated { id, .. } => format!("undid update of item {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{DomainError, ItemId};

    fn session() -> Session {
        Session::new(Inventory::new())
    }

    fn run(session: &mut Session, line: &str) -> anyhow::Result<String> {
        let cmd = Command::parse(line)?.expect("non-blank line");
        match session.execute(cmd)? {
            Outcome::Continue(text) => Ok(text),
            Outcome::Quit => Ok("<quit>".to_string()),
        }
    }

    #[test]
    fn add_find_undo() {
        let mut s = session();
        assert_eq!(run(&mut s, "add 105 12 899 Keyboard").unwrap(), "added item 105");
        assert_eq!(
            run(&mut s, "find 105").unwrap(),
            "found [hash] Keyboard | qty: 12 | price: 899"
        );
        assert_eq!(run(&mut s, "undo").unwrap(), "undid add of item 105");
        assert_eq!(run(&mut s, "find 105").unwrap(), "item 105 not found");
    }

    #[test]
    fn domain_errors_surface_and_keep_state() {
        let mut s = session();
        run(&mut s, "add 1 5 1 Cable").unwrap();
        let err = run(&mut s, "add 1 9 9 Other").unwrap_err();
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::DuplicateId(ItemId::new(1).unwrap()))
        );
        assert!(run(&mut s, "undo").is_ok());
        let err = run(&mut s, "undo").unwrap_err();
        assert_eq!(err.downcast_ref::<DomainError>(), Some(&DomainError::EmptyLog));
    }

    #[test]
    fn list_flags_low_stock_rows() {
        let mut s = session();
        run(&mut s, "add 1 5 1 Cable").unwrap();
        run(&mut s, "add 2 50 1 Mouse").unwrap();
        let table = run(&mut s, "list").unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with(' ') && lines[1].contains("Mouse"));
        assert!(lines[2].starts_with('!') && lines[2].contains("Cable"));
        assert_eq!(lines[3], "total items in inventory: 2");
    }

    #[test]
    fn mode_toggle_and_alerts() {
        let mut s = session();
        assert_eq!(run(&mut s, "mode").unwrap(), "lookup mode: binary");
        assert_eq!(run(&mut s, "alerts").unwrap(), "no low-stock items");
        run(&mut s, "add 40 5 3299 Hard Drive 1TB").unwrap();
        assert_eq!(
            run(&mut s, "alerts").unwrap(),
            "1 low-stock item(s):\n  40 Hard Drive 1TB (qty 5)"
        );
        assert_eq!(run(&mut s, "quit").unwrap(), "<quit>");
    }

    #[test]
    fn export_is_json() {
        let mut s = session();
        run(&mut s, "add 7 1 2.5 Tripod").unwrap();
        let json = run(&mut s, "export").unwrap();
        assert!(json.contains("\"exported_at\""));
        assert!(json.contains("\"name\": \"Tripod\""));
    }
}
