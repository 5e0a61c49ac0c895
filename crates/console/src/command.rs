use anyhow::{Context, bail};

use stockroom_core::ItemId;
use stockroom_inventory::{ItemFields, LookupMode, SortField};

/// One console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { id: ItemId, fields: ItemFields },
    Update { id: ItemId, fields: ItemFields },
    Delete(ItemId),
    Find(ItemId),
    /// `None` toggles the current mode.
    Mode(Option<LookupMode>),
    Sort { field: SortField, ascending: bool },
    Undo,
    Alerts,
    Count,
    List,
    Export,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add <id> <qty> <price> <name...>     insert a new item at the head
  update <id> <qty> <price> <name...>  overwrite an item's fields
  delete <id>                          remove an item
  find <id>                            look an item up (current mode)
  mode [hash|binary]                   set or toggle the lookup mode
  sort <price|qty> [asc|desc]          reorder the inventory
  undo                                 revert the last add/update/delete
  alerts                               list low-stock items
  count                                number of items
  list                                 show all items
  export                               print a JSON snapshot
  help | quit";

impl Command {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let (id, fields) = parse_item(&rest)?;
                Command::Add { id, fields }
            }
            "update" => {
                let (id, fields) = parse_item(&rest)?;
                Command::Update { id, fields }
            }
            "delete" | "rm" => Command::Delete(parse_id(&rest)?),
            "find" | "search" => Command::Find(parse_id(&rest)?),
            "mode" => match rest.first() {
                None => Command::Mode(None),
                Some(raw) => Command::Mode(Some(raw.parse()?)),
            },
            "sort" => {
                let field: SortField = rest
                    .first()
                    .context("usage: sort <price|qty> [asc|desc]")?
                    .parse()?;
                let ascending = match rest.get(1).map(|s| s.to_ascii_lowercase()) {
                    None => field != SortField::Price,
                    Some(dir) if dir == "asc" => true,
                    Some(dir) if dir == "desc" => false,
                    Some(other) => bail!("unknown sort direction '{other}'"),
                };
                Command::Sort { field, ascending }
            }
            "undo" => Command::Undo,
            "alerts" => Command::Alerts,
            "count" => Command::Count,
            "list" | "ls" => Command::List,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(Some(cmd))
    }
}

fn parse_id(args: &[&str]) -> anyhow::Result<ItemId> {
    let raw = args.first().context("missing item id")?;
    Ok(raw.parse()?)
}

fn parse_item(args: &[&str]) -> anyhow::Result<(ItemId, ItemFields)> {
    if args.len() < 4 {
        bail!("usage: <id> <qty> <price> <name...>");
    }
    let id = parse_id(args)?;
    let qty: u32 = args[1]
        .parse()
        .with_context(|| format!("invalid quantity '{}'", args[1]))?;
    let price: f64 = args[2]
        .parse()
        .with_context(|| format!("invalid price '{}'", args[2]))?;
    let fields = ItemFields::new(args[3..].join(" "), qty, price)?;
    Ok((id, fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn add_joins_multi_word_names() {
        match parse("add 212 7 2499 SSD 256GB") {
            Command::Add { id, fields } => {
                assert_eq!(id.get(), 212);
                assert_eq!(fields, ItemFields::new("SSD 256GB", 7, 2499.0).unwrap());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn add_rejects_bad_input() {
        assert!(Command::parse("add 0 1 1 Zero").is_err());
        assert!(Command::parse("add 5 -1 1 Neg").is_err());
        assert!(Command::parse("add 5 1 -3 Neg").is_err());
        assert!(Command::parse("add 5 1 1").is_err());
    }

    #[test]
    fn sort_direction_defaults() {
        assert_eq!(
            parse("sort price"),
            Command::Sort { field: SortField::Price, ascending: false }
        );
        assert_eq!(
            parse("sort qty"),
            Command::Sort { field: SortField::Qty, ascending: true }
        );
        assert_eq!(
            parse("sort qty desc"),
            Command::Sort { field: SortField::Qty, ascending: false }
        );
        assert!(Command::parse("sort qty sideways").is_err());
    }

    #[test]
    fn mode_with_and_without_argument() {
        assert_eq!(parse("mode"), Command::Mode(None));
        assert_eq!(parse("mode binary"), Command::Mode(Some(LookupMode::BinarySearch)));
        assert!(Command::parse("mode linear").is_err());
    }

    #[test]
    fn unknown_verb_is_an_error() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }
}
