//! Line-driven live filter.
//!
//! Plain lines set the query for the active view. Lines starting with `:`
//! are commands. Every catalog change is followed by a sync so the next
//! query never sees a stale trie.

use crate::render;
use pokedex_core::catalog::error::CatalogError;
use pokedex_core::catalog::{Catalog, Stored};
use pokedex_core::types::{Ability, CollectionId, Element, Name, Pokemon, RecordId};
use pokedex_search::SearchIndex;
use std::io::{self, BufRead, Write};
use std::time::SystemTime;

const HELP: &str = "\
  <text>               filter the active view by name prefix
  :view <collection>   switch to pokemon, elements or abilities
  :rm <id>             delete a record from the active view
  :rename <id> <name>  rename a record in the active view
  :help                show this help
  :quit                exit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) struct Session<'a> {
    catalog: &'a mut Catalog,
    index: &'a mut SearchIndex,
    view: CollectionId,
    query: String,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        catalog: &'a mut Catalog,
        index: &'a mut SearchIndex,
        view: CollectionId,
    ) -> Self {
        Self {
            catalog,
            index,
            view,
            query: String::new(),
        }
    }

    pub(crate) fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.show(out)?;
        self.prompt(out)?;

        for line in input.lines() {
            if self.handle(&line?, out)? == Flow::Quit {
                break;
            }
            self.prompt(out)?;
        }
        Ok(())
    }

    pub(crate) fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let Some(command) = line.trim_start().strip_prefix(':') else {
            self.query = line.to_string();
            self.show(out)?;
            return Ok(Flow::Continue);
        };

        let (verb, rest) = command
            .trim()
            .split_once(char::is_whitespace)
            .unwrap_or((command.trim(), ""));
        let rest = rest.trim();

        match verb {
            "q" | "quit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "view" => match rest.parse::<CollectionId>() {
                Ok(view) => {
                    self.view = view;
                    self.query.clear();
                    self.show(out)?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            "rm" => match parse_id(rest) {
                Some(id) => {
                    let outcome = match self.view {
                        CollectionId::Pokemon => self.catalog.delete::<Pokemon>(id).map(drop),
                        CollectionId::Elements => self.catalog.delete::<Element>(id).map(drop),
                        CollectionId::Abilities => self.catalog.delete::<Ability>(id).map(drop),
                    };
                    self.after_change(outcome, out)?;
                }
                None => writeln!(out, "usage: :rm <id>")?,
            },
            "rename" => {
                let (id, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match (parse_id(id), Name::try_new(name)) {
                    (Some(id), Ok(name)) => {
                        let outcome = match self.view {
                            CollectionId::Pokemon => rename::<Pokemon>(self.catalog, id, name),
                            CollectionId::Elements => rename::<Element>(self.catalog, id, name),
                            CollectionId::Abilities => rename::<Ability>(self.catalog, id, name),
                        };
                        self.after_change(outcome, out)?;
                    }
                    (None, _) => writeln!(out, "usage: :rename <id> <name>")?,
                    (_, Err(err)) => writeln!(out, "invalid name: {err}")?,
                }
            }
            other => writeln!(out, "unknown command :{other} (try :help)")?,
        }

        Ok(Flow::Continue)
    }

    fn after_change(
        &mut self,
        outcome: Result<(), CatalogError>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        match outcome {
            Ok(()) => {
                let rebuilt = self.index.sync_catalog(self.catalog);
                tracing::debug!(?rebuilt, "catalog changed");
                self.show(out)
            }
            Err(err) => writeln!(out, "{err}"),
        }
    }

    fn show(&self, out: &mut impl Write) -> io::Result<()> {
        let results = self.index.query(&self.query, self.view);
        render::print_view(out, &results, self.view)
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "[{}] > ", self.view)?;
        out.flush()
    }
}

fn parse_id(text: &str) -> Option<RecordId> {
    text.trim().parse::<u64>().ok().map(RecordId::new)
}

fn rename<R: Stored>(catalog: &mut Catalog, id: RecordId, name: Name) -> Result<(), CatalogError> {
    catalog.rename::<R>(id, name, SystemTime::now()).map(drop)
}
