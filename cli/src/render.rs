//! Plain-text and JSON rendering of query results.

use pokedex_core::types::{Ability, CollectionId, Element, Pokemon, RecordId};
use pokedex_search::QueryResults;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

pub(crate) fn print_view(
    out: &mut impl Write,
    results: &QueryResults<'_>,
    view: CollectionId,
) -> io::Result<()> {
    match view {
        CollectionId::Pokemon => print_pokemon(out, results.pokemon, results.elements),
        CollectionId::Elements => print_elements(out, results.elements),
        CollectionId::Abilities => print_abilities(out, results.abilities, results.pokemon),
    }
}

fn print_pokemon(
    out: &mut impl Write,
    pokemon: &[Arc<Pokemon>],
    elements: &[Arc<Element>],
) -> io::Result<()> {
    if pokemon.is_empty() {
        return writeln!(out, "No Pokemon found.");
    }

    let element_names = names_by_id(elements.iter().map(|e| (e.id, e.name.as_str())));
    writeln!(out, "Pokemon ({})", pokemon.len())?;
    for p in pokemon {
        let element = element_names.get(&p.element_id).copied().unwrap_or("?");
        writeln!(
            out,
            "  #{:<4} {:<16} HP {:>3}  {}",
            p.id.into_inner(),
            p.name.as_str(),
            p.hp,
            element
        )?;
    }
    Ok(())
}

fn print_elements(out: &mut impl Write, elements: &[Arc<Element>]) -> io::Result<()> {
    if elements.is_empty() {
        return writeln!(out, "No elements found.");
    }

    writeln!(out, "Elements ({})", elements.len())?;
    for e in elements {
        writeln!(out, "  #{:<4} {:<16} {}", e.id.into_inner(), e.name.as_str(), e.color)?;
    }
    Ok(())
}

fn print_abilities(
    out: &mut impl Write,
    abilities: &[Arc<Ability>],
    pokemon: &[Arc<Pokemon>],
) -> io::Result<()> {
    if abilities.is_empty() {
        return writeln!(out, "No abilities found.");
    }

    let owners = names_by_id(pokemon.iter().map(|p| (p.id, p.name.as_str())));
    writeln!(out, "Abilities ({})", abilities.len())?;
    for a in abilities {
        let owner = owners.get(&a.pokemon_id).copied().unwrap_or("?");
        writeln!(
            out,
            "  #{:<4} {:<16} {:>3} ({})  {}",
            a.id.into_inner(),
            a.name.as_str(),
            a.power,
            a.power_level(),
            owner
        )?;
    }
    Ok(())
}

fn names_by_id<'a>(rows: impl Iterator<Item = (RecordId, &'a str)>) -> HashMap<RecordId, &'a str> {
    rows.collect()
}

/// Serializes the active collection's matches.
pub(crate) fn to_json(
    results: &QueryResults<'_>,
    view: CollectionId,
) -> serde_json::Result<String> {
    match view {
        CollectionId::Pokemon => serde_json::to_string_pretty(&unwrap_arcs(results.pokemon)),
        CollectionId::Elements => serde_json::to_string_pretty(&unwrap_arcs(results.elements)),
        CollectionId::Abilities => serde_json::to_string_pretty(&unwrap_arcs(results.abilities)),
    }
}

fn unwrap_arcs<R>(items: &[Arc<R>]) -> Vec<&R> {
    items.iter().map(Arc::as_ref).collect()
}
