//! Command-line front end
//!
//! Stands in for the list, detail, map and settings screens: each command
//! reads from [`AppState`] and prints what the matching screen would show.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::app::AppState;
use crate::catalog::CatalogStatus;
use crate::map::{self, MapFocus, MapMarker};
use crate::theme::Theme;
use crate::types::{Character, CharacterId};

#[derive(Debug, Parser)]
#[command(name = "marvel-roster", version, about = "Browse Marvel characters, favorites and theme")]
pub struct Cli {
    /// Config file (default: <config dir>/marvel-roster/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep storage in memory for this run only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List characters, starring favorites
    List,
    /// Show one character's details
    Show { id: CharacterId },
    /// Map camera for a character, or the city overview with every marker
    Locate { id: Option<CharacterId> },
    /// Add, remove or toggle a favorite
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// List favorite ids
    Favorites,
    /// Show or toggle the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Remove every stored favorite and the theme flag
    ClearStorage,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum FavoriteAction {
    Add { id: CharacterId },
    Remove { id: CharacterId },
    Toggle { id: CharacterId },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
}

impl Command {
    /// Whether the command reads the character catalog
    pub fn needs_catalog(&self) -> bool {
        matches!(self, Command::List | Command::Show { .. } | Command::Locate { .. })
    }
}

#[derive(Serialize)]
struct ListEntry<'a> {
    #[serde(flatten)]
    character: &'a Character,
    favorite: bool,
}

#[derive(Serialize)]
struct ThemeView {
    theme: Theme,
    switch_label: &'static str,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Run one command against an initialized state
pub async fn run(cli: &Cli, app: &AppState) -> Result<()> {
    if cli.command.needs_catalog() {
        app.startup().await;
        if let CatalogStatus::Failed { reason } = app.catalog.status() {
            bail!("Could not load characters: {reason}");
        }
    } else {
        app.restore_preferences().await;
    }

    match &cli.command {
        Command::List => list(cli, app),
        Command::Show { id } => show(cli, app, *id),
        Command::Locate { id } => locate(cli, app, *id),
        Command::Favorite { action } => favorite(cli, app, *action).await,
        Command::Favorites => {
            let ids = app.favorites.ids();
            if cli.json {
                return print_json(&ids);
            }
            if ids.is_empty() {
                println!("No favorites yet");
            }
            for id in ids {
                println!("{id}");
            }
            Ok(())
        }
        Command::Theme { action } => theme(cli, app, action.unwrap_or(ThemeAction::Show)).await,
        Command::ClearStorage => {
            app.clear_storage().await.context("Failed to clear storage")?;
            println!("Storage cleared");
            Ok(())
        }
    }
}

fn list(cli: &Cli, app: &AppState) -> Result<()> {
    let snapshot = app.catalog.snapshot();
    let entries: Vec<_> = snapshot
        .characters
        .iter()
        .map(|character| ListEntry {
            character,
            favorite: app.favorites.is_favorite(character.id),
        })
        .collect();

    if cli.json {
        return print_json(&entries);
    }
    for entry in entries {
        let star = if entry.favorite { "★" } else { " " };
        println!("{star} {:>2}  {}", entry.character.id, entry.character.name);
    }
    Ok(())
}

fn lookup(app: &AppState, id: CharacterId) -> Result<Character> {
    app.catalog
        .get(id)
        .with_context(|| format!("No character with id {id} (catalog has {})", app.catalog.len()))
}

fn show(cli: &Cli, app: &AppState, id: CharacterId) -> Result<()> {
    let character = lookup(app, id)?;
    if cli.json {
        return print_json(&character);
    }
    println!("Name: {}", character.name);
    println!("Description: {}", character.description);
    println!("Comics: {}", character.comics_count);
    println!("Series: {}", character.series_count);
    println!("Events: {}", character.events_count);
    println!("Image: {}", character.image_url);
    if app.favorites.is_favorite(id) {
        println!("★ Favorite");
    }
    Ok(())
}

#[derive(Serialize)]
struct OverviewView {
    focus: MapFocus,
    markers: Vec<MapMarker>,
}

fn locate(cli: &Cli, app: &AppState, id: Option<CharacterId>) -> Result<()> {
    let Some(id) = id else {
        let view = OverviewView {
            focus: MapFocus::overview(),
            markers: map::markers(&app.catalog.snapshot().characters),
        };
        if cli.json {
            return print_json(&view);
        }
        println!("Overview");
        print_focus(&view.focus);
        for marker in &view.markers {
            println!(
                "{:>2}  {} at {} ({:.6}, {:.6})",
                marker.id,
                marker.name,
                marker.place.unwrap_or("-"),
                marker.latitude,
                marker.longitude
            );
        }
        return Ok(());
    };

    let character = lookup(app, id)?;
    let focus = MapFocus::for_character(Some(&character));
    if cli.json {
        return print_json(&focus);
    }
    match focus.place {
        Some(place) => println!("{} is at {place}", character.name),
        None => println!("{}", character.name),
    }
    print_focus(&focus);
    Ok(())
}

fn print_focus(focus: &MapFocus) {
    println!("Center: {:.6}, {:.6}", focus.latitude, focus.longitude);
    println!("Altitude: {}", focus.altitude);
}

async fn favorite(cli: &Cli, app: &AppState, action: FavoriteAction) -> Result<()> {
    let (id, now_favorite) = match action {
        FavoriteAction::Add { id } => {
            app.favorites.add(id).await.context("Failed to save favorite")?;
            (id, true)
        }
        FavoriteAction::Remove { id } => {
            app.favorites.remove(id).await.context("Failed to remove favorite")?;
            (id, false)
        }
        FavoriteAction::Toggle { id } => {
            let now = app.favorites.toggle(id).await.context("Failed to update favorite")?;
            (id, now)
        }
    };

    if cli.json {
        return print_json(&serde_json::json!({ "id": id, "favorite": now_favorite }));
    }
    if now_favorite {
        println!("Added favorite {id}");
    } else {
        println!("Removed favorite {id}");
    }
    Ok(())
}

async fn theme(cli: &Cli, app: &AppState, action: ThemeAction) -> Result<()> {
    if let ThemeAction::Toggle = action {
        // Best effort: a failed write keeps the current theme
        if let Err(e) = app.theme.toggle().await {
            tracing::error!(error = %e, "Failed to persist theme");
        }
    }

    let current = app.theme.theme();
    if cli.json {
        return print_json(&ThemeView {
            theme: current,
            switch_label: current.switch_label(),
        });
    }
    println!("Current Theme: {}", current.label());
    println!("Switch: {}", current.switch_label());
    Ok(())
}
