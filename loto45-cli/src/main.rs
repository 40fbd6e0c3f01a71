mod display;
mod engine;
mod view;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::display::{display_draws, display_history, display_reset_summary, display_stats};
use crate::engine::generate;
use crate::view::{history_view, stats_view};
use loto45_db::store::{db_path, load, migrate, open_db, reset, save};

#[derive(Parser)]
#[command(name = "loto45", about = "Générateur de grilles Loto 6/45")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Générer des grilles aléatoires
    Generate {
        /// Nombre de grilles (ramené dans 1-10)
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Lister les dernières grilles générées
    History {
        /// Nombre de grilles à afficher
        #[arg(short, long, default_value = "15")]
        last: usize,
    },

    /// Afficher les fréquences d'apparition par numéro
    Stats,

    /// Effacer l'historique et les fréquences
    Reset {
        /// Ne pas demander de confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Afficher le chemin de la base de données
    DbPath,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = db_path();
    let conn = open_db(&path)?;
    migrate(&conn)?;

    match cli.command {
        Command::Generate { count, seed } => cmd_generate(&conn, count, seed),
        Command::History { last } => cmd_history(&conn, last),
        Command::Stats => cmd_stats(&conn),
        Command::Reset { yes } => cmd_reset(&conn, yes),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn cmd_generate(conn: &loto45_db::rusqlite::Connection, count: u32, seed: Option<u64>) -> Result<()> {
    let (mut history, mut frequency) = load(conn)?;

    let draws = generate(count, seed);
    for draw in &draws {
        frequency.record(draw);
        history.record(draw.clone());
    }

    save(conn, &history, &frequency)?;

    display_draws(&draws);
    display_history(&history_view(&history, 15));
    display_stats(&stats_view(&frequency));
    Ok(())
}

fn cmd_history(conn: &loto45_db::rusqlite::Connection, last: usize) -> Result<()> {
    let (history, _) = load(conn)?;
    if history.is_empty() {
        println!("Historique vide. Lancez d'abord : loto45 generate");
        return Ok(());
    }
    display_history(&history_view(&history, last));
    Ok(())
}

fn cmd_stats(conn: &loto45_db::rusqlite::Connection) -> Result<()> {
    let (_, frequency) = load(conn)?;
    if frequency.is_empty() {
        println!("Aucune statistique. Lancez d'abord : loto45 generate");
        return Ok(());
    }
    display_stats(&stats_view(&frequency));
    Ok(())
}

fn cmd_reset(conn: &loto45_db::rusqlite::Connection, yes: bool) -> Result<()> {
    if !yes {
        let confirm = prompt("Effacer l'historique et les fréquences ? (o/n) : ")?;
        if confirm.trim().to_lowercase() != "o" {
            println!("Réinitialisation annulée.");
            return Ok(());
        }
    }

    reset(conn)?;
    display_reset_summary();
    Ok(())
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    Ok(input.trim().to_string())
}
