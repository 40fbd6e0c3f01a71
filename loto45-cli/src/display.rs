use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::view::{Band, HistoryRow, StatCell};
use loto45_db::models::Draw;

fn band_color(band: Band) -> Color {
    match band {
        Band::Yellow => Color::Yellow,
        Band::Blue => Color::Blue,
        Band::Red => Color::Red,
        Band::Grey => Color::Grey,
        Band::Green => Color::Green,
    }
}

fn numbers_cell(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Aucune grille à afficher.");
        return;
    }

    println!("\n🎲 Grilles générées\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Grille", "Numéros", "Bonus", "Heure"]);

    for (i, draw) in draws.iter().enumerate() {
        let label = char::from(b'A' + i as u8);
        table.add_row(vec![
            Cell::new(label),
            Cell::new(numbers_cell(&draw.numbers)),
            Cell::new(format!("+{:2}", draw.bonus)).fg(band_color(Band::from_number(draw.bonus))),
            Cell::new(&draw.time),
        ]);
    }

    println!("{table}");
}

pub fn display_history(rows: &[HistoryRow]) {
    if rows.is_empty() {
        println!("Historique vide.");
        return;
    }

    println!("\n🕘 Historique ({} dernières grilles)\n", rows.len());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Heure", "Numéros", "Bonus"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.time),
            Cell::new(numbers_cell(&row.numbers)),
            Cell::new(format!("+{:2}", row.bonus)).fg(band_color(Band::from_number(row.bonus))),
        ]);
    }

    println!("{table}");
}

pub fn display_stats(cells: &[StatCell]) {
    println!("\n📊 Fréquences par numéro\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Plage", "Tirages"]);

    let mut sorted = cells.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));

    for cell in &sorted {
        table.add_row(vec![
            Cell::new(format!("{:2}", cell.number)).fg(band_color(cell.band)),
            Cell::new(cell.band.range_label()),
            Cell::new(cell.count.to_string()),
        ]);
    }

    println!("{table}");
}

pub fn display_reset_summary() {
    println!("Historique et fréquences effacés.");
}
