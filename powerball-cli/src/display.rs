use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use powerball_core::models::{Draw, NumberStats};
use powerball_core::state::PredictorState;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = new_table(vec!["#", "Numéros"]);
    for (i, draw) in draws.iter().enumerate() {
        let numbers = draw
            .numbers()
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");
        table.add_row(vec![format!("{}", i + 1), numbers]);
    }
    println!("{table}");
}

pub fn display_stats(stats: &[NumberStats], draw_count: usize) {
    println!("\n📊 Fréquences sur {} tirages\n", draw_count);

    let total: usize = stats.iter().map(|s| s.frequency).sum();
    let mut table = new_table(vec!["Rang", "Numéro", "Fréquence", "Part"]);
    for (i, stat) in stats.iter().enumerate() {
        let share = if total > 0 {
            stat.frequency as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            format!("{}", i + 1),
            format!("{:2}", stat.number),
            stat.frequency.to_string(),
            format!("{:.1} %", share),
        ]);
    }
    println!("{table}");
}

pub fn display_prediction(prediction: &[u32]) {
    println!("\n🎯 Vos numéros prédits :\n");

    let mut table = new_table(vec!["#", "Numéro"]);
    for (i, n) in prediction.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{}", i + 1)),
            Cell::new(format!("{:2}", n)).fg(Color::Green),
        ]);
    }
    println!("{table}");
}

pub fn display_state(state: &PredictorState) {
    if let Some(error) = &state.error {
        println!("Erreur : {}", error);
    }
    if !state.prediction.is_empty() {
        display_prediction(&state.prediction);
    }
}
