use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use powerball_core::models::Draw;
use powerball_core::state::PredictorState;

use crate::display::display_state;

#[derive(Debug, Clone, Copy, PartialEq)]
enum InteractiveCommand {
    Generate,
    Reset,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "generer" | "générer" | "generate" | "gen" => Some(InteractiveCommand::Generate),
        "2" | "reinitialiser" | "réinitialiser" | "reset" | "r" => Some(InteractiveCommand::Reset),
        "3" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu(title: &str, state: &PredictorState) {
    println!();
    println!("── {} ──", title);
    println!("  1. generer        Générer une prédiction");
    // Réinitialisation proposée seulement quand une prédiction est affichée
    if state.can_reset() {
        println!("  2. reinitialiser  Effacer la prédiction");
    }
    println!("  3. quitter        Quitter");
    println!();
}

/// `None` en fin d'entrée (EOF / Ctrl+D).
fn read_command(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn prompt(msg: &str) -> Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    read_command(&mut io::stdin().lock())
}

/// Applique une commande à l'état. Retourne `false` quand la session doit s'arrêter.
/// La réinitialisation n'a d'effet que si une prédiction est affichée.
fn handle_command(
    state: PredictorState,
    cmd: InteractiveCommand,
    draws: &[Draw],
    top_k: usize,
) -> (PredictorState, bool) {
    match cmd {
        InteractiveCommand::Generate => (state.generate(draws, top_k), true),
        InteractiveCommand::Reset if state.can_reset() => (state.reset(), true),
        InteractiveCommand::Reset => (state, true),
        InteractiveCommand::Quit => (state, false),
    }
}

pub fn run_interactive(title: &str, draws: &[Draw], top_k: usize) -> Result<()> {
    println!("Bienvenue dans le prédicteur {} !", title);

    let mut state = PredictorState::default();

    loop {
        display_menu(title, &state);
        let Some(input) = prompt("> ")? else {
            break;
        };

        if input.is_empty() {
            continue;
        }

        let Some(cmd) = parse_command(&input) else {
            println!("Commande inconnue : '{}'. Tapez un numéro (1-3) ou un nom de commande.", input);
            continue;
        };

        let could_reset = state.can_reset();
        let (next, keep_going) = handle_command(state, cmd, draws, top_k);
        state = next;

        match cmd {
            InteractiveCommand::Quit => println!("Au revoir !"),
            InteractiveCommand::Generate => display_state(&state),
            InteractiveCommand::Reset if could_reset => println!("Prédiction effacée."),
            InteractiveCommand::Reset => println!("Aucune prédiction à effacer."),
        }

        if !keep_going {
            break;
        }
    }

    Ok(())
}
