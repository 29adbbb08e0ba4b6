mod display;
mod interactive;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use powerball_core::config::{load_config, save_config, PredictorConfig};
use powerball_core::dataset::historical_draws;
use powerball_core::frequency::FrequencyTable;
use powerball_core::state::PredictorState;

use crate::display::{display_draws, display_state, display_stats};

#[derive(Parser)]
#[command(name = "powerball", about = "Prédicteur PowerBall par fréquence historique")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Générer une prédiction (numéros les plus fréquents)
    Predict {
        /// Nombre de numéros à prédire (défaut: configuration, sinon 5)
        #[arg(short, long)]
        top: Option<usize>,

        /// Fichier de configuration JSON
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Lister les tirages historiques
    Draws,

    /// Afficher la table des fréquences
    Stats,

    /// Mode interactif (générer / réinitialiser)
    Interactive {
        /// Nombre de numéros à prédire (défaut: configuration, sinon 5)
        #[arg(short, long)]
        top: Option<usize>,

        /// Fichier de configuration JSON
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Écrire la configuration par défaut
    InitConfig {
        /// Fichier de sortie
        #[arg(short, long, default_value = "powerball.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Predict { top, config } => {
            let config = resolve_config(config.as_deref(), top)?;
            cmd_predict(&config)
        }
        Command::Draws => {
            display_draws(&historical_draws());
            Ok(())
        }
        Command::Stats => cmd_stats(),
        Command::Interactive { top, config } => {
            let config = resolve_config(config.as_deref(), top)?;
            interactive::run_interactive(&config.title, &historical_draws(), config.top_k)
        }
        Command::InitConfig { output } => {
            save_config(&PredictorConfig::default(), &output)?;
            println!("Configuration écrite dans {}", output.display());
            Ok(())
        }
    }
}

fn resolve_config(path: Option<&Path>, top: Option<usize>) -> Result<PredictorConfig> {
    let mut config = match path {
        Some(p) => load_config(p)?,
        None => PredictorConfig::default(),
    };
    if let Some(k) = top {
        config.top_k = k;
    }
    Ok(config)
}

fn cmd_predict(config: &PredictorConfig) -> Result<()> {
    println!("{} : prédiction des {} numéros les plus fréquents", config.title, config.top_k);
    let state = PredictorState::default().generate(&historical_draws(), config.top_k);
    display_state(&state);
    Ok(())
}

fn cmd_stats() -> Result<()> {
    let draws = historical_draws();
    if draws.is_empty() {
        println!("Aucun tirage historique.");
        return Ok(());
    }
    let table = FrequencyTable::from_draws(&draws);
    display_stats(&table.stats(), draws.len());
    Ok(())
}
