use clap::Parser;

/// climate-plate — backend that scores the environmental impact of a plate.
#[derive(Parser, Debug)]
#[command(name = "climate_plate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the ingredient catalog JSON file.
    #[arg(short, long, default_value = "data/ingredients.json")]
    pub catalog: String,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,
}
