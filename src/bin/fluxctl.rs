use clap::{Parser, Subcommand};
use flux_prompt_proxy::enrich::{classify, enrich};
use flux_prompt_proxy::{Config, FluxClient, GenerationParams};

#[derive(Parser, Debug)]
#[command(name = "fluxctl", about = "CLI for FLUX Prompt Proxy", version)]
struct Cli {
    /// Override FLUX_SPACE_URL
    #[arg(global = true, long)]
    space_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the prompt enrichment locally and print the result
    Enrich {
        /// Raw prompt text
        prompt: String,
        /// Also print the detected category flags
        #[arg(long)]
        flags: bool,
    },
    /// Enrich a prompt and generate an image via the FLUX Space
    Generate {
        /// Raw prompt text
        prompt: String,
        /// Send the prompt as-is, skipping enrichment
        #[arg(long)]
        raw: bool,
        /// Seed
        #[arg(long)]
        seed: Option<i64>,
        /// Disable seed randomization on the Space
        #[arg(long)]
        no_randomize_seed: bool,
        /// Width
        #[arg(long)]
        width: Option<u32>,
        /// Height
        #[arg(long)]
        height: Option<u32>,
        /// Inference steps
        #[arg(long)]
        steps: Option<u32>,
        /// Output the raw artifact JSON instead of just the URL
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = Config::new().expect("Failed to load config");
    if let Some(url) = cli.space_url {
        conf.flux_space_url = url;
    }

    match cli.command {
        Commands::Enrich { prompt, flags } => {
            if flags {
                eprintln!("{:#?}", classify(&prompt));
            }
            println!("{}", enrich(Some(&prompt)));
            Ok(())
        }
        Commands::Generate {
            prompt, raw,
            seed, no_randomize_seed, width, height, steps,
            json,
        } => {
            let text = if raw { prompt } else { enrich(Some(&prompt)) };

            let mut params = GenerationParams::default();
            if let Some(v) = seed { params.seed = v; }
            if no_randomize_seed { params.randomize_seed = false; }
            if let Some(v) = width { params.width = v; }
            if let Some(v) = height { params.height = v; }
            if let Some(v) = steps { params.num_inference_steps = v; }

            let client = FluxClient::new(conf.flux_space_url.clone());
            eprintln!("Generating \"{}\" via {}", text, conf.flux_space_url);
            match client.generate(&text, &params).await {
                Ok(image) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&image)?);
                    } else if let Some(url) = image.get("url").and_then(|v| v.as_str()) {
                        println!("{}", url);
                    } else {
                        println!("{}", serde_json::to_string_pretty(&image)?);
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
