use clap::{Parser, Subcommand};
use image_studio::interaction::DOWNLOAD_FILE_NAME;
use image_studio::{AppResult, Config, ImageSize, Interaction, OpenAIClient, Submission};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imagectl", about = "Generate images from the command line", version)]
struct Cli {
    /// Override OPENAI_BASE_URL
    #[arg(global = true, long)]
    openai_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one image and save it
    Generate {
        /// Description of the desired image
        #[arg(long, value_name = "TEXT")]
        prompt: String,
        /// Image size: 256x256, 512x512 or 1024x1024
        #[arg(long, default_value_t = ImageSize::Medium)]
        size: ImageSize,
        /// Output path (defaults to ./ai_image.png)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// List supported image sizes
    Sizes,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    image_studio::init_tracing();
    Config::dotenv_load();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sizes => {
            for size in ImageSize::ALL {
                let marker = if size == ImageSize::default() { " (default)" } else { "" };
                println!("{}{}", size, marker);
            }
            Ok(())
        }
        Commands::Generate { prompt, size, out } => {
            let mut conf = Config::new()?;
            if let Some(url) = cli.openai_base_url {
                conf.openai_base_url = url;
            }
            let client = OpenAIClient::from_config(&conf);
            let submission = Submission::new(prompt, size);
            let interaction = Interaction::new().submit(&client, &submission).await;

            if let Some((code, message)) = failure_exit(&interaction) {
                eprintln!("{}", message);
                std::process::exit(code);
            }
            if let (Some(url), Some(download)) = (interaction.image_url(), interaction.download()) {
                let path = out.unwrap_or_else(|| PathBuf::from(DOWNLOAD_FILE_NAME));
                tokio::fs::write(&path, download.bytes).await?;
                println!("Image URL: {}", url);
                println!("Saved {} ({} bytes, {})", path.display(), download.bytes.len(), download.mime);
            }
            Ok(())
        }
    }
}

/// Exit status and message for a submission that produced nothing to save.
/// 2 for an empty prompt, 1 for every other failure.
fn failure_exit(interaction: &Interaction) -> Option<(i32, String)> {
    if let Some(warning) = interaction.warning() {
        return Some((2, format!("Warning: {}", warning)));
    }
    if let Some(message) = interaction.error_message() {
        return Some((1, message.to_string()));
    }
    if interaction.download().is_none() {
        return Some((1, format!("Interaction {} ended without an image", interaction.id())));
    }
    None
}
