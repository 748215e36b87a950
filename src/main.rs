//! adcraft CLI entry point.
//!
//! Offline subcommands (`formats`, `identities`, `avatars`, `parse-angle`)
//! only read the built-in catalogs. Generation subcommands read a JSON brief,
//! assemble the prompt and call Gemini, or print the prompt with `--dry-run`.
//! `image-prompt` prints the local fallback when no provider can be built.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use adcraft::config::AppConfig;
use adcraft::creative::{
    avatar_visuals, AdIdentity, CreativeBrief, CreativeFormat, FormatGroup, UgcAvatar,
};
use adcraft::generation::CreativeGenerator;
use adcraft::prompt::{
    build_creative_strategy_prompt, build_image_director_prompt, build_sales_letter_prompt,
    fallback_image_prompt, format_text_guide, parse_angle, ImagePromptContext,
};
use adcraft::providers::gemini::GeminiProvider;

/// adcraft: ad-creative prompt assembly and generation.
#[derive(Parser)]
#[command(name = "adcraft", version, about)]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// List creative formats by picker group, or print one format's guide.
    Formats {
        /// Print the text-rendering guide of this format instead.
        #[arg(long, value_name = "FORMAT")]
        guide: Option<String>,
    },
    /// List voice archetypes.
    Identities,
    /// List UGC avatars with their visual descriptions.
    Avatars,
    /// Clean and tag a marketing angle; prints JSON.
    ParseAngle {
        /// Raw angle text, e.g. "Hook: I was tired of feeling stuck".
        angle: String,
    },
    /// Generate a visual strategy and copy for one format.
    Strategy {
        /// JSON brief file.
        #[arg(long)]
        brief: PathBuf,
        /// Format label or id.
        #[arg(long)]
        format: String,
        /// Lock a voice archetype; the model picks one when omitted.
        #[arg(long)]
        identity: Option<String>,
        /// Marketing angle; defaults to the brief's locked hook.
        #[arg(long)]
        angle: Option<String>,
        /// Print the prompt without calling the model.
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate the final image prompt for one format.
    ImagePrompt {
        /// JSON brief file.
        #[arg(long)]
        brief: PathBuf,
        /// Format label or id.
        #[arg(long)]
        format: String,
        /// Marketing angle; defaults to the brief's locked hook.
        #[arg(long)]
        angle: Option<String>,
        /// Overlay text from an earlier strategy run.
        #[arg(long)]
        embedded_text: Option<String>,
        /// Print the director prompt without calling the model.
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate a long-form sales letter.
    SalesLetter {
        /// JSON brief file.
        #[arg(long)]
        brief: PathBuf,
        /// Opening headline.
        #[arg(long)]
        headline: String,
        /// Print the prompt without calling the model.
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    let _logging_guard = match &config.logging.dir {
        Some(dir) => Some(adcraft::logging::init_with_file(dir, &config.logging.level)?),
        None => {
            adcraft::logging::init_cli(&config.logging.level)?;
            None
        }
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Formats { guide } => handle_formats(guide.as_deref()),
        Command::Identities => {
            handle_identities();
            Ok(())
        }
        Command::Avatars => {
            handle_avatars();
            Ok(())
        }
        Command::ParseAngle { angle } => handle_parse_angle(&angle),
        Command::Strategy {
            brief,
            format,
            identity,
            angle,
            dry_run,
        } => {
            handle_strategy(
                &config,
                &brief,
                &format,
                identity.as_deref(),
                angle.as_deref(),
                dry_run,
            )
            .await
        }
        Command::ImagePrompt {
            brief,
            format,
            angle,
            embedded_text,
            dry_run,
        } => {
            handle_image_prompt(
                &config,
                &brief,
                &format,
                angle.as_deref(),
                embedded_text.as_deref(),
                dry_run,
            )
            .await
        }
        Command::SalesLetter {
            brief,
            headline,
            dry_run,
        } => handle_sales_letter(&config, &brief, &headline, dry_run).await,
    }
}

// ── Offline catalogs ────────────────────────────────────────────

fn handle_formats(guide: Option<&str>) -> anyhow::Result<()> {
    if let Some(name) = guide {
        let format: CreativeFormat = name.parse()?;
        println!("{}", format_text_guide(format));
        return Ok(());
    }
    for group in FormatGroup::ALL {
        println!("{}", group.label());
        for format in group.formats() {
            println!("  {:<24} {}", format.id(), format.label());
        }
    }
    Ok(())
}

fn handle_identities() {
    for identity in AdIdentity::ALL {
        println!("{:<24} {}", identity.label(), identity.description());
    }
}

fn handle_avatars() {
    for avatar in UgcAvatar::ALL {
        println!("{}: {}", avatar.label(), avatar_visuals(avatar));
    }
}

fn handle_parse_angle(angle: &str) -> anyhow::Result<()> {
    let parsed = parse_angle(angle);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

// ── Generation ──────────────────────────────────────────────────

fn load_brief(path: &Path) -> anyhow::Result<CreativeBrief> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read brief {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse brief {}", path.display()))
}

fn build_generator(config: &AppConfig) -> anyhow::Result<CreativeGenerator> {
    let api_key = config
        .gemini
        .api_key
        .clone()
        .context("GEMINI_API_KEY is not set (or use --dry-run)")?;
    let provider =
        GeminiProvider::with_options(api_key, &config.gemini.base_url, config.gemini.timeout())
            .context("failed to create Gemini provider")?;
    Ok(CreativeGenerator::new(
        Arc::new(provider),
        config.generator_settings(),
    ))
}

/// Angle from the flag, else the brief's locked hook, else empty.
fn resolve_angle(brief: &CreativeBrief, angle: Option<&str>) -> String {
    angle
        .or_else(|| brief.strategy.locked_hook())
        .unwrap_or_default()
        .to_owned()
}

async fn handle_strategy(
    config: &AppConfig,
    brief_path: &Path,
    format: &str,
    identity: Option<&str>,
    angle: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let brief = load_brief(brief_path)?;
    let format: CreativeFormat = format.parse()?;
    let identity = identity.map(str::parse::<AdIdentity>).transpose()?;
    let angle = resolve_angle(&brief, angle);

    if dry_run {
        let prompt = build_creative_strategy_prompt(
            &brief.project,
            &brief.strategy,
            &angle,
            format,
            identity,
        );
        println!("{prompt}");
        return Ok(());
    }

    let generator = build_generator(config)?;
    let result = generator
        .generate_creative_strategy(&brief.project, &brief.strategy, &angle, format, identity)
        .await
        .context("creative strategy generation failed")?;
    info!(
        %format,
        input_tokens = result.input_tokens,
        output_tokens = result.output_tokens,
        "strategy generated"
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn handle_image_prompt(
    config: &AppConfig,
    brief_path: &Path,
    format: &str,
    angle: Option<&str>,
    embedded_text: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let brief = load_brief(brief_path)?;
    let format: CreativeFormat = format.parse()?;
    let parsed = parse_angle(&resolve_angle(&brief, angle));
    let ctx = ImagePromptContext {
        project: &brief.project,
        format,
        angle: &parsed,
        strategy: &brief.strategy,
        persona: brief.persona.as_ref(),
        embedded_text,
    };

    if dry_run {
        println!("{}", build_image_director_prompt(&ctx));
        return Ok(());
    }

    let generator = match build_generator(config) {
        Ok(generator) => generator,
        Err(e) => {
            warn!(%format, error = %e, "no usable provider, printing fallback image prompt");
            println!("{}", fallback_image_prompt(&ctx));
            return Ok(());
        }
    };
    let result = generator.generate_image_prompt(&ctx).await;
    info!(
        %format,
        input_tokens = result.input_tokens,
        output_tokens = result.output_tokens,
        "image prompt generated"
    );
    println!("{}", result.data);
    Ok(())
}

async fn handle_sales_letter(
    config: &AppConfig,
    brief_path: &Path,
    headline: &str,
    dry_run: bool,
) -> anyhow::Result<()> {
    let brief = load_brief(brief_path)?;
    let story = brief.strategy.story_data.as_ref();
    let mechanism = brief.strategy.mechanism_data.as_ref();
    let keywords = brief.strategy.coliseum_keywords();

    if dry_run {
        println!(
            "{}",
            build_sales_letter_prompt(headline, story, mechanism, keywords)
        );
        return Ok(());
    }

    let generator = build_generator(config)?;
    let result = generator
        .generate_sales_letter(headline, story, mechanism, keywords)
        .await
        .context("sales letter generation failed")?;
    info!(
        input_tokens = result.input_tokens,
        output_tokens = result.output_tokens,
        "sales letter generated"
    );
    println!("{}", result.data);
    Ok(())
}
