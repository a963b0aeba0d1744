use adgenius::clipboard::{share_text, FileClipboard};
use adgenius::history::FileStorage;
use adgenius::rendering::{render_document, Layout, Poster};
use adgenius::service::GeminiService;
use adgenius::{
    Audience, Controller, Error, GeneratorConfig, Goal, ProductImage, StrategyForm, VisualStyle,
};
use anyhow::{Context, Result};
use chrono::TimeZone;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "adgenius", version, about = "Generate ad copy and poster previews for a marketing campaign")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the campaign history slot
    #[arg(long, global = true, default_value = ".adgenius")]
    history: PathBuf,

    /// Directory poster previews are written to
    #[arg(long, global = true, default_value = "out")]
    out: PathBuf,

    #[command(flatten)]
    backend: BackendArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct BackendArgs {
    /// API key (defaults to GEMINI_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// REST API base URL (defaults to GEMINI_API_BASE or the public endpoint)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[arg(long, global = true)]
    copy_model: Option<String>,

    #[arg(long, global = true)]
    image_model: Option<String>,

    /// HTTP timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate copy and two poster variants from a strategy
    Generate(GenerateArgs),
    /// List saved campaigns, newest first
    History {
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-render a saved campaign without calling the backend
    Show {
        id: String,
        #[arg(long, value_enum, default_value = "standard")]
        layout: Layout,
    },
    /// Replace one poster background of a saved campaign
    Regenerate {
        id: String,
        /// Poster slot, starting at 0
        #[arg(long)]
        index: usize,
        #[arg(long, value_enum, default_value = "standard")]
        layout: Layout,
    },
    /// List visual styles and layouts
    Styles,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long, value_enum, default_value = "new-product-launch")]
    goal: Goal,

    #[arg(long, value_enum, default_value = "office-worker")]
    audience: Audience,

    /// Product keywords, comma separated
    #[arg(long)]
    keywords: String,

    /// Promotion mechanism, e.g. "buy one get one"
    #[arg(long)]
    promo: String,

    #[arg(long, value_enum, default_value = "vibrant")]
    style: VisualStyle,

    /// Preferred background scene
    #[arg(long)]
    scene: Option<String>,

    /// Product photo to condition generation on
    #[arg(long)]
    image: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "standard")]
    layout: Layout,

    /// Write the social post to this file instead of printing it
    #[arg(long)]
    copy_to: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_service(args: &BackendArgs) -> Result<GeminiService> {
    let mut cfg = GeneratorConfig::from_env();
    if let Some(key) = &args.api_key {
        cfg.api_key = key.clone();
    }
    if let Some(base) = &args.api_base {
        cfg.api_base = base.trim_end_matches('/').to_string();
    }
    if let Some(model) = &args.copy_model {
        cfg.copy_model = model.clone();
    }
    if let Some(model) = &args.image_model {
        cfg.image_model = model.clone();
    }
    if let Some(ms) = args.timeout_ms {
        cfg.timeout_ms = ms;
    }
    GeminiService::new(cfg).context("failed to configure the generation backend")
}

fn format_date(millis: u64) -> String {
    chrono::Local
        .timestamp_millis_opt(millis as i64)
        .single()
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

fn print_campaign(controller: &Controller<FileStorage>) {
    let (Some(strategy), Some(content)) = (controller.strategy(), controller.content()) else {
        return;
    };
    println!("Goal:     {}", strategy.goal);
    println!("Audience: {}", strategy.audience);
    println!("Style:    {}", strategy.style);
    println!();
    println!("Slogan:   {}", content.slogan);
    println!("Tagline:  {}", content.promo_tagline);
    if let Some(h) = content.highlight() {
        println!("Badge:    {}", h);
    }
    println!("Posters:  {}", controller.posters().len());
}

fn write_previews(controller: &Controller<FileStorage>, out: &Path, layout: Layout) -> Result<()> {
    let (Some(strategy), Some(content)) = (controller.strategy(), controller.content()) else {
        return Ok(());
    };
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let posters: Vec<Poster<'_>> = controller
        .posters()
        .iter()
        .map(|url| Poster::new(url, content, strategy.style, layout))
        .collect();
    for (idx, poster) in posters.iter().enumerate() {
        let path = out.join(format!("poster-{}.html", idx + 1));
        let title = format!("{} ({})", content.slogan, layout);
        fs::write(&path, render_document(&title, std::slice::from_ref(poster)))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    // Every poster in every layout, for picking an arrangement.
    let all: Vec<Poster<'_>> = controller
        .posters()
        .iter()
        .flat_map(|url| Layout::ALL.into_iter().map(move |l| (url, l)))
        .map(|(url, l)| Poster::new(url, content, strategy.style, l))
        .collect();
    let path = out.join("campaign.html");
    fs::write(&path, render_document(&content.social_post.title, &all))
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Previews written to {}", out.display());
    Ok(())
}

fn generate(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let mut form = StrategyForm {
        goal: args.goal,
        audience: args.audience,
        keywords: args.keywords.clone(),
        promo: args.promo.clone(),
        style: args.style,
        scene: args.scene.clone().unwrap_or_default(),
        product_image: None,
    };
    if let Some(path) = &args.image {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        form.product_image = Some(ProductImage::from_bytes(&bytes));
    }
    let strategy = form.submit()?;
    let service = build_service(&cli.backend)?;
    let mut controller = Controller::new(FileStorage::new(&cli.history));

    eprintln!("Designing your campaign...");
    controller.submit(&service, strategy)?;
    info!("History now holds {} campaign(s)", controller.history().len());

    print_campaign(&controller);
    write_previews(&controller, &cli.out, args.layout)?;

    match &args.copy_to {
        Some(path) => {
            controller.copy_share_text(&mut FileClipboard::new(path), Instant::now())?;
            println!("Social post copied to {}", path.display());
        }
        None => {
            if let Some(content) = controller.content() {
                println!("\n{}", share_text(content));
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Generate(args) => generate(&cli, args)?,
        Command::History { json } => {
            let controller = Controller::new(FileStorage::new(&cli.history));
            if *json {
                println!("{}", serde_json::to_string_pretty(controller.history())?);
            } else if controller.history().is_empty() {
                println!("No saved campaigns");
            } else {
                for r in controller.history() {
                    println!("{}  {}  {:<20}  {}", r.id, format_date(r.timestamp), r.strategy.goal.label(), r.result.slogan);
                }
            }
        }
        Command::Show { id, layout } => {
            let mut controller = Controller::new(FileStorage::new(&cli.history));
            controller.load_from_history(id)?;
            print_campaign(&controller);
            write_previews(&controller, &cli.out, *layout)?;
        }
        Command::Regenerate { id, index, layout } => {
            let service = build_service(&cli.backend)?;
            let mut controller = Controller::new(FileStorage::new(&cli.history));
            controller.load_from_history(id)?;
            match controller.regenerate_image(&service, *index) {
                Ok(_) => println!("Poster {} regenerated", index),
                Err(e @ Error::Regeneration(_)) => eprintln!("warning: {}; keeping the current poster", e),
                Err(e) => return Err(e.into()),
            }
            write_previews(&controller, &cli.out, *layout)?;
        }
        Command::Styles => {
            println!("Styles:");
            for s in VisualStyle::ALL {
                let name = s.to_possible_value().map(|v| v.get_name().to_string()).unwrap_or_default();
                println!("  {:<12} {}", name, s.label());
            }
            println!("Layouts:");
            for l in Layout::ALL {
                println!("  {}", l);
            }
        }
    }
    Ok(())
}
