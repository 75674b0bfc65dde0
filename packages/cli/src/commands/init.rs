use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pressroom_editor::{
    CallToActionSettings, Component, ComponentSettings, ComponentType, EditorConfig,
    FileStorage, HeroSettings, IdGenerator, LayoutStorage, PageLayout,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for stored page layouts
    #[arg(short, long, default_value = "pages")]
    pub pages_dir: String,

    /// Maximum undo levels per editor session (0 = unlimited)
    #[arg(long, default_value = "100")]
    pub history_limit: usize,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pressroom project...".bright_blue().bold()
    );

    let config = Config {
        pages_dir: args.pages_dir.clone(),
        editor: EditorConfig {
            history_limit: args.history_limit,
            ..EditorConfig::default()
        },
    };

    // Create example page if it doesn't exist
    let mut storage = FileStorage::new(config.get_pages_dir(cwd));
    if !storage.list()?.iter().any(|page| page == "home") {
        storage.save(&example_layout())?;
        println!("  {} Created {}/home.json", "✓".green(), args.pages_dir);
    }

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pressroom inspect home");
    println!("  2. Write an edit script and run: pressroom replay home script.json");

    Ok(())
}

fn example_layout() -> PageLayout {
    let mut ids = IdGenerator::new("home");

    let hero = Component::with_settings(
        ids.new_id(),
        "Welcome banner",
        ComponentSettings::Hero(HeroSettings {
            headline: "Print that makes an impression".to_string(),
            subheadline: Some("Business cards, flyers and banners, shipped fast".to_string()),
            button_label: Some("Shop now".to_string()),
            button_href: Some("/shop".to_string()),
            ..Default::default()
        }),
    );

    let grid = Component::new(ids.new_id(), ComponentType::ProductGrid);

    let cta = Component::with_settings(
        ids.new_id(),
        "Quote request",
        ComponentSettings::CallToAction(CallToActionSettings {
            heading: "Need a custom job?".to_string(),
            body: None,
            button_label: "Request a quote".to_string(),
            button_href: "/contact".to_string(),
        }),
    );

    PageLayout::new("home", vec![hero, grid, cta])
}
