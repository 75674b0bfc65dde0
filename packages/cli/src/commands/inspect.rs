use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pressroom_editor::{Breakpoint, Component, FileStorage, LayoutStorage};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Page to inspect; lists all pages when omitted
    pub page_id: Option<String>,

    /// Show resolved styles for a breakpoint (mobile, tablet, desktop)
    #[arg(short, long)]
    pub breakpoint: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let storage = FileStorage::new(config.get_pages_dir(cwd));

    let Some(page_id) = args.page_id else {
        let pages = storage.list()?;
        println!("📄 {} page(s) in {}", pages.len(), storage.root().display());
        for page in pages {
            println!("   {}", page.cyan());
        }
        return Ok(());
    };

    let breakpoint = args
        .breakpoint
        .as_deref()
        .map(parse_breakpoint)
        .transpose()?;

    let layout = storage.load(&page_id)?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    println!(
        "📄 {} {} (version {})",
        "Page".green().bold(),
        layout.page_id.bright_white(),
        layout.version
    );
    println!();

    for (index, component) in layout.components.iter().enumerate() {
        println!("{}", describe_component(index, component));
        if let Some(bp) = breakpoint {
            let styles = component.resolved_styles(bp);
            println!("      styles: {}", serde_json::to_string(&styles)?);
        }
    }

    println!();
    println!("   {} component(s)", layout.components.len());

    Ok(())
}

pub fn describe_component(index: usize, component: &Component) -> String {
    let hidden = if component.is_hidden {
        format!(" {}", "(hidden)".yellow())
    } else {
        String::new()
    };

    format!(
        "   {:>2}. {} [{}] {}{}",
        index,
        component.name.bright_white(),
        component.component_type(),
        component.id.to_string().dimmed(),
        hidden
    )
}

fn parse_breakpoint(raw: &str) -> Result<Breakpoint> {
    match raw {
        "mobile" => Ok(Breakpoint::Mobile),
        "tablet" => Ok(Breakpoint::Tablet),
        "desktop" => Ok(Breakpoint::Desktop),
        _ => Err(anyhow::anyhow!(
            "Invalid breakpoint: {}. Use: mobile, tablet, or desktop",
            raw
        )),
    }
}
