use crate::commands::inspect::describe_component;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pressroom_editor::{
    ComponentId, EditorError, EditorMode, EditorStore, FileStorage, LayoutStorage, Mutation,
    PageLayout, StorageError,
};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Page to edit (started empty if it does not exist yet)
    pub page_id: String,

    /// JSON file holding an array of edit steps
    pub script: PathBuf,

    /// Save the resulting layout back to the pages directory
    #[arg(short, long)]
    pub save: bool,

    /// Stop at the first rejected step
    #[arg(long)]
    pub fail_fast: bool,
}

/// One step of a scripted edit session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum ScriptStep {
    Mutate {
        mutation: Mutation,
    },
    Undo,
    Redo,
    BeginBatch {
        #[serde(default)]
        description: Option<String>,
    },
    EndBatch,
    SetMode {
        mode: EditorMode,
    },
    Select {
        #[serde(default)]
        id: Option<ComponentId>,
    },
    Zoom {
        value: f64,
    },
    Drag {
        active: bool,
    },
}

/// Run one step against the store, describing what happened
pub fn run_step(store: &mut EditorStore, step: &ScriptStep) -> Result<String, EditorError> {
    let message = match step {
        ScriptStep::Mutate { mutation } => {
            let label = mutation.label(store.components());
            if store.apply(mutation.clone())? {
                label
            } else {
                format!("{} (no change)", label)
            }
        }
        ScriptStep::Undo => {
            store.end_batch();
            let label = store.undo_description().map(str::to_string);
            match (store.undo(), label) {
                (true, Some(label)) => format!("Undo {}", label),
                (true, None) => "Undo".to_string(),
                (false, _) => "Undo (nothing to undo)".to_string(),
            }
        }
        ScriptStep::Redo => {
            store.end_batch();
            let label = store.redo_description().map(str::to_string);
            match (store.redo(), label) {
                (true, Some(label)) => format!("Redo {}", label),
                (true, None) => "Redo".to_string(),
                (false, _) => "Redo (nothing to redo)".to_string(),
            }
        }
        ScriptStep::BeginBatch { description } => {
            store.begin_batch(description.clone());
            "Begin batch".to_string()
        }
        ScriptStep::EndBatch => {
            if store.end_batch() {
                "End batch".to_string()
            } else {
                "End batch (no change)".to_string()
            }
        }
        ScriptStep::SetMode { mode } => {
            store.set_mode(*mode);
            format!("Mode {}", mode)
        }
        ScriptStep::Select { id } => {
            store.set_selected_component(id.clone());
            match id {
                Some(id) => format!("Select {}", id),
                None => "Clear selection".to_string(),
            }
        }
        ScriptStep::Zoom { value } => {
            let applied = store.set_zoom(*value)?;
            format!("Zoom {}", applied)
        }
        ScriptStep::Drag { active } => {
            store.set_is_dragging(*active);
            format!("Dragging {}", active)
        }
    };

    Ok(message)
}

pub fn replay(args: ReplayArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut storage = FileStorage::new(config.get_pages_dir(cwd));

    let content = std::fs::read_to_string(&args.script)?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&content)?;

    println!("🎬 {} Pressroom replay", "Starting".green().bold());
    println!("   Page:   {}", args.page_id);
    println!("   Script: {} ({} steps)", args.script.display(), steps.len());
    println!();

    let mut store = EditorStore::with_config(config.editor.clone())?;
    let layout = match storage.load(&args.page_id) {
        Ok(layout) => layout,
        Err(StorageError::PageNotFound(_)) => {
            println!("   {} New page {}", "•".cyan(), args.page_id);
            PageLayout::new(args.page_id.clone(), Vec::new())
        }
        Err(e) => return Err(e.into()),
    };
    store.load(layout)?;

    let mut rejected = 0;
    for (index, step) in steps.iter().enumerate() {
        match run_step(&mut store, step) {
            Ok(message) => println!("   {} {:>3}. {}", "✓".green(), index + 1, message),
            Err(e) => {
                rejected += 1;
                println!("   {} {:>3}. {}", "✗".red(), index + 1, e);
                if args.fail_fast {
                    return Err(anyhow::anyhow!("Step {} rejected: {}", index + 1, e));
                }
            }
        }
    }
    store.end_batch();

    println!();
    println!(
        "📄 {} ({} undo / {} redo levels)",
        "Result".green().bold(),
        store.history().undo_levels(),
        store.history().redo_levels()
    );
    for (index, component) in store.components().iter().enumerate() {
        println!("{}", describe_component(index, component));
    }

    if args.save && store.is_dirty() {
        let version = storage.save(&store.layout(None)?)?;
        store.mark_saved();
        info!(page_id = %args.page_id, version, "Saved replayed layout");
        println!();
        println!("💾 Saved {} (version {})", args.page_id, version);
    }

    if rejected > 0 {
        println!();
        println!("{} {} step(s) rejected", "⚠️".yellow(), rejected);
    }

    Ok(())
}
