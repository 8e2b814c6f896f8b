use anyhow::Context as _;
use lingo_types::AppEvent;

use super::Context;

pub async fn handle_save_current(ctx: &Context) -> anyhow::Result<()> {
    let Some(entry) = ctx.state.current.read().await.clone() else {
        ctx.status("Nothing to save yet").await?;
        return Ok(());
    };

    let term = entry.term.clone();
    let added = {
        let mut notebook = ctx.state.notebook.write().await;
        let added = notebook.add(entry);
        if added {
            notebook
                .save(ctx.state.store.as_ref())
                .context("saving notebook")?;
        }
        added
    };

    if added {
        tracing::info!("Saved '{}'", term);
        ctx.status(format!("Saved {term}")).await
    } else {
        ctx.status(format!("{term} is already saved")).await
    }
}

pub async fn handle_remove_saved(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let removed = {
        let mut notebook = ctx.state.notebook.write().await;
        let removed = notebook.remove(id);
        if removed.is_some() {
            notebook
                .save(ctx.state.store.as_ref())
                .context("saving notebook")?;
        }
        removed
    };

    match removed {
        Some(entry) => ctx.status(format!("Removed {}", entry.term)).await,
        None => ctx.status(format!("No saved entry with id {id}")).await,
    }
}

pub async fn handle_list_saved(ctx: &Context) -> anyhow::Result<()> {
    let entries = ctx.state.notebook.read().await.entries().to_vec();
    ctx.app_to_ui_tx
        .send(AppEvent::ShowNotebook(entries))
        .await?;
    Ok(())
}
