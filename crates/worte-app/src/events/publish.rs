use kanal::AsyncSender;
use worte_core::Update;
use worte_types::AppEvent;

/// Send the redrawn card and any notice to the shell
pub async fn publish_update(update: &Update, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    tracing::debug!("Change: {:?}", update.change);

    if update.redraw() {
        app_to_ui_tx
            .send(AppEvent::ShowCard(update.view.clone()))
            .await?;
    }

    if let Some(notice) = update.notice() {
        app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
    }

    Ok(())
}
