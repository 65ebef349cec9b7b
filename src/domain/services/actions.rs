use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GenerateRequest;
use crate::domain::models::PlannerBox;
use crate::infrastructure::backends::BackendManager;

async fn fetch_history(planner: &PlannerBox, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match planner.list_history().await {
        Ok(history) => tx.send(Event::HistoryLoaded(history))?,
        Err(err) => tx.send(Event::HistoryFailed(err.to_string()))?,
    }

    return Ok(());
}

async fn generate_plan(
    planner: &PlannerBox,
    payload: GenerateRequest,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match planner.generate(payload).await {
        Ok(result) => {
            tx.send(Event::PlanGenerated(result))?;

            // The post-submit refresh is best effort. The plan already
            // rendered, so a failure here only leaves the table stale.
            match planner.list_history().await {
                Ok(history) => tx.send(Event::HistoryLoaded(history))?,
                Err(err) => {
                    tracing::warn!(error = ?err, "History refresh after generate failed");
                }
            }
        }
        Err(err) => tx.send(Event::PlanFailed(err.to_string()))?,
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            match event.unwrap() {
                Action::FetchHistory() => {
                    tokio::spawn(async move {
                        let planner = BackendManager::get();
                        if let Err(err) = fetch_history(&planner, &worker_tx).await {
                            tracing::error!(error = ?err, "History worker failed");
                        }
                    });
                }
                Action::GeneratePlan(payload) => {
                    tokio::spawn(async move {
                        let planner = BackendManager::get();
                        if let Err(err) = generate_plan(&planner, payload, &worker_tx).await {
                            tracing::error!(error = ?err, "Generate worker failed");
                        }
                    });
                }
            }
        }
    }
}
