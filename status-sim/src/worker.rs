use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::debug;

use crate::error::ServiceError;

pub const WORKER_COUNT: usize = 4;
pub const WORKER_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct FanOutReport {
    /// Completion tags in arrival order.
    pub tags: Vec<String>,
    pub elapsed: Duration,
}

pub fn completion_tag(id: usize) -> String {
    format!("worker_{}_completed", id)
}

/// Spawns `workers` simulated units that each sleep `delay` and report back,
/// then waits for every one of them. There is no timeout.
pub async fn fan_out(
    workers: usize,
    delay: Duration,
) -> Result<FanOutReport, ServiceError> {
    fan_out_with(workers, move |id| async move {
        tokio::time::sleep(delay).await;
        completion_tag(id)
    })
    .await
}

pub async fn fan_out_with<F, Fut>(
    workers: usize,
    work: F,
) -> Result<FanOutReport, ServiceError>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = String> + Send + 'static,
{
    let start = Instant::now();
    let (tx, mut rx) = mpsc::channel(workers.max(1));
    for id in 0..workers {
        let tx = tx.clone();
        let unit = work(id);
        tokio::spawn(async move {
            let tag = unit.await;
            let _ = tx.send(tag).await;
        });
    }
    // only the workers hold senders now, so a lost worker closes the channel
    drop(tx);

    let mut tags = Vec::with_capacity(workers);
    while tags.len() < workers {
        match rx.recv().await {
            Some(tag) => tags.push(tag),
            None => {
                return Err(ServiceError::FanIn {
                    expected: workers,
                    received: tags.len(),
                });
            }
        }
    }
    let elapsed = start.elapsed();
    debug!(workers, ?elapsed, "fan-out completed");
    Ok(FanOutReport { tags, elapsed })
}
