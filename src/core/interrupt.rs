//! Interruption signal for in-flight discovery runs

use std::future::Future;
use tokio::sync::watch;

use crate::error::DiscoveryError;

/// Receiving side of an interruption signal.
///
/// Remote calls are raced against the signal through [`Interrupt::guard`]; once
/// triggered, every pending and future guarded call fails with
/// [`DiscoveryError::Interrupted`].
#[derive(Debug, Clone)]
pub struct Interrupt {
    rx: Option<watch::Receiver<bool>>,
}

/// Triggering side of an [`Interrupt`]
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    tx: std::sync::Arc<watch::Sender<bool>>,
}

impl Interrupt {
    /// Creates a connected signal pair
    pub fn new() -> (InterruptHandle, Interrupt) {
        let (tx, rx) = watch::channel(false);
        (
            InterruptHandle {
                tx: std::sync::Arc::new(tx),
            },
            Interrupt { rx: Some(rx) },
        )
    }

    /// A signal that never fires
    pub fn never() -> Self {
        Self { rx: None }
    }

    pub fn is_interrupted(&self) -> bool {
        self.rx.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Runs `fut` unless the signal fires first
    pub async fn guard<T, F>(&self, fut: F) -> Result<T, DiscoveryError>
    where
        F: Future<Output = Result<T, DiscoveryError>>,
    {
        let Some(rx) = &self.rx else {
            return fut.await;
        };
        if *rx.borrow() {
            return Err(DiscoveryError::Interrupted);
        }

        let mut rx = rx.clone();
        tokio::select! {
            biased;
            () = triggered(&mut rx) => Err(DiscoveryError::Interrupted),
            result = fut => result,
        }
    }
}

impl Default for Interrupt {
    fn default() -> Self {
        Self::never()
    }
}

impl InterruptHandle {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

async fn triggered(rx: &mut watch::Receiver<bool>) {
    let fired = rx.wait_for(|flag| *flag).await.is_ok();
    if !fired {
        // Sender dropped without firing
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_never_passes_result_through() {
        let interrupt = Interrupt::never();
        let value = interrupt.guard(async { Ok::<_, DiscoveryError>(7) }).await.unwrap();
        assert_eq!(value, 7);
        assert!(!interrupt.is_interrupted());
    }

    #[tokio::test]
    async fn test_already_triggered_skips_future() {
        let (handle, interrupt) = Interrupt::new();
        handle.trigger();

        let ran = std::sync::atomic::AtomicBool::new(false);
        let result = interrupt
            .guard(async {
                ran.store(true, std::sync::atomic::Ordering::SeqCst);
                Ok::<_, DiscoveryError>(())
            })
            .await;
        assert!(matches!(result, Err(DiscoveryError::Interrupted)));
        assert!(!ran.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_trigger_during_pending_call() {
        let (handle, interrupt) = Interrupt::new();

        let trigger = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.trigger();
        });

        let result = interrupt
            .guard(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<_, DiscoveryError>(())
            })
            .await;

        trigger.await.unwrap();
        assert!(matches!(result, Err(DiscoveryError::Interrupted)));
        assert!(interrupt.is_interrupted());
    }

    #[tokio::test]
    async fn test_dropped_handle_does_not_interrupt() {
        let (handle, interrupt) = Interrupt::new();
        drop(handle);

        let value = interrupt.guard(async { Ok::<_, DiscoveryError>("done") }).await.unwrap();
        assert_eq!(value, "done");
    }
}
