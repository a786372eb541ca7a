//! Registration Service - Registry announcement and heartbeat
//!
//! Registers once on start, then keeps two independent timers running:
//! periodic re-registration and periodic heartbeat (with a one-off early
//! heartbeat shortly after start). Registry failures are logged and
//! swallowed; the next tick is the only retry.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use searchlink::{RegistryClient, ServiceRegistration, SERVICE_NAME};

use crate::config::RegistrationConfig;

/// Timers owned by a running service
struct Running {
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

/// Registry lifecycle: `start()` registers and arms the timers,
/// `stop()` disarms them.
pub struct RegistrationService {
    inner: Arc<Inner>,
    running: Option<Running>,
}

/// Shared by the timer tasks
struct Inner {
    client: Arc<dyn RegistryClient>,
    config: RegistrationConfig,
    instance_id: Uuid,
}

impl RegistrationService {
    pub fn new(client: Arc<dyn RegistryClient>, config: RegistrationConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                config,
                instance_id: Uuid::new_v4(),
            }),
            running: None,
        }
    }

    /// Register immediately, then spawn the periodic tasks.
    pub async fn start(&mut self) {
        if self.running.is_some() {
            tracing::warn!("⚠️  Registry client already started");
            return;
        }

        let inner = self.inner.clone();
        let config = &inner.config;

        inner.register_once().await;

        let cancel = CancellationToken::new();
        let mut tasks = Vec::with_capacity(3);

        // Re-registration
        tasks.push(spawn_periodic(
            cancel.clone(),
            config.registration_interval,
            {
                let inner = inner.clone();
                move || {
                    let inner = inner.clone();
                    async move { inner.register_once().await }
                }
            },
        ));

        // Early heartbeat, independent of the periodic one
        tasks.push({
            let inner = inner.clone();
            let cancel = cancel.clone();
            let delay = config.heartbeat_initial_delay;
            tokio::spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => {}
                    _ = sleep(delay) => inner.heartbeat_once().await,
                }
            })
        });

        // Periodic heartbeat
        tasks.push(spawn_periodic(cancel.clone(), config.heartbeat_interval, {
            let inner = inner.clone();
            move || {
                let inner = inner.clone();
                async move { inner.heartbeat_once().await }
            }
        }));

        tracing::info!(
            "📡 Registry client started. Will register with {} every {:?}",
            config.registry_url,
            config.registration_interval
        );
        tracing::info!(
            "💓 Heartbeat will be sent every {:?}",
            config.heartbeat_interval
        );

        self.running = Some(Running { cancel, tasks });
    }

    /// Cancel all timers. Idempotent; a no-op when never started.
    ///
    /// In-flight registry calls are not awaited, and no deregistration
    /// is sent.
    pub fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };

        running.cancel.cancel();
        drop(running.tasks);

        tracing::info!("🛑 Registry client stopped");
    }
}

impl Drop for RegistrationService {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.cancel.cancel();
        }
    }
}

impl Inner {
    /// Fresh on every call so it tracks the configured endpoint
    fn registration(&self) -> ServiceRegistration {
        ServiceRegistration::for_endpoint(
            &self.config.service_host,
            self.config.service_port,
            env!("CARGO_PKG_VERSION"),
            self.instance_id,
        )
    }

    async fn register_once(&self) {
        let registration = self.registration();

        match self
            .client
            .register(&registration, self.config.service_port)
            .await
        {
            Ok(ack) => {
                tracing::info!(
                    "✅ Successfully registered with Host Server: {}",
                    ack.message_or_ok()
                );
            }
            Err(e) => {
                tracing::warn!("⚠️  Failed to register with Host Server: {}", e);
            }
        }
    }

    async fn heartbeat_once(&self) {
        match self.client.heartbeat(SERVICE_NAME).await {
            Ok(ack) => {
                tracing::debug!("💓 Heartbeat sent successfully: {}", ack.message_or_ok());
            }
            Err(e) => {
                tracing::warn!("⚠️  Failed to send heartbeat: {}", e);
            }
        }
    }
}

/// Run `job` every `period`, first firing one period from now.
///
/// Each run is spawned on its own so a slow call never delays the next
/// tick and ticks may overlap.
fn spawn_periodic<F, Fut>(cancel: CancellationToken, period: Duration, job: F) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    tokio::spawn(job());
                }
            }
        }
    })
}
