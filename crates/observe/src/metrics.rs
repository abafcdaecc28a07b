use std::sync::OnceLock;

/// Global metrics registry used by all components.
static REGISTRY: OnceLock<prometheus_metric_storage::StorageRegistry> = OnceLock::new();

/// Configure global metrics registry.
///
/// This function allows specifying a common prefix that will be added to all
/// metric names. It can be called multiple times in a row, later calls are
/// ignored. It should be called before any call to [`get_registry`], ideally
/// at the very beginning of the `main` function.
pub fn setup_registry_reentrant(prefix: Option<String>) {
    match prometheus::Registry::new_custom(prefix, None) {
        Ok(registry) => {
            let storage_registry = prometheus_metric_storage::StorageRegistry::new(registry);
            REGISTRY.set(storage_registry).ok();
        }
        Err(err) => tracing::error!(?err, "invalid metrics registry configuration"),
    }
}

/// Get the global instance of the metrics registry.
pub fn get_registry() -> &'static prometheus::Registry {
    get_storage_registry().registry()
}

/// Get the global instance of the metric storage registry.
///
/// If the global metrics registry was not configured with
/// [`setup_registry_reentrant`], it will be initialized using a default value
/// so that unit tests don't have to set it up manually.
pub fn get_storage_registry() -> &'static prometheus_metric_storage::StorageRegistry {
    REGISTRY.get_or_init(prometheus_metric_storage::StorageRegistry::default)
}

/// Encodes all metrics of the registry in the prometheus text format.
pub fn encode(registry: &prometheus::Registry) -> String {
    prometheus::TextEncoder::new()
        .encode_to_string(&registry.gather())
        .unwrap_or_else(|err| {
            tracing::error!(?err, "failed to encode metrics");
            String::new()
        })
}

/// `/metrics` route handler exposing encoded prometheus data to the
/// monitoring system.
pub async fn handle_metrics() -> String {
    encode(get_registry())
}
