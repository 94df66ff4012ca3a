use crate::Result;

/// Initialize tracing output for an application embedding this crate.
///
/// Without the `subscriber` feature this is a no-op; events are still emitted through the
/// `tracing` facade and can be collected by any subscriber the caller installs.
pub fn init(service_name: &str) -> Result<()> {
    let _ = service_name;

    #[cfg(feature = "subscriber")]
    {
        use tracing_subscriber::{fmt, EnvFilter};

        // Default: info for the schema crates and the caller, warn elsewhere.
        // Can be overridden with `RUST_LOG`.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "warn,tba_types=info,tba_files=info,{service_name}=info"
            ))
        });

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| crate::Error::Config(format!("logging already initialized: {e}")))?;
    }

    Ok(())
}
