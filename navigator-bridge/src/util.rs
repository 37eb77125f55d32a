use tracing_subscriber::EnvFilter;

/// Fallback filter when `RUST_LOG` is unset.
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

pub fn init_tracing(debug: bool) {
    // RUST_LOG=navigator_bridge=debug,navigator_core=info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// One-line crash report naming the app, where it died and why.
pub fn panic_report(location: Option<&str>, payload: Option<&str>) -> String {
    format!(
        "Rusty Navigator crashed at {}: {}",
        location.unwrap_or("<unknown>"),
        payload.unwrap_or("<non-string panic payload>")
    )
}

/// Route panics through tracing.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str));
        let location = info.location().map(|l| format!("{}:{}", l.file(), l.line()));

        tracing::error!(
            target: "rusty_navigator::panic",
            "{}",
            panic_report(location.as_deref(), payload)
        );
    }));
}
