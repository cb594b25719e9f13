#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::anyhow;
    use clap::Parser;
    use eframe::egui;
    use othello::config::Cli;
    use othello::ui::OthelloApp;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(seats = ?cli.seats, seed = ?cli.seed, "starting othello");

    let session = cli.build_match();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(cli.window_size, cli.window_size))
            .with_resizable(false)
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |_cc| Box::new(OthelloApp::new(session))),
    )
    .map_err(|e| anyhow!("failed to open the game window: {e}"))
}

// The browser build is driven through `othello::wasm::WasmGame`.
#[cfg(target_arch = "wasm32")]
fn main() {}
