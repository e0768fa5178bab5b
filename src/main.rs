use mazerun::{
    app::App,
    config::{LOG_FILE_NAME, Settings},
};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};

/// Send logs to a file, stdout belongs to the game screen.
/// The returned guard flushes pending log lines when dropped. Without a usable log
/// directory the game runs without logs.
fn init_logging(settings: &Settings) -> Option<WorkerGuard> {
    let file_appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&settings.log_dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!(
                "Cannot write logs to {}: {}",
                settings.log_dir.display(),
                e
            );
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let level = if settings.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Some(guard)
}

fn main() -> std::io::Result<()> {
    let settings = Settings::from_env();

    let _guard = init_logging(&settings);
    tracing::info!("Logging to {}", settings.log_path().display());

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::new(settings).run(&mut stdout);
    // Restore the terminal even if the game failed, then report the game's error first
    let restored = App::restore_terminal(&mut stdout);
    if let Err(e) = &result {
        tracing::error!("Game exited with error: {}", e);
    }
    result.and(restored)
}
