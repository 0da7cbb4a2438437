use std::path::Path;

use anyhow::Result;
use manager::{
    config::Config, form::FormController, notifications::NotificationQueue, session::Session,
};
use students_store::{
    ids::UuidGenerator, repository::store::StudentsStore, storage::file::FileStorage,
};

fn main() -> Result<()> {
    {
        let env_file = Path::new(".env");
        if env_file.exists() {
            dotenv::from_filename(".env")?;
        }
    }
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or("INFO".to_string()))
        .init();

    let config = Config::from_env();
    log::info!(
        "Starting students manager, data_dir={:?}, key={}",
        config.data_dir,
        config.storage_key
    );

    let store = StudentsStore::load(
        FileStorage(config.data_dir),
        UuidGenerator,
        config.storage_key,
    );
    let mut session = Session::new(FormController::new(store, NotificationQueue::default()));

    let stdin = std::io::stdin();
    session.run(stdin.lock(), &mut std::io::stdout())?;

    log::info!("Students manager stopped");
    Ok(())
}
