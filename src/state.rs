use crate::config::AppConfig;
use crate::db::Database;
use crate::services::notifier::Notifier;

pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
    pub notifier: Notifier,
}
