use diesel::mysql::MysqlConnection;
use diesel::r2d2::{self, ConnectionManager};

// Define the common DBPool type alias, making it available to submodules
pub type DBPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;
pub type DBConnection = r2d2::PooledConnection<ConnectionManager<MysqlConnection>>;

pub mod repositories_utils;
pub mod schema_inspector;
pub mod subscription_plans;
pub mod users;
