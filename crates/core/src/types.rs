/// All database primary keys are PostgreSQL UUIDs (`gen_random_uuid()`).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
///
/// `updated_at` columns are refreshed by a database trigger on every
/// UPDATE; application code never writes them.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
