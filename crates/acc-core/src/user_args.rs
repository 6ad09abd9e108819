/// The four values a run is asked to evaluate.
///
/// Counts are signed and unchecked: zero or negative values are carried
/// straight into the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserArgs {
    pub db_instance_class: String,
    pub database_instance_count: i64,
    pub pod_count: i64,
    pub app_connection_pool_max_size: i64,
}

impl UserArgs {
    pub fn new(
        db_instance_class: impl Into<String>,
        database_instance_count: i64,
        pod_count: i64,
        app_connection_pool_max_size: i64,
    ) -> Self {
        Self {
            db_instance_class: db_instance_class.into(),
            database_instance_count,
            pod_count,
            app_connection_pool_max_size,
        }
    }
}
