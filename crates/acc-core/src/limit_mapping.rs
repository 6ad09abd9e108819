use crate::{
    ConnectionLimitTable, CoreError, CoreErrorResult, DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN,
};

use std::collections::HashMap;

use log::debug;

/// Zero-based column positions used to build a [`LimitMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelection {
    pub key_column: usize,
    pub value_column: usize,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN,
            value_column: DEFAULT_VALUE_COLUMN,
        }
    }
}

/// Instance class label to per-instance connection limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitMapping {
    limits: HashMap<String, i64>,
}

impl LimitMapping {
    /// Convert table rows into a mapping, walking rows in document order.
    ///
    /// A label that appears more than once keeps the limit from its last row.
    pub fn from_table(
        table: &ConnectionLimitTable,
        columns: ColumnSelection,
    ) -> CoreErrorResult<Self> {
        let mut limits = HashMap::with_capacity(table.len());

        for (index, row) in table.rows.iter().enumerate() {
            let key = row
                .get(columns.key_column)
                .ok_or_else(|| CoreError::missing_column(index, columns.key_column))?;
            let value = row
                .get(columns.value_column)
                .ok_or_else(|| CoreError::missing_column(index, columns.value_column))?;
            let limit = value
                .as_integer()
                .ok_or_else(|| CoreError::non_integer_limit(index, value.to_string()))?;

            if let Some(previous) = limits.insert(key.to_string(), limit) {
                debug!(
                    "Duplicate instance class {key} in row {index}: {previous} replaced by {limit}"
                );
            }
        }

        debug!("Built limit mapping with {} instance classes", limits.len());

        Ok(Self { limits })
    }

    /// Per-instance limit for `instance_class`.
    pub fn limit_for(&self, instance_class: &str) -> CoreErrorResult<i64> {
        self.limits
            .get(instance_class)
            .copied()
            .ok_or_else(|| CoreError::unknown_instance_class(instance_class))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl FromIterator<(String, i64)> for LimitMapping {
    /// Later pairs overwrite earlier ones with the same label.
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self {
            limits: iter.into_iter().collect(),
        }
    }
}
