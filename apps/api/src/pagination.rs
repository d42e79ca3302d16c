//! Limit/offset parsing shared by every list endpoint.

pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    /// Parses raw query values. Unparsable values fall back to the defaults,
    /// negative values clamp to zero and `limit` never exceeds `MAX_LIMIT`.
    pub fn from_params(limit: Option<&str>, offset: Option<&str>, default_limit: usize) -> Self {
        let limit = limit
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(clamp_non_negative)
            .unwrap_or(default_limit)
            .min(MAX_LIMIT);
        let offset = offset
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(clamp_non_negative)
            .unwrap_or(0);

        Page { limit, offset }
    }

    /// Returns the `[offset, offset + limit)` window of `items`.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.offset).take(self.limit).collect()
    }

    pub fn limit_i64(&self) -> i64 {
        self.limit as i64
    }

    pub fn offset_i64(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }
}

fn clamp_non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}
