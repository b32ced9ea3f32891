#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListQuery {
    pub skip: usize,
    pub limit: usize,
}

impl ListQuery {
    pub const DEFAULT_LIMIT: usize = 100;
    pub const MAX_LIMIT: usize = 500;

    /// Clamps the client provided paging into something the store can serve
    pub fn new(skip: Option<usize>, limit: Option<usize>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_limit() {
        assert_eq!(ListQuery::default().limit, 100);
        assert_eq!(ListQuery::new(Some(4), Some(0)), ListQuery { skip: 4, limit: 1 });
        assert_eq!(ListQuery::new(None, Some(10_000)).limit, 500);
    }
}
