//! Translation of numeric database error codes into named errors.

use std::collections::HashMap;

/// Text used for the code line when nothing resolves the code.
pub const UNRESOLVED: &str = "Unresolved error";

/// Translates a numeric code reported by the database into a descriptive name.
pub trait DatabaseCodeResolver: Send + Sync {
    fn resolve(&self, code: i32) -> String;
}

impl<F> DatabaseCodeResolver for F
where
    F: Fn(i32) -> String + Send + Sync,
{
    fn resolve(&self, code: i32) -> String {
        self(code)
    }
}

/// Table-driven resolver.
///
/// Unknown codes resolve to the table's default, which is [`UNRESOLVED`]
/// unless set with [`CodeTable::with_default`].
#[derive(Debug, Clone)]
pub struct CodeTable {
    names: HashMap<i32, String>,
    default: String,
}

impl CodeTable {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            default: UNRESOLVED.to_string(),
        }
    }

    pub fn with(mut self, code: i32, name: impl Into<String>) -> Self {
        self.names.insert(code, name.into());
        self
    }

    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.default = name.into();
        self
    }

    pub fn insert(&mut self, code: i32, name: impl Into<String>) {
        self.names.insert(code, name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseCodeResolver for CodeTable {
    fn resolve(&self, code: i32) -> String {
        self.names
            .get(&code)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_resolver() {
        let resolver = |code: i32| format!("E{code}");
        assert_eq!(resolver.resolve(2627), "E2627");
    }

    #[test]
    fn test_code_table() {
        let table = CodeTable::new()
            .with(2627, "DUPLICATE_KEY")
            .with(547, "FOREIGN_KEY");
        assert_eq!(table.resolve(2627), "DUPLICATE_KEY");
        assert_eq!(table.resolve(547), "FOREIGN_KEY");
        assert_eq!(table.resolve(1), UNRESOLVED);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_code_table_default() {
        let table = CodeTable::new().with_default("UNKNOWN");
        assert!(table.is_empty());
        assert_eq!(table.resolve(42), "UNKNOWN");
    }
}
