use uuid::Uuid;

/// Source of fresh receipt identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random (v4) UUIDs in canonical hyphenated form, drawn from the OS CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Source;

impl IdSource for UuidV4Source {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_canonical() {
        let id = UuidV4Source.next_id();
        assert_eq!(id.len(), 36);
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.to_string(), id);
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| UuidV4Source.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
