//! Single-pass resolution of registration numbers against the table.

use crate::registry::{RegistrationRecord, Registry};
use log::debug;
use std::collections::BTreeMap;

/// Credential pair for the registry service interface.
///
/// Callers pass a username and password for compatibility with credentialed
/// registry clients. Resolution never consults them: lookups run entirely
/// against the bundled table and no authentication is attempted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Resolves registration numbers with exact string-equality lookups.
#[derive(Debug)]
pub struct LookupResolver {
    registry: Registry,
    credentials: Credentials,
}

impl LookupResolver {
    pub fn new(registry: Registry, credentials: Credentials) -> Self {
        Self {
            registry,
            credentials,
        }
    }

    /// The credential pair the resolver was constructed with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Resolve each requested number to its record.
    ///
    /// Every requested number appears exactly once as a key in the result,
    /// mapped to the table record when present and to an empty record
    /// otherwise. Duplicate inputs collapse to a single key.
    pub fn resolve(&self, reg_nums: &[String]) -> BTreeMap<String, RegistrationRecord> {
        debug!(
            "Resolving {} registration number(s) as user '{}'",
            reg_nums.len(),
            self.credentials.username
        );

        let mut results = BTreeMap::new();
        for reg_num in reg_nums {
            let record = match self.registry.get(reg_num) {
                Some(record) => record.clone(),
                None => {
                    debug!("No table entry for registration number '{}'", reg_num);
                    RegistrationRecord::empty()
                }
            };
            results.insert(reg_num.clone(), record);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_resolver() -> LookupResolver {
        LookupResolver::new(
            Registry::bundled(),
            Credentials {
                username: "user".to_string(),
                password: "secret".to_string(),
            },
        )
    }

    #[test]
    fn test_known_number_resolves_to_table_record() {
        let resolver = test_resolver();
        let results = resolver.resolve(&["40003026637".to_string()]);

        assert_eq!(results.len(), 1);
        assert_eq!(
            results.get("40003026637"),
            Some(&RegistrationRecord::with_winner_reg_date("20.07.2004"))
        );
    }

    #[test]
    fn test_unknown_number_resolves_to_empty_record() {
        let resolver = test_resolver();
        let results = resolver.resolve(&["99999999999".to_string()]);

        assert_eq!(results.len(), 1);
        assert_eq!(results.get("99999999999"), Some(&RegistrationRecord::empty()));
    }

    #[test]
    fn test_empty_input_yields_empty_mapping() {
        let resolver = test_resolver();
        assert!(resolver.resolve(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_inputs_collapse_to_one_key() {
        let resolver = test_resolver();
        let results = resolver.resolve(&[
            "40003026637".to_string(),
            "40003026637".to_string(),
        ]);

        assert_eq!(results.len(), 1);
        assert_eq!(
            results.get("40003026637"),
            Some(&RegistrationRecord::with_winner_reg_date("20.07.2004"))
        );
    }

    #[test]
    fn test_credentials_do_not_affect_resolution() {
        let with_creds = test_resolver();
        let without_creds = LookupResolver::new(
            Registry::bundled(),
            Credentials {
                username: String::new(),
                password: String::new(),
            },
        );

        let reg_nums = vec!["40003026637".to_string(), "99999999999".to_string()];
        assert_eq!(with_creds.resolve(&reg_nums), without_creds.resolve(&reg_nums));
    }
}
