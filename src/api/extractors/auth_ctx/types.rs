/*
 * Responsibility
 * - The authenticated-request context seen by handlers
 * - The access middleware verifies the token and stores this in request extensions;
 *   handlers only ever receive this type
 */

use std::fmt;

/// Context attached to an authenticated request.
///
/// - `employee_id` is the token subject
/// - names come from the `given_name` / `family_name` claims when present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub employee_id: i32,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

impl AuthCtx {
    pub fn new(employee_id: i32) -> Self {
        Self {
            employee_id,
            given_name: None,
            family_name: None,
        }
    }

    pub fn with_names(mut self, given_name: Option<String>, family_name: Option<String>) -> Self {
        self.given_name = given_name;
        self.family_name = family_name;
        self
    }
}

/// "Given Family" when the token carried names, otherwise "employee {id}".
impl fmt::Display for AuthCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.given_name.as_deref(), self.family_name.as_deref()) {
            (Some(given), Some(family)) => write!(f, "{given} {family}"),
            (Some(name), None) | (None, Some(name)) => f.write_str(name),
            (None, None) => write!(f, "employee {}", self.employee_id),
        }
    }
}
