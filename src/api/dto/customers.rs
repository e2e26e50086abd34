/*
 * Responsibility
 * - Customer write form + its rule table
 * - Customer response shapes
 */
use serde::{Deserialize, Serialize};

use crate::api::dto::reservations::ReservationResponse;
use crate::repos::customer_repo::CustomerRow;
use crate::services::validation::{RuleSet, checks};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

pub fn rules() -> RuleSet<CustomerForm> {
    RuleSet::<CustomerForm>::new()
        .rule("firstName", |c| checks::not_blank(&c.first_name), "'First Name' must not be empty.")
        .rule("firstName", |c| checks::min_chars(&c.first_name, 2), "'First Name' must be at least 2 characters long.")
        .rule("firstName", |c| checks::letters_and_spaces(&c.first_name), "'First Name' is not in the correct format.")
        .rule("lastName", |c| checks::not_blank(&c.last_name), "'Last Name' must not be empty.")
        .rule("lastName", |c| checks::min_chars(&c.last_name, 2), "'Last Name' must be at least 2 characters long.")
        .rule("lastName", |c| checks::letters_and_spaces(&c.last_name), "'Last Name' is not in the correct format.")
        .rule("email", |c| checks::not_blank(&c.email), "Email should not be null")
        .rule("email", |c| checks::email(&c.email), "A correct email address should be provided")
        .rule("phoneNumber", |c| checks::not_blank(&c.phone_number), "'Phone Number' must not be empty.")
        .rule("phoneNumber", |c| checks::digits_only(&c.phone_number), "Phone number must be numeric.")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl From<CustomerRow> for CustomerResponse {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_id: row.customer_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone_number: row.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWithListsResponse {
    #[serde(flatten)]
    pub customer: CustomerResponse,
    pub reservations: Vec<ReservationResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CustomerForm {
        CustomerForm {
            first_name: "Mary".into(),
            last_name: "Shelley".into(),
            email: "mary@example.com".into(),
            phone_number: "0123456789".into(),
        }
    }

    #[test]
    fn valid_customer_passes() {
        assert!(rules().validate(&valid()).is_ok());
    }

    #[test]
    fn malformed_email_fails_on_email_only() {
        let form = CustomerForm {
            email: "not-an-email".into(),
            ..valid()
        };
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(
            err.messages_for("email"),
            vec!["A correct email address should be provided"]
        );
        assert_eq!(err.failures().len(), 1);
    }

    #[test]
    fn malformed_email_fails_even_when_everything_else_does() {
        let form = CustomerForm {
            email: "not-an-email".into(),
            ..CustomerForm::default()
        };
        let err = rules().validate(&form).unwrap_err();
        assert!(err.has_field("email"));
        assert!(err.has_field("firstName"));
        assert!(err.has_field("phoneNumber"));
    }

    #[test]
    fn empty_name_reports_every_failing_rule() {
        let form = CustomerForm {
            first_name: String::new(),
            ..valid()
        };
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(err.messages_for("firstName").len(), 3);
    }

    #[test]
    fn names_reject_digits_and_phone_rejects_letters() {
        let form = CustomerForm {
            last_name: "Sh3lley".into(),
            phone_number: "555-0100".into(),
            ..valid()
        };
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(
            err.messages_for("lastName"),
            vec!["'Last Name' is not in the correct format."]
        );
        assert_eq!(
            err.messages_for("phoneNumber"),
            vec!["Phone number must be numeric."]
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let form = CustomerForm {
            email: "a@b@c".into(),
            ..CustomerForm::default()
        };
        let rules = rules();
        assert_eq!(rules.validate(&form), rules.validate(&form));
    }
}
