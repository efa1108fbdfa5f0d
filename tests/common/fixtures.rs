#![allow(dead_code)]

use call_center::model::{IssueDraft, Status};

/// Minimal valid draft for a customer/date pair.
pub fn draft(customer: &str, date: &str) -> IssueDraft {
    IssueDraft {
        customer_name: customer.to_string(),
        issue_date: date.to_string(),
        ..Default::default()
    }
}

/// Draft with an explicit status.
pub fn draft_with_status(customer: &str, date: &str, status: Status) -> IssueDraft {
    IssueDraft {
        status: Some(status),
        ..draft(customer, date)
    }
}

/// Fully populated draft for round-trip assertions.
pub fn full_draft(customer: &str, date: &str) -> IssueDraft {
    IssueDraft {
        customer_name: customer.to_string(),
        issue_date: date.to_string(),
        program_name: Some("Billing".to_string()),
        customer_email: Some("customer@example.com".to_string()),
        customer_phone: Some("555-0100".to_string()),
        issue_detail: Some("Charged twice for the same invoice".to_string()),
        status: Some(Status::Open),
    }
}
