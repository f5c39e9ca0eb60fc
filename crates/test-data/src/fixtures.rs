//! The fixed sample rows inserted by the seed.
//!
//! The user id refers to an auth identity that must already exist (created
//! through the Supabase dashboard or Admin API); nothing here creates it.

use uuid::Uuid;

use trainu::models::{Trainer, UserExt, UserRole};

/// `00000000-0000-0000-0000-000000000001`
pub const SAMPLE_USER_ID: Uuid = Uuid::from_u128(1);

pub fn sample_user_ext() -> UserExt {
    UserExt {
        user_id: SAMPLE_USER_ID,
        role: UserRole::Trainer,
        ghl_contact_id: "sample-contact-1".to_string(),
    }
}

pub fn sample_trainer() -> Trainer {
    Trainer {
        user_id: SAMPLE_USER_ID,
        slug: "alex-strong".to_string(),
        first_name: "Alex".to_string(),
        last_name: "Strong".to_string(),
        city: "Chicago".to_string(),
        state: "IL".to_string(),
        specialties: vec!["powerlifting".to_string(), "youth".to_string()],
        accepts_minors: true,
        profile_photo_url: None,
    }
}
