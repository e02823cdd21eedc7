use tracing::info;

use crate::{
    credentials::CredentialHasher,
    error::SeedResult,
    models::{Address, NewUser, PostalAddress, Role},
    store::SeedStore,
};

/// A candidate user with a plaintext password, hashed only if it gets inserted.
#[derive(Debug, Clone)]
pub struct UserSeed {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: String,
    pub addresses: Vec<Address>,
}

impl UserSeed {
    pub fn into_new_user(self, password_hash: String) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            password_hash,
            role: self.role,
            phone: self.phone,
            addresses: self.addresses,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Two customers and one admin, each with a single default address.
pub fn demo_users() -> Vec<UserSeed> {
    vec![
        user_seed(
            "John Doe",
            "john@example.com",
            "Password@123",
            Role::Customer,
            "+91-9876543210",
            ("Home", "221B Baker Street", "London", "London", "NW16XE", "UK"),
        ),
        user_seed(
            "Jane Smith",
            "jane@example.com",
            "Password@123",
            Role::Customer,
            "+91-9123456780",
            ("Home", "45 Business Ave", "London", "London", "NW17TR", "UK"),
        ),
        user_seed(
            "Admin User",
            "admin@example.com",
            "Admin@1234",
            Role::Admin,
            "+91-9000000000",
            ("Office", "1 Admin Way", "Pune", "MH", "411001", "IN"),
        ),
    ]
}

fn user_seed(
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    phone: &str,
    (label, street, city, state, postal_code, country): (&str, &str, &str, &str, &str, &str),
) -> UserSeed {
    UserSeed {
        name: name.into(),
        email: email.into(),
        password: password.into(),
        role,
        phone: phone.into(),
        addresses: vec![Address {
            label: label.into(),
            postal: PostalAddress {
                street: street.into(),
                city: city.into(),
                state: state.into(),
                postal_code: postal_code.into(),
                country: country.into(),
            },
            is_default: true,
        }],
    }
}

/// Inserts every candidate whose email is not already stored, in list order.
///
/// Existing users are left untouched. There is no rollback: if candidate N
/// fails, candidates before it stay committed.
pub async fn seed_users<S, H>(
    store: &S,
    hasher: &H,
    candidates: Vec<UserSeed>,
) -> SeedResult<SeedReport>
where
    S: SeedStore,
    H: CredentialHasher,
{
    let mut report = SeedReport::default();

    for candidate in candidates {
        if store.find_user_by_email(&candidate.email).await?.is_some() {
            info!(email = %candidate.email, "Skipping existing user");
            report.skipped += 1;
            continue;
        }

        let password_hash = hasher.hash(&candidate.password)?;
        let user = store.insert_user(candidate.into_new_user(password_hash)).await?;
        info!(email = %user.email, user_id = %user.id, "Inserted user");
        report.inserted += 1;
    }

    info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "User seeding complete"
    );
    Ok(report)
}
