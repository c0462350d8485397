//! Account operations
//!
//! Runs login and registration against the account store.

use log::{info, warn};

use crate::auth::credentials::match_credentials;
use crate::auth::results::{LoginResult, RegisterResult};
use crate::auth::validator::validate_registration;
use crate::error::StoreError;
use crate::storage::{AccountStore, NewUser};

/// Looks up the account for `email` and matches the password against it.
pub async fn login(
    accounts: &dyn AccountStore,
    email: &str,
    password: &str,
) -> Result<LoginResult, StoreError> {
    let user = accounts.find_user_by_email(email).await?;
    let result = match_credentials(user, password);

    match &result {
        LoginResult::Authenticated(_) => info!("Login succeeded for {}", email),
        LoginResult::PasswordMismatch => warn!("Password mismatch for {}", email),
        LoginResult::UserNotFound => warn!("Login attempt for unregistered email {}", email),
    }

    Ok(result)
}

/// Registers a new account.
///
/// An existing account for `email` is reported before any field is
/// validated. Fields are stored as given, with no normalization.
pub async fn register(
    accounts: &dyn AccountStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterResult, StoreError> {
    if accounts.find_user_by_email(email).await?.is_some() {
        warn!("Registration rejected: {} already registered", email);
        return Ok(RegisterResult::AlreadyExists);
    }

    if let Err(reason) = validate_registration(name, email, password) {
        warn!("Registration rejected for {}: {}", email, reason);
        return Ok(RegisterResult::Rejected(reason));
    }

    let new_user = NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    match accounts.save_user(new_user).await {
        Ok(user) => {
            info!("Registered {} ({})", user.email, user.id);
            Ok(RegisterResult::Registered(user))
        }
        // Lost a race with a concurrent registration for the same email.
        Err(StoreError::DuplicateEmail(email)) => {
            warn!("Registration rejected: {} already registered", email);
            Ok(RegisterResult::AlreadyExists)
        }
        Err(e) => Err(e),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::storage::MemoryStore;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn registering_twice_keeps_one_account(
            name in "[A-Za-z ]{0,12}",
            password in "[A-Za-z0-9!#]{0,14}",
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            let (second, count) = runtime.block_on(async {
                let store = MemoryStore::new();
                register(&store, &name, "ann@x.co", &password).await.unwrap();
                let second = register(&store, &name, "ann@x.co", &password).await.unwrap();
                (second, store.user_count().await)
            });

            // a rejected first attempt stores nothing, so the retry is rejected too
            prop_assert!(count <= 1);
            if count == 1 {
                prop_assert_eq!(second, RegisterResult::AlreadyExists);
            }
        }

        #[test]
        fn registering_a_valid_account_twice_conflicts(
            name in "[A-Za-z ]{0,12}",
            password in "[a-z]{3}[A-Z]{2}[0-9]{2}[!#@]",
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            let (second, count) = runtime.block_on(async {
                let store = MemoryStore::new();
                register(&store, &name, "ann@x.co", &password).await.unwrap();
                let second = register(&store, &name, "ann@x.co", &password).await.unwrap();
                (second, store.user_count().await)
            });

            prop_assert_eq!(second, RegisterResult::AlreadyExists);
            prop_assert_eq!(count, 1);
        }
    }
}
