//! Scenario tests for the account crate
//!
//! The flows run against an in-memory repository so registration, login,
//! and session restoration are exercised end to end without a database.

use std::sync::{Arc, Mutex};

use crate::application::config::AccountConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, RestoreSessionUseCase, Session, token,
};
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_role::AccountRole, email::Email, public_id::PublicId};
use crate::error::{AccountError, AccountResult};

/// In-memory stand-in for the Postgres repository. Duplicate detection
/// happens inside `insert`, mirroring how the unique index rejects the
/// losing writer atomically.
#[derive(Clone, Default)]
struct MemoryAccountStore {
    rows: Arc<Mutex<Vec<Account>>>,
}

impl MemoryAccountStore {
    fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl AccountRepository for MemoryAccountStore {
    async fn insert(&self, account: &Account) -> AccountResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.email == account.email) {
            return Err(AccountError::DuplicateEmail);
        }
        rows.push(account.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| &a.email == email).cloned())
    }

    async fn find_by_public_id(&self, public_id: &PublicId) -> AccountResult<Option<Account>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| &a.public_id == public_id).cloned())
    }
}

fn test_config() -> Arc<AccountConfig> {
    Arc::new(AccountConfig::development())
}

fn producer_input(email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        display_name: "Grower One".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        contact_number: "9876543210".to_string(),
        role: AccountRole::Producer,
        region: "Punjab".to_string(),
    }
}

async fn register(
    repo: &Arc<MemoryAccountStore>,
    config: &Arc<AccountConfig>,
    email: &str,
    password: &str,
) -> AccountResult<crate::application::RegisterOutput> {
    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(producer_input(email, password))
        .await
}

async fn restore(
    repo: &Arc<MemoryAccountStore>,
    config: &Arc<AccountConfig>,
    token: Option<&str>,
) -> Session {
    RestoreSessionUseCase::new(repo.clone(), config.clone())
        .execute(token)
        .await
        .expect("in-memory store cannot fail")
}

#[tokio::test]
async fn register_creates_authenticated_session() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    let output = register(&repo, &config, "a@x.com", "pw1").await.unwrap();

    assert_eq!(repo.len(), 1);

    // The issued token resolves straight back to the new account
    let session = restore(&repo, &config, Some(&output.session_token)).await;
    let account = session.account().expect("session should be authenticated");
    assert_eq!(account.public_id.to_string(), output.public_id);
    assert_eq!(account.role, AccountRole::Producer);
}

#[tokio::test]
async fn duplicate_email_rejected_without_second_row() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    let first = register(&repo, &config, "a@x.com", "pw1").await.unwrap();

    let second = register(&repo, &config, "a@x.com", "different").await;
    assert!(matches!(second, Err(AccountError::DuplicateEmail)));
    assert_eq!(repo.len(), 1);

    // The original account and its session are untouched
    let session = restore(&repo, &config, Some(&first.session_token)).await;
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn login_with_wrong_password_fails_undifferentiated() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    register(&repo, &config, "a@x.com", "pw1").await.unwrap();

    let result = LoginUseCase::new(repo.clone(), config.clone())
        .execute(LoginInput {
            email: "a@x.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AccountError::InvalidCredentials)));
}

#[tokio::test]
async fn login_with_unknown_email_fails_identically() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    let result = LoginUseCase::new(repo.clone(), config.clone())
        .execute(LoginInput {
            email: "nobody@x.com".to_string(),
            password: "pw1".to_string(),
        })
        .await;
    // Same outcome as a wrong password: no email enumeration
    assert!(matches!(result, Err(AccountError::InvalidCredentials)));
}

#[tokio::test]
async fn login_binds_session_to_registered_public_id() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    let registered = register(&repo, &config, "a@x.com", "pw1").await.unwrap();

    let login = LoginUseCase::new(repo.clone(), config.clone())
        .execute(LoginInput {
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(login.public_id, registered.public_id);

    let session = restore(&repo, &config, Some(&login.session_token)).await;
    assert_eq!(
        session.account().unwrap().public_id.to_string(),
        registered.public_id
    );
}

#[tokio::test]
async fn forged_token_resolves_to_anonymous() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    register(&repo, &config, "a@x.com", "pw1").await.unwrap();

    // Garbage token
    let session = restore(&repo, &config, Some("not-a-real-token")).await;
    assert!(!session.is_authenticated());

    // Token signed with a different key
    let foreign = token::issue(&PublicId::new(), &[9u8; 32]);
    let session = restore(&repo, &config, Some(&foreign)).await;
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn valid_signature_for_missing_account_is_anonymous() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    // Correctly signed token for an account that does not exist
    let ghost = token::issue(&PublicId::new(), &config.session_secret);
    let session = restore(&repo, &config, Some(&ghost)).await;
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn absent_token_is_anonymous() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    // After logout the channel presents no token
    let session = restore(&repo, &config, None).await;
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn public_ids_carry_no_sequence() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    let a = register(&repo, &config, "a@x.com", "pw1").await.unwrap();
    let b = register(&repo, &config, "b@x.com", "pw2").await.unwrap();

    let a_id: PublicId = a.public_id.parse().unwrap();
    let b_id: PublicId = b.public_id.parse().unwrap();
    assert_ne!(a_id, b_id);
    assert_eq!(a_id.as_uuid().get_version_num(), 4);
    assert_eq!(b_id.as_uuid().get_version_num(), 4);
}

#[tokio::test]
async fn register_rejects_empty_fields() {
    let repo = Arc::new(MemoryAccountStore::default());
    let config = test_config();

    let mut input = producer_input("a@x.com", "pw1");
    input.display_name = "   ".to_string();

    let result = RegisterUseCase::new(repo.clone(), config.clone())
        .execute(input)
        .await;
    assert!(matches!(result, Err(AccountError::Validation(_))));
    assert_eq!(repo.len(), 0);
}
