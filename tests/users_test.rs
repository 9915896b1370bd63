//! User registry tests
//!
//! Tests the five-user cap and the login flow

use ivn::users::{User, UserRegistry, MAX_USERS};

fn user(n: usize) -> User {
    User::new(
        format!("Nombre{}", n),
        format!("Apellido{}", n),
        format!("user{}@example.com", n),
        format!("clave{}", n),
        20 + n as u32,
    )
}

#[test]
fn test_registry_starts_empty() {
    let registry = UserRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.login("user1@example.com", "clave1").is_none());
}

#[test]
fn test_register_up_to_cap() {
    let mut registry = UserRegistry::new();

    for n in 1..=MAX_USERS {
        registry.register(user(n)).expect("Registration under the cap must succeed");
        assert_eq!(registry.len(), n);
    }
}

#[test]
fn test_sixth_user_rejected_and_list_unchanged() {
    let mut registry = UserRegistry::new();
    for n in 1..=MAX_USERS {
        registry.register(user(n)).unwrap();
    }

    let before: Vec<User> = registry.users().to_vec();
    let result = registry.register(user(6));

    assert!(result.is_err());
    assert_eq!(registry.len(), MAX_USERS);
    assert_eq!(registry.users(), before.as_slice());
}

#[test]
fn test_login_requires_exact_match() {
    let mut registry = UserRegistry::new();
    registry.register(user(1)).unwrap();

    let found = registry.login("user1@example.com", "clave1");
    assert_eq!(found.map(|u| u.first_name.as_str()), Some("Nombre1"));

    assert!(registry.login("USER1@example.com", "clave1").is_none());
    assert!(registry.login("user1@example.com", "clave2").is_none());
}

#[test]
fn test_duplicate_emails_are_allowed() {
    // The registry does no uniqueness checking; the first match wins on login
    let mut registry = UserRegistry::new();
    registry.register(user(1)).unwrap();
    let mut twin = user(1);
    twin.first_name = "Otro".to_string();
    registry.register(twin).unwrap();

    assert_eq!(registry.len(), 2);
    let found = registry.login("user1@example.com", "clave1").unwrap();
    assert_eq!(found.first_name, "Nombre1");
}
