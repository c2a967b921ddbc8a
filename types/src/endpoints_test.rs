use super::*;

#[test]
fn account_paths_embed_ids() {
    assert_eq!(accounts_by_user("u-1"), "/accounts/user/u-1");
    assert_eq!(account("a-9"), "/accounts/a-9");
    assert_eq!(account_balance("a-9"), "/accounts/a-9/balance");
}

#[test]
fn transaction_history_path_embeds_account() {
    assert_eq!(transaction_history("a-9"), "/transactions/account/a-9");
}

#[test]
fn join_handles_trailing_and_leading_slashes() {
    assert_eq!(join("http://localhost:8080/api/", "/accounts"), "http://localhost:8080/api/accounts");
    assert_eq!(join("/api", "auth/login"), "/api/auth/login");
    assert_eq!(join("/api", DEPOSIT), "/api/transactions/deposit");
}
