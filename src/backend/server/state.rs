/**
 * Application State Management
 *
 * `AppState` holds the components shared by every request. The `FromRef`
 * implementations let handlers and middleware extract only the part they
 * need, e.g. `State<AccountService>` or `State<TokenIssuer>`.
 */

use axum::extract::FromRef;

use crate::backend::auth::service::AccountService;
use crate::backend::auth::sessions::TokenIssuer;

/// Application state
///
/// Both fields are cheap to clone: the service wraps a pooled database
/// handle and the token issuer shares its keys behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Registration, login and profile operations
    pub accounts: AccountService,

    /// Verifies bearer tokens for the auth middleware
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(accounts: AccountService, tokens: TokenIssuer) -> Self {
        Self { accounts, tokens }
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(state: &AppState) -> Self {
        state.accounts.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
