use async_trait::async_trait;
use std::rc::Rc;

use crate::api::{ApiClient, SignInError, SignInRequest};
use crate::state::sign_in::AuthService;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthService for LoginRepository {
    async fn sign_in(&self, request: SignInRequest) -> Result<(), SignInError> {
        self.client.sign_in(&request).await
    }
}
