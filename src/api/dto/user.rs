//! DTOs for user endpoints.

use serde::Deserialize;

use crate::domain::entities::NewUser;

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// An `id` field, if sent, is ignored: ids are assigned by the store and are
/// immutable.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
}

impl From<UserRequest> for NewUser {
    fn from(req: UserRequest) -> Self {
        NewUser::new(req.name, req.email)
    }
}
