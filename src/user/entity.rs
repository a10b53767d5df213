use crate::actor_framework::Entity;
use crate::domain::User;

impl Entity for User {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    /// A persisted user always has a non-empty id, name and email.
    fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("id is empty".to_string());
        }
        if self.name.is_empty() {
            return Err("name is empty".to_string());
        }
        if self.email.is_empty() {
            return Err("email is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_identity_fields() {
        assert!(User::from_signup("u1", "Ana", "ana@x.com").validate().is_ok());
        assert_eq!(
            User::from_signup("", "Ana", "ana@x.com").validate(),
            Err("id is empty".to_string())
        );
        assert_eq!(
            User::from_signup("u1", "Ana", "").validate(),
            Err("email is empty".to_string())
        );
    }
}
