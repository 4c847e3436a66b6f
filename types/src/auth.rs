use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The login response carries the bearer token used on every later request.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: SecretString,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Raw register-form state, validated client-side before any request goes out.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// All fields present, password length >= 6, password matches its
    /// confirmation, email contains `@`. Nothing stronger.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if self.username.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err("All fields are required");
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email");
        }
        Ok(RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            username: "jsmith".into(),
            email: "jsmith@corp.example".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
        }
    }

    #[test]
    fn accepts_a_valid_form() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.username, "jsmith");
        assert_eq!(request.email, "jsmith@corp.example");
    }

    #[test]
    fn rejects_missing_fields() {
        let mut form = valid_form();
        form.email.clear();
        assert_eq!(form.validate().unwrap_err(), "All fields are required");
    }

    #[test]
    fn rejects_short_passwords() {
        let mut form = valid_form();
        form.password = "abc".into();
        form.confirm_password = "abc".into();
        assert_eq!(
            form.validate().unwrap_err(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let mut form = valid_form();
        form.confirm_password = "hunter23".into();
        assert_eq!(form.validate().unwrap_err(), "Passwords do not match");
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let mut form = valid_form();
        form.email = "jsmith.corp.example".into();
        assert_eq!(form.validate().unwrap_err(), "Please enter a valid email");
    }
}
