//! Login and signup form validation
//!
//! Runs before the credentials are handed to the external auth API. Each
//! field reports its first failing rule, in the order the form shows them.

use crate::error::{Result, ValidationErrors};
use serde::Deserialize;

/// Minimum password length on signup
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Unvalidated signup form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDraft {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
}

/// Signup input accepted by the create-user call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupFields {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupDraft {
    pub fn validate(&self) -> Result<SignupFields> {
        let mut errors = ValidationErrors::new();

        if self.email.is_empty() {
            errors.add("email", "이메일을 입력해주세요");
        } else if !self.email.contains('@') {
            errors.add("email", "이메일에 '@'가 포함되어야 합니다");
        } else if !is_email(&self.email) {
            errors.add("email", "올바른 이메일 형식을 입력해주세요");
        }

        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.add("password", "비밀번호는 8자 이상이어야 합니다");
        } else if !has_letter_and_digit(&self.password) {
            errors.add("password", "영문과 숫자를 포함해야 합니다");
        }

        if self.password_confirm.is_empty() {
            errors.add("passwordConfirm", "비밀번호 확인을 입력해주세요");
        } else if self.password_confirm != self.password {
            errors.add("passwordConfirm", "비밀번호가 일치하지 않습니다");
        }

        if self.name.is_empty() {
            errors.add("name", "이름을 입력해주세요");
        }

        errors.into_result()?;

        Ok(SignupFields {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
        })
    }
}

/// Unvalidated login form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();

        if self.email.is_empty() {
            errors.add("email", "이메일을 입력해주세요");
        } else if !is_email(&self.email) {
            errors.add("email", "올바른 이메일 형식이 아닙니다");
        }

        if self.password.is_empty() {
            errors.add("password", "비밀번호를 입력해주세요");
        }

        errors.into_result()
    }
}

/// `local@domain.tld` with no whitespace and a single `@`
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

fn has_letter_and_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphabetic()) && value.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn signup(email: &str, password: &str, confirm: &str, name: &str) -> SignupDraft {
        SignupDraft {
            email: email.to_string(),
            password: password.to_string(),
            password_confirm: confirm.to_string(),
            name: name.to_string(),
        }
    }

    fn field_errors(result: Result<impl std::fmt::Debug>) -> ValidationErrors {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_signup_reports_every_field() {
        let errors = field_errors(SignupDraft::default().validate());

        assert_eq!(errors.get("email"), Some("이메일을 입력해주세요"));
        assert_eq!(errors.get("password"), Some("비밀번호는 8자 이상이어야 합니다"));
        assert_eq!(errors.get("passwordConfirm"), Some("비밀번호 확인을 입력해주세요"));
        assert_eq!(errors.get("name"), Some("이름을 입력해주세요"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_signup_email_rules_in_order() {
        let missing_at = field_errors(signup("writer.example.com", "abcd1234", "abcd1234", "w").validate());
        assert_eq!(missing_at.get("email"), Some("이메일에 '@'가 포함되어야 합니다"));
        assert_eq!(missing_at.len(), 1);

        for bad in ["writer@example", "@example.com", "writer@.com", "wri ter@example.com", "a@b@c.com"] {
            let errors = field_errors(signup(bad, "abcd1234", "abcd1234", "w").validate());
            assert_eq!(errors.get("email"), Some("올바른 이메일 형식을 입력해주세요"), "{}", bad);
        }
    }

    #[test]
    fn test_signup_password_rules() {
        let short = field_errors(signup("w@example.com", "abc123", "abc123", "w").validate());
        assert_eq!(short.get("password"), Some("비밀번호는 8자 이상이어야 합니다"));

        let letters_only = field_errors(signup("w@example.com", "abcdefgh", "abcdefgh", "w").validate());
        assert_eq!(letters_only.get("password"), Some("영문과 숫자를 포함해야 합니다"));

        let digits_only = field_errors(signup("w@example.com", "12345678", "12345678", "w").validate());
        assert_eq!(digits_only.get("password"), Some("영문과 숫자를 포함해야 합니다"));
    }

    #[test]
    fn test_signup_confirmation_mismatch() {
        let errors = field_errors(signup("w@example.com", "abcd1234", "abcd12345", "w").validate());

        assert_eq!(errors.get("passwordConfirm"), Some("비밀번호가 일치하지 않습니다"));
        assert_eq!(errors.get("password"), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_valid_signup_returns_fields() {
        let fields = signup("writer@example.com", "diary2024", "diary2024", "작가")
            .validate()
            .unwrap();

        assert_eq!(
            fields,
            SignupFields {
                email: "writer@example.com".to_string(),
                password: "diary2024".to_string(),
                name: "작가".to_string(),
            }
        );
    }

    #[test]
    fn test_signup_form_reads_camel_case() {
        let draft: SignupDraft = serde_json::from_str(
            r#"{"email":"w@example.com","password":"abcd1234","passwordConfirm":"abcd1234","name":"w"}"#,
        )
        .unwrap();

        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_login_rules() {
        let empty = field_errors(LoginDraft::default().validate());
        assert_eq!(empty.get("email"), Some("이메일을 입력해주세요"));
        assert_eq!(empty.get("password"), Some("비밀번호를 입력해주세요"));

        let bad_email = field_errors(LoginDraft::new("writer", "secret").validate());
        assert_eq!(bad_email.get("email"), Some("올바른 이메일 형식이 아닙니다"));
        assert_eq!(bad_email.get("password"), None);

        // Login does not re-check password strength
        assert!(LoginDraft::new("writer@example.com", "x").validate().is_ok());
    }
}
