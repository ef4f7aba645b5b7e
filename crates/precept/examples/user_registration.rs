//! Validating a registration form in one batch, so the caller sees every
//! problem at once.

use precept::{ValidationFailure, check};

#[derive(Debug)]
#[allow(dead_code)]
struct Registration {
    username: String,
    email: String,
    password: String,
    display_name: Option<String>,
    interests: Vec<String>,
}

impl Registration {
    fn new(
        username: &str,
        email: &str,
        password: &str,
        display_name: Option<&str>,
        interests: Vec<String>,
    ) -> Result<Self, ValidationFailure> {
        let display_name = display_name.map(str::to_string);

        let mut checks = check();
        checks
            .has_length(username, 3, 30, "username")
            .matches(email, r"(?i)[\w._%+-]+@[\w.-]+\.[A-Z]{2,}", "email")
            .has_length(password, 8, 100, "password")
            .assert_true_with(password.chars().any(char::is_uppercase), || {
                "password must contain an uppercase letter".to_string()
            })
            .null_or_not_blank(&display_name, "display_name")
            .has_size(&interests, 1, 10, "interests");
        checks.validate()?;

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            display_name,
            interests,
        })
    }
}

fn main() {
    let valid = Registration::new(
        "john_doe",
        "john@example.com",
        "StrongPass123",
        None,
        vec!["coding".into(), "music".into()],
    );
    println!("valid registration: {valid:?}");

    let invalid = Registration::new("ab", "invalid-email", "weak", Some("  "), vec![]);
    match invalid {
        Ok(_) => unreachable!("registration should have failed"),
        Err(failure) => {
            println!("rejected with {} problems:", failure.errors().len());
            for error in failure.errors() {
                println!("  - {error}");
            }
        }
    }
}
