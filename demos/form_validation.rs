//! Form validation example - every field problem reported at once
//!
//! Run with: cargo run --example form_validation

use accrue::prelude::*;

// Domain types
#[derive(Debug, Clone, PartialEq)]
struct Email(String);

#[derive(Debug, Clone, PartialEq)]
struct Password(String);

#[derive(Debug, Clone, PartialEq)]
struct Age(u8);

#[derive(Debug, PartialEq)]
struct User {
    email: Email,
    password: Password,
    age: Age,
}

// Raw input from form
struct SignupForm {
    email: String,
    password: String,
    password_confirm: String,
    age: String,
}

// Validation errors
#[derive(Debug, Clone, PartialEq)]
enum SignupError {
    InvalidEmail { value: String, reason: &'static str },
    PasswordTooShort { min_length: usize },
    PasswordMismatch,
    InvalidAge { value: String },
    AgeTooYoung { age: u8, minimum: u8 },
}

type Checked<T> = Or<T, Every<SignupError>>;

const MIN_PASSWORD: usize = 8;
const MIN_AGE: u8 = 18;

fn validate_email(email: &str) -> Checked<Email> {
    let reason = if email.is_empty() {
        Some("Email cannot be empty")
    } else if !email.contains('@') || !email.contains('.') {
        Some("Email must contain @ and a domain")
    } else {
        None
    };

    match reason {
        None => Or::Good(Email(email.to_string())),
        Some(reason) => Or::Bad(every![SignupError::InvalidEmail {
            value: email.to_string(),
            reason,
        }]),
    }
}

#[allow(clippy::ptr_arg)]
fn long_enough(password: &String) -> Validation<SignupError> {
    Validation::check(password.len() >= MIN_PASSWORD, || {
        SignupError::PasswordTooShort {
            min_length: MIN_PASSWORD,
        }
    })
}

fn validate_password(password: &str, confirm: &str) -> Checked<Password> {
    let confirmed = password == confirm;
    let matches = move |_: &String| Validation::check(confirmed, || SignupError::PasswordMismatch);

    // Both checks always run
    let checks: [Box<dyn Fn(&String) -> Validation<SignupError>>; 2] =
        [Box::new(long_enough), Box::new(matches)];
    Or::<String, Every<SignupError>>::Good(password.to_string())
        .when(checks)
        .map(Password)
}

fn validate_age(age: &str) -> Checked<Age> {
    let parsed: Or<u8, SignupError> = Or::from_result(age.trim().parse::<u8>())
        .bad_map(|_| SignupError::InvalidAge {
            value: age.to_string(),
        });

    parsed
        .accumulating()
        .when([|age: &u8| {
            Validation::check(*age >= MIN_AGE, || SignupError::AgeTooYoung {
                age: *age,
                minimum: MIN_AGE,
            })
        }])
        .map(Age)
}

fn validate_form(form: &SignupForm) -> Checked<User> {
    with_good(
        (
            validate_email(&form.email),
            validate_password(&form.password, &form.password_confirm),
            validate_age(&form.age),
        ),
        |email: Email, password: Password, age: Age| User {
            email,
            password,
            age,
        },
    )
}

fn report(label: &str, form: &SignupForm) {
    println!("{}:", label);
    match validate_form(form) {
        Or::Good(user) => println!("  accepted {:?}", user),
        Or::Bad(errors) => {
            println!("  rejected with {} error(s)", errors.len());
            for error in &errors {
                println!("  - {:?}", error);
            }
        }
    }
}

fn main() {
    report(
        "Valid form",
        &SignupForm {
            email: "ada@example.com".to_string(),
            password: "analytical-engine".to_string(),
            password_confirm: "analytical-engine".to_string(),
            age: "36".to_string(),
        },
    );

    report(
        "Everything wrong",
        &SignupForm {
            email: "ada".to_string(),
            password: "short".to_string(),
            password_confirm: "shorter".to_string(),
            age: "12".to_string(),
        },
    );

    report(
        "Unparseable age",
        &SignupForm {
            email: "ada@example.com".to_string(),
            password: "analytical-engine".to_string(),
            password_confirm: "analytical-engine".to_string(),
            age: "thirty".to_string(),
        },
    );
}
